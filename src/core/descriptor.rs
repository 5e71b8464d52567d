//! Declarative package descriptors.
//!
//! A descriptor is a TOML or JSON document with the same shape as
//! [`Package`]. Loading one yields the same object graph the closure API
//! builds.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::package::Package;

/// Errors from reading or parsing a descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to parse TOML descriptor")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON descriptor")]
    Json(#[from] serde_json::Error),

    #[error("unsupported descriptor `{}`, expected a .toml or .json file", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("failed to read descriptor {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Descriptor file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Toml,
    Json,
}

impl DescriptorFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, DescriptorError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(DescriptorFormat::Toml),
            Some("json") => Ok(DescriptorFormat::Json),
            _ => Err(DescriptorError::UnsupportedExtension(path.to_path_buf())),
        }
    }

    pub fn parse(self, content: &str) -> Result<Package, DescriptorError> {
        match self {
            DescriptorFormat::Toml => Package::from_toml_str(content),
            DescriptorFormat::Json => Package::from_json_str(content),
        }
    }
}

impl Package {
    pub fn from_toml_str(content: &str) -> Result<Self, DescriptorError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a descriptor file, choosing the format by extension.
    pub fn from_descriptor_file(path: &Path) -> Result<Self, DescriptorError> {
        let format = DescriptorFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let package = format.parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            name = %package.name,
            targets = package.targets.len(),
            "loaded package descriptor"
        );
        Ok(package)
    }

    /// Snapshot the object model as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, DescriptorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
