//! Generate `Package.swift` text from a package or a descriptor.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::package::Package;

/// Load a `.toml` or `.json` package descriptor.
pub fn load_descriptor(path: &Path) -> Result<Package> {
    Package::from_descriptor_file(path)
        .with_context(|| format!("failed to load package descriptor: {}", path.display()))
}

/// Render the complete manifest document for a package.
pub fn generate_manifest(package: &Package) -> String {
    package.render_document()
}

/// Parse a TOML descriptor and render its manifest document.
pub fn generate_from_toml(content: &str) -> Result<String> {
    let package = Package::from_toml_str(content).context("invalid TOML package descriptor")?;
    Ok(generate_manifest(&package))
}

/// Parse a JSON descriptor and render its manifest document.
pub fn generate_from_json(content: &str) -> Result<String> {
    let package = Package::from_json_str(content).context("invalid JSON package descriptor")?;
    Ok(generate_manifest(&package))
}

/// Load a descriptor file and render its manifest document.
pub fn generate_from_file(path: &Path) -> Result<String> {
    let package = load_descriptor(path)?;
    Ok(generate_manifest(&package))
}
