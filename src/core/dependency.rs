//! Package dependencies.
//!
//! A dependency points at another package either by local path or by remote
//! URL. Remote dependencies may carry a version constraint, compiled by
//! [`crate::core::constraint::compile`] at render time.

use serde::{Deserialize, Serialize};

use crate::core::constraint;
use crate::util::list::NodeList;
use crate::util::render::{quoted, Arguments, Render};

/// Where a dependency is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyLocation {
    /// Local package directory
    Path(String),
    /// Remote repository URL
    Url(String),
}

/// A dependency on another package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDependency {
    /// Path or URL
    #[serde(flatten)]
    pub location: DependencyLocation,

    /// Free-form version constraint, e.g. `1.2.3` or `1.0.0..<2.0.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PackageDependency {
    /// Create a dependency on a local package.
    pub fn path(path: impl Into<String>) -> Self {
        PackageDependency {
            location: DependencyLocation::Path(path.into()),
            version: None,
        }
    }

    /// Create a dependency on a remote package.
    pub fn url(url: impl Into<String>) -> Self {
        PackageDependency {
            location: DependencyLocation::Url(url.into()),
            version: None,
        }
    }

    /// Set the version constraint.
    pub fn version(&mut self, constraint: impl Into<String>) -> &mut Self {
        self.version = Some(constraint.into());
        self
    }

    /// Check if this is a local path dependency.
    pub fn is_path(&self) -> bool {
        matches!(self.location, DependencyLocation::Path(_))
    }

    /// Compiled requirement expression, if a constraint is set.
    pub fn requirement(&self) -> Option<String> {
        self.version.as_deref().map(constraint::compile)
    }
}

impl Render for PackageDependency {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        match &self.location {
            DependencyLocation::Path(path) => args.labeled("path", quoted(path)),
            DependencyLocation::Url(url) => args.labeled("url", quoted(url)),
        };
        if let Some(requirement) = self.requirement() {
            args.push(requirement);
        }
        args.into_call(".package")
    }
}

/// Ordered list of package dependencies.
pub type PackageDependencyList = NodeList<PackageDependency>;

impl NodeList<PackageDependency> {
    /// Append a local path dependency.
    pub fn path(&mut self, path: impl Into<String>) -> &mut PackageDependency {
        self.push(PackageDependency::path(path))
    }

    /// Append a remote dependency; chain `.version(..)` to constrain it.
    pub fn url(&mut self, url: impl Into<String>) -> &mut PackageDependency {
        self.push(PackageDependency::url(url))
    }
}
