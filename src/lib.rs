//! spm-manifest - Swift package manifest generation
//!
//! This crate builds an in-memory description of a Swift package and renders
//! it as `Package.swift` source text. Packages are configured through nested
//! closures, or loaded from a TOML/JSON descriptor.
//!
//! ```rust
//! use spm_manifest::{swift_package, IosVersion, Render, SourceLayer};
//!
//! let package = swift_package("Demo", |p| {
//!     p.platforms(|platforms| {
//!         platforms.ios().version(IosVersion::V13);
//!     });
//!     p.products(|products| {
//!         products.library("Demo", ["Demo"]);
//!     });
//!     p.targets(|targets| {
//!         targets.target("Demo", |t| {
//!             t.dependencies_named(["Utils"]);
//!         });
//!     });
//! });
//!
//! assert!(package.render().starts_with("Package(\n\tname: \"Demo\""));
//! ```

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{
    package::{swift_package, Package},
    platform::{
        DriverKitVersion, IosVersion, MacCatalystVersion, MacOsVersion, TvOsVersion,
        VisionOsVersion, WatchOsVersion,
    },
    target::{BaseLayer, SettingsLayer, SourceLayer, Target},
    DescriptorError,
};
pub use util::Render;
