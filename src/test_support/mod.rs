//! Test utilities for unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{init_tracing, sample_package};
//!
//! #[test]
//! fn test_example() {
//!     init_tracing();
//!     let package = sample_package();
//!     // Render and assert...
//! }
//! ```

pub mod fixtures;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

// Re-export fixtures for convenience
pub use fixtures::*;

static INIT: Once = Once::new();

/// Install a fmt subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; defaults to `debug` for this crate. Safe to call from
/// every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spm_manifest=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::DescriptorFormat;
    use crate::util::render::Render;

    #[test]
    fn test_init_tracing_is_reentrant() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn test_fixture_descriptors_agree() {
        let from_toml = DescriptorFormat::Toml
            .parse(fixture_descriptor_toml())
            .unwrap();
        let from_json = DescriptorFormat::Json
            .parse(fixture_descriptor_json())
            .unwrap();
        assert_eq!(from_toml.render(), from_json.render());
    }

    #[test]
    fn test_sample_package_is_populated() {
        let package = sample_package();
        assert!(!package.platforms.is_empty());
        assert!(!package.products.is_empty());
        assert!(!package.dependencies.is_empty());
        assert!(!package.targets.is_empty());
    }
}
