//! High-level operations.
//!
//! Entry points that turn packages and descriptors into manifest text.

pub mod generate;

pub use generate::{
    generate_from_file, generate_from_json, generate_from_toml, generate_manifest,
    load_descriptor,
};
