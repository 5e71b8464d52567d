//! Shared utilities

pub mod list;
pub mod render;
pub mod symbol;

pub use list::NodeList;
pub use render::Render;
pub use symbol::UnknownSymbol;
