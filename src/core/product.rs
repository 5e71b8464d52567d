//! Products a package vends to its clients.

use serde::{Deserialize, Serialize};

use crate::util::list::{owned_strings, NodeList};
use crate::util::render::{quoted, quoted_list, Arguments, Render};
use crate::util::symbol::symbolic_enum;

symbolic_enum! {
    /// Linkage of a library product.
    pub enum Linkage {
        Static => "static",
        Dynamic => "dynamic",
    }
}

/// A build product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Product {
    Library {
        name: String,
        /// Absent lets the build system pick the linkage
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        linkage: Option<Linkage>,
        #[serde(default)]
        targets: Vec<String>,
    },
    Executable {
        name: String,
        #[serde(default)]
        targets: Vec<String>,
    },
    Plugin {
        name: String,
        #[serde(default)]
        targets: Vec<String>,
    },
}

impl Product {
    /// Get the product name.
    pub fn name(&self) -> &str {
        match self {
            Product::Library { name, .. }
            | Product::Executable { name, .. }
            | Product::Plugin { name, .. } => name,
        }
    }

    /// Get the names of the targets bundled into this product.
    pub fn targets(&self) -> &[String] {
        match self {
            Product::Library { targets, .. }
            | Product::Executable { targets, .. }
            | Product::Plugin { targets, .. } => targets,
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Product::Library { .. } => ".library",
            Product::Executable { .. } => ".executable",
            Product::Plugin { .. } => ".plugin",
        }
    }
}

impl Render for Product {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        args.labeled("name", quoted(self.name()));
        if let Product::Library {
            linkage: Some(linkage),
            ..
        } = self
        {
            args.labeled("type", linkage.render());
        }
        args.labeled("targets", quoted_list(self.targets()));
        args.into_inline_call(self.keyword())
    }
}

/// Ordered list of products.
pub type ProductList = NodeList<Product>;

impl NodeList<Product> {
    /// Append a library product with automatic linkage.
    pub fn library<I, S>(&mut self, name: impl Into<String>, targets: I) -> &mut Product
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Product::Library {
            name: name.into(),
            linkage: None,
            targets: owned_strings(targets),
        })
    }

    /// Append a library product with explicit linkage.
    pub fn library_with_linkage<I, S>(
        &mut self,
        name: impl Into<String>,
        linkage: Linkage,
        targets: I,
    ) -> &mut Product
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Product::Library {
            name: name.into(),
            linkage: Some(linkage),
            targets: owned_strings(targets),
        })
    }

    /// Append an executable product.
    pub fn executable<I, S>(&mut self, name: impl Into<String>, targets: I) -> &mut Product
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Product::Executable {
            name: name.into(),
            targets: owned_strings(targets),
        })
    }

    /// Append a plugin product.
    pub fn plugin<I, S>(&mut self, name: impl Into<String>, targets: I) -> &mut Product
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Product::Plugin {
            name: name.into(),
            targets: owned_strings(targets),
        })
    }
}
