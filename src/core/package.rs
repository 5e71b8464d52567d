//! Package - the root of a manifest.
//!
//! A `Package` owns the top-level collections (platforms, products,
//! dependencies, targets, language versions) and renders the `Package(...)`
//! call, either bare or as a complete `Package.swift` document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::dependency::PackageDependencyList;
use crate::core::language::{CLanguageStandard, CxxLanguageStandard, SwiftLanguageVersionList};
use crate::core::platform::PlatformList;
use crate::core::product::ProductList;
use crate::core::target::TargetList;
use crate::util::render::{quoted, Arguments, Render};

/// Tools version written on the first line of a manifest document.
pub const SWIFT_TOOLS_VERSION: &str = "5.3";

/// Module every manifest imports.
pub const MANIFEST_IMPORT: &str = "PackageDescription";

/// A Swift package description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,

    /// Localization used for resources without an explicit one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_localization: Option<String>,

    #[serde(default, skip_serializing_if = "PlatformList::is_empty")]
    pub platforms: PlatformList,

    #[serde(default, skip_serializing_if = "ProductList::is_empty")]
    pub products: ProductList,

    #[serde(default, skip_serializing_if = "PackageDependencyList::is_empty")]
    pub dependencies: PackageDependencyList,

    #[serde(default, skip_serializing_if = "TargetList::is_empty")]
    pub targets: TargetList,

    #[serde(default, skip_serializing_if = "SwiftLanguageVersionList::is_empty")]
    pub swift_language_versions: SwiftLanguageVersionList,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_language_standard: Option<CLanguageStandard>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cxx_language_standard: Option<CxxLanguageStandard>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            default_localization: None,
            platforms: PlatformList::new(),
            products: ProductList::new(),
            dependencies: PackageDependencyList::new(),
            targets: TargetList::new(),
            swift_language_versions: SwiftLanguageVersionList::new(),
            c_language_standard: None,
            cxx_language_standard: None,
        }
    }

    /// Set the default localization (a BCP 47 tag such as `en`).
    pub fn default_localization(&mut self, localization: impl Into<String>) -> &mut Self {
        self.default_localization = Some(localization.into());
        self
    }

    pub fn platforms(&mut self, configure: impl FnOnce(&mut PlatformList)) -> &mut Self {
        configure(&mut self.platforms);
        self
    }

    pub fn products(&mut self, configure: impl FnOnce(&mut ProductList)) -> &mut Self {
        configure(&mut self.products);
        self
    }

    pub fn dependencies(
        &mut self,
        configure: impl FnOnce(&mut PackageDependencyList),
    ) -> &mut Self {
        configure(&mut self.dependencies);
        self
    }

    pub fn targets(&mut self, configure: impl FnOnce(&mut TargetList)) -> &mut Self {
        configure(&mut self.targets);
        self
    }

    pub fn swift_language_versions(
        &mut self,
        configure: impl FnOnce(&mut SwiftLanguageVersionList),
    ) -> &mut Self {
        configure(&mut self.swift_language_versions);
        self
    }

    pub fn c_language_standard(&mut self, standard: CLanguageStandard) -> &mut Self {
        self.c_language_standard = Some(standard);
        self
    }

    pub fn cxx_language_standard(&mut self, standard: CxxLanguageStandard) -> &mut Self {
        self.cxx_language_standard = Some(standard);
        self
    }

    /// Render the complete manifest document.
    pub fn render_document(&self) -> String {
        format!(
            "// swift-tools-version:{}\nimport {}\n\nlet package = {}",
            SWIFT_TOOLS_VERSION,
            MANIFEST_IMPORT,
            self.render()
        )
    }
}

impl Render for Package {
    fn render(&self) -> String {
        tracing::debug!(
            name = %self.name,
            platforms = self.platforms.len(),
            products = self.products.len(),
            dependencies = self.dependencies.len(),
            targets = self.targets.len(),
            "rendering package"
        );

        let mut args = Arguments::new();
        args.labeled("name", quoted(&self.name))
            .quoted_opt("defaultLocalization", self.default_localization.as_deref())
            .list("platforms", &self.platforms)
            .list("products", &self.products)
            .list("dependencies", &self.dependencies)
            .list("targets", &self.targets)
            .list("swiftLanguageVersions", &self.swift_language_versions)
            .node_opt("cLanguageStandard", self.c_language_standard.as_ref())
            .node_opt("cxxLanguageStandard", self.cxx_language_standard.as_ref());
        args.into_call("Package")
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build a package through a configuration closure.
pub fn swift_package(name: impl Into<String>, configure: impl FnOnce(&mut Package)) -> Package {
    let mut package = Package::new(name);
    configure(&mut package);
    package
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::IosVersion;
    use crate::core::target::SourceLayer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_package() {
        let package = Package::new("EmptyPackage");
        assert_eq!(package.render(), "Package(\n\tname: \"EmptyPackage\"\n)");
    }

    #[test]
    fn test_only_present_collections_render() {
        let package = swift_package("Demo", |p| {
            p.platforms(|platforms| {
                platforms.ios().version(IosVersion::V13);
            });
            p.products(|products| {
                products.library("Core", Vec::<String>::new());
            });
        });
        let out = package.render();
        assert_eq!(
            out,
            "Package(\n\
             \tname: \"Demo\",\n\
             \tplatforms: [\n\
             \t\t.iOS(.v13)\n\
             \t],\n\
             \tproducts: [\n\
             \t\t.library(name: \"Core\", targets: [])\n\
             \t]\n\
             )"
        );
        assert!(!out.contains("\n\tdependencies:"));
        assert!(!out.contains("\n\ttargets:"));
        assert!(!out.contains("\n\tswiftLanguageVersions:"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let package = swift_package("Demo", |p| {
            p.targets(|t| {
                t.target("Core", |core| {
                    core.dependencies_named(["Utils"]);
                });
            });
        });
        assert_eq!(package.render(), package.render());
        assert_eq!(package.to_string(), package.render());
    }

    #[test]
    fn test_repeated_calls_append() {
        let mut package = Package::new("Demo");
        package.products(|p| {
            p.library("Core", ["Core"]);
        });
        package.products(|p| {
            p.library("Core", ["Core"]);
        });
        assert_eq!(package.products.len(), 2);
    }

    #[test]
    fn test_document_preamble() {
        let package = Package::new("EmptyPackage");
        assert_eq!(
            package.render_document(),
            "// swift-tools-version:5.3\n\
             import PackageDescription\n\
             \n\
             let package = Package(\n\
             \tname: \"EmptyPackage\"\n\
             )"
        );
    }

    #[test]
    fn test_trailing_scalar_arguments() {
        let package = swift_package("Native", |p| {
            p.default_localization("en")
                .c_language_standard(CLanguageStandard::Gnu11)
                .cxx_language_standard(CxxLanguageStandard::Cxx17)
                .swift_language_versions(|v| {
                    v.v5();
                });
        });
        assert_eq!(
            package.render(),
            "Package(\n\
             \tname: \"Native\",\n\
             \tdefaultLocalization: \"en\",\n\
             \tswiftLanguageVersions: [\n\
             \t\t.v5\n\
             \t],\n\
             \tcLanguageStandard: .gnu11,\n\
             \tcxxLanguageStandard: .cxx17\n\
             )"
        );
    }
}
