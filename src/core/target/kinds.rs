//! Concrete target kinds.
//!
//! Each kind assembles its argument block in PackageDescription's parameter
//! order; the call keyword is chosen by [`super::Target`].

use serde::{Deserialize, Serialize};

use crate::core::provider::ProviderList;
use crate::core::target_dependency::TargetDependencyList;
use crate::util::render::Arguments;

use super::layers::{
    BaseLayer, BuildSettings, SettingsLayer, SourceLayer, SourceLayout, TargetBase,
};
use super::plugin::{Capability, CommandCapability};

macro_rules! impl_layers {
    (base: $ty:ty) => {
        impl BaseLayer for $ty {
            fn base(&self) -> &TargetBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut TargetBase {
                &mut self.base
            }
        }
    };
    (source: $ty:ty) => {
        impl_layers!(base: $ty);

        impl SourceLayer for $ty {
            fn layout(&self) -> &SourceLayout {
                &self.layout
            }

            fn layout_mut(&mut self) -> &mut SourceLayout {
                &mut self.layout
            }
        }
    };
    (settings: $ty:ty) => {
        impl_layers!(source: $ty);

        impl SettingsLayer for $ty {
            fn settings(&self) -> &BuildSettings {
                &self.settings
            }

            fn settings_mut(&mut self) -> &mut BuildSettings {
                &mut self.settings
            }
        }
    };
}

/// A library or executable module built from sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularTarget {
    #[serde(flatten)]
    pub base: TargetBase,

    #[serde(flatten)]
    pub layout: SourceLayout,

    #[serde(flatten)]
    pub settings: BuildSettings,

    /// Directory of public C headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_headers_path: Option<String>,
}

impl RegularTarget {
    pub fn new(name: impl Into<String>) -> Self {
        RegularTarget {
            base: TargetBase::named(name),
            ..Default::default()
        }
    }

    pub fn public_headers_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.public_headers_path = Some(path.into());
        self
    }

    pub(crate) fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        self.base.push_name(&mut args);
        self.layout.push_dependencies(&mut args);
        self.base.push_path(&mut args);
        self.layout.push_files(&mut args);
        self.settings.push_resources(&mut args);
        args.quoted_opt("publicHeadersPath", self.public_headers_path.as_deref());
        self.settings.push_settings(&mut args);
        args
    }
}

impl_layers!(settings: RegularTarget);

/// A test module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestTarget {
    #[serde(flatten)]
    pub base: TargetBase,

    #[serde(flatten)]
    pub layout: SourceLayout,

    #[serde(flatten)]
    pub settings: BuildSettings,
}

impl TestTarget {
    pub fn new(name: impl Into<String>) -> Self {
        TestTarget {
            base: TargetBase::named(name),
            ..Default::default()
        }
    }

    pub(crate) fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        self.base.push_name(&mut args);
        self.layout.push_dependencies(&mut args);
        self.base.push_path(&mut args);
        self.layout.push_files(&mut args);
        self.settings.push_resources(&mut args);
        self.settings.push_settings(&mut args);
        args
    }
}

impl_layers!(settings: TestTarget);

/// A package plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginTarget {
    #[serde(flatten)]
    pub base: TargetBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<Capability>,

    #[serde(flatten)]
    pub layout: SourceLayout,
}

impl PluginTarget {
    pub fn new(name: impl Into<String>) -> Self {
        PluginTarget {
            base: TargetBase::named(name),
            ..Default::default()
        }
    }

    pub fn capability(&mut self, capability: Capability) -> &mut Self {
        self.capability = Some(capability);
        self
    }

    pub fn build_tool(&mut self) -> &mut Self {
        self.capability(Capability::BuildTool)
    }

    /// Make this a command plugin.
    pub fn command(&mut self, configure: impl FnOnce(&mut CommandCapability)) -> &mut Self {
        let mut command = CommandCapability::new();
        configure(&mut command);
        self.capability(Capability::Command(command))
    }

    pub(crate) fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        self.base.push_name(&mut args);
        args.node_opt("capability", self.capability.as_ref());
        self.layout.push_dependencies(&mut args);
        self.base.push_path(&mut args);
        self.layout.push_files(&mut args);
        args
    }
}

impl_layers!(source: PluginTarget);

/// A library provided by the system, located through pkg-config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemLibraryTarget {
    #[serde(flatten)]
    pub base: TargetBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg_config: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<ProviderList>,
}

impl SystemLibraryTarget {
    pub fn new(name: impl Into<String>) -> Self {
        SystemLibraryTarget {
            base: TargetBase::named(name),
            ..Default::default()
        }
    }

    pub fn pkg_config(&mut self, name: impl Into<String>) -> &mut Self {
        self.pkg_config = Some(name.into());
        self
    }

    /// Append providers, creating the list on first use.
    pub fn providers(&mut self, configure: impl FnOnce(&mut ProviderList)) -> &mut Self {
        configure(self.providers.get_or_insert_with(ProviderList::new));
        self
    }

    pub(crate) fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        self.base.push_name_or_nil(&mut args);
        self.base.push_path(&mut args);
        args.quoted_opt("pkgConfig", self.pkg_config.as_deref())
            .node_opt("providers", self.providers.as_ref());
        args
    }
}

impl_layers!(base: SystemLibraryTarget);

/// A prebuilt binary framework, local or remote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinaryTarget {
    #[serde(flatten)]
    pub base: TargetBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    #[serde(default, skip_serializing_if = "TargetDependencyList::is_empty")]
    pub dependencies: TargetDependencyList,
}

impl BinaryTarget {
    pub fn new(name: impl Into<String>) -> Self {
        BinaryTarget {
            base: TargetBase::named(name),
            ..Default::default()
        }
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn checksum(&mut self, checksum: impl Into<String>) -> &mut Self {
        self.checksum = Some(checksum.into());
        self
    }

    pub fn dependencies(&mut self, configure: impl FnOnce(&mut TargetDependencyList)) -> &mut Self {
        configure(&mut self.dependencies);
        self
    }

    pub(crate) fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        self.base.push_name_or_nil(&mut args);
        self.base.push_path(&mut args);
        args.quoted_opt("url", self.url.as_deref())
            .quoted_opt("checksum", self.checksum.as_deref())
            .list("dependencies", &self.dependencies);
        args
    }
}

impl_layers!(base: BinaryTarget);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_argument_order() {
        let mut target = RegularTarget::new("Core");
        target
            .public_headers_path("include")
            .path("Sources/Core")
            .dependencies_named(["Utils"])
            .resources(|r| {
                r.copy("data.json");
            })
            .swift_settings(|s| {
                s.define("CORE");
            });
        assert_eq!(
            target.arguments().into_call(".target"),
            ".target(\n\
             \tname: \"Core\",\n\
             \tdependencies: [\n\
             \t\t\"Utils\"\n\
             \t],\n\
             \tpath: \"Sources/Core\",\n\
             \tresources: [\n\
             \t\t.copy(\"data.json\")\n\
             \t],\n\
             \tpublicHeadersPath: \"include\",\n\
             \tswiftSettings: [\n\
             \t\t.define(\"CORE\")\n\
             \t]\n\
             )"
        );
    }

    #[test]
    fn test_layer_methods_append() {
        let mut target = TestTarget::new("CoreTests");
        target.exclude(["a"]).exclude(["b"]);
        target.dependencies(|d| {
            d.target("Core");
        });
        target.dependencies(|d| {
            d.target("Core");
        });
        assert_eq!(target.layout().exclude, vec!["a", "b"]);
        assert_eq!(target.layout().dependencies.len(), 2);
    }

    #[test]
    fn test_system_library_providers_created_on_first_use() {
        let mut target = SystemLibraryTarget::new("CSQLite");
        assert!(target.providers.is_none());
        target.providers(|p| {
            p.brew(["sqlite"]);
        });
        target.providers(|p| {
            p.apt(["libsqlite3-dev"]);
        });
        assert_eq!(target.providers.as_ref().map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_system_library_empty_providers_still_rendered() {
        let mut target = SystemLibraryTarget::default();
        target.providers(|_| {});
        assert_eq!(
            target.arguments().into_inline_call(".systemLibrary"),
            ".systemLibrary(name: nil, providers: [])"
        );
    }

    #[test]
    fn test_plugin_capability_precedes_dependencies() {
        let mut target = PluginTarget::new("Gen");
        target.build_tool().dependencies_named(["GenTool"]);
        assert_eq!(
            target.arguments().into_inline_call(".plugin"),
            ".plugin(name: \"Gen\", capability: .buildTool(), dependencies: [\n\t\"GenTool\"\n])"
        );
    }
}
