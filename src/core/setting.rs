//! Build settings, conditions and plugin usages.
//!
//! Compiler settings are used for `cSettings`, `cxxSettings` and
//! `swiftSettings`; linker settings for `linkerSettings`. Each setting may be
//! restricted by a [`Condition`], rendered as a trailing `.when(...)`.

use serde::{Deserialize, Serialize};

use crate::core::platform::PlatformList;
use crate::util::list::{owned_strings, NodeList};
use crate::util::render::{quoted, quoted_list, Arguments, Render};
use crate::util::symbol::symbolic_enum;

symbolic_enum! {
    /// Build configuration a condition can be restricted to.
    pub enum BuildConfiguration {
        Debug => "debug",
        Release => "release",
    }
}

/// Restricts a setting or target dependency to platforms and/or a
/// build configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<PlatformList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BuildConfiguration>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the platform list with a freshly configured one.
    pub fn platforms(&mut self, configure: impl FnOnce(&mut PlatformList)) -> &mut Self {
        let mut platforms = PlatformList::new();
        configure(&mut platforms);
        self.platforms = Some(platforms);
        self
    }

    pub fn configuration(&mut self, configuration: BuildConfiguration) -> &mut Self {
        self.configuration = Some(configuration);
        self
    }
}

impl Render for Condition {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        args.node_opt("platforms", self.platforms.as_ref())
            .node_opt("configuration", self.configuration.as_ref());
        args.into_inline_call(".when")
    }
}

fn configured_condition(configure: impl FnOnce(&mut Condition)) -> Option<Condition> {
    let mut condition = Condition::new();
    configure(&mut condition);
    Some(condition)
}

/// A C, C++ or Swift compiler setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CompilerSetting {
    HeaderSearchPath {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    Define {
        name: String,
        #[serde(default, rename = "to", skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    UnsafeFlags {
        flags: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
}

impl CompilerSetting {
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            CompilerSetting::HeaderSearchPath { condition, .. }
            | CompilerSetting::Define { condition, .. }
            | CompilerSetting::UnsafeFlags { condition, .. } => condition.as_ref(),
        }
    }

    /// Restrict this setting; replaces any earlier condition.
    pub fn when(&mut self, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        let condition = configured_condition(configure);
        match self {
            CompilerSetting::HeaderSearchPath { condition: slot, .. }
            | CompilerSetting::Define { condition: slot, .. }
            | CompilerSetting::UnsafeFlags { condition: slot, .. } => *slot = condition,
        }
        self
    }
}

impl Render for CompilerSetting {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        let keyword = match self {
            CompilerSetting::HeaderSearchPath { path, .. } => {
                args.push(quoted(path));
                ".headerSearchPath"
            }
            CompilerSetting::Define { name, value, .. } => {
                args.push(quoted(name))
                    .quoted_opt("to", value.as_deref());
                ".define"
            }
            CompilerSetting::UnsafeFlags { flags, .. } => {
                args.push(quoted_list(flags));
                ".unsafeFlags"
            }
        };
        if let Some(condition) = self.condition() {
            args.push(condition.render());
        }
        args.into_inline_call(keyword)
    }
}

/// Ordered list of compiler settings.
pub type CompilerSettingList = NodeList<CompilerSetting>;

impl NodeList<CompilerSetting> {
    /// Append `.headerSearchPath("path")`.
    pub fn header_search_path(&mut self, path: impl Into<String>) -> &mut CompilerSetting {
        self.push(CompilerSetting::HeaderSearchPath {
            path: path.into(),
            condition: None,
        })
    }

    /// Append `.define("NAME")`.
    pub fn define(&mut self, name: impl Into<String>) -> &mut CompilerSetting {
        self.push(CompilerSetting::Define {
            name: name.into(),
            value: None,
            condition: None,
        })
    }

    /// Append `.define("NAME", to: "value")`.
    pub fn define_to(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut CompilerSetting {
        self.push(CompilerSetting::Define {
            name: name.into(),
            value: Some(value.into()),
            condition: None,
        })
    }

    /// Append `.unsafeFlags([...])`.
    pub fn unsafe_flags<I, S>(&mut self, flags: I) -> &mut CompilerSetting
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(CompilerSetting::UnsafeFlags {
            flags: owned_strings(flags),
            condition: None,
        })
    }
}

/// A linker setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LinkerSetting {
    LinkedFramework {
        framework: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    LinkedLibrary {
        library: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    UnsafeFlags {
        flags: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
}

impl LinkerSetting {
    /// The condition restricting this setting, if any.
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            LinkerSetting::LinkedFramework { condition, .. }
            | LinkerSetting::LinkedLibrary { condition, .. }
            | LinkerSetting::UnsafeFlags { condition, .. } => condition.as_ref(),
        }
    }

    /// Restrict this setting; replaces any earlier condition.
    pub fn when(&mut self, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        let condition = configured_condition(configure);
        match self {
            LinkerSetting::LinkedFramework { condition: slot, .. }
            | LinkerSetting::LinkedLibrary { condition: slot, .. }
            | LinkerSetting::UnsafeFlags { condition: slot, .. } => *slot = condition,
        }
        self
    }
}

impl Render for LinkerSetting {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        let keyword = match self {
            LinkerSetting::LinkedFramework { framework, .. } => {
                args.push(quoted(framework));
                ".linkedFramework"
            }
            LinkerSetting::LinkedLibrary { library, .. } => {
                args.push(quoted(library));
                ".linkedLibrary"
            }
            LinkerSetting::UnsafeFlags { flags, .. } => {
                args.push(quoted_list(flags));
                ".unsafeFlags"
            }
        };
        if let Some(condition) = self.condition() {
            args.push(condition.render());
        }
        args.into_inline_call(keyword)
    }
}

/// Ordered list of linker settings.
pub type LinkerSettingList = NodeList<LinkerSetting>;

impl NodeList<LinkerSetting> {
    /// Append `.linkedFramework("name")`.
    pub fn linked_framework(&mut self, framework: impl Into<String>) -> &mut LinkerSetting {
        self.push(LinkerSetting::LinkedFramework {
            framework: framework.into(),
            condition: None,
        })
    }

    /// Append `.linkedLibrary("name")`.
    pub fn linked_library(&mut self, library: impl Into<String>) -> &mut LinkerSetting {
        self.push(LinkerSetting::LinkedLibrary {
            library: library.into(),
            condition: None,
        })
    }

    /// Append linker `.unsafeFlags([...])`.
    pub fn unsafe_flags<I, S>(&mut self, flags: I) -> &mut LinkerSetting
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(LinkerSetting::UnsafeFlags {
            flags: owned_strings(flags),
            condition: None,
        })
    }
}

/// A build-tool plugin applied to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginUsage {
    pub name: String,

    /// Package vending the plugin; absent for plugins in the same package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl Render for PluginUsage {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        args.labeled("name", quoted(&self.name))
            .quoted_opt("package", self.package.as_deref());
        args.into_inline_call(".plugin")
    }
}

/// Ordered list of plugin usages.
pub type PluginUsageList = NodeList<PluginUsage>;

impl NodeList<PluginUsage> {
    pub fn plugin(&mut self, name: impl Into<String>) -> &mut PluginUsage {
        self.push(PluginUsage {
            name: name.into(),
            package: None,
        })
    }

    /// Append a plugin vended by another package.
    pub fn plugin_from(
        &mut self,
        name: impl Into<String>,
        package: impl Into<String>,
    ) -> &mut PluginUsage {
        self.push(PluginUsage {
            name: name.into(),
            package: Some(package.into()),
        })
    }
}
