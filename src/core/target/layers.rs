//! Attribute layers shared between target kinds.
//!
//! Every kind owns a [`TargetBase`]. Source-based kinds add a
//! [`SourceLayout`], and the compiled kinds add [`BuildSettings`] on top.
//! The matching traits give each kind the same configuration methods
//! without repeating them per kind.

use serde::{Deserialize, Serialize};

use crate::core::resource::ResourceList;
use crate::core::setting::{CompilerSettingList, LinkerSettingList, PluginUsageList};
use crate::core::target_dependency::TargetDependencyList;
use crate::util::list::owned_strings;
use crate::util::render::{quoted, Arguments};

/// Name and path, shared by all target kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Custom source directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TargetBase {
    pub fn named(name: impl Into<String>) -> Self {
        TargetBase {
            name: Some(name.into()),
            path: None,
        }
    }

    pub(crate) fn push_name(&self, args: &mut Arguments) {
        args.quoted_opt("name", self.name.as_deref());
    }

    /// Push the name, or `nil` when absent. Only system-library and binary
    /// targets take this form.
    pub(crate) fn push_name_or_nil(&self, args: &mut Arguments) {
        match &self.name {
            Some(name) => args.labeled("name", quoted(name)),
            None => args.labeled("name", "nil"),
        };
    }

    pub(crate) fn push_path(&self, args: &mut Arguments) {
        args.quoted_opt("path", self.path.as_deref());
    }
}

/// Which files make up a target and what it depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLayout {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    #[serde(default, skip_serializing_if = "TargetDependencyList::is_empty")]
    pub dependencies: TargetDependencyList,
}

impl SourceLayout {
    pub(crate) fn push_dependencies(&self, args: &mut Arguments) {
        args.list("dependencies", &self.dependencies);
    }

    pub(crate) fn push_files(&self, args: &mut Arguments) {
        args.strings("exclude", &self.exclude)
            .strings("sources", &self.sources);
    }
}

/// Resources, per-language settings and build-tool plugins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
    #[serde(default, skip_serializing_if = "ResourceList::is_empty")]
    pub resources: ResourceList,

    #[serde(default, skip_serializing_if = "CompilerSettingList::is_empty")]
    pub c_settings: CompilerSettingList,

    #[serde(default, skip_serializing_if = "CompilerSettingList::is_empty")]
    pub cxx_settings: CompilerSettingList,

    #[serde(default, skip_serializing_if = "CompilerSettingList::is_empty")]
    pub swift_settings: CompilerSettingList,

    #[serde(default, skip_serializing_if = "LinkerSettingList::is_empty")]
    pub linker_settings: LinkerSettingList,

    #[serde(default, skip_serializing_if = "PluginUsageList::is_empty")]
    pub plugins: PluginUsageList,
}

impl BuildSettings {
    pub(crate) fn push_resources(&self, args: &mut Arguments) {
        args.list("resources", &self.resources);
    }

    pub(crate) fn push_settings(&self, args: &mut Arguments) {
        args.list("cSettings", &self.c_settings)
            .list("cxxSettings", &self.cxx_settings)
            .list("swiftSettings", &self.swift_settings)
            .list("linkerSettings", &self.linker_settings)
            .list("plugins", &self.plugins);
    }
}

/// Configuration shared by every target kind.
pub trait BaseLayer {
    fn base(&self) -> &TargetBase;
    fn base_mut(&mut self) -> &mut TargetBase;

    fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    /// Set a custom source directory.
    fn path(&mut self, path: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.base_mut().path = Some(path.into());
        self
    }
}

/// Configuration for kinds built from source files.
pub trait SourceLayer: BaseLayer {
    fn layout(&self) -> &SourceLayout;
    fn layout_mut(&mut self) -> &mut SourceLayout;

    /// Append exclude patterns.
    fn exclude<I, S>(&mut self, patterns: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout_mut().exclude.extend(owned_strings(patterns));
        self
    }

    /// Append source patterns.
    fn sources<I, S>(&mut self, patterns: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout_mut().sources.extend(owned_strings(patterns));
        self
    }

    fn dependencies(&mut self, configure: impl FnOnce(&mut TargetDependencyList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.layout_mut().dependencies);
        self
    }

    /// Append each name as a literal dependency.
    fn dependencies_named<I, S>(&mut self, names: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dependencies = &mut self.layout_mut().dependencies;
        for name in names {
            dependencies.literal(name);
        }
        self
    }
}

/// Configuration for kinds that are compiled.
pub trait SettingsLayer: SourceLayer {
    fn settings(&self) -> &BuildSettings;
    fn settings_mut(&mut self) -> &mut BuildSettings;

    fn resources(&mut self, configure: impl FnOnce(&mut ResourceList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.settings_mut().resources);
        self
    }

    fn c_settings(&mut self, configure: impl FnOnce(&mut CompilerSettingList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.settings_mut().c_settings);
        self
    }

    fn cxx_settings(&mut self, configure: impl FnOnce(&mut CompilerSettingList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.settings_mut().cxx_settings);
        self
    }

    fn swift_settings(&mut self, configure: impl FnOnce(&mut CompilerSettingList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.settings_mut().swift_settings);
        self
    }

    fn linker_settings(&mut self, configure: impl FnOnce(&mut LinkerSettingList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.settings_mut().linker_settings);
        self
    }

    fn plugins(&mut self, configure: impl FnOnce(&mut PluginUsageList)) -> &mut Self
    where
        Self: Sized,
    {
        configure(&mut self.settings_mut().plugins);
        self
    }
}
