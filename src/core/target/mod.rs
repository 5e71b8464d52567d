//! Target definitions - the modules a package builds.
//!
//! A [`Target`] is one of six kinds. All kinds share a name and path;
//! source-based kinds add file patterns and dependencies, compiled kinds add
//! resources and settings. See [`layers`] for the shared parts.

mod kinds;
mod layers;
mod plugin;

use serde::{Deserialize, Serialize};

use crate::util::list::NodeList;
use crate::util::render::Render;

pub use self::kinds::{BinaryTarget, PluginTarget, RegularTarget, SystemLibraryTarget, TestTarget};
pub use self::layers::{
    BaseLayer, BuildSettings, SettingsLayer, SourceLayer, SourceLayout, TargetBase,
};
pub use self::plugin::{Capability, CommandCapability, CommandIntent, Permission, PermissionList};

/// A target declared by the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Target {
    #[serde(rename = "target")]
    Regular(RegularTarget),

    #[serde(rename = "executableTarget")]
    Executable(RegularTarget),

    #[serde(rename = "testTarget")]
    Test(TestTarget),

    #[serde(rename = "plugin")]
    Plugin(PluginTarget),

    #[serde(rename = "systemLibrary")]
    SystemLibrary(SystemLibraryTarget),

    #[serde(rename = "binaryTarget")]
    Binary(BinaryTarget),
}

impl Target {
    /// The call keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Target::Regular(_) => ".target",
            Target::Executable(_) => ".executableTarget",
            Target::Test(_) => ".testTarget",
            Target::Plugin(_) => ".plugin",
            Target::SystemLibrary(_) => ".systemLibrary",
            Target::Binary(_) => ".binaryTarget",
        }
    }

    /// Name and path shared by every kind.
    pub fn base(&self) -> &TargetBase {
        match self {
            Target::Regular(t) | Target::Executable(t) => &t.base,
            Target::Test(t) => &t.base,
            Target::Plugin(t) => &t.base,
            Target::SystemLibrary(t) => &t.base,
            Target::Binary(t) => &t.base,
        }
    }

    /// The target name; `None` renders as `nil`.
    pub fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }
}

impl Render for Target {
    fn render(&self) -> String {
        let args = match self {
            Target::Regular(t) | Target::Executable(t) => t.arguments(),
            Target::Test(t) => t.arguments(),
            Target::Plugin(t) => t.arguments(),
            Target::SystemLibrary(t) => t.arguments(),
            Target::Binary(t) => t.arguments(),
        };
        args.into_call(self.keyword())
    }
}

/// Ordered list of targets.
pub type TargetList = NodeList<Target>;

impl NodeList<Target> {
    /// Append a regular target.
    pub fn target(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut RegularTarget),
    ) -> &mut Target {
        let mut target = RegularTarget::new(name);
        configure(&mut target);
        self.push(Target::Regular(target))
    }

    /// Append an executable target.
    pub fn executable_target(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut RegularTarget),
    ) -> &mut Target {
        let mut target = RegularTarget::new(name);
        configure(&mut target);
        self.push(Target::Executable(target))
    }

    /// Append a test target.
    pub fn test_target(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut TestTarget),
    ) -> &mut Target {
        let mut target = TestTarget::new(name);
        configure(&mut target);
        self.push(Target::Test(target))
    }

    /// Append a plugin target.
    pub fn plugin(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut PluginTarget),
    ) -> &mut Target {
        let mut target = PluginTarget::new(name);
        configure(&mut target);
        self.push(Target::Plugin(target))
    }

    /// Append a system library target.
    pub fn system_library(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut SystemLibraryTarget),
    ) -> &mut Target {
        let mut target = SystemLibraryTarget::new(name);
        configure(&mut target);
        self.push(Target::SystemLibrary(target))
    }

    /// Append a remote binary target.
    pub fn binary_target(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        checksum: impl Into<String>,
        configure: impl FnOnce(&mut BinaryTarget),
    ) -> &mut Target {
        let mut target = BinaryTarget::new(name);
        target.url(url).checksum(checksum);
        configure(&mut target);
        self.push(Target::Binary(target))
    }

    /// Append a binary target from a local artifact.
    pub fn binary_target_path(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        configure: impl FnOnce(&mut BinaryTarget),
    ) -> &mut Target {
        let mut target = BinaryTarget::new(name);
        target.path(path);
        configure(&mut target);
        self.push(Target::Binary(target))
    }
}
