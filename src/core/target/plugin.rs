//! Plugin capabilities, command intents and permissions.

use serde::{Deserialize, Serialize};

use crate::util::list::NodeList;
use crate::util::render::{quoted, Arguments, Render};

/// What a plugin target does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Capability {
    /// Runs as part of the build
    BuildTool,
    /// Invoked explicitly by the user
    Command(CommandCapability),
}

impl Render for Capability {
    fn render(&self) -> String {
        match self {
            Capability::BuildTool => ".buildTool()".to_string(),
            Capability::Command(command) => command.render(),
        }
    }
}

/// A command plugin's intent and the permissions it requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCapability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<CommandIntent>,

    #[serde(default)]
    pub permissions: PermissionList,
}

impl CommandCapability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&mut self, intent: CommandIntent) -> &mut Self {
        self.intent = Some(intent);
        self
    }

    pub fn documentation_generation(&mut self) -> &mut Self {
        self.intent(CommandIntent::DocumentationGeneration)
    }

    pub fn source_code_formatting(&mut self) -> &mut Self {
        self.intent(CommandIntent::SourceCodeFormatting)
    }

    /// Use a custom verb, e.g. `swift package <verb>`.
    pub fn custom_intent(
        &mut self,
        verb: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.intent(CommandIntent::Custom {
            verb: verb.into(),
            description: description.into(),
        })
    }

    /// Append permissions.
    pub fn permissions(&mut self, configure: impl FnOnce(&mut PermissionList)) -> &mut Self {
        configure(&mut self.permissions);
        self
    }
}

impl Render for CommandCapability {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        args.node_opt("intent", self.intent.as_ref())
            .labeled("permissions", self.permissions.render());
        args.into_inline_call(".command")
    }
}

/// Why a command plugin is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CommandIntent {
    DocumentationGeneration,
    SourceCodeFormatting,
    Custom { verb: String, description: String },
}

impl Render for CommandIntent {
    fn render(&self) -> String {
        match self {
            CommandIntent::DocumentationGeneration => ".documentationGeneration()".to_string(),
            CommandIntent::SourceCodeFormatting => ".sourceCodeFormatting()".to_string(),
            CommandIntent::Custom { verb, description } => {
                let mut args = Arguments::new();
                args.labeled("verb", quoted(verb))
                    .labeled("description", quoted(description));
                args.into_inline_call(".custom")
            }
        }
    }
}

/// A permission requested by a command plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Permission {
    WriteToPackageDirectory { reason: String },
}

impl Render for Permission {
    fn render(&self) -> String {
        match self {
            Permission::WriteToPackageDirectory { reason } => {
                format!(".writeToPackageDirectory(reason: {})", quoted(reason))
            }
        }
    }
}

/// Ordered list of permissions.
pub type PermissionList = NodeList<Permission>;

impl NodeList<Permission> {
    pub fn write_to_package_directory(&mut self, reason: impl Into<String>) -> &mut Permission {
        self.push(Permission::WriteToPackageDirectory {
            reason: reason.into(),
        })
    }
}
