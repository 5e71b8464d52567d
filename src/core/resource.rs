//! Target resources.

use serde::{Deserialize, Serialize};

use crate::util::list::NodeList;
use crate::util::render::{quoted, Arguments, Render};

/// A resource bundled with a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Resource {
    /// Copied verbatim
    Copy { path: String },
    /// Processed by the build system, optionally for one localization
    Process {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        localization: Option<String>,
    },
}

impl Resource {
    pub fn path(&self) -> &str {
        match self {
            Resource::Copy { path } | Resource::Process { path, .. } => path,
        }
    }
}

impl Render for Resource {
    fn render(&self) -> String {
        let mut args = Arguments::new();
        args.push(quoted(self.path()));
        match self {
            Resource::Copy { .. } => args.into_inline_call(".copy"),
            Resource::Process { localization, .. } => {
                args.quoted_opt("localization", localization.as_deref());
                args.into_inline_call(".process")
            }
        }
    }
}

/// Ordered list of resources.
pub type ResourceList = NodeList<Resource>;

impl NodeList<Resource> {
    pub fn copy(&mut self, path: impl Into<String>) -> &mut Resource {
        self.push(Resource::Copy { path: path.into() })
    }

    pub fn process(&mut self, path: impl Into<String>) -> &mut Resource {
        self.push(Resource::Process {
            path: path.into(),
            localization: None,
        })
    }

    /// Append a processed resource for a specific localization (a BCP 47 tag).
    pub fn process_localized(
        &mut self,
        path: impl Into<String>,
        localization: impl Into<String>,
    ) -> &mut Resource {
        self.push(Resource::Process {
            path: path.into(),
            localization: Some(localization.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_rules() {
        let mut resources = ResourceList::new();
        resources.copy("Assets/logo.png");
        resources.process("Strings");
        resources.process_localized("Strings/nl.lproj", "nl-NL");
        assert_eq!(
            resources.render(),
            "[\n\t.copy(\"Assets/logo.png\"),\n\t.process(\"Strings\"),\n\t.process(\"Strings/nl.lproj\", localization: \"nl-NL\")\n]"
        );
    }
}
