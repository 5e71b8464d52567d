//! Dependencies a target declares on products and other targets.

use serde::{Deserialize, Serialize};

use crate::core::platform::PlatformList;
use crate::core::setting::Condition;
use crate::util::list::NodeList;
use crate::util::render::{quoted, Arguments, Render};

/// A reference from a target to something it depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TargetDependency {
    /// A product, optionally from another package
    Product {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        package: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    /// A target in the same package
    Target {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    /// A target or product resolved by name
    ByName {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    /// A bare string literal; never conditional
    Literal { name: String },
}

impl TargetDependency {
    pub fn name(&self) -> &str {
        match self {
            TargetDependency::Product { name, .. }
            | TargetDependency::Target { name, .. }
            | TargetDependency::ByName { name, .. }
            | TargetDependency::Literal { name } => name,
        }
    }

    pub fn condition(&self) -> Option<&Condition> {
        match self {
            TargetDependency::Product { condition, .. }
            | TargetDependency::Target { condition, .. }
            | TargetDependency::ByName { condition, .. } => condition.as_ref(),
            TargetDependency::Literal { .. } => None,
        }
    }

    fn condition_slot(&mut self) -> Option<&mut Option<Condition>> {
        match self {
            TargetDependency::Product { condition, .. }
            | TargetDependency::Target { condition, .. }
            | TargetDependency::ByName { condition, .. } => Some(condition),
            TargetDependency::Literal { .. } => None,
        }
    }

    /// Restrict this dependency to the configured platforms.
    ///
    /// Installs a condition if there is none, otherwise replaces its
    /// platform list. Literal dependencies cannot carry a condition and are
    /// left untouched.
    pub fn when(&mut self, configure: impl FnOnce(&mut PlatformList)) -> &mut Self {
        let mut platforms = PlatformList::new();
        configure(&mut platforms);

        match self.condition_slot() {
            Some(Some(condition)) => condition.platforms = Some(platforms),
            Some(slot) => {
                *slot = Some(Condition {
                    platforms: Some(platforms),
                    configuration: None,
                })
            }
            None => tracing::warn!(
                "ignoring condition on literal dependency `{}`",
                self.name()
            ),
        }
        self
    }
}

impl Render for TargetDependency {
    fn render(&self) -> String {
        let (keyword, package, condition) = match self {
            TargetDependency::Literal { name } => return quoted(name),
            TargetDependency::Product {
                package, condition, ..
            } => (".product", package.as_deref(), condition.as_ref()),
            TargetDependency::Target { condition, .. } => (".target", None, condition.as_ref()),
            TargetDependency::ByName { condition, .. } => (".byName", None, condition.as_ref()),
        };

        let mut args = Arguments::new();
        args.labeled("name", quoted(self.name()))
            .quoted_opt("package", package)
            .node_opt("condition", condition);
        args.into_call(keyword)
    }
}

/// Ordered list of target dependencies.
pub type TargetDependencyList = NodeList<TargetDependency>;

impl NodeList<TargetDependency> {
    /// Append a product from this package graph.
    pub fn product(&mut self, name: impl Into<String>) -> &mut TargetDependency {
        self.push(TargetDependency::Product {
            name: name.into(),
            package: None,
            condition: None,
        })
    }

    /// Append a product vended by `package`.
    pub fn product_in(
        &mut self,
        name: impl Into<String>,
        package: impl Into<String>,
    ) -> &mut TargetDependency {
        self.push(TargetDependency::Product {
            name: name.into(),
            package: Some(package.into()),
            condition: None,
        })
    }

    /// Append `.target(name:)`.
    pub fn target(&mut self, name: impl Into<String>) -> &mut TargetDependency {
        self.push(TargetDependency::Target {
            name: name.into(),
            condition: None,
        })
    }

    /// Append `.byName(name:)`.
    pub fn by_name(&mut self, name: impl Into<String>) -> &mut TargetDependency {
        self.push(TargetDependency::ByName {
            name: name.into(),
            condition: None,
        })
    }

    /// Append a bare quoted name.
    pub fn literal(&mut self, name: impl Into<String>) -> &mut TargetDependency {
        self.push(TargetDependency::Literal { name: name.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setting::BuildConfiguration;

    #[test]
    fn test_literal_renders_bare_string() {
        let mut deps = TargetDependencyList::new();
        deps.literal("Core");
        assert_eq!(deps.render(), "[\n\t\"Core\"\n]");
    }

    #[test]
    fn test_product_with_package_and_condition() {
        let mut deps = TargetDependencyList::new();
        deps.product_in("Logging", "swift-log").when(|p| {
            p.linux();
        });
        assert_eq!(
            deps.render(),
            "[\n\
             \t.product(\n\
             \t\tname: \"Logging\",\n\
             \t\tpackage: \"swift-log\",\n\
             \t\tcondition: .when(platforms: [\n\
             \t\t\t.linux\n\
             \t\t])\n\
             \t)\n\
             ]"
        );
    }

    #[test]
    fn test_target_and_by_name_keywords() {
        let mut deps = TargetDependencyList::new();
        deps.target("Core");
        deps.by_name("Utils");
        assert_eq!(
            deps.render(),
            "[\n\t.target(\n\t\tname: \"Core\"\n\t),\n\t.byName(\n\t\tname: \"Utils\"\n\t)\n]"
        );
    }

    #[test]
    fn test_when_replaces_platforms_last_write_wins() {
        let mut deps = TargetDependencyList::new();
        let dep = deps.target("Core");
        dep.when(|p| {
            p.ios();
            p.tvos();
        });
        dep.when(|p| {
            p.macos();
        });
        let platforms = dep.condition().and_then(|c| c.platforms.as_ref());
        assert_eq!(platforms.map(|p| p.len()), Some(1));
        assert_eq!(
            dep.render(),
            ".target(\n\tname: \"Core\",\n\tcondition: .when(platforms: [\n\t\t.macOS\n\t])\n)"
        );
    }

    #[test]
    fn test_when_keeps_existing_configuration() {
        let mut dep = TargetDependency::ByName {
            name: "Mocks".into(),
            condition: Some(Condition {
                platforms: None,
                configuration: Some(BuildConfiguration::Debug),
            }),
        };
        dep.when(|p| {
            p.linux();
        });
        let condition = dep.condition().unwrap();
        assert_eq!(condition.configuration, Some(BuildConfiguration::Debug));
        assert!(condition.platforms.is_some());
    }

    #[test]
    fn test_literal_ignores_condition() {
        let mut deps = TargetDependencyList::new();
        deps.literal("Core").when(|p| {
            p.ios();
        });
        assert!(deps.get(0).unwrap().condition().is_none());
        assert_eq!(deps.render(), "[\n\t\"Core\"\n]");
    }
}
