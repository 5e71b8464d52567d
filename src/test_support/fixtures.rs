//! Fixtures for common test scenarios.

use crate::core::language::CxxLanguageStandard;
use crate::core::package::{swift_package, Package};
use crate::core::platform::{IosVersion, MacOsVersion};
use crate::core::setting::BuildConfiguration;
use crate::core::target::{SettingsLayer, SourceLayer};

/// A package touching every top-level collection.
pub fn sample_package() -> Package {
    swift_package("Sample", |p| {
        p.default_localization("en");
        p.platforms(|platforms| {
            platforms.ios().version(IosVersion::V15);
            platforms.macos().version(MacOsVersion::V12);
        });
        p.products(|products| {
            products.library("Sample", ["Sample"]);
            products.executable("sample-cli", ["SampleCLI"]);
        });
        p.dependencies(|deps| {
            deps.url("https://github.com/apple/swift-log.git")
                .version("1.4.0..<2.0.0");
            deps.path("../Shared");
        });
        p.targets(|targets| {
            targets.target("Sample", |t| {
                t.dependencies(|d| {
                    d.product_in("Logging", "swift-log");
                    d.by_name("Shared");
                })
                .resources(|r| {
                    r.process("Resources");
                })
                .swift_settings(|s| {
                    s.define("SAMPLE_DEBUG").when(|c| {
                        c.configuration(BuildConfiguration::Debug);
                    });
                });
            });
            targets.executable_target("SampleCLI", |t| {
                t.dependencies_named(["Sample"]);
            });
            targets.test_target("SampleTests", |t| {
                t.dependencies_named(["Sample"]);
            });
        });
        p.swift_language_versions(|v| {
            v.v5();
        });
        p.cxx_language_standard(CxxLanguageStandard::Cxx17);
    })
}

/// TOML descriptor with one library, its target and a test target.
pub fn fixture_descriptor_toml() -> &'static str {
    r#"name = "Fixture"

[[platforms]]
platform = "macOS"
version = "v13"

[[products]]
kind = "library"
name = "Fixture"
targets = ["Fixture"]

[[targets]]
kind = "target"
name = "Fixture"

[[targets]]
kind = "testTarget"
name = "FixtureTests"

[[targets.dependencies]]
kind = "target"
name = "Fixture"
"#
}

/// The same package as [`fixture_descriptor_toml`], in JSON.
pub fn fixture_descriptor_json() -> &'static str {
    r#"{
  "name": "Fixture",
  "platforms": [{"platform": "macOS", "version": "v13"}],
  "products": [{"kind": "library", "name": "Fixture", "targets": ["Fixture"]}],
  "targets": [
    {"kind": "target", "name": "Fixture"},
    {
      "kind": "testTarget",
      "name": "FixtureTests",
      "dependencies": [{"kind": "target", "name": "Fixture"}]
    }
  ]
}"#
}
