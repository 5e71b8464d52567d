//! End-to-end manifest generation tests.
//!
//! These tests drive the public API the way a caller would: configure a
//! package, or load a descriptor, and compare the rendered document.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use spm_manifest::core::constraint;
use spm_manifest::core::platform::Platform;
use spm_manifest::core::product::Linkage;
use spm_manifest::ops::{generate_from_file, generate_manifest};
use spm_manifest::{
    swift_package, BaseLayer, IosVersion, Package, Render, SettingsLayer, SourceLayer,
};

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

// ============================================================================
// Version constraints
// ============================================================================

#[rstest]
#[case("1.2.3", "from: \"1.2.3\"")]
#[case("1.2.3..<2.0.0", "\"1.2.3\"..<\"2.0.0\"")]
#[case("1.0.0...1.9.9", "\"1.0.0\"...\"1.9.9\"")]
#[case(">=1.0.0", ">=\"1.0.0\"")]
#[case("!=1.0.0", "!=\"1.0.0\"")]
#[case("==2.1.0", "==\"2.1.0\"")]
#[case("<2.0.0", "<\"2.0.0\"")]
fn test_constraint_forms(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(constraint::compile(input), expected);
}

// ============================================================================
// Package rendering
// ============================================================================

#[test]
fn test_empty_package_expression() {
    assert_eq!(
        Package::new("EmptyPackage").render(),
        "Package(\n\tname: \"EmptyPackage\"\n)"
    );
}

#[test]
fn test_library_package_document() {
    let package = swift_package("Networking", |p| {
        p.platforms(|platforms| {
            platforms.ios().version(IosVersion::V13);
            platforms.macos().version_string("10.15");
        });
        p.products(|products| {
            products.library("Networking", ["Networking"]);
        });
        p.dependencies(|deps| {
            deps.url("https://github.com/apple/swift-log.git")
                .version("1.4.0..<2.0.0");
        });
        p.targets(|targets| {
            targets.target("Networking", |t| {
                t.dependencies(|d| {
                    d.product_in("Logging", "swift-log");
                });
            });
            targets.test_target("NetworkingTests", |t| {
                t.dependencies_named(["Networking"]);
            });
        });
    });

    let expected = lines(&[
        "// swift-tools-version:5.3",
        "import PackageDescription",
        "",
        "let package = Package(",
        "\tname: \"Networking\",",
        "\tplatforms: [",
        "\t\t.iOS(.v13),",
        "\t\t.macOS(\"10.15\")",
        "\t],",
        "\tproducts: [",
        "\t\t.library(name: \"Networking\", targets: [\"Networking\"])",
        "\t],",
        "\tdependencies: [",
        "\t\t.package(",
        "\t\t\turl: \"https://github.com/apple/swift-log.git\",",
        "\t\t\t\"1.4.0\"..<\"2.0.0\"",
        "\t\t)",
        "\t],",
        "\ttargets: [",
        "\t\t.target(",
        "\t\t\tname: \"Networking\",",
        "\t\t\tdependencies: [",
        "\t\t\t\t.product(",
        "\t\t\t\t\tname: \"Logging\",",
        "\t\t\t\t\tpackage: \"swift-log\"",
        "\t\t\t\t)",
        "\t\t\t]",
        "\t\t),",
        "\t\t.testTarget(",
        "\t\t\tname: \"NetworkingTests\",",
        "\t\t\tdependencies: [",
        "\t\t\t\t\"Networking\"",
        "\t\t\t]",
        "\t\t)",
        "\t]",
        ")",
    ]);
    assert_eq!(generate_manifest(&package), expected);
}

#[test]
fn test_native_targets_and_settings() {
    let package = swift_package("Native", |p| {
        p.products(|products| {
            products.library_with_linkage("CNative", Linkage::Static, ["CNative"]);
        });
        p.targets(|targets| {
            targets.target("CNative", |t| {
                t.path("Sources/CNative")
                    .exclude(["README.md"])
                    .public_headers_path("include");
                t.c_settings(|c| {
                    c.header_search_path("internal");
                });
                t.linker_settings(|l| {
                    l.linked_library("z").when(|c| {
                        c.platforms(|p| {
                            p.linux();
                        });
                    });
                });
            });
            targets.system_library("CSQLite", |lib| {
                lib.pkg_config("sqlite3").providers(|p| {
                    p.brew(["sqlite"]);
                });
            });
        });
    });

    let expected = lines(&[
        "Package(",
        "\tname: \"Native\",",
        "\tproducts: [",
        "\t\t.library(name: \"CNative\", type: .static, targets: [\"CNative\"])",
        "\t],",
        "\ttargets: [",
        "\t\t.target(",
        "\t\t\tname: \"CNative\",",
        "\t\t\tpath: \"Sources/CNative\",",
        "\t\t\texclude: [\"README.md\"],",
        "\t\t\tpublicHeadersPath: \"include\",",
        "\t\t\tcSettings: [",
        "\t\t\t\t.headerSearchPath(\"internal\")",
        "\t\t\t],",
        "\t\t\tlinkerSettings: [",
        "\t\t\t\t.linkedLibrary(\"z\", .when(platforms: [",
        "\t\t\t\t\t.linux",
        "\t\t\t\t]))",
        "\t\t\t]",
        "\t\t),",
        "\t\t.systemLibrary(",
        "\t\t\tname: \"CSQLite\",",
        "\t\t\tpkgConfig: \"sqlite3\",",
        "\t\t\tproviders: [",
        "\t\t\t\t.brew([\"sqlite\"])",
        "\t\t\t]",
        "\t\t)",
        "\t]",
        ")",
    ]);
    assert_eq!(package.render(), expected);
}

#[test]
fn test_custom_platform_and_plugin_target() {
    let package = swift_package("Tools", |p| {
        p.platforms(|platforms| {
            platforms.platform(Platform::Custom("freebsd".into()));
        });
        p.targets(|targets| {
            targets.plugin("Lint", |t| {
                t.build_tool().dependencies_named(["LintTool"]);
            });
        });
    });

    let expected = lines(&[
        "Package(",
        "\tname: \"Tools\",",
        "\tplatforms: [",
        "\t\t.custom(\"freebsd\")",
        "\t],",
        "\ttargets: [",
        "\t\t.plugin(",
        "\t\t\tname: \"Lint\",",
        "\t\t\tcapability: .buildTool(),",
        "\t\t\tdependencies: [",
        "\t\t\t\t\"LintTool\"",
        "\t\t\t]",
        "\t\t)",
        "\t]",
        ")",
    ]);
    assert_eq!(package.render(), expected);
}

#[test]
fn test_rendering_twice_is_identical() {
    let package = swift_package("Stable", |p| {
        p.targets(|targets| {
            targets.executable_target("stable", |_| {});
        });
    });
    assert_eq!(package.render_document(), package.render_document());
}

// ============================================================================
// Descriptors
// ============================================================================

#[rstest]
#[case("package.toml", "name = \"Described\"\n\n[[targets]]\nkind = \"target\"\nname = \"Core\"\n")]
#[case(
    "package.json",
    r#"{"name": "Described", "targets": [{"kind": "target", "name": "Core"}]}"#
)]
fn test_descriptor_file_generation(#[case] file_name: &str, #[case] content: &str) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(file_name);
    std::fs::write(&path, content).unwrap();

    let expected = lines(&[
        "// swift-tools-version:5.3",
        "import PackageDescription",
        "",
        "let package = Package(",
        "\tname: \"Described\",",
        "\ttargets: [",
        "\t\t.target(",
        "\t\t\tname: \"Core\"",
        "\t\t)",
        "\t]",
        ")",
    ]);
    assert_eq!(generate_from_file(&path).unwrap(), expected);
}
