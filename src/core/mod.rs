//! Core data structures for Swift package manifests.
//!
//! This module contains the manifest object model:
//! - The package root and its top-level collections
//! - Platforms, products, package dependencies
//! - Targets, target dependencies and build settings
//! - Version constraint compilation

pub mod constraint;
pub mod dependency;
pub mod descriptor;
pub mod language;
pub mod package;
pub mod platform;
pub mod product;
pub mod provider;
pub mod resource;
pub mod setting;
pub mod target;
pub mod target_dependency;

pub use dependency::{DependencyLocation, PackageDependency, PackageDependencyList};
pub use descriptor::{DescriptorError, DescriptorFormat};
pub use language::{
    CLanguageStandard, CxxLanguageStandard, SwiftLanguageVersion, SwiftLanguageVersionList,
};
pub use package::{swift_package, Package};
pub use platform::{Platform, PlatformList, SupportedPlatform, VersionSymbol};
pub use product::{Linkage, Product, ProductList};
pub use provider::{PackageProvider, ProviderKind, ProviderList};
pub use resource::{Resource, ResourceList};
pub use setting::{
    BuildConfiguration, CompilerSetting, CompilerSettingList, Condition, LinkerSetting,
    LinkerSettingList, PluginUsage, PluginUsageList,
};
pub use target::{Target, TargetList};
pub use target_dependency::{TargetDependency, TargetDependencyList};
