//! Supported platforms and their deployment versions.
//!
//! A `SupportedPlatform` renders as `.iOS`, `.iOS(.v13)` or `.iOS("13.0")`.
//! The same node is used inside `.when(platforms: ...)` conditions, where it
//! is normally left without a version.

use serde::{Deserialize, Serialize};

use crate::util::list::NodeList;
use crate::util::render::{quoted, symbol, Render};
use crate::util::symbol::symbolic_enum;

/// Platform identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "macOS")]
    MacOs,
    #[serde(rename = "watchOS")]
    WatchOs,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "visionOS")]
    VisionOs,
    #[serde(rename = "driverKit")]
    DriverKit,
    #[serde(rename = "macCatalyst")]
    MacCatalyst,
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "wasi")]
    Wasi,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "openbsd")]
    OpenBsd,
    /// Platform unknown to PackageDescription, identified by name
    #[serde(rename = "custom")]
    Custom(String),
}

impl Platform {
    /// Identifier as written in a manifest (without the leading `.`).
    pub fn identifier(&self) -> &str {
        match self {
            Platform::Ios => "iOS",
            Platform::MacOs => "macOS",
            Platform::WatchOs => "watchOS",
            Platform::TvOs => "tvOS",
            Platform::VisionOs => "visionOS",
            Platform::DriverKit => "driverKit",
            Platform::MacCatalyst => "macCatalyst",
            Platform::Linux => "linux",
            Platform::Android => "android",
            Platform::Wasi => "wasi",
            Platform::Windows => "windows",
            Platform::OpenBsd => "openbsd",
            Platform::Custom(name) => name,
        }
    }

    /// Check if this is a custom platform.
    pub fn is_custom(&self) -> bool {
        matches!(self, Platform::Custom(_))
    }
}

/// Symbolic deployment version such as `v13` or `v10_15`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionSymbol(String);

impl VersionSymbol {
    /// Create a symbol from its name.
    pub fn new(name: impl Into<String>) -> Self {
        VersionSymbol(name.into())
    }

    /// Get the symbol name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

symbolic_enum! {
    /// iOS deployment versions.
    pub enum IosVersion {
        V8 => "v8", V9 => "v9", V10 => "v10", V11 => "v11", V12 => "v12",
        V13 => "v13", V14 => "v14", V15 => "v15", V16 => "v16", V17 => "v17",
        V18 => "v18",
    }
}

symbolic_enum! {
    /// macOS deployment versions.
    pub enum MacOsVersion {
        V10_10 => "v10_10", V10_11 => "v10_11", V10_12 => "v10_12",
        V10_13 => "v10_13", V10_14 => "v10_14", V10_15 => "v10_15",
        V11 => "v11", V12 => "v12", V13 => "v13", V14 => "v14", V15 => "v15",
    }
}

symbolic_enum! {
    /// watchOS deployment versions.
    pub enum WatchOsVersion {
        V2 => "v2", V3 => "v3", V4 => "v4", V5 => "v5", V6 => "v6", V7 => "v7",
        V8 => "v8", V9 => "v9", V10 => "v10", V11 => "v11",
    }
}

symbolic_enum! {
    /// tvOS deployment versions.
    pub enum TvOsVersion {
        V9 => "v9", V10 => "v10", V11 => "v11", V12 => "v12", V13 => "v13",
        V14 => "v14", V15 => "v15", V16 => "v16", V17 => "v17", V18 => "v18",
    }
}

symbolic_enum! {
    /// visionOS deployment versions.
    pub enum VisionOsVersion {
        V1 => "v1", V2 => "v2",
    }
}

symbolic_enum! {
    /// DriverKit deployment versions.
    pub enum DriverKitVersion {
        V19 => "v19", V20 => "v20", V21 => "v21", V22 => "v22", V23 => "v23",
        V24 => "v24",
    }
}

symbolic_enum! {
    /// Mac Catalyst deployment versions.
    pub enum MacCatalystVersion {
        V13 => "v13", V14 => "v14", V15 => "v15", V16 => "v16", V17 => "v17",
        V18 => "v18",
    }
}

macro_rules! impl_version_symbol {
    ($($name:ident),+) => {
        $(
            impl From<$name> for VersionSymbol {
                fn from(version: $name) -> Self {
                    VersionSymbol::new(version.symbol())
                }
            }
        )+
    };
}

impl_version_symbol!(
    IosVersion,
    MacOsVersion,
    WatchOsVersion,
    TvOsVersion,
    VisionOsVersion,
    DriverKitVersion,
    MacCatalystVersion
);

/// A platform entry, optionally carrying a minimum deployment version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedPlatform {
    /// Platform identifier
    pub platform: Platform,

    /// Literal version, e.g. `"13.0"`; wins over `version_symbol`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_string: Option<String>,

    /// Symbolic version, e.g. `v13`
    #[serde(default, rename = "version", skip_serializing_if = "Option::is_none")]
    pub version_symbol: Option<VersionSymbol>,
}

impl SupportedPlatform {
    /// Create a platform entry with no version.
    pub fn new(platform: Platform) -> Self {
        SupportedPlatform {
            platform,
            version_string: None,
            version_symbol: None,
        }
    }

    /// Set the symbolic minimum version.
    pub fn version(&mut self, version: impl Into<VersionSymbol>) -> &mut Self {
        self.version_symbol = Some(version.into());
        self
    }

    /// Set a literal minimum version string.
    pub fn version_string(&mut self, version: impl Into<String>) -> &mut Self {
        self.version_string = Some(version.into());
        self
    }

    fn literal_version(&self) -> Option<&str> {
        self.version_string.as_deref().filter(|v| !v.is_empty())
    }
}

impl Render for SupportedPlatform {
    fn render(&self) -> String {
        if let Platform::Custom(name) = &self.platform {
            return match self.literal_version() {
                Some(version) => {
                    format!(".custom({}, versionString: {})", quoted(name), quoted(version))
                }
                None => format!(".custom({})", quoted(name)),
            };
        }

        let mut out = symbol(self.platform.identifier());
        if let Some(version) = self.literal_version() {
            out.push_str(&format!("({})", quoted(version)));
        } else if let Some(version) = &self.version_symbol {
            out.push_str(&format!("({})", symbol(version.as_str())));
        }
        out
    }
}

/// Ordered list of platforms.
pub type PlatformList = NodeList<SupportedPlatform>;

impl NodeList<SupportedPlatform> {
    /// Append an arbitrary platform.
    pub fn platform(&mut self, platform: Platform) -> &mut SupportedPlatform {
        self.push(SupportedPlatform::new(platform))
    }

    /// Append `.iOS`.
    pub fn ios(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::Ios)
    }

    /// Append `.macOS`.
    pub fn macos(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::MacOs)
    }

    /// Append `.watchOS`.
    pub fn watchos(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::WatchOs)
    }

    /// Append `.tvOS`.
    pub fn tvos(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::TvOs)
    }

    /// Append `.visionOS`.
    pub fn visionos(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::VisionOs)
    }

    /// Append `.driverKit`.
    pub fn driverkit(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::DriverKit)
    }

    /// Append `.macCatalyst`.
    pub fn mac_catalyst(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::MacCatalyst)
    }

    /// Append `.linux`.
    pub fn linux(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::Linux)
    }

    /// Append `.android`.
    pub fn android(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::Android)
    }

    /// Append `.wasi`.
    pub fn wasi(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::Wasi)
    }

    /// Append `.windows`.
    pub fn windows(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::Windows)
    }

    /// Append `.openbsd`.
    pub fn openbsd(&mut self) -> &mut SupportedPlatform {
        self.platform(Platform::OpenBsd)
    }

    /// Append a custom platform with a literal version string.
    pub fn custom(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> &mut SupportedPlatform {
        let mut platform = SupportedPlatform::new(Platform::Custom(name.into()));
        platform.version_string(version);
        self.push(platform)
    }
}
