//! Language versions and standards declared at package level.

use serde::{Deserialize, Serialize};

use crate::util::list::NodeList;
use crate::util::render::{quoted, Render};
use crate::util::symbol::symbolic_enum;

/// Swift language mode the package is compatible with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwiftLanguageVersion {
    #[serde(rename = "v4")]
    V4,
    #[serde(rename = "v4_2")]
    V4_2,
    #[serde(rename = "v5")]
    V5,
    #[serde(rename = "v6")]
    V6,
    /// Any other version, rendered as `.version("...")`
    #[serde(rename = "version")]
    Custom(String),
}

impl Render for SwiftLanguageVersion {
    fn render(&self) -> String {
        match self {
            SwiftLanguageVersion::V4 => ".v4".to_string(),
            SwiftLanguageVersion::V4_2 => ".v4_2".to_string(),
            SwiftLanguageVersion::V5 => ".v5".to_string(),
            SwiftLanguageVersion::V6 => ".v6".to_string(),
            SwiftLanguageVersion::Custom(version) => format!(".version({})", quoted(version)),
        }
    }
}

/// Ordered list of Swift language versions.
pub type SwiftLanguageVersionList = NodeList<SwiftLanguageVersion>;

impl NodeList<SwiftLanguageVersion> {
    pub fn v4(&mut self) -> &mut SwiftLanguageVersion {
        self.push(SwiftLanguageVersion::V4)
    }

    pub fn v4_2(&mut self) -> &mut SwiftLanguageVersion {
        self.push(SwiftLanguageVersion::V4_2)
    }

    pub fn v5(&mut self) -> &mut SwiftLanguageVersion {
        self.push(SwiftLanguageVersion::V5)
    }

    pub fn v6(&mut self) -> &mut SwiftLanguageVersion {
        self.push(SwiftLanguageVersion::V6)
    }

    /// Append a version by its string form.
    pub fn version(&mut self, version: impl Into<String>) -> &mut SwiftLanguageVersion {
        self.push(SwiftLanguageVersion::Custom(version.into()))
    }
}

symbolic_enum! {
    /// C language standard.
    pub enum CLanguageStandard {
        C89 => "c89",
        C90 => "c90",
        C99 => "c99",
        C11 => "c11",
        C17 => "c17",
        C18 => "c18",
        C2x => "c2x",
        Gnu89 => "gnu89",
        Gnu90 => "gnu90",
        Gnu99 => "gnu99",
        Gnu11 => "gnu11",
        Gnu17 => "gnu17",
        Gnu18 => "gnu18",
        Gnu2x => "gnu2x",
        Iso9899_1990 => "iso9899_1990",
        Iso9899_199409 => "iso9899_199409",
        Iso9899_1999 => "iso9899_1999",
        Iso9899_2011 => "iso9899_2011",
        Iso9899_2017 => "iso9899_2017",
        Iso9899_2018 => "iso9899_2018",
    }
}

symbolic_enum! {
    /// C++ language standard.
    pub enum CxxLanguageStandard {
        Cxx98 => "cxx98",
        Cxx03 => "cxx03",
        Cxx11 => "cxx11",
        Cxx14 => "cxx14",
        Cxx1z => "cxx1z",
        Cxx17 => "cxx17",
        Cxx20 => "cxx20",
        Cxx2b => "cxx2b",
        GnuCxx98 => "gnucxx98",
        GnuCxx03 => "gnucxx03",
        GnuCxx11 => "gnucxx11",
        GnuCxx14 => "gnucxx14",
        GnuCxx1z => "gnucxx1z",
        GnuCxx17 => "gnucxx17",
        GnuCxx20 => "gnucxx20",
        GnuCxx2b => "gnucxx2b",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_versions_render_as_list() {
        let mut versions = SwiftLanguageVersionList::new();
        versions.v4_2();
        versions.v5();
        versions.version("5.9");
        assert_eq!(
            versions.render(),
            "[\n\t.v4_2,\n\t.v5,\n\t.version(\"5.9\")\n]"
        );
    }

    #[test]
    fn test_standards_parse_and_render() {
        assert_eq!("gnu11".parse::<CLanguageStandard>(), Ok(CLanguageStandard::Gnu11));
        assert_eq!(CLanguageStandard::Iso9899_199409.render(), ".iso9899_199409");
        assert_eq!(CxxLanguageStandard::GnuCxx17.render(), ".gnucxx17");
        assert!("c++17".parse::<CxxLanguageStandard>().is_err());
    }

    #[test]
    fn test_custom_version_deserializes() {
        let versions: Vec<SwiftLanguageVersion> =
            serde_json::from_str(r#"["v5", {"version": "5.10"}]"#).unwrap();
        assert_eq!(
            versions,
            vec![
                SwiftLanguageVersion::V5,
                SwiftLanguageVersion::Custom("5.10".into())
            ]
        );
    }
}
