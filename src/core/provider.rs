//! System package providers for system-library targets.

use serde::{Deserialize, Serialize};

use crate::util::list::{owned_strings, NodeList};
use crate::util::render::{quoted_list, symbol, Render};
use crate::util::symbol::symbolic_enum;

symbolic_enum! {
    /// System package manager.
    pub enum ProviderKind {
        Brew => "brew",
        Apt => "apt",
        Yum => "yum",
    }
}

/// Packages that provide a system library through one package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageProvider {
    pub provider: ProviderKind,
    #[serde(default)]
    pub packages: Vec<String>,
}

impl Render for PackageProvider {
    fn render(&self) -> String {
        format!(
            "{}({})",
            symbol(self.provider.symbol()),
            quoted_list(&self.packages)
        )
    }
}

/// Ordered list of package providers.
pub type ProviderList = NodeList<PackageProvider>;

impl NodeList<PackageProvider> {
    /// Append a provider of the given kind.
    pub fn provider<I, S>(&mut self, provider: ProviderKind, packages: I) -> &mut PackageProvider
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(PackageProvider {
            provider,
            packages: owned_strings(packages),
        })
    }

    pub fn brew<I, S>(&mut self, packages: I) -> &mut PackageProvider
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider(ProviderKind::Brew, packages)
    }

    pub fn apt<I, S>(&mut self, packages: I) -> &mut PackageProvider
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider(ProviderKind::Apt, packages)
    }

    pub fn yum<I, S>(&mut self, packages: I) -> &mut PackageProvider
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider(ProviderKind::Yum, packages)
    }
}
