//! Enumerated values that render as `.symbol`.

use thiserror::Error;

/// Error returned when parsing a string that names no known symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} `{value}`, valid values: {expected}")]
pub struct UnknownSymbol {
    /// Enum the value was parsed as
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
    /// Comma-separated list of accepted symbols
    pub expected: String,
}

/// Declare a fieldless enum whose variants map one-to-one to manifest symbols.
///
/// Generates `symbol()`, `ALL`, `Display`, `FromStr`, serde support keyed
/// by the symbol, and a `Render` impl producing `.symbol`.
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $symbol:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $symbol)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Symbol written after the leading `.` in a manifest.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::util::symbol::UnknownSymbol;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.symbol() == s)
                    .ok_or_else(|| $crate::util::symbol::UnknownSymbol {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.symbol())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl $crate::util::render::Render for $name {
            fn render(&self) -> String {
                $crate::util::render::symbol(self.symbol())
            }
        }
    };
}

pub(crate) use symbolic_enum;
