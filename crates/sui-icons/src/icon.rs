//! The icon table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{IconError, SuiIconClassName};

/// Declares `SuiIcon` from `Variant => "name"` pairs.
///
/// Name, class name and variant all come from the same row, so the
/// forward and reverse lookups cannot disagree.
macro_rules! define_icons {
    ($($variant:ident => $name:literal,)+) => {
        /// An icon in the `sui-icons` font.
        ///
        /// Variants are declared in the font's generated order, which is also
        /// the `Ord` order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SuiIcon {
            $(
                #[doc = concat!("`", prefix_literal!(), $name, "`")]
                $variant,
            )+
        }

        impl SuiIcon {
            /// Number of icons in the font.
            pub const COUNT: usize = [$(stringify!($variant)),+].len();

            /// Every icon, in table order.
            pub const ALL: [SuiIcon; SuiIcon::COUNT] = [$(SuiIcon::$variant),+];

            /// Symbolic name, with the casing used in the font.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(SuiIcon::$variant => $name,)+
                }
            }

            /// CSS class that renders this glyph.
            #[must_use]
            pub const fn class_name(self) -> &'static str {
                match self {
                    $(SuiIcon::$variant => concat!(prefix_literal!(), $name),)+
                }
            }

            /// Rust variant name, e.g. `ArrowLeft` for `arrow-left`.
            #[must_use]
            pub const fn variant_name(self) -> &'static str {
                match self {
                    $(SuiIcon::$variant => stringify!($variant),)+
                }
            }

            /// Look up an icon by its exact symbolic name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(SuiIcon::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

define_icons! {
    Buy => "Buy",
    Download => "Download",
    Info => "Info",
    Plus => "Plus",
    Preview => "Preview",
    ThumbsUp => "ThumbsUp",
    Union => "Union",
    Activity => "activity",
    Apps => "apps",
    ArrowLeft => "arrow-left",
    ArrowRight => "arrow-right",
    Checkmark => "checkmark",
    Clipboard => "clipboard",
    Close => "close",
    Coins => "coins",
    Globe => "globe",
    HandCoins => "hand-coins",
    History => "history",
    Logout => "logout",
    Nfts => "nfts",
    PercentagePolygon => "percentage-polygon",
    Person => "person",
    Search => "search",
    SuiChevronRight => "sui-chevron-right",
    SuiLogoIcon => "sui-logo-icon",
    SuiLogoTxt => "sui-logo-txt",
    Swap => "swap",
    Tokens => "tokens",
    VersionIcon => "version-icon",
}

impl SuiIcon {
    /// Iterate over every icon in table order.
    pub fn iter() -> impl DoubleEndedIterator<Item = SuiIcon> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// Look up an icon by its full class name (`sui-icons-...`).
    #[must_use]
    pub fn from_class_name(class: &str) -> Option<Self> {
        class
            .strip_prefix(crate::SUI_ICONS_PREFIX)
            .and_then(Self::from_name)
    }

    /// The class name as a validated value.
    #[must_use]
    pub const fn class(self) -> SuiIconClassName {
        SuiIconClassName::from_icon(self)
    }

    /// One row of the table.
    #[must_use]
    pub const fn entry(self) -> IconEntry {
        IconEntry {
            variant: self.variant_name(),
            name: self.name(),
            class_name: self.class_name(),
        }
    }
}

impl fmt::Display for SuiIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for SuiIcon {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl FromStr for SuiIcon {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            tracing::debug!(name = s, "unknown icon name");
            IconError::UnknownIcon(s.to_string())
        })
    }
}

impl TryFrom<&str> for SuiIcon {
    type Error = IconError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SuiIconClassName> for SuiIcon {
    fn from(class: SuiIconClassName) -> Self {
        class.icon()
    }
}

impl Serialize for SuiIcon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SuiIcon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)
            .and_then(|s| s.parse().map_err(serde::de::Error::custom))
    }
}

/// A row of the icon table, as shown to tools that list the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    /// Rust variant name
    pub variant: &'static str,
    /// Symbolic name
    pub name: &'static str,
    #[serde(rename = "class")]
    pub class_name: &'static str,
}
