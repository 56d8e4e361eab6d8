//! Validated CSS class names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{IconError, SUI_ICONS_PREFIX, SuiIcon};

/// A CSS class name that exists in the `sui-icons` font.
///
/// Only the font's own class strings can be turned into this type, so holding
/// one means the class renders a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuiIconClassName(SuiIcon);

impl SuiIconClassName {
    /// Validate a class string.
    ///
    /// # Errors
    ///
    /// [`IconError::MissingPrefix`] if `class` does not start with
    /// [`SUI_ICONS_PREFIX`], [`IconError::UnknownClassName`] if the rest is not
    /// an icon name.
    pub fn new(class: &str) -> Result<Self, IconError> {
        strip_prefix(class).map(Self)
    }

    pub(crate) const fn from_icon(icon: SuiIcon) -> Self {
        Self(icon)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0.class_name()
    }

    #[must_use]
    pub const fn icon(self) -> SuiIcon {
        self.0
    }

    /// The class name with the prefix removed, which is the icon name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        self.0.name()
    }
}

/// Reverse lookup: strip [`SUI_ICONS_PREFIX`] from a class name and resolve the icon.
///
/// # Errors
///
/// [`IconError::MissingPrefix`] when the prefix is absent and
/// [`IconError::UnknownClassName`] when the suffix names no icon.
pub fn strip_prefix(class: &str) -> Result<SuiIcon, IconError> {
    let Some(suffix) = class.strip_prefix(SUI_ICONS_PREFIX) else {
        tracing::debug!(class, "class name is missing the icon prefix");
        return Err(IconError::MissingPrefix(class.to_string()));
    };

    SuiIcon::from_name(suffix).ok_or_else(|| {
        tracing::debug!(class, suffix, "unknown icon class name");
        IconError::UnknownClassName(class.to_string())
    })
}

impl From<SuiIcon> for SuiIconClassName {
    fn from(icon: SuiIcon) -> Self {
        Self(icon)
    }
}

impl fmt::Display for SuiIconClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SuiIconClassName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SuiIconClassName {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SuiIconClassName {
    type Error = IconError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for SuiIconClassName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SuiIconClassName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for SuiIconClassName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SuiIconClassName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)
            .and_then(|s| Self::new(&s).map_err(serde::de::Error::custom))
    }
}

#[cfg(test)]
mod tests {
    use super::{SuiIconClassName, strip_prefix};
    use crate::{IconError, SuiIcon};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[test]
    fn accepts_every_class_in_the_font() {
        for icon in SuiIcon::iter() {
            let class = SuiIconClassName::new(icon.class_name()).expect("known class");
            assert_eq!(class.icon(), icon);
            assert_eq!(class.as_str(), icon.class_name());
            assert_eq!(class.suffix(), icon.name());
            assert_eq!(class, icon.class());
        }
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(
            SuiIconClassName::new("arrow-left"),
            Err(IconError::MissingPrefix("arrow-left".to_string()))
        );
        assert_eq!(
            SuiIconClassName::new("Sui-Icons-Buy"),
            Err(IconError::MissingPrefix("Sui-Icons-Buy".to_string()))
        );
        assert_eq!(
            SuiIconClassName::new(""),
            Err(IconError::MissingPrefix(String::new()))
        );
    }

    #[test]
    fn rejects_unknown_suffix() {
        assert_eq!(
            SuiIconClassName::new("sui-icons-nonexistent"),
            Err(IconError::UnknownClassName("sui-icons-nonexistent".to_string()))
        );
        assert_eq!(
            SuiIconClassName::new("sui-icons-buy"),
            Err(IconError::UnknownClassName("sui-icons-buy".to_string()))
        );
        assert!(SuiIconClassName::new("sui-icons-").is_err());
        assert!(SuiIconClassName::new("sui-icons-Buy ").is_err());
    }

    #[test]
    fn strip_prefix_resolves_icon() {
        assert_eq!(strip_prefix("sui-icons-Buy"), Ok(SuiIcon::Buy));
        assert_eq!(strip_prefix("sui-icons-arrow-left"), Ok(SuiIcon::ArrowLeft));
        assert_eq!(
            strip_prefix("sui-icons-sui-chevron-right"),
            Ok(SuiIcon::SuiChevronRight)
        );
    }

    #[test]
    fn conversions_are_lossless() {
        let class = SuiIconClassName::from(SuiIcon::Globe);
        assert_eq!(class, "sui-icons-globe");
        assert_eq!(SuiIcon::from(class), SuiIcon::Globe);
        assert_eq!("sui-icons-globe".parse::<SuiIconClassName>(), Ok(class));
        assert_eq!(SuiIconClassName::try_from("sui-icons-globe"), Ok(class));
        assert_eq!(class.to_string(), "sui-icons-globe");
        assert_eq!(class.as_ref(), "sui-icons-globe");
    }

    #[test]
    fn serde_uses_class_string() {
        let value = serde_json::to_value(SuiIcon::Tokens.class()).expect("serialize");
        assert_eq!(value, json!("sui-icons-tokens"));

        let class: SuiIconClassName =
            serde_json::from_value(json!("sui-icons-history")).expect("deserialize");
        assert_eq!(class.icon(), SuiIcon::History);

        assert!(serde_json::from_value::<SuiIconClassName>(json!("history")).is_err());
        assert!(serde_json::from_value::<SuiIconClassName>(json!("sui-icons-nope")).is_err());
    }

    #[test]
    fn restricts_fields_of_consumer_types() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Button {
            label: String,
            icon: SuiIconClassName,
        }

        let button: Button = serde_json::from_value(json!({
            "label": "Swap",
            "icon": "sui-icons-swap"
        }))
        .expect("deserialize button");
        assert_eq!(button.icon.icon(), SuiIcon::Swap);

        let bad = serde_json::from_value::<Button>(json!({
            "label": "Swap",
            "icon": "sui-icons-swapp"
        }));
        assert!(bad.is_err());
    }
}
