//! Icon registry for the `sui-icons` font.
//!
//! Every glyph in the font is applied through a CSS class made of
//! [`SUI_ICONS_PREFIX`] followed by the icon's symbolic name. This crate
//! exposes that table in two restricted forms:
//!
//! - [`SuiIcon`]: one variant per symbolic name (`Buy`, `arrow-left`, ...)
//! - [`SuiIconClassName`]: a class string that is known to exist in the font
//!
//! Strings from the outside world go through `FromStr`, `TryFrom` or serde and
//! come back as [`IconError`] when they name nothing in the font.

// Expands to the prefix literal so class names can be assembled with `concat!`.
macro_rules! prefix_literal {
    () => {
        "sui-icons-"
    };
}

mod class_name;
mod error;
mod icon;

pub use class_name::{SuiIconClassName, strip_prefix};
pub use error::IconError;
pub use icon::{IconEntry, SuiIcon};

/// Prefix shared by every class name in the font.
pub const SUI_ICONS_PREFIX: &str = prefix_literal!();
