//! Closed enumerations used by the playerPrefs record.
//!
//! Every enumerated field in the file is stored as a small integer code
//! assigned by the game.  The codes are authoritative; the names are labels
//! chosen on this side and may be incomplete or best-guess.
//!
//! | Enumeration  | Codes                         | Module        |
//! |--------------|-------------------------------|---------------|
//! | [`Control`]  | 0–1                           | `settings`    |
//! | [`Language`] | 0–4                           | `settings`    |
//! | [`Color`]    | 0–11                          | `appearance`  |
//! | [`Skin`]     | 0–9                           | `appearance`  |
//! | [`Pet`]      | 0                             | `appearance`  |
//! | [`Hat`]      | sparse, 0–93, with aliases    | `hat`         |
//!
//! # Aliases
//!
//! A code may be claimed by more than one name (the hat table maps code 90 to
//! both `MINIME` and `NINJA_MASK`).  Each code has exactly one *primary* name,
//! returned by [`Catalog::name`]; every name, primary first, is returned by
//! [`Catalog::aliases`].  [`Catalog::from_name`] accepts any of them.
//!
//! Every enumeration displays and serializes as its primary name, and
//! deserializes from any of its names in any ASCII case.

/// Implements `Display`, `From<T> for String` and `TryFrom<String>` through
/// the [`Catalog`] names.  Pair with `#[serde(try_from = "String", into = "String")]`.
macro_rules! named_catalog {
    ($($ty:ty),+ $(,)?) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::catalog::Catalog::name(*self))
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                $crate::catalog::Catalog::name(value).to_string()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::catalog::UnknownName;

            fn try_from(name: String) -> Result<Self, Self::Error> {
                <$ty as $crate::catalog::Catalog>::from_name(&name).ok_or(
                    $crate::catalog::UnknownName {
                        kind: <$ty as $crate::catalog::Catalog>::KIND,
                        name,
                    },
                )
            }
        }
    )+};
}

pub mod appearance;
pub mod hat;
pub mod settings;

pub use appearance::{Color, Pet, Skin};
pub use hat::Hat;
pub use settings::{Control, Language};

use thiserror::Error;

/// A name that does not belong to the enumeration it was looked up in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

/// Shared interface of every enumeration in the record.
pub trait Catalog: Copy + Sized + 'static {
    /// Human-readable label of the enumeration, used in error messages.
    const KIND: &'static str;

    /// The integer code written to the file.
    fn code(self) -> u8;

    /// Looks up a value by code.  Returns `None` for undefined codes,
    /// including negative and too-large integers.
    fn from_code(code: i64) -> Option<Self>;

    /// All names for this value's code, primary name first.
    fn aliases(self) -> &'static [&'static str];

    /// Every defined value, in ascending code order.
    fn all() -> Vec<Self>;

    /// The primary name of this value.
    fn name(self) -> &'static str {
        self.aliases()[0]
    }

    /// Looks up a value by any of its names.  Matching ignores ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|value| {
            value
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

/// One row of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: u8,
    pub names: &'static [&'static str],
}

/// Lists every code of `C` together with all of its names.
pub fn entries<C: Catalog>() -> Vec<CodeEntry> {
    C::all()
        .into_iter()
        .map(|value| CodeEntry {
            code: value.code(),
            names: value.aliases(),
        })
        .collect()
}

/// Converts a signed integer to `u8` when it fits, for code lookups.
pub(crate) fn small_code(code: i64) -> Option<u8> {
    u8::try_from(code).ok()
}
