//! The record schema: field order, field kinds, and primitive values.
//!
//! [`Field::ALL`] is the only place the positional order of the file is
//! written down.  Decoding zips tokens with it, encoding maps over it, and
//! [`Record::from_values`](crate::Record::from_values) assigns in its order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{self, Catalog, CodeEntry, Color, Control, Hat, Language, Pet, Skin};

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 22;

/// One positional field of the record.  The discriminant is the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name = 0,
    Control = 1,
    Color = 2,
    Unknown3 = 3,
    Unknown4 = 4,
    Unknown5 = 5,
    Unknown6 = 6,
    Unknown7 = 7,
    Unknown8 = 8,
    Unknown9 = 9,
    Hat = 10,
    Sfx = 11,
    Music = 12,
    Unknown13 = 13,
    Unknown14 = 14,
    Skin = 15,
    Pet = 16,
    CensorChat = 17,
    Language = 18,
    Vsync = 19,
    Unknown20 = 20,
    Unknown21 = 21,
}

/// How a field's token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through verbatim.
    Text,
    /// The literal `True` or `False`.
    Bool,
    /// Any base-10 signed integer.
    Int,
    /// A base-10 integer that must be a defined code of the named catalog.
    Code(&'static str),
    /// A base-10 integer in `0..=255`.
    Volume,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("text"),
            FieldKind::Bool => f.write_str("boolean"),
            FieldKind::Int => f.write_str("integer"),
            FieldKind::Code(kind) => write!(f, "{kind} code"),
            FieldKind::Volume => f.write_str("volume (0-255)"),
        }
    }
}

/// `Field::from_str` failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0:?}")]
pub struct UnknownField(pub String);

impl Field {
    /// Every field, in file order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Control,
        Field::Color,
        Field::Unknown3,
        Field::Unknown4,
        Field::Unknown5,
        Field::Unknown6,
        Field::Unknown7,
        Field::Unknown8,
        Field::Unknown9,
        Field::Hat,
        Field::Sfx,
        Field::Music,
        Field::Unknown13,
        Field::Unknown14,
        Field::Skin,
        Field::Pet,
        Field::CensorChat,
        Field::Language,
        Field::Vsync,
        Field::Unknown20,
        Field::Unknown21,
    ];

    /// Zero-based position of the field in the file.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Control => "control",
            Field::Color => "color",
            Field::Unknown3 => "unknown3",
            Field::Unknown4 => "unknown4",
            Field::Unknown5 => "unknown5",
            Field::Unknown6 => "unknown6",
            Field::Unknown7 => "unknown7",
            Field::Unknown8 => "unknown8",
            Field::Unknown9 => "unknown9",
            Field::Hat => "hat",
            Field::Sfx => "sfx",
            Field::Music => "music",
            Field::Unknown13 => "unknown13",
            Field::Unknown14 => "unknown14",
            Field::Skin => "skin",
            Field::Pet => "pet",
            Field::CensorChat => "censor_chat",
            Field::Language => "language",
            Field::Vsync => "vsync",
            Field::Unknown20 => "unknown20",
            Field::Unknown21 => "unknown21",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name => FieldKind::Text,
            Field::Control => FieldKind::Code(Control::KIND),
            Field::Color => FieldKind::Code(Color::KIND),
            Field::Hat => FieldKind::Code(Hat::KIND),
            Field::Skin => FieldKind::Code(Skin::KIND),
            Field::Pet => FieldKind::Code(Pet::KIND),
            Field::Language => FieldKind::Code(Language::KIND),
            Field::Sfx | Field::Music => FieldKind::Volume,
            Field::Unknown4
            | Field::Unknown5
            | Field::Unknown6
            | Field::Unknown8
            | Field::Unknown9
            | Field::CensorChat
            | Field::Vsync => FieldKind::Bool,
            Field::Unknown3
            | Field::Unknown7
            | Field::Unknown13
            | Field::Unknown14
            | Field::Unknown20
            | Field::Unknown21 => FieldKind::Int,
        }
    }

    /// Lists the codes of an enumerated field.  `None` for other fields.
    pub fn code_entries(self) -> Option<Vec<CodeEntry>> {
        match self {
            Field::Control => Some(catalog::entries::<Control>()),
            Field::Color => Some(catalog::entries::<Color>()),
            Field::Hat => Some(catalog::entries::<Hat>()),
            Field::Skin => Some(catalog::entries::<Skin>()),
            Field::Pet => Some(catalog::entries::<Pet>()),
            Field::Language => Some(catalog::entries::<Language>()),
            _ => None,
        }
    }

    /// Resolves a symbolic name (or alias) of an enumerated field to its code.
    pub fn code_for_name(self, name: &str) -> Option<u8> {
        self.code_entries()?
            .into_iter()
            .find(|entry| entry.names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|entry| entry.code)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the field name in any ASCII case, with `-` standing in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A field value at the primitive level of the file: what a token parses to
/// before catalog and range checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl Value {
    /// The file-format spelling of the primitive kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value exactly as it appears in the file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}
