//! The decoded player-preferences record.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Color, Control, Hat, Language, Pet, Skin};
use crate::codec::SEPARATOR;
use crate::domain::field::{Field, Value, FIELD_COUNT};
use crate::domain::volume::Volume;
use crate::error::DecodeError;

/// One player's preferences, as stored in the game's `playerPrefs` file.
///
/// Fields are public and strongly typed, so a `Record` can never hold an
/// undefined enum code or an out-of-range volume.  Positional access goes
/// through [`Record::get`] and [`Record::set`].
///
/// The `unknownN` fields are written by the game but their meaning has not
/// been mapped; `N` is the field's position in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Player name.  Must not contain a comma; see [`Record::validate`].
    pub name: String,
    pub control: Control,
    pub color: Color,
    pub unknown3: i64,
    pub unknown4: bool,
    pub unknown5: bool,
    pub unknown6: bool,
    pub unknown7: i64,
    pub unknown8: bool,
    pub unknown9: bool,
    pub hat: Hat,
    /// Sound effect volume.
    pub sfx: Volume,
    /// Music volume.
    pub music: Volume,
    pub unknown13: i64,
    pub unknown14: i64,
    pub skin: Skin,
    pub pet: Pet,
    pub censor_chat: bool,
    pub language: Language,
    pub vsync: bool,
    pub unknown20: i64,
    pub unknown21: i64,
}

impl Default for Record {
    /// Empty name, zero for every number, `False` for every flag.
    /// Code 0 is defined in every catalog, so the default is a valid record.
    fn default() -> Self {
        Self {
            name: String::new(),
            control: Control::default(),
            color: Color::default(),
            unknown3: 0,
            unknown4: false,
            unknown5: false,
            unknown6: false,
            unknown7: 0,
            unknown8: false,
            unknown9: false,
            hat: Hat::default(),
            sfx: Volume::default(),
            music: Volume::default(),
            unknown13: 0,
            unknown14: 0,
            skin: Skin::default(),
            pet: Pet::default(),
            censor_chat: false,
            language: Language::default(),
            vsync: false,
            unknown20: 0,
            unknown21: 0,
        }
    }
}

impl Record {
    /// Builds a record from one primitive value per field, in [`Field::ALL`]
    /// order.
    ///
    /// Each value goes through [`Record::set`], so construction applies the
    /// same checks as decoding.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldCount`] when the iterator does not yield
    /// exactly 22 values, or the first per-field error from [`Record::set`].
    pub fn from_values<I>(values: I) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: Vec<Value> = values.into_iter().collect();
        if values.len() != FIELD_COUNT {
            return Err(DecodeError::FieldCount {
                expected: FIELD_COUNT,
                found: values.len(),
            });
        }

        let mut record = Record::default();
        for (field, value) in Field::ALL.into_iter().zip(values) {
            record.set(field, value)?;
        }
        Ok(record)
    }

    /// Returns one field as its file-level primitive value.
    ///
    /// Enumerated fields yield their code, volumes their level.
    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::Name => Value::Text(self.name.clone()),
            Field::Control => code_value(self.control),
            Field::Color => code_value(self.color),
            Field::Unknown3 => Value::Int(self.unknown3),
            Field::Unknown4 => Value::Bool(self.unknown4),
            Field::Unknown5 => Value::Bool(self.unknown5),
            Field::Unknown6 => Value::Bool(self.unknown6),
            Field::Unknown7 => Value::Int(self.unknown7),
            Field::Unknown8 => Value::Bool(self.unknown8),
            Field::Unknown9 => Value::Bool(self.unknown9),
            Field::Hat => code_value(self.hat),
            Field::Sfx => Value::Int(self.sfx.into()),
            Field::Music => Value::Int(self.music.into()),
            Field::Unknown13 => Value::Int(self.unknown13),
            Field::Unknown14 => Value::Int(self.unknown14),
            Field::Skin => code_value(self.skin),
            Field::Pet => code_value(self.pet),
            Field::CensorChat => Value::Bool(self.censor_chat),
            Field::Language => code_value(self.language),
            Field::Vsync => Value::Bool(self.vsync),
            Field::Unknown20 => Value::Int(self.unknown20),
            Field::Unknown21 => Value::Int(self.unknown21),
        }
    }

    /// Replaces one field from a primitive value.
    ///
    /// The record is left unchanged when the value is rejected.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::KindMismatch`] if `value` is the wrong primitive kind.
    /// - [`DecodeError::UndefinedCode`] for an enumerated field given an
    ///   undefined code.
    /// - [`DecodeError::OutOfRange`] for `sfx` / `music` outside `0..=255`.
    /// - [`DecodeError::InvalidText`] for a name containing a comma.
    pub fn set(&mut self, field: Field, value: Value) -> Result<(), DecodeError> {
        match field {
            Field::Name => self.name = text(field, value)?,
            Field::Control => self.control = code(field, value)?,
            Field::Color => self.color = code(field, value)?,
            Field::Unknown3 => self.unknown3 = int(field, value)?,
            Field::Unknown4 => self.unknown4 = flag(field, value)?,
            Field::Unknown5 => self.unknown5 = flag(field, value)?,
            Field::Unknown6 => self.unknown6 = flag(field, value)?,
            Field::Unknown7 => self.unknown7 = int(field, value)?,
            Field::Unknown8 => self.unknown8 = flag(field, value)?,
            Field::Unknown9 => self.unknown9 = flag(field, value)?,
            Field::Hat => self.hat = code(field, value)?,
            Field::Sfx => self.sfx = volume(field, value)?,
            Field::Music => self.music = volume(field, value)?,
            Field::Unknown13 => self.unknown13 = int(field, value)?,
            Field::Unknown14 => self.unknown14 = int(field, value)?,
            Field::Skin => self.skin = code(field, value)?,
            Field::Pet => self.pet = code(field, value)?,
            Field::CensorChat => self.censor_chat = flag(field, value)?,
            Field::Language => self.language = code(field, value)?,
            Field::Vsync => self.vsync = flag(field, value)?,
            Field::Unknown20 => self.unknown20 = int(field, value)?,
            Field::Unknown21 => self.unknown21 = int(field, value)?,
        }
        Ok(())
    }

    /// Checks what the field types cannot enforce on their own: the name
    /// must not contain the separator, or the encoded line would split into
    /// too many fields.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidText`] for a name containing a comma.
    pub fn validate(&self) -> Result<(), DecodeError> {
        check_text(Field::Name, &self.name)
    }

    /// Every field value in file order.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        Field::ALL.into_iter().map(move |field| self.get(field))
    }
}

// ── Value conversion helpers ──────────────────────────────────────────────────

fn code_value<C: Catalog>(value: C) -> Value {
    Value::Int(i64::from(value.code()))
}

fn mismatch(field: Field, value: &Value) -> DecodeError {
    DecodeError::KindMismatch {
        field,
        expected: field.kind(),
        got: value.kind_name(),
    }
}

fn text(field: Field, value: Value) -> Result<String, DecodeError> {
    match value {
        Value::Text(s) => check_text(field, &s).map(|()| s),
        other => Err(mismatch(field, &other)),
    }
}

fn check_text(field: Field, s: &str) -> Result<(), DecodeError> {
    if s.contains(SEPARATOR) {
        return Err(DecodeError::InvalidText {
            field,
            value: s.to_string(),
        });
    }
    Ok(())
}

fn flag(field: Field, value: Value) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(mismatch(field, &other)),
    }
}

fn int(field: Field, value: Value) -> Result<i64, DecodeError> {
    match value {
        Value::Int(n) => Ok(n),
        other => Err(mismatch(field, &other)),
    }
}

fn code<C: Catalog>(field: Field, value: Value) -> Result<C, DecodeError> {
    let n = int(field, value)?;
    C::from_code(n).ok_or(DecodeError::UndefinedCode { field, code: n })
}

fn volume(field: Field, value: Value) -> Result<Volume, DecodeError> {
    let n = int(field, value)?;
    Volume::new(n).map_err(|e| DecodeError::OutOfRange {
        field,
        value: e.value,
    })
}
