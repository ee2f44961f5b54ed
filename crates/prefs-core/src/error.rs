//! Error type shared by decoding and direct record construction.

use thiserror::Error;

use crate::domain::{Field, FieldKind};

/// Why a token or value was rejected.
///
/// Every variant except [`DecodeError::FieldCount`] names the offending field
/// and its position.  Decoding stops at the first error; there are no partial
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input does not split into exactly the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A boolean or integer token could not be parsed.
    #[error("field {field} (position {}): invalid {expected} literal {value:?}", .field.position())]
    InvalidLiteral {
        field: Field,
        value: String,
        expected: &'static str,
    },

    /// An enumerated field holds an integer that is not a defined code.
    #[error("field {field} (position {}): undefined enum code {code}", .field.position())]
    UndefinedCode { field: Field, code: i64 },

    /// A bounded field is outside `0..=255`.
    #[error("field {field} (position {}): value {value} is outside 0..=255", .field.position())]
    OutOfRange { field: Field, value: i64 },

    /// A text value contains the field separator, which the format cannot
    /// escape.
    #[error("field {field} (position {}): text {value:?} contains the separator ','", .field.position())]
    InvalidText { field: Field, value: String },

    /// A value of the wrong primitive kind was assigned to a field.
    #[error("field {field} (position {}): expected {expected}, got {got}", .field.position())]
    KindMismatch {
        field: Field,
        expected: FieldKind,
        got: &'static str,
    },
}

impl DecodeError {
    /// The field the error refers to, if it refers to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            DecodeError::FieldCount { .. } => None,
            DecodeError::InvalidLiteral { field, .. }
            | DecodeError::UndefinedCode { field, .. }
            | DecodeError::OutOfRange { field, .. }
            | DecodeError::InvalidText { field, .. }
            | DecodeError::KindMismatch { field, .. } => Some(*field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_identify_field_and_value() {
        let err = DecodeError::UndefinedCode {
            field: Field::Color,
            code: 12,
        };
        assert_eq!(err.to_string(), "field color (position 2): undefined enum code 12");

        let err = DecodeError::InvalidLiteral {
            field: Field::Vsync,
            value: "true".to_string(),
            expected: "boolean",
        };
        assert_eq!(
            err.to_string(),
            "field vsync (position 19): invalid boolean literal \"true\""
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = DecodeError::FieldCount {
            expected: 22,
            found: 21,
        };
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "expected 22 fields, found 21");

        let err = DecodeError::OutOfRange {
            field: Field::Music,
            value: 256,
        };
        assert_eq!(err.field(), Some(Field::Music));
    }

    #[test]
    fn test_invalid_text_message() {
        let err = DecodeError::InvalidText {
            field: Field::Name,
            value: "Bob,Jr".to_string(),
        };
        assert_eq!(err.field(), Some(Field::Name));
        assert_eq!(
            err.to_string(),
            "field name (position 0): text \"Bob,Jr\" contains the separator ','"
        );
    }
}
