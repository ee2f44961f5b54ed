//! Text codec for the playerPrefs record.
//!
//! Wire format: one line, 22 comma-separated tokens, in [`Field::ALL`] order.
//! ```text
//! name,control,color,unknown3,...,vsync,unknown20,unknown21
//! Bob,1,2,0,True,False,True,0,False,True,30,100,100,0,0,3,0,True,0,False,0,0
//! ```
//! No header, no quoting, no escaping.  Booleans are the literals `True` and
//! `False`; every enumerated field is its integer code.  The format belongs to
//! the game and must be reproduced exactly.

use std::str::FromStr;

use tracing::debug;

use crate::domain::{Field, FieldKind, Record, Value, FIELD_COUNT};
use crate::error::DecodeError;

/// Field separator.
pub const SEPARATOR: &str = ",";

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes one record.
///
/// # Errors
///
/// Returns [`DecodeError::FieldCount`] when the text does not split into
/// exactly 22 tokens.  Otherwise each token is parsed and assigned in file
/// order, and the first token that does not fit its field is reported.  A name containing a comma shifts every later field and is
/// therefore rejected as a field-count error.
///
/// # Examples
///
/// ```rust
/// use prefs_core::{decode, encode, Color, Hat};
///
/// let text = "Bob,1,2,0,True,False,True,0,False,True,30,100,100,0,0,3,0,True,0,False,0,0";
/// let record = decode(text).unwrap();
/// assert_eq!(record.color, Color::Green);
/// assert_eq!(record.hat, Hat::CROWN);
/// assert_eq!(encode(&record), text);
/// ```
pub fn decode(text: &str) -> Result<Record, DecodeError> {
    let tokens: Vec<&str> = text.split(SEPARATOR).collect();
    if tokens.len() != FIELD_COUNT {
        debug!("rejecting record with {} fields", tokens.len());
        return Err(DecodeError::FieldCount {
            expected: FIELD_COUNT,
            found: tokens.len(),
        });
    }

    let mut record = Record::default();
    for (field, token) in Field::ALL.into_iter().zip(tokens) {
        parse_token(field, token)
            .and_then(|value| record.set(field, value))
            .map_err(|e| {
                debug!("rejecting record: {e}");
                e
            })?;
    }
    Ok(record)
}

/// Encodes one record as a single line without a trailing separator or
/// newline.
pub fn encode(record: &Record) -> String {
    record
        .values()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Parses one token into the primitive value its field expects.
///
/// Only the primitive level is checked here: literal spelling and integer
/// syntax.  Catalog membership, volume range and the name's separator check
/// happen when the value is assigned with [`Record::set`].
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLiteral`] for a boolean token other than
/// exactly `True` / `False`, or a non-integer token in a numeric field.
pub fn parse_token(field: Field, token: &str) -> Result<Value, DecodeError> {
    match field.kind() {
        FieldKind::Text => Ok(Value::Text(token.to_string())),
        FieldKind::Bool => match token {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            _ => Err(DecodeError::InvalidLiteral {
                field,
                value: token.to_string(),
                expected: "boolean",
            }),
        },
        FieldKind::Int | FieldKind::Code(_) | FieldKind::Volume => token
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| DecodeError::InvalidLiteral {
                field,
                value: token.to_string(),
                expected: "integer",
            }),
    }
}

impl FromStr for Record {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(self))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
