//! Subcommand implementations.
//!
//! Each command renders its output to a `String` so the binary only has to
//! print it, and tests can check it without capturing stdout.

use prefs_core::codec::parse_token;
use prefs_core::{DecodeError, Field, FieldKind, Record, Value};

/// Width of the field-name column in tables.
const NAME_WIDTH: usize = 12;

/// Renders every field, one per line.
pub fn show(record: &Record) -> String {
    Field::ALL
        .into_iter()
        .map(|field| {
            format!(
                "{:<width$} {}\n",
                field.name(),
                describe(record, field),
                width = NAME_WIDTH
            )
        })
        .collect()
}

/// Renders the record as pretty JSON.
///
/// # Errors
///
/// Returns the serializer error; the record types always serialize, so this
/// does not happen in practice.
pub fn show_json(record: &Record) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Renders one field.
pub fn get(record: &Record, field: Field) -> String {
    describe(record, field)
}

/// Replaces one field from user input.
///
/// `input` is either the token exactly as the file spells it, or, for an
/// enumerated field, any name or alias of the wanted value.
///
/// # Errors
///
/// Returns the [`DecodeError`] describing why `input` is not acceptable.
pub fn set(record: &mut Record, field: Field, input: &str) -> Result<(), DecodeError> {
    let value = match field.code_for_name(input) {
        Some(code) => Value::Int(i64::from(code)),
        None => parse_token(field, input)?,
    };
    record.set(field, value)
}

/// Lists the codes of an enumerated field, or `None` for other fields.
pub fn codes(field: Field) -> Option<String> {
    let entries = field.code_entries()?;
    Some(
        entries
            .into_iter()
            .map(|entry| format!("{:>3}  {}\n", entry.code, entry.names.join(" = ")))
            .collect(),
    )
}

/// Lists the record schema.
pub fn fields() -> String {
    Field::ALL
        .into_iter()
        .map(|field| {
            format!(
                "{:>2}  {:<width$} {}\n",
                field.position(),
                field.name(),
                field.kind(),
                width = NAME_WIDTH
            )
        })
        .collect()
}

/// Human-readable rendering of one field: enumerated fields show their
/// primary name next to the code.
fn describe(record: &Record, field: Field) -> String {
    let value = record.get(field);
    match (field.kind(), &value) {
        (FieldKind::Code(_), Value::Int(code)) => {
            let name = u8::try_from(*code)
                .ok()
                .and_then(|code| {
                    field
                        .code_entries()?
                        .into_iter()
                        .find(|entry| entry.code == code)
                })
                .map_or("?", |entry| entry.names[0]);
            format!("{name} ({code})")
        }
        (FieldKind::Text, Value::Text(text)) => format!("{text:?}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs_core::{Color, Hat};

    const SAMPLE: &str = "Bob,1,2,0,True,False,True,0,False,True,30,100,100,0,0,3,0,True,0,False,0,0";

    fn sample() -> Record {
        SAMPLE.parse().expect("sample")
    }

    #[test]
    fn test_show_lists_every_field_in_order() {
        let out = show(&sample());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(lines[0].starts_with("name"));
        assert!(lines[2].contains("GREEN (2)"), "{}", lines[2]);
        assert!(lines[10].contains("CROWN (30)"), "{}", lines[10]);
        assert!(lines[21].starts_with("unknown21"));
    }

    #[test]
    fn test_get_renders_enum_name_and_code() {
        assert_eq!(get(&sample(), Field::Skin), "BLUEY (3)");
        assert_eq!(get(&sample(), Field::Sfx), "100");
        assert_eq!(get(&sample(), Field::CensorChat), "True");
    }

    #[test]
    fn test_get_name_is_quoted() {
        assert_eq!(get(&sample(), Field::Name), "\"Bob\"");
    }

    #[test]
    fn test_set_accepts_name_or_alias() {
        let mut record = sample();
        set(&mut record, Field::Color, "lime").expect("name");
        set(&mut record, Field::Hat, "NINJA_MASK").expect("alias");
        assert_eq!(record.color, Color::Lime);
        assert_eq!(record.hat, Hat::MINIME);
    }

    #[test]
    fn test_set_accepts_file_tokens() {
        let mut record = sample();
        set(&mut record, Field::Hat, "93").expect("code");
        set(&mut record, Field::Vsync, "True").expect("literal");
        set(&mut record, Field::Music, "0").expect("volume");
        assert_eq!(record.hat, Hat::BOBBLE);
        assert!(record.vsync);
        assert_eq!(record.music.get(), 0);
    }

    #[test]
    fn test_set_rejects_bad_input_without_changing_record() {
        // Arrange
        let mut record = sample();
        let before = record.clone();

        // Act / Assert
        assert!(set(&mut record, Field::Color, "MAUVE").is_err());
        assert!(set(&mut record, Field::Sfx, "256").is_err());
        assert!(set(&mut record, Field::Vsync, "yes").is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn test_set_rejects_name_with_separator() {
        // Arrange
        let mut record = sample();
        let before = record.clone();

        // Act
        let err = set(&mut record, Field::Name, "Bob,Jr").unwrap_err();

        // Assert
        assert!(matches!(err, DecodeError::InvalidText { field: Field::Name, .. }));
        assert_eq!(record, before);
        assert_eq!(record.to_string().parse::<Record>(), Ok(before));
    }

    #[test]
    fn test_set_accepts_original_spelling_alias() {
        let mut record = sample();
        set(&mut record, Field::Language, "PORTOGUESE").expect("alias");
        set(&mut record, Field::Hat, "sherriff").expect("alias");
        assert_eq!(record.language, prefs_core::Language::Portuguese);
        assert_eq!(record.hat, Hat::SHERIFF);
    }

    #[test]
    fn test_codes_shows_aliases_on_one_line() {
        let out = codes(Field::Hat).expect("hat is enumerated");
        assert!(out.lines().any(|l| l.trim() == "90  MINIME = NINJA_MASK"), "{out}");
        assert!(out.lines().any(|l| l.trim() == "39  SHERIFF = SHERRIFF"), "{out}");
        assert!(out.ends_with('\n'));
        assert!(codes(Field::Sfx).is_none());
    }

    #[test]
    fn test_fields_lists_schema() {
        let out = fields();
        assert_eq!(out.lines().count(), 22);
        assert!(out.contains("sfx"));
        assert!(out.contains("volume (0-255)"));
        assert!(out.contains("hat code"));
    }

    #[test]
    fn test_show_json_uses_names() {
        let json = show_json(&sample()).expect("json");
        assert!(json.contains("\"color\": \"GREEN\""), "{json}");
    }
}
