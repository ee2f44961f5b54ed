//! Domain types for the playerPrefs record.
//!
//! Nothing in here touches the file system; the codec and storage modules
//! build on these types.

pub mod field;
pub mod record;
pub mod volume;

pub use field::{Field, FieldKind, UnknownField, Value, FIELD_COUNT};
pub use record::Record;
pub use volume::{Volume, VolumeError};
