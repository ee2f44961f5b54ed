//! # prefs-core
//!
//! Reads and writes the Among Us `playerPrefs` file: a single line of 22
//! comma-separated fields holding one player's preferences.
//!
//! - **`catalog`** – The closed enumerations stored as integer codes (control
//!   scheme, color, hat, skin, pet, language) behind a shared [`Catalog`]
//!   trait for lookup by code or by name.
//!
//! - **`domain`** – The [`Record`] itself, the [`Volume`] bounded integer,
//!   and the [`Field`] schema that fixes the order of the 22 fields.
//!
//! - **`codec`** – [`decode`] and [`encode`] between text and [`Record`].
//!
//! - **`storage`** – Whole-file [`read`] and atomic [`write`].
//!
//! The format is defined by the game and was reverse-engineered, so decoding
//! is strict: an unknown enum code or an unexpected literal is an error, never
//! silently accepted.

pub mod catalog;
pub mod codec;
pub mod domain;
pub mod error;
pub mod storage;

pub use catalog::{Catalog, CodeEntry, Color, Control, Hat, Language, Pet, Skin, UnknownName};
pub use codec::{decode, encode};
pub use domain::{Field, FieldKind, Record, UnknownField, Value, Volume, VolumeError, FIELD_COUNT};
pub use error::DecodeError;
pub use storage::{read, read_from, write, write_to, PrefsError};
