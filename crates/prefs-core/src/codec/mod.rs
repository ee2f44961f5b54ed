//! Record codec: text ↔ [`Record`](crate::Record).

pub mod text;

pub use crate::error::DecodeError;
pub use text::{decode, encode, parse_token, SEPARATOR};
