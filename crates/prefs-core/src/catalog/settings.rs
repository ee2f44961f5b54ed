//! Game option enumerations: input scheme and interface language.

use serde::{Deserialize, Serialize};

use super::{small_code, Catalog};

/// Input scheme (record position 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Control {
    #[default]
    Mouse = 0,
    MouseAndKeyboard = 1,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Mouse, Control::MouseAndKeyboard];
}

impl Catalog for Control {
    const KIND: &'static str = "control";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: i64) -> Option<Self> {
        match small_code(code)? {
            0 => Some(Control::Mouse),
            1 => Some(Control::MouseAndKeyboard),
            _ => None,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Control::Mouse => &["MOUSE"],
            Control::MouseAndKeyboard => &["MOUSE_AND_KEYBOARD"],
        }
    }

    fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

/// Interface language (record position 18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Language {
    #[default]
    English = 0,
    Spanish = 1,
    Portuguese = 2,
    Korean = 3,
    Russian = 4,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::Portuguese,
        Language::Korean,
        Language::Russian,
    ];
}

impl Catalog for Language {
    const KIND: &'static str = "language";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: i64) -> Option<Self> {
        match small_code(code)? {
            0 => Some(Language::English),
            1 => Some(Language::Spanish),
            2 => Some(Language::Portuguese),
            3 => Some(Language::Korean),
            4 => Some(Language::Russian),
            _ => None,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Language::English => &["ENGLISH"],
            Language::Spanish => &["SPANISH"],
            Language::Portuguese => &["PORTUGUESE", "PORTOGUESE"],
            Language::Korean => &["KOREAN"],
            Language::Russian => &["RUSSIAN"],
        }
    }

    fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

named_catalog!(Control, Language);
