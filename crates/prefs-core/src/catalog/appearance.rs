//! Cosmetic enumerations: crewmate color, skin, and pet.

use serde::{Deserialize, Serialize};

use super::{small_code, Catalog};

/// Crewmate color (record position 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Color {
    #[default]
    Red = 0,
    Blue = 1,
    Green = 2,
    Pink = 3,
    Orange = 4,
    Yellow = 5,
    Black = 6,
    White = 7,
    Purple = 8,
    Brown = 9,
    Cyan = 10,
    Lime = 11,
}

impl Color {
    pub const ALL: [Color; 12] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Pink,
        Color::Orange,
        Color::Yellow,
        Color::Black,
        Color::White,
        Color::Purple,
        Color::Brown,
        Color::Cyan,
        Color::Lime,
    ];
}

impl Catalog for Color {
    const KIND: &'static str = "color";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: i64) -> Option<Self> {
        // Colors are contiguous from zero, so the code doubles as an index.
        Self::ALL.get(usize::from(small_code(code)?)).copied()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Color::Red => &["RED"],
            Color::Blue => &["BLUE"],
            Color::Green => &["GREEN"],
            Color::Pink => &["PINK"],
            Color::Orange => &["ORANGE"],
            Color::Yellow => &["YELLOW"],
            Color::Black => &["BLACK"],
            Color::White => &["WHITE"],
            Color::Purple => &["PURPLE"],
            Color::Brown => &["BROWN"],
            Color::Cyan => &["CYAN"],
            Color::Lime => &["LIME"],
        }
    }

    fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

/// Outfit (record position 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Skin {
    #[default]
    None = 0,
    Astronaut = 1,
    Pilot = 2,
    Bluey = 3,
    Soldier = 4,
    Police = 5,
    LabCoat = 6,
    SuitBlack = 7,
    SuitWhite = 8,
    Security = 9,
}

impl Skin {
    pub const ALL: [Skin; 10] = [
        Skin::None,
        Skin::Astronaut,
        Skin::Pilot,
        Skin::Bluey,
        Skin::Soldier,
        Skin::Police,
        Skin::LabCoat,
        Skin::SuitBlack,
        Skin::SuitWhite,
        Skin::Security,
    ];
}

impl Catalog for Skin {
    const KIND: &'static str = "skin";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: i64) -> Option<Self> {
        Self::ALL.get(usize::from(small_code(code)?)).copied()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Skin::None => &["NONE"],
            Skin::Astronaut => &["ASTRONAUT"],
            Skin::Pilot => &["PILOT"],
            Skin::Bluey => &["BLUEY"],
            Skin::Soldier => &["SOLDIER"],
            Skin::Police => &["POLICE"],
            Skin::LabCoat => &["LAB_COAT"],
            Skin::SuitBlack => &["SUIT_BLACK"],
            Skin::SuitWhite => &["SUIT_WHITE"],
            Skin::Security => &["SECURITY"],
        }
    }

    fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

/// Companion pet (record position 16).  Only the empty slot is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Pet {
    #[default]
    None = 0,
}

impl Catalog for Pet {
    const KIND: &'static str = "pet";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: i64) -> Option<Self> {
        (code == 0).then_some(Pet::None)
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Pet::None => &["NONE"],
        }
    }

    fn all() -> Vec<Self> {
        vec![Pet::None]
    }
}

named_catalog!(Color, Skin, Pet);
