//! Hat table (record position 10).
//!
//! Hat codes are sparse (gaps at 20–27, 45–46, 48, 61–75 and 91) and some
//! codes are claimed by two names, so [`Hat`] is a validated code rather than
//! a Rust enum: a Rust enum cannot give two variants the same discriminant,
//! and collapsing them would make one of the names unreachable.  Code 39 keeps
//! the game files' misspelling `SHERRIFF` as an alias of `SHERIFF`.
//!
//! Every name is exposed as an associated constant.  Aliases are equal
//! constants, so `Hat::MINIME == Hat::NINJA_MASK` and a record holding either
//! one survives an encode/decode round trip unchanged.
//!
//! Codes 8 (`NIGHT_VISION`) and 88 (`UNKNOWN`) are valid in the game files
//! but what they look like in game has not been identified.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{small_code, Catalog};

/// A hat code known to the table.
///
/// The inner code is private; a `Hat` can only be obtained from a constant,
/// [`Catalog::from_code`], or [`Catalog::from_name`], so it is always defined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hat(u8);

/// `(code, names)`, ascending by code.  The first name is the primary one.
const HATS: &[(u8, &[&str])] = &[
    (0, &["NONE"]),
    (1, &["ASTRONAUT"]),
    (2, &["BASEBALL_CAP"]),
    (3, &["ALIEN"]),
    (4, &["BROWN_HAT"]),
    (5, &["PILOT"]),
    (6, &["DOUBLE_TOP_HAT"]),
    (7, &["FLOWER_POT"]),
    (8, &["NIGHT_VISION"]),
    (9, &["BUILDING_SITE"]),
    (10, &["OFFICER"]),
    (11, &["PAPER"]),
    (12, &["CLOWN"]),
    (13, &["POLICE"]),
    (14, &["SURGEON"]),
    (15, &["TOPHAT"]),
    (16, &["TOWEL"]),
    (17, &["BEARSKIN"]),
    (18, &["VIKING"]),
    (19, &["SECURITY"]),
    (28, &["PARTY"]),
    (29, &["WHITE_TOPHAT"]),
    (30, &["CROWN"]),
    (31, &["EYEBROWS"]),
    (32, &["HALO"]),
    (33, &["POINTED_HAT"]),
    (34, &["FLAT_CAP"]),
    (35, &["PLUNGER"]),
    (36, &["DIVING_GOGGLES"]),
    (37, &["STICKMAN"]),
    (38, &["TOPEE"]),
    (39, &["SHERIFF", "SHERRIFF"]),
    (40, &["TELESCOPE_EYE"]),
    (41, &["TOILET_PAPER"]),
    (42, &["LEPRECHAUN"]),
    (43, &["FEDORA"]),
    (44, &["SKI"]),
    (47, &["SURGICAL_MASK"]),
    (49, &["COWBOY"]),
    (50, &["BANANA"]),
    (51, &["BALACLAVA"]),
    (52, &["MOUSE_EARS"]),
    (53, &["CHEESE"]),
    (54, &["CHERRY"]),
    (55, &["FRIED_EGG"]),
    (56, &["BLACK_HAT"]),
    (57, &["FLAMINGO"]),
    (58, &["FLOWER"]),
    (59, &["ROMAN"]),
    (60, &["LEAVES"]),
    (76, &["ANTENNA"]),
    (77, &["BALLOON"]),
    (78, &["NEST"]),
    (79, &["NINJA_HEADBAND"]),
    (80, &["WET_FLOOR_SIGN"]),
    (81, &["CHEF"]),
    (82, &["BLUE_HAT"]),
    (83, &["BANDANA"]),
    (84, &["STICKY_NOTE"]),
    (85, &["FEZ"]),
    (86, &["PILOT_GREEN"]),
    (87, &["ELVIS"]),
    (88, &["UNKNOWN"]),
    (89, &["SOLDIER"]),
    (90, &["MINIME", "NINJA_MASK"]),
    (92, &["HORNS"]),
    (93, &["BOBBLE"]),
];

impl Hat {
    pub const NONE: Hat = Hat(0);
    pub const ASTRONAUT: Hat = Hat(1);
    pub const BASEBALL_CAP: Hat = Hat(2);
    pub const ALIEN: Hat = Hat(3);
    pub const BROWN_HAT: Hat = Hat(4);
    pub const PILOT: Hat = Hat(5);
    pub const DOUBLE_TOP_HAT: Hat = Hat(6);
    pub const FLOWER_POT: Hat = Hat(7);
    pub const NIGHT_VISION: Hat = Hat(8);
    pub const BUILDING_SITE: Hat = Hat(9);
    pub const OFFICER: Hat = Hat(10);
    pub const PAPER: Hat = Hat(11);
    pub const CLOWN: Hat = Hat(12);
    pub const POLICE: Hat = Hat(13);
    pub const SURGEON: Hat = Hat(14);
    pub const TOPHAT: Hat = Hat(15);
    pub const TOWEL: Hat = Hat(16);
    pub const BEARSKIN: Hat = Hat(17);
    pub const VIKING: Hat = Hat(18);
    pub const SECURITY: Hat = Hat(19);
    pub const PARTY: Hat = Hat(28);
    pub const WHITE_TOPHAT: Hat = Hat(29);
    pub const CROWN: Hat = Hat(30);
    pub const EYEBROWS: Hat = Hat(31);
    pub const HALO: Hat = Hat(32);
    pub const POINTED_HAT: Hat = Hat(33);
    pub const FLAT_CAP: Hat = Hat(34);
    pub const PLUNGER: Hat = Hat(35);
    pub const DIVING_GOGGLES: Hat = Hat(36);
    pub const STICKMAN: Hat = Hat(37);
    pub const TOPEE: Hat = Hat(38);
    pub const SHERIFF: Hat = Hat(39);
    pub const SHERRIFF: Hat = Hat(39);
    pub const TELESCOPE_EYE: Hat = Hat(40);
    pub const TOILET_PAPER: Hat = Hat(41);
    pub const LEPRECHAUN: Hat = Hat(42);
    pub const FEDORA: Hat = Hat(43);
    pub const SKI: Hat = Hat(44);
    pub const SURGICAL_MASK: Hat = Hat(47);
    pub const COWBOY: Hat = Hat(49);
    pub const BANANA: Hat = Hat(50);
    pub const BALACLAVA: Hat = Hat(51);
    pub const MOUSE_EARS: Hat = Hat(52);
    pub const CHEESE: Hat = Hat(53);
    pub const CHERRY: Hat = Hat(54);
    pub const FRIED_EGG: Hat = Hat(55);
    pub const BLACK_HAT: Hat = Hat(56);
    pub const FLAMINGO: Hat = Hat(57);
    pub const FLOWER: Hat = Hat(58);
    pub const ROMAN: Hat = Hat(59);
    pub const LEAVES: Hat = Hat(60);
    pub const ANTENNA: Hat = Hat(76);
    pub const BALLOON: Hat = Hat(77);
    pub const NEST: Hat = Hat(78);
    pub const NINJA_HEADBAND: Hat = Hat(79);
    pub const WET_FLOOR_SIGN: Hat = Hat(80);
    pub const CHEF: Hat = Hat(81);
    pub const BLUE_HAT: Hat = Hat(82);
    pub const BANDANA: Hat = Hat(83);
    pub const STICKY_NOTE: Hat = Hat(84);
    pub const FEZ: Hat = Hat(85);
    pub const PILOT_GREEN: Hat = Hat(86);
    pub const ELVIS: Hat = Hat(87);
    pub const UNKNOWN: Hat = Hat(88);
    pub const SOLDIER: Hat = Hat(89);
    pub const MINIME: Hat = Hat(90);
    /// Alias of [`Hat::MINIME`].
    pub const NINJA_MASK: Hat = Hat(90);
    pub const HORNS: Hat = Hat(92);
    pub const BOBBLE: Hat = Hat(93);

    /// Whether this code is shared by more than one name.
    pub fn has_aliases(self) -> bool {
        self.aliases().len() > 1
    }

    fn entry(code: u8) -> Option<&'static (u8, &'static [&'static str])> {
        HATS.binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|i| &HATS[i])
    }
}

impl Default for Hat {
    fn default() -> Self {
        Hat::NONE
    }
}

impl Catalog for Hat {
    const KIND: &'static str = "hat";

    fn code(self) -> u8 {
        self.0
    }

    fn from_code(code: i64) -> Option<Self> {
        let code = small_code(code)?;
        Self::entry(code).map(|_| Hat(code))
    }

    fn aliases(self) -> &'static [&'static str] {
        const UNLISTED: &[&str] = &["UNLISTED"];
        // Construction guarantees the code is in the table.
        match Self::entry(self.0) {
            Some(&(_, names)) => names,
            None => UNLISTED,
        }
    }

    fn all() -> Vec<Self> {
        HATS.iter().map(|&(code, _)| Hat(code)).collect()
    }
}

impl fmt::Debug for Hat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hat::{}({})", self.name(), self.0)
    }
}

named_catalog!(Hat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        assert!(HATS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_every_table_entry_has_a_name() {
        for &(code, names) in HATS {
            assert!(!names.is_empty(), "code {code} has no name");
        }
    }

    #[test]
    fn test_table_size() {
        let names: usize = HATS.iter().map(|(_, n)| n.len()).sum();
        assert_eq!(HATS.len(), 67, "distinct codes");
        assert_eq!(names, 69, "names including aliases");
    }

    #[test]
    fn test_code_90_resolves_to_primary_name() {
        // Arrange
        let first = Hat::from_code(90).expect("90 is defined");
        let second = Hat::from_code(90).expect("90 is defined");

        // Assert
        assert_eq!(first.name(), "MINIME");
        assert_eq!(first, second);
        assert!(first.has_aliases());
    }

    #[test]
    fn test_alias_constants_are_equal() {
        assert_eq!(Hat::MINIME, Hat::NINJA_MASK);
        assert_eq!(Hat::NINJA_MASK.code(), 90);
        assert_eq!(Hat::from_name("NINJA_MASK"), Some(Hat::MINIME));
        assert_eq!(Hat::NINJA_MASK.aliases(), &["MINIME", "NINJA_MASK"]);
    }

    #[test]
    fn test_game_file_spelling_resolves_to_sheriff() {
        assert_eq!(Hat::SHERRIFF, Hat::SHERIFF);
        assert_eq!(Hat::from_name("SHERRIFF"), Some(Hat::SHERIFF));
        assert_eq!(Hat::SHERRIFF.name(), "SHERIFF");
        assert_eq!(Hat::SHERIFF.aliases(), &["SHERIFF", "SHERRIFF"]);
    }

    #[test]
    fn test_unidentified_codes_are_still_valid() {
        assert_eq!(Hat::from_code(8), Some(Hat::NIGHT_VISION));
        assert_eq!(Hat::from_code(88), Some(Hat::UNKNOWN));
    }

    #[test]
    fn test_gap_codes_are_undefined() {
        for gap in [20, 27, 45, 46, 48, 61, 75, 91, 94] {
            assert_eq!(Hat::from_code(gap), None, "code {gap} should be undefined");
        }
    }

    #[test]
    fn test_constant_names_match_table() {
        assert_eq!(Hat::CROWN.name(), "CROWN");
        assert_eq!(Hat::SHERIFF.name(), "SHERIFF");
        assert_eq!(Hat::BOBBLE.code(), 93);
        assert!(!Hat::CROWN.has_aliases());
        assert!(Hat::SHERIFF.has_aliases());
    }

    #[test]
    fn test_debug_shows_name_and_code() {
        assert_eq!(format!("{:?}", Hat::CROWN), "Hat::CROWN(30)");
    }

    #[test]
    fn test_serde_round_trips_through_primary_name() {
        let json = serde_json::to_string(&Hat::NINJA_MASK).expect("serialize");
        assert_eq!(json, "\"MINIME\"");
        let back: Hat = serde_json::from_str("\"ninja_mask\"").expect("deserialize");
        assert_eq!(back, Hat::MINIME);
        assert!(serde_json::from_str::<Hat>("\"SOMBRERO\"").is_err());
    }
}
