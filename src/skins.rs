//! Player skins (cosmetic only)

use serde::{Deserialize, Serialize};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Color set used to draw the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skin {
    pub name: &'static str,
    pub body: Color,
    pub eye: Color,
    pub pupil: Color,
    pub mouth: Color,
}

/// Available skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkinId {
    #[default]
    Red,
    Black,
    Yellow,
    Blue,
}

const RED_SKIN: Skin = Skin {
    name: "Rot",
    body: [1.0, 0.42, 0.42, 1.0],
    eye: WHITE,
    pupil: BLACK,
    mouth: BLACK,
};

const BLACK_SKIN: Skin = Skin {
    name: "Schwarz",
    body: [0.17, 0.24, 0.31, 1.0],
    eye: WHITE,
    pupil: [0.2, 0.6, 0.86, 1.0],
    mouth: WHITE,
};

const YELLOW_SKIN: Skin = Skin {
    name: "Gelb",
    body: [0.95, 0.77, 0.06, 1.0],
    eye: WHITE,
    pupil: BLACK,
    mouth: [0.9, 0.49, 0.13, 1.0],
};

const BLUE_SKIN: Skin = Skin {
    name: "Blau",
    body: [0.2, 0.6, 0.86, 1.0],
    eye: WHITE,
    pupil: [0.17, 0.24, 0.31, 1.0],
    mouth: WHITE,
};

impl SkinId {
    pub const ALL: [SkinId; 4] = [SkinId::Red, SkinId::Black, SkinId::Yellow, SkinId::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinId::Red => "red",
            SkinId::Black => "black",
            SkinId::Yellow => "yellow",
            SkinId::Blue => "blue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(SkinId::Red),
            "black" => Some(SkinId::Black),
            "yellow" => Some(SkinId::Yellow),
            "blue" => Some(SkinId::Blue),
            _ => None,
        }
    }

    /// Resolve a skin name, falling back to the default for unknown names
    pub fn from_name_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            log::warn!("Unknown skin '{}', using '{}'", s, SkinId::default().as_str());
            SkinId::default()
        })
    }

    pub fn skin(&self) -> &'static Skin {
        match self {
            SkinId::Red => &RED_SKIN,
            SkinId::Black => &BLACK_SKIN,
            SkinId::Yellow => &YELLOW_SKIN,
            SkinId::Blue => &BLUE_SKIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(SkinId::from_str("BLUE"), Some(SkinId::Blue));
        assert_eq!(SkinId::from_str("Yellow"), Some(SkinId::Yellow));
    }

    #[test]
    fn test_unknown_skin_falls_back() {
        assert_eq!(SkinId::from_name_or_default("plaid"), SkinId::Red);
        assert_eq!(SkinId::from_name_or_default("plaid").skin().name, "Rot");
    }

    #[test]
    fn test_names_roundtrip() {
        for id in SkinId::ALL {
            assert_eq!(SkinId::from_str(id.as_str()), Some(id));
        }
    }
}
