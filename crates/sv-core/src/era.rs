use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::lang::Language;

/// One of the four difficulty tiers. Declaration order is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EraId {
    /// Easiest tier, ages 5-7.
    Prehistoric,
    /// Ages 7-9.
    Medieval,
    /// Ages 8-10.
    Modern,
    /// Hardest tier, ages 10-12.
    Future,
}

impl EraId {
    /// Every era in canonical order.
    pub const ALL: [EraId; 4] = [
        EraId::Prehistoric,
        EraId::Medieval,
        EraId::Modern,
        EraId::Future,
    ];

    /// The lowercase tag used in ids and serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prehistoric => "prehistoric",
            Self::Medieval => "medieval",
            Self::Modern => "modern",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for EraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EraId {
    type Err = CatalogError;

    /// Exact, case-sensitive match against the four tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|era| era.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownEra(s.to_string()))
    }
}

/// A 32-bit ARGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Display metadata for an era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEra {
    /// The era tag.
    pub id: EraId,
    /// English display name.
    pub name: String,
    /// Vietnamese display name.
    pub name_vi: String,
    /// Emoji glyph.
    pub emoji: String,
    /// Display color.
    pub color: Color,
}

impl TimeEra {
    /// Create an era entry.
    pub fn new(
        id: EraId,
        name: impl Into<String>,
        name_vi: impl Into<String>,
        emoji: impl Into<String>,
        color: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            name_vi: name_vi.into(),
            emoji: emoji.into(),
            color: Color(color),
        }
    }

    /// The display name in the requested language.
    pub fn name_in(&self, lang: Language) -> &str {
        lang.pick(&self.name, &self.name_vi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_tags_round_trip_through_from_str() {
        for era in EraId::ALL {
            assert_eq!(era.as_str().parse::<EraId>().unwrap(), era);
        }
    }

    #[test]
    fn era_parse_is_case_sensitive() {
        assert!(matches!(
            "Medieval".parse::<EraId>(),
            Err(CatalogError::UnknownEra(s)) if s == "Medieval"
        ));
    }

    #[test]
    fn era_ordering_follows_difficulty() {
        assert!(EraId::Prehistoric < EraId::Medieval);
        assert!(EraId::Modern < EraId::Future);
    }

    #[test]
    fn era_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&EraId::Future).unwrap();
        assert_eq!(json, "\"future\"");
    }

    #[test]
    fn color_channels_and_display() {
        let c = Color(0xFF4ADE80);
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!(c.red(), 0x4A);
        assert_eq!(c.green(), 0xDE);
        assert_eq!(c.blue(), 0x80);
        assert_eq!(c.to_string(), "#FF4ADE80");
    }

    #[test]
    fn era_name_in_language() {
        let era = TimeEra::new(EraId::Future, "Future", "Tương lai", "🚀", 0xFFF0ABFC);
        assert_eq!(era.name_in(Language::En), "Future");
        assert_eq!(era.name_in(Language::Vi), "Tương lai");
    }
}
