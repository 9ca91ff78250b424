use serde::{Deserialize, Serialize};

use crate::era::{Color, EraId};
use crate::lang::Language;
use crate::zone::Zone;

/// A top-level thematic unit of content, e.g. "Animal Planet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Identifier, unique across the catalog.
    pub id: String,
    /// English display name.
    pub name: String,
    /// Vietnamese display name.
    pub name_vi: String,
    /// Emoji glyph.
    pub emoji: String,
    /// Display color.
    pub color: Color,
    /// The era this planet belongs to.
    pub era: EraId,
    /// Whether the planet is open by default.
    pub unlocked: bool,
    /// Stars needed before progression logic opens the planet.
    pub required_stars: u32,
    /// Zones in teaching order.
    pub zones: Vec<Zone>,
}

impl Planet {
    /// Create a locked planet with a zero threshold and no zones.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        name_vi: impl Into<String>,
        emoji: impl Into<String>,
        color: u32,
        era: EraId,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_vi: name_vi.into(),
            emoji: emoji.into(),
            color: Color(color),
            era,
            unlocked: false,
            required_stars: 0,
            zones: Vec::new(),
        }
    }

    /// Open the planet by default.
    pub fn unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    /// Set the star threshold.
    pub fn required_stars(mut self, stars: u32) -> Self {
        self.required_stars = stars;
        self
    }

    /// Append a zone.
    pub fn zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    /// The display name in the requested language.
    pub fn name_in(&self, lang: Language) -> &str {
        lang.pick(&self.name, &self.name_vi)
    }

    /// Find a zone of this planet by id.
    pub fn find_zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Total number of words across all zones.
    pub fn word_count(&self) -> usize {
        self.zones.iter().map(Zone::word_count).sum()
    }

    /// Total number of example sentences across all zones.
    pub fn sentence_count(&self) -> usize {
        self.zones.iter().map(|z| z.sentences.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Word;

    fn sample() -> Planet {
        let fruit_words = [
            Word::new("apple", "táo", "🍎", "I eat an apple.", "Tôi ăn táo."),
            Word::new("grape", "nho", "🍇", "Grapes are sweet.", "Nho ngọt."),
        ];
        let fruit = Zone::new("fruit", "Fruits", "Trái cây", "🍎")
            .words(fruit_words);
        let tea = Word::new("tea", "trà", "🍵", "Tea is hot.", "Trà nóng.");
        let drink = Zone::new("drink", "Drinks", "Đồ uống", "🥤").words([tea]);
        Planet::new("food", "Food", "Đồ ăn", "🍎", 0xFFFB923C, EraId::Medieval)
            .required_stars(30)
            .zone(fruit)
            .zone(drink)
    }

    #[test]
    fn builder_sets_fields() {
        let planet = sample();
        assert_eq!(planet.era, EraId::Medieval);
        assert_eq!(planet.required_stars, 30);
        assert!(!planet.unlocked);
        assert_eq!(planet.zones.len(), 2);
        assert_eq!(planet.color.to_string(), "#FFFB923C");
    }

    #[test]
    fn find_zone_by_id() {
        let planet = sample();
        assert_eq!(planet.find_zone("drink").unwrap().name, "Drinks");
        assert!(planet.find_zone("meal").is_none());
    }

    #[test]
    fn counts_span_zones() {
        let planet = sample();
        assert_eq!(planet.word_count(), 3);
        assert_eq!(planet.sentence_count(), 0);
    }

    #[test]
    fn name_in_language() {
        let planet = sample();
        assert_eq!(planet.name_in(Language::Vi), "Đồ ăn");
    }
}
