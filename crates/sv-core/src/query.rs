use crate::catalog::Catalog;
use crate::era::EraId;
use crate::planet::Planet;
use crate::zone::{Word, Zone};

/// A word together with the planet and zone that hold it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordHit<'c> {
    /// The owning planet.
    pub planet: &'c Planet,
    /// The owning zone.
    pub zone: &'c Zone,
    /// The matching word.
    pub word: &'c Word,
}

/// A builder for filtering and searching words in a catalog.
///
/// Results come back in catalog order: planet, then zone, then word.
pub struct WordQuery<'c> {
    catalog: &'c Catalog,
    era_filter: Option<EraId>,
    planet_filter: Option<String>,
    zone_filter: Option<String>,
    text_contains: Option<String>,
    limit: Option<usize>,
    offset: usize,
}

impl<'c> WordQuery<'c> {
    /// Start an unfiltered query over `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            era_filter: None,
            planet_filter: None,
            zone_filter: None,
            text_contains: None,
            limit: None,
            offset: 0,
        }
    }

    /// Filter to planets of one era.
    pub fn era(mut self, era: EraId) -> Self {
        self.era_filter = Some(era);
        self
    }

    /// Filter to one planet by id.
    pub fn planet(mut self, id: impl Into<String>) -> Self {
        self.planet_filter = Some(id.into());
        self
    }

    /// Filter to zones with this id.
    pub fn zone(mut self, id: impl Into<String>) -> Self {
        self.zone_filter = Some(id.into());
        self
    }

    /// Filter to words whose English or Vietnamese text contains `s` (case-insensitive).
    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.text_contains = Some(s.into().to_lowercase());
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip the first N results.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = n;
        self
    }

    /// Execute the query and return matching words.
    pub fn execute(self) -> Vec<WordHit<'c>> {
        let hits = self.candidates().skip(self.offset);
        match self.limit {
            Some(limit) => hits.take(limit).collect(),
            None => hits.collect(),
        }
    }

    /// Count matching words, ignoring offset and limit.
    pub fn count(self) -> usize {
        self.candidates().count()
    }

    fn candidates(&self) -> impl Iterator<Item = WordHit<'c>> + '_ {
        let catalog: &'c Catalog = self.catalog;
        catalog
            .planets()
            .iter()
            .filter(move |planet| self.planet_matches(planet))
            .flat_map(move |planet| {
                planet
                    .zones
                    .iter()
                    .filter(move |zone| self.zone_matches(zone))
                    .flat_map(move |zone| {
                        zone.words
                            .iter()
                            .map(move |word| WordHit { planet, zone, word })
                    })
            })
            .filter(move |hit| self.word_matches(hit.word))
    }

    fn planet_matches(&self, planet: &Planet) -> bool {
        self.era_filter.is_none_or(|era| planet.era == era)
            && self
                .planet_filter
                .as_deref()
                .is_none_or(|id| planet.id == id)
    }

    fn zone_matches(&self, zone: &Zone) -> bool {
        self.zone_filter.as_deref().is_none_or(|id| zone.id == id)
    }

    fn word_matches(&self, word: &Word) -> bool {
        self.text_contains.as_deref().is_none_or(|s| {
            word.english.to_lowercase().contains(s) || word.vietnamese.to_lowercase().contains(s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn unfiltered_query_returns_every_word() {
        assert_eq!(catalog().words().count(), catalog().stats().words);
    }

    #[test]
    fn query_by_planet_and_zone() {
        let hits = catalog().words().planet("animal").zone("farm").execute();
        assert_eq!(hits.len(), 8);
        assert_eq!(hits[0].word.english, "dog");
        assert!(hits.iter().all(|h| h.zone.id == "farm"));
    }

    #[test]
    fn query_by_era() {
        let hits = catalog().words().era(EraId::Future).execute();
        assert!(hits.iter().all(|h| h.planet.era == EraId::Future));
        let expected: usize = catalog()
            .planets_in(EraId::Future)
            .iter()
            .map(|p| p.word_count())
            .sum();
        assert_eq!(hits.len(), expected);
    }

    #[test]
    fn text_matches_either_language() {
        let english = catalog().words().text("ELEPHANT").execute();
        assert_eq!(english.len(), 1);
        assert_eq!(english[0].planet.id, "animal");

        let vietnamese = catalog().words().text("phi hành gia").execute();
        let places: Vec<&str> = vietnamese.iter().map(|h| h.planet.id.as_str()).collect();
        assert_eq!(places, ["family", "travel"]);
    }

    #[test]
    fn repeated_words_are_reported_per_zone() {
        let hits = catalog().search("teacher");
        let zones: Vec<&str> = hits.iter().map(|h| h.zone.id.as_str()).collect();
        assert_eq!(zones, ["job", "classroom"]);
    }

    #[test]
    fn query_with_limit_and_offset() {
        let all = catalog().words().zone("farm").execute();
        let page = catalog().words().zone("farm").offset(2).limit(3).execute();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].word, all[2].word);
        assert_eq!(catalog().words().zone("farm").offset(2).limit(3).count(), 8);
    }

    #[test]
    fn unknown_filters_match_nothing() {
        assert!(catalog().words().planet("pluto").execute().is_empty());
        assert_eq!(catalog().words().text("xyzzy").count(), 0);
    }
}
