use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::content;
use crate::era::{EraId, TimeEra};
use crate::error::{CatalogError, CatalogResult};
use crate::planet::Planet;
use crate::query::{WordHit, WordQuery};

/// Minimum Jaro-Winkler score for a planet id suggestion.
const SUGGEST_THRESHOLD: f64 = 0.6;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::new(content::time_eras(), content::planets());
    tracing::debug!(
        planets = catalog.planets.len(),
        words = catalog.stats().words,
        "built-in catalog constructed"
    );
    catalog
});

/// Element counts for a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Number of time eras.
    pub eras: usize,
    /// Number of planets.
    pub planets: usize,
    /// Number of zones across all planets.
    pub zones: usize,
    /// Number of words across all zones.
    pub words: usize,
    /// Number of example sentences across all zones.
    pub sentences: usize,
}

/// The immutable tree of learning content.
///
/// Every lookup is total: unknown ids and eras produce empty or absent
/// results, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    eras: Vec<TimeEra>,
    planets: Vec<Planet>,
}

impl Catalog {
    /// Assemble a catalog from eras and planets, in the order given.
    pub fn new(eras: Vec<TimeEra>, planets: Vec<Planet>) -> Self {
        Self { eras, planets }
    }

    /// The bundled curriculum, built on first access and shared thereafter.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a catalog from JSON and validate it.
    ///
    /// Every defect is logged; the first one is returned as the error.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let (catalog, issues) = Self::load_json(json)?;
        match issues.into_iter().next() {
            None => Ok(catalog),
            Some(first) => Err(first),
        }
    }

    /// Parse a catalog from JSON and return it with every content defect.
    ///
    /// Only malformed JSON is an error here. Each defect is logged at
    /// `warn` level.
    pub fn load_json(json: &str) -> CatalogResult<(Self, Vec<CatalogError>)> {
        let catalog: Catalog = serde_json::from_str(json)?;
        let issues = catalog.validate();
        for issue in &issues {
            tracing::warn!(issue = %issue, "catalog content defect");
        }
        Ok((catalog, issues))
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // -----------------------------------------------------------------------
    // Eras
    // -----------------------------------------------------------------------

    /// All time eras in canonical order.
    pub fn time_eras(&self) -> &[TimeEra] {
        &self.eras
    }

    /// Display metadata for one era.
    pub fn era(&self, id: EraId) -> Option<&TimeEra> {
        self.eras.iter().find(|e| e.id == id)
    }

    // -----------------------------------------------------------------------
    // Planets
    // -----------------------------------------------------------------------

    /// All planets in curriculum order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Planets whose era tag equals `era_id` exactly, in curriculum order.
    ///
    /// An unrecognized tag matches nothing.
    pub fn planets_by_era(&self, era_id: &str) -> Vec<&Planet> {
        self.planets
            .iter()
            .filter(|p| p.era.as_str() == era_id)
            .collect()
    }

    /// Planets of a given era, in curriculum order.
    pub fn planets_in(&self, era: EraId) -> Vec<&Planet> {
        self.planets.iter().filter(|p| p.era == era).collect()
    }

    /// Find a planet by id.
    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Planet ids resembling `input`, best first.
    ///
    /// Prefix matches rank above substring matches, which rank above
    /// Jaro-Winkler similarity.
    pub fn suggest_planet_ids(&self, input: &str, limit: usize) -> Vec<&str> {
        let input_lower = input.to_lowercase();
        let mut scored: Vec<(&str, f64)> = self
            .planets
            .iter()
            .filter_map(|planet| {
                let id = planet.id.as_str();
                if id.starts_with(&input_lower) {
                    Some((id, 2.0))
                } else if id.contains(&input_lower) {
                    Some((id, 1.0))
                } else {
                    let score = jaro_winkler(&input_lower, id);
                    (score >= SUGGEST_THRESHOLD).then_some((id, score))
                }
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(limit).map(|(id, _)| id).collect()
    }

    // -----------------------------------------------------------------------
    // Words
    // -----------------------------------------------------------------------

    /// Start building a word query.
    pub fn words(&self) -> WordQuery<'_> {
        WordQuery::new(self)
    }

    /// Words whose English or Vietnamese text contains `text`, ignoring case.
    pub fn search(&self, text: &str) -> Vec<WordHit<'_>> {
        self.words().text(text).execute()
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Count eras, planets, zones, words, and sentences.
    pub fn stats(&self) -> CatalogStats {
        let zones = self.planets.iter().flat_map(|p| &p.zones);
        let (zone_count, words, sentences) = zones.fold((0, 0, 0), |(z, w, s), zone| {
            (z + 1, w + zone.words.len(), s + zone.sentences.len())
        });
        CatalogStats {
            eras: self.eras.len(),
            planets: self.planets.len(),
            zones: zone_count,
            words,
            sentences,
        }
    }
}
