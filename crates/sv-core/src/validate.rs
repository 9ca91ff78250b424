//! Content rules for a catalog. A defect here is an authoring mistake, so the
//! built-in catalog is expected to validate clean.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::era::EraId;
use crate::error::{CatalogError, CatalogResult};
use crate::planet::Planet;
use crate::zone::Zone;

impl Catalog {
    /// Every content defect, in catalog order.
    pub fn validate(&self) -> Vec<CatalogError> {
        let mut issues = Vec::new();
        check_eras(self, &mut issues);

        let defined: HashSet<EraId> = self.time_eras().iter().map(|e| e.id).collect();
        let mut planet_ids = HashSet::new();
        for (index, planet) in self.planets().iter().enumerate() {
            if planet.id.is_empty() {
                issues.push(CatalogError::EmptyField {
                    location: format!("planet {index}"),
                    field: "id",
                });
            } else if !planet_ids.insert(planet.id.as_str()) {
                issues.push(CatalogError::DuplicatePlanet(planet.id.clone()));
            }
            if !defined.contains(&planet.era) {
                issues.push(CatalogError::DanglingEra {
                    planet: planet.id.clone(),
                    era: planet.era,
                });
            }
            check_planet(planet, &mut issues);
        }
        issues
    }

    /// The first content defect, if any.
    pub fn check(&self) -> CatalogResult<()> {
        match self.validate().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

fn check_eras(catalog: &Catalog, issues: &mut Vec<CatalogError>) {
    let mut seen = HashSet::new();
    for era in catalog.time_eras() {
        if !seen.insert(era.id) {
            issues.push(CatalogError::DuplicateEra(era.id));
        }
    }
    for era in EraId::ALL {
        if !seen.contains(&era) {
            issues.push(CatalogError::MissingEra(era));
        }
    }
}

fn check_planet(planet: &Planet, issues: &mut Vec<CatalogError>) {
    let mut zone_ids = HashSet::new();
    for (index, zone) in planet.zones.iter().enumerate() {
        if zone.id.is_empty() {
            issues.push(CatalogError::EmptyField {
                location: format!("{}/zone {index}", planet.id),
                field: "id",
            });
        } else if !zone_ids.insert(zone.id.as_str()) {
            issues.push(CatalogError::DuplicateZone {
                planet: planet.id.clone(),
                zone: zone.id.clone(),
            });
        }
        check_zone(&planet.id, zone, issues);
    }
}

fn check_zone(planet_id: &str, zone: &Zone, issues: &mut Vec<CatalogError>) {
    for (index, word) in zone.words.iter().enumerate() {
        let location = || format!("{planet_id}/{}/word {index}", zone.id);
        if word.english.trim().is_empty() {
            issues.push(CatalogError::EmptyField {
                location: location(),
                field: "english",
            });
        }
        if word.vietnamese.trim().is_empty() {
            issues.push(CatalogError::EmptyField {
                location: location(),
                field: "vietnamese",
            });
        }
    }

    for sentence in &zone.sentences {
        for highlight in &sentence.highlights {
            if highlight.is_empty() || !sentence.contains_highlight(highlight) {
                issues.push(CatalogError::HighlightNotFound {
                    location: format!("{planet_id}/{}", zone.id),
                    sentence: sentence.english.clone(),
                    highlight: highlight.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::era::TimeEra;
    use crate::zone::{Sentence, Word};

    fn tiny(planets: Vec<Planet>) -> Catalog {
        Catalog::new(content::time_eras(), planets)
    }

    fn farm() -> Zone {
        let dog = Word::new(
            "dog",
            "con chó",
            "🐕",
            "The dog is brown.",
            "Con chó màu nâu.",
        );
        Zone::new("farm", "Farm Animals", "Động vật nông trại", "🐄")
            .words([dog])
    }

    #[test]
    fn builtin_catalog_is_clean() {
        let issues = Catalog::builtin().validate();
        assert!(issues.is_empty(), "{issues:?}");
        assert!(Catalog::builtin().check().is_ok());
    }

    #[test]
    fn duplicate_planet_detected() {
        let planet = Planet::new("animal", "Animal Planet", "", "🐾", 0, EraId::Prehistoric);
        let catalog = tiny(vec![planet.clone(), planet]);
        assert!(matches!(
            catalog.check(),
            Err(CatalogError::DuplicatePlanet(id)) if id == "animal"
        ));
    }

    #[test]
    fn missing_and_duplicate_eras_detected() {
        let mut eras = content::time_eras();
        eras.truncate(2);
        eras.push(TimeEra::new(EraId::Prehistoric, "Again", "", "🦕", 0));
        let catalog = Catalog::new(eras, Vec::new());
        let issues = catalog.validate();
        assert!(matches!(
            issues[0],
            CatalogError::DuplicateEra(EraId::Prehistoric)
        ));
        assert!(matches!(issues[1], CatalogError::MissingEra(EraId::Modern)));
        assert!(matches!(issues[2], CatalogError::MissingEra(EraId::Future)));
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn planet_with_undefined_era_detected() {
        let mut eras = content::time_eras();
        eras.retain(|e| e.id != EraId::Future);
        let planet = Planet::new("travel", "Travel Planet", "", "✈️", 0, EraId::Future);
        let issues = Catalog::new(eras, vec![planet]).validate();
        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogError::DanglingEra { planet, era: EraId::Future } if planet == "travel"
        )));
    }

    #[test]
    fn duplicate_zone_detected() {
        let planet = Planet::new("animal", "Animal Planet", "", "🐾", 0, EraId::Prehistoric)
            .zone(farm())
            .zone(farm());
        let issues = tiny(vec![planet]).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "duplicate zone id \"farm\" in planet \"animal\""
        );
    }

    #[test]
    fn same_zone_id_in_different_planets_is_fine() {
        let a = Planet::new("a", "A", "A", "🅰️", 0, EraId::Modern).zone(farm());
        let b = Planet::new("b", "B", "B", "🅱️", 0, EraId::Modern).zone(farm());
        assert!(tiny(vec![a, b]).validate().is_empty());
    }

    #[test]
    fn empty_word_fields_detected() {
        let zone = farm().words([Word::new("cat", " ", "🐱", "", "")]);
        let planet = Planet::new("animal", "Animal Planet", "", "🐾", 0, EraId::Prehistoric)
            .zone(zone);
        let issues = tiny(vec![planet]).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "empty vietnamese at animal/farm/word 0"
        );
    }

    #[test]
    fn highlight_outside_sentence_detected() {
        let sentence = Sentence::new("I see a cat.", "Tôi thấy con mèo.", &["cat", "dog"]);
        let zone = farm().sentences([sentence]);
        let planet = Planet::new("animal", "Animal Planet", "", "🐾", 0, EraId::Prehistoric)
            .zone(zone);
        let issues = tiny(vec![planet]).validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            CatalogError::HighlightNotFound { highlight, .. } if highlight == "dog"
        ));
    }

    #[test]
    fn empty_ids_detected() {
        let planet = Planet::new("", "Nameless", "", "❓", 0, EraId::Medieval)
            .zone(Zone::new("", "Nowhere", "", "❓"));
        let issues = tiny(vec![planet]).validate();
        let fields: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        assert_eq!(fields, ["empty id at planet 0", "empty id at /zone 0"]);
    }
}
