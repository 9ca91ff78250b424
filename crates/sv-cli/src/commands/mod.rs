pub mod check;
pub mod eras;
pub mod export;
pub mod planets;
pub mod search;
pub mod show;
pub mod stats;
pub mod unlocks;
pub mod zone;

use sv_core::{Catalog, EraId, Planet};

/// Look up a planet, suggesting close ids when it is missing.
fn find_planet<'c>(catalog: &'c Catalog, id: &str) -> Result<&'c Planet, String> {
    catalog.planet(id).ok_or_else(|| {
        let suggestions = catalog.suggest_planet_ids(id, 3);
        if suggestions.is_empty() {
            format!("planet not found: \"{id}\"")
        } else {
            format!(
                "planet not found: \"{id}\" (did you mean: {}?)",
                suggestions.join(", ")
            )
        }
    })
}

/// Parse an era id, listing the valid ones on failure.
fn parse_era(s: &str) -> Result<EraId, String> {
    s.parse::<EraId>().map_err(|e| {
        let valid: Vec<&str> = EraId::ALL.iter().map(|era| era.as_str()).collect();
        format!("{e}. Use: {}", valid.join(", "))
    })
}
