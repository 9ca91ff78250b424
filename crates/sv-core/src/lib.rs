//! Content catalog for Space Vocab: time eras, planets, zones, and words.
//!
//! The bundled curriculum is built once on first access and never mutated.
//! Use [`Catalog::builtin`] for the shared instance, or the free functions
//! below when only the bundled content is needed.

/// The catalog container and its lookup operations.
pub mod catalog;
/// The bundled curriculum payload.
pub mod content;
/// Time eras, era identifiers, and display colors.
pub mod era;
/// Error types used throughout the crate.
pub mod error;
/// Display language selection for bilingual names.
pub mod lang;
/// Planets: the top-level thematic units.
pub mod planet;
/// Query builder for filtering and searching words.
pub mod query;
/// Star-threshold evaluation for planet availability.
pub mod unlock;
/// Content validation rules.
pub mod validate;
/// Zones, words, and example sentences.
pub mod zone;

/// Re-export the catalog types.
pub use catalog::{Catalog, CatalogStats};
/// Re-export era types.
pub use era::{Color, EraId, TimeEra};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export the language selector.
pub use lang::Language;
/// Re-export planet types.
pub use planet::Planet;
/// Re-export query types.
pub use query::{WordHit, WordQuery};
/// Re-export zone content types.
pub use zone::{Sentence, Word, Zone};

/// All bundled planets in curriculum order.
pub fn list_planets() -> &'static [Planet] {
    Catalog::builtin().planets()
}

/// Bundled planets whose era id equals `era_id`. Unknown eras yield an empty list.
pub fn list_planets_by_era(era_id: &str) -> Vec<&'static Planet> {
    Catalog::builtin().planets_by_era(era_id)
}

/// Find a bundled planet by id.
pub fn find_planet_by_id(id: &str) -> Option<&'static Planet> {
    Catalog::builtin().planet(id)
}

/// The four bundled time eras in canonical order.
pub fn list_time_eras() -> &'static [TimeEra] {
    Catalog::builtin().time_eras()
}
