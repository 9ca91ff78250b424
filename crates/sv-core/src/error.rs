use crate::era::EraId;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Content defects and load failures.
///
/// Lookups never produce these; they come from parsing era tags, loading
/// external catalogs, and validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The string is not one of the four era tags.
    #[error("unknown era: \"{0}\"")]
    UnknownEra(String),

    /// A canonical era has no `TimeEra` entry.
    #[error("missing era: {0}")]
    MissingEra(EraId),

    /// Two `TimeEra` entries share an id.
    #[error("duplicate era: {0}")]
    DuplicateEra(EraId),

    /// Two planets share an id.
    #[error("duplicate planet id: \"{0}\"")]
    DuplicatePlanet(String),

    /// A planet references an era that has no `TimeEra` entry.
    #[error("planet \"{planet}\" references era {era} which is not defined")]
    DanglingEra {
        /// The offending planet id.
        planet: String,
        /// The referenced era.
        era: EraId,
    },

    /// Two zones in the same planet share an id.
    #[error("duplicate zone id \"{zone}\" in planet \"{planet}\"")]
    DuplicateZone {
        /// The owning planet id.
        planet: String,
        /// The repeated zone id.
        zone: String,
    },

    /// A required text field is empty.
    #[error("empty {field} at {location}")]
    EmptyField {
        /// Path to the record, e.g. `animal/farm/word 3`.
        location: String,
        /// Name of the empty field.
        field: &'static str,
    },

    /// A sentence highlight does not occur in the sentence text.
    #[error("highlight \"{highlight}\" not found in \"{sentence}\" at {location}")]
    HighlightNotFound {
        /// Path to the owning zone.
        location: String,
        /// The English sentence text.
        sentence: String,
        /// The highlight token that was not found.
        highlight: String,
    },

    /// The catalog JSON could not be parsed or written.
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
