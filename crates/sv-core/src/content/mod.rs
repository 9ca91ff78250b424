//! The bundled curriculum: four eras, three planets each.
//!
//! Word pairs, glyphs, and example sentences are authored content and are
//! kept exactly as written, including the occasional repeated word across
//! planets (e.g. "teacher" appears in both Family and School).

mod future;
mod medieval;
mod modern;
mod prehistoric;

use crate::era::{EraId, TimeEra};
use crate::planet::Planet;

/// The four eras in canonical order.
#[rustfmt::skip]
pub fn time_eras() -> Vec<TimeEra> {
    vec![
        TimeEra::new(EraId::Prehistoric, "Prehistoric", "Thời tiền sử", "🦕", 0xFF86EFAC),
        TimeEra::new(EraId::Medieval, "Medieval", "Thời Trung cổ", "🏰", 0xFFC4B5FD),
        TimeEra::new(EraId::Modern, "Modern", "Thời Hiện đại", "🌆", 0xFF93C5FD),
        TimeEra::new(EraId::Future, "Future", "Tương lai", "🚀", 0xFFF0ABFC),
    ]
}

/// Every planet in curriculum order, grouped by era, easiest first.
pub fn planets() -> Vec<Planet> {
    vec![
        prehistoric::animal(),
        prehistoric::color(),
        prehistoric::number(),
        medieval::food(),
        medieval::family(),
        medieval::body(),
        modern::school(),
        modern::nature(),
        modern::home(),
        future::action(),
        future::emotion(),
        future::travel(),
    ]
}
