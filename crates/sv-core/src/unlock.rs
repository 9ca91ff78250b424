//! A planet is available when it is open by default or the learner's star
//! total meets its threshold. Star totals are supplied by the caller; nothing
//! here is persisted.

use crate::catalog::Catalog;
use crate::planet::Planet;

impl Planet {
    /// Whether a learner holding `stars` may enter this planet.
    pub fn is_available(&self, stars: u32) -> bool {
        self.unlocked || stars >= self.required_stars
    }
}

impl Catalog {
    /// Planets available at `stars`, in curriculum order.
    pub fn available_planets(&self, stars: u32) -> Vec<&Planet> {
        self.planets()
            .iter()
            .filter(|p| p.is_available(stars))
            .collect()
    }

    /// The locked planet with the lowest threshold. Ties go to the earlier planet.
    pub fn next_unlock(&self, stars: u32) -> Option<&Planet> {
        self.planets()
            .iter()
            .filter(|p| !p.is_available(stars))
            .min_by_key(|p| p.required_stars)
    }

    /// Stars still missing before the next planet opens, if any remain locked.
    pub fn stars_to_next_unlock(&self, stars: u32) -> Option<u32> {
        self.next_unlock(stars)
            .map(|p| p.required_stars.saturating_sub(stars))
    }
}
