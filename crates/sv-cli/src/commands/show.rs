use colored::Colorize;
use sv_core::Catalog;

use crate::config::DisplayConfig;

pub fn run(config: &DisplayConfig, id: &str) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let planet = super::find_planet(catalog, id)?;

    // Header
    println!(
        "  {} {} [{}]",
        planet.emoji,
        planet.name_in(config.lang).bold(),
        planet.id.dimmed()
    );
    println!();

    let era_name = catalog
        .era(planet.era)
        .map(|e| format!("{} {}", e.emoji, e.name_in(config.lang)))
        .unwrap_or_else(|| planet.era.to_string());
    println!("  era:        {era_name}");
    println!("  stars:      {}", planet.required_stars);
    println!("  unlocked:   {}", planet.unlocked);
    println!("  color:      {}", planet.color);
    println!("  words:      {}", planet.word_count());

    // Zones
    println!();
    println!("  {}", "Zones:".dimmed());
    for zone in &planet.zones {
        let lock = if zone.unlocked { "" } else { " (locked)" };
        println!(
            "    {} {:<14} {} - {} words, {} sentences{}",
            zone.emoji,
            zone.id,
            zone.name_in(config.lang),
            zone.word_count(),
            zone.sentences.len(),
            lock.dimmed()
        );
    }

    Ok(())
}
