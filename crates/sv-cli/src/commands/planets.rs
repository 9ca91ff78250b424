use comfy_table::{ContentArrangement, Table};
use sv_core::{Catalog, Planet};

use crate::config::DisplayConfig;

pub fn run(config: &DisplayConfig, era: Option<&str>, stars: Option<u32>) -> Result<(), String> {
    let catalog = Catalog::builtin();

    let planets: Vec<&Planet> = match era {
        Some(era_id) => catalog.planets_by_era(era_id),
        None => catalog.planets().iter().collect(),
    };

    if planets.is_empty() {
        println!("  No planets found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Id", "Planet", "Era", "Stars", "Zones", "Words"];
    if stars.is_some() {
        header.push("Status");
    }
    table.set_header(header);

    for planet in &planets {
        let mut row = vec![
            planet.id.clone(),
            format!("{} {}", planet.emoji, planet.name_in(config.lang)),
            planet.era.to_string(),
            planet.required_stars.to_string(),
            planet.zones.len().to_string(),
            planet.word_count().to_string(),
        ];
        if let Some(total) = stars {
            let status = if planet.is_available(total) {
                "open"
            } else {
                "locked"
            };
            row.push(status.to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} planets", planets.len());

    Ok(())
}
