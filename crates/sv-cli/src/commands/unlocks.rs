use colored::Colorize;
use sv_core::Catalog;

use crate::config::DisplayConfig;

pub fn run(config: &DisplayConfig, stars: u32) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let open = catalog.available_planets(stars);

    println!("  {} planets open at {} stars:", open.len(), stars);
    for planet in &open {
        println!("    {} {}", planet.emoji, planet.name_in(config.lang));
    }
    println!();

    let missing = catalog.stars_to_next_unlock(stars);
    match (catalog.next_unlock(stars), missing) {
        (Some(next), Some(missing)) => println!(
            "  Next: {} {} at {} stars ({} more)",
            next.emoji,
            next.name_in(config.lang).bold(),
            next.required_stars,
            missing
        ),
        _ => println!("  All planets unlocked!"),
    }

    Ok(())
}
