use comfy_table::{ContentArrangement, Table};
use sv_core::Catalog;

use crate::config::DisplayConfig;

pub fn run(config: &DisplayConfig) -> Result<(), String> {
    let catalog = Catalog::builtin();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Era", "Planets", "Color"]);

    for era in catalog.time_eras() {
        let planets: Vec<&str> = catalog
            .planets_in(era.id)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        table.add_row(vec![
            era.id.to_string(),
            format!("{} {}", era.emoji, era.name_in(config.lang)),
            planets.join(", "),
            era.color.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
