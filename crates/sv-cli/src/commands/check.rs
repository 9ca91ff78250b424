use std::path::Path;

use sv_core::Catalog;

pub fn run(file: Option<&Path>) -> Result<(), String> {
    let loaded;
    let (catalog, issues) = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            tracing::debug!(path = %path.display(), "checking catalog file");
            let (catalog, issues) = Catalog::load_json(&text)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            loaded = catalog;
            (&loaded, issues)
        }
        None => {
            let catalog = Catalog::builtin();
            (catalog, catalog.validate())
        }
    };

    if issues.is_empty() {
        let stats = catalog.stats();
        println!(
            "  All checks passed ({} planets, {} zones, {} words)",
            stats.planets, stats.zones, stats.words
        );
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {issue}");
    }
    Err(format!(
        "{} content error{}",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    ))
}
