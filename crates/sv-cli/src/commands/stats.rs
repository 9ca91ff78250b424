use sv_core::Catalog;

pub fn run(json: bool) -> Result<(), String> {
    let stats = Catalog::builtin().stats();

    if json {
        let out = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("  eras:       {}", stats.eras);
    println!("  planets:    {}", stats.planets);
    println!("  zones:      {}", stats.zones);
    println!("  words:      {}", stats.words);
    println!("  sentences:  {}", stats.sentences);

    Ok(())
}
