use sv_core::{Catalog, Language, WordQuery};

use crate::config::DisplayConfig;

pub fn run(
    config: &DisplayConfig,
    query: &str,
    era: Option<&str>,
    planet: Option<&str>,
    limit: Option<usize>,
) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let era = era.map(super::parse_era).transpose()?;
    if let Some(id) = planet {
        super::find_planet(catalog, id)?;
    }

    let build = || {
        let mut q: WordQuery<'_> = catalog.words().text(query);
        if let Some(era) = era {
            q = q.era(era);
        }
        if let Some(id) = planet {
            q = q.planet(id);
        }
        q
    };

    let total = build().count();
    if total == 0 {
        println!("  No results for \"{}\".", query);
        return Ok(());
    }

    let hits = match limit {
        Some(n) => build().limit(n).execute(),
        None => build().execute(),
    };

    if hits.len() < total {
        println!("  {} of {} results for \"{}\":", hits.len(), total, query);
    } else {
        println!("  {} results for \"{}\":", total, query);
    }
    println!();

    for hit in &hits {
        let (term, other) = match config.lang {
            Language::En => (&hit.word.english, &hit.word.vietnamese),
            Language::Vi => (&hit.word.vietnamese, &hit.word.english),
        };
        println!(
            "  {} {} - {}  [{}/{}]",
            hit.word.emoji, term, other, hit.planet.id, hit.zone.id
        );
        println!("    {}", hit.word.example);
    }

    Ok(())
}
