use std::ops::Range;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sv_core::{Catalog, Language, Sentence};

use crate::config::DisplayConfig;

pub fn run(config: &DisplayConfig, planet_id: &str, zone_id: &str) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let planet = super::find_planet(catalog, planet_id)?;
    let zone = planet.find_zone(zone_id).ok_or_else(|| {
        let ids: Vec<&str> = planet.zones.iter().map(|z| z.id.as_str()).collect();
        format!(
            "zone not found: \"{zone_id}\" in planet \"{}\". Zones: {}",
            planet.id,
            ids.join(", ")
        )
    })?;

    println!(
        "  {} {} [{}/{}]",
        zone.emoji,
        zone.name_in(config.lang).bold(),
        planet.id,
        zone.id
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let (first, second) = match config.lang {
        Language::En => ("English", "Vietnamese"),
        Language::Vi => ("Vietnamese", "English"),
    };
    table.set_header(vec!["", first, second, "Example"]);
    for word in &zone.words {
        let other = match config.lang {
            Language::En => &word.vietnamese,
            Language::Vi => &word.english,
        };
        table.add_row(vec![
            word.emoji.as_str(),
            word.term_in(config.lang),
            other.as_str(),
            word.example.as_str(),
        ]);
    }
    println!("{table}");

    if !zone.sentences.is_empty() {
        println!();
        println!("  {}", "Sentences:".dimmed());
        for sentence in &zone.sentences {
            println!("    {}", render_highlighted(sentence));
            println!("    {}", sentence.vietnamese.dimmed());
        }
    }

    Ok(())
}

/// The English text with highlight tokens emphasized.
fn render_highlighted(sentence: &Sentence) -> String {
    let text = &sentence.english;
    let mut out = String::new();
    let mut cursor = 0;
    for span in merge_spans(sentence.highlight_spans()) {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&text[span.clone()].bold().yellow().to_string());
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Sort spans and fuse overlapping ones so each byte is emphasized once.
fn merge_spans(mut spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    spans.sort_by_key(|s| s.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_spans_fuses_overlaps() {
        assert_eq!(merge_spans(vec![5..9, 0..3, 2..4]), vec![0..4, 5..9]);
        assert!(merge_spans(Vec::new()).is_empty());
    }

    #[test]
    fn render_without_color_is_plain_text() {
        colored::control::set_override(false);
        let sentence = Sentence::new("I go to bed at 9.", "Tôi đi ngủ lúc 9 giờ.", &["go", "bed"]);
        assert_eq!(render_highlighted(&sentence), "I go to bed at 9.");
    }
}
