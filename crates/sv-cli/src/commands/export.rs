use std::path::Path;

use sv_core::{Catalog, Language};

use crate::config::DisplayConfig;

pub fn run(config: &DisplayConfig, format: &str, output: Option<&Path>) -> Result<(), String> {
    let catalog = Catalog::builtin();

    let content = match format {
        "json" => catalog
            .to_json_pretty()
            .map_err(|e| format!("JSON serialization error: {e}"))?,
        "markdown" | "md" => export_markdown(catalog, config.lang),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "catalog exported");
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_markdown(catalog: &Catalog, lang: Language) -> String {
    let mut out = String::new();

    out.push_str("# Space Vocab\n\n");

    for era in catalog.time_eras() {
        out.push_str(&format!("## {} {}\n\n", era.emoji, era.name_in(lang)));

        for planet in catalog.planets_in(era.id) {
            out.push_str(&format!(
                "### {} {} (`{}`)\n\n",
                planet.emoji,
                planet.name_in(lang),
                planet.id
            ));
            out.push_str(&format!("Required stars: {}\n\n", planet.required_stars));

            for zone in &planet.zones {
                out.push_str(&format!("#### {} {}\n\n", zone.emoji, zone.name_in(lang)));
                out.push_str("| | English | Vietnamese | Example |\n");
                out.push_str("|---|---|---|---|\n");
                for word in &zone.words {
                    out.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        word.emoji, word.english, word.vietnamese, word.example
                    ));
                }
                out.push('\n');

                for sentence in &zone.sentences {
                    out.push_str(&format!(
                        "- {} ({}) - _{}_\n",
                        sentence.english,
                        sentence.highlights.join(", "),
                        sentence.vietnamese
                    ));
                }
                if !zone.sentences.is_empty() {
                    out.push('\n');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_groups_planets_under_eras() {
        let md = export_markdown(Catalog::builtin(), Language::En);
        let prehistoric = md.find("## 🦕 Prehistoric").unwrap();
        let animal = md.find("### 🐾 Animal Planet (`animal`)").unwrap();
        let medieval = md.find("## 🏰 Medieval").unwrap();
        assert!(prehistoric < animal && animal < medieval);
        assert!(md.contains("| 🐕 | dog | con chó | The dog is brown. |"));
        assert!(md.contains("- The cow is big. (cow, big) - _Con bò to lớn._"));
    }

    #[test]
    fn markdown_uses_requested_language_for_names() {
        let md = export_markdown(Catalog::builtin(), Language::Vi);
        assert!(md.contains("## 🚀 Tương lai"));
        assert!(md.contains("### 🐾 Hành tinh Động vật (`animal`)"));
    }
}
