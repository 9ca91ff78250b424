use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// A vocabulary entry with its translation and an example sentence pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The English term.
    pub english: String,
    /// The Vietnamese translation.
    pub vietnamese: String,
    /// Emoji glyph illustrating the word.
    pub emoji: String,
    /// Example sentence in English.
    pub example: String,
    /// Vietnamese translation of the example sentence.
    pub example_vi: String,
}

impl Word {
    /// Create a word entry.
    pub fn new(
        english: impl Into<String>,
        vietnamese: impl Into<String>,
        emoji: impl Into<String>,
        example: impl Into<String>,
        example_vi: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            vietnamese: vietnamese.into(),
            emoji: emoji.into(),
            example: example.into(),
            example_vi: example_vi.into(),
        }
    }

    /// The term in the requested language.
    pub fn term_in(&self, lang: Language) -> &str {
        lang.pick(&self.english, &self.vietnamese)
    }
}

/// An example sentence with the words it calls out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// English text.
    pub english: String,
    /// Vietnamese text.
    pub vietnamese: String,
    /// Substrings of the English text to emphasize, in display order.
    pub highlights: Vec<String>,
}

impl Sentence {
    /// Create a sentence with its highlight tokens.
    pub fn new(
        english: impl Into<String>,
        vietnamese: impl Into<String>,
        highlights: &[&str],
    ) -> Self {
        Self {
            english: english.into(),
            vietnamese: vietnamese.into(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Byte ranges of each highlight's first occurrence in the English text.
    ///
    /// Matching ignores ASCII case. Highlights that do not occur are skipped,
    /// so the result may be shorter than `highlights`.
    pub fn highlight_spans(&self) -> Vec<Range<usize>> {
        let haystack = self.english.to_ascii_lowercase();
        self.highlights
            .iter()
            .filter(|h| !h.is_empty())
            .filter_map(|h| {
                haystack
                    .find(&h.to_ascii_lowercase())
                    .map(|start| start..start + h.len())
            })
            .collect()
    }

    /// Whether a highlight occurs in the English text, ignoring ASCII case.
    pub fn contains_highlight(&self, highlight: &str) -> bool {
        self.english
            .to_ascii_lowercase()
            .contains(&highlight.to_ascii_lowercase())
    }
}

/// A sub-theme within a planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Identifier, unique within the owning planet.
    pub id: String,
    /// English display name.
    pub name: String,
    /// Vietnamese display name.
    pub name_vi: String,
    /// Emoji glyph.
    pub emoji: String,
    /// Whether the zone is open by default.
    pub unlocked: bool,
    /// Vocabulary in teaching order.
    pub words: Vec<Word>,
    /// Example sentences; often empty.
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

impl Zone {
    /// Create a locked zone with no content.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        name_vi: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_vi: name_vi.into(),
            emoji: emoji.into(),
            unlocked: false,
            words: Vec::new(),
            sentences: Vec::new(),
        }
    }

    /// Open the zone by default.
    pub fn unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    /// Set the zone's words.
    pub fn words(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.words = words.into_iter().collect();
        self
    }

    /// Set the zone's example sentences.
    pub fn sentences(mut self, sentences: impl IntoIterator<Item = Sentence>) -> Self {
        self.sentences = sentences.into_iter().collect();
        self
    }

    /// The display name in the requested language.
    pub fn name_in(&self, lang: Language) -> &str {
        lang.pick(&self.name, &self.name_vi)
    }

    /// Number of words in the zone.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_builder_defaults_to_locked() {
        let zone = Zone::new("farm", "Farm Animals", "Động vật nông trại", "🐄");
        assert!(!zone.unlocked);
        assert!(zone.words.is_empty());
        assert!(zone.sentences.is_empty());
        assert!(zone.unlocked().unlocked);
    }

    #[test]
    fn zone_word_count() {
        let zone = Zone::new("drink", "Drinks", "Đồ uống", "🥤").words([
            Word::new("water", "nước", "💧", "I drink water.", "Tôi uống nước."),
            Word::new("milk", "sữa", "🥛", "Milk is white.", "Sữa màu trắng."),
        ]);
        assert_eq!(zone.word_count(), 2);
        assert_eq!(zone.words[1].term_in(Language::Vi), "sữa");
    }

    #[test]
    fn highlight_spans_locate_tokens() {
        let s = Sentence::new("The cow is big.", "Con bò to lớn.", &["cow", "big"]);
        let spans = s.highlight_spans();
        assert_eq!(spans, vec![4..7, 11..14]);
        assert_eq!(&s.english[spans[1].clone()], "big");
    }

    #[test]
    fn highlight_spans_ignore_case() {
        let s = Sentence::new("School is fun.", "Trường học vui.", &["school", "fun"]);
        assert_eq!(s.highlight_spans(), vec![0..6, 10..13]);
        assert!(s.contains_highlight("SCHOOL"));
    }

    #[test]
    fn highlight_spans_skip_missing_tokens() {
        let s = Sentence::new("I am fine.", "Tôi khỏe.", &["happy", "fine"]);
        assert_eq!(s.highlight_spans(), vec![5..9]);
        assert!(!s.contains_highlight("happy"));
    }

    #[test]
    fn multi_word_highlight() {
        let s = Sentence::new("I wake up at 7.", "Tôi thức dậy lúc 7 giờ.", &["wake up"]);
        assert_eq!(s.highlight_spans(), vec![2..9]);
    }

    #[test]
    fn sentences_default_when_missing_from_json() {
        let json = r#"{"id":"wild","name":"Wild Animals","name_vi":"Động vật hoang dã","emoji":"🦁","unlocked":false,"words":[]}"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert!(zone.sentences.is_empty());
    }
}
