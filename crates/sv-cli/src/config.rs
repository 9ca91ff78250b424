//! Display settings shared by every command.

use sv_core::Language;

/// How catalog content is rendered to the terminal.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Which half of bilingual names to show.
    pub lang: Language,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            lang: Language::En,
            color: true,
        }
    }
}

impl DisplayConfig {
    /// Set the display language.
    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Apply the color choice process-wide.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.lang, Language::En);
        assert!(cfg.color);
    }

    #[test]
    fn builder_methods() {
        let cfg = DisplayConfig::default()
            .with_lang(Language::Vi)
            .with_color(false);
        assert_eq!(cfg.lang, Language::Vi);
        assert!(!cfg.color);
    }
}
