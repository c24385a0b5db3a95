//! Localized UI strings.
//!
//! A [`Translator`] is built once per run from the configured language and
//! handed to whatever needs to print. Changing the language means calling
//! [`Translator::reload`]; there is no process-wide cache.

use crate::config::{ConfigStore, KEY_LANGUAGE};
use std::collections::HashMap;

const EN_TABLE: &str = include_str!("locales/en.json");
const VI_TABLE: &str = include_str!("locales/vi.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "vi" => Some(Language::Vi),
            _ => None,
        }
    }

    fn table_source(&self) -> &'static str {
        match self {
            Language::En => EN_TABLE,
            Language::Vi => VI_TABLE,
        }
    }
}

pub struct Translator {
    language: Language,
    table: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            table: load_table(language),
            fallback: load_table(Language::En),
        }
    }

    /// Build from the `language` config key, falling back to English
    pub fn from_config(config: &ConfigStore) -> Self {
        let language = match config.get_str(KEY_LANGUAGE) {
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                tracing::warn!("Unsupported language '{}', falling back to en", code);
                Language::En
            }),
            None => Language::En,
        };
        Self::new(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn reload(&mut self, language: Language) {
        self.language = language;
        self.table = load_table(language);
    }

    /// Look up `key`, falling back to English and then to the key itself
    pub fn t(&self, key: &str) -> String {
        self.table
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up `key` and substitute `{name}` placeholders
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn load_table(language: Language) -> HashMap<String, String> {
    serde_json::from_str(language.table_source()).unwrap_or_else(|e| {
        tracing::error!("Broken locale table '{}': {}", language.code(), e);
        HashMap::new()
    })
}

#[cfg(test)]
mod tests;
