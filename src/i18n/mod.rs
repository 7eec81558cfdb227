//! Localization
//!
//! Language setting and static key -> string lookup. Lookups never fail:
//! a key missing from the active table comes back unchanged.

mod strings;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
}

impl Language {
    /// ISO 639-1 code, also used for the `lang` attribute
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn direction(self) -> &'static str {
        match self {
            Language::English => "ltr",
            Language::Urdu => "rtl",
        }
    }

    /// The language a toggle switches to
    pub fn other(self) -> Language {
        match self {
            Language::English => Language::Urdu,
            Language::Urdu => Language::English,
        }
    }
}

/// Immutable language -> (key -> text) mapping
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<&'static str, &'static str>>,
}

static BUILTIN: LazyLock<TranslationTable> = LazyLock::new(|| {
    TranslationTable::new()
        .with_language(Language::English, strings::EN)
        .with_language(Language::Urdu, strings::UR)
});

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The English/Urdu table shipped with the app
    pub fn builtin() -> &'static TranslationTable {
        &BUILTIN
    }

    pub fn with_language(mut self, language: Language, pairs: &[(&'static str, &'static str)]) -> Self {
        self.entries
            .entry(language)
            .or_default()
            .extend(pairs.iter().copied());
        self
    }

    pub fn get(&self, language: Language, key: &str) -> Option<&'static str> {
        self.entries.get(&language)?.get(key).copied()
    }

    /// Keys present for `from` but absent for `to`, sorted
    pub fn missing_keys(&self, from: Language, to: Language) -> Vec<&'static str> {
        let Some(source) = self.entries.get(&from) else {
            return Vec::new();
        };
        let mut missing: Vec<&'static str> = source
            .keys()
            .filter(|key| self.get(to, key).is_none())
            .copied()
            .collect();
        missing.sort_unstable();
        missing
    }
}

/// Active language bound to a translation table.
///
/// This is the plain value threaded to consumers; the reactive wrapper lives
/// in `context::LocaleContext`.
#[derive(Debug, Clone, Copy)]
pub struct Localizer {
    language: Language,
    table: &'static TranslationTable,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self::with_table(language, TranslationTable::builtin())
    }

    pub fn with_table(language: Language, table: &'static TranslationTable) -> Self {
        Self { language, table }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle(&mut self) {
        self.language = self.language.other();
    }

    /// Translated text for `key`, or `key` itself when the table lacks it
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.table.get(self.language, key).unwrap_or(key)
    }
}
