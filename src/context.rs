//! Application Context
//!
//! Locale state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::AppError;
use crate::i18n::{Language, Localizer};

/// Reactive handle over the active `Localizer`
#[derive(Clone, Copy)]
pub struct LocaleContext {
    localizer: RwSignal<Localizer>,
}

impl LocaleContext {
    pub fn new(localizer: Localizer) -> Self {
        Self {
            localizer: RwSignal::new(localizer),
        }
    }

    /// Create the context and provide it to all children
    pub fn provide(language: Language) -> Self {
        let ctx = Self::new(Localizer::new(language));
        provide_context(ctx);
        ctx
    }

    pub fn language(&self) -> Language {
        self.localizer.with(|l| l.language())
    }

    pub fn set_language(&self, language: Language) {
        log::info!("[locale] language -> {}", language.code());
        self.localizer.update(|l| l.set_language(language));
    }

    pub fn toggle(&self) {
        self.set_language(self.language().other());
    }

    /// Translate `key` in the active language; tracks the language signal
    pub fn t(&self, key: &str) -> String {
        self.localizer.with(|l| l.translate(key).to_string())
    }
}

/// Get the locale from context, if provided
pub fn try_use_locale() -> Result<LocaleContext, AppError> {
    use_context::<LocaleContext>().ok_or(AppError::ContextMissing("LocaleContext"))
}

/// Get the locale from context. Panics when called outside the provider.
pub fn use_locale() -> LocaleContext {
    match try_use_locale() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{}", err),
    }
}
