//! # Localization Module
//!
//! Every user-facing string lives in `locales/uk/main.ftl`, compiled into
//! the binary and served through a thread-safe Fluent bundle.

use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "uk";

const MAIN_RESOURCE: &str = include_str!("../locales/uk/main.ftl");

/// Message store backed by a Fluent bundle
pub struct Texts {
    bundle: FluentBundle<FluentResource>,
}

impl Texts {
    /// Load the bundled Ukrainian resource
    pub fn new() -> Result<Self> {
        Self::from_source(DEFAULT_LOCALE, MAIN_RESOURCE)
    }

    /// Build a bundle from raw FTL source
    pub fn from_source(locale: &str, source: &str) -> Result<Self> {
        let locale: LanguageIdentifier = locale.parse()?;
        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Failed to parse FTL resource: {errors:?}"))?;

        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        // Bodies go out verbatim; isolation marks would leak into Telegram text.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Failed to add FTL resource: {errors:?}"))?;

        Ok(Self { bundle })
    }

    /// Get a message
    pub fn get(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Get a message with string arguments
    pub fn get_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// Whether the bundle defines a message with a value for `key`
    pub fn has(&self, key: &str) -> bool {
        self.bundle
            .get_message(key)
            .is_some_and(|msg| msg.value().is_some())
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => {
                warn!(key = %key, "Missing translation");
                return format!("Missing translation: {}", key);
            }
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key = %key, errors = ?errors, "Errors while formatting message");
        }

        value.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resource_parses() {
        let texts = Texts::new().unwrap();
        assert!(texts.has("welcome"));
        assert!(texts.get("welcome").contains("Relax Resort"));
    }

    #[test]
    fn test_arguments_are_substituted_without_isolation_marks() {
        let texts = Texts::from_source("uk", "hello = Привіт, { $name }!\n").unwrap();
        assert_eq!(texts.get_with_args("hello", &[("name", "Anna")]), "Привіт, Anna!");
    }

    #[test]
    fn test_missing_key_is_visible() {
        let texts = Texts::from_source("uk", "hello = hi\n").unwrap();
        assert!(!texts.has("nope"));
        assert_eq!(texts.get("nope"), "Missing translation: nope");
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        assert!(Texts::from_source("uk", "= broken\n").is_err());
    }
}
