use std::{collections::HashMap, path::Path};

use anyhow::{Context as _, Result};
use artifact_api::models::{Lang, Rarity};
use figment::{
    providers::{Format, Json},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../collection.default.json");

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ClassifyError {
    #[error("No localization table for language {0}")]
    UnknownLocale(Lang),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Config {
    pub max_cards_per_deck: u32,
    pub max_hero_cards_per_deck: u32,
    pub tax_rate: f64,
    pub locales: Localization,
}

impl Config {
    /// Built-in tables overlaid with the JSON file at `path`, if there is one.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::extract(Figment::new().merge(Json::file(path)))
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        debug!(locales = config.locales.0.len(), "Loaded config");
        Ok(config)
    }

    fn extract(overrides: Figment) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Json::string(DEFAULT_CONFIG))
            .merge(overrides)
            .extract()
    }
}

/// Per-language name tables used to classify market items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub(crate) struct Localization(HashMap<String, LocaleTable>);

impl Localization {
    pub fn table(&self, lang: Lang) -> Result<&LocaleTable, ClassifyError> {
        self.0
            .get(lang.as_str())
            .ok_or(ClassifyError::UnknownLocale(lang))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LocaleTable {
    pub heroes: Vec<String>,
    pub rarities: RarityLabels,
}

/// Localized `type` labels of each rarity, e.g. "Common Card".
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RarityLabels {
    pub common: String,
    pub uncommon: String,
    pub rare: String,
}

impl LocaleTable {
    pub fn is_hero(&self, name: &str) -> bool {
        self.heroes.iter().any(|hero| hero == name)
    }

    /// `None` when the label matches no known rarity.
    pub fn rarity_of(&self, item_type: &str) -> Option<Rarity> {
        let labels = &self.rarities;
        [
            (Rarity::Common, &labels.common),
            (Rarity::Uncommon, &labels.uncommon),
            (Rarity::Rare, &labels.rare),
        ]
        .into_iter()
        .find(|(_, label)| label.as_str() == item_type)
        .map(|(rarity, _)| rarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(overrides: &str) -> Config {
        Config::extract(Figment::new().merge(Json::string(overrides))).unwrap()
    }

    #[test]
    fn defaults_cover_every_language() {
        let config = config("{}");
        assert_eq!(config.max_cards_per_deck, 3);
        assert_eq!(config.max_hero_cards_per_deck, 1);
        assert_eq!(config.tax_rate, 0.15);
        for lang in Lang::ALL {
            let table = config.locales.table(lang).unwrap();
            assert_eq!(table.heroes.len(), 48);
        }
    }

    #[test]
    fn lookups() {
        let config = config("{}");
        let english = config.locales.table(Lang::English).unwrap();
        assert!(english.is_hero("Axe"));
        assert!(!english.is_hero("Keenfolk Turret"));
        assert_eq!(english.rarity_of("Uncommon Card"), Some(Rarity::Uncommon));
        assert_eq!(english.rarity_of("Bundle"), None);

        let korean = config.locales.table(Lang::Korean).unwrap();
        assert!(korean.is_hero("도끼전사"));
        assert_eq!(korean.rarity_of("희귀 카드"), Some(Rarity::Rare));
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let config = config(
            r#"{
                "tax_rate": 0.2,
                "locales": {
                    "english": { "heroes": ["Axe"] }
                }
            }"#,
        );
        assert_eq!(config.tax_rate, 0.2);
        let english = config.locales.table(Lang::English).unwrap();
        assert_eq!(english.heroes, vec!["Axe".to_string()]);
        assert_eq!(english.rarities.rare, "Rare Card");
    }

    #[test]
    fn missing_locale_is_an_error() {
        let locales = Localization::default();
        assert_eq!(
            locales.table(Lang::Korean).unwrap_err(),
            ClassifyError::UnknownLocale(Lang::Korean)
        );
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("does-not-exist.json")).unwrap();
        assert!(config.locales.table(Lang::English).is_ok());
    }
}
