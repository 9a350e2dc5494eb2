use artifact_api::models::{Item, Rarity};
use tracing::debug;

use crate::config::{Config, LocaleTable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RarityTotals {
    pub items: u32,
    pub cards: u32,
    /// Cents.
    pub price: u64,
}

impl RarityTotals {
    fn add(&mut self, item: &Item, cards: u32) {
        self.items = self.items.saturating_add(1);
        self.cards = self.cards.saturating_add(cards);
        self.price = self
            .price
            .saturating_add(item.sell_price.saturating_mul(u64::from(cards)));
    }
}

/// What a full collection costs, one playset per card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CollectionTotals {
    pub common: RarityTotals,
    pub uncommon: RarityTotals,
    pub rare: RarityTotals,
    /// Items whose type label matched no rarity. They are not priced.
    pub unknown: Vec<String>,
}

impl CollectionTotals {
    pub fn tally(items: &[Item], table: &LocaleTable, config: &Config) -> Self {
        let mut totals = Self::default();
        for item in items {
            let cards = if table.is_hero(&item.name) {
                config.max_hero_cards_per_deck
            } else {
                config.max_cards_per_deck
            };
            let slot = match table.rarity_of(&item.asset_description.item_type) {
                Some(Rarity::Common) => &mut totals.common,
                Some(Rarity::Uncommon) => &mut totals.uncommon,
                Some(Rarity::Rare) => &mut totals.rare,
                Some(Rarity::All) | None => {
                    debug!(
                        name = %item.name,
                        item_type = %item.asset_description.item_type,
                        "Unknown rarity"
                    );
                    totals.unknown.push(item.name.clone());
                    continue;
                }
            };
            slot.add(item, cards);
        }
        totals
    }

    pub fn price(&self) -> u64 {
        self.common
            .price
            .saturating_add(self.uncommon.price)
            .saturating_add(self.rare.price)
    }
}

pub(crate) fn dollars(cents: u64) -> f64 {
    cents as f64 / 100.0
}
