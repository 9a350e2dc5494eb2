use serde::{Deserialize, Serialize};

use crate::models::{nullable, IconRef};

/// A market listing summary for one item type.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub hash_name: String,
    #[serde(deserialize_with = "nullable")]
    pub sell_listings: u32,
    /// Lowest sell price in cents.
    #[serde(deserialize_with = "nullable")]
    pub sell_price: u64,
    #[serde(deserialize_with = "nullable")]
    pub sell_price_text: String,
    #[serde(deserialize_with = "nullable")]
    pub app_icon: String,
    #[serde(deserialize_with = "nullable")]
    pub app_name: String,
    #[serde(deserialize_with = "nullable")]
    pub asset_description: ItemDescription,
    #[serde(deserialize_with = "nullable")]
    pub sale_price_text: String,
}

impl Item {
    /// Listing page on the Community Market.
    pub fn store_url(&self) -> String {
        format!(
            "{}/{}/{}",
            crate::MARKET_LISTINGS_URL,
            crate::APP_ID,
            self.hash_name
        )
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemDescription {
    #[serde(deserialize_with = "nullable")]
    pub appid: u32,
    #[serde(deserialize_with = "nullable")]
    pub classid: String,
    #[serde(deserialize_with = "nullable")]
    pub instanceid: String,
    #[serde(deserialize_with = "nullable")]
    pub currency: i32,
    #[serde(deserialize_with = "nullable")]
    pub background_color: String,
    #[serde(deserialize_with = "nullable")]
    pub icon_url: IconRef,
    #[serde(deserialize_with = "nullable")]
    pub icon_url_large: IconRef,
    #[serde(deserialize_with = "nullable")]
    pub tradable: i32,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub item_type: String,
    #[serde(deserialize_with = "nullable")]
    pub market_name: String,
    #[serde(deserialize_with = "nullable")]
    pub market_hash_name: String,
    #[serde(deserialize_with = "nullable")]
    pub commodity: i32,
    #[serde(deserialize_with = "nullable")]
    pub market_tradable_restriction: i32,
    #[serde(deserialize_with = "nullable")]
    pub market_marketable_restriction: i32,
    #[serde(deserialize_with = "nullable")]
    pub marketable: i32,
}

impl ItemDescription {
    pub fn icon_url(&self) -> String {
        self.icon_url.url()
    }

    pub fn large_icon_url(&self) -> String {
        self.icon_url_large.url()
    }

    pub fn is_tradable(&self) -> bool {
        self.tradable != 0
    }

    pub fn is_marketable(&self) -> bool {
        self.marketable != 0
    }
}
