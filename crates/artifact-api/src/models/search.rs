use serde::{Deserialize, Serialize};

use crate::models::{nullable, Item};

/// One page of `market/search/render` output.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "nullable")]
    pub success: bool,
    #[serde(deserialize_with = "nullable")]
    pub start: u32,
    #[serde(rename = "pagesize", deserialize_with = "nullable")]
    pub page_size: u32,
    #[serde(deserialize_with = "nullable")]
    pub total_count: u32,
    #[serde(rename = "searchdata", deserialize_with = "nullable")]
    pub search_data: SearchData,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<Item>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchData {
    #[serde(deserialize_with = "nullable")]
    pub query: String,
    #[serde(deserialize_with = "nullable")]
    pub search_descriptions: bool,
    #[serde(deserialize_with = "nullable")]
    pub total_count: u32,
    #[serde(rename = "pagesize", deserialize_with = "nullable")]
    pub page_size: u32,
    #[serde(deserialize_with = "nullable")]
    pub prefix: String,
    #[serde(deserialize_with = "nullable")]
    pub class_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_envelope() {
        let body = serde_json::json!({
            "success": true,
            "start": 100,
            "pagesize": 100,
            "total_count": 280,
            "searchdata": {
                "query": "",
                "search_descriptions": false,
                "total_count": 280,
                "pagesize": 100,
                "prefix": "searchResults",
                "class_prefix": "market"
            },
            "results": [
                {
                    "name": "Axe",
                    "hash_name": "1.Axe",
                    "sell_listings": 412,
                    "sell_price": 1234,
                    "sell_price_text": "$12.34",
                    "sale_price_text": "$11.80",
                    "asset_description": {
                        "appid": 583950,
                        "type": "Rare Card",
                        "icon_url": "abc123"
                    }
                }
            ]
        });

        let result: SearchResult = serde_json::from_value(body).unwrap();
        assert!(result.success);
        assert_eq!(result.start, 100);
        assert_eq!(result.page_size, 100);
        assert_eq!(result.total_count, 280);
        assert_eq!(result.search_data.prefix, "searchResults");
        assert_eq!(result.search_data.class_prefix, "market");
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].hash_name, "1.Axe");
        assert_eq!(result.results[0].asset_description.item_type, "Rare Card");
    }

    #[test]
    fn decodes_null_fields() {
        let result: SearchResult = serde_json::from_str(
            r#"{
                "success": true,
                "searchdata": null,
                "results": [
                    {
                        "name": "Axe",
                        "sale_price_text": null,
                        "sell_price": null,
                        "asset_description": { "icon_url": null, "type": null }
                    }
                ]
            }"#,
        )
        .unwrap();

        assert!(result.success);
        assert_eq!(result.search_data.prefix, "");
        let item = &result.results[0];
        assert_eq!(item.name, "Axe");
        assert_eq!(item.sale_price_text, "");
        assert_eq!(item.sell_price, 0);
        assert_eq!(item.asset_description.item_type, "");
        assert_eq!(item.asset_description.icon_url(), crate::IMAGE_BASE_URL);
    }

    #[test]
    fn null_results_decode_as_empty_page() {
        let result: SearchResult =
            serde_json::from_str(r#"{"success": true, "results": null}"#).unwrap();
        assert!(result.results.is_empty());
    }

    #[test]
    fn failed_envelope_decodes_without_results() {
        let result: SearchResult = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!result.success);
        assert!(result.results.is_empty());
    }
}
