use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Locales the market can render item names in.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    #[serde(rename = "english")]
    English,
    #[serde(rename = "koreana")]
    Korean,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::English, Lang::Korean];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::English => "english",
            Lang::Korean => "koreana",
        }
    }
}

impl Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Lang {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Lang::English),
            "koreana" | "korean" | "ko" => Ok(Lang::Korean),
            _ => Err(ParseEnumError::new("language", s)),
        }
    }
}

/// Card rarity, sent as the `category_<appid>_Rarity[]` filter.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rarity {
    #[serde(rename = "tag_Rarity_Common")]
    Common,
    #[serde(rename = "tag_Rarity_Uncommon")]
    Uncommon,
    #[serde(rename = "tag_Rarity_Rare")]
    Rare,
    /// No filter.
    #[default]
    #[serde(rename = "")]
    All,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "tag_Rarity_Common",
            Rarity::Uncommon => "tag_Rarity_Uncommon",
            Rarity::Rare => "tag_Rarity_Rare",
            Rarity::All => "",
        }
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "common" | "tag_rarity_common" => Ok(Rarity::Common),
            "uncommon" | "tag_rarity_uncommon" => Ok(Rarity::Uncommon),
            "rare" | "tag_rarity_rare" => Ok(Rarity::Rare),
            "all" | "" => Ok(Rarity::All),
            _ => Err(ParseEnumError::new("rarity", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Quantity,
    Price,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Quantity => "quantity",
            SortColumn::Price => "price",
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "quantity" => Ok(SortColumn::Quantity),
            "price" => Ok(SortColumn::Price),
            _ => Err(ParseEnumError::new("sort column", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseEnumError::new("sort direction", s)),
        }
    }
}

/// Everything about a search except the page window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub rarity: Rarity,
    pub lang: Lang,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

impl SearchQuery {
    pub fn new(
        rarity: Rarity,
        lang: Lang,
        sort_column: SortColumn,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            rarity,
            lang,
            sort_column,
            sort_direction,
        }
    }
}
