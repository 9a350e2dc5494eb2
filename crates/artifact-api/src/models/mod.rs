use serde::{Deserialize, Deserializer, Serialize};

mod search;
pub use search::*;

mod item;
pub use item::*;

mod query;
pub use query::*;

/// Relative image reference as handed out by the market, e.g. the value of `icon_url`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    /// Full image URL. The reference is appended to the image host as is.
    pub fn url(&self) -> String {
        format!("{}{}", crate::IMAGE_BASE_URL, self.0)
    }
}

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Reads `null` as the field's zero value. The market sends `null` for some empty fields.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
