use serde::{Deserialize, Serialize};

/// Core property listing data model, matching the store's document shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub price: i64,
    /// Bedroom count; the store spells the field "BHK"
    #[serde(rename = "BHK")]
    pub bhk: u32,
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Property {
    /// Bedroom label as shown in filters, e.g. "2 BHK"
    pub fn bhk_label(&self) -> String {
        format!("{} BHK", self.bhk)
    }
}

/// Response envelope the property endpoint wraps the collection in
#[derive(Debug, Deserialize)]
pub struct ListingsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub properties: Vec<Property>,
}
