use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    #[serde(deserialize_with = "crate::models::ids::int_id")]
    pub id: i64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata_code: String,
}

impl Airport {
    pub fn summary(&self) -> String {
        format!("{}, {} ({})", self.city, self.country, self.iata_code)
    }
}

/// Campos editables (create / update)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportFields {
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata_code: String,
}
