use serde::{Deserialize, Serialize};

/// Ruta del catálogo (nombre + tramos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRoute {
    #[serde(deserialize_with = "crate::models::ids::int_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl FlightRoute {
    pub fn total_distance_km(&self) -> i64 {
        self.segments.iter().map(|s| s.distance_km).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::ids::opt_int_id"
    )]
    pub id: Option<i64>,
    pub origin: String,
    pub destination: String,
    pub distance_km: i64,
}
