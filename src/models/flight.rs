use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(deserialize_with = "crate::models::ids::string_id")]
    pub id: String,
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
}

impl Flight {
    /// Hora de salida legible; si no se puede parsear se muestra tal cual
    pub fn departure_label(&self) -> String {
        let raw = self.departure_time.as_str();
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
        // `datetime-local` envía "YYYY-MM-DDTHH:MM"
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
                return dt.format("%d/%m/%Y %H:%M").to_string();
            }
        }
        raw.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(departure: &str) -> Flight {
        Flight {
            id: "1".into(),
            code: "AV101".into(),
            origin: "UIO".into(),
            destination: "GYE".into(),
            departure_time: departure.into(),
        }
    }

    #[test]
    fn departure_label_handles_known_formats() {
        assert_eq!(flight("2025-03-01T08:30").departure_label(), "01/03/2025 08:30");
        assert_eq!(flight("2025-03-01T08:30:00Z").departure_label(), "01/03/2025 08:30");
        assert_eq!(flight("mañana").departure_label(), "mañana");
    }

    #[test]
    fn numeric_ids_deserialize() {
        let f: Flight = serde_json::from_str(
            r#"{"id": 7, "code": "X", "origin": "A", "destination": "B", "departureTime": "t"}"#,
        )
        .unwrap();
        assert_eq!(f.id, "7");
    }
}
