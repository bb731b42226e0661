use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    #[serde(deserialize_with = "crate::models::ids::int_id")]
    pub id: i64,
    pub seat_number: String,
    pub is_available: bool,
}

impl Seat {
    pub fn status_label(&self) -> &'static str {
        if self.is_available {
            "✅ Disponible"
        } else {
            "❌ Ocupado"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_list_accepts_string_ids() {
        let seats: Vec<Seat> = serde_json::from_str(
            r#"[{"id":"1","seatNumber":"1A","isAvailable":true},
                {"id":2,"seatNumber":"1B","isAvailable":false}]"#,
        )
        .unwrap();
        assert_eq!(seats.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
