use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    #[serde(deserialize_with = "crate::models::ids::int_id")]
    pub id: i64,
    pub rule_name: String,
    pub base_price: f64,
    pub multiplier: f64,
}

impl PricingRule {
    pub fn final_price(&self) -> f64 {
        self.base_price * self.multiplier
    }

    /// Precio final con dos decimales, como se muestra en la lista
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.final_price())
    }
}

/// Variables de la mutación `createPricingRule`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPricingRule {
    pub rule_name: String,
    pub base_price: f64,
    pub multiplier: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_price_is_rounded_to_cents() {
        let rule = PricingRule {
            id: 1,
            rule_name: "Temporada alta".into(),
            base_price: 120.0,
            multiplier: 1.255,
        };
        assert_eq!(rule.formatted_price(), "$150.60");
    }

    #[test]
    fn graphql_string_id_is_accepted() {
        let rule: PricingRule = serde_json::from_str(
            r#"{"id":"12","ruleName":"Base","basePrice":10,"multiplier":1}"#,
        )
        .unwrap();
        assert_eq!(rule.id, 12);
    }
}
