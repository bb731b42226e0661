// Reglas de precios (GraphQL en /pricing)

use crate::error::ApiError;
use crate::models::pricing::NewPricingRule;
use crate::models::PricingRule;
use crate::services::graphql::GraphQlRequest;
use crate::services::ApiClient;

pub const PRICING_ENDPOINT: &str = "/pricing";

const PRICING_RULES_QUERY: &str = r#"
query {
  pricingRules {
    id
    ruleName
    basePrice
    multiplier
  }
}"#;

const CREATE_PRICING_RULE_MUTATION: &str = r#"
mutation CreateRule($ruleName: String!, $basePrice: Float!, $multiplier: Float!) {
  createPricingRule(ruleName: $ruleName, basePrice: $basePrice, multiplier: $multiplier) {
    id
    ruleName
    basePrice
    multiplier
  }
}"#;

pub fn pricing_rules_request() -> GraphQlRequest {
    GraphQlRequest::query(PRICING_RULES_QUERY, "pricingRules")
}

pub fn create_pricing_rule_request(rule: &NewPricingRule) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(CREATE_PRICING_RULE_MUTATION, "createPricingRule", rule)
}

impl ApiClient {
    pub async fn get_pricing_rules(&self) -> Result<Vec<PricingRule>, ApiError> {
        self.graphql(PRICING_ENDPOINT, &pricing_rules_request()).await
    }

    pub async fn create_pricing_rule(&self, rule: &NewPricingRule) -> Result<PricingRule, ApiError> {
        log::info!("💲 Creando regla {}", rule.rule_name);
        self.graphql(PRICING_ENDPOINT, &create_pricing_rule_request(rule)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rule_sends_typed_variables() {
        let request = create_pricing_rule_request(&NewPricingRule {
            rule_name: "Fin de semana".into(),
            base_price: 80.0,
            multiplier: 1.2,
        })
        .unwrap();
        assert_eq!(request.field, "createPricingRule");
        assert_eq!(request.variables["ruleName"], "Fin de semana");
        assert_eq!(request.variables["basePrice"], 80.0);
        assert_eq!(request.variables["multiplier"], 1.2);
    }
}
