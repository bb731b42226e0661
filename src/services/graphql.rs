// ============================================================================
// GRAPHQL - Body `{query, variables}` y lectura de `data` / `errors[]`
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Operación GraphQL lista para enviar por POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub variables: Value,
    /// Campo de `data` que devuelve la operación
    #[serde(skip)]
    pub field: &'static str,
}

impl GraphQlRequest {
    pub fn query(query: impl Into<String>, field: &'static str) -> Self {
        Self {
            query: query.into(),
            variables: Value::Null,
            field,
        }
    }

    pub fn with_variables<V: Serialize>(
        query: &'static str,
        field: &'static str,
        variables: &V,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            query: query.to_string(),
            variables: serde_json::to_value(variables)?,
            field,
        })
    }
}

/// Respuesta `{ id }` de las mutaciones de creación / actualización
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedId {
    pub id: Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// Interpreta la respuesta HTTP de un endpoint GraphQL
pub fn parse_graphql_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
    field: &str,
) -> Result<T, ApiError> {
    let parsed: Result<GraphQlResponse, _> = serde_json::from_str(body);

    let response = match parsed {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(ApiError::Http {
                status,
                message: "respuesta no válida".to_string(),
            })
        }
        Err(e) => return Err(ApiError::Parse(e.to_string())),
    };

    if let Some(first) = response.errors.first() {
        return Err(ApiError::GraphQl(first.message.clone()));
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: "sin detalle".to_string(),
        });
    }

    let value = response
        .data
        .and_then(|mut data| data.get_mut(field).map(Value::take))
        .unwrap_or(Value::Null);

    serde_json::from_value(value)
        .map_err(|e| ApiError::Parse(format!("campo `{}`: {}", field, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricingRule;

    #[test]
    fn body_has_query_and_variables() {
        let request = GraphQlRequest::with_variables(
            "mutation X($id: Int!) { x(id: $id) }",
            "x",
            &serde_json::json!({ "id": 3 }),
        )
        .unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"]["id"], 3);
        assert!(body.get("field").is_none());

        let plain = serde_json::to_value(GraphQlRequest::query("query { a }", "a")).unwrap();
        assert!(plain.get("variables").is_none());
    }

    #[test]
    fn reads_the_requested_field() {
        let body = r#"{"data":{"pricingRules":[{"id":1,"ruleName":"Base","basePrice":100,"multiplier":1.5}]}}"#;
        let rules: Vec<PricingRule> = parse_graphql_body(200, body, "pricingRules").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_name, "Base");
    }

    #[test]
    fn errors_array_wins() {
        let body = r#"{"data":null,"errors":[{"message":"No autorizado"},{"message":"otro"}]}"#;
        let result: Result<Vec<PricingRule>, _> = parse_graphql_body(200, body, "pricingRules");
        assert_eq!(result, Err(ApiError::GraphQl("No autorizado".into())));
    }

    #[test]
    fn http_failure_without_errors() {
        let result: Result<bool, _> = parse_graphql_body(502, "<html>Bad gateway</html>", "x");
        assert!(matches!(result, Err(ApiError::Http { status: 502, .. })));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let result: Result<Vec<PricingRule>, _> =
            parse_graphql_body(200, r#"{"data":{}}"#, "pricingRules");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
