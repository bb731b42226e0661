// Catálogo de vuelos (GraphQL en /flight-catalog)

use crate::error::ApiError;
use crate::models::flight::NewFlight;
use crate::models::Flight;
use crate::services::graphql::{CreatedId, GraphQlRequest};
use crate::services::ApiClient;

pub const FLIGHTS_ENDPOINT: &str = "/flight-catalog";

const FLIGHTS_QUERY: &str = r#"
query {
  getFlights {
    id
    code
    origin
    destination
    departureTime
  }
}"#;

pub fn flights_request() -> GraphQlRequest {
    GraphQlRequest::query(FLIGHTS_QUERY, "getFlights")
}

/// Argumentos en línea, como los recibe el catálogo de vuelos.
/// Cada valor va como string JSON, que también es un string GraphQL válido.
pub fn create_flight_request(flight: &NewFlight) -> Result<GraphQlRequest, ApiError> {
    let query = format!(
        r#"
mutation {{
  createFlight(
    code: {},
    origin: {},
    destination: {},
    departureTime: {}
  ) {{
    id
  }}
}}"#,
        serde_json::to_string(&flight.code)?,
        serde_json::to_string(&flight.origin)?,
        serde_json::to_string(&flight.destination)?,
        serde_json::to_string(&flight.departure_time)?,
    );
    Ok(GraphQlRequest::query(query, "createFlight"))
}

impl ApiClient {
    pub async fn get_flights(&self) -> Result<Vec<Flight>, ApiError> {
        self.graphql(FLIGHTS_ENDPOINT, &flights_request()).await
    }

    pub async fn create_flight(&self, flight: &NewFlight) -> Result<(), ApiError> {
        log::info!("✈️ Creando vuelo {}", flight.code);
        let _: CreatedId = self.graphql(FLIGHTS_ENDPOINT, &create_flight_request(flight)?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_flight_inlines_escaped_arguments() {
        let request = create_flight_request(&NewFlight {
            code: "AV\"1".into(),
            origin: "UIO".into(),
            destination: "GYE".into(),
            departure_time: "2025-03-01T08:30".into(),
        })
        .unwrap();
        assert!(!request.query.contains('$'));
        assert!(request.query.contains(r#"code: "AV\"1","#));
        assert!(request.query.contains(r#"departureTime: "2025-03-01T08:30""#));
        assert!(request.variables.is_null());
        assert_eq!(request.field, "createFlight");
    }
}
