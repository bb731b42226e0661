// Información de aeropuertos (GraphQL en /airport)

use serde::Serialize;

use crate::error::ApiError;
use crate::models::airport::AirportFields;
use crate::models::Airport;
use crate::services::graphql::{CreatedId, GraphQlRequest};
use crate::services::ApiClient;

pub const AIRPORTS_ENDPOINT: &str = "/airport";

const AIRPORTS_QUERY: &str = r#"
query {
  airports {
    id
    name
    city
    country
    iataCode
  }
}"#;

const CREATE_AIRPORT_MUTATION: &str = r#"
mutation CreateAirport($name: String!, $city: String!, $country: String!, $iataCode: String!) {
  createAirport(name: $name, city: $city, country: $country, iataCode: $iataCode) {
    id
  }
}"#;

const UPDATE_AIRPORT_MUTATION: &str = r#"
mutation UpdateAirport($id: Int!, $name: String!, $city: String!, $country: String!, $iataCode: String!) {
  updateAirport(id: $id, name: $name, city: $city, country: $country, iataCode: $iataCode) {
    id
  }
}"#;

const DELETE_AIRPORT_MUTATION: &str = r#"
mutation DeleteAirport($id: Int!) {
  deleteAirport(id: $id)
}"#;

#[derive(Serialize)]
struct UpdateAirportVariables<'a> {
    id: i64,
    #[serde(flatten)]
    fields: &'a AirportFields,
}

pub fn airports_request() -> GraphQlRequest {
    GraphQlRequest::query(AIRPORTS_QUERY, "airports")
}

pub fn create_airport_request(fields: &AirportFields) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(CREATE_AIRPORT_MUTATION, "createAirport", fields)
}

pub fn update_airport_request(id: i64, fields: &AirportFields) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        UPDATE_AIRPORT_MUTATION,
        "updateAirport",
        &UpdateAirportVariables { id, fields },
    )
}

pub fn delete_airport_request(id: i64) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        DELETE_AIRPORT_MUTATION,
        "deleteAirport",
        &serde_json::json!({ "id": id }),
    )
}

impl ApiClient {
    pub async fn get_airports(&self) -> Result<Vec<Airport>, ApiError> {
        self.graphql(AIRPORTS_ENDPOINT, &airports_request()).await
    }

    pub async fn create_airport(&self, fields: &AirportFields) -> Result<(), ApiError> {
        log::info!("🛬 Creando aeropuerto {}", fields.iata_code);
        let _: CreatedId = self
            .graphql(AIRPORTS_ENDPOINT, &create_airport_request(fields)?)
            .await?;
        Ok(())
    }

    pub async fn update_airport(&self, id: i64, fields: &AirportFields) -> Result<(), ApiError> {
        log::info!("🛬 Actualizando aeropuerto {}", id);
        let _: CreatedId = self
            .graphql(AIRPORTS_ENDPOINT, &update_airport_request(id, fields)?)
            .await?;
        Ok(())
    }

    pub async fn delete_airport(&self, id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ Eliminando aeropuerto {}", id);
        let deleted: bool = self
            .graphql(AIRPORTS_ENDPOINT, &delete_airport_request(id)?)
            .await?;
        if deleted {
            Ok(())
        } else {
            Err(ApiError::GraphQl(format!("No se pudo eliminar el aeropuerto {}", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_flattens_fields_next_to_id() {
        let fields = AirportFields {
            name: "Mariscal Sucre".into(),
            city: "Quito".into(),
            country: "Ecuador".into(),
            iata_code: "UIO".into(),
        };
        let request = update_airport_request(5, &fields).unwrap();
        assert_eq!(request.variables["id"], 5);
        assert_eq!(request.variables["iataCode"], "UIO");
        assert_eq!(request.variables["city"], "Quito");
    }
}
