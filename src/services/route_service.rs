// Catálogo de rutas (GraphQL en /routes)

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{FlightRoute, Segment};
use crate::services::graphql::{CreatedId, GraphQlRequest};
use crate::services::ApiClient;

pub const ROUTES_ENDPOINT: &str = "/routes";

const ROUTES_QUERY: &str = r#"
query {
  getRoutes {
    id
    name
    segments {
      id
      origin
      destination
      distanceKm
    }
  }
}"#;

const CREATE_ROUTE_MUTATION: &str = r#"
mutation CreateRoute($name: String!, $segmentsData: [SegmentInput!]!) {
  createRoute(name: $name, segmentsData: $segmentsData) {
    id
  }
}"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRouteVariables<'a> {
    name: &'a str,
    segments_data: &'a [Segment],
}

pub fn routes_request() -> GraphQlRequest {
    GraphQlRequest::query(ROUTES_QUERY, "getRoutes")
}

pub fn create_route_request(name: &str, segments: &[Segment]) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        CREATE_ROUTE_MUTATION,
        "createRoute",
        &CreateRouteVariables {
            name,
            segments_data: segments,
        },
    )
}

impl ApiClient {
    pub async fn get_routes(&self) -> Result<Vec<FlightRoute>, ApiError> {
        self.graphql(ROUTES_ENDPOINT, &routes_request()).await
    }

    pub async fn create_route(&self, name: &str, segments: &[Segment]) -> Result<(), ApiError> {
        log::info!("🗺️ Creando ruta {} ({} tramos)", name, segments.len());
        let _: CreatedId = self
            .graphql(ROUTES_ENDPOINT, &create_route_request(name, segments)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_sent_as_segment_input() {
        let segments = vec![Segment {
            id: None,
            origin: "UIO".into(),
            destination: "GYE".into(),
            distance_km: 270,
        }];
        let request = create_route_request("UIO-GYE", &segments).unwrap();
        let data = &request.variables["segmentsData"][0];
        assert_eq!(data["distanceKm"], 270);
        assert!(data.get("id").is_none());
        assert_eq!(request.variables["name"], "UIO-GYE");
    }

    #[test]
    fn routes_deserialize_with_nested_segments() {
        let body = r#"{"data":{"getRoutes":[{"id":1,"name":"Costa","segments":[
            {"id":3,"origin":"UIO","destination":"GYE","distanceKm":270},
            {"id":4,"origin":"GYE","destination":"MEC","distanceKm":160}]}]}}"#;
        let routes: Vec<FlightRoute> =
            crate::services::graphql::parse_graphql_body(200, body, "getRoutes").unwrap();
        assert_eq!(routes[0].total_distance_km(), 430);
    }
}
