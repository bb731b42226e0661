// Disponibilidad de asientos (GraphQL en /seat)

use serde::Serialize;

use crate::error::ApiError;
use crate::models::Seat;
use crate::services::graphql::{CreatedId, GraphQlRequest};
use crate::services::ApiClient;

pub const SEATS_ENDPOINT: &str = "/seat";

const AVAILABLE_SEATS_QUERY: &str = r#"
query GetAvailableSeats($id: Int!) {
  availableSeats(flightId: $id) {
    id
    seatNumber
    isAvailable
  }
}"#;

const CREATE_SEAT_MUTATION: &str = r#"
mutation CreateSeat($flightId: Int!, $seatNumber: String!) {
  createSeat(flightId: $flightId, seatNumber: $seatNumber) {
    id
  }
}"#;

const UPDATE_SEAT_MUTATION: &str = r#"
mutation UpdateSeat($seatId: Int!, $seatNumber: String!, $isAvailable: Boolean!) {
  updateSeat(seatId: $seatId, seatNumber: $seatNumber, isAvailable: $isAvailable) {
    id
  }
}"#;

const DELETE_SEAT_MUTATION: &str = r#"
mutation DeleteSeat($seatId: Int!) {
  deleteSeat(seatId: $seatId)
}"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewSeatVariables<'a> {
    flight_id: i32,
    seat_number: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSeatVariables<'a> {
    seat_id: i64,
    seat_number: &'a str,
    is_available: bool,
}

pub fn available_seats_request(flight_id: i32) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        AVAILABLE_SEATS_QUERY,
        "availableSeats",
        &serde_json::json!({ "id": flight_id }),
    )
}

pub fn create_seat_request(flight_id: i32, seat_number: &str) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        CREATE_SEAT_MUTATION,
        "createSeat",
        &NewSeatVariables { flight_id, seat_number },
    )
}

pub fn update_seat_request(
    seat_id: i64,
    seat_number: &str,
    is_available: bool,
) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        UPDATE_SEAT_MUTATION,
        "updateSeat",
        &UpdateSeatVariables {
            seat_id,
            seat_number,
            is_available,
        },
    )
}

pub fn delete_seat_request(seat_id: i64) -> Result<GraphQlRequest, ApiError> {
    GraphQlRequest::with_variables(
        DELETE_SEAT_MUTATION,
        "deleteSeat",
        &serde_json::json!({ "seatId": seat_id }),
    )
}

impl ApiClient {
    pub async fn get_available_seats(&self, flight_id: i32) -> Result<Vec<Seat>, ApiError> {
        self.graphql(SEATS_ENDPOINT, &available_seats_request(flight_id)?).await
    }

    pub async fn create_seat(&self, flight_id: i32, seat_number: &str) -> Result<(), ApiError> {
        log::info!("💺 Creando asiento {} en vuelo {}", seat_number, flight_id);
        let _: CreatedId = self
            .graphql(SEATS_ENDPOINT, &create_seat_request(flight_id, seat_number)?)
            .await?;
        Ok(())
    }

    pub async fn update_seat(
        &self,
        seat_id: i64,
        seat_number: &str,
        is_available: bool,
    ) -> Result<(), ApiError> {
        log::info!("💺 Actualizando asiento {}", seat_id);
        let request = update_seat_request(seat_id, seat_number, is_available)?;
        let _: CreatedId = self.graphql(SEATS_ENDPOINT, &request).await?;
        Ok(())
    }

    /// `deleteSeat` devuelve Boolean; `false` se trata como error
    pub async fn delete_seat(&self, seat_id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ Eliminando asiento {}", seat_id);
        let deleted: bool = self.graphql(SEATS_ENDPOINT, &delete_seat_request(seat_id)?).await?;
        if deleted {
            Ok(())
        } else {
            Err(ApiError::GraphQl(format!("No se pudo eliminar el asiento {}", seat_id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_requests_carry_integer_ids() {
        let list = available_seats_request(3).unwrap();
        assert_eq!(list.variables["id"], 3);
        assert_eq!(list.field, "availableSeats");

        let update = update_seat_request(9, "12A", false).unwrap();
        assert_eq!(update.variables["seatId"], 9);
        assert_eq!(update.variables["seatNumber"], "12A");
        assert_eq!(update.variables["isAvailable"], false);

        let create = create_seat_request(3, "1C").unwrap();
        assert_eq!(create.variables["flightId"], 3);
    }
}
