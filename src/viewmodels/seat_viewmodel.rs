// Asientos por vuelo: consulta, alta, edición en línea y borrado

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::Seat;
use crate::services::ApiClient;
use crate::state::ListState;
use crate::utils::{parse_integer, require};

const FLIGHT_ID_MSG: &str = "El id de vuelo debe ser un entero positivo.";

fn parse_flight_id(value: &str) -> Result<i32, ApiError> {
    let id = parse_integer(value, 1, FLIGHT_ID_MSG)?;
    i32::try_from(id).map_err(|_| ApiError::validation(FLIGHT_ID_MSG))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatForm {
    pub flight_id: String,
    pub seat_number: String,
}

impl SeatForm {
    pub fn with_flight(flight_id: i32) -> Self {
        Self {
            flight_id: flight_id.to_string(),
            seat_number: String::new(),
        }
    }

    pub fn flight_id(&self) -> Result<i32, ApiError> {
        parse_flight_id(&self.flight_id)
    }

    pub fn validate(&self) -> Result<(i32, String), ApiError> {
        let flight_id = self.flight_id()?;
        let seat_number = require(&self.seat_number, "El número de asiento es obligatorio.")?;
        Ok((flight_id, seat_number))
    }
}

impl Default for SeatForm {
    fn default() -> Self {
        Self::with_flight(CONFIG.default_flight_id)
    }
}

/// Edición en línea de un asiento
#[derive(Debug, Clone, PartialEq)]
pub struct SeatEdit {
    pub seat_id: i64,
    pub seat_number: String,
    pub is_available: bool,
}

impl SeatEdit {
    pub fn from_seat(seat: &Seat) -> Self {
        Self {
            seat_id: seat.id,
            seat_number: seat.seat_number.clone(),
            is_available: seat.is_available,
        }
    }

    pub fn validate(&self) -> Result<String, ApiError> {
        require(&self.seat_number, "El número de asiento es obligatorio.")
    }
}

#[derive(Clone)]
pub struct SeatViewModel {
    api_client: ApiClient,
    pub list: Rc<RefCell<ListState<Seat>>>,
    pub form: Rc<RefCell<SeatForm>>,
    pub editing: Rc<RefCell<Option<SeatEdit>>>,
}

impl SeatViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            list: Rc::new(RefCell::new(ListState::new())),
            form: Rc::new(RefCell::new(SeatForm::default())),
            editing: Rc::new(RefCell::new(None)),
        }
    }

    /// Consulta los asientos del vuelo indicado en el formulario
    pub async fn load(&self) {
        let flight_id = match self.form.borrow().flight_id() {
            Ok(id) => id,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        self.list.borrow_mut().start_loading();
        let result = self.api_client.get_available_seats(flight_id).await;
        self.list.borrow_mut().apply_fetch(result);
    }

    pub async fn create(&self) {
        let (flight_id, seat_number) = match self.form.borrow().validate() {
            Ok(valid) => valid,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self.api_client.create_seat(flight_id, &seat_number).await {
            Ok(()) => {
                self.form.borrow_mut().seat_number.clear();
                self.list
                    .borrow_mut()
                    .succeed(format!("Asiento {} creado.", seat_number));
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }

    pub fn start_edit(&self, seat: &Seat) {
        *self.editing.borrow_mut() = Some(SeatEdit::from_seat(seat));
    }

    pub fn cancel_edit(&self) {
        *self.editing.borrow_mut() = None;
    }

    pub async fn save_edit(&self) {
        let Some(edit) = self.editing.borrow().clone() else {
            return;
        };
        let seat_number = match edit.validate() {
            Ok(number) => number,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self
            .api_client
            .update_seat(edit.seat_id, &seat_number, edit.is_available)
            .await
        {
            Ok(()) => {
                self.cancel_edit();
                self.list.borrow_mut().succeed("Asiento actualizado.");
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }

    pub async fn delete(&self, seat_id: i64) {
        match self.api_client.delete_seat(seat_id).await {
            Ok(()) => {
                self.list.borrow_mut().succeed("Asiento eliminado.");
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }
}

impl Default for SeatViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_id_must_be_positive_integer() {
        let mut form = SeatForm::with_flight(1);
        form.seat_number = "12A".into();
        assert_eq!(form.validate(), Ok((1, "12A".to_string())));

        for bad in ["0", "-3", "1.5", "uno", ""] {
            form.flight_id = bad.into();
            assert!(form.validate().is_err(), "{} debería fallar", bad);
        }
    }

    #[test]
    fn seat_number_required() {
        let form = SeatForm::with_flight(2);
        assert!(form.validate().unwrap_err().is_validation());
    }

    #[test]
    fn edit_starts_from_current_values() {
        let seat = Seat {
            id: 4,
            seat_number: "3C".into(),
            is_available: false,
        };
        let edit = SeatEdit::from_seat(&seat);
        assert_eq!(edit.seat_id, 4);
        assert!(!edit.is_available);
        assert_eq!(edit.validate(), Ok("3C".to_string()));
    }
}
