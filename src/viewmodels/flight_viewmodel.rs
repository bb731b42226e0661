// Catálogo de vuelos

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::flight::NewFlight;
use crate::models::Flight;
use crate::services::ApiClient;
use crate::state::ListState;
use crate::utils::require;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightForm {
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
}

impl FlightForm {
    pub fn validate(&self) -> Result<NewFlight, ApiError> {
        const MSG: &str = "Completa código, origen, destino y hora de salida.";
        Ok(NewFlight {
            code: require(&self.code, MSG)?,
            origin: require(&self.origin, MSG)?,
            destination: require(&self.destination, MSG)?,
            departure_time: require(&self.departure_time, MSG)?,
        })
    }
}

#[derive(Clone)]
pub struct FlightViewModel {
    api_client: ApiClient,
    pub list: Rc<RefCell<ListState<Flight>>>,
    pub form: Rc<RefCell<FlightForm>>,
}

impl FlightViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            list: Rc::new(RefCell::new(ListState::new())),
            form: Rc::new(RefCell::new(FlightForm::default())),
        }
    }

    pub async fn load(&self) {
        self.list.borrow_mut().start_loading();
        let result = self.api_client.get_flights().await;
        self.list.borrow_mut().apply_fetch(result);
    }

    pub async fn create(&self) {
        let flight = match self.form.borrow().validate() {
            Ok(flight) => flight,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self.api_client.create_flight(&flight).await {
            Ok(()) => {
                *self.form.borrow_mut() = FlightForm::default();
                self.list
                    .borrow_mut()
                    .succeed(format!("Vuelo {} creado.", flight.code));
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }
}

impl Default for FlightViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        let full = FlightForm {
            code: "AV101".into(),
            origin: "UIO".into(),
            destination: "GYE".into(),
            departure_time: "2025-03-01T08:30".into(),
        };
        assert!(full.validate().is_ok());
        for blank in 0..4 {
            let mut form = full.clone();
            match blank {
                0 => form.code.clear(),
                1 => form.origin.clear(),
                2 => form.destination = "  ".into(),
                _ => form.departure_time.clear(),
            }
            assert!(form.validate().unwrap_err().is_validation());
        }
    }
}
