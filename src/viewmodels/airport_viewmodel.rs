// Aeropuertos: listado, alta, edición y borrado

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::airport::AirportFields;
use crate::models::Airport;
use crate::services::ApiClient;
use crate::state::ListState;
use crate::utils::require;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportForm {
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata_code: String,
}

impl AirportForm {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            iata_code: airport.iata_code.clone(),
        }
    }

    pub fn validate(&self) -> Result<AirportFields, ApiError> {
        const MSG: &str = "Todos los campos son obligatorios.";
        let name = require(&self.name, MSG)?;
        let city = require(&self.city, MSG)?;
        let country = require(&self.country, MSG)?;
        let iata_code = require(&self.iata_code, MSG)?.to_ascii_uppercase();
        if iata_code.len() != 3 || !iata_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ApiError::validation(
                "El código IATA debe tener exactamente 3 letras.",
            ));
        }
        Ok(AirportFields {
            name,
            city,
            country,
            iata_code,
        })
    }
}

#[derive(Clone)]
pub struct AirportViewModel {
    api_client: ApiClient,
    pub list: Rc<RefCell<ListState<Airport>>>,
    pub form: Rc<RefCell<AirportForm>>,
    /// (id, valores editados) del aeropuerto en edición
    pub editing: Rc<RefCell<Option<(i64, AirportForm)>>>,
}

impl AirportViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            list: Rc::new(RefCell::new(ListState::new())),
            form: Rc::new(RefCell::new(AirportForm::default())),
            editing: Rc::new(RefCell::new(None)),
        }
    }

    pub async fn load(&self) {
        self.list.borrow_mut().start_loading();
        let result = self.api_client.get_airports().await;
        self.list.borrow_mut().apply_fetch(result);
    }

    pub async fn create(&self) {
        let fields = match self.form.borrow().validate() {
            Ok(fields) => fields,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self.api_client.create_airport(&fields).await {
            Ok(()) => {
                *self.form.borrow_mut() = AirportForm::default();
                self.list
                    .borrow_mut()
                    .succeed(format!("Aeropuerto {} creado.", fields.iata_code));
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }

    pub fn start_edit(&self, airport: &Airport) {
        *self.editing.borrow_mut() = Some((airport.id, AirportForm::from_airport(airport)));
    }

    pub fn cancel_edit(&self) {
        *self.editing.borrow_mut() = None;
    }

    pub async fn save_edit(&self) {
        let Some((id, form)) = self.editing.borrow().clone() else {
            return;
        };
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self.api_client.update_airport(id, &fields).await {
            Ok(()) => {
                self.cancel_edit();
                self.list.borrow_mut().succeed("Aeropuerto actualizado.");
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }

    pub async fn delete(&self, id: i64) {
        match self.api_client.delete_airport(id).await {
            Ok(()) => {
                self.list.borrow_mut().succeed("Aeropuerto eliminado.");
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }
}

impl Default for AirportViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(iata: &str) -> AirportForm {
        AirportForm {
            name: "José Joaquín de Olmedo".into(),
            city: "Guayaquil".into(),
            country: "Ecuador".into(),
            iata_code: iata.into(),
        }
    }

    #[test]
    fn iata_code_is_uppercased() {
        assert_eq!(form(" gye ").validate().unwrap().iata_code, "GYE");
    }

    #[test]
    fn iata_code_must_be_three_letters() {
        for bad in ["GY", "GYEE", "G1E", "ÑAN"] {
            assert!(form(bad).validate().is_err(), "{} debería fallar", bad);
        }
        assert!(form("").validate().unwrap_err().to_string().contains("obligatorios"));
    }
}
