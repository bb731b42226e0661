// Catálogo de rutas: nombre + lista editable de tramos

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{FlightRoute, Segment};
use crate::services::ApiClient;
use crate::state::ListState;
use crate::utils::{parse_integer, require};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentForm {
    pub origin: String,
    pub destination: String,
    pub distance_km: String,
}

impl SegmentForm {
    fn validate(&self, index: usize) -> Result<Segment, ApiError> {
        let n = index + 1;
        Ok(Segment {
            id: None,
            origin: require(&self.origin, &format!("Tramo {}: falta el origen.", n))?,
            destination: require(&self.destination, &format!("Tramo {}: falta el destino.", n))?,
            distance_km: parse_integer(
                &self.distance_km,
                0,
                &format!("Tramo {}: la distancia debe ser un entero mayor o igual a 0.", n),
            )?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteForm {
    pub name: String,
    pub segments: Vec<SegmentForm>,
}

impl Default for RouteForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            segments: vec![SegmentForm::default()],
        }
    }
}

impl RouteForm {
    pub fn add_segment(&mut self) {
        self.segments.push(SegmentForm::default());
    }

    /// Siempre queda al menos un tramo en el formulario
    pub fn remove_segment(&mut self, index: usize) {
        if self.segments.len() > 1 && index < self.segments.len() {
            self.segments.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(String, Vec<Segment>), ApiError> {
        let name = require(&self.name, "El nombre de la ruta es obligatorio.")?;
        if self.segments.is_empty() {
            return Err(ApiError::validation("La ruta necesita al menos un tramo."));
        }
        let segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| s.validate(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((name, segments))
    }
}

#[derive(Clone)]
pub struct RouteViewModel {
    api_client: ApiClient,
    pub list: Rc<RefCell<ListState<FlightRoute>>>,
    pub form: Rc<RefCell<RouteForm>>,
}

impl RouteViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            list: Rc::new(RefCell::new(ListState::new())),
            form: Rc::new(RefCell::new(RouteForm::default())),
        }
    }

    pub async fn load(&self) {
        self.list.borrow_mut().start_loading();
        let result = self.api_client.get_routes().await;
        self.list.borrow_mut().apply_fetch(result);
    }

    pub async fn create(&self) {
        let (name, segments) = match self.form.borrow().validate() {
            Ok(valid) => valid,
            Err(e) => return self.list.borrow_mut().fail(&e),
        };
        match self.api_client.create_route(&name, &segments).await {
            Ok(()) => {
                *self.form.borrow_mut() = RouteForm::default();
                self.list.borrow_mut().succeed(format!("Ruta {} creada.", name));
                self.load().await;
            }
            Err(e) => self.list.borrow_mut().fail(&e),
        }
    }
}

impl Default for RouteViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(origin: &str, destination: &str, distance: &str) -> SegmentForm {
        SegmentForm {
            origin: origin.into(),
            destination: destination.into(),
            distance_km: distance.into(),
        }
    }

    #[test]
    fn segments_can_be_added_but_never_all_removed() {
        let mut form = RouteForm::default();
        form.add_segment();
        assert_eq!(form.segments.len(), 2);
        form.remove_segment(0);
        form.remove_segment(0);
        assert_eq!(form.segments.len(), 1);
    }

    #[test]
    fn validates_every_segment() {
        let form = RouteForm {
            name: "Costa".into(),
            segments: vec![segment("UIO", "GYE", "270"), segment("GYE", "MEC", "-5")],
        };
        let err = form.validate().unwrap_err();
        assert!(err.to_string().starts_with("Tramo 2"));

        let form = RouteForm {
            segments: vec![segment("UIO", "GYE", "270"), segment("GYE", "MEC", "160")],
            ..form
        };
        let (name, segments) = form.validate().unwrap();
        assert_eq!(name, "Costa");
        assert_eq!(segments[1].distance_km, 160);
    }

    #[test]
    fn fractional_distance_is_rejected() {
        let form = RouteForm {
            name: "Sierra".into(),
            segments: vec![segment("UIO", "CUE", "12.5")],
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        let form = RouteForm {
            name: "Vacía".into(),
            segments: Vec::new(),
        };
        assert_eq!(
            form.validate(),
            Err(ApiError::validation("La ruta necesita al menos un tramo."))
        );
    }
}
