mod login_view;
mod register_view;
mod recovery_view;

pub use login_view::*;
pub use register_view::*;
pub use recovery_view::*;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::Route;
use crate::state::{AppState, FormStatus};
use crate::views::shared::{feedback, mount, Redraw};

/// Navegar a `route` después de `delay_ms` (mensaje de éxito visible mientras tanto)
fn redirect_after(state: &AppState, delay_ms: u32, route: Route) {
    log::info!("⏳ [AUTH] Redirección a {} en {} ms", route.path(), delay_ms);
    let state = state.clone();
    Timeout::new(delay_ms, move || state.navigate(route)).forget();
}

/// Zona de feedback del formulario, redibujada tras cada envío
fn feedback_slot(status: &Rc<RefCell<FormStatus>>, redraw: &Redraw) -> Result<Element, JsValue> {
    let slot = crate::dom::ElementBuilder::new("div")?.class("form-feedback").build();
    let status = status.clone();
    mount(&slot, redraw, move |_| {
        let status = status.borrow();
        feedback(status.error.as_deref(), status.message.as_deref())
    });
    Ok(slot)
}
