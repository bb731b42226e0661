use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::views::shared::{nav_link, page, paragraph};

/// Panel de administración (solo rol admin)
pub fn render_admin_panel(state: &AppState) -> Result<Element, JsValue> {
    let container = page("admin-page", "Panel de administración")?;
    let name = state
        .auth
        .claims()
        .map(|c| c.display_name().to_string())
        .unwrap_or_default();
    append_child(&container, &paragraph("lead", &format!("Bienvenido, {}.", name))?)?;

    let tools = ElementBuilder::new("div")?
        .class("shortcuts")
        .child(nav_link(state, "Roles y permisos", Route::AdminRbac)?)?
        .child(nav_link(state, "Reglas de precios", Route::PricingRules)?)?
        .child(nav_link(state, "Aeropuertos", Route::AirportInfo)?)?
        .child(nav_link(state, "Asientos", Route::SeatAvailability)?)?
        .build();
    append_child(&container, &tools)?;
    Ok(container)
}
