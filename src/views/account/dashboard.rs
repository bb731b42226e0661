// Dashboard y cuenta: datos del token de sesión

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Claims;
use crate::router::Route;
use crate::state::AppState;
use crate::views::shared::{nav_link, page, paragraph};

fn claims_list(claims: &Claims) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("dl")?.class("claims").build();
    let rows = [
        ("Usuario", claims.user_id.clone()),
        ("Correo", claims.email.clone().unwrap_or_else(|| "(sin correo)".to_string())),
        ("Rol", claims.role().to_string()),
    ];
    for (term, value) in rows {
        append_child(&list, &ElementBuilder::new("dt")?.text(term).build())?;
        append_child(&list, &ElementBuilder::new("dd")?.text(&value).build())?;
    }
    Ok(list)
}

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let container = page("dashboard-page", "Dashboard")?;
    if let Some(claims) = state.auth.claims() {
        append_child(
            &container,
            &paragraph("lead", &format!("Hola, {}", claims.display_name()))?,
        )?;
        append_child(&container, &claims_list(&claims)?)?;
    }

    let shortcuts = ElementBuilder::new("div")?
        .class("shortcuts")
        .child(nav_link(state, "Mi cuenta", Route::Account)?)?
        .child(nav_link(state, "Catálogo de vuelos", Route::FlightCatalog)?)?
        .child(nav_link(state, "Reglas de precios", Route::PricingRules)?)?
        .build();
    append_child(&container, &shortcuts)?;
    Ok(container)
}

pub fn render_account(state: &AppState) -> Result<Element, JsValue> {
    let container = page("account-page", "Mi cuenta")?;
    if let Some(claims) = state.auth.claims() {
        append_child(&container, &claims_list(&claims)?)?;
    }
    let links = ElementBuilder::new("div")?
        .class("shortcuts")
        .child(nav_link(state, "Perfil", Route::Profile)?)?
        .child(nav_link(state, "Preferencias", Route::Preferences)?)?
        .build();
    append_child(&container, &links)?;
    Ok(container)
}
