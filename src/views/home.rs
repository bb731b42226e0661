// Portada, páginas de estado y placeholder del guard

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::append_child;
use crate::router::{GuardDecision, Route};
use crate::state::AppState;
use crate::views::shared::{nav_link, page, paragraph};

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let container = page("home-page", "Bienvenido a Flight App")?;
    append_child(
        &container,
        &paragraph(
            "lead",
            "Consulta vuelos, rutas, asientos y aeropuertos desde un solo lugar.",
        )?,
    )?;

    match state.auth.claims() {
        Some(claims) => {
            let greeting = format!("Sesión iniciada como {}.", claims.display_name());
            append_child(&container, &paragraph("session-info", &greeting)?)?;
            append_child(&container, &nav_link(state, "Ir al dashboard", Route::Dashboard)?)?;
        }
        None => {
            append_child(&container, &nav_link(state, "Iniciar sesión", Route::Login)?)?;
            append_child(&container, &nav_link(state, "Crear cuenta", Route::Register)?)?;
        }
    }
    Ok(container)
}

pub fn render_unauthorized(state: &AppState) -> Result<Element, JsValue> {
    let container = page("status-page", "Acceso denegado")?;
    append_child(
        &container,
        &paragraph("error-message", "No tienes permisos para ver esta página.")?,
    )?;
    append_child(&container, &nav_link(state, "Volver al inicio", Route::Home)?)?;
    Ok(container)
}

pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    let container = page("status-page", "Página no encontrada")?;
    append_child(
        &container,
        &paragraph("hint", &format!("La ruta {} no existe.", path))?,
    )?;
    append_child(&container, &nav_link(state, "Volver al inicio", Route::Home)?)?;
    Ok(container)
}

/// Texto mostrado mientras el guard redirige
pub fn guard_placeholder_text(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::RedirectToUnauthorized => "Acceso denegado",
        _ => "Verificando sesión...",
    }
}

pub fn render_guard_placeholder(decision: GuardDecision) -> Result<Element, JsValue> {
    let container = page("status-page", "")?;
    append_child(&container, &paragraph("loading", guard_placeholder_text(decision))?)?;
    Ok(container)
}
