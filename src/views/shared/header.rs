// ============================================================================
// HEADER - Navegación según el estado de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::Capabilities;
use crate::views::shared::button;

/// Enlace interno: `href` real para abrir en pestaña nueva, click = pushState
pub fn nav_link(state: &AppState, label: &str, route: Route) -> Result<Element, JsValue> {
    let current = state.current_route() == route;
    let link = ElementBuilder::new("a")?
        .class(if current { "nav-link active" } else { "nav-link" })
        .attr("href", route.path())?
        .text(label)
        .build();
    let state = state.clone();
    on_click(&link, move |e| {
        e.prevent_default();
        state.navigate(route.clone());
    })?;
    Ok(link)
}

/// Entradas del menú para la sesión actual
pub fn menu_entries(state: &AppState) -> Vec<(&'static str, Route)> {
    let status = state.auth.status();
    if !status.is_authenticated() {
        return vec![
            ("Inicio", Route::Home),
            ("Registro", Route::Register),
            ("Iniciar sesión", Route::Login),
        ];
    }

    let mut entries = vec![
        ("Inicio", Route::Home),
        ("Dashboard", Route::Dashboard),
        ("Precios", Route::PricingRules),
        ("Vuelos", Route::FlightCatalog),
        ("Rutas", Route::RoutesCatalog),
        ("Asientos", Route::SeatAvailability),
        ("Aeropuertos", Route::AirportInfo),
        ("Perfil", Route::Profile),
        ("Preferencias", Route::Preferences),
    ];
    if Capabilities::for_session(&status).manage_roles {
        entries.push(("Panel RBAC", Route::AdminRbac));
    }
    entries
}

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let brand = ElementBuilder::new("span")?
        .class("brand")
        .text("✈️ Flight App")
        .build();

    let nav = ElementBuilder::new("nav")?.class("main-nav").build();
    for (label, route) in menu_entries(state) {
        append_child(&nav, &nav_link(state, label, route)?)?;
    }

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(nav)?
        .build();

    if let Some(claims) = state.auth.claims() {
        let user = ElementBuilder::new("span")?
            .class("current-user")
            .text(&format!("👤 {}", claims.display_name()))
            .build();
        let logout = {
            let state = state.clone();
            button("Cerrar sesión", "btn-logout", move || {
                log::info!("🚪 [HEADER] Logout");
                state.logout();
            })?
        };
        append_child(&header, &user)?;
        append_child(&header, &logout)?;
    }

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::token::test_tokens::token_for_role;
    use crate::utils::MemoryTokenStore;
    use std::rc::Rc;

    fn state_with(store: MemoryTokenStore) -> AppState {
        AppState::with_store(Rc::new(store), Route::Home)
    }

    #[test]
    fn anonymous_menu_offers_login_and_register() {
        let routes: Vec<Route> = menu_entries(&state_with(MemoryTokenStore::new()))
            .into_iter()
            .map(|(_, r)| r)
            .collect();
        assert!(routes.contains(&Route::Login));
        assert!(routes.contains(&Route::Register));
        assert!(!routes.contains(&Route::PricingRules));
    }

    #[test]
    fn rbac_link_only_for_admins() {
        let admin = state_with(MemoryTokenStore::with_token(&token_for_role("admin")));
        let user = state_with(MemoryTokenStore::with_token(&token_for_role("user")));
        assert!(menu_entries(&admin).iter().any(|(_, r)| *r == Route::AdminRbac));
        assert!(!menu_entries(&user).iter().any(|(_, r)| *r == Route::AdminRbac));
        assert!(menu_entries(&user).iter().any(|(_, r)| *r == Route::SeatAvailability));
    }
}
