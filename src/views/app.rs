// ============================================================================
// APP VIEW - Header + vista de la ruta actual (tras el guard)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{check_access, Access, GuardDecision, Route};
use crate::state::AppState;
use crate::views::{account, admin, auth, catalog, home, shared};

/// Vista de una ruta ya autorizada
fn render_route(state: &AppState, route: &Route) -> Result<Element, JsValue> {
    match route {
        Route::Home => home::render_home(state),
        Route::Login => auth::render_login(state),
        Route::Register => auth::render_register(state),
        Route::PasswordRecovery => auth::render_password_recovery(state),
        Route::VerifyToken => auth::render_verify_token(state),
        Route::ResetPassword { token } => auth::render_reset_password(state, token.clone()),
        Route::Unauthorized => home::render_unauthorized(state),
        Route::Dashboard => account::render_dashboard(state),
        Route::Account => account::render_account(state),
        Route::Profile => account::render_profile(state),
        Route::Preferences => account::render_preferences(state),
        Route::PricingRules => catalog::render_pricing_rules(state),
        Route::FlightCatalog => catalog::render_flight_catalog(state),
        Route::RoutesCatalog => catalog::render_routes_catalog(state),
        Route::SeatAvailability => catalog::render_seat_availability(state),
        Route::AirportInfo => catalog::render_airport_info(state),
        Route::Admin => admin::render_admin_panel(state),
        Route::AdminRbac => admin::render_rbac(state),
        Route::NotFound { path } => home::render_not_found(state, path),
    }
}

/// Decisión del guard para la ruta actual; las vistas protegidas releen el token
pub fn guard(state: &AppState, route: &Route) -> GuardDecision {
    let access = route.access();
    let status = if access == Access::Public {
        state.auth.status()
    } else {
        state.auth.refresh()
    };
    check_access(access, &status)
}

/// Renderizar la app completa; devuelve la redirección pendiente si la hay
pub fn render_app(state: &AppState) -> Result<(Element, Option<Route>), JsValue> {
    let route = state.current_route();
    let decision = guard(state, &route);

    let (content, redirect) = match decision {
        GuardDecision::Allow => (render_route(state, &route)?, None),
        GuardDecision::RedirectToLogin => {
            log::warn!("🔒 [GUARD] {} requiere sesión", route.path());
            (home::render_guard_placeholder(decision)?, Some(Route::Login))
        }
        GuardDecision::RedirectToUnauthorized => {
            log::warn!("⛔ [GUARD] Rol sin acceso a {}", route.path());
            (home::render_guard_placeholder(decision)?, Some(Route::Unauthorized))
        }
    };

    let main = ElementBuilder::new("main")?
        .class("app-content")
        .child(content)?
        .build();
    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .child(shared::render_header(state)?)?
        .build();
    append_child(&shell, &main)?;
    Ok((shell, redirect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::token::test_tokens::token_for_role;
    use crate::utils::MemoryTokenStore;
    use std::rc::Rc;

    #[test]
    fn guard_rereads_storage_for_protected_views() {
        let store = MemoryTokenStore::with_token(&token_for_role("admin"));
        let state = AppState::with_store(Rc::new(store.clone()), Route::Admin);
        assert_eq!(guard(&state, &Route::Admin), GuardDecision::Allow);

        crate::utils::TokenStore::clear(&store);
        assert_eq!(guard(&state, &Route::Admin), GuardDecision::RedirectToLogin);
        assert_eq!(guard(&state, &Route::Home), GuardDecision::Allow);
    }

    #[test]
    fn user_role_is_sent_to_unauthorized_for_admin_views() {
        let store = MemoryTokenStore::with_token(&token_for_role("user"));
        let state = AppState::with_store(Rc::new(store), Route::AdminRbac);
        assert_eq!(
            guard(&state, &Route::AdminRbac),
            GuardDecision::RedirectToUnauthorized
        );
        assert_eq!(
            home::guard_placeholder_text(GuardDecision::RedirectToUnauthorized),
            "Acceso denegado"
        );
    }
}
