// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::rc::Rc;

use crate::router::{self, Route};
use crate::state::{AuthState, ReactiveState};
use crate::utils::{LocalTokenStore, TokenStore};

/// Estado global: sesión + ruta actual
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub route: ReactiveState<Route>,
}

impl AppState {
    /// Estado real del navegador: token de localStorage y ruta de `window.location`
    pub fn new() -> Self {
        Self::with_store(Rc::new(LocalTokenStore::new()), router::current_route())
    }

    pub fn with_store(store: Rc<dyn TokenStore>, route: Route) -> Self {
        Self {
            auth: AuthState::restore(store),
            route: ReactiveState::new(route),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }

    /// Cambiar de vista sin tocar la URL (popstate, tests)
    pub fn set_route(&self, route: Route) {
        log::info!("🧭 [ROUTER] → {}", route.path());
        self.route.set(route);
    }

    /// Navegar: nueva entrada en el historial + re-render
    pub fn navigate(&self, route: Route) {
        if let Err(e) = router::push_history(&route) {
            log::warn!("⚠️ [ROUTER] pushState falló: {:?}", e);
        }
        self.set_route(route);
    }

    /// Redirección del guard: reemplaza la entrada actual
    pub fn redirect(&self, route: Route) {
        if let Err(e) = router::replace_history(&route) {
            log::warn!("⚠️ [ROUTER] replaceState falló: {:?}", e);
        }
        self.set_route(route);
    }

    /// Login exitoso: la app vuelve a la portada
    pub fn on_logged_in(&self) {
        self.navigate(Route::Home);
    }

    /// Logout desde el header: limpia sesión y vuelve a la portada
    pub fn logout(&self) {
        self.auth.logout();
        self.navigate(Route::Home);
    }

    /// Suscribirse a cambios de ruta (re-render)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.route.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryTokenStore;
    use crate::utils::token::test_tokens::token_for_role;
    use std::cell::Cell;

    #[test]
    fn route_changes_notify_subscribers() {
        let state = AppState::with_store(Rc::new(MemoryTokenStore::new()), Route::Home);
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            state.subscribe_to_changes(move || renders.set(renders.get() + 1));
        }
        state.clone().set_route(Route::Login);
        assert_eq!(state.current_route(), Route::Login);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn restores_admin_session_from_store() {
        let store = MemoryTokenStore::with_token(&token_for_role("admin"));
        let state = AppState::with_store(Rc::new(store), Route::PricingRules);
        assert!(state.auth.is_admin());
    }
}
