// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, on_window_event, replace_children};
use crate::router;
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación (restaura la sesión desde localStorage)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Re-render en el próximo tick: agrupa varios cambios seguidos
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        // Botones atrás/adelante del navegador (listener global, una sola vez)
        {
            let state = state.clone();
            on_window_event("popstate", move |_e| {
                state.set_route(router::current_route());
            })?;
        }

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render {}", self.state.current_route().path());

        let (view, redirect) = render_app(&self.state)?;
        replace_children(&self.root, &view)?;

        // Guard: el placeholder ya está en pantalla, la redirección re-renderiza
        if let Some(route) = redirect {
            self.state.redirect(route);
        }
        Ok(())
    }
}
