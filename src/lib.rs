// ============================================================================
// FLIGHT APP - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Validación + Lógica UI
// - Services: SOLO comunicación API (REST + GraphQL)
// - State: Sesión y estado de vistas con Rc<RefCell>
// - Models: Estructuras compartidas con los microservicios
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod state;
pub mod router;
pub mod services;
pub mod viewmodels;
pub mod dom;
pub mod views;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Flight App - Rust Puro + MVVM ({}, API {})",
        CONFIG.environment,
        CONFIG.api_url
    );

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        let Ok(mut slot) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [RERENDER] Render anidado, se omite");
            return;
        };
        match slot.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
