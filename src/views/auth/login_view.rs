// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::router::Route;
use crate::state::{AppState, FormStatus};
use crate::viewmodels::{LoginForm, SessionViewModel};
use crate::views::auth::feedback_slot;
use crate::views::shared::{nav_link, page, submit_button, text_field, Redraw};

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    let form = Rc::new(RefCell::new(LoginForm::default()));
    let status = Rc::new(RefCell::new(FormStatus::default()));
    let redraw = Redraw::new();

    let container = page("login-page", "Iniciar sesión")?;

    let email = {
        let form = form.clone();
        text_field("Correo electrónico", "email", "", move |v| form.borrow_mut().email = v)?
    };
    let password = {
        let form = form.clone();
        text_field("Contraseña", "password", "", move |v| form.borrow_mut().password = v)?
    };

    let form_el = ElementBuilder::new("form")?
        .class("auth-form")
        .child(email)?
        .child(password)?
        .child(feedback_slot(&status, &redraw)?)?
        .child(submit_button("Ingresar", false)?)?
        .build();

    {
        let state = state.clone();
        on_submit(&form_el, move || {
            if status.borrow().submitting {
                return;
            }
            status.borrow_mut().start();

            let form = form.borrow().clone();
            let state = state.clone();
            let status = status.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.login(&state.auth, &form).await {
                    Ok(_) => state.on_logged_in(),
                    Err(e) => {
                        log::warn!("⚠️ [LOGIN] {}", e);
                        status.borrow_mut().fail(&e);
                        redraw.run();
                    }
                }
            });
        })?;
    }

    append_child(&container, &form_el)?;

    let links = ElementBuilder::new("div")?
        .class("auth-links")
        .child(nav_link(state, "¿Olvidaste tu contraseña?", Route::PasswordRecovery)?)?
        .child(nav_link(state, "Crear cuenta", Route::Register)?)?
        .build();
    append_child(&container, &links)?;

    Ok(container)
}
