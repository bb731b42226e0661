// ============================================================================
// REGISTER VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::router::Route;
use crate::state::{AppState, FormStatus};
use crate::viewmodels::{RegisterForm, SessionViewModel};
use crate::views::auth::{feedback_slot, redirect_after};
use crate::views::shared::{nav_link, page, submit_button, text_field, Redraw};

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let form = Rc::new(RefCell::new(RegisterForm::default()));
    let status = Rc::new(RefCell::new(FormStatus::default()));
    let redraw = Redraw::new();

    let container = page("register-page", "Crear cuenta")?;

    let fields = [
        ("Nombre", "text"),
        ("Correo electrónico", "email"),
        ("Contraseña", "password"),
        ("Confirmar contraseña", "password"),
    ];
    let form_el = ElementBuilder::new("form")?.class("auth-form").build();
    for (index, (label, input_type)) in fields.into_iter().enumerate() {
        let form = form.clone();
        let field = text_field(label, input_type, "", move |v| {
            let mut form = form.borrow_mut();
            match index {
                0 => form.name = v,
                1 => form.email = v,
                2 => form.password = v,
                _ => form.confirm_password = v,
            }
        })?;
        append_child(&form_el, &field)?;
    }
    append_child(&form_el, &feedback_slot(&status, &redraw)?)?;
    append_child(&form_el, &submit_button("Registrarse", false)?)?;

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
                let result = SessionViewModel::new().register(&form).await;
                let ok = status
                    .borrow_mut()
                    .finish(&result, "Registro exitoso. Redirigiendo al inicio de sesión...");
                redraw.run();
                if ok {
                    redirect_after(&state, CONFIG.redirect_config.after_register_ms, Route::Login);
                }
            });
        })?;
    }

    append_child(&container, &form_el)?;
    let login_link = ElementBuilder::new("div")?
        .class("auth-links")
        .child(nav_link(state, "¿Ya tienes cuenta? Inicia sesión", Route::Login)?)?
        .build();
    append_child(&container, &login_link)?;
    Ok(container)
}
