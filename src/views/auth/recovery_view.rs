// Recuperación de contraseña: solicitud, verificación del código y nueva contraseña

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::router::Route;
use crate::state::{AppState, FormStatus};
use crate::viewmodels::{RecoveryForm, RecoveryViewModel, ResetForm, VerifyTokenForm};
use crate::views::auth::{feedback_slot, redirect_after};
use crate::views::shared::{nav_link, page, paragraph, submit_button, text_field, Redraw};

pub fn render_password_recovery(state: &AppState) -> Result<Element, JsValue> {
    let form = Rc::new(RefCell::new(RecoveryForm::default()));
    let status = Rc::new(RefCell::new(FormStatus::default()));
    let redraw = Redraw::new();

    let container = page("recovery-page", "Recuperar contraseña")?;
    append_child(
        &container,
        &paragraph("hint", "Te enviaremos un código de recuperación a tu correo.")?,
    )?;

    let email = {
        let form = form.clone();
        text_field("Correo electrónico", "email", "", move |v| form.borrow_mut().email = v)?
    };
    let form_el = ElementBuilder::new("form")?
        .class("auth-form")
        .child(email)?
        .child(feedback_slot(&status, &redraw)?)?
        .child(submit_button("Enviar código", false)?)?
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
                let result = RecoveryViewModel::new().request(&form).await;
                let ok = status.borrow_mut().finish(
                    &result,
                    "Si el correo está registrado recibirás un código. Redirigiendo...",
                );
                redraw.run();
                if ok {
                    redirect_after(
                        &state,
                        CONFIG.redirect_config.after_recovery_ms,
                        Route::VerifyToken,
                    );
                }
            });
        })?;
    }

    append_child(&container, &form_el)?;
    append_child(&container, &nav_link(state, "Volver al inicio de sesión", Route::Login)?)?;
    Ok(container)
}

/// Verificación local del código (UUID); no llama al backend
pub fn render_verify_token(state: &AppState) -> Result<Element, JsValue> {
    let form = Rc::new(RefCell::new(VerifyTokenForm::default()));
    let status = Rc::new(RefCell::new(FormStatus::default()));
    let redraw = Redraw::new();

    let container = page("recovery-page", "Verificar código")?;

    let code = {
        let form = form.clone();
        text_field("Código de recuperación", "text", "", move |v| form.borrow_mut().code = v)?
    };
    let form_el = ElementBuilder::new("form")?
        .class("auth-form")
        .child(code)?
        .child(feedback_slot(&status, &redraw)?)?
        .child(submit_button("Verificar", false)?)?
        .build();

    {
        let state = state.clone();
        on_submit(&form_el, move || match form.borrow().validate() {
            Ok(route) => state.navigate(route),
            Err(e) => {
                status.borrow_mut().fail(&e);
                redraw.run();
            }
        })?;
    }

    append_child(&container, &form_el)?;
    Ok(container)
}

pub fn render_reset_password(state: &AppState, token: Option<String>) -> Result<Element, JsValue> {
    let form = Rc::new(RefCell::new(ResetForm::for_token(token)));
    let status = Rc::new(RefCell::new(FormStatus::default()));
    let redraw = Redraw::new();

    let container = page("recovery-page", "Nueva contraseña")?;

    if form.borrow().token.is_none() {
        append_child(
            &container,
            &paragraph("error-message", "El enlace no contiene un token de recuperación.")?,
        )?;
        append_child(&container, &nav_link(state, "Solicitar otro código", Route::PasswordRecovery)?)?;
        return Ok(container);
    }

    let password = {
        let form = form.clone();
        text_field("Nueva contraseña", "password", "", move |v| form.borrow_mut().new_password = v)?
    };
    let form_el = ElementBuilder::new("form")?
        .class("auth-form")
        .child(password)?
        .child(feedback_slot(&status, &redraw)?)?
        .child(submit_button("Cambiar contraseña", false)?)?
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
                match RecoveryViewModel::new().reset(&form).await {
                    Ok(message) => {
                        status.borrow_mut().succeed(message);
                        redraw.run();
                        redirect_after(&state, CONFIG.redirect_config.after_recovery_ms, Route::Login);
                    }
                    Err(e) => {
                        status.borrow_mut().fail(&e);
                        redraw.run();
                    }
                }
            });
        })?;
    }

    append_child(&container, &form_el)?;
    Ok(container)
}
