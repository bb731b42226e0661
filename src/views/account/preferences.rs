// Preferencias: idioma, tema, notificaciones y zona horaria

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::{Preferences, Theme};
use crate::state::{AppState, FormStatus};
use crate::viewmodels::PreferencesViewModel;
use crate::views::shared::{
    button, checkbox_field, feedback, mount, page, run_then_redraw, select_field, submit_button,
    Redraw,
};

const LANGUAGES: &[(&str, &str)] = &[("es", "Español"), ("en", "English")];
const THEMES: &[(&str, &str)] = &[("light", "Claro"), ("dark", "Oscuro")];
const TIMEZONES: &[(&str, &str)] = &[
    ("America/Guayaquil", "Guayaquil (GMT-5)"),
    ("America/Bogota", "Bogotá (GMT-5)"),
    ("America/Lima", "Lima (GMT-5)"),
    ("America/Mexico_City", "Ciudad de México (GMT-6)"),
    ("Europe/Madrid", "Madrid (GMT+1)"),
    ("UTC", "UTC"),
];

pub fn render_preferences(_state: &AppState) -> Result<Element, JsValue> {
    let prefs = Rc::new(RefCell::new(Preferences::default()));
    let status = Rc::new(RefCell::new(FormStatus::default()));
    let vm = Rc::new(PreferencesViewModel::new());
    let redraw = Redraw::new();

    let container = page("preferences-page", "Preferencias")?;
    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;

    {
        let prefs = prefs.clone();
        let status = status.clone();
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| {
            render_preferences_form(&prefs, &status, &vm, redraw)
        });
    }

    run_then_redraw(&redraw, async move {
        match vm.load().await {
            Ok(loaded) => *prefs.borrow_mut() = loaded,
            Err(e) => status.borrow_mut().fail(&e),
        }
    });

    Ok(container)
}

fn render_preferences_form(
    prefs: &Rc<RefCell<Preferences>>,
    status: &Rc<RefCell<FormStatus>>,
    vm: &Rc<PreferencesViewModel>,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let values = prefs.borrow().clone();

    let language = {
        let prefs = prefs.clone();
        select_field("Idioma", LANGUAGES, &values.language, move |v| {
            prefs.borrow_mut().language = v
        })?
    };
    let theme = {
        let prefs = prefs.clone();
        select_field("Tema", THEMES, values.theme.as_str(), move |v| {
            prefs.borrow_mut().theme = Theme::from_value(&v)
        })?
    };
    let notifications = {
        let prefs = prefs.clone();
        checkbox_field(
            "Recibir notificaciones por correo",
            values.email_notifications,
            move |checked| prefs.borrow_mut().email_notifications = checked,
        )?
    };
    let timezone = {
        let prefs = prefs.clone();
        select_field("Zona horaria", TIMEZONES, &values.timezone, move |v| {
            prefs.borrow_mut().timezone = v
        })?
    };

    let reset = {
        let prefs = prefs.clone();
        let status = status.clone();
        let vm = vm.clone();
        let redraw = redraw.clone();
        button("Restaurar valores por defecto", "btn-secondary", move || {
            let prefs = prefs.clone();
            let status = status.clone();
            let vm = vm.clone();
            run_then_redraw(&redraw, async move {
                match vm.reset().await {
                    Ok(defaults) => {
                        *prefs.borrow_mut() = defaults;
                        status.borrow_mut().succeed("Preferencias restauradas.");
                    }
                    Err(e) => status.borrow_mut().fail(&e),
                }
            });
        })?
    };

    let current = status.borrow().clone();
    let form_el = ElementBuilder::new("form")?
        .class("preferences-form")
        .child(language)?
        .child(theme)?
        .child(notifications)?
        .child(timezone)?
        .child(feedback(current.error.as_deref(), current.message.as_deref())?)?
        .child(submit_button("Guardar", current.submitting)?)?
        .child(reset)?
        .build();

    {
        let prefs = prefs.clone();
        let status = status.clone();
        let vm = vm.clone();
        let redraw = redraw.clone();
        on_submit(&form_el, move || {
            let values = prefs.borrow().clone();
            status.borrow_mut().start();
            let status = status.clone();
            let vm = vm.clone();
            run_then_redraw(&redraw, async move {
                let result = vm.save(&values).await;
                status.borrow_mut().finish(&result, "Preferencias guardadas.");
            });
        })?;
    }

    Ok(form_el)
}
