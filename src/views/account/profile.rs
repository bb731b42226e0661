// ============================================================================
// PROFILE VIEW - Ver / crear / editar perfil
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::account_viewmodel::ProfileState;
use crate::viewmodels::{ProfileForm, ProfileViewModel};
use crate::views::shared::{
    button, feedback, mount, page, paragraph, run_then_redraw, submit_button, text_field,
    textarea_field, Redraw,
};

pub fn render_profile(_state: &AppState) -> Result<Element, JsValue> {
    let profile = Rc::new(RefCell::new(ProfileState::default()));
    let form = Rc::new(RefCell::new(ProfileForm::default()));
    let vm = Rc::new(ProfileViewModel::new());
    let redraw = Redraw::new();

    let container = page("profile-page", "Mi perfil")?;
    let body = ElementBuilder::new("div")?.class("profile-body").build();
    append_child(&container, &body)?;

    {
        let profile = profile.clone();
        let form = form.clone();
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| {
            render_profile_body(&profile, &form, &vm, redraw)
        });
    }

    {
        let profile = profile.clone();
        let form = form.clone();
        run_then_redraw(&redraw, async move {
            let result = vm.load().await;
            if let Ok(Some(loaded)) = &result {
                *form.borrow_mut() = ProfileForm::from_profile(loaded);
            }
            profile.borrow_mut().apply_fetch(result);
        });
    }

    Ok(container)
}

fn render_profile_body(
    profile: &Rc<RefCell<ProfileState>>,
    form: &Rc<RefCell<ProfileForm>>,
    vm: &Rc<ProfileViewModel>,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let current = profile.borrow().clone();
    let body = ElementBuilder::new("div")?
        .child(feedback(current.error.as_deref(), current.message.as_deref())?)?
        .build();

    if !current.loaded {
        append_child(&body, &paragraph("loading", "Cargando perfil...")?)?;
        return Ok(body);
    }

    if !current.editing {
        if let Some(p) = &current.profile {
            let card = ElementBuilder::new("div")?
                .class("profile-card")
                .child(paragraph("profile-name", p.name.as_deref().unwrap_or(""))?)?
                .child(paragraph("profile-bio", p.bio.as_deref().unwrap_or(""))?)?
                .child(paragraph("profile-phone", p.phone.as_deref().unwrap_or(""))?)?
                .build();
            append_child(&body, &card)?;
        }
        let edit = {
            let profile = profile.clone();
            let redraw = redraw.clone();
            button("Editar perfil", "btn-secondary", move || {
                profile.borrow_mut().editing = true;
                redraw.run();
            })?
        };
        append_child(&body, &edit)?;
        return Ok(body);
    }

    if !current.exists() {
        append_child(
            &body,
            &paragraph("hint", "Aún no tienes un perfil. Completa los datos para crearlo.")?,
        )?;
    }

    let values = form.borrow().clone();
    let name = {
        let form = form.clone();
        text_field("Nombre", "text", &values.name, move |v| form.borrow_mut().name = v)?
    };
    let bio = {
        let form = form.clone();
        textarea_field("Biografía", &values.bio, move |v| form.borrow_mut().bio = v)?
    };
    let phone = {
        let form = form.clone();
        text_field("Teléfono", "tel", &values.phone, move |v| form.borrow_mut().phone = v)?
    };
    let label = if current.exists() { "Guardar cambios" } else { "Crear perfil" };
    let form_el = ElementBuilder::new("form")?
        .class("profile-form")
        .child(name)?
        .child(bio)?
        .child(phone)?
        .child(submit_button(label, false)?)?
        .build();

    {
        let profile = profile.clone();
        let form = form.clone();
        let vm = vm.clone();
        let redraw = redraw.clone();
        on_submit(&form_el, move || {
            let exists = profile.borrow().exists();
            let values = form.borrow().clone();
            let profile = profile.clone();
            let vm = vm.clone();
            run_then_redraw(&redraw, async move {
                let result = vm.save(&values, exists).await;
                profile.borrow_mut().apply_save(result);
            });
        })?;
    }
    append_child(&body, &form_el)?;
    Ok(body)
}
