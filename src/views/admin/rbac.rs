// ============================================================================
// RBAC VIEW - Roles disponibles + asignación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::RbacViewModel;
use crate::views::shared::{
    list_feedback, mount, page, run_then_redraw, select_field, submit_button, text_field, Redraw,
};

pub fn render_rbac(_state: &AppState) -> Result<Element, JsValue> {
    let vm = RbacViewModel::new();
    let redraw = Redraw::new();

    let container = page("rbac-page", "Panel RBAC")?;
    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;

    {
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| render_rbac_body(&vm, redraw));
    }
    run_then_redraw(&redraw, async move { vm.load().await });

    Ok(container)
}

fn render_rbac_body(vm: &RbacViewModel, redraw: &Redraw) -> Result<Element, JsValue> {
    let roles = vm.roles.borrow().clone();
    let body = ElementBuilder::new("div")?
        .child(list_feedback(&roles, "No hay roles definidos.")?)?
        .build();

    let table = ElementBuilder::new("ul")?.class("role-list").build();
    for role in &roles.items {
        let permissions = if role.permissions.is_empty() {
            "sin permisos".to_string()
        } else {
            role.permissions_label()
        };
        let item = ElementBuilder::new("li")?
            .child(ElementBuilder::new("strong")?.text(&role.name).build())?
            .child(ElementBuilder::new("span")?.class("permissions").text(&permissions).build())?
            .build();
        append_child(&table, &item)?;
    }
    append_child(&body, &table)?;

    // Formulario de asignación
    let values = vm.form.borrow().clone();
    let user_id = {
        let form = vm.form.clone();
        text_field("ID de usuario", "text", &values.user_id, move |v| form.borrow_mut().user_id = v)?
    };
    let mut options: Vec<(&str, &str)> = vec![("", "Selecciona un rol")];
    options.extend(roles.items.iter().map(|r| (r.name.as_str(), r.name.as_str())));
    let role = {
        let form = vm.form.clone();
        select_field("Rol", &options, &values.role, move |v| form.borrow_mut().role = v)?
    };

    let form_el = ElementBuilder::new("form")?
        .class("assign-role-form")
        .child(ElementBuilder::new("h2")?.text("Asignar rol").build())?
        .child(user_id)?
        .child(role)?
        .child(submit_button("Asignar", false)?)?
        .build();
    {
        let vm = vm.clone();
        let redraw = redraw.clone();
        on_submit(&form_el, move || {
            let vm = vm.clone();
            run_then_redraw(&redraw, async move { vm.assign().await });
        })?;
    }
    append_child(&body, &form_el)?;
    Ok(body)
}
