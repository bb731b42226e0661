// ============================================================================
// PRICING RULES VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{Capabilities, PricingViewModel};
use crate::views::catalog::{cell, row, sections, table, Section};
use crate::views::shared::{
    list_feedback, mount, page, run_then_redraw, submit_button, text_field, Redraw,
};

pub fn render_pricing_rules(state: &AppState) -> Result<Element, JsValue> {
    let caps = Capabilities::for_session(&state.auth.status());
    let vm = PricingViewModel::new();
    let redraw = Redraw::new();

    let container = page("pricing-page", "Reglas de precios")?;
    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;

    {
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| render_pricing_body(&vm, caps, redraw));
    }
    run_then_redraw(&redraw, async move { vm.load().await });

    Ok(container)
}

fn render_pricing_body(
    vm: &PricingViewModel,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let list = vm.list.borrow().clone();
    let body = ElementBuilder::new("div")?.build();
    for section in sections(caps) {
        let element = match section {
            Section::Feedback => list_feedback(&list, "No hay reglas de precios.")?,
            Section::CreateForm => render_create_form(vm, redraw)?,
            Section::Listing => {
                let rows = list
                    .items
                    .iter()
                    .map(|rule| {
                        row(vec![
                            cell(&rule.rule_name)?,
                            cell(&format!("{:.2}", rule.base_price))?,
                            cell(&format!("x{}", rule.multiplier))?,
                            cell(&rule.formatted_price())?,
                        ])
                    })
                    .collect::<Result<Vec<_>, JsValue>>()?;
                table(&["Regla", "Precio base", "Multiplicador", "Precio final"], rows)?
            }
        };
        append_child(&body, &element)?;
    }
    Ok(body)
}

fn render_create_form(vm: &PricingViewModel, redraw: &Redraw) -> Result<Element, JsValue> {
    let values = vm.form.borrow().clone();
    let name = {
        let form = vm.form.clone();
        text_field("Nombre de la regla", "text", &values.rule_name, move |v| {
            form.borrow_mut().rule_name = v
        })?
    };
    let base = {
        let form = vm.form.clone();
        text_field("Precio base", "number", &values.base_price, move |v| {
            form.borrow_mut().base_price = v
        })?
    };
    let multiplier = {
        let form = vm.form.clone();
        text_field("Multiplicador", "number", &values.multiplier, move |v| {
            form.borrow_mut().multiplier = v
        })?
    };

    let form_el = ElementBuilder::new("form")?
        .class("catalog-form")
        .child(ElementBuilder::new("h2")?.text("Nueva regla").build())?
        .child(name)?
        .child(base)?
        .child(multiplier)?
        .child(submit_button("Crear regla", false)?)?
        .build();

    let vm = vm.clone();
    let redraw = redraw.clone();
    on_submit(&form_el, move || {
        let vm = vm.clone();
        run_then_redraw(&redraw, async move { vm.create().await });
    })?;
    Ok(form_el)
}
