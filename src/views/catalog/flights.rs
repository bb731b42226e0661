// Catálogo de vuelos

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{Capabilities, FlightViewModel};
use crate::views::catalog::{cell, row, sections, table, Section};
use crate::views::shared::{
    list_feedback, mount, page, run_then_redraw, submit_button, text_field, Redraw,
};

pub fn render_flight_catalog(state: &AppState) -> Result<Element, JsValue> {
    let caps = Capabilities::for_session(&state.auth.status());
    let vm = FlightViewModel::new();
    let redraw = Redraw::new();

    let container = page("flights-page", "Catálogo de vuelos")?;
    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;

    {
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| render_flights_body(&vm, caps, redraw));
    }
    run_then_redraw(&redraw, async move { vm.load().await });

    Ok(container)
}

fn render_flights_body(
    vm: &FlightViewModel,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let list = vm.list.borrow().clone();
    let body = ElementBuilder::new("div")?.build();
    for section in sections(caps) {
        let element = match section {
            Section::Feedback => list_feedback(&list, "No hay vuelos registrados.")?,
            Section::CreateForm => render_create_form(vm, redraw)?,
            Section::Listing => {
                let rows = list
                    .items
                    .iter()
                    .map(|f| {
                        row(vec![
                            cell(&f.code)?,
                            cell(&f.origin)?,
                            cell(&f.destination)?,
                            cell(&f.departure_label())?,
                        ])
                    })
                    .collect::<Result<Vec<_>, JsValue>>()?;
                table(&["Código", "Origen", "Destino", "Salida"], rows)?
            }
        };
        append_child(&body, &element)?;
    }
    Ok(body)
}

fn render_create_form(vm: &FlightViewModel, redraw: &Redraw) -> Result<Element, JsValue> {
    let values = vm.form.borrow().clone();
    let fields = [
        ("Código", "text", values.code),
        ("Origen", "text", values.origin),
        ("Destino", "text", values.destination),
        ("Hora de salida", "datetime-local", values.departure_time),
    ];

    let form_el = ElementBuilder::new("form")?
        .class("catalog-form")
        .child(ElementBuilder::new("h2")?.text("Nuevo vuelo").build())?
        .build();
    for (index, (label, input_type, value)) in fields.into_iter().enumerate() {
        let form = vm.form.clone();
        let field = text_field(label, input_type, &value, move |v| {
            let mut form = form.borrow_mut();
            match index {
                0 => form.code = v,
                1 => form.origin = v,
                2 => form.destination = v,
                _ => form.departure_time = v,
            }
        })?;
        append_child(&form_el, &field)?;
    }
    append_child(&form_el, &submit_button("Crear vuelo", false)?)?;

    let vm = vm.clone();
    let redraw = redraw.clone();
    on_submit(&form_el, move || {
        let vm = vm.clone();
        run_then_redraw(&redraw, async move { vm.create().await });
    })?;
    Ok(form_el)
}
