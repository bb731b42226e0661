// Información de aeropuertos

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::Airport;
use crate::state::AppState;
use crate::viewmodels::{AirportForm, AirportViewModel, Capabilities};
use crate::views::catalog::{cell, row, sections, table, table_headers, Section};
use crate::views::shared::{
    button, list_feedback, mount, page, run_then_redraw, submit_button, text_field, Redraw,
};

pub fn render_airport_info(state: &AppState) -> Result<Element, JsValue> {
    let caps = Capabilities::for_session(&state.auth.status());
    let vm = AirportViewModel::new();
    let redraw = Redraw::new();

    let container = page("airports-page", "Aeropuertos")?;
    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;

    {
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| render_airports_body(&vm, caps, redraw));
    }
    run_then_redraw(&redraw, async move { vm.load().await });

    Ok(container)
}

/// Inputs nombre / ciudad / país / IATA sobre un formulario compartido
fn airport_fields<F>(values: &AirportForm, update: F) -> Result<Vec<Element>, JsValue>
where
    F: Fn(usize, String) + Clone + 'static,
{
    let fields = [
        ("Nombre", values.name.as_str()),
        ("Ciudad", values.city.as_str()),
        ("País", values.country.as_str()),
        ("Código IATA", values.iata_code.as_str()),
    ];
    fields
        .into_iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let update = update.clone();
            text_field(label, "text", value, move |v| update(index, v))
        })
        .collect()
}

fn set_field(form: &mut AirportForm, index: usize, value: String) {
    match index {
        0 => form.name = value,
        1 => form.city = value,
        2 => form.country = value,
        _ => form.iata_code = value,
    }
}

fn render_airports_body(
    vm: &AirportViewModel,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let list = vm.list.borrow().clone();
    let body = ElementBuilder::new("div")?.build();
    for section in sections(caps) {
        let element = match section {
            Section::Feedback => list_feedback(&list, "No hay aeropuertos registrados.")?,
            Section::CreateForm => render_create_form(vm, redraw)?,
            Section::Listing => {
                let headers = table_headers(&["Nombre", "Ubicación"], caps);
                let rows = list
                    .items
                    .iter()
                    .map(|airport| render_airport_row(vm, airport, caps, redraw))
                    .collect::<Result<Vec<_>, JsValue>>()?;
                table(&headers, rows)?
            }
        };
        append_child(&body, &element)?;
    }
    Ok(body)
}

fn render_airport_row(
    vm: &AirportViewModel,
    airport: &Airport,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let editing = vm
        .editing
        .borrow()
        .clone()
        .filter(|(id, _)| *id == airport.id && caps.manage_catalog);

    if let Some((_, values)) = editing {
        let editing_cell = vm.editing.clone();
        let inputs = airport_fields(&values, move |index, v| {
            if let Some((_, form)) = editing_cell.borrow_mut().as_mut() {
                set_field(form, index, v);
            }
        })?;
        let save = {
            let vm = vm.clone();
            let redraw = redraw.clone();
            button("Guardar", "btn-primary", move || {
                let vm = vm.clone();
                run_then_redraw(&redraw, async move { vm.save_edit().await });
            })?
        };
        let cancel = {
            let vm = vm.clone();
            let redraw = redraw.clone();
            button("Cancelar", "btn-link", move || {
                vm.cancel_edit();
                redraw.run();
            })?
        };
        let fields_cell = ElementBuilder::new("td")?
            .attr("colspan", "2")?
            .children(inputs)?
            .build();
        let actions = ElementBuilder::new("td")?.child(save)?.child(cancel)?.build();
        return row(vec![fields_cell, actions]);
    }

    let mut cells = vec![cell(&airport.name)?, cell(&airport.summary())?];
    if caps.manage_catalog {
        let edit = {
            let vm = vm.clone();
            let airport = airport.clone();
            let redraw = redraw.clone();
            button("Editar", "btn-link", move || {
                vm.start_edit(&airport);
                redraw.run();
            })?
        };
        let delete = {
            let vm = vm.clone();
            let id = airport.id;
            let redraw = redraw.clone();
            button("Eliminar", "btn-danger", move || {
                let vm = vm.clone();
                run_then_redraw(&redraw, async move { vm.delete(id).await });
            })?
        };
        cells.push(ElementBuilder::new("td")?.child(edit)?.child(delete)?.build());
    }
    row(cells)
}

fn render_create_form(vm: &AirportViewModel, redraw: &Redraw) -> Result<Element, JsValue> {
    let values = vm.form.borrow().clone();
    let form: Rc<RefCell<AirportForm>> = vm.form.clone();
    let inputs = airport_fields(&values, move |index, v| set_field(&mut form.borrow_mut(), index, v))?;

    let form_el = ElementBuilder::new("form")?
        .class("catalog-form")
        .child(ElementBuilder::new("h2")?.text("Nuevo aeropuerto").build())?
        .children(inputs)?
        .child(submit_button("Crear aeropuerto", false)?)?
        .build();

    let vm = vm.clone();
    let redraw = redraw.clone();
    on_submit(&form_el, move || {
        let vm = vm.clone();
        run_then_redraw(&redraw, async move { vm.create().await });
    })?;
    Ok(form_el)
}
