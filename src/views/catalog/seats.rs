// ============================================================================
// SEAT AVAILABILITY VIEW - Asientos por vuelo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::Seat;
use crate::state::AppState;
use crate::viewmodels::{Capabilities, SeatViewModel};
use crate::views::catalog::{cell, row, sections, table, table_headers, Section};
use crate::views::shared::{
    button, checkbox_field, list_feedback, mount, page, run_then_redraw, submit_button,
    text_field, Redraw,
};

pub fn render_seat_availability(state: &AppState) -> Result<Element, JsValue> {
    let caps = Capabilities::for_session(&state.auth.status());
    let vm = SeatViewModel::new();
    let redraw = Redraw::new();

    let container = page("seats-page", "Disponibilidad de asientos")?;

    // Selector de vuelo fuera de la zona redibujada (conserva el foco)
    let flight_input = {
        let form = vm.form.clone();
        let value = form.borrow().flight_id.clone();
        text_field("ID de vuelo", "number", &value, move |v| form.borrow_mut().flight_id = v)?
    };
    let search = {
        let vm = vm.clone();
        let redraw = redraw.clone();
        button("Consultar", "btn-secondary", move || {
            let vm = vm.clone();
            run_then_redraw(&redraw, async move { vm.load().await });
        })?
    };
    let toolbar = ElementBuilder::new("div")?
        .class("toolbar")
        .child(flight_input)?
        .child(search)?
        .build();
    append_child(&container, &toolbar)?;

    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;
    {
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| render_seats_body(&vm, caps, redraw));
    }
    run_then_redraw(&redraw, async move { vm.load().await });

    Ok(container)
}

fn render_seats_body(
    vm: &SeatViewModel,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let list = vm.list.borrow().clone();
    let body = ElementBuilder::new("div")?.build();
    for section in sections(caps) {
        let element = match section {
            Section::Feedback => list_feedback(&list, "No hay asientos para este vuelo.")?,
            Section::CreateForm => render_create_form(vm, redraw)?,
            Section::Listing => {
                let headers = table_headers(&["Asiento", "Estado"], caps);
                let rows = list
                    .items
                    .iter()
                    .map(|seat| render_seat_row(vm, seat, caps, redraw))
                    .collect::<Result<Vec<_>, JsValue>>()?;
                table(&headers, rows)?
            }
        };
        append_child(&body, &element)?;
    }
    Ok(body)
}

fn render_seat_row(
    vm: &SeatViewModel,
    seat: &Seat,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let editing = vm
        .editing
        .borrow()
        .clone()
        .filter(|edit| edit.seat_id == seat.id);

    if let Some(edit) = editing.filter(|_| caps.manage_catalog) {
        let number = {
            let editing = vm.editing.clone();
            text_field("Asiento", "text", &edit.seat_number, move |v| {
                if let Some(edit) = editing.borrow_mut().as_mut() {
                    edit.seat_number = v;
                }
            })?
        };
        let available = {
            let editing = vm.editing.clone();
            checkbox_field("Disponible", edit.is_available, move |checked| {
                if let Some(edit) = editing.borrow_mut().as_mut() {
                    edit.is_available = checked;
                }
            })?
        };
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
        let actions = ElementBuilder::new("td")?.child(save)?.child(cancel)?.build();
        let number_cell = ElementBuilder::new("td")?.child(number)?.build();
        let available_cell = ElementBuilder::new("td")?.child(available)?.build();
        return row(vec![number_cell, available_cell, actions]);
    }

    let mut cells = vec![cell(&seat.seat_number)?, cell(seat.status_label())?];
    if caps.manage_catalog {
        let edit = {
            let vm = vm.clone();
            let seat = seat.clone();
            let redraw = redraw.clone();
            button("Editar", "btn-link", move || {
                vm.start_edit(&seat);
                redraw.run();
            })?
        };
        let delete = {
            let vm = vm.clone();
            let seat_id = seat.id;
            let redraw = redraw.clone();
            button("Eliminar", "btn-danger", move || {
                let vm = vm.clone();
                run_then_redraw(&redraw, async move { vm.delete(seat_id).await });
            })?
        };
        cells.push(ElementBuilder::new("td")?.child(edit)?.child(delete)?.build());
    }
    row(cells)
}

fn render_create_form(vm: &SeatViewModel, redraw: &Redraw) -> Result<Element, JsValue> {
    let values = vm.form.borrow().clone();
    let number = {
        let form = vm.form.clone();
        text_field("Número de asiento", "text", &values.seat_number, move |v| {
            form.borrow_mut().seat_number = v
        })?
    };
    let form_el = ElementBuilder::new("form")?
        .class("catalog-form")
        .child(
            ElementBuilder::new("h2")?
                .text(&format!("Nuevo asiento (vuelo {})", values.flight_id))
                .build(),
        )?
        .child(number)?
        .child(submit_button("Crear asiento", false)?)?
        .build();

    let vm = vm.clone();
    let redraw = redraw.clone();
    on_submit(&form_el, move || {
        let vm = vm.clone();
        run_then_redraw(&redraw, async move { vm.create().await });
    })?;
    Ok(form_el)
}
