// Catálogo de rutas con tramos

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::FlightRoute;
use crate::state::AppState;
use crate::viewmodels::{Capabilities, RouteViewModel};
use crate::views::catalog::{sections, Section};
use crate::views::shared::{
    button, list_feedback, mount, page, run_then_redraw, submit_button, text_field, Redraw,
};

pub fn render_routes_catalog(state: &AppState) -> Result<Element, JsValue> {
    let caps = Capabilities::for_session(&state.auth.status());
    let vm = RouteViewModel::new();
    let redraw = Redraw::new();

    let container = page("routes-page", "Catálogo de rutas")?;
    let body = ElementBuilder::new("div")?.build();
    append_child(&container, &body)?;

    {
        let vm = vm.clone();
        mount(&body, &redraw, move |redraw| render_routes_body(&vm, caps, redraw));
    }
    run_then_redraw(&redraw, async move { vm.load().await });

    Ok(container)
}

fn render_routes_body(
    vm: &RouteViewModel,
    caps: Capabilities,
    redraw: &Redraw,
) -> Result<Element, JsValue> {
    let list = vm.list.borrow().clone();
    let body = ElementBuilder::new("div")?.build();
    for section in sections(caps) {
        let element = match section {
            Section::Feedback => list_feedback(&list, "No hay rutas registradas.")?,
            Section::CreateForm => render_create_form(vm, redraw)?,
            Section::Listing => {
                let cards = ElementBuilder::new("div")?.class("route-list").build();
                for route in &list.items {
                    append_child(&cards, &render_route_card(route)?)?;
                }
                cards
            }
        };
        append_child(&body, &element)?;
    }
    Ok(body)
}

fn render_route_card(route: &FlightRoute) -> Result<Element, JsValue> {
    let segments = ElementBuilder::new("ol")?.class("segments").build();
    for s in &route.segments {
        let item = ElementBuilder::new("li")?
            .text(&format!("{} → {} ({} km)", s.origin, s.destination, s.distance_km))
            .build();
        append_child(&segments, &item)?;
    }
    Ok(ElementBuilder::new("article")?
        .class("route-card")
        .child(ElementBuilder::new("h3")?.text(&route.name).build())?
        .child(segments)?
        .child(
            ElementBuilder::new("p")?
                .class("total")
                .text(&format!("Distancia total: {} km", route.total_distance_km()))
                .build(),
        )?
        .build())
}

fn render_create_form(vm: &RouteViewModel, redraw: &Redraw) -> Result<Element, JsValue> {
    let values = vm.form.borrow().clone();

    let name = {
        let form = vm.form.clone();
        text_field("Nombre de la ruta", "text", &values.name, move |v| form.borrow_mut().name = v)?
    };
    let form_el = ElementBuilder::new("form")?
        .class("catalog-form")
        .child(ElementBuilder::new("h2")?.text("Nueva ruta").build())?
        .child(name)?
        .build();

    for (index, segment) in values.segments.iter().enumerate() {
        let fieldset = ElementBuilder::new("fieldset")?
            .class("segment-fields")
            .child(ElementBuilder::new("legend")?.text(&format!("Tramo {}", index + 1)).build())?
            .build();

        let inputs = [
            ("Origen", "text", &segment.origin),
            ("Destino", "text", &segment.destination),
            ("Distancia (km)", "number", &segment.distance_km),
        ];
        for (field, (label, input_type, value)) in inputs.into_iter().enumerate() {
            let form = vm.form.clone();
            let input = text_field(label, input_type, value, move |v| {
                let mut form = form.borrow_mut();
                if let Some(segment) = form.segments.get_mut(index) {
                    match field {
                        0 => segment.origin = v,
                        1 => segment.destination = v,
                        _ => segment.distance_km = v,
                    }
                }
            })?;
            append_child(&fieldset, &input)?;
        }

        if values.segments.len() > 1 {
            let form = vm.form.clone();
            let redraw = redraw.clone();
            let remove = button("Quitar tramo", "btn-link", move || {
                form.borrow_mut().remove_segment(index);
                redraw.run();
            })?;
            append_child(&fieldset, &remove)?;
        }
        append_child(&form_el, &fieldset)?;
    }

    let add = {
        let form = vm.form.clone();
        let redraw = redraw.clone();
        button("Agregar tramo", "btn-secondary", move || {
            form.borrow_mut().add_segment();
            redraw.run();
        })?
    };
    append_child(&form_el, &add)?;
    append_child(&form_el, &submit_button("Crear ruta", false)?)?;

    let vm = vm.clone();
    let redraw = redraw.clone();
    on_submit(&form_el, move || {
        let vm = vm.clone();
        run_then_redraw(&redraw, async move { vm.create().await });
    })?;
    Ok(form_el)
}
