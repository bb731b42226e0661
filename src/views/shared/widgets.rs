// ============================================================================
// WIDGETS - Piezas de formulario y feedback reutilizadas por las vistas
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    on_change, on_click, on_input, on_toggle, replace_children, set_element_checked,
    set_element_value, ElementBuilder,
};
use crate::state::ListState;

type Slot = RefCell<Option<Rc<dyn Fn()>>>;

/// Re-render local de una sección (sin tocar el resto de la app)
#[derive(Clone, Default)]
pub struct Redraw(Rc<Slot>);

impl Redraw {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self) {
        let callback = self.0.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Guarda `render` como re-render de la sección.
    /// El closure solo guarda un `Weak`: la sección vive mientras algún
    /// listener o tarea tenga un `Redraw`.
    pub fn install<F>(&self, render: F)
    where
        F: Fn(&Redraw) + 'static,
    {
        let handle: Weak<Slot> = Rc::downgrade(&self.0);
        let callback: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(slot) = handle.upgrade() {
                render(&Redraw(slot));
            }
        });
        *self.0.borrow_mut() = Some(callback);
    }

    #[cfg(test)]
    fn downgrade(&self) -> Weak<Slot> {
        Rc::downgrade(&self.0)
    }
}

/// Monta `render` dentro de `container` y lo vuelve a ejecutar en cada `redraw.run()`
pub fn mount<F>(container: &Element, redraw: &Redraw, render: F)
where
    F: Fn(&Redraw) -> Result<Element, JsValue> + 'static,
{
    let target = container.clone();
    redraw.install(move |handle| match render(handle) {
        Ok(content) => {
            if let Err(e) = replace_children(&target, &content) {
                log::error!("❌ [VIEW] Error montando sección: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ [VIEW] Error renderizando sección: {:?}", e),
    });
    redraw.run();
}

/// Ejecuta una tarea async y redibuja al terminar
pub fn run_then_redraw<F>(redraw: &Redraw, task: F)
where
    F: Future<Output = ()> + 'static,
{
    let redraw = redraw.clone();
    spawn_local(async move {
        task.await;
        redraw.run();
    });
}

/// Contenedor de página con título
pub fn page(class: &str, title: &str) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h1")?.text(title).build();
    Ok(ElementBuilder::new("section")?
        .class(&format!("page {}", class))
        .child(heading)?
        .build())
}

pub fn paragraph(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class(class).text(text).build())
}

/// Label + input; cada tecla actualiza el valor vía `on_value`
pub fn text_field<F>(
    label: &str,
    input_type: &str,
    value: &str,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("placeholder", label)?
        .build();
    set_element_value(&input, value);
    on_input(&input, on_value)?;
    labeled(label, input)
}

pub fn textarea_field<F>(label: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let area = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("placeholder", label)?
        .build();
    set_element_value(&area, value);
    on_input(&area, on_value)?;
    labeled(label, area)
}

/// Select con opciones (valor, texto)
pub fn select_field<F>(
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let select = ElementBuilder::new("select")?.class("form-input").build();
    for (value, text) in options {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(text)
            .build();
        crate::dom::append_child(&select, &option)?;
    }
    set_element_value(&select, selected);
    on_change(&select, on_value)?;
    labeled(label, select)
}

pub fn checkbox_field<F>(label: &str, checked: bool, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(bool) + 'static,
{
    let input = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .build();
    set_element_checked(&input, checked);
    on_toggle(&input, on_value)?;
    let text = ElementBuilder::new("span")?.text(label).build();
    Ok(ElementBuilder::new("label")?
        .class("form-check")
        .child(input)?
        .child(text)?
        .build())
}

fn labeled(label: &str, control: Element) -> Result<Element, JsValue> {
    let caption = ElementBuilder::new("label")?.text(label).build();
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(caption)?
        .child(control)?
        .build())
}

pub fn button<F>(label: &str, class: &str, mut on_press: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    let btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(label)
        .build();
    on_click(&btn, move |_| on_press())?;
    Ok(btn)
}

pub fn submit_button(label: &str, disabled: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .flag("disabled", disabled)?
        .text(label)
        .build())
}

/// Error en rojo / mensaje de éxito en verde (si existen)
pub fn feedback(error: Option<&str>, message: Option<&str>) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("feedback").build();
    if let Some(error) = error {
        crate::dom::append_child(&container, &paragraph("error-message", error)?)?;
    }
    if let Some(message) = message {
        crate::dom::append_child(&container, &paragraph("success-message", message)?)?;
    }
    Ok(container)
}

/// Feedback de un listado: cargando, error, mensaje o lista vacía
pub fn list_feedback<T>(state: &ListState<T>, empty_text: &str) -> Result<Element, JsValue> {
    let container = feedback(state.error.as_deref(), state.message.as_deref())?;
    if state.loading {
        crate::dom::append_child(&container, &paragraph("loading", "Cargando...")?)?;
    } else if state.loaded_once && state.is_empty() {
        crate::dom::append_child(&container, &paragraph("empty", empty_text)?)?;
    }
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn run_invokes_the_installed_render() {
        let redraw = Redraw::new();
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            redraw.install(move |_| renders.set(renders.get() + 1));
        }
        redraw.run();
        redraw.run();
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn installed_render_does_not_keep_the_section_alive() {
        let redraw = Redraw::new();
        let state = Rc::new(Cell::new(0));
        {
            let state = state.clone();
            redraw.install(move |handle| {
                // Los listeners de la sección guardan clones del handle
                let _listener = handle.clone();
                state.set(state.get() + 1);
            });
        }
        redraw.run();

        let slot = redraw.downgrade();
        drop(redraw);
        assert!(slot.upgrade().is_none());
        assert_eq!(Rc::strong_count(&state), 1);
    }

    #[test]
    fn run_without_render_is_a_no_op() {
        Redraw::new().run();
    }
}
