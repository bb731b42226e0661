// Vistas de catálogo: listado para todos, controles de gestión solo para admin

mod pricing;
mod flights;
mod routes;
mod seats;
mod airports;

pub use pricing::render_pricing_rules;
pub use flights::render_flight_catalog;
pub use routes::render_routes_catalog;
pub use seats::render_seat_availability;
pub use airports::render_airport_info;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::viewmodels::Capabilities;

/// Bloques de una página de catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Feedback,
    CreateForm,
    Listing,
}

/// Qué bloques se muestran y en qué orden; el formulario solo con permisos de gestión
pub fn sections(caps: Capabilities) -> Vec<Section> {
    let mut sections = vec![Section::Feedback];
    if caps.manage_catalog {
        sections.push(Section::CreateForm);
    }
    sections.push(Section::Listing);
    sections
}

/// Columnas de la tabla, con "Acciones" si la fila tiene botones
pub fn table_headers<'a>(columns: &[&'a str], caps: Capabilities) -> Vec<&'a str> {
    let mut headers = columns.to_vec();
    if caps.manage_catalog {
        headers.push("Acciones");
    }
    headers
}

/// Tabla simple: encabezados + filas ya renderizadas
fn table(headers: &[&str], rows: Vec<Element>) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?;
    let head_row = headers.iter().try_fold(head_row, |row, h| {
        row.child(ElementBuilder::new("th")?.text(h).build())
    })?;
    let thead = ElementBuilder::new("thead")?.child(head_row.build())?.build();
    let tbody = ElementBuilder::new("tbody")?.children(rows)?.build();
    Ok(ElementBuilder::new("table")?
        .class("catalog-table")
        .child(thead)?
        .child(tbody)?
        .build())
}

fn cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

fn row(cells: Vec<Element>) -> Result<Element, JsValue> {
    ElementBuilder::new("tr")?.children(cells).map(ElementBuilder::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionStatus;
    use crate::utils::decode_claims;
    use crate::utils::token::test_tokens::token_for_role;

    fn caps_for(role: &str) -> Capabilities {
        let token = token_for_role(role);
        let claims = decode_claims(&token).unwrap();
        Capabilities::for_session(&SessionStatus::Authenticated { token, claims })
    }

    #[test]
    fn admin_gets_the_create_form_between_feedback_and_list() {
        assert_eq!(
            sections(caps_for("admin")),
            vec![Section::Feedback, Section::CreateForm, Section::Listing]
        );
    }

    #[test]
    fn regular_user_only_sees_the_list() {
        assert_eq!(sections(caps_for("user")), vec![Section::Feedback, Section::Listing]);
        assert!(!sections(Capabilities::default()).contains(&Section::CreateForm));
    }

    #[test]
    fn action_column_only_for_admins() {
        assert_eq!(
            table_headers(&["Asiento", "Estado"], caps_for("admin")),
            vec!["Asiento", "Estado", "Acciones"]
        );
        assert_eq!(
            table_headers(&["Asiento", "Estado"], caps_for("user")),
            vec!["Asiento", "Estado"]
        );
    }
}
