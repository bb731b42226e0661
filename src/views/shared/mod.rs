pub mod header;
pub mod widgets;

pub use header::{menu_entries, nav_link, render_header};
pub use widgets::*;
