mod panel;
mod rbac;

pub use panel::render_admin_panel;
pub use rbac::render_rbac;
