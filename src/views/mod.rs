pub mod app;
pub mod shared;
pub mod home;
pub mod auth;
pub mod account;
pub mod admin;
pub mod catalog;

pub use app::render_app;
