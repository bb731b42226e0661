pub mod api_client;
pub mod graphql;
pub mod auth_service;
pub mod account_service;
pub mod rbac_service;
pub mod pricing_service;
pub mod flight_service;
pub mod route_service;
pub mod seat_service;
pub mod airport_service;

pub use api_client::ApiClient;
pub use graphql::GraphQlRequest;
