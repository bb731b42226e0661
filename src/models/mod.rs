pub mod auth;
pub mod claims;
pub mod pricing;
pub mod flight;
pub mod air_route;
pub mod seat;
pub mod airport;
pub mod account;
pub mod rbac;
pub mod ids;

pub use auth::*;
pub use claims::{Claims, ADMIN_ROLE};
pub use pricing::PricingRule;
pub use flight::Flight;
pub use air_route::{FlightRoute, Segment};
pub use seat::Seat;
pub use airport::Airport;
pub use account::{Profile, Preferences, Theme};
pub use rbac::{RoleDefinition, AssignRoleRequest};
