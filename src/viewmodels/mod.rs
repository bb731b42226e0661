// ============================================================================
// VIEWMODELS - Lógica de UI + validación (las vistas solo renderizan)
// ============================================================================

pub mod capabilities;
pub mod session_viewmodel;
pub mod recovery_viewmodel;
pub mod account_viewmodel;
pub mod rbac_viewmodel;
pub mod pricing_viewmodel;
pub mod flight_viewmodel;
pub mod route_viewmodel;
pub mod seat_viewmodel;
pub mod airport_viewmodel;

pub use capabilities::Capabilities;
pub use session_viewmodel::{LoginForm, RegisterForm, SessionViewModel};
pub use recovery_viewmodel::{RecoveryForm, RecoveryViewModel, ResetForm, VerifyTokenForm};
pub use account_viewmodel::{PreferencesViewModel, ProfileForm, ProfileViewModel};
pub use rbac_viewmodel::{AssignRoleForm, RbacViewModel};
pub use pricing_viewmodel::{PricingForm, PricingViewModel};
pub use flight_viewmodel::{FlightForm, FlightViewModel};
pub use route_viewmodel::{RouteForm, RouteViewModel, SegmentForm};
pub use seat_viewmodel::{SeatEdit, SeatForm, SeatViewModel};
pub use airport_viewmodel::{AirportForm, AirportViewModel};
