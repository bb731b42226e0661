// ============================================================================
// ROUTER - Rutas de la app + guard de sesión
// ============================================================================
// Navegación con History API (pushState/popstate). El guard decide si una
// vista se muestra o si hay que redirigir a login / unauthorized.
// ============================================================================

use wasm_bindgen::JsValue;

use crate::models::ADMIN_ROLE;
use crate::state::SessionStatus;

const ADMIN_ONLY: &[&str] = &[ADMIN_ROLE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    PasswordRecovery,
    VerifyToken,
    ResetPassword { token: Option<String> },
    Unauthorized,
    Dashboard,
    Account,
    Profile,
    Preferences,
    PricingRules,
    FlightCatalog,
    RoutesCatalog,
    SeatAvailability,
    AirportInfo,
    Admin,
    AdminRbac,
    NotFound { path: String },
}

/// Requisito de acceso de una vista
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    /// Allow-list de roles; vacía equivale a `Authenticated`
    Roles(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl Route {
    /// Parsear `pathname` + `search` tal como vienen de `window.location`
    pub fn from_parts(path: &str, search: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        match normalized {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/password-recovery" => Route::PasswordRecovery,
            "/password-recovery/verify-token" => Route::VerifyToken,
            "/password-recovery/reset" => Route::ResetPassword {
                token: query_param(search, "token"),
            },
            "/unauthorized" => Route::Unauthorized,
            "/dashboard" => Route::Dashboard,
            "/account" => Route::Account,
            "/profile" => Route::Profile,
            "/preferences" => Route::Preferences,
            "/pricing-rules" | "/PricingRules" => Route::PricingRules,
            "/flight-catalog" => Route::FlightCatalog,
            "/routes-catalog" => Route::RoutesCatalog,
            "/seat-availability" => Route::SeatAvailability,
            "/airport-info" => Route::AirportInfo,
            "/admin" => Route::Admin,
            "/admin/rbac" => Route::AdminRbac,
            other => Route::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// URL de la ruta (con query si aplica)
    pub fn to_url(&self) -> String {
        match self {
            Route::ResetPassword { token: Some(token) } => format!(
                "/password-recovery/reset?token={}",
                String::from(js_sys::encode_uri_component(token))
            ),
            Route::NotFound { path } => path.clone(),
            other => other.path().to_string(),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::PasswordRecovery => "/password-recovery",
            Route::VerifyToken => "/password-recovery/verify-token",
            Route::ResetPassword { .. } => "/password-recovery/reset",
            Route::Unauthorized => "/unauthorized",
            Route::Dashboard => "/dashboard",
            Route::Account => "/account",
            Route::Profile => "/profile",
            Route::Preferences => "/preferences",
            Route::PricingRules => "/pricing-rules",
            Route::FlightCatalog => "/flight-catalog",
            Route::RoutesCatalog => "/routes-catalog",
            Route::SeatAvailability => "/seat-availability",
            Route::AirportInfo => "/airport-info",
            Route::Admin => "/admin",
            Route::AdminRbac => "/admin/rbac",
            Route::NotFound { .. } => "/404",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Home
            | Route::Login
            | Route::Register
            | Route::PasswordRecovery
            | Route::VerifyToken
            | Route::ResetPassword { .. }
            | Route::Unauthorized
            | Route::NotFound { .. } => Access::Public,
            Route::Dashboard
            | Route::Account
            | Route::Profile
            | Route::Preferences
            | Route::PricingRules
            | Route::FlightCatalog
            | Route::RoutesCatalog
            | Route::SeatAvailability
            | Route::AirportInfo => Access::Authenticated,
            Route::Admin | Route::AdminRbac => Access::Roles(ADMIN_ONLY),
        }
    }
}

/// Guard de sesión: (a) sesión activa, (b) rol en la allow-list
pub fn check_access(access: Access, status: &SessionStatus) -> GuardDecision {
    let claims = match (access, status.claims()) {
        (Access::Public, _) => return GuardDecision::Allow,
        (_, None) => return GuardDecision::RedirectToLogin,
        (_, Some(claims)) => claims,
    };

    match access {
        Access::Roles(allowed) if !allowed.is_empty() && !allowed.contains(&claims.role()) => {
            GuardDecision::RedirectToUnauthorized
        }
        _ => GuardDecision::Allow,
    }
}

/// Primero separa pares, después decodifica cada valor (`%26` no parte el valor)
fn query_param(search: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

// ----------------------------------------------------------------------------
// History API
// ----------------------------------------------------------------------------

/// Ruta actual según `window.location`
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Route::from_parts(&path, &search)
}

pub fn push_history(route: &Route) -> Result<(), JsValue> {
    let history = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(&route.to_url()))
}

pub fn replace_history(route: &Route) -> Result<(), JsValue> {
    let history = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    history.replace_state_with_url(&JsValue::NULL, "", Some(&route.to_url()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::decode_claims;
    use crate::utils::token::test_tokens::token_for_role;

    fn session(role: &str) -> SessionStatus {
        let token = token_for_role(role);
        let claims = decode_claims(&token).unwrap();
        SessionStatus::Authenticated { token, claims }
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_parts("/", ""), Route::Home);
        assert_eq!(Route::from_parts("", ""), Route::Home);
        assert_eq!(Route::from_parts("/admin/rbac/", ""), Route::AdminRbac);
        assert_eq!(Route::from_parts("/PricingRules", ""), Route::PricingRules);
        assert_eq!(
            Route::from_parts("/nada", ""),
            Route::NotFound { path: "/nada".into() }
        );
    }

    #[test]
    fn reset_route_reads_token_query() {
        assert_eq!(
            Route::from_parts("/password-recovery/reset", "?token=abc&x=1"),
            Route::ResetPassword { token: Some("abc".into()) }
        );
        assert_eq!(
            Route::from_parts("/password-recovery/reset", "?token="),
            Route::ResetPassword { token: None }
        );
    }

    #[test]
    fn reset_token_keeps_encoded_separators() {
        assert_eq!(
            Route::from_parts("/password-recovery/reset", "?token=a%26b%3Dc&x=1"),
            Route::ResetPassword { token: Some("a&b=c".into()) }
        );
        assert_eq!(
            Route::from_parts("/password-recovery/reset", "?x=1&token=f47ac10b%2D58cc"),
            Route::ResetPassword { token: Some("f47ac10b-58cc".into()) }
        );
    }

    #[test]
    fn paths_round_trip_for_static_routes() {
        for route in [
            Route::Login,
            Route::Dashboard,
            Route::PricingRules,
            Route::SeatAvailability,
            Route::AdminRbac,
        ] {
            assert_eq!(Route::from_parts(route.path(), ""), route);
        }
    }

    #[test]
    fn protected_view_without_session_redirects_to_login() {
        let anon = SessionStatus::Unauthenticated;
        assert_eq!(
            check_access(Route::Dashboard.access(), &anon),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            check_access(Route::AdminRbac.access(), &anon),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(check_access(Route::Home.access(), &anon), GuardDecision::Allow);
    }

    #[test]
    fn disallowed_role_redirects_to_unauthorized() {
        assert_eq!(
            check_access(Route::Admin.access(), &session("user")),
            GuardDecision::RedirectToUnauthorized
        );
        assert_eq!(
            check_access(Route::Admin.access(), &session("admin")),
            GuardDecision::Allow
        );
        assert_eq!(
            check_access(Route::PricingRules.access(), &session("user")),
            GuardDecision::Allow
        );
    }

    #[test]
    fn empty_allow_list_only_needs_a_session() {
        assert_eq!(
            check_access(Access::Roles(&[]), &session("cualquiera")),
            GuardDecision::Allow
        );
        assert_eq!(
            check_access(Access::Roles(&[]), &SessionStatus::Unauthenticated),
            GuardDecision::RedirectToLogin
        );
    }
}
