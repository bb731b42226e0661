// Qué controles ve cada sesión

use crate::state::SessionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Formularios de alta/edición/borrado en los catálogos
    pub manage_catalog: bool,
    /// Enlace "Panel RBAC" y vistas /admin
    pub manage_roles: bool,
}

impl Capabilities {
    pub fn for_session(status: &SessionStatus) -> Self {
        let admin = status.is_admin();
        Self {
            manage_catalog: admin,
            manage_roles: admin,
        }
    }
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
    fn only_admins_manage_catalogs() {
        assert!(Capabilities::for_session(&session("admin")).manage_catalog);
        assert!(!Capabilities::for_session(&session("user")).manage_catalog);
        assert_eq!(
            Capabilities::for_session(&SessionStatus::Unauthenticated),
            Capabilities::default()
        );
    }
}
