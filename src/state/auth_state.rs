// ============================================================================
// AUTH STATE - Contexto de sesión global
// ============================================================================
// Dos estados: Unauthenticated / Authenticated(token + claims).
// Init al arrancar la app (restore), teardown en logout.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::Claims;
use crate::utils::{decode_claims, now_secs, TokenStore};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Unauthenticated,
    Authenticated { token: String, claims: Claims },
}

impl SessionStatus {
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            SessionStatus::Authenticated { claims, .. } => Some(claims),
            SessionStatus::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated { .. })
    }

    pub fn is_admin(&self) -> bool {
        self.claims().map(Claims::is_admin).unwrap_or(false)
    }
}

/// Estado de autenticación compartido por toda la app
#[derive(Clone)]
pub struct AuthState {
    status: Rc<RefCell<SessionStatus>>,
    store: Rc<dyn TokenStore>,
}

impl AuthState {
    /// Estado inicial a partir del token guardado (si lo hay)
    pub fn restore(store: Rc<dyn TokenStore>) -> Self {
        let status = Self::status_from_store(store.as_ref(), now_secs());
        Self {
            status: Rc::new(RefCell::new(status)),
            store,
        }
    }

    fn status_from_store(store: &dyn TokenStore, now: i64) -> SessionStatus {
        let Some(token) = store.load() else {
            log::info!("🔓 [AUTH] Sin token guardado");
            return SessionStatus::Unauthenticated;
        };

        match decode_claims(&token) {
            Ok(claims) if claims.is_expired_at(now) => {
                log::warn!("⌛ [AUTH] Token expirado, se elimina");
                store.clear();
                SessionStatus::Unauthenticated
            }
            Ok(claims) => {
                log::info!("✅ [AUTH] Sesión restaurada para {}", claims.display_name());
                SessionStatus::Authenticated { token, claims }
            }
            Err(e) => {
                log::error!("❌ [AUTH] Token inválido ({}), se elimina", e);
                store.clear();
                SessionStatus::Unauthenticated
            }
        }
    }

    /// Releer el token (montaje de vista protegida): detecta logout en otra pestaña o expiración
    pub fn refresh(&self) -> SessionStatus {
        let status = Self::status_from_store(self.store.as_ref(), now_secs());
        *self.status.borrow_mut() = status.clone();
        status
    }

    /// Guardar un token recién emitido por `/auth/login`
    pub fn login(&self, token: &str) -> Result<Claims, ApiError> {
        let claims = decode_claims(token).map_err(|e| {
            log::error!("❌ [AUTH] No se pudo decodificar el token: {}", e);
            ApiError::Parse("No se pudo decodificar el token".to_string())
        })?;

        if claims.is_expired_at(now_secs()) {
            log::warn!("⌛ [AUTH] El backend devolvió un token ya expirado");
            return Err(ApiError::Parse("La sesión recibida ya expiró".to_string()));
        }

        self.store.save(token)?;
        *self.status.borrow_mut() = SessionStatus::Authenticated {
            token: token.to_string(),
            claims: claims.clone(),
        };
        log::info!("🔐 [AUTH] Login como {} (rol: {})", claims.display_name(), claims.role());
        Ok(claims)
    }

    /// Logout - limpia storage y estado, venga de donde venga
    pub fn logout(&self) {
        self.store.clear();
        *self.status.borrow_mut() = SessionStatus::Unauthenticated;
        log::info!("👋 [AUTH] Sesión cerrada");
    }

    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.status.borrow().is_admin()
    }

    pub fn claims(&self) -> Option<Claims> {
        self.status.borrow().claims().cloned()
    }

    #[cfg(test)]
    pub fn token(&self) -> Option<String> {
        match &*self.status.borrow() {
            SessionStatus::Authenticated { token, .. } => Some(token.clone()),
            SessionStatus::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::token::test_tokens::{make_token, token_for_role};
    use crate::utils::MemoryTokenStore;

    fn auth_with(store: &MemoryTokenStore) -> AuthState {
        AuthState::restore(Rc::new(store.clone()))
    }

    #[test]
    fn no_token_means_unauthenticated() {
        let store = MemoryTokenStore::new();
        assert!(!auth_with(&store).is_authenticated());
    }

    #[test]
    fn unparseable_token_is_cleared() {
        let store = MemoryTokenStore::with_token("esto.no-es.un-jwt");
        let auth = auth_with(&store);
        assert_eq!(auth.status(), SessionStatus::Unauthenticated);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn expired_token_is_cleared() {
        let token = make_token(&serde_json::json!({ "userId": "u", "exp": 1 }));
        let store = MemoryTokenStore::with_token(&token);
        assert!(!auth_with(&store).is_authenticated());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn valid_token_is_restored() {
        let token = token_for_role("admin");
        let store = MemoryTokenStore::with_token(&token);
        let auth = auth_with(&store);
        assert!(auth.is_authenticated());
        assert!(auth.is_admin());
        assert_eq!(auth.token(), Some(token.clone()));
        assert_eq!(store.current(), Some(token));
    }

    #[test]
    fn login_rejects_undecodable_token_without_storing() {
        let store = MemoryTokenStore::new();
        let auth = auth_with(&store);
        assert!(auth.login("basura").is_err());
        assert!(!auth.is_authenticated());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn login_rejects_expired_token_without_storing() {
        let store = MemoryTokenStore::new();
        let auth = auth_with(&store);
        let expired = make_token(&serde_json::json!({ "userId": "u", "role": "admin", "exp": 1 }));
        assert!(matches!(auth.login(&expired), Err(ApiError::Parse(_))));
        assert!(!auth.is_authenticated());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn login_then_logout() {
        let store = MemoryTokenStore::new();
        let auth = auth_with(&store);
        let claims = auth.login(&token_for_role("user")).unwrap();
        assert_eq!(claims.role(), "user");
        assert!(auth.is_authenticated());
        assert!(store.current().is_some());

        auth.logout();
        assert!(!auth.is_authenticated());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn refresh_sees_token_removed_elsewhere() {
        let store = MemoryTokenStore::with_token(&token_for_role("user"));
        let auth = auth_with(&store);
        assert!(auth.is_authenticated());
        store.clear();
        assert_eq!(auth.refresh(), SessionStatus::Unauthenticated);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemoryTokenStore::with_token("roto");
        let auth = auth_with(&store);
        auth.logout();
        auth.logout();
        assert_eq!(auth.status(), SessionStatus::Unauthenticated);
        assert_eq!(store.current(), None);
    }
}
