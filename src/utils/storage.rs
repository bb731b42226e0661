// ============================================================================
// STORAGE - Persistencia del token de sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

use crate::config::CONFIG;
use crate::error::ApiError;

/// Dónde vive el bearer token entre recargas
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), ApiError>;
    fn clear(&self);
}

/// localStorage del navegador (clave `CONFIG.token_storage_key`)
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new() -> Self {
        Self {
            key: CONFIG.token_storage_key.clone(),
        }
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        // El token se guarda como string plano, no como JSON
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|_| ApiError::Storage("no se pudo guardar el token".to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// Store en memoria, para tests y entornos sin `window`
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.current()
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Bearer token actual, leído en cada request
pub fn stored_token() -> Option<String> {
    LocalTokenStore::new().load()
}
