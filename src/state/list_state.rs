// ============================================================================
// LIST STATE - Estado de una vista de listado (catálogos, roles)
// ============================================================================

use crate::error::ApiError;

/// Lista + feedback de una vista; la lista solo cambia con un fetch exitoso
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub loaded_once: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            message: None,
            loaded_once: false,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Resultado de un fetch: éxito reemplaza la lista, error la conserva
    pub fn apply_fetch(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.loaded_once = true;
            }
            Err(e) => {
                log::error!("❌ [LIST] Error cargando datos: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Error de una operación (create/update/delete); la lista no cambia
    pub fn fail(&mut self, error: &ApiError) {
        self.loading = false;
        self.message = None;
        self.error = Some(error.to_string());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.error = None;
        self.message = Some(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut state = ListState::new();
        state.apply_fetch(Ok(vec!["UIO", "GYE"]));
        assert_eq!(state.items, vec!["UIO", "GYE"]);

        state.start_loading();
        state.apply_fetch(Err(ApiError::Network("timeout".into())));
        assert_eq!(state.items, vec!["UIO", "GYE"]);
        assert!(!state.loading);
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn successful_fetch_clears_error() {
        let mut state: ListState<u8> = ListState::new();
        state.fail(&ApiError::GraphQl("x".into()));
        state.apply_fetch(Ok(vec![1]));
        assert_eq!(state.error, None);
        assert!(state.loaded_once);
    }
}
