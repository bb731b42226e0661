// ============================================================================
// ERRORES - Un único tipo para red, backend y validación
// ============================================================================
// El Display es el mensaje que ve el usuario en la vista
// ============================================================================

/// Errores de una operación de vista (fetch, submit, storage)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Fallo de conexión (el request no llegó a tener respuesta)
    #[error("Error de conexión con el backend: {0}")]
    Network(String),

    /// Respuesta HTTP no exitosa; `message` viene del body si existe
    #[error("Error del servidor ({status}): {message}")]
    Http { status: u16, message: String },

    /// `errors[]` de una respuesta GraphQL
    #[error("Error GraphQL: {0}")]
    GraphQl(String),

    /// Respuesta con formato inesperado
    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),

    /// Formulario inválido, no se llegó a enviar nada
    #[error("{0}")]
    Validation(String),

    /// localStorage no disponible o con error
    #[error("Error de almacenamiento local: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }

    #[cfg(test)]
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(err) => ApiError::Parse(err.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_user_facing() {
        assert_eq!(
            ApiError::validation("Todos los campos son obligatorios.").to_string(),
            "Todos los campos son obligatorios."
        );
        let http = ApiError::Http { status: 500, message: "boom".into() };
        assert_eq!(http.to_string(), "Error del servidor (500): boom");
    }

    #[test]
    fn not_found_is_detected() {
        assert!(ApiError::Http { status: 404, message: String::new() }.is_not_found());
        assert!(!ApiError::Network("x".into()).is_not_found());
    }
}
