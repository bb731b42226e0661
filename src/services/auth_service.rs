// Autenticación, registro y recuperación de contraseña (REST)

use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, RecoveryRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::services::ApiClient;

/// Mensaje opcional del backend tras el reset (JSON `{message}` o texto plano)
pub fn reset_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(response) = serde_json::from_str::<MessageResponse>(body) {
        return response.message.filter(|m| !m.is_empty());
    }
    // `"Listo"` serializado como string JSON
    if let Ok(text) = serde_json::from_str::<String>(body) {
        return Some(text).filter(|m| !m.is_empty());
    }
    if body.starts_with('{') {
        return None;
    }
    Some(body.to_string())
}

impl ApiClient {
    /// POST /auth/login → `{token}`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login para {}", request.email);
        self.post_json(&self.url("/auth/login"), request).await
    }

    /// POST /users/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        log::info!("📝 Registrando usuario {}", request.email);
        self.post_unit(&self.url("/users/register"), request).await?;
        Ok(())
    }

    /// POST /recovery/request
    pub async fn request_password_recovery(&self, email: &str) -> Result<(), ApiError> {
        log::info!("📧 Solicitando recuperación para {}", email);
        let body = RecoveryRequest { email: email.to_string() };
        self.post_unit(&self.url("/recovery/request"), &body).await?;
        Ok(())
    }

    /// POST /recovery/reset → mensaje del backend (si lo envía)
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<Option<String>, ApiError> {
        log::info!("🔑 Restableciendo contraseña con código de recuperación");
        let body = self.post_unit(&self.url("/recovery/reset"), request).await?;
        Ok(reset_message(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_message_accepts_json_or_text() {
        assert_eq!(
            reset_message(r#"{"message":"Contraseña actualizada"}"#),
            Some("Contraseña actualizada".into())
        );
        assert_eq!(reset_message("Listo"), Some("Listo".into()));
        assert_eq!(reset_message(""), None);
        assert_eq!(reset_message("{}"), None);
    }

    #[test]
    fn reset_message_unquotes_json_strings() {
        assert_eq!(reset_message("\"Listo\""), Some("Listo".into()));
        assert_eq!(reset_message("\"\""), None);
    }
}
