// Recuperación de contraseña: solicitar correo → verificar código → nueva contraseña

use crate::error::ApiError;
use crate::models::ResetPasswordRequest;
use crate::router::Route;
use crate::services::ApiClient;
use crate::utils::{is_valid_email, is_valid_recovery_code};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoveryForm {
    pub email: String,
}

impl RecoveryForm {
    pub fn validate(&self) -> Result<String, ApiError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ApiError::validation("Por favor ingresa tu correo electrónico."));
        }
        if !is_valid_email(email) {
            return Err(ApiError::validation("Ingresa un correo electrónico válido."));
        }
        Ok(email.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyTokenForm {
    pub code: String,
}

impl VerifyTokenForm {
    /// Código válido → ruta de reset con el token en la query
    pub fn validate(&self) -> Result<Route, ApiError> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(ApiError::validation("Ingresa el código que recibiste por correo."));
        }
        if !is_valid_recovery_code(code) {
            return Err(ApiError::validation("El código de recuperación no es válido."));
        }
        Ok(Route::ResetPassword {
            token: Some(code.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetForm {
    pub token: Option<String>,
    pub new_password: String,
}

impl ResetForm {
    pub fn for_token(token: Option<String>) -> Self {
        Self {
            token,
            new_password: String::new(),
        }
    }

    pub fn validate(&self) -> Result<ResetPasswordRequest, ApiError> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::validation("Falta el token de recuperación en el enlace."))?;
        if self.new_password.is_empty() {
            return Err(ApiError::validation("Ingresa la nueva contraseña."));
        }
        Ok(ResetPasswordRequest {
            token: token.to_string(),
            new_password: self.new_password.clone(),
        })
    }
}

pub struct RecoveryViewModel {
    api_client: ApiClient,
}

impl RecoveryViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn request(&self, form: &RecoveryForm) -> Result<(), ApiError> {
        let email = form.validate()?;
        self.api_client.request_password_recovery(&email).await
    }

    /// Devuelve el mensaje a mostrar tras el cambio
    pub async fn reset(&self, form: &ResetForm) -> Result<String, ApiError> {
        let request = form.validate()?;
        let message = self.api_client.reset_password(&request).await?;
        Ok(message.unwrap_or_else(|| "Contraseña actualizada correctamente.".to_string()))
    }
}

impl Default for RecoveryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_email_required_and_well_formed() {
        assert!(RecoveryForm { email: " ".into() }.validate().is_err());
        assert!(RecoveryForm { email: "no-es-correo".into() }.validate().is_err());
        assert_eq!(
            RecoveryForm { email: " ana@example.com".into() }.validate(),
            Ok("ana@example.com".into())
        );
    }

    #[test]
    fn verified_code_leads_to_reset_route() {
        let code = "5a1d1cf5-9a4d-4b7d-bf43-1fd2e0cfe3a7";
        let form = VerifyTokenForm { code: format!(" {} ", code) };
        assert_eq!(
            form.validate(),
            Ok(Route::ResetPassword { token: Some(code.into()) })
        );
        assert!(VerifyTokenForm { code: "123456".into() }.validate().is_err());
    }

    #[test]
    fn reset_needs_token_and_password() {
        assert!(ResetForm::for_token(None).validate().is_err());
        let mut form = ResetForm::for_token(Some("abc".into()));
        assert!(form.validate().is_err());
        form.new_password = "nueva".into();
        let request = form.validate().unwrap();
        assert_eq!(request.token, "abc");
        assert_eq!(request.new_password, "nueva");
    }
}
