// ============================================================================
// SESSION VIEWMODEL - Login y registro
// ============================================================================
// Valida los formularios y habla con el servicio de auth. El estado de
// sesión (token + claims) vive en AuthState.
// ============================================================================

use crate::error::ApiError;
use crate::models::{Claims, LoginRequest, RegisterRequest};
use crate::services::ApiClient;
use crate::state::AuthState;
use crate::utils::{is_valid_email, require};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ApiError> {
        let email = require(&self.email, "Ingresa tu correo y contraseña.")?;
        if self.password.is_empty() {
            return Err(ApiError::validation("Ingresa tu correo y contraseña."));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ApiError::validation("Todos los campos son obligatorios."));
        }
        if !is_valid_email(email) {
            return Err(ApiError::validation("El correo electrónico no es válido."));
        }
        if self.password.chars().count() < 8 {
            return Err(ApiError::validation(
                "La contraseña debe tener al menos 8 caracteres.",
            ));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation("Las contraseñas no coinciden."));
        }
        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel {
    api_client: ApiClient,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Login: valida, pide el token y lo guarda solo si se puede decodificar
    pub async fn login(&self, auth: &AuthState, form: &LoginForm) -> Result<Claims, ApiError> {
        let request = form.validate()?;
        log::info!("🔐 [LOGIN] Iniciando login...");
        let response = self.api_client.login(&request).await?;
        let claims = auth.login(&response.token)?;
        log::info!("✅ [LOGIN] Sesión iniciada para {}", claims.display_name());
        Ok(claims)
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<(), ApiError> {
        let request = form.validate()?;
        self.api_client.register(&request).await?;
        log::info!("✅ [REGISTER] Usuario registrado: {}", request.email);
        Ok(())
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "  Ana  ".into(),
            email: " ana@example.com ".into(),
            password: "secreta123".into(),
            confirm_password: "secreta123".into(),
        }
    }

    #[test]
    fn valid_registration_is_trimmed() {
        let request = register_form().validate().unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "ana@example.com");
    }

    #[test]
    fn registration_rules_in_order() {
        let mut form = register_form();
        form.name = "   ".into();
        assert_eq!(
            form.validate(),
            Err(ApiError::validation("Todos los campos son obligatorios."))
        );

        let mut form = register_form();
        form.email = "ana@".into();
        assert_eq!(
            form.validate(),
            Err(ApiError::validation("El correo electrónico no es válido."))
        );

        let mut form = register_form();
        form.password = "corta".into();
        form.confirm_password = "corta".into();
        assert!(form.validate().unwrap_err().to_string().contains("8 caracteres"));

        let mut form = register_form();
        form.confirm_password = "otra-cosa".into();
        assert_eq!(
            form.validate(),
            Err(ApiError::validation("Las contraseñas no coinciden."))
        );
    }

    #[test]
    fn login_needs_both_fields() {
        let form = LoginForm {
            email: "ana@example.com".into(),
            password: String::new(),
        };
        assert!(form.validate().unwrap_err().is_validation());
    }
}
