// Estado de envío de un formulario (login, registro, recuperación, perfil...)

use crate::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStatus {
    pub submitting: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl FormStatus {
    pub fn start(&mut self) {
        self.submitting = true;
        self.error = None;
        self.message = None;
    }

    pub fn fail(&mut self, error: &ApiError) {
        self.submitting = false;
        self.error = Some(error.to_string());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = None;
        self.message = Some(message.into());
    }

    /// Aplica el resultado de un envío; devuelve si fue exitoso
    pub fn finish<T>(&mut self, result: &Result<T, ApiError>, message: &str) -> bool {
        match result {
            Ok(_) => {
                self.succeed(message);
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_clears_previous_feedback() {
        let mut status = FormStatus::default();
        status.fail(&ApiError::validation("falta el correo"));
        status.start();
        assert!(status.submitting);
        assert_eq!(status.error, None);
    }

    #[test]
    fn finish_reports_outcome() {
        let mut status = FormStatus::default();
        let ok: Result<(), ApiError> = Ok(());
        assert!(status.finish(&ok, "Listo"));
        assert_eq!(status.message.as_deref(), Some("Listo"));

        let err: Result<(), ApiError> = Err(ApiError::Network("sin red".into()));
        assert!(!status.finish(&err, "Listo"));
        assert!(!status.submitting);
        assert!(status.error.as_deref().unwrap().contains("sin red"));
    }
}
