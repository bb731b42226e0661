// Validaciones de formularios (sin red)

use lazy_static::lazy_static;
use regex_lite::Regex;
use uuid::{Uuid, Variant};

use crate::error::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de email válida");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Código de recuperación: UUID versión 1-5, variante RFC 4122
pub fn is_valid_recovery_code(code: &str) -> bool {
    // parse_str también acepta formas sin guiones o con llaves
    if code.len() != 36 {
        return false;
    }
    match Uuid::parse_str(code) {
        Ok(uuid) => {
            matches!(uuid.get_version_num(), 1..=5) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

/// Campo obligatorio (se recorta); devuelve el valor limpio
pub fn require(value: &str, message: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Número finito (precio, multiplicador)
pub fn parse_number(value: &str, message: &str) -> Result<f64, ApiError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ApiError::validation(message))
}

/// Entero >= `min` (ids, distancias)
pub fn parse_integer(value: &str, min: i64, message: &str) -> Result<i64, ApiError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= min)
        .ok_or_else(|| ApiError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ana@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn recovery_code_must_be_rfc4122_uuid() {
        assert!(is_valid_recovery_code("5a1d1cf5-9a4d-4b7d-bf43-1fd2e0cfe3a7"));
        assert!(is_valid_recovery_code("5A1D1CF5-9A4D-4B7D-BF43-1FD2E0CFE3A7"));
        // versión 0
        assert!(!is_valid_recovery_code("5a1d1cf5-9a4d-0b7d-bf43-1fd2e0cfe3a7"));
        // variante no RFC 4122
        assert!(!is_valid_recovery_code("5a1d1cf5-9a4d-4b7d-cf43-1fd2e0cfe3a7"));
        assert!(!is_valid_recovery_code("5a1d1cf59a4d4b7dbf431fd2e0cfe3a7"));
        assert!(!is_valid_recovery_code("codigo"));
    }

    #[test]
    fn numbers_reject_garbage() {
        assert_eq!(parse_number(" 12.5 ", "x").unwrap(), 12.5);
        assert!(parse_number("doce", "x").unwrap_err().is_validation());
        assert!(parse_number("NaN", "x").is_err());
        assert!(parse_number("", "x").is_err());
        assert_eq!(parse_integer("3", 0, "x").unwrap(), 3);
        assert!(parse_integer("-1", 0, "x").is_err());
        assert!(parse_integer("2.5", 0, "x").is_err());
    }

    #[test]
    fn require_trims() {
        assert_eq!(require("  AV1 ", "x").unwrap(), "AV1");
        assert_eq!(require("   ", "obligatorio"), Err(ApiError::validation("obligatorio")));
    }
}
