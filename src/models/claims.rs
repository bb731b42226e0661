use serde::{Deserialize, Deserializer, Serialize};

/// Rol con acceso a las herramientas de gestión
pub const ADMIN_ROLE: &str = "admin";

/// Claims decodificados del payload del token de sesión
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// `exp` en segundos; sin `exp` el token no caduca en el cliente
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        match self.exp {
            Some(exp) => exp <= now_secs,
            None => false,
        }
    }

    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }

    pub fn is_admin(&self) -> bool {
        self.role() == ADMIN_ROLE
    }

    /// Nombre a mostrar en el header: email si existe, si no el id
    pub fn display_name(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => &self.user_id,
        }
    }
}

// Algunos servicios emiten userId numérico
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "userId debe ser string o número, recibido: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_user_id_is_accepted() {
        let claims: Claims =
            serde_json::from_str(r#"{"userId": 42, "role": "user", "exp": 10}"#).unwrap();
        assert_eq!(claims.user_id, "42");
        assert!(!claims.is_admin());
    }

    #[test]
    fn expiry_uses_seconds() {
        let claims: Claims = serde_json::from_str(r#"{"userId": "u1", "exp": 100}"#).unwrap();
        assert!(!claims.is_expired_at(99));
        assert!(claims.is_expired_at(100));

        let forever: Claims = serde_json::from_str(r#"{"userId": "u1"}"#).unwrap();
        assert!(!forever.is_expired_at(i64::MAX));
    }

    #[test]
    fn display_name_falls_back_to_user_id() {
        let claims: Claims = serde_json::from_str(r#"{"userId": "u1", "email": ""}"#).unwrap();
        assert_eq!(claims.display_name(), "u1");
    }
}
