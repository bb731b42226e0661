// ============================================================================
// TOKEN - Decodificación del JWT de sesión
// ============================================================================
// ⚠️ Solo se DECODIFICA el payload: la firma NO se verifica en el cliente.
// Cualquiera puede fabricar un token con `role: "admin"` y ver la UI de
// administración; la autorización real la aplican los microservicios.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;

use crate::models::Claims;

/// Motivo por el que un token no se pudo decodificar
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("el token no tiene tres segmentos")]
    Malformed,
    #[error("payload base64 inválido: {0}")]
    Base64(String),
    #[error("payload JSON inválido: {0}")]
    Json(String),
}

/// Decodifica el payload de un JWT sin verificar la firma
pub fn decode_payload<T: DeserializeOwned>(token: &str) -> Result<T, TokenError> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };

    // Algunos emisores dejan el padding '='
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// Decodifica los claims de sesión
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    decode_payload::<Claims>(token)
}

/// Segundos UNIX actuales
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    /// Construye un JWT sin firmar con el payload dado
    pub fn make_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.firma", header, body)
    }

    pub fn token_for_role(role: &str) -> String {
        make_token(&serde_json::json!({
            "userId": "u-1",
            "email": "ana@example.com",
            "role": role,
            "iat": 1_700_000_000,
            "exp": 4_000_000_000i64,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::test_tokens::*;
    use super::*;

    #[test]
    fn decodes_claims_without_verifying_signature() {
        let claims = decode_claims(&token_for_role("admin")).unwrap();
        assert_eq!(claims.user_id, "u-1");
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert!(claims.is_admin());
        assert_eq!(claims.exp, Some(4_000_000_000));
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert_eq!(decode_claims("abc"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a..c"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn rejects_unparseable_payload() {
        assert!(matches!(decode_claims("x.%%%.y"), Err(TokenError::Base64(_))));

        let not_json = format!("x.{}.y", URL_SAFE_NO_PAD.encode("no es json"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Json(_))));

        let missing_user = make_token(&serde_json::json!({ "role": "admin" }));
        assert!(matches!(decode_claims(&missing_user), Err(TokenError::Json(_))));
    }

    #[test]
    fn tolerates_padded_payload() {
        let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"userId":"p"}"#);
        let token = format!("h.{}.s", body);
        assert_eq!(decode_claims(&token).unwrap().user_id, "p");
    }
}
