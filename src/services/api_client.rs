// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: arma requests, agrega el bearer token y
// convierte la respuesta en Result<T, ApiError>
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::ErrorBody;
use crate::services::graphql::{parse_graphql_body, GraphQlRequest};
use crate::utils::stored_token;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, Default)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    /// URL del API gateway
    pub fn url(&self, path: &str) -> String {
        CONFIG.endpoint(path)
    }

    /// URL del microservicio RBAC
    pub fn rbac_url(&self, path: &str) -> String {
        CONFIG.rbac_endpoint(path)
    }

    /// Agrega `Authorization: Bearer` si hay token guardado
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("🌐 GET {}", url);
        let response = Self::authorize(Request::get(url)).send().await?;
        read_rest_response(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("🌐 POST {}", url);
        let response = Self::authorize(Request::post(url)).json(body)?.send().await?;
        read_rest_response(response).await
    }

    /// POST cuyo body de respuesta no interesa (solo el status)
    pub(crate) async fn post_unit<B>(&self, url: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("🌐 POST {}", url);
        let response = Self::authorize(Request::post(url)).json(body)?.send().await?;
        read_unit_response(response).await
    }

    pub(crate) async fn put_unit<B>(&self, url: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("🌐 PUT {}", url);
        let response = Self::authorize(Request::put(url)).json(body)?.send().await?;
        read_unit_response(response).await
    }

    /// POST `{query, variables}` al endpoint GraphQL del dominio
    pub(crate) async fn graphql<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &GraphQlRequest,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🛰️ GraphQL {} → {}", url, request.field);
        let response = Self::authorize(Request::post(&url)).json(request)?.send().await?;
        let status = response.status();
        let body = response.text().await?;
        parse_graphql_body(status, &body, request.field).map_err(|e| {
            log::error!("❌ GraphQL {} falló: {}", request.field, e);
            e
        })
    }
}

async fn read_rest_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await?;
    parse_rest_body(status, &status_text, &body)
}

async fn read_unit_response(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await?;
    check_rest_status(status, &status_text, &body)?;
    Ok(body)
}

/// Error HTTP con el mensaje del backend (`message` / `error`) o el status text
pub fn check_rest_status(status: u16, status_text: &str, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| status_text.to_string());
    log::error!("❌ HTTP {}: {}", status, message);
    Err(ApiError::Http { status, message })
}

/// Interpreta una respuesta REST: error del backend o JSON esperado
pub fn parse_rest_body<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, ApiError> {
    check_rest_status(status, status_text, body)?;

    // 204 / body vacío
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginResponse, MessageResponse};

    #[test]
    fn backend_message_is_surfaced() {
        let result: Result<LoginResponse, _> =
            parse_rest_body(401, "Unauthorized", r#"{"message":"Credenciales inválidas"}"#);
        assert_eq!(
            result,
            Err(ApiError::Http { status: 401, message: "Credenciales inválidas".into() })
        );

        let result: Result<LoginResponse, _> =
            parse_rest_body(400, "Bad Request", r#"{"error":"Token expirado"}"#);
        assert_eq!(
            result,
            Err(ApiError::Http { status: 400, message: "Token expirado".into() })
        );
    }

    #[test]
    fn falls_back_to_status_text() {
        let result: Result<LoginResponse, _> = parse_rest_body(503, "Service Unavailable", "");
        assert_eq!(
            result,
            Err(ApiError::Http { status: 503, message: "Service Unavailable".into() })
        );
    }

    #[test]
    fn unit_calls_ignore_plain_text_bodies() {
        assert_eq!(check_rest_status(201, "Created", "Usuario registrado"), Ok(()));
        assert!(check_rest_status(409, "Conflict", "texto").is_err());
    }

    #[test]
    fn empty_success_body_is_null() {
        let result: Option<MessageResponse> = parse_rest_body(204, "No Content", "").unwrap();
        assert_eq!(result, None);
        let token: LoginResponse = parse_rest_body(200, "OK", r#"{"token":"a.b.c"}"#).unwrap();
        assert_eq!(token.token, "a.b.c");
    }
}
