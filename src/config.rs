use serde::{Deserialize, Serialize};

/// Configuración de la app, resuelta en tiempo de compilación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub rbac_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub token_storage_key: String,
    pub redirect_config: RedirectConfig,
    pub default_flight_id: i32,
}

/// Retardos (ms) antes de redirigir tras un formulario exitoso
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    pub after_register_ms: u32,
    pub after_recovery_ms: u32,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            after_register_ms: 2000,
            after_recovery_ms: 3000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8081/api".to_string(),
            rbac_url: "http://localhost:4005/api/rbac".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            token_storage_key: "token".to_string(),
            redirect_config: RedirectConfig::default(),
            default_flight_id: 1,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            rbac_url: option_env!("RBAC_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.rbac_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .unwrap_or("token").to_string(),
            redirect_config: RedirectConfig {
                after_register_ms: option_env!("REGISTER_REDIRECT_MS")
                    .unwrap_or("2000").parse().unwrap_or(2000),
                after_recovery_ms: option_env!("RECOVERY_REDIRECT_MS")
                    .unwrap_or("3000").parse().unwrap_or(3000),
            },
            default_flight_id: option_env!("DEFAULT_FLIGHT_ID")
                .unwrap_or("1").parse().unwrap_or(1),
        }
    }

    /// URL completa de un endpoint del API gateway
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// URL completa de un endpoint del microservicio RBAC
    pub fn rbac_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.rbac_url, path)
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_joined_to_base_urls() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("/pricing"), "http://localhost:8081/api/pricing");
        assert_eq!(config.rbac_endpoint("/roles"), "http://localhost:4005/api/rbac/roles");
    }

    #[test]
    fn logging_flag_selects_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
