// Perfil (/profiles/pro) y preferencias (/preferences) del usuario

use crate::error::ApiError;
use crate::models::{Preferences, Profile};
use crate::services::ApiClient;

/// Perfil enviado, con los campos que el backend devuelva encima
fn profile_or(body: &str, sent: &Profile) -> Profile {
    let Ok(returned) = serde_json::from_str::<Profile>(body) else {
        return sent.clone();
    };
    Profile {
        name: returned.name.or_else(|| sent.name.clone()),
        bio: returned.bio.or_else(|| sent.bio.clone()),
        phone: returned.phone.or_else(|| sent.phone.clone()),
    }
}

impl ApiClient {
    /// GET /profiles/pro; 404 = el usuario aún no tiene perfil
    pub async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        match self.get_json::<Profile>(&self.url("/profiles/pro")).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_not_found() => {
                log::info!("👤 Perfil inexistente, modo creación");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        log::info!("👤 Actualizando perfil");
        let body = self.put_unit(&self.url("/profiles/pro"), profile).await?;
        Ok(profile_or(&body, profile))
    }

    pub async fn create_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        log::info!("👤 Creando perfil");
        let body = self.post_unit(&self.url("/profiles/pro"), profile).await?;
        Ok(profile_or(&body, profile))
    }

    pub async fn get_preferences(&self) -> Result<Preferences, ApiError> {
        self.get_json(&self.url("/preferences/me")).await
    }

    pub async fn update_preferences(&self, prefs: &Preferences) -> Result<(), ApiError> {
        log::info!("⚙️ Guardando preferencias ({}, {})", prefs.language, prefs.theme.as_str());
        self.put_unit(&self.url("/preferences/me"), prefs).await?;
        Ok(())
    }

    /// POST /preferences/reset → preferencias por defecto del backend
    pub async fn reset_preferences(&self) -> Result<Preferences, ApiError> {
        log::info!("🔄 Restaurando preferencias");
        self.post_json(&self.url("/preferences/reset"), &serde_json::json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_profile_falls_back_to_sent_values() {
        let sent = Profile {
            name: None,
            bio: Some("Piloto".into()),
            phone: Some("0999".into()),
        };
        assert_eq!(profile_or("", &sent), sent);
        let returned = profile_or(r#"{"bio":"Copiloto","phone":null}"#, &sent);
        assert_eq!(returned.bio.as_deref(), Some("Copiloto"));
        assert_eq!(returned.phone.as_deref(), Some("0999"));
    }

    #[test]
    fn message_body_keeps_the_sent_profile() {
        let sent = Profile {
            name: Some("Ana".into()),
            bio: Some("Piloto".into()),
            phone: Some("0999".into()),
        };
        assert_eq!(profile_or(r#"{"message":"Perfil actualizado"}"#, &sent), sent);
        assert_eq!(profile_or(r#"{"id":1}"#, &sent), sent);
    }
}
