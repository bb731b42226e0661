// Perfil y preferencias del usuario autenticado

use crate::error::ApiError;
use crate::models::{Preferences, Profile};
use crate::services::ApiClient;
use crate::utils::require;

/// Campos editables del perfil (inputs de texto)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<Profile, ApiError> {
        let bio = require(&self.bio, "La biografía no puede estar vacía.")?;
        let phone = require(&self.phone, "El teléfono no puede estar vacío.")?;
        let name = self.name.trim();
        Ok(Profile {
            name: (!name.is_empty()).then(|| name.to_string()),
            bio: Some(bio),
            phone: Some(phone),
        })
    }
}

/// Perfil cargado; `None` = todavía no existe (modo creación)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loaded: bool,
    pub editing: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ProfileState {
    pub fn exists(&self) -> bool {
        self.profile.is_some()
    }

    pub fn apply_fetch(&mut self, result: Result<Option<Profile>, ApiError>) {
        self.loaded = true;
        match result {
            Ok(profile) => {
                self.editing = profile.is_none();
                self.profile = profile;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn apply_save(&mut self, result: Result<Profile, ApiError>) {
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.editing = false;
                self.error = None;
                self.message = Some("Perfil guardado correctamente.".to_string());
            }
            Err(e) => {
                self.message = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

pub struct ProfileViewModel {
    api_client: ApiClient,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load(&self) -> Result<Option<Profile>, ApiError> {
        self.api_client.get_profile().await
    }

    /// PUT si el perfil ya existe, POST si no
    pub async fn save(&self, form: &ProfileForm, exists: bool) -> Result<Profile, ApiError> {
        let profile = form.validate()?;
        if exists {
            self.api_client.update_profile(&profile).await
        } else {
            self.api_client.create_profile(&profile).await
        }
    }
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PreferencesViewModel {
    api_client: ApiClient,
}

impl PreferencesViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn load(&self) -> Result<Preferences, ApiError> {
        self.api_client.get_preferences().await
    }

    pub async fn save(&self, prefs: &Preferences) -> Result<(), ApiError> {
        let language = require(&prefs.language, "Selecciona un idioma.")?;
        let timezone = require(&prefs.timezone, "Selecciona una zona horaria.")?;
        let prefs = Preferences {
            language,
            timezone,
            ..prefs.clone()
        };
        self.api_client.update_preferences(&prefs).await
    }

    pub async fn reset(&self) -> Result<Preferences, ApiError> {
        self.api_client.reset_preferences().await
    }
}

impl Default for PreferencesViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_switches_to_create_mode() {
        let mut state = ProfileState::default();
        state.apply_fetch(Ok(None));
        assert!(state.loaded);
        assert!(!state.exists());
        assert!(state.editing);
    }

    #[test]
    fn failed_save_keeps_loaded_profile() {
        let mut state = ProfileState::default();
        let profile = Profile {
            name: None,
            bio: Some("Piloto".into()),
            phone: Some("0999".into()),
        };
        state.apply_fetch(Ok(Some(profile.clone())));
        state.apply_save(Err(ApiError::Network("caído".into())));
        assert_eq!(state.profile, Some(profile));
        assert!(state.error.is_some());
    }

    #[test]
    fn form_requires_bio_and_phone() {
        let form = ProfileForm {
            name: String::new(),
            bio: "Piloto".into(),
            phone: " ".into(),
        };
        assert!(form.validate().unwrap_err().is_validation());

        let form = ProfileForm { phone: "0999".into(), ..form };
        let profile = form.validate().unwrap();
        assert_eq!(profile.name, None);
        assert_eq!(ProfileForm::from_profile(&profile), form);
    }
}
