use serde::{Deserialize, Serialize};

/// Perfil del microservicio de perfiles (`/profiles/pro`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: String,
    pub theme: Theme,
    pub email_notifications: bool,
    pub timezone: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            theme: Theme::Light,
            email_notifications: true,
            timezone: "America/Guayaquil".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_use_camel_case_on_the_wire() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["emailNotifications"], true);
        assert_eq!(json["theme"], "light");
        assert_eq!(json["timezone"], "America/Guayaquil");
    }
}
