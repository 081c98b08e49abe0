// Host settings, loaded from the embedded default or a JSON file on disk.
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::HostError;
use crate::services::notifications::Severity;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HostSettings {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub confirmation: ConfirmationLabels,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct NotificationSettings {
    #[serde(default)]
    pub default_severity: Severity,
}

// Texts shown on the deletion confirmation dialog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConfirmationLabels {
    pub title: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

impl Default for ConfirmationLabels {
    fn default() -> Self {
        ConfirmationLabels {
            title: "Confirmar Eliminación".to_string(),
            cancel_label: "Cancelar".to_string(),
            confirm_label: "Eliminar".to_string(),
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        HostSettings {
            locale: "es-CL".to_string(),
            currency: "CLP".to_string(),
            notifications: NotificationSettings::default(),
            confirmation: ConfirmationLabels::default(),
        }
    }
}

impl HostSettings {
    // Loads the settings bundled with the binary.
    pub fn load_default() -> Result<Self, HostError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        Ok(settings)
    }

    pub fn from_json(contents: &str) -> Result<Self, HostError> {
        let settings: HostSettings = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), HostError> {
        if self.locale.trim().is_empty() {
            return Err(HostError::ConfigError("locale must not be empty".to_string()));
        }
        if self.currency.trim().is_empty() {
            return Err(HostError::ConfigError("currency must not be empty".to_string()));
        }
        Ok(())
    }
}
