use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_THEME_ID: &str = "lofi-beige";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Country code or name; `None` selects the default mixed list.
    pub country: Option<String>,
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            country: None,
            theme: DEFAULT_THEME_ID.to_string(),
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn save(&self) -> Result<()> {
        SettingsWrapper { settings: self.clone() }.save()
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        SettingsWrapper { settings: self.clone() }.save_to(dir)
    }

    /// Applies command-line overrides on top of the stored settings.
    pub fn with_overrides(mut self, country: Option<&str>, theme: Option<&str>) -> Self {
        if let Some(c) = country {
            self.country = Some(c.to_string());
        }
        if let Some(t) = theme {
            self.theme = t.to_string();
        }
        self
    }
}
