use crate::error::{PostError, Result};
use log::info;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SERVICE: &str = "https://bsky.social";

// Later files override earlier ones; environment variables override both.
const SETTINGS_FILES: [&str; 2] = ["appsettings.json", "appsettings.development.json"];

const USERNAME_KEY: &str = "BSUsername";
const PASSWORD_KEY: &str = "BSPassword";
const SERVICE_KEY: &str = "BSService";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub service: String,
}

#[derive(Debug, Default, Deserialize)]
struct Settings {
    #[serde(rename = "BSUsername")]
    username: Option<String>,
    #[serde(rename = "BSPassword")]
    password: Option<String>,
    #[serde(rename = "BSService")]
    service: Option<String>,
}

impl Settings {
    fn merge(&mut self, other: Settings) {
        if other.username.is_some() {
            self.username = other.username;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.service.is_some() {
            self.service = other.service;
        }
    }
}

impl Config {
    /// Loads settings files from `dir`, then applies environment overrides.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with(dir, |key| std::env::var(key).ok())
    }

    pub fn load_with(dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Settings::default();
        for name in SETTINGS_FILES {
            let path = dir.join(name);
            if !path.exists() {
                continue;
            }
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| PostError::Config(format!("{}: {e}", path.display())))?;
            let file: Settings = serde_json::from_str(&raw)
                .map_err(|e| PostError::Config(format!("{}: {e}", path.display())))?;
            info!("loaded settings from {}", path.display());
            settings.merge(file);
        }
        settings.merge(Settings {
            username: env(USERNAME_KEY),
            password: env(PASSWORD_KEY),
            service: env(SERVICE_KEY),
        });

        let service = settings
            .service
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        Ok(Self {
            username: settings.username.unwrap_or_default(),
            password: settings.password.unwrap_or_default(),
            service: service.trim_end_matches('/').to_string(),
        })
    }
}
