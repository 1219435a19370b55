use crate::notify::NOTIFICATION_TTL_MS;
use anyhow::{Context, Result, anyhow, bail};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".happymind";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_SCHOOL_NAME: &str = "Happy Mind School";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub school_name: String,
    pub sound_enabled: bool,
    pub notification_ttl_ms: u64,
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            sound_enabled: true,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            show_timestamps: true,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        Ok(default_root_dir().join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        config.notification_ttl_ms = NOTIFICATION_TTL_MS;

        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
        set_mode_600(config_path)?;

        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_config_key(key) {
            "school_name" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    bail!("school_name must not be empty");
                }
                self.school_name = trimmed.to_string();
            }
            "sound_enabled" => {
                self.sound_enabled = value
                    .parse::<bool>()
                    .map_err(|_| anyhow!("sound_enabled must be true/false"))?;
            }
            "notification_ttl_ms" => {
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| anyhow!("notification_ttl_ms must be a number"))?;
                if parsed != NOTIFICATION_TTL_MS {
                    bail!("notification_ttl_ms is fixed to {NOTIFICATION_TTL_MS} milliseconds");
                }
                self.notification_ttl_ms = parsed;
            }
            "show_timestamps" => {
                self.show_timestamps = value
                    .parse::<bool>()
                    .map_err(|_| anyhow!("show_timestamps must be true/false"))?;
            }
            _ => {
                bail!(
                    "Unsupported config key: {key}. Supported keys: school_name|school.name, sound_enabled|sound.enabled, notification_ttl_ms|notification.ttl_ms, show_timestamps|view.timestamps"
                );
            }
        }

        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Option<String> {
        match normalize_config_key(key) {
            "school_name" => Some(self.school_name.clone()),
            "sound_enabled" => Some(self.sound_enabled.to_string()),
            "notification_ttl_ms" => Some(self.notification_ttl_ms.to_string()),
            "show_timestamps" => Some(self.show_timestamps.to_string()),
            _ => None,
        }
    }
}

fn normalize_config_key(key: &str) -> &str {
    match key {
        "school_name" | "school.name" => "school_name",
        "sound_enabled" | "sound.enabled" => "sound_enabled",
        "notification_ttl_ms" | "notification.ttl_ms" => "notification_ttl_ms",
        "show_timestamps" | "view.timestamps" => "show_timestamps",
        _ => key,
    }
}

fn default_root_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn set_mode_600(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to set file permissions: {}", path.display()))?;
    }

    Ok(())
}
