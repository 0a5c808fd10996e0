use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Default configuration
pub const DEFAULT_MARGIN: f32 = 8.0;
pub const DEFAULT_MIN_SIZE: f32 = 32.0;
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_THEME: &str = "dark";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Geometry constants shared by every layout provider.
///
/// Passed explicitly to providers at construction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inset applied on both sides and between stacked sections
    pub margin: f32,
    /// Floor for both dimensions of any measured size
    pub min_size: f32,
    /// Point size of bubble text
    pub font_size: f32,
    /// Replied-message preview text size relative to `font_size`
    pub reply_text_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            min_size: DEFAULT_MIN_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            reply_text_scale: 0.85,
        }
    }
}

impl LayoutConfig {
    pub fn reply_font_size(&self) -> f32 {
        self.font_size * self.reply_text_scale
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutConfig,
    pub theme: String,
    /// Initial window width of the demo viewer
    pub demo_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            theme: DEFAULT_THEME.to_string(),
            demo_width: 420.0,
        }
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("com", "bubble-layout", "bubble-layout").ok_or(ConfigError::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

/// Load settings from the platform config directory.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(&settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
