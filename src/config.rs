use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_FONT_SIZE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    PLAYED_COLOR, TABLE_GREEN_COLOR, TABLE_RED_COLOR, UNPLAYED_COLOR,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorConfig {
    pub played: String,
    pub unplayed: String,
    pub table_green: String,
    pub table_red: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            played: PLAYED_COLOR.to_string(),
            unplayed: UNPLAYED_COLOR.to_string(),
            table_green: TABLE_GREEN_COLOR.to_string(),
            table_red: TABLE_RED_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub font_size: u32,
    pub colors: ColorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            colors: ColorConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn config_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(CONFIG_DIR_NAME);
        path
    }

    pub fn config_file() -> PathBuf {
        let mut path = Self::config_dir();
        path.push("config.toml");
        path
    }

    pub fn load() -> Self {
        Self::load_or_init(&Self::config_file())
    }

    /// Reads `path`, creating it with the defaults when it does not exist.
    /// A file that cannot be read or parsed is left untouched.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let default = Self::default();
            if let Err(e) = default.save_to(path) {
                tracing::warn!("Failed to write default config: {:#}", e);
            }
            return default;
        }

        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Using default config: {:#}", e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;
        Ok(config.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))?;
        Ok(())
    }

    /// Replaces values the UI cannot use with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = ColorConfig::default();
        let fields = [
            (&mut self.colors.played, defaults.played),
            (&mut self.colors.unplayed, defaults.unplayed),
            (&mut self.colors.table_green, defaults.table_green),
            (&mut self.colors.table_red, defaults.table_red),
        ];
        for (value, default) in fields {
            if !is_hex_color(value) {
                tracing::warn!("Invalid colour {:?} in config, using {}", value, default);
                *value = default;
            }
        }

        if self.font_size == 0 {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            self.window_width = DEFAULT_WINDOW_WIDTH;
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }
        self
    }
}

/// Accepts `#rgb` and `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.font_size = 14;
        config.colors.played = "#00ff00".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_init_writes_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::load_or_init(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_or_init_keeps_broken_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let broken = "font_size = 14\nwindow_width = \n";
        fs::write(&path, broken).unwrap();

        let config = AppConfig::load_or_init(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "font_size = 16\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.font_size, 16);
        assert_eq!(loaded.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(loaded.colors, ColorConfig::default());
    }

    #[test]
    fn test_invalid_values_are_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "font_size = 0\n[colors]\nplayed = \"green\"\nunplayed = \"#fff\"\ntable_green = \"#6fff6f\"\ntable_red = \"#zzzzzz\"\n",
        )
        .unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(loaded.colors.played, PLAYED_COLOR);
        assert_eq!(loaded.colors.unplayed, "#fff");
        assert_eq!(loaded.colors.table_red, TABLE_RED_COLOR);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#6fff6f"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("6fff6f"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#ggg"));
    }
}
