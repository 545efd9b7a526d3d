//! Configuration file loading.
//!
//! The CLI reads an optional TOML file:
//!
//! ```toml
//! [viewport]
//! width = 80
//! height = 25
//!
//! [theme]
//! frame = "blue"
//! title = "cyan"
//! prompt = "yellow"
//! modal_text = "light_red"
//! entry = "gray"
//! ```
//!
//! Every key is optional. Colors are named as `Color::from_name` accepts
//! them, so `light-red`, `LightRed` and `light_red` are equivalent.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use conui_framework::core::Color;
use conui_framework::widgets::{Theme, SCREEN_SIZE};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Size of the screen snapshots are captured at.
    pub viewport: Viewport,
    /// Screen colors.
    pub theme: ThemeConfig,
}

/// Snapshot size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: u16::try_from(SCREEN_SIZE.width).unwrap_or(80),
            height: u16::try_from(SCREEN_SIZE.height).unwrap_or(25),
        }
    }
}

/// Color names for the screen theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub frame: String,
    pub title: String,
    pub prompt: String,
    pub modal_text: String,
    pub entry: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            frame: theme.frame.name().to_string(),
            title: theme.title.name().to_string(),
            prompt: theme.prompt.name().to_string(),
            modal_text: theme.modal_text.name().to_string(),
            entry: theme.entry.name().to_string(),
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color> {
    Color::from_name(value).with_context(|| format!("invalid color for theme.{key}: {value:?}"))
}

impl ThemeConfig {
    /// Resolves the color names into a [`Theme`].
    pub fn resolve(&self) -> Result<Theme> {
        Ok(Theme {
            frame: parse_color("frame", &self.frame)?,
            title: parse_color("title", &self.title)?,
            prompt: parse_color("prompt", &self.prompt)?,
            modal_text: parse_color("modal_text", &self.modal_text)?,
            entry: parse_color("entry", &self.entry)?,
        })
    }
}

impl Config {
    /// Default config file location: `<config dir>/conui/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("conui").join("config.toml"))
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Loads the explicit file if one is given, else the default file if it
    /// exists, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.viewport, Viewport { width: 80, height: 25 });
        assert_eq!(config.theme.modal_text, "light_red");
        assert_eq!(config.theme.resolve().unwrap(), Theme::default());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [viewport]
            width = 100

            [theme]
            frame = "Light-Green"
            "#,
        )
        .expect("should deserialize partial TOML");

        assert_eq!(config.viewport, Viewport { width: 100, height: 25 });
        let theme = config.theme.resolve().unwrap();
        assert_eq!(theme.frame, Color::LightGreen);
        assert_eq!(theme.prompt, Color::Yellow);
    }

    #[test]
    fn test_unknown_color_names_the_key() {
        let config: Config = toml::from_str("[theme]\ntitle = \"teal\"\n").unwrap();
        let err = config.theme.resolve().unwrap_err();
        assert!(err.to_string().contains("theme.title"), "{err}");
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conui.toml");
        std::fs::write(&path, "[viewport]\nheight = 10\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.viewport.height, 10);
        assert_eq!(config.viewport.width, 80);
    }

    #[test]
    fn test_load_reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load(Some(&missing)).is_err());

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[viewport\nwidth = ").unwrap();
        let err = Config::load(Some(&broken)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
