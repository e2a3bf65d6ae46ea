use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn base_url(&self) -> String {
        self.server
            .as_ref()
            .map(|s| s.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// The persisted UI theme flag. Dark is the default when no flag exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: String,
}

fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".matchday")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}

pub fn load_theme() -> ThemeMode {
    load_theme_from(&data_dir())
}

pub fn save_theme(mode: ThemeMode) -> Result<()> {
    save_theme_to(&data_dir(), mode)
}

fn load_theme_from(dir: &Path) -> ThemeMode {
    let path = dir.join("theme.toml");
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return ThemeMode::Dark;
    };
    match toml::from_str::<ThemeFile>(&contents) {
        Ok(file) if file.theme == "light" => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

fn save_theme_to(dir: &Path, mode: ThemeMode) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let file = ThemeFile {
        theme: mode.as_str().to_string(),
    };
    let contents = toml::to_string(&file)?;
    std::fs::write(dir.join("theme.toml"), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_theme_from(dir.path()), ThemeMode::Dark);
    }

    #[test]
    fn theme_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        save_theme_to(dir.path(), ThemeMode::Light).unwrap();
        assert_eq!(load_theme_from(dir.path()), ThemeMode::Light);
        save_theme_to(dir.path(), ThemeMode::Dark).unwrap();
        assert_eq!(load_theme_from(dir.path()), ThemeMode::Dark);
    }

    #[test]
    fn toggling_twice_restores_persisted_flag() {
        let dir = tempfile::tempdir().unwrap();
        save_theme_to(dir.path(), ThemeMode::Light).unwrap();
        let original = load_theme_from(dir.path());

        save_theme_to(dir.path(), original.toggled()).unwrap();
        save_theme_to(dir.path(), load_theme_from(dir.path()).toggled()).unwrap();

        assert_eq!(load_theme_from(dir.path()), original);
    }

    #[test]
    fn garbage_theme_file_falls_back_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme.toml"), "not toml at all [").unwrap();
        assert_eq!(load_theme_from(dir.path()), ThemeMode::Dark);
    }

    #[test]
    fn base_url_defaults_when_unconfigured() {
        let config = AppConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_comes_from_config() {
        let config: AppConfig =
            toml::from_str("[server]\nbase_url = \"http://example.com:8080/\"").unwrap();
        assert_eq!(config.base_url(), "http://example.com:8080/");
    }
}
