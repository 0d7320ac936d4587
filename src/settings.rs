use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const SETTINGS_PATH: &str = "aviary.toml";

/// Application settings read once at startup. Every key is optional.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
    /// Width of the console panel in pixels.
    pub terminal_width: f32,
    /// Console lines kept before the oldest are dropped.
    pub scrollback: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            terminal_width: 440.0,
            scrollback: 2000,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl Settings {
    pub fn from_toml(text: &str, path: &str) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Load `path`, or defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            log::debug!("no {display}; using default settings");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: display.clone(),
            source,
        })?;
        let settings = Self::from_toml(&text, &display)?;
        log::debug!("loaded settings: {settings:#?}");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("", "t").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let settings = Settings::from_toml("seed = 42\nscrollback = 50\n", "t").unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.scrollback, 50);
        assert_eq!(settings.terminal_width, Settings::default().terminal_width);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_toml("sed = 1\n", "aviary.toml").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse aviary.toml"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("aviary_settings_that_do_not_exist.toml");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn file_on_disk_is_read() {
        let path = std::env::temp_dir().join(format!("aviary_settings_{}.toml", std::process::id()));
        std::fs::write(&path, "terminal_width = 300.0\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.terminal_width, 300.0);
    }
}
