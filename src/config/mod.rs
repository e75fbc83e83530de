use crate::carousel::CarouselOptions;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_events_file")]
    pub events_file: String,
    #[serde(default = "default_carousel_file")]
    pub carousel_file: String,
    #[serde(default = "default_slide_height")]
    pub slide_height: u32,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_events_file() -> String {
    Config::config_dir()
        .join("events.csv")
        .to_string_lossy()
        .to_string()
}
fn default_carousel_file() -> String {
    Config::config_dir()
        .join("carousel.html")
        .to_string_lossy()
        .to_string()
}
fn default_slide_height() -> u32 {
    300
}
fn default_transition_ms() -> u32 {
    500
}
fn default_empty_message() -> String {
    "No upcoming events yet.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: default_events_file(),
            carousel_file: default_carousel_file(),
            slide_height: default_slide_height(),
            transition_ms: default_transition_ms(),
            empty_message: default_empty_message(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("flinta")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".flinta")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("flinta.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration file, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration directory and file.
    ///
    /// A custom events file is resolved with [`Config::resolve_events_file`].
    /// With `is_test` the file is not written.
    pub fn init_all(custom_events: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };

        if let Some(name) = custom_events {
            config.events_file = Self::resolve_events_file(name)?;
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    /// `--events-file` value as an absolute path; relative paths are taken
    /// from the working directory.
    pub fn resolve_events_file(name: &str) -> AppResult<String> {
        let p = expand_tilde(name);
        let resolved = if p.is_absolute() {
            p
        } else {
            env::current_dir()?.join(p)
        };
        Ok(resolved.to_string_lossy().to_string())
    }

    pub fn events_path(&self) -> PathBuf {
        expand_tilde(&self.events_file)
    }

    pub fn carousel_path(&self) -> PathBuf {
        expand_tilde(&self.carousel_file)
    }

    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            slide_height: self.slide_height,
            transition_ms: self.transition_ms,
            empty_message: self.empty_message.clone(),
        }
    }
}
