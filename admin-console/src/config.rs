use invite_form::User;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "admin-console";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid log level: {0}")]
    LogLevel(String),
}

/// Admin console configuration, read from a TOML file.
///
/// ```toml
/// log_level = "debug"
///
/// [inviter]
/// name = "Alice"
/// email = "alice@example.com"
///
/// [[users]]
/// name = "Bob"
/// email = "bob@example.com"
/// admin = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// User sending the invitations.
    #[serde(default)]
    pub inviter: UserConfig,
    /// Users already registered when the console starts.
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: "Administrator".to_string(),
            email: "admin@example.com".to_string(),
            admin: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            inviter: UserConfig::default(),
            users: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// `<config dir>/admin-console/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(DEFAULT_FILE_NAME))
    }

    /// Loads `path` if given, else the default file if it exists, else the
    /// default configuration.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(&path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// The inviting user. The inviter is registered with the other users.
    pub fn inviter(&self) -> User {
        User::new(&self.inviter.name, &self.inviter.email, self.inviter.admin)
    }

    pub fn users(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|u| User::new(&u.name, &u.email, u.admin))
            .collect()
    }
}
