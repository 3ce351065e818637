//! Configuration error types

use std::fmt;
use std::io;

/// Error type for configuration loading and saving
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading or writing the config file
    Io(io::Error),
    /// The file is not valid TOML or does not match the schema
    Parse(toml::de::Error),
    /// The configuration could not be written as TOML
    Serialize(toml::ser::Error),
    /// The platform has no config directory (no home directory)
    NoConfigDir,
    /// Values parsed but are not usable
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {}", err),
            ConfigError::NoConfigDir => write!(f, "could not determine a config directory"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::NoConfigDir | ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
