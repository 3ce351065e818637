//! Configuration for the folio portfolio.
//!
//! The configuration lives in a single TOML file, by default
//! `<config dir>/folio/config.toml`. A missing file is not an error: every
//! table falls back to its defaults, and so does every missing key.
//!
//! ```toml
//! [particles]
//! count = 380
//! palette = ["#3b82f6", "#8b5cf6", "#06b6d4"]
//! speed = 1.5
//! size = { min = 1.0, max = 5.0 }
//! opacity = { min = 0.4, max = 0.7 }
//!
//! [scroll]
//! lookahead_margin = 100.0
//!
//! [navbar]
//! brand = "Jane Doe"
//!
//! [footer]
//! description = "Building things for the web and the terminal."
//! email = "jane@example.com"
//!
//! [[sections]]
//! id = "home"
//! title = "Home"
//! body = ["Hi, I build things."]
//! ```

mod error;
mod settings;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::{MAX_PARTICLE_COUNT, ParticleSettings};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use settings::{
    FooterSettings, NavbarSettings, PageSettings, ScrollSettings, SectionConfig,
};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "folio.log";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Particle background settings.
    pub particles: ParticleSettings,
    /// Scroll behavior.
    pub scroll: ScrollSettings,
    /// Page colors.
    pub page: PageSettings,
    /// Navigation bar.
    pub navbar: NavbarSettings,
    /// Footer below the last section.
    pub footer: FooterSettings,
    /// Sections in page order.
    pub sections: Vec<SectionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particles: ParticleSettings::default(),
            scroll: ScrollSettings::default(),
            page: PageSettings::default(),
            navbar: NavbarSettings::default(),
            footer: FooterSettings::default(),
            sections: SectionConfig::defaults(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "folio", "folio")
}

impl Config {
    /// Path of the configuration file in the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Path of the log file in the platform data directory, if one exists.
    pub fn log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if p.count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::Invalid(format!(
                "particles.count must be at most {}",
                MAX_PARTICLE_COUNT
            )));
        }
        if !p.speed.is_finite() {
            return Err(ConfigError::Invalid("particles.speed must be finite".into()));
        }
        let ranges = [("particles.size", p.size), ("particles.opacity", p.opacity)];
        for (name, range) in ranges {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite", name)));
            }
        }
        if p.size.min < 0.0 || p.size.max < 0.0 {
            return Err(ConfigError::Invalid("particles.size must not be negative".into()));
        }
        if !self.scroll.lookahead_margin.is_finite() {
            return Err(ConfigError::Invalid(
                "scroll.lookahead_margin must be finite".into(),
            ));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.as_str().is_empty() {
                return Err(ConfigError::Invalid("section id must not be empty".into()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }
}
