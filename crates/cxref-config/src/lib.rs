//! # cxref-config
//!
//! Layered configuration loading for cxref using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CXREF_*` prefix, `__` as separator)
//! 2. Project-level `.cxref/config.toml`
//! 3. User-level `~/.config/cxref/config.toml`
//! 4. Built-in defaults
//!
//! `CXREF_RESOLVER__MAX_HEADER_DEPTH=8` sets `resolver.max_header_depth`,
//! `CXREF_PROJECTS__PROJECTS_BASE=/srv/checkouts` sets `projects.projects_base`.

mod error;
mod projects;
mod resolver;

pub use error::ConfigError;
pub use projects::ProjectsConfig;
pub use resolver::ResolverConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CxrefConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
}

impl CxrefConfig {
    /// Load configuration from TOML files and the environment, then validate it.
    ///
    /// Does not read `.env`; use [`load_with_dotenv`](Self::load_with_dotenv) for that.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// [`load`](Self::load) after reading `.env` from the current directory
    /// or one of its parents. A missing `.env` is not an error.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain, exposed so tests and callers can layer more on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".cxref/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CXREF_").split("__"))
    }

    /// Reject settings no resolution could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()?;
        self.projects.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cxref").join("config.toml"))
    }
}
