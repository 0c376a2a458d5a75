//! Where checked-out projects live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectsConfig {
    /// Directory holding one subdirectory per project. Files under it get
    /// their project's directory as the root when none is given.
    #[serde(default)]
    pub projects_base: Option<PathBuf>,
}

impl ProjectsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match &self.projects_base {
            Some(base) if base.as_os_str().is_empty() => Err(ConfigError::InvalidValue {
                field: "projects.projects_base".to_string(),
                reason: "must not be empty; omit it instead".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
