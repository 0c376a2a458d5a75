//! Symbol resolver limits.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default nested header levels one resolution may enter. Kept equal to
/// `cxref_parser::DEFAULT_MAX_HEADER_DEPTH`; the CLI tests check it.
const fn default_max_header_depth() -> usize {
    6
}

/// Default directory entries a header search may visit.
const fn default_max_search_entries() -> usize {
    200_000
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Ceiling on nested `#include` traversal per lookup.
    #[serde(default = "default_max_header_depth")]
    pub max_header_depth: usize,

    /// Entries a project-tree header search may visit before giving up.
    #[serde(default = "default_max_search_entries")]
    pub max_search_entries: usize,

    /// Follow symlinks while searching for headers.
    #[serde(default)]
    pub follow_links: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_header_depth: default_max_header_depth(),
            max_search_entries: default_max_search_entries(),
            follow_links: false,
        }
    }
}

impl ResolverConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_header_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.max_header_depth".to_string(),
                reason: "must be at least 1 to follow any header".to_string(),
            });
        }
        if self.max_search_entries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.max_search_entries".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ResolverConfig::default();
        assert_eq!(config.max_header_depth, 6);
        assert_eq!(config.max_search_entries, 200_000);
        assert!(!config.follow_links);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = ResolverConfig {
            max_header_depth: 0,
            ..ResolverConfig::default()
        };
        let err = config.validate().expect_err("zero depth");
        assert!(err.to_string().contains("resolver.max_header_depth"));
    }
}
