use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Delimiter style of an `#include` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeStyle {
    /// `#include "x.h"`
    Quoted,
    /// `#include <x.h>`
    System,
}

/// The target of one `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderReference {
    /// Include text as written, delimiters included.
    pub raw: String,
    pub style: IncludeStyle,
}

impl HeaderReference {
    /// Classify raw include text. Text that is neither quoted nor
    /// angle-bracketed is treated as a system reference.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let style = if raw.starts_with('"') && raw.ends_with('"') {
            IncludeStyle::Quoted
        } else {
            IncludeStyle::System
        };
        Self {
            raw: raw.to_string(),
            style,
        }
    }

    /// Include path with the surrounding delimiters stripped.
    #[must_use]
    pub fn cleaned(&self) -> &str {
        self.raw.trim_matches(|c| matches!(c, '"' | '<' | '>'))
    }
}

/// An include together with the file it resolved to. `path` is `None` for
/// headers outside the project (usually system headers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHeader {
    #[serde(flatten)]
    pub reference: HeaderReference,
    pub path: Option<PathBuf>,
}
