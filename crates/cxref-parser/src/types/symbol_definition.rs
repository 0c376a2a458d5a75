use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{LineSpan, SymbolKind};

/// A definition found by one of the resolver operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    pub kind: SymbolKind,
    pub name: String,
    /// Full text of the defining node in the cleaned source.
    pub text: String,
    pub span: LineSpan,
    /// File the definition lives in; `None` for in-memory units.
    pub file: Option<PathBuf>,
}
