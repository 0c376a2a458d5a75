use serde::{Deserialize, Serialize};

/// The kind of a resolved symbol definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Macro,
    Enum,
    Type,
    Variable,
    Function,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Macro => "macro",
            Self::Enum => "enum",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::Function => "function",
        };
        write!(f, "{s}")
    }
}
