use serde::{Deserialize, Serialize};

/// The usage test that proved a header is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageCriterion {
    /// A function called here is defined or declared in the header.
    Functions,
    /// A type referenced here is defined in the header.
    Types,
    /// An all-uppercase identifier used here is a macro the header defines.
    Macros,
    /// An `extern` declaration here matches a definition in the header.
    ExternVariables,
}

/// Outcome of asking whether an included header is actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "criterion")]
pub enum HeaderUsage {
    Used(UsageCriterion),
    Unused,
    /// Header not found in the project; possibly a standard header.
    NotInProject,
}

impl HeaderUsage {
    #[must_use]
    pub const fn is_used(self) -> bool {
        matches!(self, Self::Used(_))
    }
}

impl std::fmt::Display for HeaderUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Used(criterion) => write!(f, "used ({criterion:?})"),
            Self::Unused => write!(f, "unused"),
            Self::NotInProject => {
                write!(f, "not found in project, possibly a standard header")
            }
        }
    }
}
