//! Deciding whether an included header is actually needed.

use std::collections::BTreeSet;

use crate::error::ParserError;
use crate::locate::callee_names;
use crate::parser::find_kinds;
use crate::types::{HeaderUsage, UsageCriterion};
use crate::unit::SourceUnit;

/// Stand-in for "is a macro" without preprocessing. All-caps enumerators
/// and constants are misclassified.
fn looks_like_macro(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

impl SourceUnit {
    /// Whether the header `raw` (as written in an `#include`) is used here.
    ///
    /// Four checks run in order and the first that finds a shared name
    /// decides:
    /// functions called here that the header defines or declares,
    /// type names used here (minus local ones) that the header defines,
    /// all-caps identifiers used here (minus local macros) that the header
    /// defines as macros, and `extern` variables here that the header
    /// defines with the same type.
    ///
    /// # Errors
    /// Returns `ParserError` if the header resolves but cannot be read.
    pub fn is_header_used(&self, raw: &str) -> Result<HeaderUsage, ParserError> {
        let Some(path) = self.resolve_header_path(raw) else {
            return Ok(HeaderUsage::NotInProject);
        };
        let header = self.header_unit(&path)?;
        let root = self.root();

        let calls: BTreeSet<String> = callee_names(&root).into_iter().collect();
        if shares_any(&calls, &header.function_names()) {
            return Ok(HeaderUsage::Used(UsageCriterion::Functions));
        }

        let own_types = self.aggregate_names();
        let types: BTreeSet<String> = find_kinds(&root, &["type_identifier"])
            .iter()
            .map(|t| t.text().to_string())
            .filter(|t| !own_types.contains(t))
            .collect();
        if shares_any(&types, &header.aggregate_names()) {
            return Ok(HeaderUsage::Used(UsageCriterion::Types));
        }

        let own_macros = self.macro_names();
        let macro_uses: BTreeSet<String> = find_kinds(&root, &["identifier"])
            .iter()
            .map(|id| id.text().to_string())
            .filter(|id| looks_like_macro(id) && !own_macros.contains(id))
            .collect();
        if shares_any(&macro_uses, &header.macro_names()) {
            return Ok(HeaderUsage::Used(UsageCriterion::Macros));
        }

        let externs: BTreeSet<String> = self
            .resolve_global_variables()
            .externs
            .values()
            .map(|v| v.signature_key())
            .collect();
        let definitions: BTreeSet<String> = header
            .resolve_global_variables()
            .definitions
            .values()
            .map(|v| v.signature_key())
            .collect();
        if shares_any(&externs, &definitions) {
            return Ok(HeaderUsage::Used(UsageCriterion::ExternVariables));
        }

        tracing::debug!(header = %path.display(), "no shared names; header unused");
        Ok(HeaderUsage::Unused)
    }
}

fn shares_any(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
    a.intersection(b).next().is_some()
}
