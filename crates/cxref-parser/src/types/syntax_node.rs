use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::LineSpan;

/// Owned snapshot of a node in a unit's cleaned syntax tree.
///
/// Snapshots outlive the borrow of the tree they came from. A unit can
/// re-find the live node from a snapshot it produced via its byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: String,
    /// Declared name for definition-like nodes (functions, macros, types, variables).
    pub name: Option<String>,
    pub text: String,
    pub span: LineSpan,
    pub byte_range: Range<usize>,
}
