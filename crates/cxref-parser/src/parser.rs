//! ast-grep wrapper for the C grammar.

use std::path::Path;

use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// Document type backing every parsed C tree.
pub type CDoc = StrDoc<SupportLang>;

/// The concrete AST tree type returned by [`parse_source`].
pub type AstTree = ast_grep_core::AstGrep<CDoc>;

/// A live node borrowed from an [`AstTree`].
pub type CNode<'r> = ast_grep_core::Node<'r, CDoc>;

/// Returns `true` for paths the resolver accepts as C translation units or headers.
#[must_use]
pub fn is_c_source(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("c" | "h")
    )
}

/// Parse C source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::C.ast_grep(source)
}

/// Matcher for a single node kind of the C grammar.
pub(crate) fn kind(name: &str) -> KindMatcher {
    KindMatcher::new(name, SupportLang::C)
}

/// Matcher for any of several node kinds.
pub(crate) fn any_kind(names: &[&str]) -> Any<KindMatcher> {
    Any::new(names.iter().map(|name| kind(name)).collect::<Vec<_>>())
}

/// All nodes below (and including) `node` whose kind is one of `names`,
/// in document order.
pub(crate) fn find_kinds<'r>(node: &CNode<'r>, names: &[&str]) -> Vec<CNode<'r>> {
    node.find_all(any_kind(names))
        .map(|m| m.get_node().clone())
        .collect()
}
