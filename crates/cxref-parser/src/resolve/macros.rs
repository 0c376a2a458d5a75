use crate::headers::{Depth, HeaderQuery};
use crate::parser::CNode;
use crate::types::{SymbolDefinition, SymbolKind};
use crate::unit::SourceUnit;

impl SourceUnit {
    /// Object-like and function-like `#define`s named `name`.
    ///
    /// Searches this unit first, then its headers.
    #[must_use]
    pub fn resolve_macro(&self, name: &str) -> Vec<SymbolDefinition> {
        self.resolve_macro_at(name, Depth::ROOT)
    }

    pub fn resolve_macro_at(&self, name: &str, depth: Depth) -> Vec<SymbolDefinition> {
        let local: Vec<_> = self
            .macro_nodes(name)
            .iter()
            .map(|node| self.definition(SymbolKind::Macro, node))
            .collect();
        if !local.is_empty() {
            return local;
        }
        self.with_each_header(HeaderQuery::Macro(name), depth)
    }

    pub(crate) fn macro_nodes(&self, name: &str) -> Vec<CNode<'_>> {
        self.macro_definitions()
            .iter()
            .filter(|node| node.name.as_deref() == Some(name))
            .filter_map(|node| self.live_node(node))
            .collect()
    }
}
