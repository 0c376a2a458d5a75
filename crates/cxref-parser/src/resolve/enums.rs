use crate::headers::{Depth, HeaderQuery};
use crate::parser::find_kinds;
use crate::types::{SymbolDefinition, SymbolKind};
use crate::unit::SourceUnit;

impl SourceUnit {
    /// Enum specifiers declaring an enumerator named `name`.
    #[must_use]
    pub fn resolve_enum_constant(&self, name: &str) -> Vec<SymbolDefinition> {
        self.resolve_enum_constant_at(name, Depth::ROOT)
    }

    pub fn resolve_enum_constant_at(&self, name: &str, depth: Depth) -> Vec<SymbolDefinition> {
        let local: Vec<_> = find_kinds(&self.root(), &["enumerator"])
            .iter()
            .filter(|e| e.field("name").is_some_and(|n| n.text() == name))
            .filter_map(|e| e.parent()?.parent())
            .filter(|owner| owner.kind() == "enum_specifier")
            .map(|owner| SymbolDefinition {
                name: name.to_string(),
                ..self.definition(SymbolKind::Enum, &owner)
            })
            .collect();
        if !local.is_empty() {
            return local;
        }
        self.with_each_header(HeaderQuery::EnumConstant(name), depth)
    }
}
