use serde::{Deserialize, Serialize};

use crate::headers::{Depth, HeaderQuery};
use crate::helpers::typedef_names;
use crate::parser::CNode;
use crate::types::{SymbolDefinition, SymbolKind};
use crate::unit::SourceUnit;

/// Which C name space a type name is looked up in.
///
/// Struct, union and enum tags live apart from typedef names, so
/// `typedef struct S S;` is one typedef pointing at a different `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNamespace {
    Any,
    Tag,
    Typedef,
}

impl TypeNamespace {
    const fn includes_tags(self) -> bool {
        matches!(self, Self::Any | Self::Tag)
    }

    const fn includes_typedefs(self) -> bool {
        matches!(self, Self::Any | Self::Typedef)
    }
}

impl SourceUnit {
    /// Definition chain for a type name.
    ///
    /// The first entry is the definition of `name` itself. When it is a
    /// typedef of another named type, that type's chain follows, ending at
    /// a struct, union or enum with a body, a typedef of a builtin, or the
    /// first link no file in reach defines.
    #[must_use]
    pub fn resolve_type(&self, name: &str) -> Vec<SymbolDefinition> {
        self.resolve_type_at(name, TypeNamespace::Any, Depth::ROOT)
    }

    pub fn resolve_type_at(
        &self,
        name: &str,
        namespace: TypeNamespace,
        depth: Depth,
    ) -> Vec<SymbolDefinition> {
        let mut visited = Vec::new();
        self.type_chain(name, namespace, depth, &mut visited)
    }

    /// `visited` holds the byte offsets of definitions already on the chain.
    fn type_chain(
        &self,
        name: &str,
        namespace: TypeNamespace,
        depth: Depth,
        visited: &mut Vec<usize>,
    ) -> Vec<SymbolDefinition> {
        let Some(node) = self.type_definition_node(name, namespace) else {
            return self.with_each_header(HeaderQuery::Type { name, namespace }, depth);
        };
        let offset = node.range().start;
        if visited.contains(&offset) {
            tracing::debug!(name, "type chain loops back on itself; stopping");
            return Vec::new();
        }
        visited.push(offset);

        let mut chain = vec![SymbolDefinition {
            name: name.to_string(),
            ..self.definition(SymbolKind::Type, &node)
        }];
        if let Some((next, next_namespace)) = chain_target(&node) {
            chain.extend(self.type_chain(&next, next_namespace, depth, visited));
        }
        chain
    }

    /// First node in this unit defining `name` in `namespace`, taken from
    /// the memoized aggregate collection.
    fn type_definition_node(&self, name: &str, namespace: TypeNamespace) -> Option<CNode<'_>> {
        self.aggregate_definitions()
            .iter()
            .filter(|snap| snap.text.contains(name))
            .filter_map(|snap| self.live_node(snap))
            .find(|node| {
                if node.kind() == "type_definition" {
                    namespace.includes_typedefs() && typedef_names(node).iter().any(|n| n == name)
                } else {
                    namespace.includes_tags()
                        && node.field("name").is_some_and(|n| n.text() == name)
                }
            })
    }
}

/// Named type a typedef refers to. Builtins and anonymous aggregates end
/// the chain.
pub(crate) fn chain_target(node: &CNode<'_>) -> Option<(String, TypeNamespace)> {
    if node.kind() != "type_definition" {
        return None;
    }
    referenced_type(&node.field("type")?)
}

/// Type name a `type` field refers to, with the name space to look it up in.
pub(crate) fn referenced_type(type_node: &CNode<'_>) -> Option<(String, TypeNamespace)> {
    match type_node.kind().as_ref() {
        "type_identifier" => Some((type_node.text().to_string(), TypeNamespace::Typedef)),
        "struct_specifier" | "union_specifier" | "enum_specifier" => type_node
            .field("name")
            .map(|n| (n.text().to_string(), TypeNamespace::Tag)),
        _ => None,
    }
}
