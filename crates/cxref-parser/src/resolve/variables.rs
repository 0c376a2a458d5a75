use crate::headers::Depth;
use crate::helpers::{declarators, declared_identifier};
use crate::parser::{CNode, find_kinds};
use crate::resolve::types::referenced_type;
use crate::types::{SymbolDefinition, SymbolKind, SyntaxNode};
use crate::unit::SourceUnit;

impl SourceUnit {
    /// Declaration of a variable visible from `scope`, followed by the
    /// definition chain of its declared type.
    ///
    /// `scope` is usually a function definition from
    /// [`enclosing_function`](Self::enclosing_function). The first matching
    /// declaration or parameter in that scope wins; failing that, file scope
    /// is searched, and failing that the name is resolved as a macro.
    #[must_use]
    pub fn resolve_local_variable(
        &self,
        scope: Option<&SyntaxNode>,
        name: &str,
    ) -> Vec<SymbolDefinition> {
        self.resolve_local_variable_at(scope, name, Depth::ROOT)
    }

    pub fn resolve_local_variable_at(
        &self,
        scope: Option<&SyntaxNode>,
        name: &str,
        depth: Depth,
    ) -> Vec<SymbolDefinition> {
        let root = self.root();
        let scoped = scope
            .and_then(|s| self.live_node(s))
            .and_then(|s| variable_declaration(&s, name));
        let Some(decl) = scoped.or_else(|| variable_declaration(&root, name)) else {
            tracing::debug!(name, "no declaration found; trying macros");
            return self.resolve_macro_at(name, depth);
        };

        let mut found = vec![SymbolDefinition {
            name: name.to_string(),
            ..self.definition(SymbolKind::Variable, &decl)
        }];
        let declared = decl
            .field("type")
            .filter(|t| t.field("body").is_none())
            .and_then(|t| referenced_type(&t));
        if let Some((type_name, namespace)) = declared {
            found.extend(self.resolve_type_at(&type_name, namespace, depth));
        }
        found
    }
}

/// First declaration or parameter under `node` declaring variable `name`.
fn variable_declaration<'r>(node: &CNode<'r>, name: &str) -> Option<CNode<'r>> {
    find_kinds(node, &["declaration", "parameter_declaration"])
        .into_iter()
        .find(|decl| {
            declarators(decl)
                .iter()
                .filter_map(|d| declared_identifier(d, false))
                .any(|id| id.text() == name)
        })
}
