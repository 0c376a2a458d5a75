use crate::helpers::{declared_identifier, declarators};
use crate::parser::find_kinds;
use crate::types::{SymbolDefinition, SymbolKind};
use crate::unit::SourceUnit;

impl SourceUnit {
    /// Function defined in this unit, or a function-like macro standing in
    /// for one.
    #[must_use]
    pub fn function_by_name(&self, name: &str) -> Option<SymbolDefinition> {
        if let Some(func) = self
            .function_definitions()
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
        {
            return Some(SymbolDefinition {
                kind: SymbolKind::Function,
                name: name.to_string(),
                text: func.text.clone(),
                span: func.span,
                file: self.path().map(ToOwned::to_owned),
            });
        }
        self.macro_nodes(name)
            .iter()
            .find(|node| node.kind() == "preproc_function_def")
            .map(|node| self.definition(SymbolKind::Macro, node))
    }

    /// `storage return-type declarator` of a function defined in this unit,
    /// e.g. `static int *make(int n)`.
    #[must_use]
    pub fn function_signature(&self, name: &str) -> Option<String> {
        let snapshot = self
            .function_definitions()
            .iter()
            .find(|f| f.name.as_deref() == Some(name))?;
        let func = self.live_node(snapshot)?;
        let mut parts: Vec<String> = func
            .children()
            .filter(|c| c.kind() == "storage_class_specifier")
            .map(|c| c.text().to_string())
            .collect();
        parts.extend(func.field("type").map(|t| t.text().to_string()));
        parts.extend(func.field("declarator").map(|d| d.text().to_string()));
        Some(parts.join(" "))
    }

    /// Declared type of `field` in the aggregate `type_name` ultimately
    /// names.
    ///
    /// The last link of the type chain is re-parsed on its own, so
    /// aggregates found in headers work the same as local ones.
    #[must_use]
    pub fn field_type(&self, type_name: &str, field: &str) -> Option<String> {
        let chain = self.resolve_type(type_name);
        let aggregate = chain.last()?;
        let standalone = SourceUnit::from_text(&format!("{};", aggregate.text));
        find_kinds(&standalone.root(), &["field_declaration"])
            .iter()
            .find(|decl| {
                declarators(decl)
                    .iter()
                    .filter_map(|d| declared_identifier(d, false))
                    .any(|id| id.text() == field)
            })
            .and_then(|decl| decl.field("type"))
            .map(|t| t.text().to_string())
    }
}
