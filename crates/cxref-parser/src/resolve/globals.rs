use crate::helpers::{declarators, declared_identifier, snapshot};
use crate::parser::{CNode, find_kinds};
use crate::types::{GlobalVariable, GlobalVariables};
use crate::unit::SourceUnit;

impl SourceUnit {
    /// File-scope variables, split into `extern` declarations without an
    /// initializer and non-`extern` definitions. Function prototypes are
    /// skipped.
    #[must_use]
    pub fn resolve_global_variables(&self) -> GlobalVariables {
        let mut globals = GlobalVariables::default();
        for decl in find_kinds(&self.root(), &["declaration"]) {
            if decl.ancestors().any(|a| a.kind() == "function_definition") {
                continue;
            }
            let is_extern = has_extern_storage(&decl);
            let type_text = decl
                .field("type")
                .map(|t| t.text().to_string())
                .unwrap_or_default();
            for declarator in declarators(&decl) {
                let Some(id) = declared_identifier(&declarator, false) else {
                    continue;
                };
                let variable = GlobalVariable {
                    name: id.text().to_string(),
                    type_text: type_text.clone(),
                    declaration: snapshot(&decl),
                };
                let initialized = declarator.kind() == "init_declarator";
                match (is_extern, initialized) {
                    (true, false) => {
                        globals.externs.insert(variable.name.clone(), variable);
                    }
                    (false, _) => {
                        globals.definitions.insert(variable.name.clone(), variable);
                    }
                    (true, true) => {
                        tracing::debug!(name = %variable.name, "initialized extern skipped");
                    }
                }
            }
        }
        globals
    }
}

fn has_extern_storage(decl: &CNode<'_>) -> bool {
    decl.children()
        .any(|c| c.kind() == "storage_class_specifier" && c.text() == "extern")
}
