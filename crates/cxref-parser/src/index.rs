//! Memoized node collections shared by every query on a unit.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use crate::helpers::{declares_function, snapshot};
use crate::parser::find_kinds;
use crate::types::SyntaxNode;
use crate::unit::SourceUnit;

/// Lazily computed, once per unit.
#[derive(Debug, Default)]
pub(crate) struct SyntaxIndex {
    functions: OnceCell<Vec<SyntaxNode>>,
    declarations: OnceCell<Vec<SyntaxNode>>,
    aggregates: OnceCell<Vec<SyntaxNode>>,
    macros: OnceCell<Vec<SyntaxNode>>,
}

impl SourceUnit {
    /// Every `function_definition` node, in document order.
    pub fn function_definitions(&self) -> &[SyntaxNode] {
        self.index.functions.get_or_init(|| {
            find_kinds(&self.root(), &["function_definition"])
                .iter()
                .map(snapshot)
                .collect()
        })
    }

    /// Every declaration whose declarator is a function declarator (prototypes).
    pub fn function_declarations(&self) -> &[SyntaxNode] {
        self.index.declarations.get_or_init(|| {
            find_kinds(&self.root(), &["declaration"])
                .iter()
                .filter(|decl| declares_function(decl))
                .map(snapshot)
                .collect()
        })
    }

    /// Struct/union specifiers with a field list, enum specifiers with a
    /// body, and typedef declarations.
    pub fn aggregate_definitions(&self) -> &[SyntaxNode] {
        self.index.aggregates.get_or_init(|| {
            find_kinds(
                &self.root(),
                &[
                    "struct_specifier",
                    "union_specifier",
                    "enum_specifier",
                    "type_definition",
                ],
            )
            .iter()
            .filter(|node| node.kind() == "type_definition" || node.field("body").is_some())
            .map(snapshot)
            .collect()
        })
    }

    /// Names of functions this unit defines or declares.
    #[must_use]
    pub fn function_names(&self) -> BTreeSet<String> {
        self.function_definitions()
            .iter()
            .chain(self.function_declarations())
            .filter_map(|node| node.name.clone())
            .collect()
    }

    /// Names of the aggregate types this unit defines. Anonymous aggregates
    /// contribute nothing.
    #[must_use]
    pub fn aggregate_names(&self) -> BTreeSet<String> {
        self.aggregate_definitions()
            .iter()
            .filter_map(|node| node.name.clone())
            .collect()
    }

    /// Object-like and function-like macro definitions, in document order.
    /// Redefinitions are kept.
    pub fn macro_definitions(&self) -> &[SyntaxNode] {
        self.index.macros.get_or_init(|| {
            find_kinds(&self.root(), &["preproc_def", "preproc_function_def"])
                .iter()
                .map(snapshot)
                .collect()
        })
    }

    /// Names of the macros this unit defines.
    #[must_use]
    pub fn macro_names(&self) -> BTreeSet<String> {
        self.macro_definitions()
            .iter()
            .filter_map(|node| node.name.clone())
            .collect()
    }
}
