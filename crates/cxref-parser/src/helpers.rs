//! Name and span helpers for C declarator nodes.

use crate::parser::CNode;
use crate::types::{LineSpan, SyntaxNode};

/// Node kinds that can appear in a declarator position.
const DECLARATOR_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "pointer_declarator",
    "array_declarator",
    "init_declarator",
    "function_declarator",
    "parenthesized_declarator",
    "attributed_declarator",
];

/// 1-based cleaned-line span of a node.
///
/// Preprocessor directives own their terminating newline, which would
/// otherwise push their end onto the following line.
pub(crate) fn line_span(node: &CNode<'_>) -> LineSpan {
    let start = node.start_pos().line() + 1;
    let mut end = node.end_pos().line() + 1;
    if end > start && node.text().ends_with('\n') {
        end -= 1;
    }
    LineSpan::new(start, end)
}

/// Node text without the trailing newline preprocessor directives carry.
pub(crate) fn node_text(node: &CNode<'_>) -> String {
    node.text().trim_end().to_string()
}

pub(crate) fn same_node(a: &CNode<'_>, b: &CNode<'_>) -> bool {
    a.range() == b.range() && a.kind() == b.kind()
}

pub(crate) fn snapshot(node: &CNode<'_>) -> SyntaxNode {
    SyntaxNode {
        kind: node.kind().to_string(),
        name: definition_name(node),
        text: node_text(node),
        span: line_span(node),
        byte_range: node.range(),
    }
}

/// Follow a declarator chain down to the identifier it declares.
///
/// With `through_functions == false` a chain passing through a
/// `function_declarator` yields `None`: it declares a function, not a
/// variable.
pub(crate) fn declared_identifier<'r>(
    node: &CNode<'r>,
    through_functions: bool,
) -> Option<CNode<'r>> {
    match node.kind().as_ref() {
        "identifier" | "type_identifier" | "field_identifier" => Some(node.clone()),
        "function_declarator" if !through_functions => None,
        "init_declarator"
        | "pointer_declarator"
        | "array_declarator"
        | "function_declarator"
        | "attributed_declarator"
        | "parenthesized_declarator" => node
            .field("declarator")
            .or_else(|| node.children().find(|c| c.is_named()))
            .and_then(|inner| declared_identifier(&inner, through_functions)),
        _ => None,
    }
}

/// Declarator children of a `declaration`, `type_definition` or
/// `parameter_declaration`, excluding the `type` child.
pub(crate) fn declarators<'r>(node: &CNode<'r>) -> Vec<CNode<'r>> {
    let type_node = node.field("type");
    node.children()
        .filter(|c| DECLARATOR_KINDS.contains(&c.kind().as_ref()))
        .filter(|c| type_node.as_ref().is_none_or(|t| !same_node(t, c)))
        .collect()
}

/// Names a `type_definition` introduces (`typedef struct {..} A, *PA;` has two).
pub(crate) fn typedef_names(node: &CNode<'_>) -> Vec<String> {
    declarators(node)
        .iter()
        .filter_map(|d| declared_identifier(d, true))
        .map(|id| id.text().to_string())
        .collect()
}

/// `true` if any declarator of a `declaration` declares a function.
pub(crate) fn declares_function(node: &CNode<'_>) -> bool {
    declarators(node).iter().any(|d| {
        declared_identifier(d, false).is_none() && declared_identifier(d, true).is_some()
    })
}

/// Name a definition-like node introduces, if any.
pub(crate) fn definition_name(node: &CNode<'_>) -> Option<String> {
    let name = match node.kind().as_ref() {
        "function_definition" => node
            .field("declarator")
            .and_then(|d| declared_identifier(&d, true)),
        "declaration" | "type_definition" | "parameter_declaration" | "field_declaration" => {
            declarators(node)
                .first()
                .and_then(|d| declared_identifier(d, true))
        }
        "struct_specifier" | "union_specifier" | "enum_specifier" | "preproc_def"
        | "preproc_function_def" | "enumerator" => node.field("name"),
        _ => None,
    };
    name.map(|n| n.text().to_string())
}
