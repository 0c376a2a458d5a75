//! Mapping cleaned line numbers to the syntax nodes that own them.

use crate::helpers::{line_span, snapshot};
use crate::parser::{CNode, find_kinds};
use crate::types::{LineSpan, SyntaxNode};
use crate::unit::SourceUnit;

/// Parents that absorb a single-line child, keeping the wrapping form.
const WRAPPING_PARENTS: &[&str] = &["preproc_def", "preproc_function_def", "call_expression"];

/// Constructs trailing punctuation (`}` on its own line) is attributed to.
const CONTROL_PARENTS: &[&str] = &[
    "if_statement",
    "while_statement",
    "for_statement",
    "do_statement",
    "switch_statement",
];

fn named_child_containing<'r>(node: &CNode<'r>, line: usize) -> Option<CNode<'r>> {
    node.children()
        .filter(|c| c.is_named())
        .find(|c| line_span(c).contains(line))
}

impl SourceUnit {
    /// The most specific node for a cleaned line.
    ///
    /// Descends from the root into the named child containing `line`. The
    /// first child confined to that single line is returned, or its parent
    /// when the parent is a macro definition or call expression. If the
    /// descent stalls on a multi-line node none of whose named children
    /// cover the line (a lone `}` or `);`), that node is returned, or its
    /// parent when the parent is a conditional, loop or switch.
    #[must_use]
    pub fn locate(&self, line: usize) -> Option<SyntaxNode> {
        self.locate_live(line).map(|node| snapshot(&node))
    }

    pub(crate) fn locate_live(&self, line: usize) -> Option<CNode<'_>> {
        let mut current = self.root();
        let mut entered = false;
        loop {
            let Some(child) = named_child_containing(&current, line) else {
                if !entered {
                    return None;
                }
                return match current.parent() {
                    Some(parent) if CONTROL_PARENTS.contains(&parent.kind().as_ref()) => {
                        Some(parent)
                    }
                    _ => Some(current),
                };
            };
            if line_span(&child).is_single_line() {
                if WRAPPING_PARENTS.contains(&current.kind().as_ref()) {
                    return Some(current);
                }
                return Some(child);
            }
            current = child;
            entered = true;
        }
    }

    /// First function definition whose span contains `line`.
    #[must_use]
    pub fn enclosing_function(&self, line: usize) -> Option<SyntaxNode> {
        self.function_definitions()
            .iter()
            .find(|f| f.span.contains(line))
            .cloned()
    }

    /// Span of the innermost `switch` on the containment chain of `line`,
    /// or the whole file when the line is not inside a switch.
    #[must_use]
    pub fn enclosing_switch(&self, line: usize) -> LineSpan {
        let mut current = self.root();
        let mut last_switch = None;
        while let Some(child) = named_child_containing(&current, line) {
            if child.kind() == "switch_statement" {
                last_switch = Some(line_span(&child));
            }
            current = child;
        }
        last_switch.unwrap_or_else(|| LineSpan::new(1, self.line_count().max(1)))
    }

    /// Macro definition whose span contains `line`.
    #[must_use]
    pub fn enclosing_macro(&self, line: usize) -> Option<SyntaxNode> {
        self.macro_definitions()
            .iter()
            .find(|node| node.span.contains(line))
            .cloned()
    }

    /// Names of functions called within the node at `line`.
    #[must_use]
    pub fn calls_in_line(&self, line: usize) -> Vec<String> {
        let Some(node) = self.locate_live(line) else {
            return Vec::new();
        };
        callee_names(&node)
    }

    /// Identifiers used within the node at `line`.
    ///
    /// Callee names, enumerator names and macro names being defined are
    /// skipped. Variables and object-like macros cannot be told apart
    /// without preprocessing, so both are reported. The closing line of a
    /// function definition yields nothing.
    #[must_use]
    pub fn identifiers_in_line(&self, line: usize) -> Vec<String> {
        let Some(node) = self.locate_live(line) else {
            return Vec::new();
        };
        let closes_function = match node.kind().as_ref() {
            "function_definition" => true,
            "compound_statement" => node
                .parent()
                .is_some_and(|p| p.kind() == "function_definition"),
            _ => false,
        };
        if closes_function && line_span(&node).end == line {
            return Vec::new();
        }
        find_kinds(&node, &["identifier"])
            .iter()
            .filter(|id| {
                id.parent().is_none_or(|p| {
                    !matches!(
                        p.kind().as_ref(),
                        "call_expression" | "enumerator" | "preproc_def" | "preproc_function_def"
                    )
                })
            })
            .map(|id| id.text().to_string())
            .collect()
    }
}

/// Callee identifiers of every call expression under `node`.
pub(crate) fn callee_names(node: &CNode<'_>) -> Vec<String> {
    find_kinds(node, &["call_expression"])
        .iter()
        .filter_map(|call| call.field("function"))
        .filter(|callee| callee.kind() == "identifier")
        .map(|callee| callee.text().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SOURCE: &str = "\
#define SQUARE(x) \\
    ((x) * (x))
int check(int v) {
    if (v > 0) {
        v = SQUARE(v);
    }
    switch (v) {
    case 1:
        log_value(v, 1);
        break;
    default:
        break;
    }
    while (v > 100) {
        v--;
    }
    return v;
}
int tail = 3;";

    fn unit() -> SourceUnit {
        SourceUnit::from_text(SOURCE)
    }

    #[test]
    fn closing_brace_of_if_returns_if_statement() {
        let node = unit().locate(6).expect("line 6 should resolve");
        assert_eq!(node.kind, "if_statement");
        assert_eq!(node.span, LineSpan::new(4, 6));
    }

    #[test]
    fn closing_brace_of_while_returns_while_statement() {
        let node = unit().locate(16).expect("line 16 should resolve");
        assert_eq!(node.kind, "while_statement");
    }

    #[test]
    fn single_line_statement_is_returned_whole() {
        let node = unit().locate(5).expect("line 5 should resolve");
        assert_eq!(node.kind, "expression_statement");
        assert_eq!(node.text, "v = SQUARE(v);");
    }

    #[test]
    fn macro_body_line_stays_inside_the_macro() {
        let node = unit().locate(2).expect("line 2 should resolve");
        assert!(node.span.start >= 1 && node.span.end == 2);
        assert!(node.text.contains("((x) * (x))"));
    }

    #[test]
    fn closing_paren_of_multi_line_call_returns_argument_list() {
        let unit = SourceUnit::from_text("int r = compute(a,\n    b\n);\nint s;");
        let node = unit.locate(3).expect("line 3 should resolve");
        assert_eq!(node.kind, "argument_list");
        assert_eq!(node.span, LineSpan::new(1, 3));
    }

    #[test]
    fn single_line_call_argument_keeps_the_call() {
        let unit = SourceUnit::from_text("int r = compute(a, b);");
        let node = unit.locate(1).expect("line 1 should resolve");
        assert_eq!(node.kind, "declaration");
    }

    #[test]
    fn closing_brace_of_function_returns_its_body() {
        let node = unit().locate(18).expect("line 18 should resolve");
        assert_eq!(node.kind, "compound_statement");
        assert_eq!(node.span, LineSpan::new(3, 18));
    }

    #[test]
    fn line_past_end_is_absent() {
        assert_eq!(unit().locate(40), None);
    }

    #[test]
    fn enclosing_function_by_line() {
        let unit = unit();
        let func = unit.enclosing_function(9).expect("inside check");
        assert_eq!(func.name.as_deref(), Some("check"));
        assert_eq!(unit.enclosing_function(19), None);
    }

    #[test]
    fn enclosing_switch_span() {
        let unit = unit();
        assert_eq!(unit.enclosing_switch(9), LineSpan::new(7, 13));
        assert_eq!(unit.enclosing_switch(5), LineSpan::new(1, 19));
    }

    #[test]
    fn enclosing_macro_covers_continuation_lines() {
        let unit = unit();
        let def = unit.enclosing_macro(2).expect("line 2 is inside SQUARE");
        assert_eq!(def.span, LineSpan::new(1, 2));
        assert_eq!(unit.enclosing_macro(3), None);
    }

    #[test]
    fn calls_on_a_line() {
        assert_eq!(unit().calls_in_line(9), ["log_value"]);
        assert!(unit().calls_in_line(10).is_empty());
    }

    #[test]
    fn identifiers_on_a_line_skip_callees() {
        assert_eq!(unit().identifiers_in_line(9), ["v"]);
        assert_eq!(unit().identifiers_in_line(5), ["v", "v"]);
    }

    #[test]
    fn identifiers_on_function_closing_line_are_empty() {
        assert!(unit().identifiers_in_line(18).is_empty());
    }
}
