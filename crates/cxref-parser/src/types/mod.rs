//! Core data types returned by the resolver.

mod globals;
mod header;
mod line_span;
mod symbol_definition;
mod symbol_kind;
mod syntax_node;
mod usage;

pub use globals::{GlobalVariable, GlobalVariables};
pub use header::{HeaderReference, IncludeStyle, ResolvedHeader};
pub use line_span::LineSpan;
pub use symbol_definition::SymbolDefinition;
pub use symbol_kind::SymbolKind;
pub use syntax_node::SyntaxNode;
pub use usage::{HeaderUsage, UsageCriterion};
