//! # cxref-parser
//!
//! On-demand symbol resolution for C sources, built on ast-grep's C grammar.
//!
//! A [`SourceUnit`] is one parsed file. Comments and blank lines are stripped
//! before parsing and a [`LineCorrespondence`] maps original line numbers to
//! cleaned ones. Queries on a unit cover:
//! - **Location**: the node owning a line, the enclosing function, switch or
//!   macro, and the calls and identifiers on a line
//! - **Resolution**: macros, enum constants, type chains through `typedef`s,
//!   local and global variables, functions and struct fields
//! - **Headers**: listing and locating `#include`s, following them when a
//!   symbol is not defined locally, and deciding whether one is used at all
//!
//! Nothing is indexed up front and nothing outlives the unit. Header lookups
//! need both a file path and a project root; units built from text resolve
//! within themselves only.

pub mod error;
mod headers;
mod helpers;
mod index;
mod locate;
pub mod normalize;
pub mod parser;
mod resolve;
mod source;
pub mod types;
mod unit;
mod usage;

pub use error::ParserError;
pub use headers::{Depth, HeaderQuery};
pub use normalize::{LineCorrespondence, Normalized, normalize};
pub use parser::{is_c_source, parse_source};
pub use resolve::TypeNamespace;
pub use source::{DEFAULT_MAX_HEADER_DEPTH, DEFAULT_MAX_SEARCH_ENTRIES, ResolverOptions};
pub use types::*;
pub use unit::SourceUnit;
