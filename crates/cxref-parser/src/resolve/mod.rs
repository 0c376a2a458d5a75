//! Symbol resolution against one unit, falling back to its headers.
//!
//! Every operation has a public entry point starting a fresh call chain and
//! a `*_at` variant taking the chain's current [`Depth`](crate::Depth), which
//! header traversal re-enters on sibling units.

mod enums;
mod functions;
mod globals;
mod macros;
mod types;
mod variables;

pub use types::TypeNamespace;

#[cfg(test)]
mod tests;
