//! `SourceUnit`: one parsed C file and everything cached about it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ParserError;
use crate::helpers::{definition_name, line_span, node_text};
use crate::index::SyntaxIndex;
use crate::normalize::{LineCorrespondence, normalize};
use crate::parser::{AstTree, CNode, parse_source};
use crate::source::{ResolverOptions, project_root_for, read_source};
use crate::types::{SymbolDefinition, SymbolKind, SyntaxNode};

/// One parsed C file.
///
/// All structural queries run against the cleaned text (comments and blank
/// lines removed). Line numbers accepted and returned by the query methods
/// are 1-based cleaned lines; use [`cleaned_line`](Self::cleaned_line) to
/// translate from the original file.
///
/// Caches (resolved header paths, memoized node collections) are owned by
/// the unit and live exactly as long as it does.
pub struct SourceUnit {
    original: String,
    cleaned: String,
    lines: LineCorrespondence,
    tree: AstTree,
    path: Option<PathBuf>,
    project_root: Option<PathBuf>,
    options: ResolverOptions,
    pub(crate) header_cache: RefCell<HashMap<String, PathBuf>>,
    pub(crate) index: SyntaxIndex,
}

impl SourceUnit {
    /// Build a unit from in-memory text. Cross-file resolution is disabled.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, ResolverOptions::default())
    }

    #[must_use]
    pub fn from_text_with(text: &str, options: ResolverOptions) -> Self {
        tracing::debug!("no file path given; cross-file resolution disabled");
        Self::build(text.to_string(), None, None, options)
    }

    /// Read and parse a `.c` or `.h` file.
    ///
    /// When `project_root` is given and contains the file (or one can be
    /// inferred from [`ResolverOptions::projects_base`]), symbols missing
    /// from this file are looked up in its `#include`d headers.
    ///
    /// # Errors
    /// Returns `ParserError` if the file is not C, cannot be read, or its
    /// encoding cannot be detected.
    pub fn open(
        path: &Path,
        project_root: Option<&Path>,
        options: ResolverOptions,
    ) -> Result<Self, ParserError> {
        let text = read_source(path)?;
        let root = project_root_for(path, project_root, &options);
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Ok(Self::build(text, Some(path), root, options))
    }

    fn build(
        original: String,
        path: Option<PathBuf>,
        project_root: Option<PathBuf>,
        options: ResolverOptions,
    ) -> Self {
        let normalized = normalize(&original);
        let tree = parse_source(&normalized.cleaned);
        Self {
            original,
            cleaned: normalized.cleaned,
            lines: normalized.lines,
            tree,
            path,
            project_root,
            options,
            header_cache: RefCell::new(HashMap::new()),
            index: SyntaxIndex::default(),
        }
    }

    /// Sibling unit for a header reached from this one; shares the project
    /// root and options.
    pub(crate) fn header_unit(&self, header: &Path) -> Result<Self, ParserError> {
        Self::open(header, self.project_root.as_deref(), self.options.clone())
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    #[must_use]
    pub const fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// `true` when header lookups are possible: the unit came from a file
    /// inside a known project.
    #[must_use]
    pub const fn is_cross_file(&self) -> bool {
        self.path.is_some() && self.project_root.is_some()
    }

    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn cleaned_text(&self) -> &str {
        &self.cleaned
    }

    #[must_use]
    pub const fn lines(&self) -> &LineCorrespondence {
        &self.lines
    }

    /// Cleaned line for an original line; `None` for comment or blank lines.
    #[must_use]
    pub fn cleaned_line(&self, original: usize) -> Option<usize> {
        self.lines.cleaned_line(original)
    }

    #[must_use]
    pub fn original_line(&self, cleaned: usize) -> Option<usize> {
        self.lines.original_line(cleaned)
    }

    /// Number of lines in the cleaned text.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.cleaned.lines().count()
    }

    /// Root `translation_unit` node of the cleaned tree.
    #[must_use]
    pub fn root(&self) -> CNode<'_> {
        self.tree.root()
    }

    /// Re-find the live node a snapshot was taken from.
    #[must_use]
    pub fn live_node(&self, snapshot: &SyntaxNode) -> Option<CNode<'_>> {
        let target = &snapshot.byte_range;
        let mut current = self.root();
        loop {
            if current.range() == *target && current.kind() == snapshot.kind.as_str() {
                return Some(current);
            }
            let next = current.children().find(|c| {
                let range = c.range();
                range.start <= target.start && target.end <= range.end
            })?;
            current = next;
        }
    }

    /// Definition record for a node of this unit.
    pub(crate) fn definition(&self, kind: SymbolKind, node: &CNode<'_>) -> SymbolDefinition {
        SymbolDefinition {
            kind,
            name: definition_name(node).unwrap_or_default(),
            text: node_text(node),
            span: line_span(node),
            file: self.path.clone(),
        }
    }
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("path", &self.path)
            .field("project_root", &self.project_root)
            .field("lines", &self.line_count())
            .finish_non_exhaustive()
    }
}
