//! Following `#include`s: locating headers on disk and re-running symbol
//! queries against them.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::resolve::TypeNamespace;
use crate::source::ResolverOptions;
use crate::types::{HeaderReference, IncludeStyle, ResolvedHeader, SymbolDefinition};
use crate::unit::SourceUnit;

/// Number of headers entered so far by one top-level resolution.
///
/// Passed by value down every recursive call, so independent call chains
/// (including ones on other threads) never share a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Depth(usize);

impl Depth {
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn deeper(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Resolver operations that may be delegated to a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderQuery<'a> {
    Macro(&'a str),
    EnumConstant(&'a str),
    Type {
        name: &'a str,
        namespace: TypeNamespace,
    },
}

impl HeaderQuery<'_> {
    /// Run the query against `unit`, which was reached at `depth`.
    #[must_use]
    pub fn run(self, unit: &SourceUnit, depth: Depth) -> Vec<SymbolDefinition> {
        match self {
            Self::Macro(name) => unit.resolve_macro_at(name, depth),
            Self::EnumConstant(name) => unit.resolve_enum_constant_at(name, depth),
            Self::Type { name, namespace } => unit.resolve_type_at(name, namespace, depth),
        }
    }
}

impl SourceUnit {
    /// Every `#include` target in document order. Includes naming a macro
    /// instead of a literal path are skipped.
    #[must_use]
    pub fn list_headers(&self) -> Vec<HeaderReference> {
        crate::parser::find_kinds(&self.root(), &["preproc_include"])
            .iter()
            .filter_map(|include| include.field("path"))
            .filter(|path| matches!(path.kind().as_ref(), "string_literal" | "system_lib_string"))
            .map(|path| HeaderReference::parse(&path.text()))
            .collect()
    }

    /// [`list_headers`](Self::list_headers) with each include resolved.
    #[must_use]
    pub fn resolved_headers(&self) -> Vec<ResolvedHeader> {
        self.list_headers()
            .into_iter()
            .map(|reference| ResolvedHeader {
                path: self.resolve_header_path(&reference.raw),
                reference,
            })
            .collect()
    }

    /// Find the file an include refers to.
    ///
    /// Quoted includes are first tried next to this file. Otherwise the
    /// project tree is searched for a file whose path ends with the include
    /// path; hits are remembered for the unit's lifetime. `None` means the
    /// header is outside the project, or the unit has no project at all.
    #[must_use]
    pub fn resolve_header_path(&self, raw: &str) -> Option<PathBuf> {
        if !self.is_cross_file() {
            return None;
        }
        let reference = HeaderReference::parse(raw);
        let cleaned = reference.cleaned();
        if cleaned.is_empty() {
            return None;
        }

        if reference.style == IncludeStyle::Quoted {
            let sibling = self.path()?.parent()?.join(cleaned);
            if sibling.is_file() {
                return Some(sibling);
            }
        }

        if let Some(hit) = self.header_cache.borrow().get(cleaned) {
            return Some(hit.clone());
        }
        let found = search_project(self.project_root()?, cleaned, self.options())?;
        self.header_cache
            .borrow_mut()
            .insert(cleaned.to_string(), found.clone());
        Some(found)
    }

    /// Run `query` on each resolvable header in turn and return the first
    /// non-empty result.
    ///
    /// Stops without looking once `depth` has reached the configured
    /// ceiling, which also ends include cycles.
    pub fn with_each_header(&self, query: HeaderQuery<'_>, depth: Depth) -> Vec<SymbolDefinition> {
        if !self.is_cross_file() {
            return Vec::new();
        }
        if depth.get() >= self.options().max_header_depth {
            tracing::debug!(depth = depth.get(), ?query, "header depth ceiling reached");
            return Vec::new();
        }

        for reference in self.list_headers() {
            let Some(path) = self.resolve_header_path(&reference.raw) else {
                tracing::trace!(header = %reference.raw, "header not in project; skipping");
                continue;
            };
            let header = match self.header_unit(&path) {
                Ok(unit) => unit,
                Err(error) => {
                    tracing::warn!(header = %path.display(), %error, "cannot open header; skipping");
                    continue;
                }
            };
            tracing::debug!(header = %path.display(), depth = depth.get() + 1, ?query, "searching header");
            let found = query.run(&header, depth.deeper());
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

/// Walk `root` for a file whose path ends with `include` component-wise,
/// in file-name order, visiting at most `max_search_entries` entries.
fn search_project(root: &Path, include: &str, options: &ResolverOptions) -> Option<PathBuf> {
    let needle = Path::new(include);
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    for (visited, entry) in builder.build().enumerate() {
        if visited >= options.max_search_entries {
            tracing::warn!(
                root = %root.display(),
                include,
                limit = options.max_search_entries,
                "header search hit its entry limit"
            );
            return None;
        }
        let Ok(entry) = entry else {
            continue;
        };
        if entry.file_type().is_some_and(|ft| ft.is_file()) && entry.path().ends_with(needle) {
            return Some(entry.into_path());
        }
    }
    None
}
