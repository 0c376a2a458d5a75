//! Reading source files and deciding which project they belong to.

use std::path::{Component, Path, PathBuf};

use crate::error::ParserError;
use crate::parser::is_c_source;

/// Default ceiling on nested header traversal per top-level call.
pub const DEFAULT_MAX_HEADER_DEPTH: usize = 6;

/// Default number of directory entries a header search may visit.
pub const DEFAULT_MAX_SEARCH_ENTRIES: usize = 200_000;

/// Knobs shared by a unit and every header unit built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Nested header levels a single resolution may enter.
    pub max_header_depth: usize,
    /// Directory entries a project-tree header search may visit before giving up.
    pub max_search_entries: usize,
    /// Follow symlinks while searching the project tree.
    pub follow_links: bool,
    /// Directory holding many checked-out projects. A file under
    /// `<base>/<name>/…` with no explicit root gets `<base>/<name>` as its root.
    pub projects_base: Option<PathBuf>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_header_depth: DEFAULT_MAX_HEADER_DEPTH,
            max_search_entries: DEFAULT_MAX_SEARCH_ENTRIES,
            follow_links: false,
            projects_base: None,
        }
    }
}

/// Read a `.c`/`.h` file and decode it to text.
pub(crate) fn read_source(path: &Path) -> Result<String, ParserError> {
    if !is_c_source(path) {
        return Err(ParserError::UnsupportedFile(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes).ok_or_else(|| ParserError::UndetectableEncoding(path.to_path_buf()))
}

/// UTF-8 (BOM stripped) when valid, Latin-1 for other text, `None` for
/// anything containing NUL bytes.
fn decode(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }
    if bytes.contains(&0) {
        return None;
    }
    tracing::debug!("source is not UTF-8, decoding as Latin-1");
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Decide the project root for `file`.
///
/// An explicit root that does not contain the file is rejected with a
/// warning; the unit then runs in single-file mode.
pub(crate) fn project_root_for(
    file: &Path,
    explicit: Option<&Path>,
    options: &ResolverOptions,
) -> Option<PathBuf> {
    let file = canonical(file);

    if let Some(root) = explicit {
        let root = canonical(root);
        if file.starts_with(&root) {
            return Some(root);
        }
        tracing::warn!(
            file = %file.display(),
            root = %root.display(),
            "file is not inside the project root; cross-file resolution disabled"
        );
        return None;
    }

    let base = canonical(options.projects_base.as_deref()?);
    let project = file.strip_prefix(&base).ok()?.components().next()?;
    match project {
        Component::Normal(name) => {
            let root = base.join(name);
            tracing::debug!(root = %root.display(), "inferred project root");
            Some(root)
        }
        _ => None,
    }
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
