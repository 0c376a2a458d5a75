use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub(super) use crate::types::{SymbolDefinition, SymbolKind};
pub(super) use crate::{ResolverOptions, SourceUnit};

mod cross_file;
mod enums;
mod functions;
mod globals;
mod header_usage;

fn texts(defs: &[SymbolDefinition]) -> Vec<&str> {
    defs.iter().map(|d| d.text.as_str()).collect()
}

fn names(defs: &[SymbolDefinition]) -> Vec<&str> {
    defs.iter().map(|d| d.name.as_str()).collect()
}

/// Lay out a throwaway project tree from `(relative path, contents)` pairs.
fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    for (path, contents) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("mkdir should succeed");
        }
        fs::write(&full, contents).expect("write should succeed");
    }
    dir
}

fn open_in(dir: &TempDir, file: &str) -> SourceUnit {
    open_with(dir, file, ResolverOptions::default())
}

fn open_with(dir: &TempDir, file: &str, options: ResolverOptions) -> SourceUnit {
    SourceUnit::open(&dir.path().join(file), Some(dir.path()), options)
        .unwrap_or_else(|e| panic!("{file} should open: {e}"))
}

fn defined_in(def: &SymbolDefinition, file: &str) -> bool {
    def.file.as_deref().is_some_and(|p| p.ends_with(Path::new(file)))
}
