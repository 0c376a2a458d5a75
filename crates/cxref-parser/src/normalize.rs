//! Comment and blank-line stripping with original-to-cleaned line mapping.
//!
//! Block comments become the same number of newlines they spanned, line
//! comments are truncated, and lines that are blank after that are dropped.
//! Cleaning only ever deletes, so the cleaned lines are an order-preserving
//! subsequence of the original (trimmed) lines and a two-cursor walk recovers
//! the correspondence.

use std::collections::BTreeMap;

/// Mapping from original 1-based line numbers to cleaned 1-based line numbers.
///
/// Only lines that survived cleaning have an entry. Pure comment or blank
/// lines have none; asking for them yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCorrespondence {
    forward: BTreeMap<usize, usize>,
    reverse: BTreeMap<usize, usize>,
}

impl LineCorrespondence {
    fn insert(&mut self, original: usize, cleaned: usize) {
        self.forward.insert(original, cleaned);
        self.reverse.insert(cleaned, original);
    }

    /// Cleaned line for an original line, if the line survived cleaning.
    #[must_use]
    pub fn cleaned_line(&self, original: usize) -> Option<usize> {
        self.forward.get(&original).copied()
    }

    /// Original line a cleaned line came from.
    #[must_use]
    pub fn original_line(&self, cleaned: usize) -> Option<usize> {
        self.reverse.get(&cleaned).copied()
    }

    /// `(original, cleaned)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.forward.iter().map(|(&o, &c)| (o, c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub cleaned: String,
    pub lines: LineCorrespondence,
}

/// Strip comments and blank lines from `raw`, recording where each
/// surviving line ended up.
#[must_use]
pub fn normalize(raw: &str) -> Normalized {
    let stripped = strip_comments(raw);
    let original_lines: Vec<&str> = stripped.lines().collect();
    let cleaned_lines: Vec<&str> = original_lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut lines = LineCorrespondence::default();
    let (mut old, mut new) = (0, 0);
    while old < original_lines.len() && new < cleaned_lines.len() {
        if original_lines[old].trim() == cleaned_lines[new].trim() {
            lines.insert(old + 1, new + 1);
            new += 1;
        }
        old += 1;
    }

    Normalized {
        cleaned: cleaned_lines.join("\n"),
        lines,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Str(char),
    LineComment,
    BlockComment,
}

/// Replace block comments with their newlines and drop line comments.
///
/// String and character literals are skipped so `"http://"` survives.
fn strip_comments(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut state = Scan::Code;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Scan::Code => match c {
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Scan::BlockComment;
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = Scan::LineComment;
                }
                '"' | '\'' => {
                    out.push(c);
                    state = Scan::Str(c);
                }
                _ => out.push(c),
            },
            Scan::Str(quote) => {
                out.push(c);
                if c == '\\' {
                    if let Some(&next) = chars.peek() {
                        if next != '\n' {
                            out.push(next);
                            chars.next();
                        }
                    }
                } else if c == quote || c == '\n' {
                    state = Scan::Code;
                }
            }
            Scan::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = Scan::Code;
                }
            }
            Scan::BlockComment => {
                if c == '\n' {
                    out.push('\n');
                } else if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Scan::Code;
                }
            }
        }
    }
    out
}
