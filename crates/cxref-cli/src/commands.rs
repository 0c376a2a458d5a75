//! One handler per subcommand. Each opens the file, runs one query and
//! prints the result.

use std::path::Path;

use anyhow::Context;
use cxref_parser::{
    GlobalVariables, HeaderUsage, LineSpan, ResolvedHeader, ResolverOptions, SourceUnit,
    SymbolDefinition, SyntaxNode,
};
use serde::Serialize;

use crate::cli::{Commands, GlobalFlags};
use crate::output::output;

pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    options: &ResolverOptions,
) -> anyhow::Result<()> {
    let open = |file: &Path| open_unit(file, flags, options);
    match command {
        Commands::Macro { file, name } => {
            let unit = open(file)?;
            output(&Definitions::of(&unit, unit.resolve_macro(name)), flags.format)
        }
        Commands::Enum { file, name } => {
            let unit = open(file)?;
            output(&Definitions::of(&unit, unit.resolve_enum_constant(name)), flags.format)
        }
        Commands::Type { file, name } => {
            let unit = open(file)?;
            output(&Definitions::of(&unit, unit.resolve_type(name)), flags.format)
        }
        Commands::Field {
            file,
            type_name,
            field,
        } => {
            let unit = open(file)?;
            let response = FieldResponse {
                type_name,
                field,
                field_type: unit.field_type(type_name, field),
            };
            output(&response, flags.format)
        }
        Commands::Var { file, name, line } => {
            let unit = open(file)?;
            let scope = match line {
                Some(line) => unit.enclosing_function(cleaned_line(&unit, *line)?),
                None => None,
            };
            let found = unit.resolve_local_variable(scope.as_ref(), name);
            output(&Definitions::of(&unit, found), flags.format)
        }
        Commands::Function { file, name } => {
            let unit = open(file)?;
            let response = FunctionResponse {
                signature: unit.function_signature(name),
                definition: unit
                    .function_by_name(name)
                    .map(|def| Definition::of(&unit, def)),
            };
            output(&response, flags.format)
        }
        Commands::Locate { file, line } => {
            let unit = open(file)?;
            output(&LocateResponse::build(&unit, *line)?, flags.format)
        }
        Commands::Switch { file, line } => {
            let unit = open(file)?;
            let span = unit.enclosing_switch(cleaned_line(&unit, *line)?);
            output(&original_span(&unit, span), flags.format)
        }
        Commands::Headers { file } => {
            let unit = open(file)?;
            let headers: Vec<ResolvedHeader> = unit.resolved_headers();
            output(&headers, flags.format)
        }
        Commands::HeaderUsed { file, header } => {
            let unit = open(file)?;
            let targets = match header {
                Some(raw) => vec![raw.clone()],
                None => unit.list_headers().into_iter().map(|h| h.raw).collect(),
            };
            let mut report = Vec::with_capacity(targets.len());
            for raw in targets {
                let usage = unit
                    .is_header_used(&raw)
                    .with_context(|| format!("failed to analyze header {raw}"))?;
                report.push(HeaderUsageEntry { header: raw, usage });
            }
            output(&report, flags.format)
        }
        Commands::Globals { file } => {
            let unit = open(file)?;
            let globals: GlobalVariables = unit.resolve_global_variables();
            output(&globals, flags.format)
        }
        Commands::Lines { file } => {
            let unit = open(file)?;
            let pairs: Vec<LinePair> = unit
                .lines()
                .iter()
                .map(|(original, cleaned)| LinePair { original, cleaned })
                .collect();
            output(&pairs, flags.format)
        }
    }
}

fn open_unit(
    file: &Path,
    flags: &GlobalFlags,
    options: &ResolverOptions,
) -> anyhow::Result<SourceUnit> {
    let unit = SourceUnit::open(file, flags.project.as_deref(), options.clone())
        .with_context(|| format!("failed to open {}", file.display()))?;
    if !unit.is_cross_file() {
        tracing::info!(file = %file.display(), "no project root; resolving within the file only");
    }
    Ok(unit)
}

fn cleaned_line(unit: &SourceUnit, original: usize) -> anyhow::Result<usize> {
    unit.cleaned_line(original)
        .with_context(|| format!("line {original} is blank, a comment, or past the end of the file"))
}

/// Cleaned span translated back to original lines where possible.
fn original_span(unit: &SourceUnit, span: LineSpan) -> LineSpan {
    LineSpan::new(
        unit.original_line(span.start).unwrap_or(span.start),
        unit.original_line(span.end).unwrap_or(span.end),
    )
}

#[derive(Debug, Serialize)]
struct Definition {
    #[serde(flatten)]
    definition: SymbolDefinition,
    /// `span` in original-file lines.
    original_span: LineSpan,
}

impl Definition {
    fn of(unit: &SourceUnit, definition: SymbolDefinition) -> Self {
        // Definitions from headers carry header-cleaned lines; only local
        // ones map back through this unit.
        let original_span = if definition.file.as_deref() == unit.path() {
            original_span(unit, definition.span)
        } else {
            definition.span
        };
        Self {
            definition,
            original_span,
        }
    }
}

#[derive(Debug, Serialize)]
struct Definitions(Vec<Definition>);

impl Definitions {
    fn of(unit: &SourceUnit, found: Vec<SymbolDefinition>) -> Self {
        Self(found.into_iter().map(|d| Definition::of(unit, d)).collect())
    }
}

#[derive(Debug, Serialize)]
struct FieldResponse<'a> {
    type_name: &'a str,
    field: &'a str,
    field_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct FunctionResponse {
    signature: Option<String>,
    definition: Option<Definition>,
}

#[derive(Debug, Serialize)]
struct LocateResponse {
    line: usize,
    cleaned_line: usize,
    node: Option<SyntaxNode>,
    enclosing_function: Option<String>,
    enclosing_macro: Option<String>,
    calls: Vec<String>,
    identifiers: Vec<String>,
}

impl LocateResponse {
    fn build(unit: &SourceUnit, line: usize) -> anyhow::Result<Self> {
        let cleaned = cleaned_line(unit, line)?;
        Ok(Self {
            line,
            cleaned_line: cleaned,
            node: unit.locate(cleaned),
            enclosing_function: unit.enclosing_function(cleaned).and_then(|f| f.name),
            enclosing_macro: unit.enclosing_macro(cleaned).and_then(|m| m.name),
            calls: unit.calls_in_line(cleaned),
            identifiers: unit.identifiers_in_line(cleaned),
        })
    }
}

#[derive(Debug, Serialize)]
struct HeaderUsageEntry {
    header: String,
    usage: HeaderUsage,
}

#[derive(Debug, Serialize)]
struct LinePair {
    original: usize,
    cleaned: usize,
}
