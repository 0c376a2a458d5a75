use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `cxref` binary.
#[derive(Debug, Parser)]
#[command(name = "cxref", version, about = "Resolve symbols, lines and headers in C sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root; headers are searched for below it
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Directory of checked-out projects, used to infer the project root
    #[arg(long, global = true)]
    pub projects_base: Option<PathBuf>,

    /// Nested header levels one lookup may enter
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            project: self.project.clone(),
            projects_base: self.projects_base.clone(),
            max_depth: self.max_depth,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Flags command handlers need after startup.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub project: Option<PathBuf>,
    pub projects_base: Option<PathBuf>,
    pub max_depth: Option<usize>,
}

/// Line numbers taken and printed by commands are lines of the original file.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Definitions of a macro
    Macro { file: PathBuf, name: String },

    /// Enum declaring a constant
    Enum { file: PathBuf, name: String },

    /// Definition chain of a type name through its typedefs
    Type { file: PathBuf, name: String },

    /// Declared type of a struct or union field
    Field {
        file: PathBuf,
        type_name: String,
        field: String,
    },

    /// Declaration of a variable and the chain of its type
    Var {
        file: PathBuf,
        name: String,
        /// Search the function containing this line first
        #[arg(short, long)]
        line: Option<usize>,
    },

    /// Function definition and signature
    Function { file: PathBuf, name: String },

    /// Syntax node owning a line, with its calls and identifiers
    Locate { file: PathBuf, line: usize },

    /// Span of the switch statement enclosing a line
    Switch { file: PathBuf, line: usize },

    /// Includes and the files they resolve to
    Headers { file: PathBuf },

    /// Whether included headers are used
    HeaderUsed {
        file: PathBuf,
        /// Include as written, e.g. '"fan.h"' or '<onlp/fan.h>'; all includes when omitted
        header: Option<String>,
    },

    /// File-scope variables, split into externs and definitions
    Globals { file: PathBuf },

    /// Original-to-cleaned line correspondence
    Lines { file: PathBuf },
}
