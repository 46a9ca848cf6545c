//! Command handlers for the `emd` CLI.
//!
//! Each submodule implements one command. Shared pieces (`read_file`, the
//! error type, span-to-line conversion) live here in the module root.

use emd_eval::EvalError;
use emd_ir::ParseError;

mod check;
mod gen;
mod prims;

pub use check::{check_source, CheckReport};
pub use gen::{generate_source, parse_gen_options, GenOptions};
pub use prims::list_primitives;

/// Anything that makes a command fail. The binary prints it and exits 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("{line}:{column}: {source}")]
    Parse {
        line: usize,
        column: usize,
        source: ParseError,
    },

    #[error("tree {tree}: {source}")]
    Eval { tree: usize, source: EvalError },

    #[error("invalid option `{0}`")]
    InvalidOption(String),

    #[error("missing file path")]
    MissingPath,
}

impl CliError {
    /// Attach the 1-based line and column of the error's start to `error`.
    pub fn parse(source_text: &str, error: ParseError) -> Self {
        let (line, column) = line_column(source_text, error.span.to_range().start);
        CliError::Parse {
            line,
            column,
            source: error,
        }
    }
}

/// 1-based line and column (in chars) of byte `offset` in `text`.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let before = text.get(..offset).unwrap_or(text);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests;
