//! Command handlers for the `ricec` CLI.
//!
//! Each submodule implements one command. Reading the dump and reporting
//! diagnostics are shared and live here.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use rice_diagnostic::Diagnostic;

use crate::options::STDIN_INPUT;
use crate::CliError;

mod explain;
mod generate;
mod print;

pub use explain::explain_error;
pub use generate::{generate_file, GenerateSummary};
pub use print::print_file;

/// Read a dump from `input`, or from standard input when it is `-`.
pub fn read_dump(input: &str) -> Result<String, CliError> {
    if input == STDIN_INPUT {
        let mut dump = String::new();
        io::stdin()
            .read_to_string(&mut dump)
            .map_err(|e| CliError::io("read", "<stdin>", e))?;
        return Ok(dump);
    }
    fs::read_to_string(input).map_err(|e| CliError::io("read", input, e))
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|e| CliError::io("write", path, e))
}

/// Print diagnostics to stderr, one block each.
pub(crate) fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}
