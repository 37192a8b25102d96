//! The `print` command: show the declaration model of a dump.

use rice_codegen::print_model;

use super::{read_dump, report_diagnostics};
use crate::CliError;

/// Print every reflectable record found in the dump at `input`.
pub fn print_file(input: &str) -> Result<(), CliError> {
    let dump = read_dump(input)?;
    let parsed = rice_parse::parse(&dump);
    report_diagnostics(&parsed.diagnostics);
    print!("{}", print_model(&parsed.records));
    Ok(())
}
