//! The `explain` command: describe a diagnostic code.

use rice_diagnostic::ErrorCode;

use crate::CliError;

/// Print the description of `code`, e.g. `W0001`.
pub fn explain_error(code: &str) -> Result<(), CliError> {
    let code = ErrorCode::parse(code).ok_or_else(|| CliError::UnknownCode(code.to_string()))?;
    println!("{code}: {}", code.description());
    Ok(())
}
