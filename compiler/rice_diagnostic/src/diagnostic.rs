use std::fmt;

use crate::ErrorCode;

/// A warning anchored to a line of the dump.
///
/// Every condition the parser reports is recoverable, so diagnostics carry
/// no severity: they are all printed as warnings.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main message.
    pub message: String,
    /// 1-based dump line, 0 when unknown.
    pub line: u32,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            line: 0,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning [{}]: {}", self.code, self.message)?;

        if self.line > 0 {
            write!(f, "\n  --> dump line {}", self.line)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

// Helper constructors

/// A record declared inside a generic ancestor; it is left out of the output.
pub fn nested_in_generic(record: &str, ancestor: &str, line: u32) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W0001)
        .with_message(format!(
            "record `{record}` is nested inside generic record `{ancestor}`"
        ))
        .with_line(line)
        .with_note("no binding is generated for this record")
}

/// A generic record taking a template template parameter; it is left out of
/// the output.
pub fn template_template_parameter(record: &str, param: &str, line: u32) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W0002)
        .with_message(format!(
            "record `{record}` takes template template parameter `{param}`"
        ))
        .with_line(line)
        .with_note("no binding is generated for this record")
}

#[cfg(test)]
mod tests;
