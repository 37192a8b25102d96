use std::fmt;

/// Codes for all meta compiler diagnostics.
///
/// Format: W#### for warnings. Processing always continues after a warning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Record nested inside a record that has generic parameters
    W0001,
    /// Generic record with a template template parameter
    W0002,
}

impl ErrorCode {
    /// The code as written in output, e.g. `W0001`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
        }
    }

    /// Short explanation shown by `ricec --explain`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::W0001 => {
                "A record declared inside a generic record cannot be bound: its \
                 enclosing template parameters are not deducible from the \
                 nested type. The record is skipped."
            }
            ErrorCode::W0002 => {
                "A generic record takes a template template parameter. The \
                 parameter's own template parameter list is not read from the \
                 dump, so no matching binding heading can be written. The \
                 record is skipped."
            }
        }
    }

    /// Look up a code from its textual form.
    pub fn parse(code: &str) -> Option<ErrorCode> {
        match code.trim().to_ascii_uppercase().as_str() {
            "W0001" => Some(ErrorCode::W0001),
            "W0002" => Some(ErrorCode::W0002),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
