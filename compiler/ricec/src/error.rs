use std::io;
use std::path::PathBuf;

/// Failures of the command-line driver.
///
/// The dump parser itself never fails; these cover arguments and files.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot {action} `{}`: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown diagnostic code `{0}`")]
    UnknownCode(String),
}

impl CliError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
