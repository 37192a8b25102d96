//! Options for the `generate` command.

use std::path::{Path, PathBuf};

use crate::CliError;

/// Argument that reads the dump from standard input.
pub const STDIN_INPUT: &str = "-";

/// Suffix appended to the header stem for the default output file.
pub const OUTPUT_SUFFIX: &str = "_meta.hpp";

/// Options for `ricec generate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Dump file path, or `-` for standard input.
    pub input: Option<String>,
    /// Header the dump was produced from (--header=<path>)
    pub header: Option<PathBuf>,
    /// Generated header path (-o, --output)
    pub output: Option<PathBuf>,
    /// Print the declaration model to stdout (--print)
    pub print: bool,
    /// Copy the raw dump to this path (--save-dump=<path>)
    pub save_dump: Option<PathBuf>,
}

impl GenerateOptions {
    /// Where the generated header goes.
    ///
    /// Defaults to `<header stem>_meta.hpp` in the working directory.
    pub fn output_path(&self) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output.clone());
        }
        let stem = self.header.as_deref().and_then(Path::file_stem)?;
        let mut name = stem.to_os_string();
        name.push(OUTPUT_SUFFIX);
        Some(PathBuf::from(name))
    }
}

/// Parse `generate` arguments (everything after the command name).
///
/// `-o` takes the following argument as its value. The first non-option
/// argument is the dump; `-` alone means standard input.
pub fn parse_generate_options(args: &[String]) -> Result<GenerateOptions, CliError> {
    let mut options = GenerateOptions::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if arg == "-o" || arg == "--output" {
            let path = args.next().ok_or(CliError::MissingArgument("output path after -o"))?;
            options.output = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("-o=") {
            options.output = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--header=") {
            options.header = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--save-dump=") {
            options.save_dump = Some(PathBuf::from(path));
        } else if arg == "--print" {
            options.print = true;
        } else if arg.starts_with('-') && arg != STDIN_INPUT {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if options.input.is_none() {
            options.input = Some(arg.clone());
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(options)
}
