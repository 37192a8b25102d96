//! The `generate` command: dump in, binding header out.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use rice_codegen::{generate_into, print_model, WriterEmitter};
use tracing::info;

use super::{read_dump, report_diagnostics, write_file};
use crate::{CliError, GenerateOptions};

/// What a `generate` run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Where the generated header was written.
    pub output: PathBuf,
    /// Number of bindings generated.
    pub records: usize,
    /// Number of warnings reported.
    pub warnings: usize,
}

/// Run `ricec generate` with parsed options.
pub fn generate_file(options: &GenerateOptions) -> Result<GenerateSummary, CliError> {
    let input = options
        .input
        .as_deref()
        .ok_or(CliError::MissingArgument("dump path (use `-` for stdin)"))?;
    let header = options
        .header
        .as_ref()
        .ok_or(CliError::MissingArgument("--header=<path>"))?;
    let output_path = options
        .output_path()
        .ok_or(CliError::MissingArgument("output path"))?;

    let dump = read_dump(input)?;
    if let Some(path) = &options.save_dump {
        write_file(path, &dump)?;
    }

    let start = Instant::now();
    let parsed = rice_parse::parse(&dump);
    let parse_time = start.elapsed();
    report_diagnostics(&parsed.diagnostics);

    if options.print {
        print!("{}", print_model(&parsed.records));
    }

    let start = Instant::now();
    let file = File::create(&output_path).map_err(|e| CliError::io("create", &output_path, e))?;
    let mut emitter = WriterEmitter::new(BufWriter::new(file));
    generate_into(&parsed.records, &header.to_string_lossy(), &mut emitter);
    emitter
        .finish()
        .map_err(|e| CliError::io("write", &output_path, e))?;
    let generate_time = start.elapsed();

    info!(
        output = %output_path.display(),
        records = parsed.records.len(),
        parse_ms = parse_time.as_millis(),
        generate_ms = generate_time.as_millis(),
        "generated bindings"
    );

    Ok(GenerateSummary {
        output: output_path,
        records: parsed.records.len(),
        warnings: parsed.diagnostics.len(),
    })
}
