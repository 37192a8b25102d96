//! Rice Meta Compiler CLI

use ricec::commands::{explain_error, generate_file, print_file};
use ricec::{init_tracing, parse_generate_options, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "generate" => {
            if args.len() < 3 {
                eprintln!("Usage: ricec generate <dump|-> --header=<path> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --header=<path>     Header the dump was produced from (required)");
                eprintln!("  -o <path>           Output file (default: <header stem>_meta.hpp)");
                eprintln!("  --print             Print the declaration model");
                eprintln!("  --save-dump=<path>  Keep a copy of the raw dump");
                std::process::exit(1);
            }
            parse_generate_options(&args[2..]).and_then(|options| {
                let summary = generate_file(&options)?;
                eprintln!(
                    "Generated {} binding(s) in {}",
                    summary.records,
                    summary.output.display()
                );
                Ok(())
            })
        }
        "print" => {
            if args.len() < 3 {
                eprintln!("Usage: ricec print <dump|->");
                std::process::exit(1);
            }
            print_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Rice Meta Compiler {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: ricec --explain <CODE>");
                eprintln!("Example: ricec --explain W0001");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        if matches!(error, CliError::UnknownCommand(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Rice Meta Compiler");
    println!();
    println!("Usage: ricec <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <dump|->    Generate reflection bindings from a clang AST dump");
    println!("  print <dump|->       Print the reflectable records found in a dump");
    println!("  --explain <code>     Explain a diagnostic code (e.g., W0001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Generate options:");
    println!("  --header=<path>     Header the dump was produced from (required)");
    println!("  -o <path>           Output file (default: <header stem>_meta.hpp)");
    println!("  --print             Print the declaration model");
    println!("  --save-dump=<path>  Keep a copy of the raw dump");
    println!();
    println!("The dump comes from:");
    println!("  clang++ -Xclang -ast-dump -fsyntax-only -fno-color-diagnostics <header>");
    println!();
    println!("Examples:");
    println!("  ricec generate shapes.ast --header=shapes.hpp");
    println!("  clang++ -Xclang -ast-dump -fsyntax-only shapes.hpp | ricec generate - --header=shapes.hpp");
    println!("  ricec print shapes.ast");
    println!("  RUST_LOG=rice_parse=debug ricec print shapes.ast");
}
