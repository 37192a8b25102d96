//! Rice meta compiler driver.
//!
//! Reads a clang AST dump (`clang++ -Xclang -ast-dump -fsyntax-only`), which
//! the caller produces beforehand, and writes the reflection binding header
//! for it. Spawning the compiler is left to the build system.

use std::sync::Once;

pub mod commands;
mod error;
pub mod options;

pub use error::CliError;
pub use options::{parse_generate_options, GenerateOptions};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=rice_parse=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
