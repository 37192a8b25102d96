//! Rice Codegen - Reflection Binding Generator
//!
//! Renders retained record types into `Meta::TypeOf<T>` specializations for
//! the compile-time reflection helpers, and prints the declaration model for
//! inspection.
//!
//! # Design
//!
//! - **Pure**: output depends only on the record list and the header path.
//!   The same model always yields byte-identical text.
//! - **Emitter-based**: rendering writes to an [`Emitter`], so the same code
//!   builds an in-memory string or streams straight to a file.
//!
//! # Usage
//!
//! ```ignore
//! let output = rice_parse::parse(&dump);
//! let header = rice_codegen::generate(&output.records, "shapes.hpp");
//! ```

mod emitter;
mod generate;
mod printer;

pub use emitter::{Emitter, StringEmitter, WriterEmitter};
pub use generate::{generate, generate_into, REFLECTION_HELPER_INCLUDE};
pub use printer::print_model;
