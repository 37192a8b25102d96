//! Diagnostics surfaced to the user.
//!
//! The dump parser is best effort: malformed lines are skipped silently.
//! Only conditions that change what gets generated without the user asking
//! for it become diagnostics.
//!
//! - Error codes for searchability
//! - One message per problem, anchored to a dump line
//! - Notes explaining the consequence

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{nested_in_generic, template_template_parameter, Diagnostic};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
