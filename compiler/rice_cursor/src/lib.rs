//! Low-level reader for compiler AST dump text.
//!
//! The dump is fully materialized before parsing starts, so the cursor is a
//! plain byte index into an immutable `&str`. It is [`Copy`]: saving and
//! restoring a position is a [`Mark`], and every lookahead method leaves the
//! cursor where it was.

mod cursor;

pub use cursor::{Cursor, Mark};
