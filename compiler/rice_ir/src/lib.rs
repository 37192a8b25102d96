//! Rice IR - Declaration Model
//!
//! This crate contains the data structures rebuilt from a compiler AST dump:
//! - Scope segments (namespaces and enclosing records)
//! - Record types with their fields and generic parameters
//! - Generic scopes, one per open template declaration
//! - Naming helpers shared by the code generator and the model printer
//!
//! # Design Philosophy
//!
//! - **Relations, not references**: a scope segment names its record through a
//!   [`RecordSlot`] index into the parser's open-record stack, plus a rendered
//!   name snapshot that stays valid after the record is finalized.
//! - **Order is data**: fields and generic parameters keep dump order.

mod model;
pub mod naming;

pub use model::{
    Field, GenericParamKind, GenericParameter, GenericScope, RecordSlot, RecordType, ScopeKind,
    ScopePath, ScopeSegment,
};

/// Separator between scope segments in a qualified name.
pub const SCOPE_SEPARATOR: &str = "::";
