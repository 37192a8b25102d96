//! Entities built incrementally while walking the dump.

use smallvec::SmallVec;

use crate::naming;

/// Index of a record on the parser's open-record stack.
///
/// Only meaningful while that record is still open. Once it is finalized and
/// popped the slot may be reused by a sibling, so holders must rely on the
/// rendered name snapshot in [`ScopeSegment`] instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordSlot(usize);

impl RecordSlot {
    #[inline]
    pub const fn new(index: usize) -> Self {
        RecordSlot(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What kind of declaration opened a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Namespace,
    /// A record body. `generic` is true when the record carries its own
    /// generic parameter list.
    Record { slot: RecordSlot, generic: bool },
}

/// A named scope entered during descent.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeSegment {
    /// Bare name as written in the dump. Empty for anonymous namespaces.
    pub name: String,
    /// Name as it must be spelled when referenced, e.g. `Box<T>`.
    pub rendered: String,
    pub kind: ScopeKind,
}

impl ScopeSegment {
    pub fn namespace(name: impl Into<String>) -> Self {
        let name = name.into();
        ScopeSegment {
            rendered: name.clone(),
            name,
            kind: ScopeKind::Namespace,
        }
    }

    /// Segment for an open record, snapshotting its rendered name.
    pub fn record(slot: RecordSlot, record: &RecordType) -> Self {
        ScopeSegment {
            name: record.name.clone(),
            rendered: naming::with_generic_arguments(&record.name, &record.generic_params),
            kind: ScopeKind::Record {
                slot,
                generic: record.is_generic(),
            },
        }
    }

    /// Slot of the record this segment names, if any.
    pub fn record_slot(&self) -> Option<RecordSlot> {
        match self.kind {
            ScopeKind::Record { slot, .. } => Some(slot),
            ScopeKind::Namespace => None,
        }
    }

    pub fn is_generic_record(&self) -> bool {
        matches!(self.kind, ScopeKind::Record { generic: true, .. })
    }
}

/// Enclosing scopes, outermost first.
pub type ScopePath = SmallVec<[ScopeSegment; 4]>;

/// Kind of a generic parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum GenericParamKind {
    /// `typename T` / `class T`.
    Type,
    /// Non-type parameter such as `int N`.
    Value { ty: String },
    /// Template template parameter (`template <class> class C`). Its own
    /// parameter list is not read.
    Template,
}

/// One generic parameter of a template declaration.
///
/// `depth` and `index` are the dump's own numbering. They are only used to
/// check the parameter belongs to the innermost open generic scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GenericParameter {
    pub depth: u32,
    pub index: u32,
    pub name: String,
    pub kind: GenericParamKind,
    /// Variadic (`typename... Ts`).
    pub pack: bool,
}

impl GenericParameter {
    /// A plain `typename` parameter.
    pub fn type_param(depth: u32, index: u32, name: impl Into<String>) -> Self {
        GenericParameter {
            depth,
            index,
            name: name.into(),
            kind: GenericParamKind::Type,
            pack: false,
        }
    }
}

/// Parameters of one open template declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GenericScope {
    pub params: Vec<GenericParameter>,
    /// Dump depth of the template's children. A record declared at exactly
    /// this depth is the templated entity and takes `params`.
    pub body_depth: u32,
}

impl GenericScope {
    pub fn new(body_depth: u32) -> Self {
        GenericScope {
            params: Vec::new(),
            body_depth,
        }
    }
}

/// A data member of a record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub name: String,
    /// Type text exactly as spelled in the dump.
    pub ty: String,
    /// Free-form annotation strings, in declaration order.
    pub attributes: Vec<String>,
    /// Marked `not_reflectable`: kept in the model, never generated.
    pub excluded: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            ty: ty.into(),
            attributes: Vec::new(),
            excluded: false,
        }
    }
}

/// A `struct` or `class` with a definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordType {
    /// Scope path at the point of declaration.
    pub path: ScopePath,
    pub name: String,
    pub fields: Vec<Field>,
    /// Empty for non-generic records.
    pub generic_params: Vec<GenericParameter>,
    pub reflectable: bool,
    /// 1-based dump line of the declaration.
    pub line: u32,
}

impl RecordType {
    pub fn new(path: ScopePath, name: impl Into<String>, line: u32) -> Self {
        RecordType {
            path,
            name: name.into(),
            fields: Vec::new(),
            generic_params: Vec::new(),
            reflectable: false,
            line,
        }
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }

    /// True if any enclosing record carries generic parameters.
    pub fn is_nested_in_generic(&self) -> bool {
        self.path.iter().any(ScopeSegment::is_generic_record)
    }

    /// Fully qualified name including this record's generic arguments.
    pub fn qualified_name(&self) -> String {
        naming::qualified_name(&self.path, &self.name, &self.generic_params)
    }

    /// Qualified name of the enclosing scope, without the record itself.
    pub fn location(&self) -> String {
        naming::location(&self.path)
    }

    /// `template <...>` heading, or an empty string.
    pub fn generic_heading(&self) -> String {
        naming::generic_heading(&self.generic_params)
    }

    /// First template template parameter, if any.
    pub fn template_template_param(&self) -> Option<&GenericParameter> {
        self.generic_params
            .iter()
            .find(|p| p.kind == GenericParamKind::Template)
    }

    /// Fields that take part in generated output.
    pub fn reflected_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.excluded)
    }
}
