//! Type graph node definitions.
//!
//! Every node is addressed by a [`TypeId`] or [`TypePackId`] handle into a
//! [`TypeArena`](crate::TypeArena). Handles are never dereferenced
//! directly: callers go through [`TypeArena::follow`](crate::TypeArena::follow)
//! first, so chains of rebound free variables resolve to their representative
//! before a node's shape is inspected.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Handles
// =============================================================================

/// Handle to a type node.
///
/// The first few ids are the builtin singletons, pre-registered by every
/// arena. Identity comparison against them is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const NEVER: TypeId = TypeId(1);
    pub const UNKNOWN: TypeId = TypeId(2);
    /// The error-recovery type.
    pub const ERROR: TypeId = TypeId(3);
    pub const NIL: TypeId = TypeId(4);
    pub const BOOLEAN: TypeId = TypeId(5);
    pub const NUMBER: TypeId = TypeId(6);
    pub const STRING: TypeId = TypeId(7);
    pub const THREAD: TypeId = TypeId(8);

    /// Number of pre-registered builtin types.
    pub(crate) const BUILTIN_COUNT: u32 = 9;

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }
}

/// Handle to a type pack node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TypePackId(pub u32);

impl TypePackId {
    /// The empty fixed pack `()`.
    pub const EMPTY: TypePackId = TypePackId(0);
    /// The error-recovery pack.
    pub const ERROR: TypePackId = TypePackId(1);
    /// `...any`
    pub const ANY: TypePackId = TypePackId(2);

    pub(crate) const BUILTIN_COUNT: u32 = 3;
}

/// Opaque ownership tag stamped on freshly minted free types and packs.
///
/// The kernel only propagates scopes; it never inspects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const ROOT: ScopeId = ScopeId(0);
}

// =============================================================================
// Type nodes
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveKind {
    Boolean,
    Number,
    String,
    Thread,
}

impl PrimitiveKind {
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Thread => "thread",
        }
    }
}

/// Literal type of a single boolean or string value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SingletonValue {
    Boolean(bool),
    String(String),
}

/// A table field.
///
/// Under the legacy generation a property carries one type used for both
/// reads and writes. Under the split generation the two sides are
/// independent, and either may be absent (read-only / write-only fields).
/// Constructors guarantee at least one side is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Property {
    read_ty: Option<TypeId>,
    write_ty: Option<TypeId>,
}

impl Property {
    /// A property readable and writable at the same type.
    pub const fn rw(ty: TypeId) -> Property {
        Property {
            read_ty: Some(ty),
            write_ty: Some(ty),
        }
    }

    /// A property whose read and write types differ.
    pub const fn rw_split(read: TypeId, write: TypeId) -> Property {
        Property {
            read_ty: Some(read),
            write_ty: Some(write),
        }
    }

    pub const fn readonly(ty: TypeId) -> Property {
        Property {
            read_ty: Some(ty),
            write_ty: None,
        }
    }

    pub const fn writeonly(ty: TypeId) -> Property {
        Property {
            read_ty: None,
            write_ty: Some(ty),
        }
    }

    pub const fn read_ty(&self) -> Option<TypeId> {
        self.read_ty
    }

    pub const fn write_ty(&self) -> Option<TypeId> {
        self.write_ty
    }

    /// The single stored type: the read side, or the write side of a
    /// write-only property.
    pub fn ty(&self) -> TypeId {
        match (self.read_ty, self.write_ty) {
            (Some(read), _) => read,
            (None, Some(write)) => write,
            (None, None) => TypeId::ERROR,
        }
    }

    /// True when reads and writes see the same type.
    pub fn is_shared(&self) -> bool {
        self.read_ty == self.write_ty
    }
}

/// Insertion-ordered property map. Keys are unique.
pub type PropertyMap = IndexMap<String, Property, FxBuildHasher>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TableIndexer {
    pub key: TypeId,
    pub value: TypeId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableType {
    pub props: PropertyMap,
    pub indexer: Option<TableIndexer>,
    /// Attached metatable, itself expected to be a table (or `any`).
    pub metatable: Option<TypeId>,
    /// Display name for named tables (classes, aliases).
    pub name: Option<String>,
}

impl TableType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_props<I, S>(props: I) -> Self
    where
        I: IntoIterator<Item = (S, Property)>,
        S: Into<String>,
    {
        TableType {
            props: props.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..TableType::default()
        }
    }

    pub fn prop(&self, name: &str) -> Option<&Property> {
        self.props.get(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FunctionType {
    pub arg_types: TypePackId,
    pub ret_types: TypePackId,
}

/// An unresolved unification variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FreeType {
    pub scope: ScopeId,
    pub lower_bound: TypeId,
    pub upper_bound: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GenericType {
    pub name: String,
    pub scope: Option<ScopeId>,
}

/// A not-yet-instantiated generic alias, e.g. `Map<K, V>` inside its own
/// definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PendingExpansionType {
    pub name: String,
    pub type_args: Vec<TypeId>,
}

/// Shape of a type node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeData {
    Any,
    Never,
    Unknown,
    Error,
    Nil,
    Primitive(PrimitiveKind),
    Singleton(SingletonValue),
    Table(TableType),
    Function(FunctionType),
    /// Ordered members.
    Union(Vec<TypeId>),
    /// Ordered members.
    Intersection(Vec<TypeId>),
    Free(FreeType),
    Generic(GenericType),
    /// Placeholder awaiting a type supplied later by the solver.
    Blocked,
    PendingExpansion(PendingExpansionType),
    /// A free type that has been rebound; follow it.
    Bound(TypeId),
}

impl TypeData {
    /// Placeholders that must never occur inside their own substitution.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TypeData::Blocked | TypeData::PendingExpansion(_))
    }
}

// =============================================================================
// Type pack nodes
// =============================================================================

/// A fixed list of head types with an optional tail pack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TypePack {
    pub head: Vec<TypeId>,
    pub tail: Option<TypePackId>,
}

impl TypePack {
    pub fn new(head: Vec<TypeId>, tail: Option<TypePackId>) -> Self {
        TypePack { head, tail }
    }
}

/// `...T`: any number of `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct VariadicTypePack {
    pub ty: TypeId,
    /// Synthesized by the checker rather than written by the user.
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FreeTypePack {
    pub scope: ScopeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GenericTypePack {
    pub name: String,
}

/// Shape of a type pack node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypePackData {
    Fixed(TypePack),
    Variadic(VariadicTypePack),
    Free(FreeTypePack),
    Generic(GenericTypePack),
    Blocked,
    Error,
    /// A free pack that has been rebound; follow it.
    Bound(TypePackId),
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl fmt::Display for TypePackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tp{}", self.0)
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
