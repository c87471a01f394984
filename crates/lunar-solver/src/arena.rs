//! Type arena: allocation, following, and rebinding of type graph nodes.
//!
//! The arena owns every type and type pack node created during one analysis
//! run. Nodes are never freed individually. The only destructive update is
//! turning a free node into a bound (or fixed) one, and that happens at most
//! once per node.
//!
//! The builtin singletons (`any`, `never`, `unknown`, the error-recovery
//! type, `nil`, and the primitives) are registered at construction so that
//! [`TypeId::ANY`] and friends are valid in every arena.

use crate::types::*;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Owner of all type graph nodes for one analysis run.
///
/// Single writer: the inference pass that created it. No internal locking.
#[derive(Clone, Debug)]
pub struct TypeArena {
    types: Vec<TypeData>,
    packs: Vec<TypePackData>,
    /// Memoized unions keyed by their exact member list.
    union_cache: FxHashMap<Vec<TypeId>, TypeId>,
    /// Metatables carried intrinsically by primitive values.
    primitive_metatables: FxHashMap<PrimitiveKind, TypeId>,
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeArena {
    /// Create an arena with the builtin types pre-registered.
    pub fn new() -> Self {
        let types = vec![
            TypeData::Any,
            TypeData::Never,
            TypeData::Unknown,
            TypeData::Error,
            TypeData::Nil,
            TypeData::Primitive(PrimitiveKind::Boolean),
            TypeData::Primitive(PrimitiveKind::Number),
            TypeData::Primitive(PrimitiveKind::String),
            TypeData::Primitive(PrimitiveKind::Thread),
        ];
        debug_assert_eq!(types.len() as u32, TypeId::BUILTIN_COUNT);

        let packs = vec![
            TypePackData::Fixed(TypePack::default()),
            TypePackData::Error,
            TypePackData::Variadic(VariadicTypePack {
                ty: TypeId::ANY,
                hidden: false,
            }),
        ];
        debug_assert_eq!(packs.len() as u32, TypePackId::BUILTIN_COUNT);

        TypeArena {
            types,
            packs,
            union_cache: FxHashMap::default(),
            primitive_metatables: FxHashMap::default(),
        }
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    pub fn add_type(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    pub fn add_type_pack(&mut self, data: TypePackData) -> TypePackId {
        let id = TypePackId(self.packs.len() as u32);
        self.packs.push(data);
        id
    }

    /// Mint a fresh free type owned by `scope`, bounded by `never` below and
    /// `unknown` above.
    pub fn fresh_type(&mut self, scope: ScopeId) -> TypeId {
        self.add_type(TypeData::Free(FreeType {
            scope,
            lower_bound: TypeId::NEVER,
            upper_bound: TypeId::UNKNOWN,
        }))
    }

    /// Mint a fresh free type with explicit bounds.
    pub fn fresh_type_bounded(
        &mut self,
        scope: ScopeId,
        lower: TypeId,
        upper: TypeId,
    ) -> TypeId {
        self.add_type(TypeData::Free(FreeType {
            scope,
            lower_bound: lower,
            upper_bound: upper,
        }))
    }

    pub fn fresh_type_pack(&mut self, scope: ScopeId) -> TypePackId {
        self.add_type_pack(TypePackData::Free(FreeTypePack { scope }))
    }

    pub fn blocked(&mut self) -> TypeId {
        self.add_type(TypeData::Blocked)
    }

    pub fn pending_expansion(
        &mut self,
        name: impl Into<String>,
        type_args: Vec<TypeId>,
    ) -> TypeId {
        self.add_type(TypeData::PendingExpansion(PendingExpansionType {
            name: name.into(),
            type_args,
        }))
    }

    pub fn generic(&mut self, name: impl Into<String>) -> TypeId {
        self.add_type(TypeData::Generic(GenericType {
            name: name.into(),
            scope: None,
        }))
    }

    pub fn string_singleton(&mut self, value: impl Into<String>) -> TypeId {
        self.add_type(TypeData::Singleton(SingletonValue::String(value.into())))
    }

    pub fn boolean_singleton(&mut self, value: bool) -> TypeId {
        self.add_type(TypeData::Singleton(SingletonValue::Boolean(value)))
    }

    pub fn table(&mut self, table: TableType) -> TypeId {
        self.add_type(TypeData::Table(table))
    }

    pub fn function(&mut self, arg_types: TypePackId, ret_types: TypePackId) -> TypeId {
        self.add_type(TypeData::Function(FunctionType {
            arg_types,
            ret_types,
        }))
    }

    /// Union of `members`, memoized by member list.
    ///
    /// No members yields `never`; a single member is returned as-is.
    /// Members are stored exactly as given; simplification is the caller's
    /// job (see [`reduce_union`](crate::reduce_union)).
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        match members.len() {
            0 => TypeId::NEVER,
            1 => members[0],
            _ => {
                if let Some(&id) = self.union_cache.get(&members) {
                    return id;
                }
                let id = self.add_type(TypeData::Union(members.clone()));
                self.union_cache.insert(members, id);
                id
            }
        }
    }

    pub fn intersection(&mut self, members: Vec<TypeId>) -> TypeId {
        match members.len() {
            0 => TypeId::UNKNOWN,
            1 => members[0],
            _ => self.add_type(TypeData::Intersection(members)),
        }
    }

    /// A fixed pack of `head` followed by an optional tail.
    pub fn pack(&mut self, head: Vec<TypeId>, tail: Option<TypePackId>) -> TypePackId {
        if head.is_empty() && tail.is_none() {
            return TypePackId::EMPTY;
        }
        self.add_type_pack(TypePackData::Fixed(TypePack { head, tail }))
    }

    pub fn variadic(&mut self, ty: TypeId) -> TypePackId {
        self.add_type_pack(TypePackData::Variadic(VariadicTypePack { ty, hidden: false }))
    }

    pub fn hidden_variadic(&mut self, ty: TypeId) -> TypePackId {
        self.add_type_pack(TypePackData::Variadic(VariadicTypePack { ty, hidden: true }))
    }

    pub fn generic_pack(&mut self, name: impl Into<String>) -> TypePackId {
        self.add_type_pack(TypePackData::Generic(GenericTypePack { name: name.into() }))
    }

    pub fn blocked_pack(&mut self) -> TypePackId {
        self.add_type_pack(TypePackData::Blocked)
    }

    // =========================================================================
    // Intrinsic metatables
    // =========================================================================

    /// Register the metatable every value of primitive `kind` carries
    /// (e.g. the string library for `string`).
    pub fn set_primitive_metatable(&mut self, kind: PrimitiveKind, metatable: TypeId) {
        self.primitive_metatables.insert(kind, metatable);
    }

    pub fn primitive_metatable(&self, kind: PrimitiveKind) -> Option<TypeId> {
        self.primitive_metatables.get(&kind).copied()
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The raw node behind `id`, without following bound chains.
    ///
    /// Most callers want [`TypeArena::get`].
    #[inline]
    pub fn raw(&self, id: TypeId) -> &TypeData {
        &self.types[id.0 as usize]
    }

    #[inline]
    pub fn raw_pack(&self, id: TypePackId) -> &TypePackData {
        &self.packs[id.0 as usize]
    }

    /// Resolve a chain of bound nodes to its representative.
    pub fn follow(&self, mut id: TypeId) -> TypeId {
        while let TypeData::Bound(next) = self.raw(id) {
            id = *next;
        }
        id
    }

    pub fn follow_pack(&self, mut id: TypePackId) -> TypePackId {
        while let TypePackData::Bound(next) = self.raw_pack(id) {
            id = *next;
        }
        id
    }

    /// The shape of `id` after following.
    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeData {
        self.raw(self.follow(id))
    }

    #[inline]
    pub fn get_pack(&self, id: TypePackId) -> &TypePackData {
        self.raw_pack(self.follow_pack(id))
    }

    // =========================================================================
    // Rebinding
    // =========================================================================

    /// Bind the free type `free` to `target`.
    ///
    /// `free` must be an unbound free type and `target` must not already be
    /// represented by `free`; violating either is a logic error in the caller.
    pub fn bind(&mut self, free: TypeId, target: TypeId) {
        assert!(
            matches!(self.raw(free), TypeData::Free(_)),
            "bind: {free} is not an unbound free type"
        );
        assert_ne!(self.follow(target), free, "bind: {free} would be bound to itself");
        trace!(free = free.0, target = target.0, "binding free type");
        self.types[free.0 as usize] = TypeData::Bound(target);
    }

    /// Bind the free pack `free` to `target`.
    pub fn bind_pack(&mut self, free: TypePackId, target: TypePackId) {
        assert!(
            matches!(self.raw_pack(free), TypePackData::Free(_)),
            "bind_pack: {free} is not an unbound free pack"
        );
        assert_ne!(
            self.follow_pack(target),
            free,
            "bind_pack: {free} would be bound to itself"
        );
        trace!(free = free.0, target = target.0, "binding free pack");
        self.packs[free.0 as usize] = TypePackData::Bound(target);
    }

    /// Replace the free pack `free` in place with a fixed pack.
    ///
    /// Every handle that pointed at the free pack now sees `pack`.
    pub fn emplace_pack(&mut self, free: TypePackId, pack: TypePack) {
        assert!(
            matches!(self.raw_pack(free), TypePackData::Free(_)),
            "emplace_pack: {free} is not an unbound free pack"
        );
        debug_assert!(
            pack.tail.is_none_or(|tail| self.follow_pack(tail) != free),
            "emplace_pack: {free} would become its own tail"
        );
        trace!(free = free.0, len = pack.head.len(), "emplacing fixed pack over free pack");
        self.packs[free.0 as usize] = TypePackData::Fixed(pack);
    }

    /// Mutable access to a table node, for building tables incrementally.
    pub fn table_mut(&mut self, id: TypeId) -> Option<&mut TableType> {
        let id = self.follow(id);
        match &mut self.types[id.0 as usize] {
            TypeData::Table(table) => Some(table),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod tests;
