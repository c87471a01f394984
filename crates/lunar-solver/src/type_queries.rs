//! Shape queries over followed type nodes.

use crate::arena::TypeArena;
use crate::types::*;
use rustc_hash::FxHashSet;

pub fn is_nil(arena: &TypeArena, ty: TypeId) -> bool {
    matches!(arena.get(ty), TypeData::Nil)
}

pub fn is_any(arena: &TypeArena, ty: TypeId) -> bool {
    matches!(arena.get(ty), TypeData::Any)
}

pub fn is_error(arena: &TypeArena, ty: TypeId) -> bool {
    matches!(arena.get(ty), TypeData::Error)
}

pub fn is_never(arena: &TypeArena, ty: TypeId) -> bool {
    matches!(arena.get(ty), TypeData::Never)
}

pub fn is_blocked(arena: &TypeArena, ty: TypeId) -> bool {
    matches!(arena.get(ty), TypeData::Blocked)
}

/// Blocked or pending-expansion.
pub fn is_placeholder(arena: &TypeArena, ty: TypeId) -> bool {
    arena.get(ty).is_placeholder()
}

/// Whether a value of this type may be absent: `nil`, anything that
/// accepts `nil` (`any`, `unknown`), or a union with such a member.
pub fn is_optional(arena: &TypeArena, ty: TypeId) -> bool {
    let mut visited = FxHashSet::default();
    is_optional_in(arena, ty, &mut visited)
}

fn is_optional_in(arena: &TypeArena, ty: TypeId, visited: &mut FxHashSet<TypeId>) -> bool {
    let ty = arena.follow(ty);
    if !visited.insert(ty) {
        return false;
    }
    match arena.raw(ty) {
        TypeData::Nil | TypeData::Any | TypeData::Unknown => true,
        TypeData::Union(members) => members.iter().any(|&m| is_optional_in(arena, m, visited)),
        _ => false,
    }
}

/// The table behind `ty`, if it is one.
pub fn get_table_type(arena: &TypeArena, ty: TypeId) -> Option<&TableType> {
    match arena.get(ty) {
        TypeData::Table(table) => Some(table),
        _ => None,
    }
}

pub fn get_function_type(arena: &TypeArena, ty: TypeId) -> Option<&FunctionType> {
    match arena.get(ty) {
        TypeData::Function(function) => Some(function),
        _ => None,
    }
}

/// Members of a union, or `None` for any other shape.
pub fn union_members(arena: &TypeArena, ty: TypeId) -> Option<&[TypeId]> {
    match arena.get(ty) {
        TypeData::Union(members) => Some(members),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/type_queries_tests.rs"]
mod tests;
