//! Union simplification.

use crate::arena::TypeArena;
use crate::type_queries::is_nil;
use crate::types::*;
use smallvec::SmallVec;

/// Outcome of pushing one member into a reduced union.
enum Absorb {
    Continue,
    /// `error` or `any`: the whole union collapses to this member.
    Collapse(TypeId),
}

fn push_member(arena: &TypeArena, result: &mut SmallVec<[TypeId; 8]>, ty: TypeId) -> Absorb {
    let ty = arena.follow(ty);
    match arena.raw(ty) {
        TypeData::Never => Absorb::Continue,
        TypeData::Error | TypeData::Any => Absorb::Collapse(ty),
        _ => {
            if !result.contains(&ty) {
                result.push(ty);
            }
            Absorb::Continue
        }
    }
}

/// Simplify a list of union members.
///
/// Drops `never`, collapses to `[t]` on the first `error` or `any`, flattens
/// directly nested unions one level, and deduplicates by identity keeping
/// first-seen order.
pub fn reduce_union(arena: &TypeArena, types: &[TypeId]) -> Vec<TypeId> {
    let mut result: SmallVec<[TypeId; 8]> = SmallVec::new();
    for &t in types {
        let t = arena.follow(t);
        if let TypeData::Union(members) = arena.raw(t) {
            for &member in members {
                if let Absorb::Collapse(top) = push_member(arena, &mut result, member) {
                    return vec![top];
                }
            }
        } else if let Absorb::Collapse(top) = push_member(arena, &mut result, t) {
            return vec![top];
        }
    }
    result.into_vec()
}

/// Remove `nil` from a union.
///
/// A union with no `nil` member, and any non-union type, is returned
/// unchanged. A union of only `nil` becomes `nil`. A single surviving member
/// is returned by itself; otherwise a (memoized) union of the survivors.
pub fn strip_nil(arena: &mut TypeArena, ty: TypeId) -> TypeId {
    let ty = arena.follow(ty);

    let TypeData::Union(members) = arena.raw(ty) else {
        return ty;
    };
    if !members.iter().any(|&m| is_nil(arena, m)) {
        return ty;
    }

    let remaining: Vec<TypeId> = members
        .iter()
        .copied()
        .filter(|&m| !is_nil(arena, m))
        .collect();

    let cleaned = match remaining.len() {
        0 => TypeId::NIL,
        1 => remaining[0],
        _ => arena.union(remaining),
    };
    arena.follow(cleaned)
}

#[cfg(test)]
#[path = "../tests/union_tests.rs"]
mod tests;
