//! Occurs check for placeholder substitution.

use crate::arena::TypeArena;
use crate::types::*;
use rustc_hash::FxHashSet;

/// Whether the placeholder `needle` appears in `haystack`.
///
/// Only union and intersection structure is searched. Tables and functions
/// are indirections that do not unroll during substitution, so a
/// placeholder nested inside them is not an occurrence.
///
/// # Panics
///
/// `needle` must be a blocked or pending-expansion type.
pub fn occurs_check(arena: &TypeArena, needle: TypeId, haystack: TypeId) -> bool {
    assert!(
        arena.raw(needle).is_placeholder(),
        "occurs_check: {needle} is not a blocked or pending-expansion type"
    );

    let mut visited = FxHashSet::default();
    occurs_in(arena, needle, haystack, &mut visited)
}

fn occurs_in(
    arena: &TypeArena,
    needle: TypeId,
    haystack: TypeId,
    visited: &mut FxHashSet<TypeId>,
) -> bool {
    let haystack = arena.follow(haystack);
    if needle == haystack {
        return true;
    }
    // A union reached again through a bound member adds nothing new.
    if !visited.insert(haystack) {
        return false;
    }

    match arena.raw(haystack) {
        TypeData::Union(members) | TypeData::Intersection(members) => members
            .iter()
            .any(|&member| occurs_in(arena, needle, member, visited)),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/occurs_tests.rs"]
mod tests;
