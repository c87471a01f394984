//! Type pack traversal.
//!
//! A pack is a chain of fixed segments ending in nothing or in an open tail
//! (variadic, free, generic, blocked, or error). [`TypePackIter`] yields the
//! head types across all fixed segments and then exposes the open tail.

use crate::arena::TypeArena;
use crate::types::*;
use rustc_hash::FxHashSet;

/// Iterator over the head types of a pack, crossing chained fixed tails.
///
/// Once exhausted, [`TypePackIter::tail`] is the followed, non-fixed tail
/// the chain ended in, if any.
pub struct TypePackIter<'a> {
    arena: &'a TypeArena,
    head: &'a [TypeId],
    index: usize,
    next: Option<TypePackId>,
    tail: Option<TypePackId>,
    visited: FxHashSet<TypePackId>,
}

impl<'a> TypePackIter<'a> {
    pub fn new(arena: &'a TypeArena, pack: TypePackId) -> Self {
        let mut iter = TypePackIter {
            arena,
            head: &[],
            index: 0,
            next: Some(pack),
            tail: None,
            visited: FxHashSet::default(),
        };
        iter.advance_segment();
        iter
    }

    /// Move to the next fixed segment with at least one head entry, or
    /// record the open tail the chain ends in.
    fn advance_segment(&mut self) {
        let arena = self.arena;
        while let Some(pack) = self.next.take() {
            let pack = arena.follow_pack(pack);
            if !self.visited.insert(pack) {
                // A fixed chain that loops back on itself has no more heads.
                return;
            }
            match arena.raw_pack(pack) {
                TypePackData::Fixed(segment) => {
                    self.head = &segment.head;
                    self.index = 0;
                    self.next = segment.tail;
                    if !self.head.is_empty() {
                        return;
                    }
                }
                _ => {
                    self.head = &[];
                    self.tail = Some(pack);
                    return;
                }
            }
        }
    }

    /// The open tail, meaningful once the iterator is exhausted.
    pub fn tail(&self) -> Option<TypePackId> {
        self.tail
    }
}

impl Iterator for TypePackIter<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        if self.index >= self.head.len() {
            self.advance_segment();
            if self.index >= self.head.len() {
                return None;
            }
        }
        let ty = self.head[self.index];
        self.index += 1;
        Some(ty)
    }
}

/// All head types of `pack` plus the open tail it ends in.
pub fn flatten(arena: &TypeArena, pack: TypePackId) -> (Vec<TypeId>, Option<TypePackId>) {
    let mut iter = TypePackIter::new(arena, pack);
    let head: Vec<TypeId> = iter.by_ref().collect();
    (head, iter.tail())
}

/// The first head type of `pack`, if it has one.
pub fn first(arena: &TypeArena, pack: TypePackId) -> Option<TypeId> {
    TypePackIter::new(arena, pack).next()
}

/// Number of head types across all fixed segments.
pub fn head_len(arena: &TypeArena, pack: TypePackId) -> usize {
    TypePackIter::new(arena, pack).count()
}

/// Whether `pack` can only produce a bounded number of values.
///
/// Variadic and free packs are unbounded; everything else (including
/// generic, blocked, and error packs) counts as finite.
pub fn is_finite(arena: &TypeArena, pack: TypePackId) -> bool {
    let (_, tail) = flatten(arena, pack);
    match tail.map(|tail| arena.get_pack(tail)) {
        None => true,
        Some(TypePackData::Variadic(_) | TypePackData::Free(_)) => false,
        Some(_) => true,
    }
}

/// Whether `tail` makes a pack accept unboundedly many values.
///
/// Generic packs always do. Hidden variadics only count when
/// `include_hidden_variadics` is set.
pub fn is_variadic_tail(
    arena: &TypeArena,
    tail: TypePackId,
    include_hidden_variadics: bool,
) -> bool {
    match arena.get_pack(tail) {
        TypePackData::Variadic(variadic) => include_hidden_variadics || !variadic.hidden,
        TypePackData::Generic(_) => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/type_pack_tests.rs"]
mod tests;
