//! Normalization seam.
//!
//! The error-suppression oracle needs a canonical form of a type to answer
//! "is this already degenerate?". Computing full disjunctive normal forms is
//! the normalizer's business, so the kernel only depends on the
//! [`Normalizer`] trait. [`ShallowNormalizer`] is a small implementation
//! that flattens unions and tracks top types, which is enough for hosts
//! that do not carry a full normalizer.

use crate::arena::TypeArena;
use crate::types::*;
use lunar_common::limits::{MAX_NORMALIZATION_DEPTH, MAX_NORMALIZED_UNION_MEMBERS};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::sync::Arc;
use tracing::debug;

/// Canonical form of a type: its top-type flags plus the remaining
/// disjuncts, deduplicated in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedType {
    pub has_any: bool,
    pub has_unknown: bool,
    pub has_error: bool,
    pub has_nil: bool,
    /// Disjuncts that are not tops, `error`, or `nil`.
    pub members: Vec<TypeId>,
}

impl NormalizedType {
    /// Errors about a type containing `any` or `error` would only cascade.
    pub fn should_suppress_errors(&self) -> bool {
        self.has_any || self.has_error
    }

    /// The form denotes no values at all.
    pub fn is_never(&self) -> bool {
        !self.has_any
            && !self.has_unknown
            && !self.has_error
            && !self.has_nil
            && self.members.is_empty()
    }
}

/// Computes canonical forms. `None` means normalization failed (for
/// example, it exceeded a complexity limit).
pub trait Normalizer {
    fn normalize(&self, ty: TypeId) -> Option<Arc<NormalizedType>>;
}

/// Normalizer that flattens unions and absorbs tops, with a member-count
/// and depth ceiling. Results are cached per followed type.
pub struct ShallowNormalizer<'a> {
    arena: &'a TypeArena,
    cache: RefCell<FxHashMap<TypeId, Option<Arc<NormalizedType>>>>,
    max_members: usize,
}

impl<'a> ShallowNormalizer<'a> {
    pub fn new(arena: &'a TypeArena) -> Self {
        ShallowNormalizer {
            arena,
            cache: RefCell::new(FxHashMap::default()),
            max_members: MAX_NORMALIZED_UNION_MEMBERS,
        }
    }

    pub fn with_max_members(mut self, max_members: usize) -> Self {
        self.max_members = max_members;
        self
    }

    fn collect(&self, out: &mut NormalizedType, ty: TypeId, depth: u32) -> Option<()> {
        if depth > MAX_NORMALIZATION_DEPTH {
            return None;
        }
        let ty = self.arena.follow(ty);
        match self.arena.raw(ty) {
            TypeData::Any => out.has_any = true,
            TypeData::Unknown => out.has_unknown = true,
            TypeData::Error => out.has_error = true,
            TypeData::Nil => out.has_nil = true,
            TypeData::Never => {}
            TypeData::Union(members) => {
                for &member in members {
                    self.collect(out, member, depth + 1)?;
                }
            }
            TypeData::Intersection(members) => {
                // An intersection with `never` is empty, one with `error` is
                // an error; otherwise it stays an opaque disjunct.
                let mut has_never = false;
                for &member in members {
                    match self.arena.get(member) {
                        TypeData::Error => out.has_error = true,
                        TypeData::Never => has_never = true,
                        _ => {}
                    }
                }
                if !has_never && !out.members.contains(&ty) {
                    out.members.push(ty);
                }
            }
            _ => {
                if !out.members.contains(&ty) {
                    out.members.push(ty);
                }
            }
        }

        if out.members.len() > self.max_members {
            return None;
        }
        Some(())
    }
}

impl Normalizer for ShallowNormalizer<'_> {
    fn normalize(&self, ty: TypeId) -> Option<Arc<NormalizedType>> {
        let ty = self.arena.follow(ty);
        if let Some(cached) = self.cache.borrow().get(&ty) {
            return cached.clone();
        }

        let mut out = NormalizedType::default();
        let result = self.collect(&mut out, ty, 0).map(|()| Arc::new(out));
        if result.is_none() {
            debug!(ty = ty.0, "normalization exceeded its limits");
        }
        self.cache.borrow_mut().insert(ty, result.clone());
        result
    }
}

#[cfg(test)]
#[path = "../tests/normalize_tests.rs"]
mod tests;
