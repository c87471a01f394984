//! Type pack arity.
//!
//! Two questions callers ask about a parameter or return pack:
//!
//! - how many values can it supply? ([`parameter_extents`])
//! - give me at least N head entries ([`extend_type_pack`]). For an
//!   unconstrained free pack this is where "unknown arity" becomes "known
//!   arity": the free pack is replaced in place by a fixed pack of fresh
//!   types, exactly once.

use crate::arena::TypeArena;
use crate::options::SolverMode;
use crate::type_pack::{TypePackIter, is_variadic_tail};
use crate::type_queries::is_optional;
use crate::types::*;
use tracing::{Level, span, trace};

/// `(minimum, maximum)` number of values `pack` accepts. A maximum of
/// `None` means unbounded.
///
/// Optional entries only count as optional when nothing required follows
/// them: `(number?, string)` needs two arguments.
pub fn parameter_extents(
    arena: &TypeArena,
    pack: TypePackId,
    include_hidden_variadics: bool,
) -> (usize, Option<usize>) {
    let mut min_count = 0usize;
    let mut optional_count = 0usize;

    let mut iter = TypePackIter::new(arena, pack);
    for ty in iter.by_ref() {
        if is_optional(arena, ty) {
            optional_count += 1;
        } else {
            min_count += optional_count;
            optional_count = 0;
            min_count += 1;
        }
    }

    match iter.tail() {
        Some(tail) if is_variadic_tail(arena, tail, include_hidden_variadics) => (min_count, None),
        _ => (min_count, Some(min_count + optional_count)),
    }
}

/// Produce a pack with at least `length` head entries, when obtainable.
///
/// Walks fixed segments collecting heads. Where the chain ends:
///
/// - more heads than needed: the remainder becomes a new fixed tail
/// - no tail: returns what there is (possibly fewer than `length`)
/// - variadic: pads with its element type, keeps the variadic as tail
/// - free: replaces the free pack in place with a fixed pack of fresh
///   types (or `overrides` entries, by position among the new entries) and
///   a fresh free tail
/// - error: pads with the error-recovery type, keeps the error pack as tail
/// - blocked or generic: returns what was collected with that pack as the
///   tail; the caller must retry once it is concrete
///
/// In [`SolverMode::Split`] fresh entries are free types bounded by
/// `never`/`unknown` and the returned pack reports the fresh tail. In
/// [`SolverMode::Legacy`] the returned pack has no tail.
pub fn extend_type_pack(
    arena: &mut TypeArena,
    pack: TypePackId,
    length: usize,
    overrides: &[Option<TypeId>],
    mode: SolverMode,
) -> TypePack {
    let _span = span!(Level::TRACE, "extend_type_pack", pack = pack.0, length).entered();
    let mut result = TypePack::default();
    let mut pack = pack;

    loop {
        pack = arena.follow_pack(pack);

        match arena.raw_pack(pack) {
            TypePackData::Fixed(p) => {
                let take = (length - result.head.len()).min(p.head.len());
                result.head.extend_from_slice(&p.head[..take]);
                let p_tail = p.tail;

                if result.head.len() == length {
                    if take == p.head.len() {
                        result.tail = p_tail;
                    } else {
                        let rest = p.head[take..].to_vec();
                        result.tail = Some(arena.add_type_pack(TypePackData::Fixed(TypePack {
                            head: rest,
                            tail: p_tail,
                        })));
                    }
                    return result;
                }

                match p_tail {
                    Some(tail) => pack = tail,
                    // Not enough types in this pack to satisfy the request.
                    None => return result,
                }
            }
            TypePackData::Variadic(vtp) => {
                let ty = vtp.ty;
                result.head.resize(length.max(result.head.len()), ty);
                result.tail = Some(pack);
                return result;
            }
            TypePackData::Free(ftp) => {
                let scope = ftp.scope;
                let new_tail = arena.fresh_type_pack(scope);
                if mode == SolverMode::Split {
                    result.tail = Some(new_tail);
                }

                let needed = length.saturating_sub(result.head.len());
                let mut new_head = Vec::with_capacity(needed);
                for i in 0..needed {
                    let ty = match overrides.get(i).copied().flatten() {
                        Some(ty) => ty,
                        None => arena.fresh_type(scope),
                    };
                    new_head.push(ty);
                }
                result.head.extend_from_slice(&new_head);

                trace!(
                    free = pack.0,
                    minted = new_head.len(),
                    "free pack extended to a fixed pack"
                );
                arena.emplace_pack(
                    pack,
                    TypePack {
                        head: new_head,
                        tail: Some(new_tail),
                    },
                );
                return result;
            }
            TypePackData::Error => {
                result.head.resize(length.max(result.head.len()), TypeId::ERROR);
                result.tail = Some(pack);
                return result;
            }
            TypePackData::Blocked | TypePackData::Generic(_) => {
                trace!(tail = pack.0, "cannot extend through a blocked or generic pack");
                result.tail = Some(pack);
                return result;
            }
            // follow_pack never stops on a bound node.
            TypePackData::Bound(_) => return result,
        }
    }
}

#[cfg(test)]
#[path = "../tests/arity_tests.rs"]
mod tests;
