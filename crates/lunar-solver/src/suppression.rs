//! Error suppression.
//!
//! Decides whether an inference error about a type should be dropped
//! because the type is already degenerate (contains `any` or `error`).
//! Reporting on such types only produces cascades of follow-on errors.
//!
//! A failed normalization is its own verdict, distinct from both "suppress"
//! and "report", so callers can treat "unknown" differently from "known
//! safe".

use crate::arena::TypeArena;
use crate::normalize::Normalizer;
use crate::type_pack::{flatten, is_finite};
use crate::types::{TypeId, TypePackId};
use serde::Serialize;
use tracing::{Level, span, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorSuppression {
    Suppress,
    DoNotSuppress,
    NormalizationFailed,
}

impl ErrorSuppression {
    /// Whether an error should be withheld. A failed normalization is
    /// treated as suspect.
    pub fn should_suppress(self) -> bool {
        self != ErrorSuppression::DoNotSuppress
    }

    /// `self` unless it is `DoNotSuppress`, in which case `other()` decides.
    pub fn or_else(self, other: impl FnOnce() -> ErrorSuppression) -> ErrorSuppression {
        match self {
            ErrorSuppression::DoNotSuppress => other(),
            verdict => verdict,
        }
    }
}

/// Verdict for a single type.
pub fn should_suppress_errors(normalizer: &dyn Normalizer, ty: TypeId) -> ErrorSuppression {
    let verdict = match normalizer.normalize(ty) {
        None => ErrorSuppression::NormalizationFailed,
        Some(normal) if normal.should_suppress_errors() => ErrorSuppression::Suppress,
        Some(_) => ErrorSuppression::DoNotSuppress,
    };
    trace!(ty = ty.0, ?verdict, "error suppression");
    verdict
}

/// Verdict for a type pack: the first head entry that is not
/// `DoNotSuppress` decides; otherwise a finite tail distinct from the pack
/// itself is consulted.
pub fn should_suppress_pack_errors(
    normalizer: &dyn Normalizer,
    arena: &TypeArena,
    pack: TypePackId,
) -> ErrorSuppression {
    let pack = arena.follow_pack(pack);
    let _span = span!(Level::TRACE, "should_suppress_pack_errors", pack = pack.0).entered();
    let (head, tail) = flatten(arena, pack);

    for ty in head {
        let verdict = should_suppress_errors(normalizer, ty);
        if verdict != ErrorSuppression::DoNotSuppress {
            return verdict;
        }
    }

    match tail {
        Some(tail) if tail != pack && is_finite(arena, tail) => {
            should_suppress_pack_errors(normalizer, arena, tail)
        }
        _ => ErrorSuppression::DoNotSuppress,
    }
}

/// Verdict for a pair of types: if the first is suspect it wins outright
/// and the second is never normalized.
pub fn should_suppress_errors_pair(
    normalizer: &dyn Normalizer,
    left: TypeId,
    right: TypeId,
) -> ErrorSuppression {
    should_suppress_errors(normalizer, left).or_else(|| should_suppress_errors(normalizer, right))
}

/// Verdict for a pair of type packs, short-circuiting like
/// [`should_suppress_errors_pair`].
pub fn should_suppress_pack_errors_pair(
    normalizer: &dyn Normalizer,
    arena: &TypeArena,
    left: TypePackId,
    right: TypePackId,
) -> ErrorSuppression {
    should_suppress_pack_errors(normalizer, arena, left)
        .or_else(|| should_suppress_pack_errors(normalizer, arena, right))
}

#[cfg(test)]
#[path = "../tests/suppression_tests.rs"]
mod tests;
