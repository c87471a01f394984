//! Centralized limits and thresholds for the type kernel.
//!
//! Keeping these in one place prevents the same bound from being spelled
//! with different values at different call sites.

// =============================================================================
// Iteration Limits
// =============================================================================

/// Maximum number of `__index` hops followed when resolving a property
/// through a metatable chain.
///
/// Exceeding the limit silently yields "not found"; no diagnostic is
/// raised. Well-formed programs never come close.
///
/// # Luau example
///
/// ```lua
/// local a = setmetatable({}, { __index = b })
/// local b = setmetatable({}, { __index = c })
/// -- ... 100 levels of indirection ...
/// print(a.field)
/// ```
pub const MAX_METATABLE_INDEX_CHAIN: u32 = 100;

// =============================================================================
// Normalization Limits
// =============================================================================

/// Maximum number of distinct members a normalized union may carry before
/// normalization gives up and reports failure.
pub const MAX_NORMALIZED_UNION_MEMBERS: usize = 1_000;

/// Maximum nesting depth the normalizer descends through unions and
/// intersections.
pub const MAX_NORMALIZATION_DEPTH: u32 = 64;

// =============================================================================
// Formatting Limits
// =============================================================================

/// Maximum nesting depth when printing a type for a diagnostic message.
/// Deeper structure is elided as `...`.
pub const MAX_FORMAT_DEPTH: u32 = 8;
