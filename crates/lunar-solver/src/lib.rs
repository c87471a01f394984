//! Type-graph kernel for the lunar type checker.
//!
//! This crate holds the graph of types and type packs produced during
//! inference together with the queries and small transformations the
//! checker runs over it:
//!
//! - Arena allocation, following of bound chains, and one-shot rebinding
//! - Property lookup through `__index` metatable chains
//! - Type pack traversal, arity, and in-place extension of free packs
//! - Union simplification and `nil` stripping
//! - The occurs check for placeholder substitution
//! - Error-suppression verdicts over a pluggable [`Normalizer`]
//! - Discovery of blocked types inside literal expressions
//!
//! Every query takes the arena explicitly and follows handles before
//! inspecting them.

pub mod types;
pub use types::*;

pub mod arena;
pub use arena::TypeArena;

pub mod options;
pub use options::{KernelOptions, SolverMode, TypeContext, ValueContext, in_conditional};

pub mod type_queries;
pub use type_queries::{
    get_function_type, get_table_type, is_any, is_blocked, is_error, is_never, is_nil,
    is_optional, is_placeholder, union_members,
};

pub mod type_pack;
pub use type_pack::{TypePackIter, first, flatten, head_len, is_finite, is_variadic_tail};

pub mod format;
pub use format::{TypeFormatter, type_to_string};

// Metatable and `__index` resolution
pub mod metatable;
pub use metatable::{MetatableResolver, get_metatable};

pub mod occurs;
pub use occurs::occurs_check;

pub mod arity;
pub use arity::{extend_type_pack, parameter_extents};

pub mod union;
pub use union::{reduce_union, strip_nil};

// Normalization seam and the error-suppression oracle built on it
pub mod normalize;
pub use normalize::{NormalizedType, Normalizer, ShallowNormalizer};

pub mod suppression;
pub use suppression::{
    ErrorSuppression, should_suppress_errors, should_suppress_errors_pair,
    should_suppress_pack_errors, should_suppress_pack_errors_pair,
};

pub mod literal;
pub use literal::{
    ExprTypeMap, find_blocked_arg_types_in_call, find_blocked_types_in_table, is_literal,
};
