//! Kernel configuration.
//!
//! Behaviour that differs between type-system generations is selected by an
//! explicit [`KernelOptions`] value handed to each query, never by process
//! state, so both generations can be exercised side by side.

use lunar_common::limits::MAX_METATABLE_INDEX_CHAIN;
use serde::{Deserialize, Serialize};

/// Which type-system generation the caller runs under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolverMode {
    /// One type per property, shared by reads and writes.
    Legacy,
    /// Independent read and write types per property.
    #[default]
    Split,
}

impl SolverMode {
    pub const fn splits_properties(self) -> bool {
        matches!(self, SolverMode::Split)
    }
}

/// Whether a property is being read or assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueContext {
    /// Read access: `x = t.p`
    RValue,
    /// Write access: `t.p = x`
    LValue,
}

/// Syntactic position an expression is checked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeContext {
    #[default]
    Default,
    /// The condition of an `if`, `while`, or `and`/`or` operand.
    Condition,
}

pub fn in_conditional(context: TypeContext) -> bool {
    context == TypeContext::Condition
}

/// Options threaded through the kernel's queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KernelOptions {
    pub mode: SolverMode,
    /// Number of `__index` hops chased before property lookup gives up.
    pub max_index_chain: u32,
}

impl Default for KernelOptions {
    fn default() -> Self {
        KernelOptions {
            mode: SolverMode::default(),
            max_index_chain: MAX_METATABLE_INDEX_CHAIN,
        }
    }
}

impl KernelOptions {
    pub fn legacy() -> Self {
        KernelOptions {
            mode: SolverMode::Legacy,
            ..Self::default()
        }
    }

    pub fn with_max_index_chain(mut self, max_index_chain: u32) -> Self {
        self.max_index_chain = max_index_chain;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
