//! Expression arena for the lunar type checker.
//!
//! Syntax nodes live in a flat [`NodeArena`] and are addressed by
//! [`NodeIndex`]. Only the shapes the type kernel inspects are modelled:
//! constants, table constructors, function literals, calls, groupings,
//! and a handful of opaque expression and statement forms.

pub mod node;
pub use node::{BinaryOp, Node, NodeIndex, NodeKind, TableItem, TableItemKind, UnaryOp};

pub mod arena;
pub use arena::NodeArena;

pub mod walk;
pub use walk::{for_each_child, walk};
