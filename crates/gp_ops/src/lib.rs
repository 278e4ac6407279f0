//! Symmetric operations and reversible actions.
//!
//! This crate provides:
//! - The closed arithmetic operation set (`Operation`) and its inverse
//!   mapping, both as a value-level `const fn` and as type-level tags
//!   (`Symmetric`) whose inverse relation is checked by the compiler
//! - A zero-sized `OperationRegistry` exposing static metadata per operation
//! - Checked application of operations to integers (`Arithmetic`)
//! - Reversible actions (`Reversible`): arithmetic steps, container
//!   mutations, and arbitrary forward/backward closure pairs
//! - A LIFO `Journal` that records applied actions and rolls them back
//!
//! # Inverse mapping
//!
//! | Operation | Inverse  |
//! |-----------|----------|
//! | add       | subtract |
//! | subtract  | add      |
//! | multiply  | divide   |
//! | divide    | multiply |
//! | negate    | negate   |
//!
//! The mapping is an involution: `op.inverse().inverse() == op` for every
//! operation.

mod arith;
mod container;
mod journal;
mod operation;
mod registry;
mod reversible;

pub use arith::{Arithmetic, ArithmeticError};
pub use container::{ContainerAction, ContainerError, ContainerOp, Sequence};
pub use journal::Journal;
pub use operation::{
    inverse_of, Add, Divide, Inverse, Multiply, Negate, Operation, ParseOperationError, Subtract,
    Symmetric,
};
pub use registry::{OperationInfo, OperationRegistry};
pub use reversible::{ActionPair, Reversible, ReversibleOp, TaggedOp};
