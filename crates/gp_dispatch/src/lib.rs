//! Generic dispatch primitives.
//!
//! This crate provides two ways of selecting code by inspecting a value:
//!
//! - [`pattern`]: runtime dispatch over an ordered chain of
//!   `(predicate, action)` pairs. The first predicate that accepts the
//!   subject wins; later predicates are never evaluated.
//! - [`constant`]: compile-time dispatch over a closed set of constants.
//!   Each constant is a distinct zero-sized type and branch selection is
//!   pure trait resolution, so there is no runtime branch and no runtime
//!   failure path.
//!
//! # Choosing between them
//!
//! Predicate chains can inspect arbitrary runtime state but must be made
//! exhaustive by the caller (usually with a trailing [`always`] arm).
//! Constant dispatch trades that flexibility for zero runtime cost and a
//! compile error when a constant has no branch.

pub mod constant;
pub mod pattern;

pub use constant::{Arm, Branches, ConstBool, ConstI64, ConstUsize, Constant, Nil, Select};
pub use pattern::{always, pattern_match, CaseList, MatchError, Matcher};
