//! Closed arithmetic operation set and its inverse mapping.
//!
//! Operations exist at two levels:
//!
//! - [`Operation`] is a plain enum for runtime use. [`Operation::inverse`]
//!   is a total `const fn`, so the lookup can run in constant contexts.
//! - [`Add`], [`Subtract`], [`Multiply`], [`Divide`] and [`Negate`] are
//!   zero-sized tags implementing [`Symmetric`]. The associated
//!   `Inverse: Symmetric<Inverse = Self>` bound makes the involution a
//!   property the compiler checks for every tag.

use std::fmt;
use std::str::FromStr;

/// An arithmetic operation with a known algebraic inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Operation {
    /// `value + operand`, undone by [`Subtract`](Operation::Subtract).
    Add,
    /// `value - operand`, undone by [`Add`](Operation::Add).
    Subtract,
    /// `value * operand`, undone by [`Divide`](Operation::Divide).
    Multiply,
    /// `value / operand`, undone by [`Multiply`](Operation::Multiply).
    Divide,
    /// `-value`; its own inverse.
    Negate,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Negate,
    ];

    /// The operation that undoes `self`.
    #[inline]
    pub const fn inverse(self) -> Operation {
        match self {
            Operation::Add => Operation::Subtract,
            Operation::Subtract => Operation::Add,
            Operation::Multiply => Operation::Divide,
            Operation::Divide => Operation::Multiply,
            Operation::Negate => Operation::Negate,
        }
    }

    /// Whether the operation is its own inverse.
    #[inline]
    pub const fn is_self_inverse(self) -> bool {
        matches!(self, Operation::Negate)
    }

    /// Number of inputs, counting the value being operated on.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Operation::Negate => 1,
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => 2,
        }
    }

    /// Lowercase name (e.g. `"multiply"`).
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Negate => "negate",
        }
    }

    /// Conventional symbol. Negate and subtract share `-`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract | Operation::Negate => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Equality usable in constant contexts.
    #[inline]
    pub const fn const_eq(self, other: Operation) -> bool {
        self as u8 == other as u8
    }
}

/// Free-function form of [`Operation::inverse`].
#[inline]
pub const fn inverse_of(op: Operation) -> Operation {
    op.inverse()
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown operation name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation `{input}`")]
pub struct ParseOperationError {
    input: String,
}

impl ParseOperationError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts names (`"add"`, case-insensitive) and the unambiguous
    /// symbols `+`, `*` and `/`. `-` is ambiguous and rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "+" => return Ok(Operation::Add),
            "*" => return Ok(Operation::Multiply),
            "/" => return Ok(Operation::Divide),
            _ => {}
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOperationError {
                input: s.to_owned(),
            })
    }
}

/// Type-level operation tag with a compiler-checked inverse.
pub trait Symmetric: Copy + Default + fmt::Debug + 'static {
    /// The tag that undoes this one. Its own inverse must be `Self`.
    type Inverse: Symmetric<Inverse = Self>;

    /// The value-level operation this tag stands for.
    const OPERATION: Operation;
}

/// The inverse tag of `T`.
pub type Inverse<T> = <T as Symmetric>::Inverse;

macro_rules! operation_tags {
    ($($(#[$meta:meta])* $tag:ident => $op:ident, inverse $inverse:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $tag;

            impl Symmetric for $tag {
                type Inverse = $inverse;
                const OPERATION: Operation = Operation::$op;
            }

            const _: () = assert!(
                <$tag as Symmetric>::OPERATION
                    .inverse()
                    .const_eq(<$inverse as Symmetric>::OPERATION),
                "type-level inverse disagrees with Operation::inverse",
            );
        )+
    };
}

operation_tags! {
    /// Addition tag; undone by [`Subtract`].
    Add => Add, inverse Subtract;
    /// Subtraction tag; undone by [`Add`].
    Subtract => Subtract, inverse Add;
    /// Multiplication tag; undone by [`Divide`].
    Multiply => Multiply, inverse Divide;
    /// Division tag; undone by [`Multiply`].
    Divide => Divide, inverse Multiply;
    /// Negation tag; its own inverse.
    Negate => Negate, inverse Negate;
}
