//! Reversible actions.
//!
//! A reversible action can be applied to a state and later reverted,
//! restoring the state exactly. Arithmetic steps get their reverse half from
//! the operation's inverse; other actions supply it themselves.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::arith::{Arithmetic, ArithmeticError};
use crate::operation::{Inverse, Operation, Symmetric};

/// An action with an exact undo.
///
/// Implementations must satisfy the round-trip law: `revert` after a
/// successful `apply` leaves the state equal to what it was before `apply`.
pub trait Reversible<S: ?Sized> {
    /// Error raised when either half cannot be performed.
    type Error;

    /// Perform the action.
    fn apply(&mut self, state: &mut S) -> Result<(), Self::Error>;

    /// Undo a previous `apply`.
    fn revert(&mut self, state: &mut S) -> Result<(), Self::Error>;
}

impl<S: ?Sized, R: Reversible<S> + ?Sized> Reversible<S> for Box<R> {
    type Error = R::Error;

    fn apply(&mut self, state: &mut S) -> Result<(), Self::Error> {
        (**self).apply(state)
    }

    fn revert(&mut self, state: &mut S) -> Result<(), Self::Error> {
        (**self).revert(state)
    }
}

/// An arithmetic step: an operation with a captured operand.
///
/// The backward half performs `op.inverse()` with the same operand.
/// Construction rejects operands that make the step impossible to undo, and
/// integer division additionally requires an exact quotient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReversibleOp<T> {
    op: Operation,
    operand: T,
}

impl<T: Arithmetic> ReversibleOp<T> {
    /// Create a step, rejecting multiply or divide by zero.
    pub fn new(op: Operation, operand: T) -> Result<Self, ArithmeticError> {
        if matches!(op, Operation::Multiply | Operation::Divide) && operand.is_zero() {
            return Err(ArithmeticError::NotInvertible { op });
        }
        Ok(ReversibleOp { op, operand })
    }

    /// Negation step; needs no operand.
    pub fn negate() -> Self {
        ReversibleOp {
            op: Operation::Negate,
            operand: T::zero(),
        }
    }

    /// The forward operation.
    pub fn operation(&self) -> Operation {
        self.op
    }

    /// The captured operand.
    pub fn operand(&self) -> T {
        self.operand
    }

    /// The step that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        ReversibleOp {
            op: self.op.inverse(),
            operand: self.operand,
        }
    }

    /// Compute the forward result.
    pub fn forward(&self, value: T) -> Result<T, ArithmeticError> {
        self.op.apply_exact(value, self.operand)
    }

    /// Compute the backward result.
    pub fn backward(&self, value: T) -> Result<T, ArithmeticError> {
        self.op.inverse().apply_exact(value, self.operand)
    }
}

impl<T: Arithmetic> Reversible<T> for ReversibleOp<T> {
    type Error = ArithmeticError;

    fn apply(&mut self, state: &mut T) -> Result<(), ArithmeticError> {
        *state = self.forward(*state)?;
        Ok(())
    }

    fn revert(&mut self, state: &mut T) -> Result<(), ArithmeticError> {
        *state = self.backward(*state)?;
        Ok(())
    }
}

/// An arithmetic step whose operation is fixed by a [`Symmetric`] tag.
///
/// `inverse()` changes the tag type, so the compiler tracks which half of a
/// pair a value is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaggedOp<O, T> {
    operand: T,
    _op: PhantomData<O>,
}

impl<O: Symmetric, T: Arithmetic> TaggedOp<O, T> {
    /// Create a step, rejecting multiply or divide by zero.
    pub fn new(operand: T) -> Result<Self, ArithmeticError> {
        ReversibleOp::new(O::OPERATION, operand)?;
        Ok(TaggedOp {
            operand,
            _op: PhantomData,
        })
    }

    /// The step that undoes this one.
    pub fn inverse(self) -> TaggedOp<Inverse<O>, T> {
        TaggedOp {
            operand: self.operand,
            _op: PhantomData,
        }
    }

    /// Compute the forward result.
    pub fn forward(&self, value: T) -> Result<T, ArithmeticError> {
        O::OPERATION.apply_exact(value, self.operand)
    }

    /// Compute the backward result.
    pub fn backward(&self, value: T) -> Result<T, ArithmeticError> {
        <Inverse<O> as Symmetric>::OPERATION.apply_exact(value, self.operand)
    }

    /// Erase the tag.
    pub fn into_dynamic(self) -> ReversibleOp<T> {
        ReversibleOp {
            op: O::OPERATION,
            operand: self.operand,
        }
    }
}

impl<O: Symmetric, T: Arithmetic> Reversible<T> for TaggedOp<O, T> {
    type Error = ArithmeticError;

    fn apply(&mut self, state: &mut T) -> Result<(), ArithmeticError> {
        *state = self.forward(*state)?;
        Ok(())
    }

    fn revert(&mut self, state: &mut T) -> Result<(), ArithmeticError> {
        *state = self.backward(*state)?;
        Ok(())
    }
}

/// A reversible action built from two infallible closures.
///
/// The caller is responsible for `backward` undoing `forward`.
pub struct ActionPair<F, B> {
    forward: F,
    backward: B,
}

impl<F, B> ActionPair<F, B> {
    /// Pair a forward action with its undo.
    pub fn new<S: ?Sized>(forward: F, backward: B) -> Self
    where
        F: FnMut(&mut S),
        B: FnMut(&mut S),
    {
        ActionPair { forward, backward }
    }
}

impl<S: ?Sized, F, B> Reversible<S> for ActionPair<F, B>
where
    F: FnMut(&mut S),
    B: FnMut(&mut S),
{
    type Error = Infallible;

    fn apply(&mut self, state: &mut S) -> Result<(), Infallible> {
        (self.forward)(state);
        Ok(())
    }

    fn revert(&mut self, state: &mut S) -> Result<(), Infallible> {
        (self.backward)(state);
        Ok(())
    }
}
