//! Checked application of operations to integers.
//!
//! Every operation is applied with overflow checking. Failures are reported
//! as [`ArithmeticError`] rather than wrapping or panicking, so a failed step
//! leaves the caller's value untouched.

use num_traits::{CheckedNeg, CheckedRem, PrimInt};
use std::fmt;

use crate::operation::Operation;

/// Error from applying an [`Operation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The result does not fit in the value's type.
    #[error("{op} overflowed")]
    Overflow { op: Operation },
    /// Divide with a zero operand.
    #[error("division by zero")]
    DivisionByZero,
    /// The operand makes the operation impossible to undo
    /// (multiplying or dividing by zero).
    #[error("{op} by zero cannot be reversed")]
    NotInvertible { op: Operation },
    /// Integer division would discard a remainder, so multiplying back
    /// would not restore the original value.
    #[error("{op} leaves a remainder and cannot be reversed exactly")]
    Inexact { op: Operation },
}

/// Integer types operations can be applied to.
pub trait Arithmetic: PrimInt + CheckedNeg + CheckedRem + fmt::Debug {}

impl<T> Arithmetic for T where T: PrimInt + CheckedNeg + CheckedRem + fmt::Debug {}

impl Operation {
    /// Apply the operation to `value` with `operand` as the right-hand side.
    ///
    /// [`Operation::Negate`] ignores `operand`.
    pub fn apply<T: Arithmetic>(self, value: T, operand: T) -> Result<T, ArithmeticError> {
        let overflow = ArithmeticError::Overflow { op: self };
        match self {
            Operation::Add => value.checked_add(&operand).ok_or(overflow),
            Operation::Subtract => value.checked_sub(&operand).ok_or(overflow),
            Operation::Multiply => value.checked_mul(&operand).ok_or(overflow),
            Operation::Divide => {
                if operand.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                value.checked_div(&operand).ok_or(overflow)
            }
            Operation::Negate => value.checked_neg().ok_or(overflow),
        }
    }

    /// Apply the operation, additionally requiring that applying
    /// [`inverse`](Operation::inverse) with the same operand restores `value`.
    ///
    /// Integer division must leave no remainder, and multiplying or dividing
    /// by zero is rejected.
    pub fn apply_exact<T: Arithmetic>(self, value: T, operand: T) -> Result<T, ArithmeticError> {
        match self {
            Operation::Multiply if operand.is_zero() => {
                Err(ArithmeticError::NotInvertible { op: self })
            }
            Operation::Divide => {
                if operand.is_zero() {
                    return Err(ArithmeticError::NotInvertible { op: self });
                }
                // checked_rem also fails on MIN % -1, which overflows the division anyway.
                match value.checked_rem(&operand) {
                    Some(rem) if rem.is_zero() => self.apply(value, operand),
                    Some(_) => Err(ArithmeticError::Inexact { op: self }),
                    None => Err(ArithmeticError::Overflow { op: self }),
                }
            }
            _ => self.apply(value, operand),
        }
    }
}
