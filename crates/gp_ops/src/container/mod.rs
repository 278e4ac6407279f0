//! Reversible container mutations.
//!
//! [`ContainerAction`] moves one element between a sequence and a slot held
//! by the action. Appending moves the held element onto the end of the
//! sequence; removing the last element moves it into the slot. The two are
//! inverses of each other, so reverting an action is performing its
//! [`ContainerOp::inverse`] on the same slot and no element is ever cloned.

use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

use crate::reversible::Reversible;

/// A growable sequence with access at its end.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Append an element.
    fn push_last(&mut self, item: Self::Item);

    /// Remove and return the last element.
    fn pop_last(&mut self) -> Option<Self::Item>;

    /// Number of elements.
    fn length(&self) -> usize;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn push_last(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn pop_last(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn push_last(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn pop_last(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<A: smallvec::Array> Sequence for SmallVec<A> {
    type Item = A::Item;

    #[inline]
    fn push_last(&mut self, item: A::Item) {
        self.push(item);
    }

    #[inline]
    fn pop_last(&mut self) -> Option<A::Item> {
        self.pop()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Kind of container mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerOp {
    /// Push the held element onto the end of the sequence.
    Append,
    /// Pop the last element of the sequence into the slot.
    RemoveLast,
}

impl ContainerOp {
    /// The mutation that undoes `self`.
    pub const fn inverse(self) -> ContainerOp {
        match self {
            ContainerOp::Append => ContainerOp::RemoveLast,
            ContainerOp::RemoveLast => ContainerOp::Append,
        }
    }
}

impl fmt::Display for ContainerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerOp::Append => write!(f, "append"),
            ContainerOp::RemoveLast => write!(f, "remove-last"),
        }
    }
}

/// Error from a container mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// Removing from an empty sequence.
    #[error("{op} on an empty sequence")]
    EmptySequence { op: ContainerOp },
    /// Appending without an element in the slot (already appended).
    #[error("{op} has no element to insert")]
    NoElementHeld { op: ContainerOp },
    /// Removing while the slot still holds an element (already removed).
    #[error("{op} already holds a removed element")]
    ElementAlreadyHeld { op: ContainerOp },
}

/// A reversible append or remove-last.
///
/// An unapplied append holds the element to insert; an applied remove-last
/// holds the element it took. Applying or reverting moves the element
/// between the slot and the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerAction<T> {
    op: ContainerOp,
    slot: Option<T>,
}

impl<T> ContainerAction<T> {
    /// Append `item` when applied.
    pub fn append(item: T) -> Self {
        ContainerAction {
            op: ContainerOp::Append,
            slot: Some(item),
        }
    }

    /// Remove the last element when applied.
    pub fn remove_last() -> Self {
        ContainerAction {
            op: ContainerOp::RemoveLast,
            slot: None,
        }
    }

    /// The forward mutation.
    pub fn op(&self) -> ContainerOp {
        self.op
    }

    /// The element currently held outside the sequence, if any.
    pub fn held(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// The action that undoes this one in its current state.
    ///
    /// Inverting an applied append gives an unapplied remove-last, and the
    /// other way round.
    #[must_use]
    pub fn inverse(self) -> Self {
        ContainerAction {
            op: self.op.inverse(),
            slot: self.slot,
        }
    }

    fn perform<S>(&mut self, op: ContainerOp, state: &mut S) -> Result<(), ContainerError>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        match op {
            ContainerOp::Append => {
                let item = self.slot.take().ok_or(ContainerError::NoElementHeld { op })?;
                state.push_last(item);
            }
            ContainerOp::RemoveLast => {
                if self.slot.is_some() {
                    return Err(ContainerError::ElementAlreadyHeld { op });
                }
                let item = state
                    .pop_last()
                    .ok_or(ContainerError::EmptySequence { op })?;
                self.slot = Some(item);
            }
        }
        Ok(())
    }
}

impl<T, S> Reversible<S> for ContainerAction<T>
where
    S: Sequence<Item = T> + ?Sized,
{
    type Error = ContainerError;

    fn apply(&mut self, state: &mut S) -> Result<(), ContainerError> {
        self.perform(self.op, state)
    }

    fn revert(&mut self, state: &mut S) -> Result<(), ContainerError> {
        self.perform(self.op.inverse(), state)
    }
}
