//! Undo journal for reversible actions.
//!
//! A [`Journal`] is a LIFO log of actions that have been applied to some
//! state. Recording an action applies it and pushes it; rolling back walks
//! the log backwards and reverts each entry, restoring the state to what it
//! was when the journal was last empty.
//!
//! Typical usage: record every tentative mutation, evaluate the result, then
//! either [`commit`](Journal::commit) (keep the mutations, forget the log)
//! or [`rollback`](Journal::rollback) (undo all of them).

use smallvec::SmallVec;

use crate::reversible::Reversible;

/// Number of entries kept inline before the log spills to the heap.
const INLINE_ENTRIES: usize = 8;

/// LIFO log of applied reversible actions.
#[derive(Clone, Debug)]
pub struct Journal<A> {
    entries: SmallVec<[A; INLINE_ENTRIES]>,
}

impl<A> Journal<A> {
    /// Create an empty journal.
    pub fn new() -> Self {
        Journal {
            entries: SmallVec::new(),
        }
    }

    /// Create an empty journal with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Journal {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    /// Number of recorded actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded actions, oldest first.
    pub fn entries(&self) -> &[A] {
        &self.entries
    }

    /// Apply `action` to `state` and record it.
    ///
    /// A failed action is not recorded and is returned with the error.
    pub fn record<S>(&mut self, state: &mut S, mut action: A) -> Result<(), (A, A::Error)>
    where
        S: ?Sized,
        A: Reversible<S>,
    {
        match action.apply(state) {
            Ok(()) => {
                self.entries.push(action);
                tracing::trace!(len = self.entries.len(), "journal entry recorded");
                Ok(())
            }
            Err(err) => Err((action, err)),
        }
    }

    /// Revert the most recent action and return it.
    ///
    /// Returns `Ok(None)` when the journal is empty. If reverting fails the
    /// action stays in the journal.
    pub fn undo_last<S>(&mut self, state: &mut S) -> Result<Option<A>, A::Error>
    where
        S: ?Sized,
        A: Reversible<S>,
    {
        let Some(mut action) = self.entries.pop() else {
            return Ok(None);
        };
        match action.revert(state) {
            Ok(()) => Ok(Some(action)),
            Err(err) => {
                self.entries.push(action);
                Err(err)
            }
        }
    }

    /// Revert every recorded action, newest first.
    ///
    /// Returns the number of actions reverted. On error the failing action
    /// and everything older remain recorded.
    pub fn rollback<S>(&mut self, state: &mut S) -> Result<usize, A::Error>
    where
        S: ?Sized,
        A: Reversible<S>,
    {
        let mut reverted = 0;
        while self.undo_last(state)?.is_some() {
            reverted += 1;
        }
        tracing::debug!(reverted, "journal rolled back");
        Ok(reverted)
    }

    /// Keep all recorded mutations and clear the log.
    ///
    /// Returns the number of actions committed.
    pub fn commit(&mut self) -> usize {
        let committed = self.entries.len();
        self.entries.clear();
        tracing::debug!(committed, "journal committed");
        committed
    }
}

impl<A> Default for Journal<A> {
    fn default() -> Self {
        Self::new()
    }
}
