//! Ordered predicate-chain dispatch.
//!
//! A match is a subject plus an ordered list of `(predicate, action)` pairs.
//! Predicates run in declaration order against the borrowed subject; the
//! action paired with the first accepting predicate runs and its result is
//! returned. Predicates after the winner are dropped without being called.
//!
//! Two entry points share these semantics:
//!
//! - [`pattern_match`] takes a fixed-size tuple of pairs. The arm count is a
//!   compile-time property ([`CaseList::ARMS`]) and an empty tuple does not
//!   implement [`CaseList`], so a match always has at least one arm.
//! - [`Matcher`] builds the chain one arm at a time and can be closed with a
//!   catch-all ([`Matcher::otherwise`]) that makes the result infallible.
//!
//! The [`pattern_match!`](crate::pattern_match!) macro expands to the builder
//! form, which lets closure parameter types be inferred from the subject.
//!
//! # Exhaustiveness
//!
//! The caller is responsible for covering every subject. A chain that
//! rejects the subject reports [`MatchError::NoMatch`] instead of reaching
//! undefined behavior.

/// Error returned when no arm of a chain accepts the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Every predicate rejected the subject.
    #[error("no predicate accepted the subject ({arms} arms evaluated)")]
    NoMatch {
        /// Number of arms in the chain.
        arms: usize,
    },
}

/// Catch-all predicate that accepts every subject.
///
/// Used as the last arm of a chain to make it exhaustive.
#[inline]
pub fn always<T: ?Sized>(_: &T) -> bool {
    true
}

/// A fixed-size, ordered list of `(predicate, action)` pairs.
///
/// Implemented for tuples of 1 to 12 pairs. Every action must produce the
/// same `Output` type.
pub trait CaseList<T: ?Sized> {
    /// Common result type of every action.
    type Output;

    /// Number of arms in the list.
    const ARMS: usize;

    /// Run predicates in order and invoke the first accepted action.
    ///
    /// Returns the zero-based index of the winning arm with the action's
    /// result, or `None` if every predicate rejected the subject.
    fn dispatch(self, subject: &T) -> Option<(usize, Self::Output)>;
}

macro_rules! impl_case_list {
    ($arms:expr; $(($P:ident, $A:ident, $idx:tt)),+) => {
        impl<T: ?Sized, R, $($P, $A),+> CaseList<T> for ($(($P, $A),)+)
        where
            $($P: FnOnce(&T) -> bool, $A: FnOnce(&T) -> R,)+
        {
            type Output = R;

            const ARMS: usize = $arms;

            #[inline]
            fn dispatch(self, subject: &T) -> Option<(usize, R)> {
                $(
                    let (predicate, action) = self.$idx;
                    if predicate(subject) {
                        return Some(($idx, action(subject)));
                    }
                )+
                None
            }
        }
    };
}

impl_case_list!(1; (P0, A0, 0));
impl_case_list!(2; (P0, A0, 0), (P1, A1, 1));
impl_case_list!(3; (P0, A0, 0), (P1, A1, 1), (P2, A2, 2));
impl_case_list!(4; (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3));
impl_case_list!(5; (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4));
impl_case_list!(6;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5)
);
impl_case_list!(7;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5),
    (P6, A6, 6)
);
impl_case_list!(8;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5),
    (P6, A6, 6), (P7, A7, 7)
);
impl_case_list!(9;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5),
    (P6, A6, 6), (P7, A7, 7), (P8, A8, 8)
);
impl_case_list!(10;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5),
    (P6, A6, 6), (P7, A7, 7), (P8, A8, 8), (P9, A9, 9)
);
impl_case_list!(11;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5),
    (P6, A6, 6), (P7, A7, 7), (P8, A8, 8), (P9, A9, 9), (P10, A10, 10)
);
impl_case_list!(12;
    (P0, A0, 0), (P1, A1, 1), (P2, A2, 2), (P3, A3, 3), (P4, A4, 4), (P5, A5, 5),
    (P6, A6, 6), (P7, A7, 7), (P8, A8, 8), (P9, A9, 9), (P10, A10, 10), (P11, A11, 11)
);

/// Dispatch `subject` over a tuple of `(predicate, action)` pairs.
///
/// Closure parameters must be annotated (`|x: &i32| ...`) because the tuple
/// gives the compiler no expected signature; use [`Matcher`] or
/// [`pattern_match!`](crate::pattern_match!) to have them inferred.
///
/// # Example
///
/// ```
/// use gp_dispatch::{always, pattern_match};
///
/// let sign = pattern_match(
///     &-3,
///     (
///         (|x: &i32| *x > 0, |_: &i32| "positive"),
///         (|x: &i32| *x < 0, |_: &i32| "negative"),
///         (always, |_: &i32| "zero"),
///     ),
/// );
/// assert_eq!(sign, Ok("negative"));
/// ```
pub fn pattern_match<T, C>(subject: &T, cases: C) -> Result<C::Output, MatchError>
where
    T: ?Sized,
    C: CaseList<T>,
{
    match cases.dispatch(subject) {
        Some((arm, output)) => {
            tracing::trace!(arm, arms = C::ARMS, "pattern arm selected");
            Ok(output)
        }
        None => {
            tracing::debug!(arms = C::ARMS, "no pattern arm accepted the subject");
            Err(MatchError::NoMatch { arms: C::ARMS })
        }
    }
}

/// Incremental builder for a predicate chain.
///
/// Each [`when`](Matcher::when) call appends one arm. Once an arm has
/// accepted the subject, later predicates and actions are dropped unused.
#[must_use = "a matcher does nothing until closed with `finish` or `otherwise`"]
pub struct Matcher<'a, T: ?Sized, R> {
    subject: &'a T,
    arms: usize,
    outcome: Option<(usize, R)>,
}

impl<'a, T: ?Sized, R> Matcher<'a, T, R> {
    /// Start a chain over a borrowed subject.
    #[inline]
    pub fn new(subject: &'a T) -> Self {
        Matcher {
            subject,
            arms: 0,
            outcome: None,
        }
    }

    /// Append an arm. The predicate only runs if no earlier arm matched.
    #[inline]
    pub fn when<P, A>(mut self, predicate: P, action: A) -> Self
    where
        P: FnOnce(&T) -> bool,
        A: FnOnce(&T) -> R,
    {
        let index = self.arms;
        self.arms += 1;
        if self.outcome.is_none() && predicate(self.subject) {
            self.outcome = Some((index, action(self.subject)));
        }
        self
    }

    /// Number of arms appended so far.
    pub fn arms(&self) -> usize {
        self.arms
    }

    /// Index of the arm that accepted the subject, if any.
    pub fn matched_arm(&self) -> Option<usize> {
        self.outcome.as_ref().map(|(arm, _)| *arm)
    }

    /// Close the chain, reporting [`MatchError::NoMatch`] if no arm accepted.
    pub fn finish(self) -> Result<R, MatchError> {
        match self.outcome {
            Some((arm, output)) => {
                tracing::trace!(arm, arms = self.arms, "pattern arm selected");
                Ok(output)
            }
            None => {
                tracing::debug!(arms = self.arms, "no pattern arm accepted the subject");
                Err(MatchError::NoMatch { arms: self.arms })
            }
        }
    }

    /// Close the chain with a catch-all action, making it exhaustive.
    pub fn otherwise<A>(self, action: A) -> R
    where
        A: FnOnce(&T) -> R,
    {
        match self.outcome {
            Some((arm, output)) => {
                tracing::trace!(arm, arms = self.arms, "pattern arm selected");
                output
            }
            None => {
                tracing::trace!(arms = self.arms, "fallback arm selected");
                action(self.subject)
            }
        }
    }
}

/// Match a subject against `predicate => action` arms, in order.
///
/// Expands to a [`Matcher`] chain closed with
/// [`finish`](Matcher::finish), so the result is a
/// `Result<R, MatchError>`. Closure parameters are inferred from the subject.
///
/// ```
/// use gp_dispatch::{always, pattern_match};
///
/// let label = pattern_match!(5;
///     |x| *x >= 0 => |_| "a",
///     |x| *x > 0 => |_| "b",
///     always => |_| "c",
/// );
/// assert_eq!(label, Ok("a"));
/// ```
#[macro_export]
macro_rules! pattern_match {
    ($subject:expr; $($predicate:expr => $action:expr),+ $(,)?) => {
        $crate::pattern::Matcher::new(&$subject)
            $(.when($predicate, $action))+
            .finish()
    };
}

#[cfg(test)]
mod tests;
