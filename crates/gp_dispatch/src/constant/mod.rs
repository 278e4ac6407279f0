//! Compile-time constant dispatch.
//!
//! Every candidate constant is encoded as its own zero-sized type
//! implementing [`Constant`]. A branch set is a type-level list of
//! [`Arm`]s, each tagged with one constant type. Selecting the branch for a
//! constant `C` is done by the trait solver through [`Select`]: the index
//! parameter (`Here` / `There<I>`) is inferred, so the only code left at
//! runtime is the call to the chosen branch.
//!
//! ```
//! use gp_dispatch::{constant_tags, match_constant};
//!
//! constant_tags! {
//!     /// Three-valued count.
//!     pub enum Count as count { One, Two, Three }
//! }
//!
//! fn main() {
//!     let picked = match_constant!(count::Two;
//!         count::One => Count::One,
//!         count::Two => Count::Two,
//!         count::Three => Count::Three,
//!     );
//!     assert_eq!(picked, Count::Two);
//! }
//! ```
//!
//! A constant without a branch does not compile:
//!
//! ```compile_fail
//! use gp_dispatch::{constant_tags, match_constant};
//!
//! constant_tags! {
//!     pub enum Count as count { One, Two, Three }
//! }
//!
//! fn main() {
//!     let _ = match_constant!(count::Three;
//!         count::One => 1,
//!         count::Two => 2,
//!     );
//! }
//! ```
//!
//! Two arms for the same constant are ambiguous and rejected as well:
//!
//! ```compile_fail
//! use gp_dispatch::{constant_tags, match_constant};
//!
//! constant_tags! {
//!     pub enum Count as count { One, Two, Three }
//! }
//!
//! fn main() {
//!     let _ = match_constant!(count::Two;
//!         count::Two => 1,
//!         count::Two => 2,
//!     );
//! }
//! ```

use std::marker::PhantomData;

/// A value fixed at compile time, carried by a zero-sized type.
///
/// Each implementor encodes exactly one value, so distinct values are
/// distinct types and can drive trait resolution.
pub trait Constant: Copy + Default + 'static {
    /// Type of the encoded value.
    type Value: Copy;

    /// The encoded value.
    const VALUE: Self::Value;

    /// The encoded value, read through an instance of the tag.
    #[inline]
    fn value(self) -> Self::Value {
        Self::VALUE
    }
}

/// A `bool` constant as a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstBool<const B: bool>;

impl<const B: bool> Constant for ConstBool<B> {
    type Value = bool;
    const VALUE: bool = B;
}

/// A `usize` constant as a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstUsize<const N: usize>;

impl<const N: usize> Constant for ConstUsize<N> {
    type Value = usize;
    const VALUE: usize = N;
}

/// An `i64` constant as a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstI64<const N: i64>;

impl<const N: i64> Constant for ConstI64<N> {
    type Value = i64;
    const VALUE: i64 = N;
}

/// A branch tagged with the constant type `C`.
///
/// The body receives the tag instance when selected.
pub struct Arm<C, F> {
    body: F,
    _tag: PhantomData<C>,
}

impl<C: Constant, F> Arm<C, F> {
    /// Tag `body` with the constant `C`.
    #[inline]
    pub fn new<R>(body: F) -> Self
    where
        F: FnOnce(C) -> R,
    {
        Arm {
            body,
            _tag: PhantomData,
        }
    }
}

/// Empty end of a branch list.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nil;

/// Non-empty branch list: one branch followed by the rest.
pub struct Branches<H, T> {
    head: H,
    tail: T,
}

impl<H, T> Branches<H, T> {
    /// Prepend `head` to `tail`.
    #[inline]
    pub fn new(head: H, tail: T) -> Self {
        Branches { head, tail }
    }
}

/// Index marker: the branch is the head of the list.
pub struct Here;

/// Index marker: the branch is somewhere in the tail at index `I`.
pub struct There<I> {
    _index: PhantomData<I>,
}

/// Selection of the branch tagged `C` from a branch list.
///
/// `Index` is a type-level position that the compiler infers. When no
/// branch carries `C` there is no impl and the call fails to compile; when
/// two branches carry `C` the index is ambiguous and it also fails.
#[diagnostic::on_unimplemented(
    message = "no branch matches the constant `{C}`",
    label = "this branch set has no arm for `{C}`",
    note = "add an arm tagged with `{C}` to make the dispatch exhaustive"
)]
pub trait Select<C, Index> {
    /// Result of the selected branch.
    type Output;

    /// Invoke the selected branch.
    fn select(self) -> Self::Output;
}

impl<C, F, R, Tail> Select<C, Here> for Branches<Arm<C, F>, Tail>
where
    C: Constant,
    F: FnOnce(C) -> R,
{
    type Output = R;

    #[inline]
    fn select(self) -> R {
        (self.head.body)(C::default())
    }
}

impl<C, Head, Tail, I> Select<C, There<I>> for Branches<Head, Tail>
where
    Tail: Select<C, I>,
{
    type Output = Tail::Output;

    #[inline]
    fn select(self) -> Self::Output {
        self.tail.select()
    }
}

/// Invoke the branch tagged with the constant `C`.
///
/// Resolution happens entirely in the type system; the generated code is a
/// direct call to the selected branch body.
#[inline]
pub fn match_constant<C, B, I>(branches: B) -> B::Output
where
    C: Constant,
    B: Select<C, I>,
{
    branches.select()
}

/// Build a branch list from `Tag => expression` arms.
///
/// Each expression becomes the lazily evaluated body of an [`Arm`] tagged
/// with the given constant type.
#[macro_export]
macro_rules! branches {
    () => {
        $crate::constant::Nil
    };
    ($tag:ty => $body:expr $(, $rest_tag:ty => $rest_body:expr)* $(,)?) => {
        $crate::constant::Branches::new(
            $crate::constant::Arm::<$tag, _>::new(|_: $tag| $body),
            $crate::branches!($($rest_tag => $rest_body),*),
        )
    };
}

/// Dispatch on a compile-time constant over `Tag => expression` arms.
///
/// Only the arm tagged with the constant is evaluated. A constant without
/// an arm is a compile error.
#[macro_export]
macro_rules! match_constant {
    ($constant:ty; $($tag:ty => $body:expr),+ $(,)?) => {
        $crate::constant::match_constant::<$constant, _, _>(
            $crate::branches!($($tag => $body),+)
        )
    };
}

/// Declare a closed enumeration together with one constant type per variant.
///
/// `pub enum Name as module { A, B }` expands to the enum `Name` (with a
/// `Name::ALL` listing) and a module `module` holding zero-sized types
/// `module::A` and `module::B`, each implementing
/// [`Constant<Value = Name>`](Constant). Attributes on a variant, doc
/// comments included, are repeated on its tag type.
///
/// A private enum gets tag types visible in the declaring module only:
///
/// ```
/// gp_dispatch::constant_tags! {
///     enum Side as side { Left, Right }
/// }
///
/// fn main() {
///     use gp_dispatch::Constant;
///     assert_eq!(side::Right::VALUE, Side::Right);
/// }
/// ```
///
/// Documented variants yield documented tags:
///
/// ```
/// #![deny(missing_docs)]
/// #![doc = "Lanes."]
///
/// gp_dispatch::constant_tags! {
///     /// Traffic lane.
///     pub enum Lane as lane {
///         /// Slow lane.
///         Slow,
///         /// Fast lane.
///         Fast,
///     }
/// }
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! constant_tags {
    (
        @emit [$($vis:tt)*] [$tag_vis:vis]
        $(#[$meta:meta])*
        enum $name:ident as $module:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $($vis)* enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        #[allow(dead_code)]
        #[doc = concat!("Constant types for each `", stringify!($name), "` variant.")]
        $($vis)* mod $module {
            $(
                $(#[$variant_meta])*
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                $tag_vis struct $variant;

                impl $crate::constant::Constant for $variant {
                    type Value = super::$name;
                    const VALUE: super::$name = super::$name::$variant;
                }
            )+
        }
    };
    (
        $(#[$meta:meta])*
        enum $name:ident as $module:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $crate::constant_tags! {
            @emit [] [pub(super)]
            $(#[$meta])*
            enum $name as $module {
                $($(#[$variant_meta])* $variant),+
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub(crate) enum $name:ident as $module:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $crate::constant_tags! {
            @emit [pub(crate)] [pub(crate)]
            $(#[$meta])*
            enum $name as $module {
                $($(#[$variant_meta])* $variant),+
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $module:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $crate::constant_tags! {
            @emit [$vis] [pub]
            $(#[$meta])*
            enum $name as $module {
                $($(#[$variant_meta])* $variant),+
            }
        }
    };
}

#[cfg(test)]
mod tests;
