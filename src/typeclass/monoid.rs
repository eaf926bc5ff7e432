//! Monoid type class - semigroups with an identity element.
//!
//! A monoid instance over `A` is a [`Semigroup<A>`] together with an
//! element `empty` that leaves every value unchanged when combined with it.
//! As with semigroups, instances are values: the same struct that combines
//! (for example [`NumberSum`]) also supplies the identity.
//!
//! # Laws
//!
//! For all `a` of type `A`:
//!
//! ## Left Identity
//!
//! ```text
//! M.combine(M.empty(), a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! M.combine(a, M.empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! M.combine(M.combine(a, b), c) == M.combine(a, M.combine(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::monoid::{Monoid, NumberMultiply, StringConcat};
//!
//! assert_eq!(Monoid::<i32>::empty(&NumberMultiply), 1);
//! assert_eq!(StringConcat.combine_all_iter(Vec::<String>::new()), "");
//! assert_eq!(NumberMultiply.combine_all_iter([2, 3, 4]), 24);
//! ```

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use super::order::Order;
use super::semigroup::Semigroup;
use super::semigroup_product::{NonEmptyPositional, Positional, Record, Tuple};

pub use super::semigroup::{Max, Min, NumberMultiply, NumberSum, Reverse, StringConcat, VecConcat};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::monoid::{Monoid, VecConcat};
///
/// let flattened = VecConcat.combine_all_iter([vec![1], vec![], vec![2, 3]]);
/// assert_eq!(flattened, vec![1, 2, 3]);
/// ```
pub trait Monoid<A>: Semigroup<A> {
    /// Returns the identity element.
    #[must_use]
    fn empty(&self) -> A;

    /// Combines every element of `collection`, starting from the identity.
    ///
    /// Unlike [`Semigroup::combine_many`], this always returns a value,
    /// even for an empty collection.
    #[must_use]
    fn combine_all(&self, collection: &mut dyn Iterator<Item = A>) -> A {
        self.combine_many(self.empty(), collection)
    }

    /// [`combine_all`](Monoid::combine_all) for any iterable.
    #[must_use]
    fn combine_all_iter<I>(&self, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        self.combine_all(&mut collection.into_iter())
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for &M {
    fn empty(&self) -> A {
        (**self).empty()
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for Box<M> {
    fn empty(&self) -> A {
        (**self).empty()
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for Arc<M> {
    fn empty(&self) -> A {
        (**self).empty()
    }
}

/// A type-erased monoid, cheap to clone and shareable across threads.
pub type SharedMonoid<A> = Arc<dyn Monoid<A> + Send + Sync>;

// =============================================================================
// Bounded
// =============================================================================

/// A trait for types with minimum and maximum values.
///
/// This is required for the [`Min`] and [`Max`] monoids: the identity of
/// a minimum is the largest value and vice versa.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::monoid::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MIN_VALUE.0, 0);
/// assert_eq!(Score::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($number:ty),* $(,)?) => {
        $(
            impl Bounded for $number {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}

// =============================================================================
// Constructors
// =============================================================================

/// A semigroup paired with a chosen identity.
#[derive(Debug, Clone, Copy)]
pub struct FromSemigroup<S, A> {
    semigroup: S,
    empty: A,
}

impl<A: Clone, S: Semigroup<A>> Semigroup<A> for FromSemigroup<S, A> {
    fn combine(&self, left: A, right: A) -> A {
        self.semigroup.combine(left, right)
    }

    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        self.semigroup.combine_many(start, collection)
    }
}

impl<A: Clone, S: Semigroup<A>> Monoid<A> for FromSemigroup<S, A> {
    fn empty(&self) -> A {
        self.empty.clone()
    }
}

/// Turns `semigroup` into a monoid with identity `empty`.
///
/// `empty` must be an identity for `semigroup`; this is not checked.
///
/// ```rust
/// use fpcore::typeclass::monoid::{self, Monoid};
/// use fpcore::typeclass::semigroup;
///
/// let longest = monoid::from_semigroup(
///     semigroup::from_combine(|left: String, right: String| {
///         if right.len() > left.len() { right } else { left }
///     }),
///     String::new(),
/// );
/// assert_eq!(longest.combine_all_iter(["ab".to_string(), "abc".to_string()]), "abc");
/// assert_eq!(longest.combine_all_iter(Vec::new()), "");
/// ```
pub const fn from_semigroup<A: Clone, S: Semigroup<A>>(semigroup: S, empty: A) -> FromSemigroup<S, A> {
    FromSemigroup { semigroup, empty }
}

/// The dual of a monoid. Same identity, flipped `combine`.
pub const fn reverse<M>(monoid: M) -> Reverse<M> {
    super::semigroup::reverse(monoid)
}

/// Monoid returning the minimum, with the type's maximum as identity.
///
/// ```rust
/// use fpcore::typeclass::monoid::{self, Monoid};
/// use fpcore::typeclass::Natural;
///
/// let minimum = monoid::min(Natural);
/// assert_eq!(minimum.combine_all_iter([3u8, 1, 2]), 1);
/// assert_eq!(minimum.combine_all_iter(Vec::<u8>::new()), u8::MAX);
/// ```
pub const fn min<O>(order: O) -> Min<O> {
    super::semigroup::min(order)
}

/// Monoid returning the maximum, with the type's minimum as identity.
pub const fn max<O>(order: O) -> Max<O> {
    super::semigroup::max(order)
}

// =============================================================================
// Instances
// =============================================================================

macro_rules! impl_number_monoids {
    ($($number:ty => $zero:expr, $one:expr),* $(,)?) => {
        $(
            impl Monoid<$number> for NumberSum {
                fn empty(&self) -> $number {
                    $zero
                }
            }

            impl Monoid<$number> for NumberMultiply {
                fn empty(&self) -> $number {
                    $one
                }
            }
        )*
    };
}

impl_number_monoids!(
    i8 => 0, 1,
    i16 => 0, 1,
    i32 => 0, 1,
    i64 => 0, 1,
    i128 => 0, 1,
    isize => 0, 1,
    u8 => 0, 1,
    u16 => 0, 1,
    u32 => 0, 1,
    u64 => 0, 1,
    u128 => 0, 1,
    usize => 0, 1,
    f32 => 0.0, 1.0,
    f64 => 0.0, 1.0,
);

impl Monoid<String> for StringConcat {
    fn empty(&self) -> String {
        String::new()
    }
}

impl<A> Monoid<Vec<A>> for VecConcat {
    fn empty(&self) -> Vec<A> {
        Vec::new()
    }
}

impl<A: Bounded, O: Order<A>> Monoid<A> for Min<O> {
    fn empty(&self) -> A {
        A::MAX_VALUE
    }
}

impl<A: Bounded, O: Order<A>> Monoid<A> for Max<O> {
    fn empty(&self) -> A {
        A::MIN_VALUE
    }
}

impl<A, M: Monoid<A>> Monoid<A> for Reverse<M> {
    fn empty(&self) -> A {
        self.semigroup.empty()
    }
}

macro_rules! impl_tuple_monoid {
    ($(($monoid:ident, $value:ident, $index:tt)),*) => {
        impl<$($monoid, $value),*> Monoid<($($value,)*)> for Tuple<($($monoid,)*)>
        where
            $($monoid: Monoid<$value>,)*
        {
            #[allow(clippy::unused_unit)]
            fn empty(&self) -> ($($value,)*) {
                ($(self.0.$index.empty(),)*)
            }
        }
    };
}

impl_tuple_monoid!();
impl_tuple_monoid!((M0, A0, 0));
impl_tuple_monoid!((M0, A0, 0), (M1, A1, 1));
impl_tuple_monoid!((M0, A0, 0), (M1, A1, 1), (M2, A2, 2));
impl_tuple_monoid!((M0, A0, 0), (M1, A1, 1), (M2, A2, 2), (M3, A3, 3));
impl_tuple_monoid!((M0, A0, 0), (M1, A1, 1), (M2, A2, 2), (M3, A3, 3), (M4, A4, 4));
impl_tuple_monoid!(
    (M0, A0, 0),
    (M1, A1, 1),
    (M2, A2, 2),
    (M3, A3, 3),
    (M4, A4, 4),
    (M5, A5, 5)
);
impl_tuple_monoid!(
    (M0, A0, 0),
    (M1, A1, 1),
    (M2, A2, 2),
    (M3, A3, 3),
    (M4, A4, 4),
    (M5, A5, 5),
    (M6, A6, 6)
);
impl_tuple_monoid!(
    (M0, A0, 0),
    (M1, A1, 1),
    (M2, A2, 2),
    (M3, A3, 3),
    (M4, A4, 4),
    (M5, A5, 5),
    (M6, A6, 6),
    (M7, A7, 7)
);

impl<A, M: Monoid<A>> Monoid<Vec<A>> for Positional<M> {
    fn empty(&self) -> Vec<A> {
        self.semigroups.iter().map(Monoid::empty).collect()
    }
}

impl<A, M: Monoid<A>> Monoid<super::non_empty::NonEmptyVec<A>> for NonEmptyPositional<M> {
    fn empty(&self) -> super::non_empty::NonEmptyVec<A> {
        super::non_empty::NonEmptyVec::new(self.head.empty(), self.tail.empty())
    }
}

impl<K: Ord + Clone + Debug, A, M: Monoid<A>> Monoid<BTreeMap<K, A>> for Record<K, M> {
    fn empty(&self) -> BTreeMap<K, A> {
        self.semigroups
            .iter()
            .map(|(key, monoid)| (key.clone(), monoid.empty()))
            .collect()
    }
}
