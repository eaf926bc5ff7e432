//! Order capability - a total three-way comparison.
//!
//! [`Order`] is the collaborator consumed by the order-derived semigroups
//! [`min`](super::semigroup::min) and [`max`](super::semigroup::max). It is
//! a value, not a bound on `A`, so a type can be ordered in several ways
//! without newtype wrappers.
//!
//! # Laws
//!
//! `compare` must be a total order:
//!
//! - **Reflexivity**: `compare(a, a) == Equal`
//! - **Antisymmetry**: `compare(a, b) == compare(b, a).reverse()`
//! - **Transitivity**: `compare(a, b) != Greater` and `compare(b, c) != Greater`
//!   imply `compare(a, c) != Greater`

use std::cmp::Ordering;

/// A total order over `A`, supplied as a value.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpcore::typeclass::{Natural, Order};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Natural.compare(&"b", &"a"), Ordering::Greater);
/// ```
pub trait Order<A: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &A, right: &A) -> Ordering;
}

impl<A: ?Sized, O: Order<A> + ?Sized> Order<A> for &O {
    fn compare(&self, left: &A, right: &A) -> Ordering {
        (**self).compare(left, right)
    }
}

/// The order given by [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<A: Ord + ?Sized> Order<A> for Natural {
    fn compare(&self, left: &A, right: &A) -> Ordering {
        left.cmp(right)
    }
}

/// An order backed by a comparison function.
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<A: ?Sized, F> Order<A> for FromFn<F>
where
    F: Fn(&A, &A) -> Ordering,
{
    fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.0)(left, right)
    }
}

/// Builds an order from a comparison function.
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpcore::typeclass::order::{self, Order};
///
/// let floats = order::from_fn(|left: &f64, right: &f64| left.total_cmp(right));
/// assert_eq!(floats.compare(&1.5, &0.5), Ordering::Greater);
/// ```
pub const fn from_fn<A: ?Sized, F>(compare: F) -> FromFn<F>
where
    F: Fn(&A, &A) -> Ordering,
{
    FromFn(compare)
}

/// An order comparing a key extracted from each value.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F, O> {
    key: F,
    order: O,
}

impl<A: ?Sized, K, F, O> Order<A> for ByKey<F, O>
where
    F: Fn(&A) -> K,
    O: Order<K>,
{
    fn compare(&self, left: &A, right: &A) -> Ordering {
        self.order.compare(&(self.key)(left), &(self.key)(right))
    }
}

/// Orders values by a projected key, compared with `order`.
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpcore::typeclass::order::{self, Natural, Order};
///
/// let by_length = order::by_key(|text: &&str| text.len(), Natural);
/// assert_eq!(by_length.compare(&"abc", &"z"), Ordering::Greater);
/// ```
pub const fn by_key<A: ?Sized, K, F, O>(key: F, order: O) -> ByKey<F, O>
where
    F: Fn(&A) -> K,
    O: Order<K>,
{
    ByKey { key, order }
}
