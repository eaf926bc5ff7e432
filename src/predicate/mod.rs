//! Predicates - boolean tests over borrowed values.
//!
//! A [`Predicate<A>`] is a shareable test `&A -> bool`. Predicates are
//! built from closures and combined with [`Predicate::and`],
//! [`Predicate::or`] and `!`, adapted to other input types with
//! [`Predicate::contramap`], and lifted over compound values with
//! [`Predicate::product`], [`Predicate::product_many`], [`product_all`] and
//! [`tuple`].
//!
//! Under the brand [`PredicateTypeLambda`] predicates are
//! [`Contravariant`](crate::typeclass::Contravariant),
//! [`SemiProduct`](crate::typeclass::SemiProduct) and
//! [`Product`](crate::typeclass::Product), so the kind-polymorphic
//! derivations of [`semi_product`](crate::typeclass::semi_product) build
//! predicates over tuples too.
//!
//! # Evaluation order
//!
//! Compound predicates evaluate their parts left to right and stop at the
//! first part that decides the result.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::predicate::Predicate;
//!
//! let positive = Predicate::new(|value: &i32| *value > 0);
//! let even = Predicate::new(|value: &i32| value % 2 == 0);
//!
//! let positive_even = positive.clone().and(even.clone());
//! assert!(positive_even.test(&4));
//! assert!(!positive_even.test(&3));
//!
//! let odd_or_negative = !positive.and(even);
//! assert!(odd_or_negative.test(&3));
//! ```

mod instances;
mod refinement;

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::typeclass::NonEmptyVec;

pub use instances::{All, Any, PredicateTypeLambda, monoid_all, monoid_any, semigroup_all, semigroup_any};
pub use refinement::{Refinement, is, is_bigint, is_boolean, is_number, is_string};

/// A shareable boolean test over `&A`.
///
/// Cloning is cheap: the test is reference counted. Predicates are
/// `Send + Sync`.
pub struct Predicate<A: ?Sized> {
    test: Arc<dyn Fn(&A) -> bool + Send + Sync>,
}

impl<A: ?Sized> Clone for Predicate<A> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<A: ?Sized> fmt::Debug for Predicate<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<A: ?Sized> Predicate<A> {
    /// Wraps a test function.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Runs the test.
    #[inline]
    pub fn test(&self, value: &A) -> bool {
        (self.test)(value)
    }

    /// A predicate that accepts everything.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// A predicate that rejects everything.
    pub fn never() -> Self {
        Self::new(|_| false)
    }
}

impl<A: ?Sized + 'static> Predicate<A> {
    /// Accepts what both `self` and `that` accept. `that` is only consulted
    /// when `self` accepts.
    #[must_use]
    pub fn and(self, that: Self) -> Self {
        Self::new(move |value| self.test(value) && that.test(value))
    }

    /// Accepts what either `self` or `that` accepts. `that` is only
    /// consulted when `self` rejects.
    #[must_use]
    pub fn or(self, that: Self) -> Self {
        Self::new(move |value| self.test(value) || that.test(value))
    }
}

impl<A: ?Sized + 'static> std::ops::Not for Predicate<A> {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(move |value| !self.test(value))
    }
}

/// Negates `predicate`.
pub fn not<A: ?Sized + 'static>(predicate: Predicate<A>) -> Predicate<A> {
    !predicate
}

impl<A: 'static> Predicate<A> {
    /// Adapts the predicate to test a `B` by projecting it to an `A` first.
    ///
    /// ```rust
    /// use fpcore::predicate::Predicate;
    ///
    /// let short = Predicate::new(|length: &usize| *length < 4);
    /// let short_word = short.contramap(|word: &String| word.len());
    /// assert!(short_word.test(&"abc".to_string()));
    /// ```
    #[must_use]
    pub fn contramap<B, F>(self, function: F) -> Predicate<B>
    where
        B: ?Sized + 'static,
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        Predicate::new(move |value: &B| self.test(&function(value)))
    }

    /// Tests the components of a pair: `self` on the first, `that` on the
    /// second.
    #[must_use]
    pub fn product<B: 'static>(self, that: Predicate<B>) -> Predicate<(A, B)> {
        Predicate::new(move |(first, second): &(A, B)| self.test(first) && that.test(second))
    }

    /// Tests a non-empty vector position by position: `self` on the first
    /// element, then each predicate of `collection` on the following
    /// elements.
    ///
    /// Elements beyond the last predicate are not tested. A vector too short
    /// to give every predicate an element is rejected.
    ///
    /// `collection` is cloned and iterated on every test, and only once
    /// `self` has accepted the head, so a lazily generated tail produces
    /// nothing for vectors rejected at the head.
    ///
    /// ```rust
    /// use fpcore::predicate::Predicate;
    /// use fpcore::typeclass::NonEmptyVec;
    ///
    /// let positive = Predicate::new(|value: &i32| *value > 0);
    /// let all_positive = positive.clone().product_many([positive]);
    ///
    /// assert!(all_positive.test(&NonEmptyVec::new(1, vec![2])));
    /// assert!(all_positive.test(&NonEmptyVec::new(1, vec![2, -3])));
    /// assert!(!all_positive.test(&NonEmptyVec::singleton(1)));
    /// ```
    #[must_use]
    pub fn product_many<I>(self, collection: I) -> Predicate<NonEmptyVec<A>>
    where
        I: IntoIterator<Item = Self> + Clone + Send + Sync + 'static,
    {
        Predicate::new(move |values: &NonEmptyVec<A>| {
            self.test(values.head()) && test_positionally(collection.clone(), values.tail())
        })
    }
}

/// Tests a vector position by position, one predicate per element.
///
/// Elements beyond the last predicate are not tested. A vector too short to
/// give every predicate an element is rejected.
///
/// ```rust
/// use fpcore::predicate::{self, Predicate};
///
/// let shape = predicate::product_all([
///     Predicate::new(|value: &i32| *value > 0),
///     Predicate::new(|value: &i32| *value < 0),
/// ]);
/// assert!(shape.test(&vec![1, -1]));
/// assert!(!shape.test(&vec![1]));
/// assert!(predicate::product_all(Vec::<Predicate<i32>>::new()).test(&vec![]));
/// ```
pub fn product_all<A: 'static>(collection: impl IntoIterator<Item = Predicate<A>>) -> Predicate<Vec<A>> {
    let predicates: Vec<Predicate<A>> = collection.into_iter().collect();
    Predicate::new(move |values: &Vec<A>| test_positionally(&predicates, values))
}

fn test_positionally<A, I, P>(predicates: I, values: &[A]) -> bool
where
    I: IntoIterator<Item = P>,
    P: Borrow<Predicate<A>>,
{
    predicates
        .into_iter()
        .enumerate()
        .all(|(index, predicate)| values.get(index).is_some_and(|value| predicate.borrow().test(value)))
}

/// Accepts when any predicate of `collection` accepts; an empty collection
/// accepts nothing.
pub fn any<A: ?Sized + 'static>(collection: impl IntoIterator<Item = Predicate<A>>) -> Predicate<A> {
    let predicates: Vec<Predicate<A>> = collection.into_iter().collect();
    Predicate::new(move |value| predicates.iter().any(|predicate| predicate.test(value)))
}

/// Accepts when every predicate of `collection` accepts; an empty
/// collection accepts everything.
pub fn all<A: ?Sized + 'static>(collection: impl IntoIterator<Item = Predicate<A>>) -> Predicate<A> {
    let predicates: Vec<Predicate<A>> = collection.into_iter().collect();
    Predicate::new(move |value| predicates.iter().all(|predicate| predicate.test(value)))
}

// =============================================================================
// Tuples
// =============================================================================

/// Tuples of predicates that can be merged into a predicate over tuples.
pub trait TuplePredicates {
    /// The tuple type tested by the merged predicate.
    type Target;

    /// Merges the component predicates.
    fn into_predicate(self) -> Predicate<Self::Target>;
}

/// Tests tuples component-wise, left to right.
///
/// ```rust
/// use fpcore::predicate::{self, Predicate};
///
/// let record = predicate::tuple((
///     Predicate::new(|name: &String| !name.is_empty()),
///     Predicate::new(|age: &u8| *age >= 18),
/// ));
/// assert!(record.test(&("Ada".to_string(), 36)));
/// assert!(!record.test(&(String::new(), 36)));
/// ```
pub fn tuple<T: TuplePredicates>(predicates: T) -> Predicate<T::Target> {
    predicates.into_predicate()
}

impl TuplePredicates for () {
    type Target = ();

    fn into_predicate(self) -> Predicate<()> {
        Predicate::always()
    }
}

macro_rules! impl_tuple_predicates {
    ($(($value:ident, $index:tt)),+) => {
        impl<$($value: 'static),+> TuplePredicates for ($(Predicate<$value>,)+) {
            type Target = ($($value,)+);

            fn into_predicate(self) -> Predicate<Self::Target> {
                Predicate::new(move |values: &($($value,)+)| true $(&& self.$index.test(&values.$index))+)
            }
        }
    };
}

impl_tuple_predicates!((A0, 0));
impl_tuple_predicates!((A0, 0), (A1, 1));
impl_tuple_predicates!((A0, 0), (A1, 1), (A2, 2));
impl_tuple_predicates!((A0, 0), (A1, 1), (A2, 2), (A3, 3));
impl_tuple_predicates!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4));
impl_tuple_predicates!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5));
impl_tuple_predicates!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5), (A6, 6));
impl_tuple_predicates!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5), (A6, 6), (A7, 7));
