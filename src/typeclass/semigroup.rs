//! Semigroup type class - instances of an associative binary operation.
//!
//! A [`Semigroup<A>`] is a *value* describing how two `A`s merge. Because
//! the instance is a value rather than a bound on `A`, one type can be
//! combined in many ways (sum, product, minimum, ...) and instances can be
//! transformed by combinators: [`reverse`] flips one, [`imap`] moves one
//! across an isomorphism, [`intercalate`] inserts a separator.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ## Associativity
//!
//! ```text
//! S.combine(S.combine(a, b), c) == S.combine(a, S.combine(b, c))
//! ```
//!
//! ## combine_many is a left fold
//!
//! ```text
//! S.combine_many(a, [x1, .., xn]) == S.combine(..S.combine(a, x1).., xn)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::semigroup::{self, NumberMultiply, NumberSum, Semigroup};
//! use fpcore::typeclass::Natural;
//!
//! assert_eq!(NumberSum.combine(1, 2), 3);
//! assert_eq!(NumberMultiply.combine_iter(2, [3, 4]), 24);
//! assert_eq!(semigroup::max(Natural).combine_iter(3, [7, 5]), 7);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

use super::order::Order;

/// A type class for associative binary operations over `A`.
///
/// Only [`combine`](Semigroup::combine) is required. Instances that can do
/// better than a left fold override [`combine_many`](Semigroup::combine_many);
/// see [`NumberMultiply`].
///
/// The trait is object safe, so instances can be erased into
/// [`SharedSemigroup`](super::SharedSemigroup).
pub trait Semigroup<A> {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(&self, left: A, right: A) -> A;

    /// Folds `collection` into `start`, left to right.
    ///
    /// The default implementation is the plain left fold and consumes the
    /// whole collection.
    #[must_use]
    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        collection.fold(start, |accumulator, element| {
            self.combine(accumulator, element)
        })
    }

    /// [`combine_many`](Semigroup::combine_many) for any iterable.
    ///
    /// ```rust
    /// use fpcore::typeclass::semigroup::{Semigroup, StringConcat};
    ///
    /// let joined = StringConcat.combine_iter("a".to_string(), ["b".to_string(), "c".to_string()]);
    /// assert_eq!(joined, "abc");
    /// ```
    #[must_use]
    fn combine_iter<I>(&self, start: A, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        self.combine_many(start, &mut collection.into_iter())
    }
}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for &S {
    fn combine(&self, left: A, right: A) -> A {
        (**self).combine(left, right)
    }

    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        (**self).combine_many(start, collection)
    }
}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for Box<S> {
    fn combine(&self, left: A, right: A) -> A {
        (**self).combine(left, right)
    }

    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        (**self).combine_many(start, collection)
    }
}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for Arc<S> {
    fn combine(&self, left: A, right: A) -> A {
        (**self).combine(left, right)
    }

    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        (**self).combine_many(start, collection)
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// A semigroup defined by its `combine` function alone.
#[derive(Debug, Clone, Copy)]
pub struct FromCombine<F>(F);

impl<A, F> Semigroup<A> for FromCombine<F>
where
    F: Fn(A, A) -> A,
{
    fn combine(&self, left: A, right: A) -> A {
        (self.0)(left, right)
    }
}

/// Builds a semigroup from `combine`; `combine_many` is the left fold.
///
/// Useful when `combine_many` can't be optimised.
///
/// ```rust
/// use fpcore::typeclass::semigroup::{self, Semigroup};
///
/// let longest = semigroup::from_combine(|left: String, right: String| {
///     if right.len() > left.len() { right } else { left }
/// });
/// assert_eq!(longest.combine("ab".into(), "abc".into()), "abc");
/// ```
pub const fn from_combine<A, F>(combine: F) -> FromCombine<F>
where
    F: Fn(A, A) -> A,
{
    FromCombine(combine)
}

/// Always yields the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant<A>(A);

impl<A: Clone> Semigroup<A> for Constant<A> {
    fn combine(&self, _left: A, _right: A) -> A {
        self.0.clone()
    }

    fn combine_many(&self, _start: A, _collection: &mut dyn Iterator<Item = A>) -> A {
        self.0.clone()
    }
}

/// A semigroup ignoring its operands and returning `value`.
pub const fn constant<A: Clone>(value: A) -> Constant<A> {
    Constant(value)
}

// =============================================================================
// Primitive Instances
// =============================================================================

/// `String` concatenation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConcat;

impl Semigroup<String> for StringConcat {
    fn combine(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }

    fn combine_many(&self, mut start: String, collection: &mut dyn Iterator<Item = String>) -> String {
        for element in collection {
            start.push_str(&element);
        }
        start
    }
}

/// `Vec` concatenation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecConcat;

impl<A> Semigroup<Vec<A>> for VecConcat {
    fn combine(&self, mut left: Vec<A>, mut right: Vec<A>) -> Vec<A> {
        left.append(&mut right);
        left
    }

    fn combine_many(&self, mut start: Vec<A>, collection: &mut dyn Iterator<Item = Vec<A>>) -> Vec<A> {
        for element in collection {
            start.extend(element);
        }
        start
    }
}

/// Numbers under addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberSum;

/// Numbers under multiplication.
///
/// `combine_many` stops as soon as the start value or an element is zero:
/// the remaining elements are not consumed.
///
/// ```rust
/// use fpcore::typeclass::semigroup::{NumberMultiply, Semigroup};
///
/// let mut consumed = 0;
/// let factors = [1, 0, 3].into_iter().inspect(|_| consumed += 1);
/// assert_eq!(NumberMultiply.combine_iter(2, factors), 0);
/// assert_eq!(consumed, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberMultiply;

macro_rules! impl_number_semigroups {
    ($($number:ty => $zero:expr),* $(,)?) => {
        $(
            impl Semigroup<$number> for NumberSum {
                fn combine(&self, left: $number, right: $number) -> $number {
                    left + right
                }
            }

            impl Semigroup<$number> for NumberMultiply {
                fn combine(&self, left: $number, right: $number) -> $number {
                    left * right
                }

                #[allow(clippy::float_cmp)]
                fn combine_many(
                    &self,
                    start: $number,
                    collection: &mut dyn Iterator<Item = $number>,
                ) -> $number {
                    if start == $zero {
                        return $zero;
                    }
                    let mut product = start;
                    for factor in collection {
                        if factor == $zero {
                            return $zero;
                        }
                        product = product * factor;
                    }
                    product
                }
            }
        )*
    };
}

impl_number_semigroups!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// Keeps the left operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct First;

impl<A> Semigroup<A> for First {
    fn combine(&self, left: A, _right: A) -> A {
        left
    }

    fn combine_many(&self, start: A, _collection: &mut dyn Iterator<Item = A>) -> A {
        start
    }
}

/// Always return the first argument.
pub const fn first() -> First {
    First
}

/// Keeps the right operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Last;

impl<A> Semigroup<A> for Last {
    fn combine(&self, _left: A, right: A) -> A {
        right
    }

    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        collection.last().unwrap_or(start)
    }
}

/// Always return the last argument.
///
/// `combine_many` scans the whole collection and returns its final element,
/// or the start value when the collection is empty.
pub const fn last() -> Last {
    Last
}

// =============================================================================
// Order-derived Instances
// =============================================================================

/// Keeps the smaller operand; ties keep the right one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min<O> {
    order: O,
}

impl<A, O: Order<A>> Semigroup<A> for Min<O> {
    fn combine(&self, left: A, right: A) -> A {
        if self.order.compare(&left, &right) == Ordering::Less {
            left
        } else {
            right
        }
    }
}

/// `Semigroup` that returns last minimum of elements.
///
/// ```rust
/// use fpcore::typeclass::{order, semigroup::{self, Semigroup}};
///
/// let by_key = order::by_key(|pair: &(u8, char)| pair.0, order::Natural);
/// assert_eq!(semigroup::min(by_key).combine((1, 'a'), (1, 'b')), (1, 'b'));
/// ```
pub const fn min<O>(order: O) -> Min<O> {
    Min { order }
}

/// Keeps the larger operand; ties keep the right one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max<O> {
    order: O,
}

impl<A, O: Order<A>> Semigroup<A> for Max<O> {
    fn combine(&self, left: A, right: A) -> A {
        if self.order.compare(&left, &right) == Ordering::Greater {
            left
        } else {
            right
        }
    }
}

/// `Semigroup` that returns last maximum of elements.
pub const fn max<O>(order: O) -> Max<O> {
    Max { order }
}

// =============================================================================
// Combinators
// =============================================================================

/// The dual of a semigroup.
#[derive(Debug, Clone, Copy)]
pub struct Reverse<S> {
    pub(crate) semigroup: S,
}

impl<A, S: Semigroup<A>> Semigroup<A> for Reverse<S> {
    fn combine(&self, left: A, right: A) -> A {
        self.semigroup.combine(right, left)
    }

    fn combine_many(&self, start: A, collection: &mut dyn Iterator<Item = A>) -> A {
        let mut reversed: Vec<A> = collection.collect();
        reversed.reverse();
        let mut reversed = reversed.into_iter();
        match reversed.next() {
            Some(newest) => {
                let folded = self.semigroup.combine_many(newest, &mut reversed);
                self.semigroup.combine(folded, start)
            }
            None => start,
        }
    }
}

/// The dual of a `Semigroup`, obtained by flipping the arguments of `combine`.
///
/// ```rust
/// use fpcore::typeclass::semigroup::{self, Semigroup, StringConcat};
///
/// let prepend = semigroup::reverse(StringConcat);
/// assert_eq!(prepend.combine("a".to_string(), "b".to_string()), "ba");
/// ```
pub const fn reverse<S>(semigroup: S) -> Reverse<S> {
    Reverse { semigroup }
}

/// Inserts a separator between the operands.
#[derive(Debug, Clone, Copy)]
pub struct Intercalate<S, A> {
    semigroup: S,
    separator: A,
}

impl<A: Clone, S: Semigroup<A>> Semigroup<A> for Intercalate<S, A> {
    fn combine(&self, left: A, right: A) -> A {
        self.semigroup
            .combine_many(left, &mut [self.separator.clone(), right].into_iter())
    }
}

/// Combines `left`, `separator` and `right`, in that order.
///
/// ```rust
/// use fpcore::typeclass::semigroup::{self, Semigroup, StringConcat};
///
/// let csv = semigroup::intercalate(",".to_string(), StringConcat);
/// assert_eq!(csv.combine_iter("a".into(), ["b".into(), "c".into()]), "a,b,c");
/// ```
pub const fn intercalate<A: Clone, S>(separator: A, semigroup: S) -> Intercalate<S, A> {
    Intercalate {
        semigroup,
        separator,
    }
}

/// A semigroup over `A` transported to `B`.
pub struct Imap<S, To, From, A> {
    semigroup: S,
    to: To,
    from: From,
    marker: PhantomData<fn(A) -> A>,
}

impl<S: Clone, To: Clone, From: Clone, A> Clone for Imap<S, To, From, A> {
    fn clone(&self) -> Self {
        Self {
            semigroup: self.semigroup.clone(),
            to: self.to.clone(),
            from: self.from.clone(),
            marker: PhantomData,
        }
    }
}

impl<S: std::fmt::Debug, To, From, A> std::fmt::Debug for Imap<S, To, From, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Imap")
            .field("semigroup", &self.semigroup)
            .finish_non_exhaustive()
    }
}

impl<A, B, S, To, From> Semigroup<B> for Imap<S, To, From, A>
where
    S: Semigroup<A>,
    To: Fn(A) -> B,
    From: Fn(&B) -> A,
{
    fn combine(&self, left: B, right: B) -> B {
        (self.to)(
            self.semigroup
                .combine((self.from)(&left), (self.from)(&right)),
        )
    }

    fn combine_many(&self, start: B, collection: &mut dyn Iterator<Item = B>) -> B {
        let mut converted = collection.map(|element| (self.from)(&element));
        (self.to)(
            self.semigroup
                .combine_many((self.from)(&start), &mut converted),
        )
    }
}

/// Transports a semigroup across the isomorphism `to` / `from`.
///
/// ```rust
/// use fpcore::typeclass::semigroup::{self, NumberSum, Semigroup};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(u32);
///
/// let meters = semigroup::imap(Meters, |value: &Meters| value.0, NumberSum);
/// assert_eq!(meters.combine(Meters(2), Meters(3)), Meters(5));
/// ```
pub const fn imap<A, B, S, To, From>(to: To, from: From, semigroup: S) -> Imap<S, To, From, A>
where
    S: Semigroup<A>,
    To: Fn(A) -> B,
    From: Fn(&B) -> A,
{
    Imap {
        semigroup,
        to,
        from,
        marker: PhantomData,
    }
}

// =============================================================================
// Tests
// =============================================================================
