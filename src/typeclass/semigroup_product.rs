//! Product semigroups and the semigroup brand.
//!
//! Semigroups over compound values are built from one semigroup per
//! component:
//!
//! - [`tuple`] for tuples, checked by the type system;
//! - [`positional`] / [`non_empty_positional`] for vectors, checked at run
//!   time against the number of configured instances;
//! - [`record`] for keyed maps, checked at run time against the configured
//!   keys.
//!
//! [`SemigroupTypeLambda`] makes erased semigroups a shape, so the
//! kind-polymorphic derivations of [`semi_product`](super::semi_product)
//! apply to them.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use super::error::ContractViolation;
use super::higher::TypeLambda;
use super::invariant::Invariant;
use super::non_empty::NonEmptyVec;
use super::of::Of;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::{self, Semigroup};

// =============================================================================
// Tuple
// =============================================================================

/// A semigroup over tuples, one component semigroup per position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tuple<T>(pub(crate) T);

/// Combines tuples component-wise with one semigroup per position.
///
/// Arities 0 through 8 are supported. A tuple of semigroups of one arity
/// cannot be used on a tuple of another:
///
/// ```compile_fail
/// use fpcore::typeclass::semigroup::{NumberSum, Semigroup};
/// use fpcore::typeclass::semigroup_product::tuple;
///
/// let pair = tuple((NumberSum, NumberSum));
/// let _ = pair.combine((1, 2, 3), (4, 5, 6));
/// ```
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::semigroup::{NumberSum, Semigroup, StringConcat};
/// use fpcore::typeclass::semigroup_product::tuple;
///
/// let both = tuple((NumberSum, StringConcat));
/// assert_eq!(both.combine((1, "a".to_string()), (2, "b".to_string())), (3, "ab".to_string()));
/// ```
pub const fn tuple<T>(semigroups: T) -> Tuple<T> {
    Tuple(semigroups)
}

macro_rules! impl_tuple_semigroup {
    ($(($semigroup:ident, $value:ident, $index:tt)),*) => {
        impl<$($semigroup, $value),*> Semigroup<($($value,)*)> for Tuple<($($semigroup,)*)>
        where
            $($semigroup: Semigroup<$value>,)*
        {
            #[allow(unused_variables, clippy::unused_unit)]
            fn combine(&self, left: ($($value,)*), right: ($($value,)*)) -> ($($value,)*) {
                ($(self.0.$index.combine(left.$index, right.$index),)*)
            }
        }
    };
}

impl_tuple_semigroup!();
impl_tuple_semigroup!((S0, A0, 0));
impl_tuple_semigroup!((S0, A0, 0), (S1, A1, 1));
impl_tuple_semigroup!((S0, A0, 0), (S1, A1, 1), (S2, A2, 2));
impl_tuple_semigroup!((S0, A0, 0), (S1, A1, 1), (S2, A2, 2), (S3, A3, 3));
impl_tuple_semigroup!((S0, A0, 0), (S1, A1, 1), (S2, A2, 2), (S3, A3, 3), (S4, A4, 4));
impl_tuple_semigroup!(
    (S0, A0, 0),
    (S1, A1, 1),
    (S2, A2, 2),
    (S3, A3, 3),
    (S4, A4, 4),
    (S5, A5, 5)
);
impl_tuple_semigroup!(
    (S0, A0, 0),
    (S1, A1, 1),
    (S2, A2, 2),
    (S3, A3, 3),
    (S4, A4, 4),
    (S5, A5, 5),
    (S6, A6, 6)
);
impl_tuple_semigroup!(
    (S0, A0, 0),
    (S1, A1, 1),
    (S2, A2, 2),
    (S3, A3, 3),
    (S4, A4, 4),
    (S5, A5, 5),
    (S6, A6, 6),
    (S7, A7, 7)
);

// =============================================================================
// Positional
// =============================================================================

/// A semigroup over vectors, one semigroup per index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional<S> {
    pub(crate) semigroups: Vec<S>,
}

/// Combines vectors index-wise, one semigroup per index.
///
/// Both operands must have exactly as many elements as there are
/// semigroups. [`Positional::try_combine`] reports a mismatch;
/// `combine` panics on one.
///
/// ```rust
/// use fpcore::typeclass::semigroup::{NumberSum, Semigroup};
/// use fpcore::typeclass::semigroup_product::positional;
///
/// let sums = positional([NumberSum, NumberSum]);
/// assert_eq!(sums.combine(vec![1, 2], vec![10, 20]), vec![11, 22]);
/// assert!(sums.try_combine(vec![1], vec![10, 20]).is_err());
/// ```
pub fn positional<S>(semigroups: impl IntoIterator<Item = S>) -> Positional<S> {
    Positional {
        semigroups: semigroups.into_iter().collect(),
    }
}

impl<S> Positional<S> {
    /// Number of configured semigroups.
    pub fn len(&self) -> usize {
        self.semigroups.len()
    }

    /// Whether no semigroup is configured.
    pub fn is_empty(&self) -> bool {
        self.semigroups.is_empty()
    }

    pub(crate) fn check_length(&self, combinator: &'static str, actual: usize) -> Result<(), ContractViolation> {
        if actual == self.semigroups.len() {
            Ok(())
        } else {
            Err(ContractViolation::LengthMismatch {
                combinator,
                expected: self.semigroups.len(),
                actual,
            })
        }
    }

    /// Combines `left` and `right` index-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::LengthMismatch`] if either operand's
    /// length differs from the number of semigroups.
    pub fn try_combine<A>(&self, left: Vec<A>, right: Vec<A>) -> Result<Vec<A>, ContractViolation>
    where
        S: Semigroup<A>,
    {
        self.check_length("Positional", left.len())?;
        self.check_length("Positional", right.len())?;
        Ok(self
            .semigroups
            .iter()
            .zip(left.into_iter().zip(right))
            .map(|(semigroup, (first, second))| semigroup.combine(first, second))
            .collect())
    }
}

impl<A, S: Semigroup<A>> Semigroup<Vec<A>> for Positional<S> {
    /// # Panics
    ///
    /// Panics if either operand's length differs from the number of
    /// semigroups.
    fn combine(&self, left: Vec<A>, right: Vec<A>) -> Vec<A> {
        self.try_combine(left, right)
            .unwrap_or_else(|violation| panic!("{violation}"))
    }
}

/// A semigroup over non-empty vectors, one semigroup per index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyPositional<S> {
    pub(crate) head: S,
    pub(crate) tail: Positional<S>,
}

/// Combines non-empty vectors index-wise: `head` for the first element,
/// `tail` for the rest.
pub fn non_empty_positional<S>(head: S, tail: impl IntoIterator<Item = S>) -> NonEmptyPositional<S> {
    NonEmptyPositional {
        head,
        tail: positional(tail),
    }
}

impl<S> NonEmptyPositional<S> {
    /// Combines `left` and `right` index-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::LengthMismatch`] if either operand's
    /// length differs from the number of semigroups.
    pub fn try_combine<A>(
        &self,
        left: NonEmptyVec<A>,
        right: NonEmptyVec<A>,
    ) -> Result<NonEmptyVec<A>, ContractViolation>
    where
        S: Semigroup<A>,
    {
        let expected = self.tail.len() + 1;
        for actual in [left.len(), right.len()] {
            if actual != expected {
                return Err(ContractViolation::LengthMismatch {
                    combinator: "NonEmptyPositional",
                    expected,
                    actual,
                });
            }
        }
        let (left_head, left_tail) = left.into_parts();
        let (right_head, right_tail) = right.into_parts();
        let head = self.head.combine(left_head, right_head);
        let tail = self.tail.try_combine(left_tail, right_tail)?;
        Ok(NonEmptyVec::new(head, tail))
    }
}

impl<A, S: Semigroup<A>> Semigroup<NonEmptyVec<A>> for NonEmptyPositional<S> {
    /// # Panics
    ///
    /// Panics if either operand's length differs from the number of
    /// semigroups.
    fn combine(&self, left: NonEmptyVec<A>, right: NonEmptyVec<A>) -> NonEmptyVec<A> {
        self.try_combine(left, right)
            .unwrap_or_else(|violation| panic!("{violation}"))
    }
}

// =============================================================================
// Record
// =============================================================================

/// A semigroup over keyed maps, one semigroup per configured key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<K, S> {
    pub(crate) semigroups: BTreeMap<K, S>,
}

/// Combines maps key-wise, one semigroup per configured key.
///
/// Only configured keys appear in the result; other keys of the operands
/// are dropped. Every configured key must be present in both operands.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use fpcore::typeclass::semigroup::{NumberSum, Semigroup};
/// use fpcore::typeclass::semigroup_product::record;
///
/// let totals = record([("apples", NumberSum), ("pears", NumberSum)]);
/// let left = BTreeMap::from([("apples", 1), ("pears", 2)]);
/// let right = BTreeMap::from([("apples", 10), ("pears", 20)]);
/// assert_eq!(totals.combine(left, right), BTreeMap::from([("apples", 11), ("pears", 22)]));
/// ```
pub fn record<K: Ord, S>(semigroups: impl IntoIterator<Item = (K, S)>) -> Record<K, S> {
    Record {
        semigroups: semigroups.into_iter().collect(),
    }
}

impl<K: Ord + Clone + Debug, S> Record<K, S> {
    /// Combines `left` and `right` key-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::MissingKey`] for the first configured
    /// key absent from either operand.
    pub fn try_combine<A>(
        &self,
        mut left: BTreeMap<K, A>,
        mut right: BTreeMap<K, A>,
    ) -> Result<BTreeMap<K, A>, ContractViolation>
    where
        S: Semigroup<A>,
    {
        self.semigroups
            .iter()
            .map(|(key, semigroup)| {
                let missing = || ContractViolation::MissingKey {
                    combinator: "Record",
                    key: format!("{key:?}"),
                };
                let first = left.remove(key).ok_or_else(missing)?;
                let second = right.remove(key).ok_or_else(missing)?;
                Ok((key.clone(), semigroup.combine(first, second)))
            })
            .collect()
    }
}

impl<K: Ord + Clone + Debug, A, S: Semigroup<A>> Semigroup<BTreeMap<K, A>> for Record<K, S> {
    /// # Panics
    ///
    /// Panics if a configured key is missing from either operand.
    fn combine(&self, left: BTreeMap<K, A>, right: BTreeMap<K, A>) -> BTreeMap<K, A> {
        self.try_combine(left, right)
            .unwrap_or_else(|violation| panic!("{violation}"))
    }
}

// =============================================================================
// Semigroup Brand
// =============================================================================

/// A type-erased semigroup, cheap to clone and shareable across threads.
pub type SharedSemigroup<A> = Arc<dyn Semigroup<A> + Send + Sync>;

/// Erases a semigroup into a [`SharedSemigroup`].
pub fn shared<A, S>(semigroup: S) -> SharedSemigroup<A>
where
    S: Semigroup<A> + Send + Sync + 'static,
{
    Arc::new(semigroup)
}

/// Brand for [`SharedSemigroup`]. No context slot is used.
///
/// The brand is [`Invariant`] (a semigroup both consumes and produces its
/// target), [`SemiProduct`], [`Of`] and [`Product`], so the derivations of
/// [`semi_product`](super::semi_product) build semigroups over tuples.
///
/// ```rust
/// use fpcore::typeclass::semi_product;
/// use fpcore::typeclass::semigroup::{self, NumberSum, Semigroup, StringConcat};
/// use fpcore::typeclass::semigroup_product::{shared, SemigroupTypeLambda};
///
/// let triple = semi_product::tuple3::<SemigroupTypeLambda, (), (), (), _, _, _>(
///     shared(NumberSum),
///     shared(StringConcat),
///     shared(semigroup::last()),
/// );
/// assert_eq!(
///     triple.combine((1, "a".to_string(), 'x'), (2, "b".to_string(), 'y')),
///     (3, "ab".to_string(), 'y')
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub enum SemigroupTypeLambda {}

impl TypeLambda for SemigroupTypeLambda {
    type Kind<R, O, E, A> = SharedSemigroup<A>;
}

impl Invariant for SemigroupTypeLambda {
    fn imap<R, O, E, A, B>(
        value: SharedSemigroup<A>,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(&B) -> A + Send + Sync + 'static,
    ) -> SharedSemigroup<B>
    where
        A: 'static,
        B: 'static,
    {
        shared(semigroup::imap(to, from, value))
    }
}

impl SemiProduct for SemigroupTypeLambda {
    fn product<R, O, E, A, B>(
        value: SharedSemigroup<A>,
        that: SharedSemigroup<B>,
    ) -> SharedSemigroup<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        shared(tuple((value, that)))
    }

    fn product_many<R, O, E, A>(
        value: SharedSemigroup<A>,
        collection: impl IntoIterator<Item = SharedSemigroup<A>>,
    ) -> SharedSemigroup<NonEmptyVec<A>>
    where
        A: 'static,
    {
        shared(non_empty_positional(value, collection))
    }
}

impl Of for SemigroupTypeLambda {
    fn of<R, O, E, A>(value: A) -> SharedSemigroup<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        shared(semigroup::constant(value))
    }
}

impl Product for SemigroupTypeLambda {
    fn product_all<R, O, E, A>(
        collection: impl IntoIterator<Item = SharedSemigroup<A>>,
    ) -> SharedSemigroup<Vec<A>>
    where
        A: 'static,
    {
        shared(positional(collection))
    }
}
