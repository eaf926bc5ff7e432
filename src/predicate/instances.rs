//! Type class instances for [`Predicate`].

use crate::typeclass::{
    Contravariant, Invariant, Monoid, NonEmptyVec, Of, Product, SemiProduct, Semigroup, TypeLambda,
};

use super::Predicate;

// =============================================================================
// Semigroups and Monoids
// =============================================================================

/// Combines predicates with [`Predicate::or`]; identity rejects everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

/// Combines predicates with [`Predicate::and`]; identity accepts everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl<A: ?Sized + 'static> Semigroup<Predicate<A>> for Any {
    fn combine(&self, left: Predicate<A>, right: Predicate<A>) -> Predicate<A> {
        left.or(right)
    }
}

impl<A: ?Sized + 'static> Monoid<Predicate<A>> for Any {
    fn empty(&self) -> Predicate<A> {
        Predicate::never()
    }
}

impl<A: ?Sized + 'static> Semigroup<Predicate<A>> for All {
    fn combine(&self, left: Predicate<A>, right: Predicate<A>) -> Predicate<A> {
        left.and(right)
    }
}

impl<A: ?Sized + 'static> Monoid<Predicate<A>> for All {
    fn empty(&self) -> Predicate<A> {
        Predicate::always()
    }
}

/// Disjunction semigroup.
pub const fn semigroup_any() -> Any {
    Any
}

/// Conjunction semigroup.
pub const fn semigroup_all() -> All {
    All
}

/// Disjunction monoid, identity [`Predicate::never`].
///
/// ```rust
/// use fpcore::predicate::{self, Predicate};
/// use fpcore::typeclass::Monoid;
///
/// let small_or_even = predicate::monoid_any().combine_all_iter([
///     Predicate::new(|value: &u32| *value < 3),
///     Predicate::new(|value: &u32| value % 2 == 0),
/// ]);
/// assert!(small_or_even.test(&8));
/// assert!(!small_or_even.test(&7));
/// ```
pub const fn monoid_any() -> Any {
    Any
}

/// Conjunction monoid, identity [`Predicate::always`].
pub const fn monoid_all() -> All {
    All
}

// =============================================================================
// Predicate Brand
// =============================================================================

/// Brand for [`Predicate`]. No context slot is used.
///
/// ```rust
/// use fpcore::predicate::{Predicate, PredicateTypeLambda};
/// use fpcore::typeclass::semi_product;
///
/// let point = semi_product::tuple3::<PredicateTypeLambda, (), (), (), _, _, _>(
///     Predicate::new(|x: &i32| *x >= 0),
///     Predicate::new(|y: &i32| *y >= 0),
///     Predicate::new(|label: &String| !label.is_empty()),
/// );
/// assert!(point.test(&(1, 2, "origin".to_string())));
/// assert!(!point.test(&(1, -2, "origin".to_string())));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum PredicateTypeLambda {}

impl TypeLambda for PredicateTypeLambda {
    type Kind<R, O, E, A> = Predicate<A>;
}

impl Invariant for PredicateTypeLambda {
    fn imap<R, O, E, A, B>(
        value: Predicate<A>,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(&B) -> A + Send + Sync + 'static,
    ) -> Predicate<B>
    where
        A: 'static,
        B: 'static,
    {
        crate::typeclass::contravariant::imap::<Self, R, O, E, A, B>(value, to, from)
    }
}

impl Contravariant for PredicateTypeLambda {
    fn contramap<R, O, E, A, B>(
        value: Predicate<A>,
        function: impl Fn(&B) -> A + Send + Sync + 'static,
    ) -> Predicate<B>
    where
        A: 'static,
        B: 'static,
    {
        value.contramap(function)
    }
}

impl Of for PredicateTypeLambda {
    fn of<R, O, E, A>(_value: A) -> Predicate<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        Predicate::always()
    }
}

impl SemiProduct for PredicateTypeLambda {
    fn product<R, O, E, A, B>(value: Predicate<A>, that: Predicate<B>) -> Predicate<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        value.product(that)
    }

    /// Collects `collection` when the predicate is built. Use
    /// [`Predicate::product_many`] directly to keep a cloneable tail
    /// unevaluated until the head passes.
    fn product_many<R, O, E, A>(
        value: Predicate<A>,
        collection: impl IntoIterator<Item = Predicate<A>>,
    ) -> Predicate<NonEmptyVec<A>>
    where
        A: 'static,
    {
        let tail: Vec<Predicate<A>> = collection.into_iter().collect();
        value.product_many(tail)
    }
}

impl Product for PredicateTypeLambda {
    fn product_all<R, O, E, A>(collection: impl IntoIterator<Item = Predicate<A>>) -> Predicate<Vec<A>>
    where
        A: 'static,
    {
        super::product_all(collection)
    }
}
