//! `NonEmptyTraversable` type class - traversal without an empty case.
//!
//! A non-empty shape always has a first element, so its traversal never has
//! to lift an empty result. The effect therefore only needs to be a
//! [`SemiApplicative`]: `product_many` is enough, no `Of` or `product_all`.
//! This opens traversal to effects with no identity, such as shared
//! semigroups.

use super::applicative::SemiApplicative;
use super::covariant::Covariant;
use super::higher::{IdentityTypeLambda, Kind, NonEmptyVecTypeLambda};
use super::identity::Identity;
use super::non_empty::NonEmptyVec;

/// A type class for non-empty shapes traversable with a semi-applicative
/// effect.
///
/// # Laws
///
/// Same as [`Traversable`](super::Traversable): identity and composition,
/// with [`non_empty_traverse_composition`] in place of
/// [`traverse_composition`](super::traversable::traverse_composition).
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{NonEmptyTraversable, NonEmptyVec, NonEmptyVecTypeLambda, OptionTypeLambda};
///
/// let halves = NonEmptyVecTypeLambda::non_empty_traverse::<OptionTypeLambda, (), (), (), (), (), (), _, _>(
///     NonEmptyVec::new(4, vec![8]),
///     |value: i32| (value % 2 == 0).then(|| value / 2),
/// );
/// assert_eq!(halves, Some(NonEmptyVec::new(2, vec![4])));
/// ```
pub trait NonEmptyTraversable: Covariant {
    /// Applies the effectful `function` to each element, first element
    /// first, and collects the results inside the effect `F`.
    fn non_empty_traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: Self::Kind<TR, TO, TE, A>,
        function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, Self::Kind<TR, TO, TE, B>>
    where
        F: SemiApplicative,
        B: 'static;
}

/// Traverses two nested non-empty shapes in a single pass.
#[allow(clippy::type_complexity)]
pub fn non_empty_traverse_composition<T, G, F, R, O, E, TR, TO, TE, GR, GO, GE, A, B>(
    value: Kind<T, TR, TO, TE, Kind<G, GR, GO, GE, A>>,
    mut function: impl FnMut(A) -> Kind<F, R, O, E, B>,
) -> Kind<F, R, O, E, Kind<T, TR, TO, TE, Kind<G, GR, GO, GE, B>>>
where
    T: NonEmptyTraversable,
    G: NonEmptyTraversable,
    F: SemiApplicative,
    B: 'static,
    Kind<G, GR, GO, GE, B>: 'static,
{
    T::non_empty_traverse::<F, R, O, E, TR, TO, TE, Kind<G, GR, GO, GE, A>, Kind<G, GR, GO, GE, B>>(
        value,
        |inner| G::non_empty_traverse::<F, R, O, E, GR, GO, GE, A, B>(inner, &mut function),
    )
}

/// Turns a non-empty shape of effects into an effect of a non-empty shape.
pub fn non_empty_sequence<T, F, R, O, E, TR, TO, TE, A>(
    value: Kind<T, TR, TO, TE, Kind<F, R, O, E, A>>,
) -> Kind<F, R, O, E, Kind<T, TR, TO, TE, A>>
where
    T: NonEmptyTraversable,
    F: SemiApplicative,
    A: 'static,
{
    T::non_empty_traverse::<F, R, O, E, TR, TO, TE, Kind<F, R, O, E, A>, A>(value, |effect| effect)
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl NonEmptyTraversable for NonEmptyVecTypeLambda {
    fn non_empty_traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: NonEmptyVec<A>,
        mut function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, NonEmptyVec<B>>
    where
        F: SemiApplicative,
        B: 'static,
    {
        let (head, tail) = value.into_parts();
        let head = function(head);
        F::product_many::<R, O, E, B>(head, tail.into_iter().map(function))
    }
}

impl NonEmptyTraversable for IdentityTypeLambda {
    fn non_empty_traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: Identity<A>,
        mut function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, Identity<B>>
    where
        F: SemiApplicative,
        B: 'static,
    {
        F::map::<R, O, E, B, Identity<B>>(function(value.0), Identity)
    }
}
