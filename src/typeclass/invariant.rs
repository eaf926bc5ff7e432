//! Invariant type class - mapping across an isomorphism.
//!
//! `Invariant` is the weakest mapping capability: a shape can be moved from
//! `A` to `B` only when conversions are supplied in *both* directions. Every
//! [`Covariant`](super::Covariant) shape uses only `to`; every
//! [`Contravariant`](super::Contravariant) shape uses only `from`; a
//! semigroup needs both, because it consumes and produces its target.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::imap(fa, |a| a, |a| a.clone()) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! F::imap(F::imap(fa, f1, g1), f2, g2) == F::imap(fa, |a| f2(f1(a)), |c| g1(&g2(c)))
//! ```

use super::higher::TypeLambda;

/// A type class for shapes that map along an isomorphism.
///
/// Closures are `Send + Sync + 'static` so shapes that store them (shared
/// semigroups, predicates) stay shareable across threads.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Invariant, OptionTypeLambda};
///
/// let wrapped = OptionTypeLambda::imap::<(), (), (), _, _>(
///     Some(21),
///     |value: i32| value * 2,
///     |value: &i32| value / 2,
/// );
/// assert_eq!(wrapped, Some(42));
/// ```
pub trait Invariant: TypeLambda {
    /// Moves `value` from `A` to `B` along `to` and `from`.
    fn imap<R, O, E, A, B>(
        value: Self::Kind<R, O, E, A>,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(&B) -> A + Send + Sync + 'static,
    ) -> Self::Kind<R, O, E, B>
    where
        A: 'static,
        B: 'static;

    /// Wraps the target in a one-element tuple.
    ///
    /// ```rust
    /// use fpcore::typeclass::{Invariant, OptionTypeLambda};
    ///
    /// assert_eq!(OptionTypeLambda::tupled::<(), (), (), _>(Some('x')), Some(('x',)));
    /// ```
    fn tupled<R, O, E, A>(value: Self::Kind<R, O, E, A>) -> Self::Kind<R, O, E, (A,)>
    where
        A: Clone + 'static,
    {
        Self::imap::<R, O, E, A, (A,)>(value, |target| (target,), |tuple: &(A,)| tuple.0.clone())
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

macro_rules! impl_invariant_via_covariant {
    ($($brand:ty),* $(,)?) => {
        $(
            impl Invariant for $brand {
                fn imap<R, O, E, A, B>(
                    value: Self::Kind<R, O, E, A>,
                    to: impl Fn(A) -> B + Send + Sync + 'static,
                    from: impl Fn(&B) -> A + Send + Sync + 'static,
                ) -> Self::Kind<R, O, E, B>
                where
                    A: 'static,
                    B: 'static,
                {
                    super::covariant::imap::<Self, R, O, E, A, B>(value, to, from)
                }
            }
        )*
    };
}

impl_invariant_via_covariant!(
    super::higher::OptionTypeLambda,
    super::higher::ResultTypeLambda,
    super::higher::VecTypeLambda,
    super::higher::NonEmptyVecTypeLambda,
    super::higher::IdentityTypeLambda,
);
