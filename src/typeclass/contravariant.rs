//! Contravariant type class - mapping over consumed values.
//!
//! A contravariant shape *consumes* values of its target type. To turn a
//! consumer of `A` into a consumer of `B`, it is enough to say how to get an
//! `A` out of a `B`. [`Predicate`](crate::predicate::Predicate) is the
//! canonical instance.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::contramap(fa, |a| a.clone()) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! F::contramap(F::contramap(fa, f), g) == F::contramap(fa, |c| f(&g(c)))
//! ```

use super::invariant::Invariant;

/// A type class for shapes that can be pre-composed with a function `&B -> A`.
pub trait Contravariant: Invariant {
    /// Adapts `value` to consume `B` by converting each `B` with `function`.
    fn contramap<R, O, E, A, B>(
        value: Self::Kind<R, O, E, A>,
        function: impl Fn(&B) -> A + Send + Sync + 'static,
    ) -> Self::Kind<R, O, E, B>
    where
        A: 'static,
        B: 'static;
}

/// `imap` for a contravariant shape: only `from` is used.
///
/// Contravariant instances implement [`Invariant`] through this function.
pub fn imap<F, R, O, E, A, B>(
    value: F::Kind<R, O, E, A>,
    _to: impl Fn(A) -> B,
    from: impl Fn(&B) -> A + Send + Sync + 'static,
) -> F::Kind<R, O, E, B>
where
    F: Contravariant,
    A: 'static,
    B: 'static,
{
    F::contramap::<R, O, E, A, B>(value, from)
}
