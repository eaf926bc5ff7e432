//! Of type class - lifting a plain value into a shape.

use super::higher::{
    IdentityTypeLambda, NonEmptyVecTypeLambda, OptionTypeLambda, ResultTypeLambda, TypeLambda,
    VecTypeLambda,
};
use super::identity::Identity;
use super::non_empty::NonEmptyVec;

/// A type class for shapes with a canonical way to hold a single value.
///
/// Shapes that store the value behind a shared pointer (such as
/// [`SharedSemigroup`](super::SharedSemigroup)) need it to be
/// `Clone + Send + Sync + 'static`.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Of, OptionTypeLambda, ResultTypeLambda};
///
/// assert_eq!(OptionTypeLambda::of::<(), (), (), _>(1), Some(1));
/// assert_eq!(ResultTypeLambda::of::<(), (), String, _>(1), Ok(1));
/// assert_eq!(OptionTypeLambda::unit::<(), (), ()>(), Some(()));
/// ```
pub trait Of: TypeLambda {
    /// Lifts `value`.
    fn of<R, O, E, A>(value: A) -> Self::Kind<R, O, E, A>
    where
        A: Clone + Send + Sync + 'static;

    /// Lifts `()`.
    fn unit<R, O, E>() -> Self::Kind<R, O, E, ()> {
        Self::of::<R, O, E, ()>(())
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Of for OptionTypeLambda {
    fn of<R, O, E, A>(value: A) -> Option<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        Some(value)
    }
}

impl Of for ResultTypeLambda {
    fn of<R, O, E, A>(value: A) -> Result<A, E>
    where
        A: Clone + Send + Sync + 'static,
    {
        Ok(value)
    }
}

impl Of for VecTypeLambda {
    fn of<R, O, E, A>(value: A) -> Vec<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        vec![value]
    }
}

impl Of for NonEmptyVecTypeLambda {
    fn of<R, O, E, A>(value: A) -> NonEmptyVec<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        NonEmptyVec::singleton(value)
    }
}

impl Of for IdentityTypeLambda {
    fn of<R, O, E, A>(value: A) -> Identity<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        Identity(value)
    }
}
