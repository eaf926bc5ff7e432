//! Covariant type class - mapping over produced values.
//!
//! A covariant shape *produces* values of its target type, so a plain
//! function `A -> B` is enough to move it to `B`. This is the `Functor` of
//! other libraries, written over brands.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::map(fa, |a| a) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |a| g(f(a)))
//! ```

use super::higher::{
    IdentityTypeLambda, NonEmptyVecTypeLambda, OptionTypeLambda, ResultTypeLambda, VecTypeLambda,
};
use super::identity::Identity;
use super::invariant::Invariant;
use super::non_empty::NonEmptyVec;

/// A type class for shapes that can be mapped with a function `A -> B`.
///
/// `map` takes `FnMut` because multi-element shapes call it once per
/// element, in order.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Covariant, VecTypeLambda};
///
/// let lengths = VecTypeLambda::map::<(), (), (), _, _>(vec!["a", "bcd"], str::len);
/// assert_eq!(lengths, vec![1, 3]);
/// ```
pub trait Covariant: Invariant {
    /// Applies `function` to every target value.
    fn map<R, O, E, A, B>(
        value: Self::Kind<R, O, E, A>,
        function: impl FnMut(A) -> B,
    ) -> Self::Kind<R, O, E, B>;

    /// Replaces every target value with a clone of `replacement`.
    fn as_value<R, O, E, A, B>(value: Self::Kind<R, O, E, A>, replacement: B) -> Self::Kind<R, O, E, B>
    where
        B: Clone,
    {
        Self::map::<R, O, E, A, B>(value, move |_| replacement.clone())
    }

    /// Discards every target value.
    fn as_unit<R, O, E, A>(value: Self::Kind<R, O, E, A>) -> Self::Kind<R, O, E, ()> {
        Self::map::<R, O, E, A, ()>(value, |_| ())
    }
}

/// `imap` for a covariant shape: only `to` is used.
///
/// Covariant instances implement [`Invariant`] through this function.
pub fn imap<F, R, O, E, A, B>(
    value: F::Kind<R, O, E, A>,
    to: impl Fn(A) -> B,
    _from: impl Fn(&B) -> A,
) -> F::Kind<R, O, E, B>
where
    F: Covariant,
{
    F::map::<R, O, E, A, B>(value, to)
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Covariant for OptionTypeLambda {
    fn map<R, O, E, A, B>(value: Option<A>, function: impl FnMut(A) -> B) -> Option<B> {
        value.map(function)
    }
}

impl Covariant for ResultTypeLambda {
    fn map<R, O, E, A, B>(value: Result<A, E>, function: impl FnMut(A) -> B) -> Result<B, E> {
        value.map(function)
    }
}

impl Covariant for VecTypeLambda {
    fn map<R, O, E, A, B>(value: Vec<A>, function: impl FnMut(A) -> B) -> Vec<B> {
        value.into_iter().map(function).collect()
    }
}

impl Covariant for NonEmptyVecTypeLambda {
    fn map<R, O, E, A, B>(value: NonEmptyVec<A>, mut function: impl FnMut(A) -> B) -> NonEmptyVec<B> {
        let (head, tail) = value.into_parts();
        let head = function(head);
        NonEmptyVec::new(head, tail.into_iter().map(function).collect())
    }
}

impl Covariant for IdentityTypeLambda {
    fn map<R, O, E, A, B>(value: Identity<A>, mut function: impl FnMut(A) -> B) -> Identity<B> {
        Identity(function(value.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_map(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionTypeLambda::map::<(), (), (), _, _>(input, |x| x * 2), expected);
    }

    #[rstest]
    fn non_empty_map_visits_head_first() {
        let mut visited = Vec::new();
        let mapped = NonEmptyVecTypeLambda::map::<(), (), (), _, _>(
            NonEmptyVec::new(1, vec![2, 3]),
            |x| {
                visited.push(x);
                x * 10
            },
        );
        assert_eq!(mapped, NonEmptyVec::new(10, vec![20, 30]));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[rstest]
    fn as_value_and_as_unit() {
        assert_eq!(
            VecTypeLambda::as_value::<(), (), (), _, _>(vec![1, 2], 'x'),
            vec!['x', 'x']
        );
        assert_eq!(
            ResultTypeLambda::as_unit::<(), (), String, _>(Ok::<i32, String>(5)),
            Ok(())
        );
    }

    #[rstest]
    fn identity_map_law() {
        let value = Identity(7);
        assert_eq!(IdentityTypeLambda::map::<(), (), (), _, _>(value, |x| x), value);
    }

    #[rstest]
    fn imap_ignores_backward_direction() {
        let mapped = imap::<OptionTypeLambda, (), (), (), _, _>(
            Some(3),
            |x: i32| x + 1,
            |_: &i32| unreachable!(),
        );
        assert_eq!(mapped, Some(4));
    }
}
