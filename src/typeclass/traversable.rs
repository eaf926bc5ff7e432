//! Traversable type class - effectful mapping over a container.
//!
//! `traverse` visits the elements of a container in order, runs an
//! effectful function on each, and rebuilds the container inside the
//! effect. With `Option` as the effect, parsing a `Vec<&str>` gives
//! `Some(Vec<i32>)` when every element parses and `None` as soon as one
//! does not; with `Result` the first error is kept. The effect is any
//! [`Applicative`] brand, so one `traverse` serves `Option`, `Result` and
//! `Identity`.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::{OptionTypeLambda, Traversable, VecTypeLambda};
//!
//! let numbers = VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), (), (), _, _>(
//!     vec!["1", "2", "3"],
//!     |text: &str| text.parse::<i32>().ok(),
//! );
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let failed = VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), (), (), _, _>(
//!     vec!["1", "not a number", "3"],
//!     |text: &str| text.parse::<i32>().ok(),
//! );
//! assert_eq!(failed, None);
//! ```

use super::applicative::Applicative;
use super::covariant::Covariant;
use super::higher::{IdentityTypeLambda, Kind, NonEmptyVecTypeLambda, VecTypeLambda};
use super::identity::Identity;
use super::non_empty::NonEmptyVec;

/// A type class for shapes that can be traversed with effects.
///
/// The traversable's own context slots are `TR`, `TO`, `TE`; the effect's are
/// `R`, `O`, `E`.
///
/// # Type Class Laws
///
/// ## Identity
///
/// Traversing with the identity effect is the same as mapping:
/// ```text
/// T::traverse::<IdentityTypeLambda, ..>(ta, |a| Identity(f(a))) == Identity(T::map(ta, f))
/// ```
///
/// ## Composition
///
/// Traversing a nested shape in one pass is the same as traversing the
/// inner shapes inside the outer traversal:
/// ```text
/// traverse_composition::<T, G, F, ..>(tga, f) == T::traverse(tga, |ga| G::traverse(ga, f))
/// ```
///
/// # Short-circuiting
///
/// Element functions are called in order and lazily: once the effect has
/// failed (`None`, `Err`), no further element is visited.
pub trait Traversable: Covariant {
    /// Applies the effectful `function` to each element and collects the
    /// results inside the effect `F`.
    fn traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: Self::Kind<TR, TO, TE, A>,
        function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, Self::Kind<TR, TO, TE, B>>
    where
        F: Applicative,
        B: 'static;
}

/// Traverses two nested traversable shapes in a single pass.
///
/// ```rust
/// use fpcore::typeclass::{traversable, OptionTypeLambda, VecTypeLambda};
///
/// let positive = |value: i32| (value > 0).then_some(value);
/// let nested = traversable::traverse_composition::<
///     VecTypeLambda, VecTypeLambda, OptionTypeLambda, (), (), (), (), (), (), (), (), (), _, _,
/// >(vec![vec![1, 2], vec![3]], positive);
/// assert_eq!(nested, Some(vec![vec![1, 2], vec![3]]));
/// ```
#[allow(clippy::type_complexity)]
pub fn traverse_composition<T, G, F, R, O, E, TR, TO, TE, GR, GO, GE, A, B>(
    value: Kind<T, TR, TO, TE, Kind<G, GR, GO, GE, A>>,
    mut function: impl FnMut(A) -> Kind<F, R, O, E, B>,
) -> Kind<F, R, O, E, Kind<T, TR, TO, TE, Kind<G, GR, GO, GE, B>>>
where
    T: Traversable,
    G: Traversable,
    F: Applicative,
    B: 'static,
    Kind<G, GR, GO, GE, B>: 'static,
{
    T::traverse::<F, R, O, E, TR, TO, TE, Kind<G, GR, GO, GE, A>, Kind<G, GR, GO, GE, B>>(
        value,
        |inner| G::traverse::<F, R, O, E, GR, GO, GE, A, B>(inner, &mut function),
    )
}

/// Turns a shape of effects into an effect of a shape.
///
/// ```rust
/// use fpcore::typeclass::{traversable, OptionTypeLambda, VecTypeLambda};
///
/// let all = traversable::sequence::<VecTypeLambda, OptionTypeLambda, (), (), (), (), (), (), _>(
///     vec![Some(1), Some(2)],
/// );
/// assert_eq!(all, Some(vec![1, 2]));
/// ```
pub fn sequence<T, F, R, O, E, TR, TO, TE, A>(
    value: Kind<T, TR, TO, TE, Kind<F, R, O, E, A>>,
) -> Kind<F, R, O, E, Kind<T, TR, TO, TE, A>>
where
    T: Traversable,
    F: Applicative,
    A: 'static,
{
    T::traverse::<F, R, O, E, TR, TO, TE, Kind<F, R, O, E, A>, A>(value, |effect| effect)
}

/// Runs `function` on each element for its effect only, keeping the
/// original elements.
///
/// ```rust
/// use fpcore::typeclass::{traversable, ResultTypeLambda, VecTypeLambda};
///
/// let checked = traversable::traverse_tap::<VecTypeLambda, ResultTypeLambda, (), (), &str, (), (), (), _, _>(
///     vec![1, 2, 3],
///     |value: &i32| if *value > 0 { Ok(()) } else { Err("not positive") },
/// );
/// assert_eq!(checked, Ok(vec![1, 2, 3]));
/// ```
pub fn traverse_tap<T, F, R, O, E, TR, TO, TE, A, B>(
    value: Kind<T, TR, TO, TE, A>,
    mut function: impl FnMut(&A) -> Kind<F, R, O, E, B>,
) -> Kind<F, R, O, E, Kind<T, TR, TO, TE, A>>
where
    T: Traversable,
    F: Applicative,
    A: Clone + 'static,
{
    T::traverse::<F, R, O, E, TR, TO, TE, A, A>(value, |element| {
        let effect = function(&element);
        F::map::<R, O, E, B, A>(effect, move |_| element.clone())
    })
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Traversable for VecTypeLambda {
    fn traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: Vec<A>,
        function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, Vec<B>>
    where
        F: Applicative,
        B: 'static,
    {
        F::product_all::<R, O, E, B>(value.into_iter().map(function))
    }
}

impl Traversable for NonEmptyVecTypeLambda {
    fn traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: NonEmptyVec<A>,
        mut function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, NonEmptyVec<B>>
    where
        F: Applicative,
        B: 'static,
    {
        let (head, tail) = value.into_parts();
        let head = function(head);
        F::product_many::<R, O, E, B>(head, tail.into_iter().map(function))
    }
}

impl Traversable for IdentityTypeLambda {
    fn traverse<F, R, O, E, TR, TO, TE, A, B>(
        value: Identity<A>,
        mut function: impl FnMut(A) -> Kind<F, R, O, E, B>,
    ) -> Kind<F, R, O, E, Identity<B>>
    where
        F: Applicative,
        B: 'static,
    {
        F::map::<R, O, E, B, Identity<B>>(function(value.0), Identity)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::higher::{OptionTypeLambda, ResultTypeLambda};
    use rstest::rstest;

    fn parse_int(string: &str) -> Option<i32> {
        string.parse().ok()
    }

    fn validate_positive(number: i32) -> Result<i32, &'static str> {
        if number > 0 {
            Ok(number)
        } else {
            Err("not positive")
        }
    }

    fn traverse_vec_option(values: Vec<&str>) -> Option<Vec<i32>> {
        VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), (), (), _, _>(values, parse_int)
    }

    fn traverse_vec_result(values: Vec<i32>) -> Result<Vec<i32>, &'static str> {
        VecTypeLambda::traverse::<ResultTypeLambda, (), (), &'static str, (), (), (), _, _>(
            values,
            validate_positive,
        )
    }

    // =========================================================================
    // Vec traverse
    // =========================================================================

    #[rstest]
    #[case(vec!["1", "2", "3"], Some(vec![1, 2, 3]))]
    #[case(vec!["1", "x", "3"], None)]
    #[case(vec!["x", "2"], None)]
    #[case(vec!["1", "x"], None)]
    #[case(vec![], Some(vec![]))]
    #[case(vec!["7"], Some(vec![7]))]
    fn vec_traverse_option(#[case] input: Vec<&str>, #[case] expected: Option<Vec<i32>>) {
        assert_eq!(traverse_vec_option(input), expected);
    }

    #[rstest]
    #[case(vec![1, 2, 3], Ok(vec![1, 2, 3]))]
    #[case(vec![1, -2, -3], Err("not positive"))]
    #[case(vec![], Ok(vec![]))]
    fn vec_traverse_result(#[case] input: Vec<i32>, #[case] expected: Result<Vec<i32>, &'static str>) {
        assert_eq!(traverse_vec_result(input), expected);
    }

    #[rstest]
    fn vec_traverse_stops_after_first_failure() {
        let mut visited = Vec::new();
        let result = VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), (), (), _, _>(
            vec![1, -2, 3],
            |value: i32| {
                visited.push(value);
                (value > 0).then_some(value)
            },
        );
        assert_eq!(result, None);
        assert_eq!(visited, vec![1, -2]);
    }

    #[rstest]
    fn vec_traverse_identity_is_map() {
        let traversed = VecTypeLambda::traverse::<IdentityTypeLambda, (), (), (), (), (), (), _, _>(
            vec![1, 2],
            |value: i32| Identity(value * 3),
        );
        let mapped = VecTypeLambda::map::<(), (), (), _, _>(vec![1, 2], |value| value * 3);
        assert_eq!(traversed, Identity(mapped));
    }

    // =========================================================================
    // NonEmptyVec and Identity traverse
    // =========================================================================

    #[rstest]
    #[case(NonEmptyVec::new("1", vec!["2"]), Some(NonEmptyVec::new(1, vec![2])))]
    #[case(NonEmptyVec::new("x", vec!["2"]), None)]
    #[case(NonEmptyVec::new("1", vec!["x"]), None)]
    fn non_empty_traverse_option(
        #[case] input: NonEmptyVec<&str>,
        #[case] expected: Option<NonEmptyVec<i32>>,
    ) {
        let result = NonEmptyVecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), (), (), _, _>(
            input, parse_int,
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    fn non_empty_traverse_skips_tail_when_head_fails() {
        let mut visited = Vec::new();
        let result = NonEmptyVecTypeLambda::traverse::<ResultTypeLambda, (), (), &str, (), (), (), _, _>(
            NonEmptyVec::new(-1, vec![2, 3]),
            |value: i32| {
                visited.push(value);
                validate_positive(value)
            },
        );
        assert_eq!(result, Err("not positive"));
        assert_eq!(visited, vec![-1]);
    }

    #[rstest]
    #[case(Identity(5), Ok(Identity(5)))]
    #[case(Identity(-5), Err("not positive"))]
    fn identity_traverse_result(
        #[case] input: Identity<i32>,
        #[case] expected: Result<Identity<i32>, &'static str>,
    ) {
        let result = IdentityTypeLambda::traverse::<ResultTypeLambda, (), (), &str, (), (), (), _, _>(
            input,
            validate_positive,
        );
        assert_eq!(result, expected);
    }

    // =========================================================================
    // Derived operations
    // =========================================================================

    #[rstest]
    #[case(vec![None, Some(2)], None)]
    #[case(vec![Some(1), Some(2)], Some(vec![1, 2]))]
    #[case(vec![], Some(vec![]))]
    fn sequence_vec_of_options(#[case] input: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
        let result = sequence::<VecTypeLambda, OptionTypeLambda, (), (), (), (), (), (), _>(input);
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(vec![vec![1, 2], vec![3]], Some(vec![vec![1, 2], vec![3]]))]
    #[case(vec![vec![1, -2], vec![3]], None)]
    fn traverse_composition_over_nested_vectors(
        #[case] input: Vec<Vec<i32>>,
        #[case] expected: Option<Vec<Vec<i32>>>,
    ) {
        let positive = |value: i32| (value > 0).then_some(value);
        let result = traverse_composition::<
            VecTypeLambda,
            VecTypeLambda,
            OptionTypeLambda,
            (),
            (),
            (),
            (),
            (),
            (),
            (),
            (),
            (),
            _,
            _,
        >(input, positive);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn traverse_tap_keeps_original_elements() {
        let mut seen = Vec::new();
        let result = traverse_tap::<VecTypeLambda, OptionTypeLambda, (), (), (), (), (), (), _, _>(
            vec!["a", "b"],
            |element: &&str| {
                seen.push(element.to_uppercase());
                Some(element.len())
            },
        );
        assert_eq!(result, Some(vec!["a", "b"]));
        assert_eq!(seen, vec!["A", "B"]);
    }

    #[rstest]
    fn traverse_tap_fails_with_effect() {
        let result = traverse_tap::<VecTypeLambda, ResultTypeLambda, (), (), &str, (), (), (), _, _>(
            vec![1, 0, 2],
            |element: &i32| if *element == 0 { Err("zero") } else { Ok(()) },
        );
        assert_eq!(result, Err("zero"));
    }
}
