//! `SemiProduct` type class - pairing shapes without an identity.
//!
//! `product` pairs two shapes into a shape of pairs; `product_many` pairs a
//! first shape with any number of further shapes into a shape of
//! [`NonEmptyVec`]. Everything else in this module (the `tuple2` ..
//! `tuple6` derivations and [`element`]) is written once against the trait
//! and works for every instance: `Option`, `Result`, `Identity`, shared semigroups and
//! predicates.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! F::product(F::product(a, b), c) ~ F::product(a, F::product(b, c))
//! ```
//!
//! up to the isomorphism `((a, b), c) <-> (a, (b, c))`.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::semi_product;
//! use fpcore::typeclass::OptionTypeLambda;
//!
//! let all = semi_product::tuple3::<OptionTypeLambda, (), (), (), _, _, _>(Some(1), Some('a'), Some(true));
//! assert_eq!(all, Some((1, 'a', true)));
//!
//! let missing = semi_product::tuple3::<OptionTypeLambda, (), (), (), i32, char, bool>(Some(1), None, Some(true));
//! assert_eq!(missing, None);
//! ```

use super::higher::{IdentityTypeLambda, Kind, OptionTypeLambda, ResultTypeLambda};
use super::identity::Identity;
use super::invariant::Invariant;
use super::non_empty::NonEmptyVec;

/// A type class for shapes that can be paired.
pub trait SemiProduct: Invariant {
    /// Pairs `value` with `that`.
    fn product<R, O, E, A, B>(
        value: Self::Kind<R, O, E, A>,
        that: Self::Kind<R, O, E, B>,
    ) -> Self::Kind<R, O, E, (A, B)>
    where
        A: 'static,
        B: 'static;

    /// Pairs `value` with every element of `collection`, in order.
    ///
    /// Instances that can fail stop consuming `collection` at the first
    /// failure.
    fn product_many<R, O, E, A>(
        value: Self::Kind<R, O, E, A>,
        collection: impl IntoIterator<Item = Self::Kind<R, O, E, A>>,
    ) -> Self::Kind<R, O, E, NonEmptyVec<A>>
    where
        A: 'static;
}

// =============================================================================
// Tuple Derivations
// =============================================================================

/// Pairs two shapes. Same as [`SemiProduct::product`].
pub fn tuple2<F, R, O, E, A, B>(
    first: Kind<F, R, O, E, A>,
    second: Kind<F, R, O, E, B>,
) -> Kind<F, R, O, E, (A, B)>
where
    F: SemiProduct,
    A: 'static,
    B: 'static,
{
    F::product::<R, O, E, A, B>(first, second)
}

macro_rules! impl_tuple_derivation {
    ($arity:literal, $previous:literal; $($init:ident $init_value:ident),+; $last:ident $last_value:ident) => {
        paste::paste! {
            #[doc = concat!("Combines ", stringify!($arity), " shapes into a shape of ", stringify!($arity), "-tuples.")]
            pub fn [<tuple $arity>]<F, R, O, E, $($init,)+ $last>(
                $($init_value: Kind<F, R, O, E, $init>,)+
                $last_value: Kind<F, R, O, E, $last>,
            ) -> Kind<F, R, O, E, ($($init,)+ $last)>
            where
                F: SemiProduct,
                $($init: Clone + 'static,)+
                $last: Clone + 'static,
            {
                let init = [<tuple $previous>]::<F, R, O, E, $($init),+>($($init_value),+);
                F::imap::<R, O, E, (($($init,)+), $last), ($($init,)+ $last)>(
                    F::product::<R, O, E, ($($init,)+), $last>(init, $last_value),
                    |(($($init_value,)+), $last_value)| ($($init_value,)+ $last_value),
                    |($($init_value,)+ $last_value): &($($init,)+ $last)| {
                        (($($init_value.clone(),)+), $last_value.clone())
                    },
                )
            }
        }
    };
}

impl_tuple_derivation!(3, 2; A first, B second; C third);
impl_tuple_derivation!(4, 3; A first, B second, C third; D fourth);
impl_tuple_derivation!(5, 4; A first, B second, C third, D fourth; G fifth);
impl_tuple_derivation!(6, 5; A first, B second, C third, D fourth, G fifth; H sixth);

// =============================================================================
// Appending Components
// =============================================================================

/// Tuples that can be extended by one component at the end.
pub trait AppendElement<B>: Sized {
    /// The tuple with a trailing `B`.
    type Output;

    /// Appends `last`.
    fn append(self, last: B) -> Self::Output;

    /// Clones a borrowed extended tuple back into its prefix and last
    /// component.
    fn split_last(whole: &Self::Output) -> (Self, B);
}

macro_rules! impl_append_element {
    ($($init:ident $init_value:ident),*) => {
        impl<$($init: Clone,)* B: Clone> AppendElement<B> for ($($init,)*) {
            type Output = ($($init,)* B,);

            fn append(self, last: B) -> Self::Output {
                let ($($init_value,)*) = self;
                ($($init_value,)* last,)
            }

            fn split_last(whole: &Self::Output) -> (Self, B) {
                let ($($init_value,)* last,) = whole;
                (($($init_value.clone(),)*), last.clone())
            }
        }
    };
}

impl_append_element!();
impl_append_element!(A0 first);
impl_append_element!(A0 first, A1 second);
impl_append_element!(A0 first, A1 second, A2 third);
impl_append_element!(A0 first, A1 second, A2 third, A3 fourth);
impl_append_element!(A0 first, A1 second, A2 third, A3 fourth, A4 fifth);

/// Appends the component held by `that` to the tuples held by `value`.
///
/// Starting from [`Of::unit`](super::Of::unit) or
/// [`Invariant::tupled`], repeated calls build a tuple shape one component
/// at a time.
///
/// ```rust
/// use fpcore::typeclass::semi_product;
/// use fpcore::typeclass::OptionTypeLambda;
///
/// let pair = Some((1, 'a'));
/// let triple = semi_product::element::<OptionTypeLambda, (), (), (), _, _>(pair, Some(true));
/// assert_eq!(triple, Some((1, 'a', true)));
/// ```
pub fn element<F, R, O, E, T, B>(
    value: Kind<F, R, O, E, T>,
    that: Kind<F, R, O, E, B>,
) -> Kind<F, R, O, E, <T as AppendElement<B>>::Output>
where
    F: SemiProduct,
    T: AppendElement<B> + 'static,
    B: 'static,
    <T as AppendElement<B>>::Output: 'static,
{
    F::imap::<R, O, E, (T, B), <T as AppendElement<B>>::Output>(
        F::product::<R, O, E, T, B>(value, that),
        |(init, last)| init.append(last),
        T::split_last,
    )
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl SemiProduct for OptionTypeLambda {
    fn product<R, O, E, A, B>(value: Option<A>, that: Option<B>) -> Option<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        value.zip(that)
    }

    fn product_many<R, O, E, A>(
        value: Option<A>,
        collection: impl IntoIterator<Item = Option<A>>,
    ) -> Option<NonEmptyVec<A>>
    where
        A: 'static,
    {
        let head = value?;
        let tail = collection.into_iter().collect::<Option<Vec<A>>>()?;
        Some(NonEmptyVec::new(head, tail))
    }
}

impl SemiProduct for ResultTypeLambda {
    fn product<R, O, E, A, B>(value: Result<A, E>, that: Result<B, E>) -> Result<(A, B), E>
    where
        A: 'static,
        B: 'static,
    {
        Ok((value?, that?))
    }

    fn product_many<R, O, E, A>(
        value: Result<A, E>,
        collection: impl IntoIterator<Item = Result<A, E>>,
    ) -> Result<NonEmptyVec<A>, E>
    where
        A: 'static,
    {
        let head = value?;
        let tail = collection.into_iter().collect::<Result<Vec<A>, E>>()?;
        Ok(NonEmptyVec::new(head, tail))
    }
}

impl SemiProduct for IdentityTypeLambda {
    fn product<R, O, E, A, B>(value: Identity<A>, that: Identity<B>) -> Identity<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        Identity((value.0, that.0))
    }

    fn product_many<R, O, E, A>(
        value: Identity<A>,
        collection: impl IntoIterator<Item = Identity<A>>,
    ) -> Identity<NonEmptyVec<A>>
    where
        A: 'static,
    {
        let tail = collection.into_iter().map(Identity::into_inner).collect();
        Identity(NonEmptyVec::new(value.0, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::of::Of;
    use rstest::rstest;

    #[rstest]
    fn result_product_reports_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(
            ResultTypeLambda::product::<(), (), &str, _, _>(first, second),
            Err("first")
        );
    }

    #[rstest]
    fn option_product_many_stops_at_first_none() {
        let mut consumed = 0;
        let collection = [Some(2), None, Some(4)]
            .into_iter()
            .inspect(|_| consumed += 1);
        assert_eq!(
            OptionTypeLambda::product_many::<(), (), (), _>(Some(1), collection),
            None
        );
        assert_eq!(consumed, 2);
    }

    #[rstest]
    fn option_product_many_skips_collection_when_head_is_none() {
        let mut consumed = 0;
        let collection = [Some(2)].into_iter().inspect(|_| consumed += 1);
        assert_eq!(
            OptionTypeLambda::product_many::<(), (), (), i32>(None, collection),
            None
        );
        assert_eq!(consumed, 0);
    }

    #[rstest]
    fn identity_product_many_collects_in_order() {
        let collected = IdentityTypeLambda::product_many::<(), (), (), _>(
            Identity(1),
            vec![Identity(2), Identity(3)],
        );
        assert_eq!(collected, Identity(NonEmptyVec::new(1, vec![2, 3])));
    }

    #[rstest]
    fn tuple_derivations_flatten() {
        assert_eq!(
            tuple4::<IdentityTypeLambda, (), (), (), _, _, _, _>(
                Identity(1),
                Identity('b'),
                Identity("c"),
                Identity(4.0),
            ),
            Identity((1, 'b', "c", 4.0))
        );
        assert_eq!(
            tuple6::<ResultTypeLambda, (), (), String, _, _, _, _, _, _>(
                Ok(1),
                Ok(2),
                Ok(3),
                Ok(4),
                Ok(5),
                Ok(6),
            ),
            Ok((1, 2, 3, 4, 5, 6))
        );
    }

    #[rstest]
    fn element_grows_a_tuple_one_component_at_a_time() {
        let start = IdentityTypeLambda::unit::<(), (), ()>();
        let one = element::<IdentityTypeLambda, (), (), (), _, _>(start, Identity(1));
        let two = element::<IdentityTypeLambda, (), (), (), _, _>(one, Identity('b'));
        let three = element::<IdentityTypeLambda, (), (), (), _, _>(two, Identity("c"));
        assert_eq!(three, Identity((1, 'b', "c")));
    }

    #[rstest]
    #[case(Ok((1, 2)), Ok(3), Ok((1, 2, 3)))]
    #[case(Err("init"), Ok(3), Err("init"))]
    #[case(Ok((1, 2)), Err("last"), Err("last"))]
    fn element_propagates_failure(
        #[case] init: Result<(i32, i32), &'static str>,
        #[case] last: Result<i32, &'static str>,
        #[case] expected: Result<(i32, i32, i32), &'static str>,
    ) {
        assert_eq!(element::<ResultTypeLambda, (), (), &str, _, _>(init, last), expected);
    }

    #[rstest]
    fn split_last_inverts_append() {
        let whole = (1, "two".to_string()).append(3.0);
        assert_eq!(whole, (1, "two".to_string(), 3.0));
        assert_eq!(<(i32, String) as AppendElement<f64>>::split_last(&whole), ((1, "two".to_string()), 3.0));
    }

    #[rstest]
    fn tuple5_propagates_failure() {
        let result = tuple5::<ResultTypeLambda, (), (), &str, i32, i32, i32, i32, i32>(
            Ok(1),
            Ok(2),
            Err("third"),
            Ok(4),
            Err("fifth"),
        );
        assert_eq!(result, Err("third"));
    }
}
