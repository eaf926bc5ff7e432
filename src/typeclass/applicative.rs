//! Applicative type classes - products that can also be mapped.
//!
//! [`SemiApplicative`] and [`Applicative`] add no methods of their own that
//! an instance must write: any brand that is [`SemiProduct`] and
//! [`Covariant`] is a `SemiApplicative`, and adding [`Product`] makes it an
//! `Applicative`. These are the effect bounds of
//! [`Traversable`](super::Traversable) and
//! [`NonEmptyTraversable`](super::NonEmptyTraversable).
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::{OptionTypeLambda, SemiApplicative};
//!
//! let sum = OptionTypeLambda::zip_with::<(), (), (), _, _, _>(Some(1), Some(2), |a: i32, b: i32| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::covariant::Covariant;
use super::product::Product;
use super::semi_product::SemiProduct;

/// A [`SemiProduct`] that is also [`Covariant`].
pub trait SemiApplicative: SemiProduct + Covariant {
    /// Pairs `left` with `right` and merges each pair with `function`.
    fn zip_with<R, O, E, A, B, C>(
        left: Self::Kind<R, O, E, A>,
        right: Self::Kind<R, O, E, B>,
        mut function: impl FnMut(A, B) -> C,
    ) -> Self::Kind<R, O, E, C>
    where
        A: 'static,
        B: 'static,
    {
        Self::map::<R, O, E, (A, B), C>(
            Self::product::<R, O, E, A, B>(left, right),
            move |(first, second)| function(first, second),
        )
    }
}

impl<F: SemiProduct + Covariant> SemiApplicative for F {}

/// A [`SemiApplicative`] that is also [`Product`].
pub trait Applicative: SemiApplicative + Product {}

impl<F: SemiApplicative + Product> Applicative for F {}
