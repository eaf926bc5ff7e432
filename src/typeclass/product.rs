//! Product type class - pairing any number of shapes, including none.

use super::higher::{IdentityTypeLambda, OptionTypeLambda, ResultTypeLambda};
use super::identity::Identity;
use super::of::Of;
use super::semi_product::SemiProduct;

/// A [`SemiProduct`] that can also combine an empty collection.
///
/// `product_all` over an empty collection yields the lifted empty vector.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{OptionTypeLambda, Product};
///
/// assert_eq!(
///     OptionTypeLambda::product_all::<(), (), (), _>(vec![Some(1), Some(2)]),
///     Some(vec![1, 2])
/// );
/// assert_eq!(
///     OptionTypeLambda::product_all::<(), (), (), i32>(Vec::new()),
///     Some(Vec::new())
/// );
/// ```
pub trait Product: SemiProduct + Of {
    /// Combines every element of `collection`, in order.
    ///
    /// Instances that can fail stop consuming `collection` at the first
    /// failure.
    fn product_all<R, O, E, A>(
        collection: impl IntoIterator<Item = Self::Kind<R, O, E, A>>,
    ) -> Self::Kind<R, O, E, Vec<A>>
    where
        A: 'static;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Product for OptionTypeLambda {
    fn product_all<R, O, E, A>(collection: impl IntoIterator<Item = Option<A>>) -> Option<Vec<A>>
    where
        A: 'static,
    {
        collection.into_iter().collect()
    }
}

impl Product for ResultTypeLambda {
    fn product_all<R, O, E, A>(
        collection: impl IntoIterator<Item = Result<A, E>>,
    ) -> Result<Vec<A>, E>
    where
        A: 'static,
    {
        collection.into_iter().collect()
    }
}

impl Product for IdentityTypeLambda {
    fn product_all<R, O, E, A>(collection: impl IntoIterator<Item = Identity<A>>) -> Identity<Vec<A>>
    where
        A: 'static,
    {
        Identity(collection.into_iter().map(Identity::into_inner).collect())
    }
}
