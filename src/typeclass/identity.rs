//! Identity shape - the trivial effect and the trivial container.
//!
//! [`Identity`] holds exactly one value and adds no behavior. Under its
//! brand [`IdentityTypeLambda`](super::IdentityTypeLambda) it serves two
//! roles in the composition engine:
//!
//! - as an *effect*, it is the applicative that never fails, so
//!   traversing with it is plain mapping;
//! - as a *container*, it is the smallest non-empty traversable.

/// A shape holding exactly one value.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(7).0, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
