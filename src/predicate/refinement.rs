//! Refinements - predicates that also narrow the type they accept.
//!
//! A [`Refinement<A, B>`] answers "is this `A` actually a `B`?" and, when it
//! is, hands back the `B`. The guards in this module refine a
//! [`dyn Any`](std::any::Any) to a concrete type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Predicate;

/// A narrowing test from `&A` to `Option<&B>`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use fpcore::predicate::{self, Refinement};
///
/// let values: Vec<Box<dyn Any>> = vec![Box::new(1.5_f64), Box::new("text".to_string())];
/// let numbers: Vec<f64> = values
///     .iter()
///     .filter_map(|value| predicate::is_number().refine(value.as_ref()).copied())
///     .collect();
/// assert_eq!(numbers, vec![1.5]);
///
/// let non_empty = Refinement::new(|text: &String| (!text.is_empty()).then_some(text.as_str()));
/// assert_eq!(non_empty.refine(&"abc".to_string()), Some("abc"));
/// ```
pub struct Refinement<A: ?Sized, B: ?Sized> {
    refine: Arc<dyn Fn(&A) -> Option<&B> + Send + Sync>,
}

impl<A: ?Sized, B: ?Sized> Clone for Refinement<A, B> {
    fn clone(&self) -> Self {
        Self {
            refine: Arc::clone(&self.refine),
        }
    }
}

impl<A: ?Sized, B: ?Sized> fmt::Debug for Refinement<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Refinement").finish_non_exhaustive()
    }
}

impl<A: ?Sized, B: ?Sized> Refinement<A, B> {
    /// Wraps a narrowing function.
    pub fn new<F>(refine: F) -> Self
    where
        F: Fn(&A) -> Option<&B> + Send + Sync + 'static,
    {
        Self {
            refine: Arc::new(refine),
        }
    }

    /// Narrows `value`, or returns `None` if it is not a `B`.
    #[inline]
    pub fn refine<'a>(&self, value: &'a A) -> Option<&'a B> {
        (self.refine)(value)
    }

    /// Whether `value` is a `B`.
    #[inline]
    pub fn test(&self, value: &A) -> bool {
        self.refine(value).is_some()
    }
}

impl<A: ?Sized + 'static, B: ?Sized + 'static> Refinement<A, B> {
    /// Narrows with `self`, then with `that`.
    #[must_use]
    pub fn compose<C: ?Sized + 'static>(self, that: Refinement<B, C>) -> Refinement<A, C> {
        Refinement::new(move |value| self.refine(value).and_then(|narrowed| that.refine(narrowed)))
    }

    /// Forgets the narrowed value, keeping only the test.
    pub fn to_predicate(&self) -> Predicate<A> {
        let refinement = self.clone();
        Predicate::new(move |value| refinement.test(value))
    }
}

impl<A: ?Sized + 'static> Refinement<A, A> {
    /// The refinement that accepts everything unchanged.
    pub fn id() -> Self {
        Self::new(|value| Some(value))
    }
}

impl<A: ?Sized + 'static, B: ?Sized + 'static> From<Refinement<A, B>> for Predicate<A> {
    fn from(refinement: Refinement<A, B>) -> Self {
        Self::new(move |value| refinement.test(value))
    }
}

// =============================================================================
// Guards
// =============================================================================

/// Refines a dynamically typed value to `T`.
pub fn is<T: Any>() -> Refinement<dyn Any, T> {
    Refinement::<dyn Any, T>::new(|value| value.downcast_ref::<T>())
}

/// Refines a dynamically typed value to a `String`.
pub fn is_string() -> Refinement<dyn Any, String> {
    is::<String>()
}

/// Refines a dynamically typed value to an `f64`.
pub fn is_number() -> Refinement<dyn Any, f64> {
    is::<f64>()
}

/// Refines a dynamically typed value to a `bool`.
pub fn is_boolean() -> Refinement<dyn Any, bool> {
    is::<bool>()
}

/// Refines a dynamically typed value to an `i128`.
pub fn is_bigint() -> Refinement<dyn Any, i128> {
    is::<i128>()
}
