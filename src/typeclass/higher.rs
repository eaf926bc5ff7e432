//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation every type class in this crate is
//! written against. Rust does not let a trait abstract over a type
//! constructor such as `Option<_>` directly, so each shape is represented
//! by a zero-sized *brand* type implementing [`TypeLambda`]. The brand's
//! generic associated type [`TypeLambda::Kind`] resolves the shape at
//! three context slots and one target slot:
//!
//! | slot | conventional name | example use                      |
//! |------|-------------------|----------------------------------|
//! | `R`  | requirements      | the environment of a reader      |
//! | `O`  | options           | an auxiliary output channel      |
//! | `E`  | error             | the error of `Result<A, E>`      |
//! | `A`  | target            | the value the type class touches |
//!
//! Shapes that do not use a slot simply ignore it, so a single combinator
//! written against `F: TypeLambda` works for `Option`, `Result`, `Vec`,
//! semigroups and predicates alike.
//!
//! # Example
//!
//! ```rust
//! use fpcore::typeclass::{Kind, OptionTypeLambda, ResultTypeLambda};
//!
//! let present: Kind<OptionTypeLambda, (), (), (), i32> = Some(1);
//! let failed: Kind<ResultTypeLambda, (), (), String, i32> = Err("boom".to_string());
//!
//! assert_eq!(present, Some(1));
//! assert!(failed.is_err());
//! ```

use super::identity::Identity;
use super::non_empty::NonEmptyVec;

/// A brand standing for a family of shapes.
///
/// Implementors are uninhabited marker types; only the associated type
/// matters.
///
/// # Laws
///
/// `Kind` must be a pure type-level function of its four parameters: the
/// same brand and the same parameters always denote the same type.
///
/// # Example
///
/// ```rust
/// use fpcore::typeclass::TypeLambda;
///
/// enum PairTypeLambda {}
///
/// impl TypeLambda for PairTypeLambda {
///     type Kind<R, O, E, A> = (A, A);
/// }
///
/// let pair: <PairTypeLambda as TypeLambda>::Kind<(), (), (), u8> = (1, 2);
/// assert_eq!(pair, (1, 2));
/// ```
pub trait TypeLambda {
    /// The shape instantiated at the context slots `R`, `O`, `E` and the
    /// target `A`.
    type Kind<R, O, E, A>;
}

/// Indexed access into a brand: the shape `F` at `R`, `O`, `E` and `A`.
pub type Kind<F, R, O, E, A> = <F as TypeLambda>::Kind<R, O, E, A>;

// =============================================================================
// Standard Library Brands
// =============================================================================

/// Brand for [`Option`]. No context slot is used.
#[derive(Debug, Clone, Copy)]
pub enum OptionTypeLambda {}

impl TypeLambda for OptionTypeLambda {
    type Kind<R, O, E, A> = Option<A>;
}

/// Brand for [`Result`]. The `E` slot carries the error type.
#[derive(Debug, Clone, Copy)]
pub enum ResultTypeLambda {}

impl TypeLambda for ResultTypeLambda {
    type Kind<R, O, E, A> = Result<A, E>;
}

/// Brand for [`Vec`].
#[derive(Debug, Clone, Copy)]
pub enum VecTypeLambda {}

impl TypeLambda for VecTypeLambda {
    type Kind<R, O, E, A> = Vec<A>;
}

/// Brand for [`NonEmptyVec`].
#[derive(Debug, Clone, Copy)]
pub enum NonEmptyVecTypeLambda {}

impl TypeLambda for NonEmptyVecTypeLambda {
    type Kind<R, O, E, A> = NonEmptyVec<A>;
}

/// Brand for [`Identity`].
#[derive(Debug, Clone, Copy)]
pub enum IdentityTypeLambda {}

impl TypeLambda for IdentityTypeLambda {
    type Kind<R, O, E, A> = Identity<A>;
}
