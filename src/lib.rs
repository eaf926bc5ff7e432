//! # fpcore
//!
//! Composable type class instances for Rust: semigroups and monoids as
//! values, predicates and refinements, and kind-polymorphic traversal.
//!
//! ## Overview
//!
//! - **Algebra**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid) instances as values, with combinators
//!   (`reverse`, `intercalate`, `imap`, `min`/`max` from an order) and
//!   products over tuples, vectors and keyed records
//! - **Predicates**: shareable boolean tests with short-circuiting
//!   combinators, refinements and type guards
//! - **Kind polymorphism**: brands for `Option`, `Result`, `Vec`,
//!   non-empty vectors, `Identity`, shared semigroups and predicates, with
//!   `Invariant` / `Covariant` / `Contravariant` / `SemiProduct` /
//!   `Product` instances
//! - **Traversal**: `Traversable` and `NonEmptyTraversable` over any
//!   applicative effect, with composition
//! - **Derive**: `#[derive(Fields)]` for field-wise instances of a struct
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type classes, brands and instances
//! - `predicate`: Predicates and refinements
//! - `derive`: The `Fields` derive macro
//! - `serde`: `Serialize` / `Deserialize` for `Identity` and `NonEmptyVec`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpcore::prelude::*;
//! use fpcore::typeclass::semigroup::NumberSum;
//!
//! assert_eq!(NumberSum.combine_iter(1, [2, 3]), 6);
//!
//! let positive = Predicate::new(|value: &i32| *value > 0);
//! assert!(positive.test(&1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpcore::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::{Predicate, PredicateTypeLambda, Refinement};

    #[cfg(feature = "derive")]
    pub use crate::Fields;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "derive")]
pub use fpcore_derive::Fields;
