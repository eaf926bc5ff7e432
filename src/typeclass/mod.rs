//! Type class traits and the kind substrate they are written against.
//!
//! Two families of type classes live here.
//!
//! **Value-level algebra.** [`Semigroup<A>`] and [`Monoid<A>`] are
//! instances passed as values, so one type can be combined in many ways and
//! instances can be transformed by combinators:
//!
//! - [`semigroup`]: the trait, primitive instances, order-derived `min` /
//!   `max`, and the `reverse` / `intercalate` / `imap` combinators
//! - [`semigroup_product`]: tuple, positional and keyed products
//! - [`monoid`]: identities for all of the above
//!
//! **Kind-polymorphic type classes.** Each shape (`Option`, `Result`,
//! `Vec`, [`NonEmptyVec`], [`Identity`], shared semigroups, predicates) is
//! named by a brand implementing [`TypeLambda`]. Type classes are traits on
//! brands:
//!
//! - [`Invariant`], [`Covariant`], [`Contravariant`]: mapping
//! - [`Of`], [`SemiProduct`], [`Product`]: lifting and pairing
//! - [`SemiApplicative`], [`Applicative`]: the combinations of the above
//! - [`Traversable`], [`NonEmptyTraversable`]: effectful traversal
//!
//! Operations written once against these traits, such as
//! [`semi_product::tuple3`] or [`traversable::sequence`], work for every
//! brand that has the instance.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior. Brands that ignore a context slot cannot have it inferred,
//! so callers name it, conventionally as `()`.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use fpcore::typeclass::semigroup::{self, Semigroup, StringConcat};
//!
//! let joined = semigroup::intercalate(", ".to_string(), StringConcat)
//!     .combine_iter("a".to_string(), ["b".to_string(), "c".to_string()]);
//! assert_eq!(joined, "a, b, c");
//! ```
//!
//! ## Using Traversable
//!
//! ```rust
//! use fpcore::typeclass::{traversable, OptionTypeLambda, VecTypeLambda};
//!
//! let all = traversable::sequence::<VecTypeLambda, OptionTypeLambda, (), (), (), (), (), (), _>(
//!     vec![Some(1), Some(2)],
//! );
//! assert_eq!(all, Some(vec![1, 2]));
//! ```

mod error;
mod higher;
mod identity;
mod non_empty;

pub mod applicative;
pub mod contravariant;
pub mod covariant;
pub mod invariant;
pub mod monoid;
pub mod non_empty_traversable;
pub mod of;
pub mod order;
pub mod product;
pub mod semi_product;
pub mod semigroup;
pub mod semigroup_product;
pub mod traversable;

pub use applicative::{Applicative, SemiApplicative};
pub use contravariant::Contravariant;
pub use covariant::Covariant;
pub use error::ContractViolation;
pub use higher::{
    IdentityTypeLambda, Kind, NonEmptyVecTypeLambda, OptionTypeLambda, ResultTypeLambda,
    TypeLambda, VecTypeLambda,
};
pub use identity::Identity;
pub use invariant::Invariant;
pub use monoid::{Bounded, Monoid, SharedMonoid};
pub use non_empty::NonEmptyVec;
pub use non_empty_traversable::NonEmptyTraversable;
pub use of::Of;
pub use order::{Natural, Order};
pub use product::Product;
pub use semi_product::SemiProduct;
pub use semigroup::Semigroup;
pub use semigroup_product::{SemigroupTypeLambda, SharedSemigroup};
pub use traversable::Traversable;
