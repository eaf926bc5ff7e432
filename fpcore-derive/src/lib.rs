//! Derive macros for fpcore.
//!
//! # Available Derive Macros
//!
//! - [`Fields`]: Generates field-wise semigroup, monoid and predicate
//!   instances, and a kind-polymorphic constructor, for a named struct
//!
//! # Example
//!
//! ```rust,ignore
//! use fpcore::Fields;
//! use fpcore::typeclass::Semigroup;
//! use fpcore::typeclass::semigroup::{NumberSum, StringConcat};
//!
//! #[derive(Debug, PartialEq, Fields)]
//! struct Tally {
//!     count: u32,
//!     names: String,
//! }
//!
//! let semigroup = TallyFields { count: NumberSum, names: StringConcat };
//! let merged = semigroup.combine(
//!     Tally { count: 1, names: "a".into() },
//!     Tally { count: 2, names: "b".into() },
//! );
//! assert_eq!(merged, Tally { count: 3, names: "ab".into() });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;

use proc_macro::TokenStream;

/// Derive macro for field-wise type class instances.
///
/// For a struct `Name` with named fields `f1: T1, .., fn: Tn` this
/// generates:
///
/// - `NameFields<F1, .., Fn>`, a struct with one public field per field of
///   `Name`, each holding a per-field component;
/// - `impl Semigroup<Name> for NameFields<S1, .., Sn>` where each
///   `Si: Semigroup<Ti>`, combining field by field;
/// - `impl Monoid<Name> for NameFields<M1, .., Mn>` where each
///   `Mi: Monoid<Ti>`, with the field-wise identity;
/// - `impl From<NameFields<Predicate<T1>, .., Predicate<Tn>>> for Predicate<Name>`,
///   testing fields in declaration order and stopping at the first
///   rejection;
/// - `Name::product_fields::<F, R, O, E>(f1, .., fn)` for any brand
///   `F: SemiProduct`, pairing one shape per field into a shape of `Name`
///   (only for structs with at least one field; field types must be
///   `Clone + 'static`).
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple struct or unit struct)
/// - Enums and unions are rejected
///
/// # Example
///
/// ```rust,ignore
/// use fpcore::Fields;
/// use fpcore::predicate::Predicate;
/// use fpcore::typeclass::OptionTypeLambda;
///
/// #[derive(Clone, Debug, PartialEq, Fields)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let adult: Predicate<Person> = PersonFields {
///     name: Predicate::new(|name: &String| !name.is_empty()),
///     age: Predicate::new(|age: &u32| *age >= 18),
/// }
/// .into();
/// assert!(adult.test(&Person { name: "Ada".into(), age: 36 }));
///
/// let parsed = Person::product_fields::<OptionTypeLambda, (), (), ()>(Some("Ada".into()), Some(36));
/// assert_eq!(parsed, Some(Person { name: "Ada".into(), age: 36 }));
/// ```
#[proc_macro_derive(Fields)]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    fields::derive_fields_impl(input)
}
