//! Contract violations detected at run time.
//!
//! Most contracts of the composition engine are enforced by the type
//! system: a tuple semigroup of arity three cannot be applied to a pair.
//! Instances configured from run-time collections (keyed records and
//! positional vectors) cannot be checked statically, so they check their
//! preconditions on every call and report a [`ContractViolation`] instead
//! of producing a silently wrong value.

/// A precondition of a checked instance did not hold.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::ContractViolation;
///
/// let error = ContractViolation::LengthMismatch {
///     combinator: "Positional",
///     expected: 2,
///     actual: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Positional: expected 2 elements, found 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A positional instance received a sequence of the wrong length.
    LengthMismatch {
        /// The instance that detected the violation.
        combinator: &'static str,
        /// One element per configured component instance.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
    /// A keyed instance received a record lacking a configured key.
    MissingKey {
        /// The instance that detected the violation.
        combinator: &'static str,
        /// Debug rendering of the missing key.
        key: String,
    },
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                combinator,
                expected,
                actual,
            } => write!(
                formatter,
                "{combinator}: expected {expected} elements, found {actual}"
            ),
            Self::MissingKey { combinator, key } => {
                write!(formatter, "{combinator}: missing key {key}")
            }
        }
    }
}

impl std::error::Error for ContractViolation {}
