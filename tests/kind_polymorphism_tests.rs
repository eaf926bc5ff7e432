//! Tests for operations written once against the kind-polymorphic type
//! classes and used with several brands.

use fpcore::predicate::{Predicate, PredicateTypeLambda};
use fpcore::typeclass::semigroup::{self, NumberSum, Semigroup, StringConcat};
use fpcore::typeclass::semigroup_product::{SemigroupTypeLambda, SharedSemigroup, shared};
use fpcore::typeclass::{
    Covariant, Identity, IdentityTypeLambda, Invariant, Kind, NonEmptyVec, Of, OptionTypeLambda,
    Product, ResultTypeLambda, SemiProduct, VecTypeLambda, semi_product,
};
use rstest::rstest;

/// A labelled measurement, assembled from its parts in any shape.
#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: String,
    value: i64,
}

fn reading<F: SemiProduct>(
    sensor: Kind<F, (), (), (), String>,
    value: Kind<F, (), (), (), i64>,
) -> Kind<F, (), (), (), Reading> {
    let pair = semi_product::tuple2::<F, (), (), (), String, i64>(sensor, value);
    F::imap::<(), (), (), (String, i64), Reading>(
        pair,
        |(sensor, value)| Reading { sensor, value },
        |reading: &Reading| (reading.sensor.clone(), reading.value),
    )
}

// =============================================================================
// One Definition, Many Brands
// =============================================================================

#[rstest]
fn reading_in_option() {
    assert_eq!(
        reading::<OptionTypeLambda>(Some("a".to_string()), Some(1)),
        Some(Reading { sensor: "a".to_string(), value: 1 })
    );
    assert_eq!(reading::<OptionTypeLambda>(None, Some(1)), None);
}

#[rstest]
fn reading_in_identity() {
    assert_eq!(
        reading::<IdentityTypeLambda>(Identity("b".to_string()), Identity(2)),
        Identity(Reading { sensor: "b".to_string(), value: 2 })
    );
}

#[rstest]
fn reading_as_semigroup() {
    let merge: SharedSemigroup<Reading> =
        reading::<SemigroupTypeLambda>(shared(StringConcat), shared(NumberSum));
    let merged = merge.combine(
        Reading { sensor: "a".to_string(), value: 1 },
        Reading { sensor: "b".to_string(), value: 2 },
    );
    assert_eq!(merged, Reading { sensor: "ab".to_string(), value: 3 });
}

#[rstest]
fn reading_as_predicate() {
    let valid: Predicate<Reading> = reading::<PredicateTypeLambda>(
        Predicate::new(|sensor: &String| !sensor.is_empty()),
        Predicate::new(|value: &i64| *value >= 0),
    );
    assert!(valid.test(&Reading { sensor: "a".to_string(), value: 0 }));
    assert!(!valid.test(&Reading { sensor: String::new(), value: 0 }));
    assert!(!valid.test(&Reading { sensor: "a".to_string(), value: -1 }));
}

// =============================================================================
// Tuple Derivations
// =============================================================================

#[rstest]
fn tuple3_in_result_reports_first_error() {
    let combined = semi_product::tuple3::<ResultTypeLambda, (), (), &str, i32, i32, i32>(
        Ok(1),
        Err("second"),
        Err("third"),
    );
    assert_eq!(combined, Err("second"));
}

#[rstest]
fn tuple4_as_semigroup() {
    let merge = semi_product::tuple4::<SemigroupTypeLambda, (), (), (), _, _, _, _>(
        shared(NumberSum),
        shared(semigroup::max(fpcore::typeclass::Natural)),
        shared(semigroup::first()),
        shared(semigroup::reverse(StringConcat)),
    );
    assert_eq!(
        merge.combine((1, 5, 'a', "x".to_string()), (2, 3, 'b', "y".to_string())),
        (3, 5, 'a', "yx".to_string())
    );
}

#[rstest]
fn tuple6_in_option() {
    let all = semi_product::tuple6::<OptionTypeLambda, (), (), (), _, _, _, _, _, _>(
        Some(1),
        Some('b'),
        Some("c"),
        Some(4.0),
        Some(true),
        Some(()),
    );
    assert_eq!(all, Some((1, 'b', "c", 4.0, true, ())));
}

// =============================================================================
// Of and Product
// =============================================================================

#[rstest]
fn of_lifts_into_each_brand() {
    assert_eq!(OptionTypeLambda::of::<(), (), (), _>(1), Some(1));
    assert_eq!(ResultTypeLambda::of::<(), (), String, _>(1), Ok(1));
    assert_eq!(VecTypeLambda::of::<(), (), (), _>(1), vec![1]);
    assert_eq!(IdentityTypeLambda::unit::<(), (), ()>(), Identity(()));

    let constant = SemigroupTypeLambda::of::<(), (), (), _>(7);
    assert_eq!(constant.combine(1, 2), 7);
}

#[rstest]
fn product_all_per_brand() {
    assert_eq!(
        OptionTypeLambda::product_all::<(), (), (), _>([Some(1), Some(2)]),
        Some(vec![1, 2])
    );
    assert_eq!(
        OptionTypeLambda::product_all::<(), (), (), i32>(Vec::new()),
        Some(Vec::new())
    );

    let columns = SemigroupTypeLambda::product_all::<(), (), (), _>([
        shared(NumberSum),
        shared(semigroup::last()),
    ]);
    assert_eq!(columns.combine(vec![1, 2], vec![3, 4]), vec![4, 4]);
}

#[rstest]
fn product_many_per_brand() {
    assert_eq!(
        IdentityTypeLambda::product_many::<(), (), (), _>(Identity(1), [Identity(2)]),
        Identity(NonEmptyVec::new(1, vec![2]))
    );

    let rows = SemigroupTypeLambda::product_many::<(), (), (), _>(shared(NumberSum), [shared(NumberSum)]);
    assert_eq!(
        rows.combine(NonEmptyVec::new(1, vec![2]), NonEmptyVec::new(3, vec![4])),
        NonEmptyVec::new(4, vec![6])
    );
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn covariant_helpers() {
    assert_eq!(OptionTypeLambda::as_value::<(), (), (), _, _>(Some(1), 'x'), Some('x'));
    assert_eq!(VecTypeLambda::as_unit::<(), (), (), _>(vec![1, 2]), vec![(), ()]);
}

#[rstest]
fn tupled_wraps_in_one_tuple() {
    let single = SemigroupTypeLambda::tupled::<(), (), (), i32>(shared(NumberSum));
    assert_eq!(single.combine((1,), (2,)), (3,));
    assert_eq!(OptionTypeLambda::tupled::<(), (), (), _>(Some(1)), Some((1,)));
}

#[rstest]
fn invariant_round_trips_through_semigroup() {
    let sum = shared(NumberSum);
    let textual_sum = SemigroupTypeLambda::imap::<(), (), (), i32, String>(
        sum,
        |value| value.to_string(),
        |text: &String| text.parse().unwrap_or(0),
    );
    assert_eq!(textual_sum.combine("2".to_string(), "3".to_string()), "5");
}

#[rstest]
fn element_extends_predicates_and_semigroups() {
    let checks = semi_product::element::<PredicateTypeLambda, (), (), (), _, _>(
        PredicateTypeLambda::tupled::<(), (), (), i64>(Predicate::new(|value: &i64| *value > 0)),
        Predicate::new(|sensor: &String| !sensor.is_empty()),
    );
    assert!(checks.test(&(1, "a".to_string())));
    assert!(!checks.test(&(1, String::new())));
    assert!(!checks.test(&(0, "a".to_string())));

    let merge = semi_product::element::<SemigroupTypeLambda, (), (), (), _, _>(
        SemigroupTypeLambda::tupled::<(), (), (), i64>(shared(NumberSum)),
        shared(StringConcat),
    );
    assert_eq!(merge.combine((1, "a".to_string()), (2, "b".to_string())), (3, "ab".to_string()));
}
