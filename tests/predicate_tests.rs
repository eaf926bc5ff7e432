//! Integration tests for predicates, refinements and the predicate brand.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fpcore::predicate::{self, Predicate, PredicateTypeLambda, Refinement};
use fpcore::typeclass::{
    Contravariant, Monoid, NonEmptyVec, Of, Product, SemiProduct, Semigroup, semi_product,
};
use rstest::rstest;

/// A predicate that counts its evaluations.
fn counting(result: bool) -> (Predicate<i32>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let predicate = Predicate::new(move |_: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        result
    });
    (predicate, calls)
}

fn positive() -> Predicate<i32> {
    Predicate::new(|value: &i32| *value > 0)
}

fn even() -> Predicate<i32> {
    Predicate::new(|value: &i32| value % 2 == 0)
}

// =============================================================================
// Boolean Combinators
// =============================================================================

#[rstest]
#[case(4, true)]
#[case(3, false)]
#[case(-2, false)]
fn and_requires_both(#[case] value: i32, #[case] expected: bool) {
    assert_eq!(positive().and(even()).test(&value), expected);
}

#[rstest]
#[case(3, true)]
#[case(-2, true)]
#[case(-3, false)]
fn or_requires_either(#[case] value: i32, #[case] expected: bool) {
    assert_eq!(positive().or(even()).test(&value), expected);
}

#[rstest]
fn and_skips_right_after_rejection() {
    let (right, calls) = counting(true);
    assert!(!Predicate::never().and(right).test(&0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn or_skips_right_after_acceptance() {
    let (right, calls) = counting(false);
    assert!(Predicate::always().or(right).test(&0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn not_negates() {
    let non_positive = predicate::not(positive());
    assert!(non_positive.test(&0));
    assert!(!non_positive.test(&1));
    assert!((!non_positive).test(&1));
}

#[rstest]
fn any_and_all_over_empty_collections() {
    assert!(!predicate::any(Vec::<Predicate<i32>>::new()).test(&1));
    assert!(predicate::all(Vec::<Predicate<i32>>::new()).test(&1));
}

#[rstest]
fn any_stops_at_first_acceptance() {
    let (first, first_calls) = counting(true);
    let (second, second_calls) = counting(true);
    assert!(predicate::any([first, second]).test(&0));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Semigroup and Monoid Instances
// =============================================================================

#[rstest]
fn all_monoid_folds_with_conjunction() {
    let combined = predicate::monoid_all().combine_all_iter([positive(), even()]);
    assert!(combined.test(&2));
    assert!(!combined.test(&1));
    assert!(Monoid::<Predicate<i32>>::empty(&predicate::monoid_all()).test(&-1));
}

#[rstest]
fn any_semigroup_combines_with_disjunction() {
    let combined = predicate::semigroup_any().combine(positive(), even());
    assert!(combined.test(&-2));
    assert!(!combined.test(&-1));
    assert!(!Monoid::<Predicate<i32>>::empty(&predicate::monoid_any()).test(&1));
}

// =============================================================================
// Lifting over Compound Values
// =============================================================================

#[rstest]
fn contramap_projects_before_testing() {
    let long_word = Predicate::new(|length: &usize| *length > 3).contramap(|word: &String| word.len());
    assert!(long_word.test(&"abcd".to_string()));
    assert!(!long_word.test(&"abc".to_string()));
}

#[rstest]
fn brand_contramap_matches_method() {
    let via_brand = PredicateTypeLambda::contramap::<(), (), (), i32, String>(positive(), |text: &String| {
        text.parse().unwrap_or(0)
    });
    assert!(via_brand.test(&"7".to_string()));
    assert!(!via_brand.test(&"x".to_string()));
}

#[rstest]
fn product_tests_both_components() {
    let pair = positive().product(Predicate::new(|text: &String| !text.is_empty()));
    assert!(pair.test(&(1, "a".to_string())));
    assert!(!pair.test(&(1, String::new())));
    assert!(!pair.test(&(0, "a".to_string())));
}

#[rstest]
#[case(vec![1], false)]
#[case(vec![1, 2], true)]
#[case(vec![1, 2, -3], true)]
#[case(vec![1, 3], false)]
fn product_many_length_policy(#[case] values: Vec<i32>, #[case] expected: bool) {
    let shape = positive().product_many([even()]);
    let values = NonEmptyVec::from_vec(values).expect("non-empty case");
    assert_eq!(shape.test(&values), expected);
}

#[rstest]
fn product_many_leaves_tail_untouched_when_head_rejects() {
    let generated = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&generated);
    let tail = (0..3).map(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        even()
    });
    let shape = Predicate::new(|_: &i32| false).product_many(tail);
    assert_eq!(generated.load(Ordering::SeqCst), 0);
    assert!(!shape.test(&NonEmptyVec::new(1, vec![2, 3, 4])));
    assert_eq!(generated.load(Ordering::SeqCst), 0);
}

#[rstest]
fn product_many_stops_generating_at_first_tail_rejection() {
    let generated = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&generated);
    let tail = (0..3).map(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        even()
    });
    let shape = positive().product_many(tail);
    assert!(!shape.test(&NonEmptyVec::new(1, vec![2, 3, 4])));
    assert_eq!(generated.load(Ordering::SeqCst), 2);
}

#[rstest]
#[case(vec![], false)]
#[case(vec![1], false)]
#[case(vec![1, 2], true)]
#[case(vec![1, 2, 3], true)]
#[case(vec![1, 3], false)]
fn product_all_length_policy(#[case] values: Vec<i32>, #[case] expected: bool) {
    let shape = PredicateTypeLambda::product_all::<(), (), (), _>([positive(), even()]);
    assert_eq!(shape.test(&values), expected);
}

#[rstest]
fn product_all_stops_at_first_rejection() {
    let (first, first_calls) = counting(false);
    let (second, second_calls) = counting(true);
    assert!(!predicate::product_all([first, second]).test(&vec![1, 2]));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn brand_product_many_matches_method() {
    let shape = PredicateTypeLambda::product_many::<(), (), (), _>(positive(), [positive()]);
    assert!(shape.test(&NonEmptyVec::new(1, vec![2])));
    assert!(!shape.test(&NonEmptyVec::new(1, vec![0])));
}

#[rstest]
fn tuple_helper_and_derivation_agree() {
    let direct = predicate::tuple((positive(), even(), Predicate::new(|flag: &bool| *flag)));
    let derived = semi_product::tuple3::<PredicateTypeLambda, (), (), (), _, _, _>(
        positive(),
        even(),
        Predicate::new(|flag: &bool| *flag),
    );
    for value in [(1, 2, true), (1, 3, true), (0, 2, true), (1, 2, false)] {
        assert_eq!(direct.test(&value), derived.test(&value));
    }
    assert!(predicate::tuple(()).test(&()));
}

#[rstest]
fn of_accepts_everything() {
    let anything = PredicateTypeLambda::of::<(), (), (), _>(42_u8);
    assert!(anything.test(&0));
    assert!(anything.test(&255));
}

#[rstest]
fn product_is_thread_safe() {
    let pair = PredicateTypeLambda::product::<(), (), (), _, _>(positive(), even());
    let handle = std::thread::spawn(move || pair.test(&(1, 2)));
    assert!(handle.join().expect("thread panicked"));
}

// =============================================================================
// Refinements
// =============================================================================

#[rstest]
fn guards_recognise_their_types() {
    let values: Vec<Box<dyn Any>> = vec![
        Box::new("text".to_string()),
        Box::new(1.5_f64),
        Box::new(true),
        Box::new(7_i128),
    ];
    let guards = [
        Predicate::from(predicate::is_string()),
        Predicate::from(predicate::is_number()),
        Predicate::from(predicate::is_boolean()),
        Predicate::from(predicate::is_bigint()),
    ];
    for (row, guard) in guards.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            assert_eq!(guard.test(value.as_ref()), row == column);
        }
    }
}

#[rstest]
fn refinement_narrows_and_composes() {
    let short_string: Refinement<dyn Any, String> = predicate::is_string().compose(Refinement::new(
        |text: &String| (text.len() < 5).then_some(text),
    ));
    let value: Box<dyn Any> = Box::new("abc".to_string());
    assert_eq!(short_string.refine(value.as_ref()).map(String::as_str), Some("abc"));

    let long: Box<dyn Any> = Box::new("abcdef".to_string());
    assert!(!short_string.test(long.as_ref()));
    assert!(!short_string.to_predicate().test(&1_u8 as &dyn Any));
}

#[rstest]
fn identity_refinement_accepts_everything() {
    let id = Refinement::<i32, i32>::id();
    assert_eq!(id.refine(&5), Some(&5));
}
