//! Property-based tests for affine atomic propositions
//!
//! These tests check the evaluation laws of propositions and guards over
//! randomized states using proptest.

use affine_check::{
    AffineProp, AffineState, Comparison, EvalConfig, PropertyAutomaton, PropertyTransition,
    Word,
};
use proptest::prelude::*;

// ============================================================================
// Helper functions
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn make_prop(index: usize, op: Comparison, threshold: Word) -> AffineProp {
    AffineProp::compare(index, op, threshold, format!("dom[{index}]{op}{threshold}"))
}

fn comparison() -> impl Strategy<Value = Comparison> {
    prop_oneof![
        Just(Comparison::Less),
        Just(Comparison::LessEqual),
        Just(Comparison::Greater),
        Just(Comparison::GreaterEqual),
    ]
}

/// A non-empty state together with an index inside it
fn state_and_index() -> impl Strategy<Value = (Vec<Word>, usize)> {
    prop::collection::vec(0usize..64, 1..8).prop_flat_map(|state| {
        let len = state.len();
        (Just(state), 0..len)
    })
}

// ============================================================================
// Proposition laws
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_true_holds_everywhere(state in prop::collection::vec(any::<usize>(), 0..8)) {
        let mut ap = make_prop(0, Comparison::Less, 0);
        ap.set_true_with_text("ignored");
        prop_assert!(AffineProp::default().valid(&state));
        prop_assert!(ap.valid(&state));
        prop_assert_eq!(ap.to_string(), "true");
    }

    #[test]
    fn prop_strict_and_non_strict_agree((state, index) in state_and_index(), threshold in 0usize..64) {
        let lt = make_prop(index, Comparison::Less, threshold).valid(&state);
        let le = make_prop(index, Comparison::LessEqual, threshold).valid(&state);
        let gt = make_prop(index, Comparison::Greater, threshold).valid(&state);
        let ge = make_prop(index, Comparison::GreaterEqual, threshold).valid(&state);
        prop_assert_eq!(lt, le);
        prop_assert_eq!(gt, ge);
        prop_assert_eq!(lt, !gt);
    }

    #[test]
    fn prop_less_boundary((state, index) in state_and_index(), threshold in 1usize..64) {
        let mut state = state;
        let ap = make_prop(index, Comparison::Less, threshold);
        state[index] = threshold - 1;
        prop_assert!(ap.valid(&state));
        state[index] = threshold;
        prop_assert!(!ap.valid(&state));
        state[index] = threshold + 1;
        prop_assert!(!ap.valid(&state));
    }

    #[test]
    fn prop_checked_agrees_with_unchecked(
        (state, index) in state_and_index(),
        op in comparison(),
        threshold in 0usize..64,
    ) {
        let ap = make_prop(index, op, threshold);
        prop_assert_eq!(ap.try_valid(&state), Ok(ap.valid(&state)));
        prop_assert!(ap.try_valid(&state[..index]).is_err());
    }

    #[test]
    fn prop_clone_unaffected_by_set(
        (state, index) in state_and_index(),
        op in comparison(),
        threshold in 0usize..64,
    ) {
        let mut original = make_prop(index, op, threshold);
        let copy = original.clone();
        let before = copy.valid(&state);
        original.set(index, Comparison::Greater, 0, "always");
        prop_assert!(original.valid(&state));
        prop_assert_eq!(copy.valid(&state), before);
        prop_assert_eq!(copy.threshold(), Some(threshold));
    }

    #[test]
    fn prop_guard_is_conjunction(
        state in prop::collection::vec(0usize..16, 3),
        pos in prop::collection::vec((0usize..3, comparison(), 0usize..16), 0..4),
        neg in prop::collection::vec((0usize..3, comparison(), 0usize..16), 0..4),
    ) {
        let positive: Vec<_> = pos.into_iter().map(|(i, op, t)| make_prop(i, op, t)).collect();
        let negative: Vec<_> = neg.into_iter().map(|(i, op, t)| make_prop(i, op, t)).collect();
        let expected = positive.iter().all(|ap| ap.valid(&state))
            && negative.iter().all(|ap| !ap.valid(&state));
        let transition = PropertyTransition::new("a", "b", positive, negative);
        prop_assert_eq!(transition.enabled(&state), expected);
        prop_assert_eq!(transition.try_enabled(&state), Ok(expected));
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_threshold_scenarios() {
    let ge = AffineProp::compare(1, Comparison::GreaterEqual, 5, "dom[1]>=5");
    assert!(ge.valid(&[0usize, 5, 10]));
    assert!(!ge.valid(&[0usize, 4, 10]));

    let lt = AffineProp::compare(2, Comparison::Less, 10, "dom[2]<10");
    assert!(lt.valid(&[0usize, 0, 9]));
    assert_eq!(lt.to_string(), "dom[2]<10");
}

#[test]
fn test_concurrent_evaluation_of_shared_propositions() {
    let props: Vec<AffineProp> = (0..4)
        .map(|i| make_prop(i, Comparison::GreaterEqual, 2))
        .collect();
    let states: Vec<Vec<Word>> = (0..16).map(|n| vec![n % 4; 4]).collect();

    let props = &props;
    let results: Vec<Vec<bool>> = std::thread::scope(|s| {
        let handles: Vec<_> = states
            .iter()
            .map(|state| {
                s.spawn(move || props.iter().map(|ap| ap.valid(state)).collect::<Vec<_>>())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (state, row) in states.iter().zip(&results) {
        assert!(row.iter().all(|&v| v == (state[0] >= 2)));
    }
}

#[test]
fn test_product_exploration_reaches_accepting_location() {
    init_tracing();

    // Property "eventually x >= 3": q0 --(not x>=3)--> q0, q0 --(x>=3)--> acc
    let reached = AffineProp::compare(0, Comparison::GreaterEqual, 3, "x>=3");
    let mut aut = PropertyAutomaton::new();
    let q0 = aut.add_location("q0");
    let acc = aut.add_location("acc");
    aut.set_initial("q0").unwrap();
    aut.set_accepting("acc").unwrap();
    aut.add_transition(PropertyTransition::new(
        "q0",
        "q0",
        Vec::new(),
        vec![reached.clone()],
    ))
    .unwrap();
    aut.add_transition(PropertyTransition::new("q0", "acc", vec![reached], Vec::new()))
        .unwrap();
    aut.add_transition(PropertyTransition::unconditional("acc", "acc"))
        .unwrap();

    // System: x counts up to 4 and stays there
    let config = EvalConfig::default().with_trace(true);
    let mut current = AffineState::with_location(vec![0], aut.initial().unwrap());
    let mut seen_accepting = false;
    for _ in 0..8 {
        let x = current.species()[0];
        let candidate = AffineState::with_location(vec![(x + 1).min(4)], q0);
        let succs = aut.synchronize(&current, &candidate, &config).unwrap();
        assert_eq!(succs.len(), 1);
        current = succs.into_iter().next().unwrap();
        if aut.is_accepting(current.location().unwrap()).unwrap() {
            seen_accepting = true;
            assert_eq!(current.location(), Some(acc));
        }
    }
    assert!(seen_accepting);
}
