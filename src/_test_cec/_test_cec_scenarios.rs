use crate::_test_util::{brute_force_difference, init_logger, mk_ripple_carry_adder};
use crate::simulation::evaluate;
use crate::*;

/// **(internal)** A network with `num_pis` inputs and a single output equal to the first input.
fn mk_wide_network(num_pis: usize) -> Aig {
    let mut aig = Aig::new();
    let inputs: Vec<AigSignal> = (0..num_pis).map(|_| aig.create_pi()).collect();
    aig.create_po(inputs[0]);
    aig
}

#[test]
fn network_is_equivalent_to_itself() {
    init_logger();
    let adder = mk_ripple_carry_adder(4, false);
    let mut stats = CecStats::default();
    assert_eq!(Ok(Some(true)), simulation_cec(&adder, &adder, Some(&mut stats)));
    assert_eq!(8, stats.split_var);
    assert_eq!(1, stats.rounds);
}

#[test]
fn structurally_different_adders_are_equivalent() {
    init_logger();
    for width in 1..6 {
        let left = mk_ripple_carry_adder(width, false);
        let right = mk_ripple_carry_adder(width, true);
        assert_eq!(Ok(Some(true)), simulation_cec(&left, &right, None));
        assert_eq!(Ok(Some(true)), simulation_cec(&right, &left, None));
    }
}

#[test]
fn output_polarity_difference() {
    init_logger();
    let adder = mk_ripple_carry_adder(3, true);
    for output in 0..adder.num_pos() {
        let mut flipped = adder.clone();
        flipped.outputs[output] = !flipped.outputs[output];
        assert_eq!(Ok(Some(false)), simulation_cec(&adder, &flipped, None));

        let report = SimulationCec::default().check(&adder, &flipped).unwrap();
        assert_eq!(CecOutcome::NotEquivalent, report.outcome);
        // Every valuation is a difference, so the first simulated row is reported.
        let counterexample = report.counterexample.unwrap();
        assert_eq!(InputValuation::all_false(6), counterexample);
        assert_ne!(
            evaluate(&adder, &counterexample),
            evaluate(&flipped, &counterexample)
        );
    }
}

#[test]
fn too_many_inputs_is_unknown() {
    init_logger();
    let wide = mk_wide_network(41);
    let mut stats = CecStats::default();
    assert_eq!(Ok(None), simulation_cec(&wide, &wide, Some(&mut stats)));
    assert_eq!(CecStats::default(), stats);

    let report = SimulationCec::default().check(&wide, &wide).unwrap();
    assert_eq!(CecOutcome::Unknown, report.outcome);

    // The limit does not depend on the size of the other network.
    let narrow = mk_wide_network(3);
    let report = SimulationCec::default().check(&wide, &narrow).unwrap();
    assert_eq!(CecOutcome::Unknown, report.outcome);
}

#[test]
fn input_limit_is_inclusive() {
    init_logger();
    let adder = mk_ripple_carry_adder(2, false);
    let at_limit = SimulationCec::new(CecConfig::default().with_input_limit(4));
    assert_eq!(
        CecOutcome::Equivalent,
        at_limit.check(&adder, &adder).unwrap().outcome
    );
    let below_limit = SimulationCec::new(CecConfig::default().with_input_limit(3));
    assert_eq!(
        CecOutcome::Unknown,
        below_limit.check(&adder, &adder).unwrap().outcome
    );
    // Forty inputs are still planned, the limit only applies above it.
    let wide = mk_wide_network(DEFAULT_INPUT_LIMIT);
    let m = miter(&wide, &wide).unwrap();
    let plan = RoundPlan::new(m.num_pis(), m.size()).unwrap();
    assert_eq!(1u64 << DEFAULT_INPUT_LIMIT, plan.rounds() << plan.split_var());
}

#[test]
fn arity_mismatch_is_not_run() {
    init_logger();
    let left = Aig::from_expressions(&["a", "b"], &["a & b"]).unwrap();
    let fewer_inputs = Aig::from_expressions(&["a"], &["a"]).unwrap();
    let more_outputs = Aig::from_expressions(&["a", "b"], &["a & b", "a"]).unwrap();

    for right in [&fewer_inputs, &more_outputs] {
        let report = SimulationCec::default().check(&left, right).unwrap();
        assert_eq!(CecReport::default(), report);
        assert_eq!(CecOutcome::NotRun, report.outcome);
        assert_eq!(Ok(None), simulation_cec(&left, right, None));
    }
}

#[test]
fn repeated_checks_are_identical() {
    init_logger();
    let checker = SimulationCec::new(CecConfig::default().with_split_limit(2));
    let left = mk_ripple_carry_adder(3, false);
    let mut right = mk_ripple_carry_adder(3, true);
    right.outputs[3] = !right.outputs[3];
    let first = checker.check(&left, &right).unwrap();
    let second = checker.check(&left, &right).unwrap();
    assert_eq!(first, second);
    assert_eq!(16, first.stats.rounds);
}

#[test]
fn every_split_finds_the_same_unique_difference() {
    init_logger();
    let left = Aig::from_expressions(&["a", "b", "c", "d"], &["a & b | c & d"]).unwrap();
    let right = Aig::from_expressions(
        &["a", "b", "c", "d"],
        &["(a & b | c & d) ^ (a & !b & c & !d)"],
    )
    .unwrap();
    let expected = brute_force_difference(&left, &right);
    assert_eq!(
        Some(InputValuation::new(vec![true, false, true, false])),
        expected
    );
    for split in 0..5 {
        let checker = SimulationCec::new(CecConfig::default().with_split_limit(split));
        let report = checker.check(&left, &right).unwrap();
        assert_eq!(CecOutcome::NotEquivalent, report.outcome);
        assert_eq!(split, report.stats.split_var);
        assert_eq!(1u64 << (4 - split), report.stats.rounds);
        assert_eq!(report.stats.rounds, report.stats.simulated_rounds);
        assert_eq!(expected, report.counterexample);
    }
}

#[test]
fn tiny_memory_budget_forces_small_split() {
    init_logger();
    let left = Aig::from_expressions(&["a", "b", "c"], &["a ^ b ^ c"]).unwrap();
    let right = Aig::from_expressions(&["a", "b", "c"], &["a <=> (b <=> c)"]).unwrap();
    let size = miter(&left, &right).unwrap().size() as u64;
    // Each node gets roughly 3/8 of a bit, which leaves room for a single variable.
    let config = CecConfig::default()
        .with_node_overhead(0)
        .with_memory_budget((3 * size + 7) / 8);
    let report = SimulationCec::new(config).check(&left, &right).unwrap();
    assert_eq!(CecOutcome::Equivalent, report.outcome);
    assert_eq!(1, report.stats.split_var);
    assert_eq!(4, report.stats.rounds);
    assert_eq!(4, report.stats.simulated_rounds);
}

#[test]
fn round_overflow_with_raised_input_limit() {
    init_logger();
    let wide = mk_wide_network(70);
    let config = CecConfig::default()
        .with_input_limit(100)
        .with_split_limit(6);
    assert_eq!(
        Err(CecError::RoundOverflow {
            num_pis: 70,
            split_var: 6
        }),
        SimulationCec::new(config).check(&wide, &wide)
    );
}

#[test]
fn constant_networks() {
    init_logger();
    let zero = Aig::from_expressions(&[], &["false", "a_is_not_needed_here"]);
    assert_eq!(
        Err(CecError::UnknownVariable("a_is_not_needed_here".to_string())),
        zero.map(|aig| aig.num_pos())
    );
    let left = Aig::from_expressions(&[], &["false", "true"]).unwrap();
    let right = Aig::from_expressions(&[], &["true & false", "!false"]).unwrap();
    let mut stats = CecStats::default();
    assert_eq!(Ok(Some(true)), simulation_cec(&left, &right, Some(&mut stats)));
    assert_eq!(0, stats.split_var);
    assert_eq!(1, stats.rounds);

    let report = SimulationCec::default().check(&left, &left.clone()).unwrap();
    assert_eq!(CecOutcome::Equivalent, report.outcome);
    let inverted = Aig::from_expressions(&[], &["true", "true"]).unwrap();
    let report = SimulationCec::default().check(&left, &inverted).unwrap();
    assert_eq!(CecOutcome::NotEquivalent, report.outcome);
    assert_eq!(Some(InputValuation::new(Vec::new())), report.counterexample);
}
