//!
//! A random binary tree of operations is turned into two structurally different `Aig`s: one
//! built from the basic `NetworkBuilder` operations and one where every operation is
//! rewritten using a different (but equivalent) identity. The two networks must always be
//! equivalent. Then, a single negation in the tree is flipped, and the checker must agree
//! with exhaustive evaluation of both networks. To get predictable test cases, we use
//! a predefined set of randomness seeds.
//!
//! The checker runs with a random split limit, so multi-round schedules are exercised as
//! well as fully parallel ones.

use crate::_test_util::{brute_force_difference, init_logger};
use crate::simulation::evaluate;
use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Clone, Copy, Debug)]
enum CecOp {
    And,
    Or,
    Xor,
    Imp,
    Iff,
}

#[derive(Clone, Copy, Debug)]
struct Op {
    op: CecOp,
    negate: bool,
}

#[derive(Clone, Debug)]
struct CecOpTree {
    num_vars: usize,
    leaves: Vec<usize>,
    ops: Vec<Vec<Op>>,
}

impl CecOpTree {
    /// Create a new random tree with `2^tree_height` leaves.
    fn new_random(tree_height: u8, num_vars: usize, rand: &mut StdRng) -> CecOpTree {
        let num_leaves = 1 << (tree_height as usize);
        let leaves: Vec<usize> = (0..num_leaves)
            .map(|_| rand.next_u32() as usize % num_vars)
            .collect();

        let mut ops: Vec<Vec<Op>> = Vec::new();
        let mut level_width = num_leaves / 2;
        for _ in 0..tree_height {
            let level: Vec<Op> = (0..level_width)
                .map(|_| {
                    let negate = rand.next_u32() % 2 == 0;
                    let op = match rand.next_u32() % 5 {
                        0 => CecOp::And,
                        1 => CecOp::Or,
                        2 => CecOp::Xor,
                        3 => CecOp::Imp,
                        _ => CecOp::Iff,
                    };
                    Op { op, negate }
                })
                .collect();
            ops.push(level);
            level_width /= 2;
        }

        CecOpTree {
            num_vars,
            leaves,
            ops,
        }
    }

    /// Flip the negation of one random operation.
    fn mutate(&mut self, rand: &mut StdRng) {
        let level = rand.next_u32() as usize % self.ops.len();
        let index = rand.next_u32() as usize % self.ops[level].len();
        let op = &mut self.ops[level][index];
        op.negate = !op.negate;
    }

    /// Build this tree as an `Aig` with `num_vars` inputs and a single output.
    fn build(&self, rewrite: bool) -> Aig {
        let mut aig = Aig::new();
        let inputs: Vec<AigSignal> = (0..self.num_vars).map(|_| aig.create_pi()).collect();
        let mut signals: Vec<AigSignal> = self.leaves.iter().map(|i| inputs[*i]).collect();
        for level in &self.ops {
            signals = signals
                .chunks(2)
                .zip(level)
                .map(|(pair, op)| {
                    let result = apply(&mut aig, op.op, pair[0], pair[1], rewrite);
                    result.complement_if(op.negate)
                })
                .collect();
        }
        aig.create_po(signals[0]);
        aig
    }
}

/// Build `a op b`, either directly or using an equivalent rewriting of the operation.
fn apply(aig: &mut Aig, op: CecOp, a: AigSignal, b: AigSignal, rewrite: bool) -> AigSignal {
    match (op, rewrite) {
        (CecOp::And, false) => aig.create_and(a, b),
        (CecOp::And, true) => !aig.create_or(!a, !b),
        (CecOp::Or, false) => aig.create_or(a, b),
        (CecOp::Or, true) => !aig.create_and(!a, !b),
        (CecOp::Xor, false) => aig.create_xor(a, b),
        (CecOp::Xor, true) => {
            let any = aig.create_or(a, b);
            let both = aig.create_and(a, b);
            aig.create_and(any, !both)
        }
        (CecOp::Imp, false) => aig.create_or(!a, b),
        (CecOp::Imp, true) => !aig.create_and(a, !b),
        (CecOp::Iff, false) => !aig.create_xor(a, b),
        (CecOp::Iff, true) => {
            let both = aig.create_and(a, b);
            let neither = aig.create_and(!a, !b);
            aig.create_or(both, neither)
        }
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

/// Returns true if the mutated tree was not equivalent to the original one.
fn fuzz_test(num_vars: usize, tree_height: u8, seed: u64) -> bool {
    let mut rand = StdRng::seed_from_u64(seed);
    let tree = CecOpTree::new_random(tree_height, num_vars, &mut rand);
    let split_limit = rand.next_u32() % (num_vars as u32 + 1);
    let early_exit = rand.next_u32() % 2 == 0;
    let checker = SimulationCec::new(
        CecConfig::default()
            .with_split_limit(split_limit)
            .with_early_exit(early_exit),
    );

    let left = tree.build(false);
    let right = tree.build(true);
    let report = checker.check(&left, &right).unwrap();
    assert_eq!(CecOutcome::Equivalent, report.outcome, "Tree: {:?}", tree);
    assert_eq!(split_limit, report.stats.split_var);
    assert_eq!(1u64 << num_vars, report.stats.rounds << report.stats.split_var);

    let mut mutated = tree.clone();
    mutated.mutate(&mut rand);
    let right = mutated.build(true);
    let report = checker.check(&left, &right).unwrap();
    match brute_force_difference(&left, &right) {
        None => {
            assert_eq!(CecOutcome::Equivalent, report.outcome);
            assert_eq!(None, report.counterexample);
            false
        }
        Some(_) => {
            assert_eq!(CecOutcome::NotEquivalent, report.outcome);
            let counterexample = report.counterexample.unwrap();
            assert_ne!(
                evaluate(&left, &counterexample),
                evaluate(&right, &counterexample),
                "Error in valuation {}",
                counterexample
            );
            if !early_exit {
                assert_eq!(report.stats.rounds, report.stats.simulated_rounds);
            }
            true
        }
    }
}

fn fuzz_vars(num_vars: usize) {
    init_logger();
    let mut non_trivial = 0;
    for height in 1..8 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(num_vars, height, *seed) {
                non_trivial += 1;
            }
        }
    }
    println!(
        "Found {}/{} non-equivalent mutations.",
        non_trivial,
        7 * FUZZ_SEEDS.len()
    );
}

#[test]
fn fuzz_var_2() {
    fuzz_vars(2);
}

#[test]
fn fuzz_var_4() {
    fuzz_vars(4);
}

#[test]
fn fuzz_var_8() {
    fuzz_vars(8);
}

#[test]
fn fuzz_var_10() {
    fuzz_vars(10);
}
