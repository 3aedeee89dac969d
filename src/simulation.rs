//! Node-by-node simulation of a `BooleanNetwork`.
//!
//! A `Simulator` provides the values of constants and primary inputs, the network provides
//! the function of every gate, and `simulate_nodes` propagates the values through the whole
//! network in topological order:
//!
//! ```rust
//! use biodivine_lib_cec::simulation::{simulate, TruthTableSimulator};
//! use biodivine_lib_cec::Aig;
//!
//! let aig = Aig::from_expressions(&["a", "b"], &["a & !b", "a | b"]).unwrap();
//! let outputs = simulate(&aig, &TruthTableSimulator::new(2));
//! assert_eq!("0010", outputs[0].to_string());
//! assert_eq!("1110", outputs[1].to_string());
//! ```

use crate::{BooleanNetwork, InputValuation, PatternMap, SimulationValue, Simulator, TruthTable};

/// Simulates primary inputs as the projections to the variables of a `TruthTable` of
/// `num_vars` variables (input `i` becomes variable `i`).
///
/// The network must not have more than `num_vars` inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TruthTableSimulator {
    num_vars: u32,
}

/// Simulates a network in a single `InputValuation`.
#[derive(Clone, Copy, Debug)]
pub struct ValuationSimulator<'a> {
    valuation: &'a InputValuation,
}

impl TruthTableSimulator {
    pub fn new(num_vars: u32) -> TruthTableSimulator {
        TruthTableSimulator { num_vars }
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }
}

impl Simulator for TruthTableSimulator {
    type Value = TruthTable;

    fn compute_constant(&self, value: bool) -> TruthTable {
        TruthTable::mk_const(self.num_vars, value)
    }

    fn compute_pi(&self, index: usize) -> TruthTable {
        TruthTable::mk_var(self.num_vars, index as u32)
    }
}

impl<'a> ValuationSimulator<'a> {
    pub fn new(valuation: &'a InputValuation) -> ValuationSimulator<'a> {
        ValuationSimulator { valuation }
    }
}

impl Simulator for ValuationSimulator<'_> {
    type Value = bool;

    fn compute_constant(&self, value: bool) -> bool {
        value
    }

    fn compute_pi(&self, index: usize) -> bool {
        self.valuation.value(index)
    }
}

/// Compute the value of every node of `network` and store it in `patterns`.
///
/// Primary inputs which already have a value in `patterns` keep it; the remaining inputs
/// are assigned `simulator.compute_pi`. Constant nodes are assigned
/// `simulator.compute_constant` and gates are evaluated from the values of their fanins
/// (complemented fanins are negated) in topological order.
pub fn simulate_nodes<N, S>(
    network: &N,
    patterns: &mut PatternMap<N::Node, S::Value>,
    simulator: &S,
) where
    N: BooleanNetwork,
    S: Simulator,
{
    if cfg!(feature = "shields_up") && patterns.len() > network.size() {
        panic!(
            "Pattern map has {} values, but the network only has {} nodes.",
            patterns.len(),
            network.size()
        );
    }
    for index in 0..network.num_pis() {
        let input = network.pi_at(index);
        if !patterns.contains(&input) {
            patterns.insert(input, simulator.compute_pi(index));
        }
    }
    for position in 0..network.size() {
        let node = network.node_at(position);
        if network.is_pi(node) {
            continue;
        }
        let value = if network.is_constant(node) {
            simulator.compute_constant(network.constant_value(node))
        } else {
            let fanin_values: Vec<S::Value> = network
                .fanins(node)
                .into_iter()
                .map(|fanin| signal_value(network, patterns, fanin))
                .collect();
            network.compute(node, &fanin_values)
        };
        patterns.insert(node, value);
    }
}

/// Simulate `network` from scratch and return the values of its outputs (with output
/// complementation already applied).
pub fn simulate<N, S>(network: &N, simulator: &S) -> Vec<S::Value>
where
    N: BooleanNetwork,
    S: Simulator,
{
    let mut patterns = PatternMap::new();
    simulate_nodes(network, &mut patterns, simulator);
    (0..network.num_pos())
        .map(|index| signal_value(network, &patterns, network.po_at(index)))
        .collect()
}

/// Evaluate the outputs of `network` in a single input `valuation`.
pub fn evaluate<N: BooleanNetwork>(network: &N, valuation: &InputValuation) -> Vec<bool> {
    simulate(network, &ValuationSimulator::new(valuation))
}

/// The value of `signal` according to `patterns`: the value of its node, negated if
/// the signal is complemented.
///
/// *Panics* if the node of `signal` has no value.
pub fn signal_value<N, V>(
    network: &N,
    patterns: &PatternMap<N::Node, V>,
    signal: N::Signal,
) -> V
where
    N: BooleanNetwork,
    V: SimulationValue,
{
    let value = &patterns[&network.get_node(signal)];
    if network.is_complemented(signal) {
        value.not()
    } else {
        value.clone()
    }
}
