//! # Biodivine/LibCEC
//!
//! This crate implements simulation-based [combinational equivalence checking](https://en.wikipedia.org/wiki/Formal_equivalence_checking)
//! (CEC) of Boolean networks. Instead of a SAT or BDD engine, the two networks are combined
//! into a *miter* and the miter is simulated *exhaustively* using bit-parallel truth tables.
//!
//! Exhaustive simulation is exponential, so the interesting part is the scheduling: the crate
//! picks a *split variable* $w$ (the number of inputs whose full $2^w$-row truth table fits into
//! memory), and then runs $2^{n - w}$ *rounds*, each fixing the remaining "high" inputs to one
//! constant assignment. Together, the rounds cover every input valuation exactly once. Networks
//! with more than 40 inputs are not checked at all.
//!
//! The crate is meant as a cheap pre-check before a proper formal equivalence proof:
//!
//!  - A generic `BooleanNetwork`/`NetworkBuilder` interface with one concrete implementation,
//!    the and-inverter graph `Aig`.
//!  - `TruthTable`s of arbitrary width with the usual logical operations.
//!  - Miter construction (`miter`) and node-by-node simulation (`simulation` module).
//!  - The memory-bounded round scheduler (`RoundPlan`) and the checker itself
//!    (`SimulationCec`, `simulation_cec`).
//!  - Counterexample extraction whenever the networks differ.
//!  - A small Boolean expression front-end for building networks from formulas.
//!
//! ```rust
//! use biodivine_lib_cec::*;
//!
//! let left = Aig::from_expressions(&["a", "b"], &["a ^ b"]).unwrap();
//! let right = Aig::from_expressions(&["a", "b"], &["(a | b) & !(a & b)"]).unwrap();
//!
//! let mut stats = CecStats::default();
//! assert_eq!(Ok(Some(true)), simulation_cec(&left, &right, Some(&mut stats)));
//! assert_eq!(2, stats.split_var);
//! assert_eq!(1, stats.rounds);
//!
//! let broken = Aig::from_expressions(&["a", "b"], &["a | b"]).unwrap();
//! let report = SimulationCec::default().check(&left, &broken).unwrap();
//! assert_eq!(CecOutcome::NotEquivalent, report.outcome);
//! // The only difference is in the valuation a = b = 1.
//! assert_eq!("[1,1]", report.counterexample.unwrap().to_string());
//! ```
//!

use fxhash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

pub mod boolean_expression;
pub mod simulation;

/// **(internal)** Implementation of the `TruthTable` and its logical operations.
mod _impl_truth_table;

/// **(internal)** Implementation of the `Aig` network and its signals.
mod _impl_aig;

/// **(internal)** Implementation of the `AigSignal` and `AigNodeId`.
mod _impl_aig_signal;

/// **(internal)** Construction of miter networks.
mod _impl_miter;

/// **(internal)** Implementation of the `PatternMap`.
mod _impl_pattern_map;

/// **(internal)** Implementation of the `CecConfig` builder.
mod _impl_cec_config;

/// **(internal)** Capacity planning: the `RoundPlan` and memory ceiling computation.
mod _impl_round_plan;

/// **(internal)** Per-round input patterns and their inverse (round/row to valuation).
mod _impl_input_patterns;

/// **(internal)** Folding of miter outputs into the equivalence verdict.
mod _impl_verdict;

/// **(internal)** The round loop of the simulation-based checker.
mod _impl_simulation_cec;

/// **(internal)** Implementation of `InputValuation` and `InputValuationIterator`.
mod _impl_input_valuation;

/// **(internal)** Scenario tests and randomized cross-checks of the whole checker.
#[cfg(test)]
mod _test_cec;

/// Several basic utility methods for testing the checker.
#[cfg(test)]
mod _test_util;

pub use _impl_cec_config::{DEFAULT_INPUT_LIMIT, DEFAULT_MEMORY_BUDGET, DEFAULT_NODE_OVERHEAD};
pub use _impl_input_patterns::input_pattern;
pub use _impl_miter::miter;
pub use _impl_round_plan::memory_ceiling;
pub use _impl_simulation_cec::simulation_cec;
pub use _impl_verdict::{first_failing_row, update_verdict};

/// Errors reported by the checker and by the network construction helpers.
///
/// Note that a network which is too large to be checked, or a pair of networks that cannot
/// be combined into a miter, is *not* an error: these situations are reported through
/// `CecOutcome::Unknown` and `CecOutcome::NotRun`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CecError {
    /// The memory budget is too small to give every network node even a single
    /// simulation bit (the logarithm argument of the memory ceiling is not positive).
    #[error("memory budget of {memory_budget} bits cannot accommodate {num_nodes} nodes")]
    CapacityUnderflow { num_nodes: usize, memory_budget: u64 },
    /// The number of rounds `2^(num_pis - split_var)` does not fit into 64 bits.
    #[error("{num_pis} inputs with split variable {split_var} need too many rounds")]
    RoundOverflow { num_pis: usize, split_var: u32 },
    /// A Boolean expression could not be parsed.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
    /// A Boolean expression references a variable which is not a network input.
    #[error("unknown input variable `{0}`")]
    UnknownVariable(String),
}

/// A truth table of a Boolean function over `num_vars` variables, i.e. a bit-vector with
/// $2^{num\_vars}$ rows.
///
/// In row $j$, the variable $k$ has the value of the $k$-th bit of $j$. Rows are packed into
/// 64-bit words (row $j$ is bit `j % 64` of word `j / 64`). Tables with fewer than six
/// variables use a single word and keep all bits above the last row cleared.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TruthTable {
    num_vars: u32,
    words: Vec<u64>,
}

/// Values which can be propagated through a network during simulation.
///
/// This is the only capability the simulation needs from its values, so the same network
/// can be simulated with whole `TruthTable`s or with individual `bool`s.
pub trait SimulationValue: Clone {
    fn not(&self) -> Self;
    fn and(&self, other: &Self) -> Self;
    fn or(&self, other: &Self) -> Self;
    fn xor(&self, other: &Self) -> Self;
    /// True if the value is constant `false` (for truth tables: every row is zero).
    fn is_false(&self) -> bool;
}

/// Provides the values of network "leaves" (constants and primary inputs) for simulation.
pub trait Simulator {
    type Value: SimulationValue;

    fn compute_constant(&self, value: bool) -> Self::Value;

    /// Value of the primary input with the given (0-based) index.
    fn compute_pi(&self, index: usize) -> Self::Value;
}

/// A read-only view of a combinational Boolean network.
///
/// Nodes are identified by `Node`, edges by `Signal` (a node reference plus a complementation
/// flag). Positions `0..size()` enumerate all nodes (including constants and primary inputs)
/// in a topological order, i.e. every node appears after all of its fanins.
pub trait BooleanNetwork {
    type Node: Copy + Debug + Eq + Hash;
    type Signal: Copy + Debug + Eq;

    fn num_pis(&self) -> usize;
    fn num_pos(&self) -> usize;

    /// Total number of nodes, including constants and primary inputs.
    fn size(&self) -> usize;

    /// The node at the given position of the topological order.
    fn node_at(&self, position: usize) -> Self::Node;
    fn pi_at(&self, index: usize) -> Self::Node;
    fn po_at(&self, index: usize) -> Self::Signal;

    fn get_node(&self, signal: Self::Signal) -> Self::Node;
    fn is_complemented(&self, signal: Self::Signal) -> bool;

    fn is_constant(&self, node: Self::Node) -> bool;

    /// Value of a constant node (only meaningful if `is_constant(node)`).
    fn constant_value(&self, node: Self::Node) -> bool;
    fn is_pi(&self, node: Self::Node) -> bool;

    /// Fanin signals of a gate node (empty for constants and primary inputs).
    fn fanins(&self, node: Self::Node) -> Vec<Self::Signal>;

    /// Evaluate the function of a gate `node`, given the values of its fanin *signals*
    /// (complemented fanins are already negated).
    fn compute<V: SimulationValue>(&self, node: Self::Node, fanin_values: &[V]) -> V;
}

/// A `BooleanNetwork` which can be constructed incrementally.
pub trait NetworkBuilder: BooleanNetwork + Sized {
    /// A new network without inputs, outputs or gates.
    fn empty() -> Self;

    fn get_constant(&self, value: bool) -> Self::Signal;
    fn create_pi(&mut self) -> Self::Signal;
    fn create_po(&mut self, signal: Self::Signal);
    fn create_not(&self, signal: Self::Signal) -> Self::Signal;
    fn create_and(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;

    fn create_or(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal {
        let (not_a, not_b) = (self.create_not(a), self.create_not(b));
        let nor = self.create_and(not_a, not_b);
        self.create_not(nor)
    }

    fn create_xor(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal {
        let (not_a, not_b) = (self.create_not(a), self.create_not(b));
        let left = self.create_and(a, not_b);
        let right = self.create_and(not_a, b);
        self.create_or(left, right)
    }

    /// Re-create the gate `node` of the `source` network in this network, using `fanins`
    /// (signals of this network) in place of the original fanins.
    fn clone_node(
        &mut self,
        source: &Self,
        node: Self::Node,
        fanins: &[Self::Signal],
    ) -> Self::Signal;
}

/// Identifies a node of an `Aig`. Node `0` is always the constant `false`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AigNodeId(u32);

/// A possibly complemented edge of an `Aig`.
///
/// The signal is encoded as a single "literal" `2 * node + complemented`, the same encoding
/// as used by the AIGER format.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AigSignal(u32);

/// **(internal)** A single vertex of the `Aig` graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum AigNode {
    Constant,
    /// Primary input with the given index.
    Input(u32),
    And(AigSignal, AigSignal),
}

/// An and-inverter graph: a combinational network of two-input AND gates with complemented
/// edges.
///
/// Nodes are stored in creation order, which is always topological. AND gates are structurally
/// hashed, so building the same gate twice returns the same signal.
#[derive(Clone, Debug)]
pub struct Aig {
    nodes: Vec<AigNode>,
    inputs: Vec<AigNodeId>,
    outputs: Vec<AigSignal>,
    strash: FxHashMap<(AigSignal, AigSignal), AigNodeId>,
}

/// Association of network nodes to their current simulation values.
#[derive(Clone, Debug)]
pub struct PatternMap<K: Eq + Hash, V = TruthTable> {
    values: FxHashMap<K, V>,
}

/// Tunable parameters of the simulation-based checker.
///
/// The defaults correspond to a memory budget of $2^{29}$ simulation bits with a per-node
/// overhead of 32, and at most 40 primary inputs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CecConfig {
    input_limit: usize,
    memory_budget: u64,
    node_overhead: u64,
    split_limit: Option<u32>,
    early_exit: bool,
}

/// The schedule of one checker run: `split_var` inputs are simulated in parallel in each of
/// the `rounds` rounds, and `rounds * 2^split_var == 2^num_pis`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RoundPlan {
    num_pis: usize,
    split_var: u32,
    rounds: u64,
}

/// Statistics of one checker run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CecStats {
    /// Split variable (number of inputs simulated in parallel, i.e. the truth table width).
    pub split_var: u32,
    /// Number of planned simulation rounds.
    pub rounds: u64,
    /// Number of rounds that were actually simulated. Equal to `rounds` unless
    /// `CecConfig::early_exit` stopped the run after a counterexample.
    pub simulated_rounds: u64,
}

/// The result of a checker run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CecOutcome {
    /// The networks could not be combined into a miter (their input or output counts differ).
    #[default]
    NotRun,
    /// The networks have too many inputs to be simulated exhaustively.
    Unknown,
    Equivalent,
    NotEquivalent,
}

/// The outcome of a checker run, together with its statistics and (if the networks
/// differ) a counterexample.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CecReport {
    pub outcome: CecOutcome,
    pub stats: CecStats,
    /// The first input valuation (in simulation order) for which some output differs.
    pub counterexample: Option<InputValuation>,
}

/// The simulation-based equivalence checker configured by a `CecConfig`.
#[derive(Clone, Debug, Default)]
pub struct SimulationCec {
    config: CecConfig,
}

/// Exactly describes one assignment of Boolean values to the primary inputs of a network.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InputValuation(Vec<bool>);

/// Exhaustively iterates over all valuations of a given number of inputs.
///
/// Be aware of the exponential number of iterations!
#[derive(Clone, Debug)]
pub struct InputValuationIterator(Option<InputValuation>);
