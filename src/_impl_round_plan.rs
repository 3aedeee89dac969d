use super::{CecConfig, CecError, RoundPlan};
use std::fmt::{Display, Error, Formatter};

/// Truth tables cannot have more variables than this, regardless of the memory budget.
const MAX_SPLIT_VAR: f64 = 63.0;

/// Compute the largest truth table width such that simulating `num_nodes` nodes stays within
/// the memory budget of `config`:
///
/// $$ \lfloor \log_2(budget / nodes - overhead) \rfloor + 3 $$
///
/// Returns `CecError::CapacityUnderflow` if the network is too large for the budget, i.e.
/// the logarithm argument is not positive or the ceiling is negative. A ceiling of zero is
/// valid: every input is then enumerated in rounds.
/// A network always has at least one (constant) node, so `num_nodes = 0` is treated as `1`.
pub fn memory_ceiling(num_nodes: usize, config: &CecConfig) -> Result<u32, CecError> {
    let nodes = num_nodes.max(1) as f64;
    let share = config.memory_budget() as f64 / nodes - config.node_overhead() as f64;
    let ceiling = (share.log2() + 3.0).floor();
    // Comparisons with NaN are false, so a negative share is rejected as well.
    if !(share > 0.0 && ceiling >= 0.0) {
        return Err(CecError::CapacityUnderflow {
            num_nodes,
            memory_budget: config.memory_budget(),
        });
    }
    Ok(ceiling.min(MAX_SPLIT_VAR) as u32)
}

impl RoundPlan {
    /// Plan the simulation of a network with `num_pis` inputs and `num_nodes` nodes using the
    /// default `CecConfig`.
    pub fn new(num_pis: usize, num_nodes: usize) -> Result<RoundPlan, CecError> {
        Self::with_config(num_pis, num_nodes, &CecConfig::default())
    }

    /// Plan the simulation of a network with `num_pis` inputs and `num_nodes` nodes.
    ///
    /// The split variable is the smaller of `num_pis` and the memory ceiling (and the split
    /// limit of `config`, if any). The remaining inputs are covered by
    /// $2^{num\_pis - split\_var}$ rounds.
    pub fn with_config(
        num_pis: usize,
        num_nodes: usize,
        config: &CecConfig,
    ) -> Result<RoundPlan, CecError> {
        let ceiling = memory_ceiling(num_nodes, config)?;
        let mut split_var = num_pis.min(ceiling as usize) as u32;
        if let Some(limit) = config.split_limit() {
            split_var = split_var.min(limit);
        }
        Self::from_split(num_pis, split_var)
    }

    /// Make a plan with an explicitly chosen split variable.
    ///
    /// *Panics:* `split_var` must not exceed `num_pis`.
    pub fn from_split(num_pis: usize, split_var: u32) -> Result<RoundPlan, CecError> {
        if split_var as usize > num_pis {
            panic!(
                "Split variable {} is larger than the number of inputs {}.",
                split_var, num_pis
            );
        }
        let high_inputs = num_pis - split_var as usize;
        if high_inputs >= 64 {
            return Err(CecError::RoundOverflow { num_pis, split_var });
        }
        Ok(RoundPlan {
            num_pis,
            split_var,
            rounds: 1u64 << high_inputs,
        })
    }

    pub fn num_pis(&self) -> usize {
        self.num_pis
    }

    /// Number of inputs simulated in parallel (the width of all truth tables).
    pub fn split_var(&self) -> u32 {
        self.split_var
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Number of input valuations covered by a single round.
    pub fn rows_per_round(&self) -> u64 {
        1u64 << self.split_var
    }
}

impl Display for RoundPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "{} inputs: {} rounds of {} rows",
            self.num_pis,
            self.rounds,
            self.rows_per_round()
        )
    }
}
