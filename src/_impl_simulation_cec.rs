use super::{
    first_failing_row, miter, update_verdict, BooleanNetwork, CecConfig, CecError, CecOutcome,
    CecReport, CecStats, NetworkBuilder, PatternMap, RoundPlan, SimulationCec, TruthTable,
};
use crate::simulation::{simulate_nodes, TruthTableSimulator};
use log::{debug, info, trace};
use std::fmt::{Display, Error, Formatter};

impl SimulationCec {
    pub fn new(config: CecConfig) -> SimulationCec {
        SimulationCec { config }
    }

    pub fn config(&self) -> &CecConfig {
        &self.config
    }

    /// Check the equivalence of two networks.
    ///
    /// If `left` has more inputs than the configured limit, the outcome is `Unknown` and nothing
    /// is simulated. If the two networks cannot be combined into a miter, the outcome is
    /// `NotRun`. In both cases, the statistics stay at their defaults.
    ///
    /// Otherwise, the miter is simulated exhaustively (see `check_miter`). The only possible
    /// error is a memory budget which is too small for the miter.
    pub fn check<N: NetworkBuilder>(&self, left: &N, right: &N) -> Result<CecReport, CecError> {
        if left.num_pis() > self.config.input_limit() {
            info!(
                "Network has {} inputs (limit is {}), equivalence is unknown.",
                left.num_pis(),
                self.config.input_limit()
            );
            return Ok(unknown_report());
        }
        match miter(left, right) {
            Some(miter) => self.check_miter(&miter),
            None => {
                info!(
                    "Cannot build miter: {} inputs/{} outputs vs. {} inputs/{} outputs.",
                    left.num_pis(),
                    left.num_pos(),
                    right.num_pis(),
                    right.num_pos()
                );
                Ok(CecReport::default())
            }
        }
    }

    /// Check that every output of `miter` is constant `false`.
    ///
    /// The miter is simulated in `RoundPlan::rounds` rounds, each with a fresh `PatternMap`,
    /// and the outputs of every round are folded into the verdict. Unless
    /// `CecConfig::early_exit` is set, all rounds are simulated even after a difference
    /// is found. The counterexample is always the first differing valuation (in simulation
    /// order).
    pub fn check_miter<N: BooleanNetwork>(&self, miter: &N) -> Result<CecReport, CecError> {
        if miter.num_pis() > self.config.input_limit() {
            info!(
                "Miter has {} inputs (limit is {}), equivalence is unknown.",
                miter.num_pis(),
                self.config.input_limit()
            );
            return Ok(unknown_report());
        }
        let plan = RoundPlan::with_config(miter.num_pis(), miter.size(), &self.config)?;
        debug!("Simulating miter of {} nodes with {}.", miter.size(), plan);

        let simulator = TruthTableSimulator::new(plan.split_var());
        let mut verdict = true;
        let mut counterexample = None;
        let mut simulated_rounds = 0;
        for round in 0..plan.rounds() {
            trace!("Round {} of {}.", round + 1, plan.rounds());
            let mut patterns: PatternMap<N::Node, TruthTable> = PatternMap::new();
            for input in 0..miter.num_pis() {
                patterns.insert(miter.pi_at(input), plan.input_pattern(input, round));
            }
            simulate_nodes(miter, &mut patterns, &simulator);

            let outputs: Vec<(&TruthTable, bool)> = (0..miter.num_pos())
                .map(|index| {
                    let output = miter.po_at(index);
                    (&patterns[&miter.get_node(output)], miter.is_complemented(output))
                })
                .collect();
            let was_equivalent = verdict;
            verdict = update_verdict(verdict, outputs.iter().copied());
            simulated_rounds += 1;

            // The verdict only turns false once, so this is the first failing round.
            if was_equivalent && !verdict {
                if let Some((output, row)) = first_failing_row(outputs.iter().copied()) {
                    let valuation = plan.valuation_of(round, row);
                    info!("Miter output {} is true in {}.", output, valuation);
                    counterexample = Some(valuation);
                }
                if self.config.early_exit() {
                    break;
                }
            }
        }

        let outcome = if verdict {
            CecOutcome::Equivalent
        } else {
            CecOutcome::NotEquivalent
        };
        debug!("Simulated {} rounds, outcome: {}.", simulated_rounds, outcome);
        Ok(CecReport {
            outcome,
            stats: CecStats {
                split_var: plan.split_var(),
                rounds: plan.rounds(),
                simulated_rounds,
            },
            counterexample,
        })
    }
}

/// **(internal)** A report of a network which is too large to be checked.
fn unknown_report() -> CecReport {
    CecReport {
        outcome: CecOutcome::Unknown,
        ..CecReport::default()
    }
}

/// Check the equivalence of two networks by exhaustive simulation, using the default
/// `CecConfig`.
///
/// Returns `Some(true)` or `Some(false)` if the check was performed, and `None` if the networks
/// have more than 40 inputs or cannot be combined into a miter. If `stats` are given, they are
/// overwritten with the split variable and the number of rounds of the check, or reset to
/// their defaults if no miter could be built. Networks over the input limit leave `stats`
/// unchanged.
pub fn simulation_cec<N: NetworkBuilder>(
    left: &N,
    right: &N,
    stats: Option<&mut CecStats>,
) -> Result<Option<bool>, CecError> {
    let report = SimulationCec::default().check(left, right)?;
    let result = report.outcome.as_option();
    if let Some(stats) = stats {
        if report.outcome != CecOutcome::Unknown {
            *stats = report.stats;
        }
    }
    Ok(result)
}

impl CecOutcome {
    /// The definite verdict of this outcome, if any.
    pub fn as_option(&self) -> Option<bool> {
        match self {
            CecOutcome::Equivalent => Some(true),
            CecOutcome::NotEquivalent => Some(false),
            CecOutcome::Unknown | CecOutcome::NotRun => None,
        }
    }
}

impl Display for CecOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let name = match self {
            CecOutcome::NotRun => "not run",
            CecOutcome::Unknown => "unknown",
            CecOutcome::Equivalent => "equivalent",
            CecOutcome::NotEquivalent => "not equivalent",
        };
        write!(f, "{}", name)
    }
}
