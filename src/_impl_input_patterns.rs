use super::{InputValuation, RoundPlan, TruthTable};

/// The truth table assigned to the primary input with (0-based) index `input` in the given
/// `round`, when `split_var` inputs are simulated in parallel.
///
/// The first `split_var` inputs are the projections to the table variables, so they are the
/// same in every round. Every other input is constant within the round: input
/// `split_var + k` is constant `false` if bit `k` of `round` is set, and constant `true`
/// otherwise.
pub fn input_pattern(input: usize, round: u64, split_var: u32) -> TruthTable {
    let split = split_var as usize;
    if input < split {
        TruthTable::mk_var(split_var, input as u32)
    } else {
        let bit = round.checked_shr((input - split) as u32).unwrap_or(0) & 1 == 1;
        TruthTable::mk_const(split_var, !bit)
    }
}

impl RoundPlan {
    /// The truth table of the primary input `input` in `round` (see `input_pattern`).
    pub fn input_pattern(&self, input: usize, round: u64) -> TruthTable {
        input_pattern(input, round, self.split_var)
    }

    /// The input valuation simulated in the given `row` of the given `round`. Inverse of the
    /// assignment made by `input_pattern`.
    pub fn valuation_of(&self, round: u64, row: u64) -> InputValuation {
        let split = self.split_var as usize;
        let values = (0..self.num_pis)
            .map(|input| {
                if input < split {
                    (row >> input) & 1 == 1
                } else {
                    (round >> (input - split)) & 1 == 0
                }
            })
            .collect();
        InputValuation::new(values)
    }
}
