use super::TruthTable;

/// Fold the miter outputs of one simulation round into the running `verdict`.
///
/// Each output is given as its simulated truth table and a flag indicating whether the output
/// signal is complemented (in which case the table is negated first). The round agrees if
/// every (possibly negated) output table is constant `false`. The result is
/// `verdict && agrees`, so once the verdict is `false`, it stays `false`.
pub fn update_verdict<'a, I>(verdict: bool, outputs: I) -> bool
where
    I: IntoIterator<Item = (&'a TruthTable, bool)>,
{
    // Every output is inspected, even if the verdict is already false.
    outputs
        .into_iter()
        .fold(verdict, |verdict, (table, complemented)| {
            let agrees = if complemented {
                table.not().is_false()
            } else {
                table.is_false()
            };
            verdict & agrees
        })
}

/// Find the first output (in output order) which is not constant `false`, together with
/// the lowest row in which it is `true`. Complemented outputs are negated first.
///
/// Returns `None` if all outputs agree.
pub fn first_failing_row<'a, I>(outputs: I) -> Option<(usize, u64)>
where
    I: IntoIterator<Item = (&'a TruthTable, bool)>,
{
    outputs
        .into_iter()
        .enumerate()
        .find_map(|(index, (table, complemented))| {
            let row = if complemented {
                table.not().first_one()
            } else {
                table.first_one()
            };
            row.map(|row| (index, row))
        })
}
