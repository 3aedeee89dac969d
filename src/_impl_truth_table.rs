use super::{SimulationValue, TruthTable};
use std::fmt::{Display, Error, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// **(internal)** Word patterns of the first six variables (variable `k` is true in rows
/// where bit `k` of the row index is set).
const VAR_WORDS: [u64; 6] = [
    0xaaaa_aaaa_aaaa_aaaa,
    0xcccc_cccc_cccc_cccc,
    0xf0f0_f0f0_f0f0_f0f0,
    0xff00_ff00_ff00_ff00,
    0xffff_0000_ffff_0000,
    0xffff_ffff_0000_0000,
];

impl TruthTable {
    /// Create a truth table of the constant `false` function over `num_vars` variables.
    ///
    /// *Panics:* `num_vars` must be less than 64 (a table that large would not fit into memory
    /// anyway).
    pub fn mk_false(num_vars: u32) -> TruthTable {
        if num_vars >= 64 {
            panic!("Truth tables support at most 63 variables, {} requested.", num_vars);
        }
        TruthTable {
            num_vars,
            words: vec![0; Self::num_words(num_vars)],
        }
    }

    /// Create a truth table of the constant `true` function over `num_vars` variables.
    pub fn mk_true(num_vars: u32) -> TruthTable {
        let mut table = Self::mk_false(num_vars);
        for word in table.words.iter_mut() {
            *word = u64::MAX;
        }
        table.mask_unused();
        table
    }

    /// Create a constant truth table with the given `value` in every row.
    pub fn mk_const(num_vars: u32, value: bool) -> TruthTable {
        if value {
            Self::mk_true(num_vars)
        } else {
            Self::mk_false(num_vars)
        }
    }

    /// Create the truth table of the projection to variable `var`, i.e. the table which is
    /// true exactly in the rows where the `var`-th bit of the row index is set.
    ///
    /// *Panics:* `var` must be less than `num_vars`.
    pub fn mk_var(num_vars: u32, var: u32) -> TruthTable {
        if var >= num_vars {
            panic!(
                "Cannot create variable {} in a table with {} variables.",
                var, num_vars
            );
        }
        let mut table = Self::mk_false(num_vars);
        if var < 6 {
            for word in table.words.iter_mut() {
                *word = VAR_WORDS[var as usize];
            }
            table.mask_unused();
        } else {
            // Variables above 5 alternate whole blocks of words.
            let block = 1usize << (var - 6);
            for (i, word) in table.words.iter_mut().enumerate() {
                if (i / block) % 2 == 1 {
                    *word = u64::MAX;
                }
            }
        }
        table
    }

    /// Number of variables of this table.
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Number of rows of this table, i.e. $2^{num\_vars}$.
    pub fn num_rows(&self) -> u64 {
        1u64 << self.num_vars
    }

    /// Value of the table in the given `row`.
    pub fn bit(&self, row: u64) -> bool {
        if row >= self.num_rows() {
            panic!("Row {} out of range for {} rows.", row, self.num_rows());
        }
        (self.words[(row / 64) as usize] >> (row % 64)) & 1 == 1
    }

    /// True if every row is `false`.
    pub fn is_false(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// True if every row is `true`.
    pub fn is_true(&self) -> bool {
        self.not().is_false()
    }

    /// Number of rows in which the table is `true`.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// The first (lowest) row in which the table is `true`, if any.
    pub fn first_one(&self) -> Option<u64> {
        self.words
            .iter()
            .position(|w| *w != 0)
            .map(|i| (i as u64) * 64 + u64::from(self.words[i].trailing_zeros()))
    }

    /// Negation of this table.
    pub fn not(&self) -> TruthTable {
        let mut result = TruthTable {
            num_vars: self.num_vars,
            words: self.words.iter().map(|w| !w).collect(),
        };
        result.mask_unused();
        result
    }

    pub fn and(&self, right: &TruthTable) -> TruthTable {
        self.apply(right, |l, r| l & r)
    }

    pub fn or(&self, right: &TruthTable) -> TruthTable {
        self.apply(right, |l, r| l | r)
    }

    pub fn xor(&self, right: &TruthTable) -> TruthTable {
        self.apply(right, |l, r| l ^ r)
    }

    /// **(internal)** Apply a word-wise operator to two tables of the same width.
    ///
    /// The operator must map two zero words to a zero word, otherwise unused bits would
    /// become set.
    fn apply<F>(&self, right: &TruthTable, op: F) -> TruthTable
    where
        F: Fn(u64, u64) -> u64,
    {
        if cfg!(feature = "shields_up") && self.num_vars != right.num_vars {
            panic!(
                "Table widths differ: {} and {} variables.",
                self.num_vars, right.num_vars
            );
        }
        TruthTable {
            num_vars: self.num_vars,
            words: self
                .words
                .iter()
                .zip(right.words.iter())
                .map(|(l, r)| op(*l, *r))
                .collect(),
        }
    }

    /// **(internal)** Number of 64-bit words needed for a table over `num_vars` variables.
    fn num_words(num_vars: u32) -> usize {
        if num_vars <= 6 {
            1
        } else {
            1usize << (num_vars - 6)
        }
    }

    /// **(internal)** Clear the bits above the last row (only tables below 6 variables have
    /// such bits).
    fn mask_unused(&mut self) {
        if self.num_vars < 6 {
            let mask = (1u64 << (1u32 << self.num_vars)) - 1;
            self.words[0] &= mask;
        }
    }
}

/// Tables are printed as binary strings, starting with the *last* row.
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for row in (0..self.num_rows()).rev() {
            write!(f, "{}", if self.bit(row) { 1 } else { 0 })?;
        }
        Ok(())
    }
}

impl SimulationValue for TruthTable {
    fn not(&self) -> Self {
        TruthTable::not(self)
    }

    fn and(&self, other: &Self) -> Self {
        TruthTable::and(self, other)
    }

    fn or(&self, other: &Self) -> Self {
        TruthTable::or(self, other)
    }

    fn xor(&self, other: &Self) -> Self {
        TruthTable::xor(self, other)
    }

    fn is_false(&self) -> bool {
        TruthTable::is_false(self)
    }
}

impl SimulationValue for bool {
    fn not(&self) -> Self {
        !*self
    }

    fn and(&self, other: &Self) -> Self {
        *self && *other
    }

    fn or(&self, other: &Self) -> Self {
        *self || *other
    }

    fn xor(&self, other: &Self) -> Self {
        *self ^ *other
    }

    fn is_false(&self) -> bool {
        !*self
    }
}

impl Not for &TruthTable {
    type Output = TruthTable;

    fn not(self) -> Self::Output {
        TruthTable::not(self)
    }
}

impl BitAnd for &TruthTable {
    type Output = TruthTable;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for &TruthTable {
    type Output = TruthTable;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for &TruthTable {
    type Output = TruthTable;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}
