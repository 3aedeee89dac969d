use super::{InputValuation, InputValuationIterator};
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;

impl InputValuation {
    /// Create a new valuation from a vector of input values.
    pub fn new(values: Vec<bool>) -> InputValuation {
        InputValuation(values)
    }

    /// Create a valuation with all inputs set to false.
    pub fn all_false(num_inputs: usize) -> InputValuation {
        InputValuation(vec![false; num_inputs])
    }

    /// Create a valuation with all inputs set to true.
    pub fn all_true(num_inputs: usize) -> InputValuation {
        InputValuation(vec![true; num_inputs])
    }

    /// Get the value of a specific input in this valuation.
    pub fn value(&self, input: usize) -> bool {
        self.0[input]
    }

    /// Flip the value of a given input.
    pub fn flip_value(&mut self, input: usize) {
        self.0[input] = !self.0[input];
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    pub fn num_inputs(&self) -> usize {
        self.0.len()
    }

    /// **(internal)** "Increment" this valuation if possible, interpreting it as a bit-vector
    /// with the least significant bit first.
    fn next(&self) -> Option<InputValuation> {
        let mut next = self.0.clone();
        for bit in next.iter_mut() {
            *bit = !*bit;
            if *bit {
                // No carry, we are done.
                return Some(InputValuation(next));
            }
        }
        None
    }
}

impl Display for InputValuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", if *value { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for InputValuation {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl InputValuationIterator {
    /// Create a new iterator over all valuations of `num_inputs` inputs, starting with
    /// the all-false valuation.
    pub fn new(num_inputs: usize) -> InputValuationIterator {
        InputValuationIterator(Some(InputValuation::all_false(num_inputs)))
    }
}

impl Iterator for InputValuationIterator {
    type Item = InputValuation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.0.take()?;
        self.0 = current.next();
        Some(current)
    }
}
