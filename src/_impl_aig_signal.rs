use super::{AigNodeId, AigSignal};
use std::fmt::{Display, Error, Formatter};
use std::ops::Not;

impl AigNodeId {
    /// The id of the constant node.
    pub fn constant() -> AigNodeId {
        AigNodeId(0)
    }

    /// Cast this id to standard usize index.
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    /// Create an id from an usize index.
    pub fn from_index(index: usize) -> AigNodeId {
        AigNodeId(index as u32)
    }
}

impl Display for AigNodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "n{}", self.0)
    }
}

impl AigSignal {
    /// Make a new signal pointing to `node`, complemented if `complemented` is set.
    pub fn new(node: AigNodeId, complemented: bool) -> AigSignal {
        AigSignal((node.0 << 1) | u32::from(complemented))
    }

    /// The signal of constant `false`.
    pub fn zero() -> AigSignal {
        AigSignal(0)
    }

    /// The signal of constant `true`.
    pub fn one() -> AigSignal {
        AigSignal(1)
    }

    pub fn node(self) -> AigNodeId {
        AigNodeId(self.0 >> 1)
    }

    pub fn is_complemented(self) -> bool {
        self.0 & 1 == 1
    }

    pub fn is_constant(self) -> bool {
        self.0 < 2
    }

    /// Negate the signal if `value` is set.
    pub fn complement_if(self, value: bool) -> AigSignal {
        AigSignal(self.0 ^ u32::from(value))
    }

    /// The AIGER literal of this signal.
    pub fn to_literal(self) -> u32 {
        self.0
    }
}

impl Not for AigSignal {
    type Output = AigSignal;

    fn not(self) -> Self::Output {
        AigSignal(self.0 ^ 1)
    }
}

/// Complemented signals are prefixed with `!`.
impl Display for AigSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.is_complemented() {
            write!(f, "!{}", self.node())
        } else {
            write!(f, "{}", self.node())
        }
    }
}
