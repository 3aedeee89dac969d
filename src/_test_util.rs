use super::*;
use crate::simulation::evaluate;

/// Install `env_logger` for the current test run (repeated calls are ignored).
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A `width`-bit ripple-carry adder with inputs $a_0, \ldots, a_{w-1}, b_0, \ldots, b_{w-1}$
/// and outputs $s_0, \ldots, s_{w-1}$ followed by the final carry.
///
/// With `majority` set, the carry is computed as $(a \land b) \lor (a \land c) \lor (b \land c)$,
/// otherwise as $(a \land b) \lor (c \land (a \oplus b))$. Both variants are equivalent, but
/// structurally different.
pub fn mk_ripple_carry_adder(width: usize, majority: bool) -> Aig {
    let mut aig = Aig::new();
    let a: Vec<AigSignal> = (0..width).map(|_| aig.create_pi()).collect();
    let b: Vec<AigSignal> = (0..width).map(|_| aig.create_pi()).collect();
    let mut carry = aig.get_constant(false);
    for i in 0..width {
        let half = aig.create_xor(a[i], b[i]);
        let sum = aig.create_xor(half, carry);
        let both = aig.create_and(a[i], b[i]);
        carry = if majority {
            let a_c = aig.create_and(a[i], carry);
            let b_c = aig.create_and(b[i], carry);
            let any = aig.create_or(a_c, b_c);
            aig.create_or(both, any)
        } else {
            let propagate = aig.create_and(carry, half);
            aig.create_or(both, propagate)
        };
        aig.create_po(sum);
    }
    aig.create_po(carry);
    aig
}

/// Find the first valuation (in `InputValuationIterator` order) in which the outputs of
/// `left` and `right` differ, by evaluating both networks one valuation at a time.
pub fn brute_force_difference<N: BooleanNetwork>(left: &N, right: &N) -> Option<InputValuation> {
    InputValuationIterator::new(left.num_pis())
        .find(|valuation| evaluate(left, valuation) != evaluate(right, valuation))
}
