use super::{BooleanNetwork, NetworkBuilder};
use fxhash::FxHashMap;

/// Combine two networks into a *miter*: a network with the shared primary inputs of both
/// networks and one output `left_i ^ right_i` for every pair of corresponding outputs.
///
/// The two networks are equivalent iff every output of the miter is constant `false`.
/// Returns `None` if the networks have a different number of inputs or outputs.
pub fn miter<N: NetworkBuilder>(left: &N, right: &N) -> Option<N> {
    if left.num_pis() != right.num_pis() || left.num_pos() != right.num_pos() {
        return None;
    }
    let mut result = N::empty();
    let inputs: Vec<N::Signal> = (0..left.num_pis()).map(|_| result.create_pi()).collect();
    let left_outputs = copy_network(&mut result, left, &inputs);
    let right_outputs = copy_network(&mut result, right, &inputs);
    for (l, r) in left_outputs.into_iter().zip(right_outputs) {
        let difference = result.create_xor(l, r);
        result.create_po(difference);
    }
    Some(result)
}

/// **(internal)** Copy all gates of `source` into `target`, connecting the primary inputs of
/// `source` to `inputs`. Returns the signals of `target` which correspond to the outputs of
/// `source`.
fn copy_network<N: NetworkBuilder>(
    target: &mut N,
    source: &N,
    inputs: &[N::Signal],
) -> Vec<N::Signal> {
    let mut mapping: FxHashMap<N::Node, N::Signal> = FxHashMap::default();
    for (index, input) in inputs.iter().enumerate() {
        mapping.insert(source.pi_at(index), *input);
    }
    // Since nodes are visited in topological order, every fanin is already mapped.
    for position in 0..source.size() {
        let node = source.node_at(position);
        if source.is_pi(node) {
            continue;
        }
        let copy = if source.is_constant(node) {
            target.get_constant(source.constant_value(node))
        } else {
            let fanins: Vec<N::Signal> = source
                .fanins(node)
                .into_iter()
                .map(|fanin| translate(target, source, &mapping, fanin))
                .collect();
            target.clone_node(source, node, &fanins)
        };
        mapping.insert(node, copy);
    }
    (0..source.num_pos())
        .map(|index| translate(target, source, &mapping, source.po_at(index)))
        .collect()
}

/// **(internal)** Find the `target` signal of a `source` signal (including its complementation).
fn translate<N: NetworkBuilder>(
    target: &N,
    source: &N,
    mapping: &FxHashMap<N::Node, N::Signal>,
    signal: N::Signal,
) -> N::Signal {
    let copy = mapping[&source.get_node(signal)];
    if source.is_complemented(signal) {
        target.create_not(copy)
    } else {
        copy
    }
}
