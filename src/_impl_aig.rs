use super::{Aig, AigNode, AigNodeId, AigSignal, BooleanNetwork, NetworkBuilder, SimulationValue};
use fxhash::FxHashMap;

impl Aig {
    /// Create a new network which only contains the constant node.
    pub fn new() -> Aig {
        Aig {
            nodes: vec![AigNode::Constant],
            inputs: Vec::new(),
            outputs: Vec::new(),
            strash: FxHashMap::default(),
        }
    }

    /// Number of AND gates in this network.
    pub fn num_gates(&self) -> usize {
        self.nodes.len() - self.inputs.len() - 1
    }

    /// True if `node` is an AND gate.
    pub fn is_and(&self, node: AigNodeId) -> bool {
        matches!(self.nodes[node.to_index()], AigNode::And(_, _))
    }

    /// The primary input index of `node`, or `None` if `node` is not an input.
    pub fn pi_index(&self, node: AigNodeId) -> Option<usize> {
        match self.nodes[node.to_index()] {
            AigNode::Input(index) => Some(index as usize),
            _ => None,
        }
    }

    /// All output signals of this network.
    pub fn outputs(&self) -> &[AigSignal] {
        &self.outputs
    }

    /// **(internal)** Push a new node and return its id.
    fn push_node(&mut self, node: AigNode) -> AigNodeId {
        let id = AigNodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl Default for Aig {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanNetwork for Aig {
    type Node = AigNodeId;
    type Signal = AigSignal;

    fn num_pis(&self) -> usize {
        self.inputs.len()
    }

    fn num_pos(&self) -> usize {
        self.outputs.len()
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn node_at(&self, position: usize) -> AigNodeId {
        AigNodeId::from_index(position)
    }

    fn pi_at(&self, index: usize) -> AigNodeId {
        self.inputs[index]
    }

    fn po_at(&self, index: usize) -> AigSignal {
        self.outputs[index]
    }

    fn get_node(&self, signal: AigSignal) -> AigNodeId {
        signal.node()
    }

    fn is_complemented(&self, signal: AigSignal) -> bool {
        signal.is_complemented()
    }

    fn is_constant(&self, node: AigNodeId) -> bool {
        node == AigNodeId::constant()
    }

    fn constant_value(&self, _node: AigNodeId) -> bool {
        false
    }

    fn is_pi(&self, node: AigNodeId) -> bool {
        matches!(self.nodes[node.to_index()], AigNode::Input(_))
    }

    fn fanins(&self, node: AigNodeId) -> Vec<AigSignal> {
        match self.nodes[node.to_index()] {
            AigNode::And(a, b) => vec![a, b],
            _ => Vec::new(),
        }
    }

    fn compute<V: SimulationValue>(&self, node: AigNodeId, fanin_values: &[V]) -> V {
        match self.nodes[node.to_index()] {
            AigNode::And(_, _) => fanin_values[0].and(&fanin_values[1]),
            other => panic!("Node {} ({:?}) is not a gate.", node, other),
        }
    }
}

impl NetworkBuilder for Aig {
    fn empty() -> Self {
        Aig::new()
    }

    fn get_constant(&self, value: bool) -> AigSignal {
        AigSignal::zero().complement_if(value)
    }

    fn create_pi(&mut self) -> AigSignal {
        let index = self.inputs.len() as u32;
        let id = self.push_node(AigNode::Input(index));
        self.inputs.push(id);
        AigSignal::new(id, false)
    }

    fn create_po(&mut self, signal: AigSignal) {
        self.outputs.push(signal);
    }

    fn create_not(&self, signal: AigSignal) -> AigSignal {
        !signal
    }

    fn create_and(&mut self, a: AigSignal, b: AigSignal) -> AigSignal {
        // Normalize operand order, so that structural hashing sees `a & b` and `b & a` as equal.
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        if a == AigSignal::zero() || a == !b {
            return AigSignal::zero();
        }
        if a == AigSignal::one() || a == b {
            return b;
        }
        if let Some(id) = self.strash.get(&(a, b)) {
            return AigSignal::new(*id, false);
        }
        let id = self.push_node(AigNode::And(a, b));
        self.strash.insert((a, b), id);
        AigSignal::new(id, false)
    }

    fn clone_node(&mut self, source: &Self, node: AigNodeId, fanins: &[AigSignal]) -> AigSignal {
        match source.nodes[node.to_index()] {
            AigNode::And(_, _) => self.create_and(fanins[0], fanins[1]),
            other => panic!("Node {} ({:?}) is not a gate.", node, other),
        }
    }
}
