use super::CecConfig;

/// Networks with more inputs than this are not simulated.
pub const DEFAULT_INPUT_LIMIT: usize = 40;

/// Total number of simulation bits shared by all nodes of the miter.
pub const DEFAULT_MEMORY_BUDGET: u64 = 1 << 29;

/// Per-node overhead subtracted from the per-node share of the memory budget.
pub const DEFAULT_NODE_OVERHEAD: u64 = 32;

impl CecConfig {
    /// The default configuration: 40 inputs, $2^{29}$ bits of memory, per-node overhead of 32
    /// and no early exit.
    pub fn new() -> CecConfig {
        CecConfig {
            input_limit: DEFAULT_INPUT_LIMIT,
            memory_budget: DEFAULT_MEMORY_BUDGET,
            node_overhead: DEFAULT_NODE_OVERHEAD,
            split_limit: None,
            early_exit: false,
        }
    }

    /// Networks with more than `limit` primary inputs yield `CecOutcome::Unknown`.
    pub fn with_input_limit(mut self, limit: usize) -> CecConfig {
        self.input_limit = limit;
        self
    }

    /// Total simulation memory (in bits) available to all nodes of the miter.
    pub fn with_memory_budget(mut self, bits: u64) -> CecConfig {
        self.memory_budget = bits;
        self
    }

    pub fn with_node_overhead(mut self, overhead: u64) -> CecConfig {
        self.node_overhead = overhead;
        self
    }

    /// Never simulate more than `limit` inputs in parallel, even if the memory budget allows it.
    pub fn with_split_limit(mut self, limit: u32) -> CecConfig {
        self.split_limit = Some(limit);
        self
    }

    /// Stop simulating once a round finds a counterexample. The verdict is the same, but
    /// `CecStats::simulated_rounds` can then be smaller than `CecStats::rounds`.
    pub fn with_early_exit(mut self, early_exit: bool) -> CecConfig {
        self.early_exit = early_exit;
        self
    }

    pub fn input_limit(&self) -> usize {
        self.input_limit
    }

    pub fn memory_budget(&self) -> u64 {
        self.memory_budget
    }

    pub fn node_overhead(&self) -> u64 {
        self.node_overhead
    }

    pub fn split_limit(&self) -> Option<u32> {
        self.split_limit
    }

    pub fn early_exit(&self) -> bool {
        self.early_exit
    }
}

impl Default for CecConfig {
    fn default() -> Self {
        Self::new()
    }
}
