#[derive(Debug, Clone)]
pub struct Config {
    pub node_capacity: usize,
    /// Nodes at this level never split. The root is level 0.
    pub max_depth: usize,
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 16,
            max_depth: 8,
            pool_size: 64,
        }
    }
}
