//! Forward activation pass.
//!
//! Semantics follow the eager fan-in protocol: a node fires the instant its
//! last predecessor contribution arrives, immediately feeding its successors.
//! The cascade is depth-first and synchronous; ordering among siblings at the
//! same depth is unspecified. Implemented with an explicit work stack rather
//! than recursion so deep graphs cannot overflow the call stack.

use super::Network;
use crate::error::NetworkError;
use crate::genome::NodeType;

impl Network {
    /// Run a forward pass, feeding `pattern` to the input nodes.
    ///
    /// `pattern` must have exactly one value per input node. Input nodes
    /// pass their value through unchanged (no bias, no squash); every other
    /// node accumulates weighted contributions, adds its bias, and squashes.
    /// Returns the output-node values in insertion order.
    pub fn activate(&mut self, pattern: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if pattern.len() != self.input_indices().len() {
            return Err(NetworkError::InvalidPattern {
                expected: self.input_indices().len(),
                found: pattern.len(),
            });
        }

        let mut stack: Vec<(usize, f64)> = pattern
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &value)| (self.input_indices()[i], value))
            .collect();
        self.cascade(&mut stack);

        Ok(self.output())
    }

    /// Current output-node values, in insertion order.
    pub fn output(&self) -> Vec<f64> {
        self.output_indices()
            .iter()
            .map(|&idx| self.node_at(idx).output)
            .collect()
    }

    fn cascade(&mut self, stack: &mut Vec<(usize, f64)>) {
        while let Some((idx, value)) = stack.pop() {
            let node = self.node_mut(idx);

            // The first contribution of a pass replaces any stale net input.
            if node.activations == 0 {
                node.net_input = value;
            } else {
                node.net_input += value;
            }
            node.activations += 1;

            // Wait until every incoming connection has contributed.
            if node.activations < node.incoming.len() {
                continue;
            }
            node.activations = 0;

            if node.node_type == NodeType::Input {
                node.output = node.net_input;
            } else {
                node.net_input += node.bias;
                node.output = node.squash.forward(node.net_input);
            }

            let output = node.output;
            for i in (0..self.node_at(idx).outgoing.len()).rev() {
                let ci = self.node_at(idx).outgoing[i];
                let conn = self.connection_at(ci);
                stack.push((conn.to, output * conn.weight));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::NetworkConfig;
    use crate::error::NetworkError;
    use crate::genome::{Genome, NodeType};
    use crate::network::Network;

    fn two_in_one_out() -> Network {
        let mut genome = Genome::new();
        genome.add_node_gene(0, NodeType::Input, 0.0, "identity", true);
        genome.add_node_gene(1, NodeType::Input, 0.0, "identity", true);
        genome.add_node_gene(2, NodeType::Output, 0.0, "identity", true);
        genome.add_connection_gene(0, 2, 0.5, 0, true);
        genome.add_connection_gene(1, 2, -0.5, 1, true);
        Network::from_genome(&genome, NetworkConfig::default()).unwrap()
    }

    #[test]
    fn test_weighted_sum() {
        let mut net = two_in_one_out();
        let out = net.activate(&[1.0, 1.0]).unwrap();
        assert_eq!(out, vec![0.0]);

        let out = net.activate(&[2.0, 0.0]).unwrap();
        assert_eq!(out, vec![1.0]);
    }

    #[test]
    fn test_invalid_pattern_length() {
        let mut net = two_in_one_out();
        let err = net.activate(&[1.0]).unwrap_err();
        assert_eq!(err, NetworkError::InvalidPattern { expected: 2, found: 1 });
    }

    #[test]
    fn test_input_passthrough() {
        let mut net = two_in_one_out();
        net.activate(&[3.5, -2.0]).unwrap();

        let input = net.node(0).unwrap();
        assert_eq!(input.output(), 3.5);
        assert_eq!(input.output(), input.net_input());
    }

    #[test]
    fn test_bias_added_before_squash() {
        let mut genome = Genome::new();
        genome.add_node_gene(0, NodeType::Input, 0.0, "identity", true);
        genome.add_node_gene(1, NodeType::Output, 0.25, "identity", true);
        genome.add_connection_gene(0, 1, 1.0, 0, true);
        let mut net = Network::from_genome(&genome, NetworkConfig::default()).unwrap();

        let out = net.activate(&[1.0]).unwrap();
        assert_eq!(out, vec![1.25]);
    }

    #[test]
    fn test_sigmoid_output() {
        let mut genome = Genome::new();
        genome.add_node_gene(0, NodeType::Input, 0.0, "identity", true);
        genome.add_node_gene(1, NodeType::Output, 0.0, "sigmoid", true);
        genome.add_connection_gene(0, 1, 1.0, 0, true);
        let mut net = Network::from_genome(&genome, NetworkConfig::default()).unwrap();

        let out = net.activate(&[0.0]).unwrap();
        assert!((out[0] - 0.5).abs() < 1e-12);
    }

    /// Diamond topology: both hidden nodes must fire before the output
    /// node fires once, exercising fan-in synchronization.
    #[test]
    fn test_diamond_fan_in() {
        let mut genome = Genome::new();
        genome.add_node_gene(0, NodeType::Input, 0.0, "identity", true);
        genome.add_node_gene(1, NodeType::Hidden, 0.0, "identity", true);
        genome.add_node_gene(2, NodeType::Hidden, 0.0, "identity", true);
        genome.add_node_gene(3, NodeType::Output, 0.0, "identity", true);
        genome.add_connection_gene(0, 1, 2.0, 0, true);
        genome.add_connection_gene(0, 2, 3.0, 1, true);
        genome.add_connection_gene(1, 3, 1.0, 2, true);
        genome.add_connection_gene(2, 3, 1.0, 3, true);
        let mut net = Network::from_genome(&genome, NetworkConfig::default()).unwrap();

        // 1*2*1 + 1*3*1
        let out = net.activate(&[1.0]).unwrap();
        assert_eq!(out, vec![5.0]);

        // counters must have reset: an identical second pass agrees
        let again = net.activate(&[1.0]).unwrap();
        assert_eq!(again, vec![5.0]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut genome = Genome::new();
        genome.add_node_gene(0, NodeType::Input, 0.0, "identity", true);
        let depth = 50_000u64;
        for id in 1..depth {
            genome.add_node_gene(id, NodeType::Hidden, 0.0, "identity", true);
            genome.add_connection_gene(id - 1, id, 1.0, id - 1, true);
        }
        genome.add_node_gene(depth, NodeType::Output, 0.0, "identity", true);
        genome.add_connection_gene(depth - 1, depth, 1.0, depth - 1, true);

        let mut net = Network::from_genome(&genome, NetworkConfig::default()).unwrap();
        let out = net.activate(&[1.0]).unwrap();
        assert_eq!(out, vec![1.0]);
    }
}
