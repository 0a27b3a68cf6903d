//! Genome representation: durable, serializable gene lists.
//!
//! A genome is the evolvable description of a network: an ordered sequence
//! of node genes and connection genes. It is pure data. Referential
//! integrity (connection endpoints existing) is not checked here; it is
//! enforced when a [`Network`](crate::Network) is instantiated from the
//! genome.
//!
//! Disabled genes are retained rather than deleted so that a genome can
//! round-trip genes that evolutionary operators have turned off.

use crate::network::{Connection, Node};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Role of a node within the network graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Input,
    Hidden,
    Output,
}

/// A single node gene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeGene {
    /// Unique id within the genome.
    pub id: u64,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub bias: f64,
    /// Squash function name, resolved against the squash table at
    /// network construction.
    pub squash: String,
    pub enabled: bool,
}

/// A single connection gene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGene {
    /// Source node id.
    pub from: u64,
    /// Destination node id.
    pub to: u64,
    pub weight: f64,
    /// Globally unique lineage marker, preserved unchanged through any
    /// genome/network round trip.
    pub innovation: u64,
    pub enabled: bool,
}

/// Ordered, append-only collection of node and connection genes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub nodes: Vec<NodeGene>,
    pub connections: Vec<ConnectionGene>,
}

impl Genome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node gene from its fields.
    pub fn add_node_gene(
        &mut self,
        id: u64,
        node_type: NodeType,
        bias: f64,
        squash: &str,
        enabled: bool,
    ) {
        self.nodes.push(NodeGene {
            id,
            node_type,
            bias,
            squash: squash.to_string(),
            enabled,
        });
    }

    /// Append a connection gene from its fields.
    pub fn add_connection_gene(
        &mut self,
        from: u64,
        to: u64,
        weight: f64,
        innovation: u64,
        enabled: bool,
    ) {
        self.connections.push(ConnectionGene {
            from,
            to,
            weight,
            innovation,
            enabled,
        });
    }

    /// Append an enabled node gene copied from a live runtime node,
    /// capturing its current bias.
    pub fn add_node(&mut self, node: &Node) {
        self.add_node_gene(node.id(), node.node_type(), node.bias(), node.squash().name(), true);
    }

    /// Append an enabled connection gene copied from a live runtime
    /// connection, capturing its current weight.
    pub fn add_connection(&mut self, connection: &Connection) {
        self.add_connection_gene(
            connection.from_id(),
            connection.to_id(),
            connection.weight(),
            connection.innovation(),
            true,
        );
    }

    /// Generate a default genome: `input` input nodes and `output` output
    /// nodes, fully connected input→output.
    ///
    /// Biases and weights are drawn uniformly from `(-1, 1)`; innovation
    /// numbers are assigned sequentially from 0, one per connection, in
    /// input-major order. The generator takes an explicit RNG so that
    /// seeded construction is deterministic.
    pub fn fully_connected<R: Rng>(input: usize, output: usize, rng: &mut R) -> Self {
        let mut genome = Genome::new();

        for id in 0..input as u64 {
            genome.add_node_gene(id, NodeType::Input, rng.gen_range(-1.0..1.0), "sigmoid", true);
        }
        for id in input as u64..(input + output) as u64 {
            genome.add_node_gene(id, NodeType::Output, rng.gen_range(-1.0..1.0), "sigmoid", true);
        }

        let mut innovation = 0;
        for from in 0..input as u64 {
            for to in input as u64..(input + output) as u64 {
                genome.add_connection_gene(from, to, rng.gen_range(-1.0..1.0), innovation, true);
                innovation += 1;
            }
        }

        genome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_append_preserves_order() {
        let mut genome = Genome::new();
        genome.add_node_gene(3, NodeType::Input, 0.0, "sigmoid", true);
        genome.add_node_gene(1, NodeType::Output, 0.5, "tanh", false);

        assert_eq!(genome.nodes[0].id, 3);
        assert_eq!(genome.nodes[1].id, 1);
        assert!(!genome.nodes[1].enabled);
    }

    #[test]
    fn test_fully_connected_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let genome = Genome::fully_connected(3, 2, &mut rng);

        assert_eq!(genome.nodes.len(), 5);
        assert_eq!(genome.connections.len(), 6);

        // ids 0..3 are inputs, 3..5 are outputs
        assert!(genome.nodes[..3].iter().all(|n| n.node_type == NodeType::Input));
        assert!(genome.nodes[3..].iter().all(|n| n.node_type == NodeType::Output));

        // every input connects to every output
        for from in 0..3u64 {
            for to in 3..5u64 {
                assert!(genome
                    .connections
                    .iter()
                    .any(|c| c.from == from && c.to == to && c.enabled));
            }
        }

        // innovation numbers ascend from 0
        let innovations: Vec<u64> = genome.connections.iter().map(|c| c.innovation).collect();
        assert_eq!(innovations, (0..6).collect::<Vec<u64>>());
    }

    #[test]
    fn test_fully_connected_seeded_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(Genome::fully_connected(4, 3, &mut a), Genome::fully_connected(4, 3, &mut b));
    }

    #[test]
    fn test_gene_wire_format() {
        let mut genome = Genome::new();
        genome.add_node_gene(0, NodeType::Hidden, 0.25, "relu", true);
        genome.add_connection_gene(0, 1, -0.5, 9, false);

        let json = serde_json::to_value(&genome).unwrap();
        assert_eq!(json["nodes"][0]["type"], "hidden");
        assert_eq!(json["nodes"][0]["squash"], "relu");
        assert_eq!(json["connections"][0]["innovation"], 9);
        assert_eq!(json["connections"][0]["enabled"], false);
    }

    #[test]
    fn test_genome_json_roundtrip() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let genome = Genome::fully_connected(2, 2, &mut rng);
        let json = serde_json::to_string(&genome).unwrap();
        let back: Genome = serde_json::from_str(&json).unwrap();
        assert_eq!(genome, back);
    }
}
