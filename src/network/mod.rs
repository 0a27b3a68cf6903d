//! Runtime network graph.
//!
//! A [`Network`] is instantiated from a [`Genome`] and owns every node and
//! connection in the resulting graph. Nodes and connections live in arenas
//! and reference each other by index, so the genome's object graph maps onto
//! flat storage with no shared ownership.
//!
//! Disabled genes are never instantiated; they are retained verbatim ("junk
//! genes") so that exporting back to a genome is lossless.

mod backward;
mod forward;
mod node;

pub use backward::TrainingExample;
pub use node::{Connection, Node};

use crate::checkpoint::NetworkExport;
use crate::config::NetworkConfig;
use crate::error::NetworkError;
use crate::genome::{ConnectionGene, Genome, NodeGene, NodeType};
use crate::squash::Squash;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// A feed-forward computation graph built from a genome.
///
/// The graph must be acyclic; forward and backward passes rely on every
/// node's fan-in/fan-out counts matching the connections instantiated at
/// construction time.
#[derive(Clone, Debug)]
pub struct Network {
    config: NetworkConfig,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    /// Gene id → node arena index.
    node_index: HashMap<u64, usize>,
    inputs: Vec<usize>,
    hidden: Vec<usize>,
    outputs: Vec<usize>,
    junk_nodes: Vec<NodeGene>,
    junk_connections: Vec<ConnectionGene>,
}

impl Network {
    /// Build a network from a default fully-connected genome.
    ///
    /// The genome has `config.input` input nodes and `config.output` output
    /// nodes, generated with the config's seed (or from entropy when no
    /// seed is set).
    pub fn new(config: NetworkConfig) -> Result<Self, NetworkError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let genome = Genome::fully_connected(config.input, config.output, &mut rng);
        Self::from_genome(&genome, config)
    }

    /// Instantiate the runtime graph described by `genome`.
    ///
    /// Construction is atomic: on any error no network is produced.
    /// Disabled genes go to the junk sets untouched. An enabled connection
    /// whose endpoint was never instantiated (absent or disabled) fails with
    /// [`NetworkError::DanglingReference`]; an unknown squash name fails
    /// with [`NetworkError::UnknownSquash`].
    pub fn from_genome(genome: &Genome, config: NetworkConfig) -> Result<Self, NetworkError> {
        // Only the hyperparameters matter here; node counts come from the genome.
        config.validate_rates()?;

        let mut net = Self {
            config,
            nodes: Vec::new(),
            connections: Vec::new(),
            node_index: HashMap::new(),
            inputs: Vec::new(),
            hidden: Vec::new(),
            outputs: Vec::new(),
            junk_nodes: Vec::new(),
            junk_connections: Vec::new(),
        };

        for gene in &genome.nodes {
            if !gene.enabled {
                net.junk_nodes.push(gene.clone());
                continue;
            }
            let squash = Squash::by_name(&gene.squash)
                .ok_or_else(|| NetworkError::UnknownSquash(gene.squash.clone()))?;
            let idx = net.nodes.len();
            net.nodes.push(Node::new(gene.id, gene.node_type, gene.bias, squash));
            net.node_index.insert(gene.id, idx);
            match gene.node_type {
                NodeType::Input => net.inputs.push(idx),
                NodeType::Hidden => net.hidden.push(idx),
                NodeType::Output => net.outputs.push(idx),
            }
        }

        for gene in &genome.connections {
            if !gene.enabled {
                net.junk_connections.push(gene.clone());
                continue;
            }
            let from = net.resolve(gene, gene.from)?;
            let to = net.resolve(gene, gene.to)?;
            let idx = net.connections.len();
            net.connections.push(Connection::new(
                from,
                to,
                gene.from,
                gene.to,
                gene.weight,
                gene.innovation,
            ));
            net.nodes[from].outgoing.push(idx);
            net.nodes[to].incoming.push(idx);
        }

        log::debug!(
            "instantiated network: {} nodes ({} in / {} hidden / {} out), {} connections, {} junk genes",
            net.nodes.len(),
            net.inputs.len(),
            net.hidden.len(),
            net.outputs.len(),
            net.connections.len(),
            net.junk_nodes.len() + net.junk_connections.len(),
        );

        Ok(net)
    }

    fn resolve(&self, gene: &ConnectionGene, id: u64) -> Result<usize, NetworkError> {
        self.node_index
            .get(&id)
            .copied()
            .ok_or(NetworkError::DanglingReference {
                from: gene.from,
                to: gene.to,
                missing: id,
            })
    }

    /// Export the current graph back to a genome.
    ///
    /// Enabled genes come first, in creation order, carrying the *current*
    /// biases and weights; junk genes are appended verbatim. Rebuilding a
    /// network from the result reproduces identical connectivity and
    /// behavior.
    pub fn to_genome(&self) -> Genome {
        let mut genome = Genome::new();

        for node in &self.nodes {
            genome.add_node(node);
        }
        genome.nodes.extend(self.junk_nodes.iter().cloned());

        for connection in &self.connections {
            genome.add_connection(connection);
        }
        genome.connections.extend(self.junk_connections.iter().cloned());

        genome
    }

    /// Export the network as the `{config, genome}` wire record.
    pub fn export(&self) -> NetworkExport {
        NetworkExport {
            config: self.config.clone(),
            genome: self.to_genome(),
        }
    }

    /// Rebuild a network from an exported record.
    pub fn from_export(export: &NetworkExport) -> Result<Self, NetworkError> {
        Self::from_genome(&export.genome, export.config.clone())
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Look up a live node by its gene id.
    pub fn node(&self, id: u64) -> Option<&Node> {
        self.node_index.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// Look up a live connection by its innovation number.
    pub fn connection(&self, innovation: u64) -> Option<&Connection> {
        self.connections.iter().find(|c| c.innovation == innovation)
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Disabled node genes retained for lossless export.
    pub fn junk_nodes(&self) -> &[NodeGene] {
        &self.junk_nodes
    }

    /// Disabled connection genes retained for lossless export.
    pub fn junk_connections(&self) -> &[ConnectionGene] {
        &self.junk_connections
    }

    pub(crate) fn input_indices(&self) -> &[usize] {
        &self.inputs
    }

    pub(crate) fn output_indices(&self) -> &[usize] {
        &self.outputs
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn connection_at(&self, idx: usize) -> &Connection {
        &self.connections[idx]
    }

    pub(crate) fn connection_mut(&mut self, idx: usize) -> &mut Connection {
        &mut self.connections[idx]
    }

    pub(crate) fn adjust_all(&mut self) {
        // Connections first, then nodes, matching the training contract.
        for connection in &mut self.connections {
            connection.adjust();
        }
        for node in &mut self.nodes {
            node.adjust();
        }
    }
}
