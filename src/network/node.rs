//! Runtime node and connection records.
//!
//! Both live in arenas owned by the [`Network`](super::Network) and address
//! each other through stable indices: a connection stores the indices of its
//! endpoint nodes, a node stores the indices of its incoming and outgoing
//! connections. The network is the sole owner of both arenas.

use crate::genome::NodeType;
use crate::squash::Squash;

/// A runtime node: one unit of the instantiated computation graph.
///
/// The activation and propagation counters implement fan-in/fan-out
/// synchronization: a node fires forward once it has received a contribution
/// from every incoming connection, and propagates backward once it has
/// accumulated an error signal from every outgoing connection.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: u64,
    pub(crate) node_type: NodeType,
    pub(crate) bias: f64,
    pub(crate) squash: Squash,

    pub(crate) net_input: f64,
    pub(crate) output: f64,

    /// Contributions received in the current forward pass.
    pub(crate) activations: usize,
    /// Error signals received in the current backward pass.
    pub(crate) propagations: usize,
    pub(crate) signal_error_sum: f64,

    /// Pending bias adjustment, applied by `adjust`.
    pub(crate) adjustment: f64,
    /// Previously applied adjustment, scaled by the momentum coefficient.
    pub(crate) delta: f64,

    /// Indices of connections for which this node is the destination.
    pub(crate) incoming: Vec<usize>,
    /// Indices of connections for which this node is the source.
    pub(crate) outgoing: Vec<usize>,
}

impl Node {
    pub(crate) fn new(id: u64, node_type: NodeType, bias: f64, squash: Squash) -> Self {
        Self {
            id,
            node_type,
            bias,
            squash,
            net_input: 0.0,
            output: 0.0,
            activations: 0,
            propagations: 0,
            signal_error_sum: 0.0,
            adjustment: 0.0,
            delta: 0.0,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Apply the pending bias adjustment and reset per-example state.
    pub(crate) fn adjust(&mut self) {
        self.bias += self.adjustment;
        self.delta = self.adjustment;
        self.adjustment = 0.0;
        self.signal_error_sum = 0.0;
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn squash(&self) -> Squash {
        self.squash
    }

    /// Net input accumulated during the most recent forward pass.
    pub fn net_input(&self) -> f64 {
        self.net_input
    }

    /// Output produced by the most recent forward pass.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Number of incoming connections (forward-pass fan-in).
    pub fn fan_in(&self) -> usize {
        self.incoming.len()
    }

    /// Number of outgoing connections (backward-pass fan-out).
    pub fn fan_out(&self) -> usize {
        self.outgoing.len()
    }
}

/// A runtime edge between two nodes.
///
/// Endpoints are arena indices; the gene-level node ids are carried
/// alongside so the connection can be exported without consulting the node
/// arena.
#[derive(Clone, Debug)]
pub struct Connection {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) from_id: u64,
    pub(crate) to_id: u64,
    pub(crate) weight: f64,
    pub(crate) innovation: u64,

    /// Pending weight adjustment, applied by `adjust`.
    pub(crate) adjustment: f64,
    /// Previously applied adjustment, scaled by the momentum coefficient.
    pub(crate) delta: f64,
}

impl Connection {
    pub(crate) fn new(
        from: usize,
        to: usize,
        from_id: u64,
        to_id: u64,
        weight: f64,
        innovation: u64,
    ) -> Self {
        Self {
            from,
            to,
            from_id,
            to_id,
            weight,
            innovation,
            adjustment: 0.0,
            delta: 0.0,
        }
    }

    /// Apply the pending weight adjustment and reset it.
    pub(crate) fn adjust(&mut self) {
        self.weight += self.adjustment;
        self.delta = self.adjustment;
        self.adjustment = 0.0;
    }

    /// Source node id (gene id, not arena index).
    pub fn from_id(&self) -> u64 {
        self.from_id
    }

    /// Destination node id (gene id, not arena index).
    pub fn to_id(&self) -> u64 {
        self.to_id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn innovation(&self) -> u64 {
        self.innovation
    }
}
