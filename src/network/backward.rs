//! Backward error propagation and the training step.
//!
//! Mirrors the forward pass: activation synchronizes on fan-in, error
//! propagation synchronizes on fan-out. A hidden node waits until every
//! outgoing connection has delivered an error signal, then computes its own
//! adjustment and pushes the error upstream.
//!
//! Adjustments are staged on nodes and connections during propagation and
//! applied in one batch afterwards (connections first, then biases), so a
//! training step never reads half-updated weights.

use super::Network;
use crate::error::NetworkError;
use crate::genome::NodeType;
use serde::{Deserialize, Serialize};

/// One supervised training example.
///
/// `input` must match the input-node count, `output` the output-node count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl Network {
    /// Run one gradient-descent step on a single example.
    ///
    /// Performs a forward pass, backpropagates the squared-error gradient,
    /// and applies all pending weight and bias adjustments. Returns the
    /// outputs computed *before* the update (the stale forward-pass values).
    pub fn train(&mut self, example: &TrainingExample) -> Result<Vec<f64>, NetworkError> {
        if example.output.len() != self.output_indices().len() {
            return Err(NetworkError::InvalidPattern {
                expected: self.output_indices().len(),
                found: example.output.len(),
            });
        }

        let stale = self.activate(&example.input)?;

        let learning_rate = self.config().learning_rate;
        let momentum = self.config().momentum;

        let mut stack: Vec<(usize, f64)> = Vec::new();
        for i in 0..self.output_indices().len() {
            let idx = self.output_indices()[i];
            self.propagate_output(idx, example.output[i], learning_rate, momentum, &mut stack);
            self.propagate_hidden(learning_rate, momentum, &mut stack);
        }

        self.adjust_all();

        Ok(stale)
    }

    /// Inject the loss gradient at an output node.
    ///
    /// `signalError = f'(netInput) * (output - ideal)`; the node's pending
    /// bias adjustment and each incoming connection's pending weight
    /// adjustment are staged, and the weighted error is queued for the
    /// connection's source node.
    fn propagate_output(
        &mut self,
        idx: usize,
        ideal: f64,
        learning_rate: f64,
        momentum: f64,
        stack: &mut Vec<(usize, f64)>,
    ) {
        let node = self.node_at(idx);
        let derivative = node.squash.derivative(node.net_input);
        let signal_error = derivative * (node.output - ideal);

        let node = self.node_mut(idx);
        node.adjustment = momentum * node.delta - learning_rate * signal_error * derivative;

        self.stage_incoming(idx, signal_error, learning_rate, momentum, stack);
    }

    /// Drain the backward work stack.
    ///
    /// Each entry is an error signal arriving at a node from one of its
    /// outgoing connections. A node acts only once its propagation counter
    /// reaches its true fan-out; input nodes keep their counters in sync but
    /// receive no bias adjustment (their bias is never applied forward).
    fn propagate_hidden(
        &mut self,
        learning_rate: f64,
        momentum: f64,
        stack: &mut Vec<(usize, f64)>,
    ) {
        while let Some((idx, error)) = stack.pop() {
            let node = self.node_mut(idx);
            node.signal_error_sum += error;
            node.propagations += 1;

            if node.propagations < node.outgoing.len() {
                continue;
            }
            node.propagations = 0;
            let sum = node.signal_error_sum;
            node.signal_error_sum = 0.0;

            if node.node_type == NodeType::Input {
                continue;
            }

            let derivative = node.squash.derivative(node.net_input);
            node.adjustment = momentum * node.delta - learning_rate * sum * derivative;

            let signal_error = derivative * sum;
            self.stage_incoming(idx, signal_error, learning_rate, momentum, stack);
        }
    }

    /// Stage weight adjustments on a node's incoming connections and queue
    /// the weighted error for each source node.
    fn stage_incoming(
        &mut self,
        idx: usize,
        signal_error: f64,
        learning_rate: f64,
        momentum: f64,
        stack: &mut Vec<(usize, f64)>,
    ) {
        for i in 0..self.node_at(idx).incoming.len() {
            let ci = self.node_at(idx).incoming[i];
            let (from, weight) = {
                let conn = self.connection_at(ci);
                (conn.from, conn.weight)
            };
            let from_output = self.node_at(from).output;

            let conn = self.connection_mut(ci);
            conn.adjustment = momentum * conn.delta - learning_rate * signal_error * from_output;

            stack.push((from, signal_error * weight));
        }
    }
}
