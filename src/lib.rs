//! # evonet
//!
//! Minimal evolvable-neural-network engine. A feed-forward network is
//! represented as a serializable gene set (nodes + connections, NEAT-style),
//! instantiated into a runtime computation graph, and driven with forward
//! activation and local gradient-descent training.
//!
//! ## Features
//!
//! - **Genome ⇄ network round trips**: lossless, including disabled genes
//! - **Fan-in/fan-out synchronized passes**: eager depth-first activation
//!   and mirrored error propagation, iterative (no recursion limits)
//! - **Reproducible**: seeded default-genome generation
//! - **Serializable**: JSON wire format and binary checkpoint files
//!
//! ## Quick start
//!
//! ```rust
//! use evonet::{Network, NetworkConfig, TrainingExample};
//!
//! let config = NetworkConfig { input: 2, output: 1, seed: Some(42), ..Default::default() };
//! let mut net = Network::new(config).unwrap();
//!
//! // Forward pass
//! let out = net.activate(&[0.5, -0.5]).unwrap();
//! assert_eq!(out.len(), 1);
//!
//! // One gradient-descent step
//! net.train(&TrainingExample { input: vec![0.5, -0.5], output: vec![1.0] }).unwrap();
//!
//! // Serialize and restore
//! let export = net.export();
//! let restored = Network::from_export(&export).unwrap();
//! ```

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod genome;
pub mod network;
pub mod squash;

// Re-export main types
pub use checkpoint::NetworkExport;
pub use config::NetworkConfig;
pub use error::NetworkError;
pub use genome::{ConnectionGene, Genome, NodeGene, NodeType};
pub use network::{Connection, Network, Node, TrainingExample};
pub use squash::Squash;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_quick_start() {
        let config = NetworkConfig { input: 2, output: 1, seed: Some(42), ..Default::default() };
        let mut net = Network::new(config).unwrap();

        let out = net.activate(&[0.5, -0.5]).unwrap();
        assert_eq!(out.len(), 1);

        net.train(&TrainingExample { input: vec![0.5, -0.5], output: vec![1.0] })
            .unwrap();
    }
}
