//! Error types for network construction and activation.

/// Errors surfaced by network construction, activation, and training.
///
/// All variants are caller-facing validation failures. Either a network is
/// fully constructed or construction fails atomically, and a pass that
/// fails validation never touches the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Input (or ideal-output) pattern length does not match the node group.
    InvalidPattern { expected: usize, found: usize },
    /// An enabled connection gene references a node id that was never
    /// instantiated (absent from the genome, or disabled).
    DanglingReference { from: u64, to: u64, missing: u64 },
    /// A node gene names a squash function not present in the table.
    UnknownSquash(String),
    /// Configuration failed validation.
    InvalidConfig(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { expected, found } => {
                write!(f, "invalid pattern: expected {} values, found {}", expected, found)
            }
            Self::DanglingReference { from, to, missing } => {
                write!(
                    f,
                    "connection {} -> {} references missing node {}",
                    from, to, missing
                )
            }
            Self::UnknownSquash(name) => write!(f, "unknown squash function: {}", name),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for NetworkError {}
