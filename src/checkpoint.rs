//! Export record and persistence.
//!
//! The `{config, genome}` record is the engine's only wire format: it is
//! JSON-serializable for interchange and can be written to a binary
//! checkpoint file (magic bytes + bincode) for fast save/restore.

use crate::config::NetworkConfig;
use crate::genome::Genome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Magic bytes identifying a binary export file.
const MAGIC: &[u8; 4] = b"EVNT";

/// Serialized form of a network: its configuration and its genome.
///
/// Rebuilding a [`Network`](crate::Network) from this record with
/// [`Network::from_export`](crate::Network::from_export) reproduces a graph
/// with identical connectivity and current weights/biases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkExport {
    pub config: NetworkConfig,
    pub genome: Genome,
}

impl NetworkExport {
    /// Current binary file format version.
    pub const VERSION: u32 = 1;

    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to a binary checkpoint file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_all(&Self::VERSION.to_le_bytes())?;

        let encoded = bincode::serialize(self)?;
        writer.write_all(&encoded)?;

        Ok(())
    }

    /// Load from a binary checkpoint file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(ExportError::InvalidFormat("invalid magic bytes".to_string()));
        }

        let mut version = [0u8; 4];
        reader.read_exact(&mut version)?;
        let version = u32::from_le_bytes(version);
        if version != Self::VERSION {
            return Err(ExportError::VersionMismatch {
                expected: Self::VERSION,
                found: version,
            });
        }

        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        let export: NetworkExport = bincode::deserialize(&buffer)?;

        log::debug!(
            "loaded export: {} node genes, {} connection genes",
            export.genome.nodes.len(),
            export.genome.connections.len()
        );

        Ok(export)
    }
}

/// Errors that can occur while reading or writing export records.
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Binary(bincode::Error),
    Json(serde_json::Error),
    InvalidFormat(String),
    VersionMismatch { expected: u32, found: u32 },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Binary(e) => write!(f, "serialization error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::InvalidFormat(msg) => write!(f, "invalid format: {}", msg),
            Self::VersionMismatch { expected, found } => {
                write!(f, "version mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<bincode::Error> for ExportError {
    fn from(e: bincode::Error) -> Self {
        Self::Binary(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
