use std::io::{Read, Write};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::topology::Topology;

/// On-disk shape of a set of weights: the layer sizes they were trained for
/// and one `[from][to]` matrix per layer boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightFile {
    pub layer_sizes: Vec<usize>,
    pub weights: Vec<Matrix>,
}

impl WeightFile {
    pub fn from_topology(topology: &Topology) -> WeightFile {
        WeightFile {
            layer_sizes: topology.layer_sizes().to_vec(),
            weights: topology.weights().to_vec(),
        }
    }

    /// Accepts the weights only if they describe exactly `expected_sizes`.
    pub fn into_topology(self, expected_sizes: &[usize]) -> Result<Topology> {
        if self.layer_sizes != expected_sizes {
            return Err(NetworkError::LayerSizesMismatch {
                expected: expected_sizes.to_vec(),
                got: self.layer_sizes,
            });
        }
        Topology::from_weights(expected_sizes, self.weights)
    }
}

pub fn to_writer<W: Write>(topology: &Topology, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &WeightFile::from_topology(topology))?;
    Ok(())
}

pub fn from_reader<R: Read>(reader: R, expected_sizes: &[usize]) -> Result<Topology> {
    let file: WeightFile = serde_json::from_reader(reader)?;
    file.into_topology(expected_sizes)
}

/// Serializes the topology's weights to a pretty-printed JSON file.
pub fn save_json(topology: &Topology, path: &str) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    to_writer(topology, &mut writer)?;
    writer.flush()?;
    info!("saved weights for {:?} to {path}", topology.layer_sizes());
    Ok(())
}

/// Loads weights written by `save_json`, rejecting any that do not fit
/// `expected_sizes`.
pub fn load_json(path: &str, expected_sizes: &[usize]) -> Result<Topology> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    from_reader(reader, expected_sizes)
}
