use serde::Deserialize;

use crate::data::DataItem;
use crate::error::NetworkError;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `input_count`, `hidden_count`, `output_count`: layer sizes
/// - `iterations`: number of single-example steps; example `i` is
///   `data[i % data.len()]`
/// - `learning_rate`: gradient-descent step size
/// - `seed`: seed for the `Lcg` weight initialiser
/// - `log_interval`: log the dataset loss every this many steps; `0` disables
///
/// Every field is optional in JSON and falls back to `Default`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub input_count: usize,
    pub hidden_count: usize,
    pub output_count: usize,
    pub iterations: usize,
    pub learning_rate: f64,
    pub seed: u64,
    pub log_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            input_count: 2,
            hidden_count: 2,
            output_count: 6,
            iterations: 4000,
            learning_rate: 1.0,
            seed: 1,
            log_interval: 1000,
        }
    }
}

impl TrainConfig {
    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig, NetworkError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks that every item fits the configured input and output layers.
    pub fn check_dataset(&self, data: &[DataItem]) -> Result<(), NetworkError> {
        for item in data {
            if item.input().len() != self.input_count || item.output().len() != self.output_count {
                return Err(NetworkError::DatasetShape {
                    expected_inputs: self.input_count,
                    expected_outputs: self.output_count,
                    got_inputs: item.input().len(),
                    got_outputs: item.output().len(),
                });
            }
        }
        Ok(())
    }
}
