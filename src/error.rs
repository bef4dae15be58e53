use std::fmt;

/// Errors raised by the validated entry points.
///
/// The numeric core (`predict`, `train`) never fails; only building a
/// network from caller-supplied parameters, loading a config, or pairing a
/// config with a dataset can.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A parameter sequence does not match the layer counts.
    ParameterLength {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// Layer counts disagree with the shape of the training data.
    DatasetShape {
        expected_inputs: usize,
        expected_outputs: usize,
        got_inputs: usize,
        got_outputs: usize,
    },
    /// Config file could not be read or parsed.
    Config(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkError::ParameterLength { name, expected, got } => write!(
                f,
                "Expected {} values in {}, but got {}!",
                expected, name, got
            ),
            NetworkError::DatasetShape {
                expected_inputs,
                expected_outputs,
                got_inputs,
                got_outputs,
            } => write!(
                f,
                "Network expects {} input(s) and {} output(s), \
                but the dataset has {} input(s) and {} output(s)!",
                expected_inputs, expected_outputs, got_inputs, got_outputs
            ),
            NetworkError::Config(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<std::io::Error> for NetworkError {
    fn from(e: std::io::Error) -> Self {
        NetworkError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        NetworkError::Config(e.to_string())
    }
}
