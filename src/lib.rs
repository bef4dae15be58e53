pub mod activation;
pub mod data;
pub mod error;
pub mod logging;
pub mod loss;
pub mod network;
pub mod report;
pub mod rng;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use data::{logic_dataset, DataItem, LOGIC_FUNCTION_NAMES};
pub use error::NetworkError;
pub use loss::mse::MseLoss;
pub use network::network::Network;
pub use report::{format_report, Report};
pub use rng::lcg::Lcg;
pub use train::{train_loop, TrainConfig, TrainStats, Trainer};
