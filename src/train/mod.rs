pub mod trainer;
pub mod train_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::Trainer;
pub use train_stats::TrainStats;
pub use train_config::TrainConfig;
pub use loop_fn::{dataset_loss, train_loop};
