use tracing::{debug, info};

use crate::data::DataItem;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;
use crate::train::train_stats::TrainStats;
use crate::train::trainer::Trainer;

/// Runs `config.iterations` online steps, cycling through `data` in order.
///
/// Step `i` trains on `data[i % data.len()]`. An empty dataset trains nothing
/// and reports a loss of 0.
pub fn train_loop(trainer: &mut Trainer, data: &[DataItem], config: &TrainConfig) -> TrainStats {
    if data.is_empty() {
        return TrainStats { iterations: 0, final_loss: 0.0 };
    }

    info!(
        iterations = config.iterations,
        learning_rate = config.learning_rate,
        samples = data.len(),
        "training started"
    );

    for i in 0..config.iterations {
        let item = &data[i % data.len()];
        trainer.train(item.input(), item.output(), config.learning_rate);

        if config.log_interval > 0 && (i + 1) % config.log_interval == 0 {
            debug!(iteration = i + 1, loss = dataset_loss(trainer.network(), data), "progress");
        }
    }

    let final_loss = dataset_loss(trainer.network(), data);
    info!(final_loss, "training finished");

    TrainStats {
        iterations: config.iterations,
        final_loss,
    }
}

/// Mean MSE of the network's predictions over a dataset.
pub fn dataset_loss(network: &Network, data: &[DataItem]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let total: f64 = data.iter()
        .map(|item| MseLoss::loss(&network.predict(item.input()), item.output()))
        .sum();
    total / data.len() as f64
}
