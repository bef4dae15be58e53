/// Summary returned by `train_loop`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainStats {
    /// Number of single-example steps taken.
    pub iterations: usize,
    /// Mean MSE over the dataset after the last step.
    pub final_loss: f64,
}
