use crate::activation::sigmoid_derivative;
use crate::network::network::Network;

/// Online gradient-descent trainer.
///
/// Owns the network it trains together with the scratch buffers one step
/// needs, so `train` never allocates. After each step the buffers hold that
/// step's activations (`hidden`, `output`) and error signals
/// (`grad_hidden`, `grad_output`).
#[derive(Debug, Clone)]
pub struct Trainer {
    network: Network,
    hidden: Vec<f64>,
    output: Vec<f64>,
    grad_hidden: Vec<f64>,
    grad_output: Vec<f64>,
}

impl Trainer {
    /// Builds a randomly initialised network (see `Network::new`) and its
    /// zeroed scratch buffers.
    pub fn new<F>(input_count: usize, hidden_count: usize, output_count: usize, random: F) -> Trainer
    where
        F: FnMut() -> f64,
    {
        Trainer::from_network(Network::new(input_count, hidden_count, output_count, random))
    }

    /// Takes ownership of an existing network.
    pub fn from_network(network: Network) -> Trainer {
        let hidden_count = network.hidden_count;
        let output_count = network.output_count;
        Trainer {
            network,
            hidden: vec![0.0; hidden_count],
            output: vec![0.0; output_count],
            grad_hidden: vec![0.0; hidden_count],
            grad_output: vec![0.0; output_count],
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn grad_hidden(&self) -> &[f64] {
        &self.grad_hidden
    }

    pub fn grad_output(&self) -> &[f64] {
        &self.grad_output
    }

    /// One backpropagation step on a single example.
    ///
    /// Minimises `½‖output − target‖²`. Non-finite values are not guarded and
    /// propagate into the weights.
    ///
    /// # Panics
    /// Panics if `input` or `target` are shorter than the input/output layer.
    pub fn train(&mut self, input: &[f64], target: &[f64], learning_rate: f64) {
        let net = &mut self.network;
        let (n_in, n_hid, n_out) = (net.input_count, net.hidden_count, net.output_count);

        net.predict_inplace(input, &mut self.hidden, &mut self.output);

        for c in 0..n_out {
            self.grad_output[c] = (self.output[c] - target[c]) * sigmoid_derivative(self.output[c]);
        }

        // Must read weights_output before the update below touches it.
        for r in 0..n_hid {
            let mut sum = 0.0;
            for c in 0..n_out {
                sum += self.grad_output[c] * net.weights_output[r * n_out + c];
            }
            self.grad_hidden[r] = sum * sigmoid_derivative(self.hidden[r]);
        }

        for r in 0..n_hid {
            for c in 0..n_out {
                net.weights_output[r * n_out + c] -= learning_rate * self.grad_output[c] * self.hidden[r];
            }
        }

        for r in 0..n_in {
            for c in 0..n_hid {
                net.weights_hidden[r * n_hid + c] -= learning_rate * self.grad_hidden[c] * input[r];
            }
        }

        for c in 0..n_out {
            net.biases_output[c] -= learning_rate * self.grad_output[c];
        }

        for c in 0..n_hid {
            net.biases_hidden[c] -= learning_rate * self.grad_hidden[c];
        }
    }
}
