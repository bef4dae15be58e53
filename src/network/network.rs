use std::fmt;

use serde::Serialize;

use crate::activation::sigmoid;
use crate::error::NetworkError;

/// Two-layer perceptron: input → hidden → output, sigmoid on both layers.
///
/// Weight matrices are stored flat and row-major: the weight from neuron `r`
/// of one layer to neuron `c` of the next lives at `r * width + c`, where
/// `width` is the size of the receiving layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    pub(crate) input_count: usize,
    pub(crate) hidden_count: usize,
    pub(crate) output_count: usize,
    /// `input_count × hidden_count`
    pub(crate) weights_hidden: Vec<f64>,
    pub(crate) biases_hidden: Vec<f64>,
    /// `hidden_count × output_count`
    pub(crate) weights_output: Vec<f64>,
    pub(crate) biases_output: Vec<f64>,
}

impl Network {
    /// Builds a network whose weights are drawn from `random() - 0.5`.
    ///
    /// `random` must yield values in `[0, 1)`. It is called once per weight,
    /// hidden matrix first, each in row-major order. Biases start at zero.
    pub fn new<F>(input_count: usize, hidden_count: usize, output_count: usize, mut random: F) -> Network
    where
        F: FnMut() -> f64,
    {
        let weights_hidden = (0..input_count * hidden_count)
            .map(|_| random() - 0.5)
            .collect();
        let weights_output = (0..hidden_count * output_count)
            .map(|_| random() - 0.5)
            .collect();

        Network {
            input_count,
            hidden_count,
            output_count,
            weights_hidden,
            biases_hidden: vec![0.0; hidden_count],
            weights_output,
            biases_output: vec![0.0; output_count],
        }
    }

    /// Builds a network from explicit parameters, checking every length
    /// against the layer counts.
    pub fn from_parts(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        weights_hidden: Vec<f64>,
        biases_hidden: Vec<f64>,
        weights_output: Vec<f64>,
        biases_output: Vec<f64>,
    ) -> Result<Network, NetworkError> {
        check_len("weights_hidden", input_count * hidden_count, &weights_hidden)?;
        check_len("biases_hidden", hidden_count, &biases_hidden)?;
        check_len("weights_output", hidden_count * output_count, &weights_output)?;
        check_len("biases_output", output_count, &biases_output)?;

        Ok(Network {
            input_count,
            hidden_count,
            output_count,
            weights_hidden,
            biases_hidden,
            weights_output,
            biases_output,
        })
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn weights_hidden(&self) -> &[f64] {
        &self.weights_hidden
    }

    pub fn biases_hidden(&self) -> &[f64] {
        &self.biases_hidden
    }

    pub fn weights_output(&self) -> &[f64] {
        &self.weights_output
    }

    pub fn biases_output(&self) -> &[f64] {
        &self.biases_output
    }

    /// Forward pass with freshly allocated scratch.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        let mut hidden = vec![0.0; self.hidden_count];
        let mut output = vec![0.0; self.output_count];
        self.predict_inplace(input, &mut hidden, &mut output);
        output
    }

    /// Forward pass into caller-owned buffers.
    ///
    /// `hidden` and `output` are overwritten entirely; their contents on entry
    /// are ignored. Returns `output`.
    ///
    /// # Panics
    /// Panics if `input`, `hidden` or `output` are shorter than the
    /// corresponding layer.
    pub fn predict_inplace<'a>(
        &self,
        input: &[f64],
        hidden: &mut [f64],
        output: &'a mut [f64],
    ) -> &'a mut [f64] {
        for c in 0..self.hidden_count {
            let mut sum = 0.0;
            for r in 0..self.input_count {
                sum += input[r] * self.weights_hidden[r * self.hidden_count + c];
            }
            hidden[c] = sigmoid(sum + self.biases_hidden[c]);
        }

        for c in 0..self.output_count {
            let mut sum = 0.0;
            for r in 0..self.hidden_count {
                sum += hidden[r] * self.weights_output[r * self.output_count + c];
            }
            output[c] = sigmoid(sum + self.biases_output[c]);
        }

        output
    }
}

fn check_len(name: &'static str, expected: usize, values: &[f64]) -> Result<(), NetworkError> {
    if values.len() != expected {
        return Err(NetworkError::ParameterLength {
            name,
            expected,
            got: values.len(),
        });
    }
    Ok(())
}

/// Parameter dump: one label line per sequence, then its values at six
/// decimals, in storage order.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sections: [(&str, &[f64]); 4] = [
            ("weightsHidden", self.weights_hidden.as_slice()),
            ("biasesHidden", self.biases_hidden.as_slice()),
            ("weightsOutput", self.weights_output.as_slice()),
            ("biasesOutput", self.biases_output.as_slice()),
        ];

        for (label, values) in sections {
            writeln!(f, "{}:", label)?;
            for value in values {
                write!(f, "{:.6} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
