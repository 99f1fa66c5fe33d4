//! Fully-connected layer with an elementwise activation.

use rand::Rng;
use rayon::prelude::*;

use super::{Activation, Layer};
use crate::error::{NetError, NetResult};
use crate::tensors::Tensor;

/// Dense layer: flatten, affine transform, activation.
///
/// Holds an `input_size × output_size` weight matrix (flat, row-major, one
/// row per input element) and an `output_size` bias vector, both fixed at
/// construction. The input tensor is flattened in channel → row → column
/// order — the caller must size `input_size` assuming that order.
///
/// The output is wrapped as a `(1, 1, output_size)` tensor so dense layers
/// stay composable behind the uniform [`Layer`] interface.
#[derive(Debug, Clone)]
pub struct Dense {
    input_size: usize,
    output_size: usize,
    // flat (input_size, output_size)
    weights: Vec<f64>,
    bias: Vec<f64>,
    activation: Activation,
}

impl Dense {
    /// Creates a layer with weights and biases drawn uniformly from [-1, 1).
    ///
    /// The caller seeds `rng`; equal seeds give equal weights.
    pub fn new(
        input_size: usize,
        output_size: usize,
        activation: Activation,
        rng: &mut impl Rng,
    ) -> Self {
        let weights = (0..input_size * output_size)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        let bias = (0..output_size).map(|_| rng.random_range(-1.0..1.0)).collect();
        Self { input_size, output_size, weights, bias, activation }
    }

    /// Creates a layer from caller-supplied weights and biases.
    ///
    /// # Errors
    /// Returns [`NetError::WeightCountMismatch`] if `weights` does not hold
    /// exactly `input_size * output_size` elements or `bias` does not hold
    /// `output_size`.
    pub fn with_weights(
        input_size: usize,
        output_size: usize,
        activation: Activation,
        weights: Vec<f64>,
        bias: Vec<f64>,
    ) -> NetResult<Self> {
        if weights.len() != input_size * output_size {
            return Err(NetError::WeightCountMismatch {
                expected: input_size * output_size,
                actual: weights.len(),
            });
        }
        if bias.len() != output_size {
            return Err(NetError::WeightCountMismatch {
                expected: output_size,
                actual: bias.len(),
            });
        }
        Ok(Self { input_size, output_size, weights, bias, activation })
    }

    /// Expected flattened input length.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Output vector length.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// The activation applied to each output.
    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Layer for Dense {
    fn name(&self) -> &'static str {
        "Dense"
    }

    /// Computes `act(bias[j] + Σ_i flat[i] * w[i][j])` for every output `j`.
    ///
    /// Outputs are independent, so the per-output loop runs on the rayon
    /// thread pool.
    fn forward(&self, input: &Tensor) -> NetResult<Tensor> {
        let flat = input.flatten();
        if flat.len() != self.input_size {
            return Err(NetError::InputLengthMismatch {
                expected: self.input_size,
                actual: flat.len(),
            });
        }

        let out: Vec<f64> = (0..self.output_size)
            .into_par_iter()
            .map(|j| {
                let mut sum = self.bias[j];
                for (i, &x) in flat.iter().enumerate() {
                    sum += x * self.weights[i * self.output_size + j];
                }
                self.activation.apply(sum)
            })
            .collect();

        Ok(Tensor::new(1, 1, self.output_size, out))
    }

    fn parameter_count(&self) -> usize {
        self.weights.len() + self.bias.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor3;

    #[test]
    fn zero_weights_reproduce_bias() {
        let dense =
            Dense::with_weights(4, 3, Activation::Identity, vec![0.0; 12], vec![2.5; 3]).unwrap();
        let t = tensor3!([[[9.0, -1.0], [3.0, 7.0]]]);
        let out = dense.forward(&t).unwrap();
        assert_eq!((out.channels(), out.height(), out.width()), (1, 1, 3));
        assert_eq!(out.flatten(), &[2.5, 2.5, 2.5]);
    }

    #[test]
    fn affine_transform_matches_hand_computation() {
        // weights[i][j] laid out row-major: w = [[1, 2], [3, 4]]
        let dense = Dense::with_weights(
            2,
            2,
            Activation::Identity,
            vec![1.0, 2.0, 3.0, 4.0],
            vec![0.5, -0.5],
        )
        .unwrap();
        let t = tensor3!([[[2.0, 3.0]]]);
        let out = dense.forward(&t).unwrap();
        // out[0] = 0.5 + 2*1 + 3*3 = 11.5; out[1] = -0.5 + 2*2 + 3*4 = 15.5
        assert_eq!(out.flatten(), &[11.5, 15.5]);
    }

    #[test]
    fn flattened_length_mismatch_is_reported() {
        let dense =
            Dense::with_weights(5, 2, Activation::Relu, vec![0.0; 10], vec![0.0; 2]).unwrap();
        let t = tensor3!([[[1.0, 2.0], [3.0, 4.0]]]);
        let err = dense.forward(&t).unwrap_err();
        assert_eq!(err, NetError::InputLengthMismatch { expected: 5, actual: 4 });
    }

    #[test]
    fn wrong_bias_length_is_rejected() {
        let err =
            Dense::with_weights(2, 2, Activation::Identity, vec![0.0; 4], vec![0.0; 3]).unwrap_err();
        assert_eq!(err, NetError::WeightCountMismatch { expected: 2, actual: 3 });
    }
}
