//! Multi-channel 2D convolutional layer.
//!
//! The forward pass is cross-correlation in the standard CNN sense: the
//! kernel window is applied as stored, with no flip. The layer is linear —
//! no bias term and no activation; the dense layer owns the nonlinearity.

use rand::Rng;
use rayon::prelude::*;

use super::Layer;
use crate::error::{NetError, NetResult};
use crate::tensors::Tensor;

/// Convolutional layer holding a bank of `filters` square kernels.
///
/// The kernel bank has shape (filters × in_channels × kernel_size ×
/// kernel_size), stored flat in that order. Weights are fixed at
/// construction, either drawn uniformly from [-1, 1) or supplied by the
/// caller, and never mutated afterwards.
///
/// # Example
/// ```rust
/// use convnet::layers::{Conv2D, Layer};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let conv = Conv2D::new(8, 3, 1, 1, 1, &mut rng).unwrap();
/// assert_eq!(conv.parameter_count(), 8 * 1 * 3 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct Conv2D {
    filters: usize,
    in_channels: usize,
    kernel_size: usize,
    stride: usize,
    padding: usize,
    // flat (filters, in_channels, kernel_size, kernel_size)
    weights: Vec<f64>,
}

impl Conv2D {
    /// Creates a layer with weights drawn uniformly from [-1, 1).
    ///
    /// The caller seeds `rng`, which makes weight initialization
    /// deterministic under a fixed seed.
    ///
    /// # Errors
    /// Returns [`NetError::ZeroStride`] if `stride` is 0.
    pub fn new(
        filters: usize,
        kernel_size: usize,
        in_channels: usize,
        stride: usize,
        padding: usize,
        rng: &mut impl Rng,
    ) -> NetResult<Self> {
        let count = filters * in_channels * kernel_size * kernel_size;
        let weights = (0..count).map(|_| rng.random_range(-1.0..1.0)).collect();
        Self::with_weights(filters, kernel_size, in_channels, stride, padding, weights)
    }

    /// Creates a layer from a caller-supplied kernel bank.
    ///
    /// `weights` must be flat in (filter, input channel, kernel row, kernel
    /// column) order with exactly
    /// `filters * in_channels * kernel_size * kernel_size` elements.
    ///
    /// # Errors
    /// Returns [`NetError::WeightCountMismatch`] on a wrong-length buffer
    /// and [`NetError::ZeroStride`] if `stride` is 0.
    pub fn with_weights(
        filters: usize,
        kernel_size: usize,
        in_channels: usize,
        stride: usize,
        padding: usize,
        weights: Vec<f64>,
    ) -> NetResult<Self> {
        if stride == 0 {
            return Err(NetError::ZeroStride);
        }
        let expected = filters * in_channels * kernel_size * kernel_size;
        if weights.len() != expected {
            return Err(NetError::WeightCountMismatch { expected, actual: weights.len() });
        }
        Ok(Self { filters, in_channels, kernel_size, stride, padding, weights })
    }

    /// Number of filters (output channels).
    pub fn filters(&self) -> usize {
        self.filters
    }

    /// Expected input channel count.
    pub fn in_channels(&self) -> usize {
        self.in_channels
    }

    /// Side length of the square kernel.
    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    /// Kernel window step size.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Symmetric zero-padding applied before convolving.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Output spatial dimensions for a padded input of `height` × `width`.
    ///
    /// # Errors
    /// Returns [`NetError::DegenerateOutput`] when the kernel does not fit
    /// the input even once.
    fn output_dims(&self, height: usize, width: usize) -> NetResult<(usize, usize)> {
        if height < self.kernel_size || width < self.kernel_size {
            return Err(NetError::DegenerateOutput {
                input_height: height,
                input_width: width,
                kernel_size: self.kernel_size,
                stride: self.stride,
            });
        }
        let out_h = (height - self.kernel_size) / self.stride + 1;
        let out_w = (width - self.kernel_size) / self.stride + 1;
        Ok((out_h, out_w))
    }
}

impl Layer for Conv2D {
    fn name(&self) -> &'static str {
        "Conv2D"
    }

    /// Convolves the input with every filter in the bank.
    ///
    /// Output shape is `(filters, (H' - K)/S + 1, (W' - K)/S + 1)` where H'
    /// and W' are the padded spatial dimensions. Each output plane is
    /// computed independently, so the per-filter loop runs on the rayon
    /// thread pool; within a cell, accumulation runs input channel → kernel
    /// row → kernel column.
    fn forward(&self, input: &Tensor) -> NetResult<Tensor> {
        if input.channels() != self.in_channels {
            return Err(NetError::ChannelMismatch {
                expected: self.in_channels,
                actual: input.channels(),
            });
        }

        let padded;
        let input = if self.padding > 0 {
            padded = input.pad(self.padding);
            &padded
        } else {
            input
        };

        let (height, width) = (input.height(), input.width());
        let (out_h, out_w) = self.output_dims(height, width)?;

        let k = self.kernel_size;
        let stride = self.stride;
        let data = input.flatten();
        let mut out = vec![0.0; self.filters * out_h * out_w];

        out.par_chunks_mut(out_h * out_w)
            .enumerate()
            .for_each(|(f, plane)| {
                let bank = &self.weights[f * self.in_channels * k * k..];
                for i in 0..out_h {
                    for j in 0..out_w {
                        let mut sum = 0.0;
                        for c in 0..self.in_channels {
                            let channel = &data[c * height * width..];
                            let kernel = &bank[c * k * k..];
                            for m in 0..k {
                                let row = &channel[(i * stride + m) * width + j * stride..];
                                let krow = &kernel[m * k..];
                                for n in 0..k {
                                    sum += row[n] * krow[n];
                                }
                            }
                        }
                        plane[i * out_w + j] = sum;
                    }
                }
            });

        Ok(Tensor::new(self.filters, out_h, out_w, out))
    }

    fn parameter_count(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor3;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn one_by_one_identity_kernel_reproduces_input() {
        let conv = Conv2D::with_weights(1, 1, 1, 1, 0, vec![1.0]).unwrap();
        let t = tensor3!([[[1.0, -2.0, 3.0], [0.5, 0.0, -0.25]]]);
        assert_eq!(conv.forward(&t).unwrap(), t);
    }

    #[test]
    fn stride_zero_is_rejected_at_construction() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Conv2D::new(1, 3, 1, 0, 0, &mut rng).unwrap_err();
        assert_eq!(err, NetError::ZeroStride);
    }

    #[test]
    fn wrong_weight_count_is_rejected() {
        let err = Conv2D::with_weights(2, 3, 1, 1, 0, vec![0.0; 17]).unwrap_err();
        assert_eq!(err, NetError::WeightCountMismatch { expected: 18, actual: 17 });
    }

    #[test]
    fn seeded_initialization_is_deterministic_and_bounded() {
        let mut a = StdRng::seed_from_u64(12345);
        let mut b = StdRng::seed_from_u64(12345);
        let c1 = Conv2D::new(4, 3, 2, 1, 1, &mut a).unwrap();
        let c2 = Conv2D::new(4, 3, 2, 1, 1, &mut b).unwrap();
        assert_eq!(c1.weights, c2.weights);
        assert!(c1.weights.iter().all(|w| (-1.0..1.0).contains(w)));
    }
}
