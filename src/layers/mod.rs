//! Layer implementations and the polymorphic layer interface.

pub mod activation;
pub mod conv;
pub mod dense;

use crate::error::NetResult;
use crate::tensors::Tensor;

/// The capability shared by every layer: transform one tensor into another.
///
/// A layer owns its weights and configuration for its entire lifetime and is
/// stateless with respect to forward invocations — `forward` is a pure
/// function of the input tensor and the weights fixed at construction.
///
/// Shape compatibility between consecutive layers is not validated up front;
/// each layer checks the tensor it actually receives and reports a
/// [`NetError`](crate::error::NetError) on mismatch.
pub trait Layer {
    /// A short human-readable layer name for diagnostics.
    fn name(&self) -> &'static str;

    /// Runs the forward pass, producing a freshly allocated output tensor.
    fn forward(&self, input: &Tensor) -> NetResult<Tensor>;

    /// Total number of weights (including biases) held by the layer.
    fn parameter_count(&self) -> usize;
}

pub use activation::Activation;
pub use conv::Conv2D;
pub use dense::Dense;
