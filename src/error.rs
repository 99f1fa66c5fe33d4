//! Error types for the inference engine.
//!
//! Every failure here is a deterministic function of the caller-supplied
//! configuration and input shapes. Nothing is transient, so there are no
//! retry semantics; a failed forward pass will fail again until the caller
//! changes the layer configuration or the input tensor.

use thiserror::Error;

/// All error conditions a layer or pipeline forward pass can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetError {
    /// The convolutional layer's kernel bank expects a different number of
    /// input channels than the tensor it was handed.
    #[error("kernel bank expects {expected} input channels, tensor has {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    /// The flattened input does not match the dense layer's configured
    /// input size.
    #[error("flattened input has {actual} elements, dense layer expects {expected}")]
    InputLengthMismatch { expected: usize, actual: usize },

    /// Kernel size, stride, and input size combine to an output with no
    /// cells.
    #[error(
        "convolving a {input_height}x{input_width} input with a {kernel_size}x{kernel_size} \
         kernel at stride {stride} leaves no output cells"
    )]
    DegenerateOutput {
        input_height: usize,
        input_width: usize,
        kernel_size: usize,
        stride: usize,
    },

    /// A stride of zero would never advance the kernel window.
    #[error("stride must be at least 1")]
    ZeroStride,

    /// A caller-supplied weight or bias buffer has the wrong length.
    #[error("weight buffer has {actual} elements, layer expects {expected}")]
    WeightCountMismatch { expected: usize, actual: usize },
}

/// Convenience alias used throughout the crate.
pub type NetResult<T> = Result<T, NetError>;
