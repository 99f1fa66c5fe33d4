//! convnet: a small forward-pass inference engine in Rust.
//!
//! Computes the forward pass of a minimal feed-forward neural network built
//! from two layer primitives — a multi-channel 2D convolutional layer and a
//! fully-connected layer — chained behind a uniform tensor-in, tensor-out
//! interface.
//!
//! # Features
//!
//! - Rank-3 `f64` tensors with zero-padding and a defined flatten order.
//! - Padded, strided, multi-channel cross-correlation.
//! - Dense layers with identity, ReLU, or sigmoid activation.
//! - A pipeline type owning heterogeneous layers behind one `forward` call.
//! - Caller-seeded weight initialization, or caller-supplied weights.
//!
//! # Goals
//!
//! - Make the convolution arithmetic and layer composition easy to read and
//!   verify; this is an inference engine for studying, not for production.
//! - Report shape mismatches as typed errors instead of corrupting a pass.
//! - Keep every forward pass deterministic for a fixed configuration.
//!
//! There is deliberately no training, weight persistence, batching, GPU
//! path, or layer zoo beyond the two primitives.
//!
//! # Modules
//!
//! - [`tensors`] — The rank-3 tensor type, padding, and the [`tensor3!`]
//!   literal macro.
//! - [`layers`] — The [`Layer`](layers::Layer) trait plus the convolutional
//!   and dense implementations and activation functions.
//! - [`network`] — The owned layer pipeline.
//! - [`error`] — The error taxonomy shared by all forward paths.
//!
//! # Example
//!
//! ```rust
//! use convnet::{Network, layers::{Activation, Conv2D, Dense}, tensors::Tensor};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut net = Network::new();
//! net.add_layer(Conv2D::new(4, 3, 1, 1, 0, &mut rng)?);
//! net.add_layer(Dense::new(4 * 6 * 6, 5, Activation::Relu, &mut rng));
//!
//! let out = net.forward(&Tensor::zeros(1, 8, 8))?;
//! assert_eq!(out.width(), 5);
//! # Ok::<(), convnet::error::NetError>(())
//! ```

pub mod error;
pub mod layers;
pub mod network;
pub mod tensors;

pub use error::{NetError, NetResult};
pub use layers::{Activation, Conv2D, Dense, Layer};
pub use network::Network;
pub use tensors::Tensor;
