//! The layer pipeline: an ordered, owned sequence of layers.

use crate::error::NetResult;
use crate::layers::Layer;
use crate::tensors::Tensor;

/// An ordered collection of layers executed left to right.
///
/// The network owns each layer exclusively for its own lifetime. Layers are
/// appended in execution order; the single meaningful operation is
/// [`forward`](Network::forward), which folds a tensor through every layer
/// and returns the last layer's output. The network itself holds no mutable
/// state between forward passes.
///
/// # Example
/// ```rust
/// use convnet::{Network, layers::{Activation, Conv2D, Dense}, tensors::Tensor};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut net = Network::new();
/// net.add_layer(Conv2D::new(8, 3, 1, 1, 1, &mut rng).unwrap());
/// net.add_layer(Dense::new(8 * 28 * 28, 10, Activation::Sigmoid, &mut rng));
///
/// let input = Tensor::zeros(1, 28, 28);
/// let output = net.forward(&input).unwrap();
/// assert_eq!((output.channels(), output.height(), output.width()), (1, 1, 10));
/// ```
#[derive(Default)]
pub struct Network {
    layers: Vec<Box<dyn Layer>>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Appends a layer to the end of the pipeline.
    ///
    /// No shape compatibility between consecutive layers is checked here;
    /// each layer validates lazily against the tensor it receives during
    /// [`forward`](Network::forward).
    pub fn add_layer(&mut self, layer: impl Layer + 'static) {
        self.layers.push(Box::new(layer));
    }

    /// Number of layers in the pipeline.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if no layers have been added.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total parameter count across all layers.
    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|l| l.parameter_count()).sum()
    }

    /// Threads `input` through every layer in insertion order.
    ///
    /// An empty network returns a copy of the input. The first layer error
    /// aborts the pass and is returned to the caller.
    pub fn forward(&self, input: &Tensor) -> NetResult<Tensor> {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }
}
