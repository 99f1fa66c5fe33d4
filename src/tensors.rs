//! Core tensor data structure and spatial operations.
//!
//! # Rank-3 Tensor Utilities
//!
//! This module defines the single data-interchange type of the crate: a rank-3
//! tensor of `f64` values laid out as channels × height × width.
//!
//! It supports:
//! - Construction from a flat buffer, nested arrays, or the [`tensor3!`] macro
//! - Zero-padding of the spatial dimensions
//! - Element access by `(channel, row, column)` index
//! - A flatten view in channel → row → column order
//!
//! ## Design Highlights
//! - Storage is a flat row-major `Vec<f64>` with channels outermost, so the
//!   flatten order required by the dense layer is exactly the storage order
//! - Shape is fixed at rank 3 and enforced at construction
//! - Every operation produces a freshly allocated tensor; nothing is mutated
//!   in place once a tensor enters a forward pass
//!
//! ## Example
//!
//! ```rust
//! use convnet::tensors::Tensor;
//! let t = Tensor::new(1, 2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(t.get(0, 1, 2), 6.0);
//! ```

/// A rank-3 tensor (channels × height × width) with flat row-major storage.
///
/// - `data` holds the elements in channel → row → column order.
/// - All channels share the same height and width, so the tensor is
///   rectangular by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    channels: usize,
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Tensor {
    /// Creates a new tensor with the given dimensions and flat data.
    ///
    /// # Panics
    /// Panics if `data.len() != channels * height * width` or any dimension
    /// is zero.
    pub fn new(channels: usize, height: usize, width: usize, data: Vec<f64>) -> Self {
        assert!(
            channels >= 1 && height >= 1 && width >= 1,
            "tensor dimensions must be at least 1, got ({channels}, {height}, {width})"
        );
        assert_eq!(
            channels * height * width,
            data.len(),
            "shape ({}, {}, {}) is incompatible with {} data elements",
            channels,
            height,
            width,
            data.len()
        );
        Self { channels, height, width, data }
    }

    /// Creates a tensor of the given dimensions filled with zeros.
    pub fn zeros(channels: usize, height: usize, width: usize) -> Self {
        Self::new(channels, height, width, vec![0.0; channels * height * width])
    }

    /// Builds a tensor from nested `channel → row → column` arrays.
    ///
    /// # Panics
    /// Panics if the nested structure is ragged or empty.
    pub fn from_nested(nested: Vec<Vec<Vec<f64>>>) -> Self {
        let channels = nested.len();
        assert!(channels >= 1, "tensor needs at least one channel");
        let height = nested[0].len();
        let width = nested[0].first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(channels * height * width);
        for channel in &nested {
            assert_eq!(channel.len(), height, "ragged tensor (channels differ in height)");
            for row in channel {
                assert_eq!(row.len(), width, "ragged tensor (rows differ in width)");
                data.extend_from_slice(row);
            }
        }
        Self::new(channels, height, width, data)
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Spatial height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Spatial width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total element count (`channels * height * width`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a tensor has at least one element by construction.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `(channel, row, column)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn get(&self, channel: usize, row: usize, col: usize) -> f64 {
        self.data[self.offset(channel, row, col)]
    }

    /// Sets the element at `(channel, row, column)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, channel: usize, row: usize, col: usize, value: f64) {
        let idx = self.offset(channel, row, col);
        self.data[idx] = value;
    }

    fn offset(&self, channel: usize, row: usize, col: usize) -> usize {
        assert!(
            channel < self.channels && row < self.height && col < self.width,
            "index ({channel}, {row}, {col}) out of bounds for shape ({}, {}, {})",
            self.channels,
            self.height,
            self.width
        );
        (channel * self.height + row) * self.width + col
    }

    /// The elements in flatten order: channel outermost, then row, then column.
    ///
    /// This is the exact order the dense layer consumes, and the order a
    /// caller must assume when sizing a dense layer's input dimension.
    pub fn flatten(&self) -> &[f64] {
        &self.data
    }

    /// Zero-pads the spatial dimensions symmetrically by `amount` cells.
    ///
    /// The result has shape `(C, H + 2*amount, W + 2*amount)` with the
    /// original values at offset `(amount, amount)` in each channel and zeros
    /// everywhere else. `pad(0)` is an unmodified copy.
    ///
    /// # Example
    /// ```rust
    /// use convnet::tensor3;
    /// let t = tensor3!([[[1.0, 2.0], [3.0, 4.0]]]);
    /// let p = t.pad(1);
    /// assert_eq!((p.channels(), p.height(), p.width()), (1, 4, 4));
    /// assert_eq!(p.get(0, 1, 1), 1.0);
    /// assert_eq!(p.get(0, 0, 0), 0.0);
    /// ```
    pub fn pad(&self, amount: usize) -> Tensor {
        if amount == 0 {
            return self.clone();
        }
        let height = self.height + 2 * amount;
        let width = self.width + 2 * amount;
        let mut data = vec![0.0; self.channels * height * width];
        for c in 0..self.channels {
            for i in 0..self.height {
                let src = (c * self.height + i) * self.width;
                let dst = (c * height + i + amount) * width + amount;
                data[dst..dst + self.width].copy_from_slice(&self.data[src..src + self.width]);
            }
        }
        Tensor { channels: self.channels, height, width, data }
    }
}

/// Defines a rank-3 tensor from nested literal arrays.
///
/// The literal must be nested exactly three deep (channels, rows, columns)
/// and rectangular.
///
/// # Example
/// ```
/// use convnet::tensor3;
/// let t = tensor3!([[[1.0, 2.0], [3.0, 4.0]]]);
/// assert_eq!((t.channels(), t.height(), t.width()), (1, 2, 2));
/// ```
#[macro_export]
macro_rules! tensor3 {
    ([ $( [ $( [ $( $v:expr ),+ $(,)? ] ),+ $(,)? ] ),+ $(,)? ]) => {{
        let nested: Vec<Vec<Vec<f64>>> =
            vec![ $( vec![ $( vec![ $( $v ),+ ] ),+ ] ),+ ];
        $crate::tensors::Tensor::from_nested(nested)
    }};
}
