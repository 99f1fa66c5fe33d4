//! Scalar activation functions applied by the dense layer.

/// Elementwise nonlinearity applied to a dense layer's pre-activation
/// outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// `f(x) = x`.
    #[default]
    Identity,
    /// Rectified linear unit, `f(x) = max(0, x)`.
    Relu,
    /// Logistic sigmoid, `f(x) = 1 / (1 + e^(-x))`.
    Sigmoid,
}

impl Activation {
    /// Applies the activation to a single value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Resolves an activation by name: `"identity"`, `"relu"`, or
    /// `"sigmoid"`.
    ///
    /// Unrecognized names resolve to [`Activation::Identity`]. This keeps a
    /// misspelled name from aborting inference, but it also silently masks
    /// typos, so a warning is emitted through the `log` facade.
    pub fn from_name(name: &str) -> Self {
        match name {
            "identity" => Activation::Identity,
            "relu" => Activation::Relu,
            "sigmoid" => Activation::Sigmoid,
            other => {
                log::warn!("unknown activation {other:?}, falling back to identity");
                Activation::Identity
            }
        }
    }
}
