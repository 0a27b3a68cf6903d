//! Activation (squash) function table.
//!
//! Nodes reference their squash function by name in the genome; at network
//! construction the name is resolved against this table. Each entry provides
//! the forward function and its derivative with respect to the net input.

/// A squash function together with its derivative, looked up by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Squash {
    Sigmoid,
    Tanh,
    Relu,
    Identity,
}

impl Squash {
    /// Resolve a squash function by its registered name.
    ///
    /// Returns `None` for names not in the table; `Network` construction
    /// turns that into an `UnknownSquash` error.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "sigmoid" => Some(Self::Sigmoid),
            "tanh" => Some(Self::Tanh),
            "relu" => Some(Self::Relu),
            "identity" => Some(Self::Identity),
            _ => None,
        }
    }

    /// The registered name, as stored in node genes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
            Self::Relu => "relu",
            Self::Identity => "identity",
        }
    }

    /// Forward value `f(x)`.
    #[inline]
    pub fn forward(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
            Self::Relu => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            Self::Identity => x,
        }
    }

    /// Derivative `f'(x)` with respect to the net input.
    #[inline]
    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => {
                let fx = self.forward(x);
                fx * (1.0 - fx)
            }
            Self::Tanh => 1.0 - x.tanh().powi(2),
            Self::Relu => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Squash::by_name("sigmoid"), Some(Squash::Sigmoid));
        assert_eq!(Squash::by_name("tanh"), Some(Squash::Tanh));
        assert_eq!(Squash::by_name("relu"), Some(Squash::Relu));
        assert_eq!(Squash::by_name("identity"), Some(Squash::Identity));
        assert_eq!(Squash::by_name("softmax"), None);
        assert_eq!(Squash::by_name(""), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for squash in [Squash::Sigmoid, Squash::Tanh, Squash::Relu, Squash::Identity] {
            assert_eq!(Squash::by_name(squash.name()), Some(squash));
        }
    }

    #[test]
    fn test_sigmoid_values() {
        assert!((Squash::Sigmoid.forward(0.0) - 0.5).abs() < 1e-12);
        // f'(0) = 0.5 * (1 - 0.5)
        assert!((Squash::Sigmoid.derivative(0.0) - 0.25).abs() < 1e-12);
        // saturation
        assert!(Squash::Sigmoid.forward(40.0) > 0.999_999);
        assert!(Squash::Sigmoid.derivative(40.0) < 1e-6);
    }

    #[test]
    fn test_tanh_values() {
        assert_eq!(Squash::Tanh.forward(0.0), 0.0);
        assert!((Squash::Tanh.derivative(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_passthrough() {
        assert_eq!(Squash::Identity.forward(3.25), 3.25);
        assert_eq!(Squash::Identity.derivative(-7.0), 1.0);
    }

    #[test]
    fn test_relu_kink() {
        assert_eq!(Squash::Relu.forward(-1.0), 0.0);
        assert_eq!(Squash::Relu.forward(2.0), 2.0);
        assert_eq!(Squash::Relu.derivative(-1.0), 0.0);
        assert_eq!(Squash::Relu.derivative(2.0), 1.0);
    }
}
