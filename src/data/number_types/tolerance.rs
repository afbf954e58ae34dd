//! Comparing floating point values during the simplex method.
//!
//! All sign tests and comparisons made while pivoting go through a `Tolerance`. The exact tolerance
//! compares raw values, which makes results near ties or near zero pivots sensitive to rounding.
use num_traits::Float;

/// An epsilon-aware comparator.
///
/// A value is negative if it is below `-epsilon`, positive if above `epsilon`, and `a` is less than
/// `b` if `a < b - epsilon`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance<F> {
    epsilon: F,
}

impl<F: Float> Tolerance<F> {
    /// Compare raw values, without any margin.
    pub fn exact() -> Self {
        Self { epsilon: F::zero() }
    }

    /// Compare with a margin.
    ///
    /// # Return value
    ///
    /// `None` if `epsilon` is negative, infinite or NaN.
    pub fn new(epsilon: F) -> Option<Self> {
        if epsilon.is_finite() && epsilon >= F::zero() {
            Some(Self { epsilon })
        } else {
            None
        }
    }

    /// The margin used in comparisons.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Whether `value < -epsilon`.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.epsilon
    }

    /// Whether `value > epsilon`.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.epsilon
    }

    /// Whether `left < right - epsilon`.
    pub fn is_less(&self, left: F, right: F) -> bool {
        left < right - self.epsilon
    }
}

impl<F: Float> Default for Tolerance<F> {
    fn default() -> Self {
        Self::exact()
    }
}
