use crate::dual::Dual;
use crate::error::{Error, Result};
use crate::float::Float;

/// Evaluate `f` at `point` and return `(f(point), f'(point))`.
///
/// The point is seeded with tangent 1 and passed to `f`; the tangent of the
/// returned dual number is the first derivative.
///
/// ```
/// let (value, derivative) = dualdiff::evaluate(|x| (x + 1.0) * (x - 1.0), 5.0_f64);
/// assert_eq!(value, 24.0);
/// assert_eq!(derivative, 10.0);
/// ```
pub fn evaluate<F: Float>(f: impl FnOnce(Dual<F>) -> Dual<F>, point: F) -> (F, F) {
    f(Dual::seed(point)).into_parts()
}

/// First derivative of `f` at `point`.
pub fn derivative<F: Float>(f: impl FnOnce(Dual<F>) -> Dual<F>, point: F) -> F {
    evaluate(f, point).1
}

/// Differentiation driver with an explicit derivative order.
///
/// Only first order is implemented. The order is validated on every call,
/// before the user function runs, so an unsupported order is rejected the
/// same way each time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoDiff {
    #[cfg_attr(feature = "serde", serde(default = "AutoDiff::default_order"))]
    order: u32,
}

impl Default for AutoDiff {
    fn default() -> Self {
        AutoDiff {
            order: Self::SUPPORTED_ORDER,
        }
    }
}

impl AutoDiff {
    /// The only derivative order the driver computes.
    pub const SUPPORTED_ORDER: u32 = 1;

    /// First-order driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver configured for `order`. Construction always succeeds; an
    /// unsupported order is reported by [`AutoDiff::auto_diff`].
    pub fn with_order(order: u32) -> Self {
        AutoDiff { order }
    }

    #[cfg(feature = "serde")]
    fn default_order() -> u32 {
        Self::SUPPORTED_ORDER
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Seed `point`, run `f` on it and return the resulting dual number.
    pub fn auto_diff<F: Float>(
        &self,
        f: impl FnOnce(Dual<F>) -> Dual<F>,
        point: F,
    ) -> Result<Dual<F>> {
        if self.order != Self::SUPPORTED_ORDER {
            log::warn!(
                "rejecting derivative order {} (supported: {})",
                self.order,
                Self::SUPPORTED_ORDER
            );
            return Err(Error::UnsupportedOrder {
                requested: self.order,
                supported: Self::SUPPORTED_ORDER,
            });
        }
        log::debug!("seeding evaluation point {}", point);
        Ok(f(Dual::seed(point)))
    }
}
