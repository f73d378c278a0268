//! Forward-mode automatic differentiation of scalar functions.
//!
//! A [`Dual`] carries a value and its derivative through ordinary arithmetic.
//! Seed the evaluation point, run the function, and read the tangent:
//!
//! ```
//! use dualdiff::evaluate;
//!
//! let (value, derivative) = evaluate(|x| x.pow(2.0) + 3.0 * x, 2.0_f64);
//! assert_eq!(value, 10.0);
//! assert_eq!(derivative, 7.0);
//! ```

pub mod api;
pub mod dual;
pub mod error;
pub mod float;
pub mod operand;
mod traits;

pub use api::{derivative, evaluate, AutoDiff};
pub use dual::Dual;
pub use error::{Error, Result};
pub use float::Float;
pub use num_traits::Pow;
pub use operand::Operand;

/// Type alias for dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
