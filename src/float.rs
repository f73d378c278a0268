use std::fmt::{Debug, Display};

use num_traits::Float as NumFloat;

/// Primitive floating-point types a [`Dual`](crate::Dual) can be built over.
///
/// Only `f32` and `f64` implement this; `Dual` itself does not.
pub trait Float: NumFloat + Copy + Send + Sync + Default + Debug + Display + 'static {}

impl Float for f32 {}
impl Float for f64 {}
