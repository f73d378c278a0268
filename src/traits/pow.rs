//! `num_traits::Pow` for dual numbers, standing in for a `**` operator.
//!
//! A constant base raised to a dual exponent is supported (`2.0.pow(x)`), but
//! there is no separate rule for a dual base seen from the exponent's side:
//! `Dual ^ Dual` always goes through [`Dual::pow`].

use num_traits::Pow;

use crate::dual::Dual;
use crate::float::Float;

impl<F: Float> Pow<Dual<F>> for Dual<F> {
    type Output = Self;
    #[inline]
    fn pow(self, rhs: Dual<F>) -> Self {
        Dual::pow(self, rhs)
    }
}

impl<F: Float> Pow<i32> for Dual<F> {
    type Output = Self;
    #[inline]
    fn pow(self, rhs: i32) -> Self {
        Dual::pow(self, rhs)
    }
}

macro_rules! impl_dual_scalar_pow {
    ($f:ty) => {
        impl Pow<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn pow(self, rhs: $f) -> Dual<$f> {
                Dual::pow(self, rhs)
            }
        }

        impl Pow<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn pow(self, rhs: Dual<$f>) -> Dual<$f> {
                rhs.rpow(self)
            }
        }
    };
}

impl_dual_scalar_pow!(f32);
impl_dual_scalar_pow!(f64);
