//! Right-hand operands of dual-number arithmetic.
//!
//! Every binary operation on a [`Dual`] accepts either another dual number or
//! a plain real. The two cases are kept apart by [`Operand`] so that each rule
//! matches on them explicitly; a plain real is always a constant with zero
//! tangent, never a second independent variable.

use crate::dual::Dual;
use crate::float::Float;

/// Either a dual number or a constant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand<F: Float> {
    /// A value carrying its own tangent.
    Dual(Dual<F>),
    /// A plain real with implicit zero tangent.
    Constant(F),
}

impl<F: Float> Operand<F> {
    /// Primal value of the operand.
    #[inline]
    pub fn value(&self) -> F {
        match *self {
            Operand::Dual(d) => d.value,
            Operand::Constant(c) => c,
        }
    }

    /// Tangent of the operand; zero for constants.
    #[inline]
    pub fn tangent(&self) -> F {
        match *self {
            Operand::Dual(d) => d.tangent,
            Operand::Constant(_) => F::zero(),
        }
    }

    /// Widen to a dual number, giving constants a zero tangent.
    #[inline]
    pub fn into_dual(self) -> Dual<F> {
        match self {
            Operand::Dual(d) => d,
            Operand::Constant(c) => Dual::constant(c),
        }
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant(_))
    }

    /// `(-1) * self`, keeping the operand kind.
    #[inline]
    pub(crate) fn negated(self) -> Self {
        let minus_one = -F::one();
        match self {
            Operand::Dual(d) => Operand::Dual(d.mul_operand(minus_one)),
            Operand::Constant(c) => Operand::Constant(c * minus_one),
        }
    }

    /// `self ^ (-1)`, keeping the operand kind.
    #[inline]
    pub(crate) fn reciprocal(self) -> Self {
        let minus_one = -F::one();
        match self {
            Operand::Dual(d) => Operand::Dual(d.pow(minus_one)),
            Operand::Constant(c) => Operand::Constant(c.powf(minus_one)),
        }
    }
}

impl<F: Float> From<Dual<F>> for Operand<F> {
    #[inline]
    fn from(d: Dual<F>) -> Self {
        Operand::Dual(d)
    }
}

impl<F: Float> From<F> for Operand<F> {
    #[inline]
    fn from(c: F) -> Self {
        Operand::Constant(c)
    }
}

/// Integer literals are constants too, so `x.pow(2)` works.
impl<F: Float> From<i32> for Operand<F> {
    #[inline]
    fn from(n: i32) -> Self {
        // Every i32 is representable (possibly rounded) in f32 and f64.
        Operand::Constant(F::from(n).unwrap_or_else(F::nan))
    }
}
