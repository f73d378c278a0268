use std::fmt::{self, Display};

use crate::float::Float;
use crate::operand::Operand;

/// Forward-mode dual number: a primal value paired with its tangent.
///
/// `Dual { value, tangent }` is the first-order Taylor expansion
/// `value + tangent·ε` with `ε² = 0`. Every operation returns a fresh value;
/// nothing is mutated in place, so results can be shared freely.
///
/// Equality compares both components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<F: Float> {
    /// Primal value.
    pub value: F,
    /// Tangent (derivative) value.
    pub tangent: F,
}

impl<F: Float> Display for Dual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.tangent)
    }
}

impl<F: Float> Dual<F> {
    /// Seed an evaluation point: the identity function at `point`, tangent 1.
    ///
    /// Use this only to inject the variable being differentiated. Results of
    /// arithmetic are built with [`Dual::raw`] and never reseeded.
    #[inline]
    pub fn seed(point: F) -> Self {
        Dual {
            value: point,
            tangent: F::one(),
        }
    }

    /// Create a dual number from explicit components.
    #[inline]
    pub fn raw(value: F, tangent: F) -> Self {
        Dual { value, tangent }
    }

    /// Create a constant (zero tangent).
    #[inline]
    pub fn constant(value: F) -> Self {
        Dual {
            value,
            tangent: F::zero(),
        }
    }

    #[inline]
    pub fn value(&self) -> F {
        self.value
    }

    #[inline]
    pub fn tangent(&self) -> F {
        self.tangent
    }

    /// Split into `(value, tangent)`.
    #[inline]
    pub fn into_parts(self) -> (F, F) {
        (self.value, self.tangent)
    }

    // ── Arithmetic core ──
    //
    // Only add, mul and pow carry derivative rules. Subtraction and division
    // are compositions of them and must stay that way.

    /// `self + other`.
    #[inline]
    pub fn add_operand(self, other: impl Into<Operand<F>>) -> Self {
        let other: Operand<F> = other.into();
        match other {
            Operand::Dual(o) => Dual::raw(self.value + o.value, self.tangent + o.tangent),
            Operand::Constant(c) => Dual::raw(self.value + c, self.tangent),
        }
    }

    /// `self - other`, computed as `self + (-1)·other`.
    #[inline]
    pub fn sub_operand(self, other: impl Into<Operand<F>>) -> Self {
        let other: Operand<F> = other.into();
        self.add_operand(other.negated())
    }

    /// `self · other` (product rule).
    #[inline]
    pub fn mul_operand(self, other: impl Into<Operand<F>>) -> Self {
        let other: Operand<F> = other.into();
        match other {
            Operand::Dual(o) => Dual::raw(
                self.value * o.value,
                self.tangent * o.value + self.value * o.tangent,
            ),
            Operand::Constant(c) => Dual::raw(self.value * c, self.tangent * c),
        }
    }

    /// `self / other`, computed as `self · other^(-1)`.
    ///
    /// A zero divisor is not guarded against: the result carries whatever
    /// infinities or NaN the float division produces.
    #[inline]
    pub fn div_operand(self, other: impl Into<Operand<F>>) -> Self {
        let other: Operand<F> = other.into();
        self.mul_operand(other.reciprocal())
    }

    /// `self ^ exponent`.
    ///
    /// With a constant exponent `c` this is the power rule
    /// `(v^c, c·v^(c-1)·t)`. With a dual exponent the generalised rule
    /// `d(u^w) = w·u^(w-1)·du + u^w·ln(u)·dw` is used; `ln(u)` is evaluated
    /// even when `dw = 0`, so a non-positive base yields NaN in the tangent.
    /// That is a domain restriction of the rule and is left to the float
    /// semantics.
    #[inline]
    pub fn pow(self, exponent: impl Into<Operand<F>>) -> Self {
        let one = F::one();
        let exponent: Operand<F> = exponent.into();
        match exponent {
            Operand::Dual(w) => {
                let p = self.value.powf(w.value);
                Dual::raw(
                    p,
                    w.value * self.value.powf(w.value - one) * self.tangent
                        + p * self.value.ln() * w.tangent,
                )
            }
            Operand::Constant(c) => Dual::raw(
                self.value.powf(c),
                c * self.value.powf(c - one) * self.tangent,
            ),
        }
    }

    // ── Reflected forms (constant on the left) ──

    /// `lhs - self`, computed as `(-1)·self + lhs`.
    #[inline]
    pub fn rsub(self, lhs: F) -> Self {
        self.mul_operand(-F::one()).add_operand(lhs)
    }

    /// `lhs / self`, computed as `self^(-1) · lhs`.
    #[inline]
    pub fn rdiv(self, lhs: F) -> Self {
        self.pow(-F::one()).mul_operand(lhs)
    }

    /// `base ^ self` for a constant base.
    ///
    /// Only a constant base is handled here; a dual base goes through
    /// [`Dual::pow`]. Requires `base > 0` for a finite tangent.
    #[inline]
    pub fn rpow(self, base: F) -> Self {
        let p = base.powf(self.value);
        Dual::raw(p, p * base.ln() * self.tangent)
    }

    /// Unary plus. Returns a copy with identical components.
    #[inline]
    pub fn pos(self) -> Self {
        Dual::raw(self.value, self.tangent)
    }

    // ── Elementary functions ──

    /// Apply the chain rule: given `f(self.value)` and `f'(self.value)`.
    #[inline]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        Dual::raw(f_val, self.tangent * f_deriv)
    }

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.value.ln(), F::one() / self.value)
    }

    /// Logarithm in an arbitrary (possibly dual) base: `ln(self) / ln(base)`.
    #[inline]
    pub fn log(self, base: impl Into<Operand<F>>) -> Self {
        let base: Operand<F> = base.into();
        self.ln().div_operand(base.into_dual().ln())
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.value.sqrt();
        let two = F::one() + F::one();
        self.chain(s, F::one() / (two * s))
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }

    #[inline]
    pub fn tan(self) -> Self {
        let c = self.value.cos();
        self.chain(self.value.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.value.tanh();
        self.chain(t, F::one() - t * t)
    }
}
