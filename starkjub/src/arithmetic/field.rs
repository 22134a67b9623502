use super::modular;
use crate::CurveError;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use std::fmt;

/// A residue in `[0, modulus)` bound to the modulus it was reduced by.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement<'p> {
    value: BigUint,
    modulus: &'p BigUint,
}

impl<'p> FieldElement<'p> {
    pub fn new(number: BigUint, modulus: &'p BigUint) -> Self {
        let value = if &number < modulus {
            number
        } else {
            number % modulus
        };

        Self { value, modulus }
    }

    pub fn zero(modulus: &'p BigUint) -> Self {
        Self {
            value: BigUint::zero(),
            modulus,
        }
    }

    pub fn one(modulus: &'p BigUint) -> Self {
        Self::new(BigUint::one(), modulus)
    }

    #[inline(always)]
    pub fn inner(&self) -> &BigUint {
        &self.value
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }

    #[inline(always)]
    pub fn modulus(&self) -> &'p BigUint {
        self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Parity of the canonical representative.
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self {
            value: modular::pow_mod(&self.value, exponent, self.modulus),
            modulus: self.modulus,
        }
    }

    pub fn inverse(&self) -> Result<Self, CurveError> {
        Ok(Self {
            value: modular::invert(&self.value, self.modulus)?,
            modulus: self.modulus,
        })
    }

    pub fn sqrt(&self) -> Option<Self> {
        modular::sqrt(&self.value, self.modulus).map(|value| Self {
            value,
            modulus: self.modulus,
        })
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<'p> std::ops::Add<&FieldElement<'p>> for &FieldElement<'p> {
    type Output = FieldElement<'p>;
    fn add(self, rhs: &FieldElement<'p>) -> Self::Output {
        debug_assert_eq!(self.modulus, rhs.modulus);
        FieldElement::new(&self.value + &rhs.value, self.modulus)
    }
}

impl<'p> std::ops::Add for FieldElement<'p> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<'p> std::ops::Sub<&FieldElement<'p>> for &FieldElement<'p> {
    type Output = FieldElement<'p>;
    fn sub(self, rhs: &FieldElement<'p>) -> Self::Output {
        debug_assert_eq!(self.modulus, rhs.modulus);
        // both operands are already reduced, so adding the modulus once
        // keeps the difference non-negative
        FieldElement::new(&self.value + self.modulus - &rhs.value, self.modulus)
    }
}

impl<'p> std::ops::Sub for FieldElement<'p> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<'p> std::ops::Mul<&FieldElement<'p>> for &FieldElement<'p> {
    type Output = FieldElement<'p>;
    fn mul(self, rhs: &FieldElement<'p>) -> Self::Output {
        debug_assert_eq!(self.modulus, rhs.modulus);
        FieldElement::new(&self.value * &rhs.value, self.modulus)
    }
}

impl<'p> std::ops::Mul for FieldElement<'p> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<'p> std::ops::Neg for &FieldElement<'p> {
    type Output = FieldElement<'p>;
    fn neg(self) -> Self::Output {
        if self.is_zero() {
            self.clone()
        } else {
            FieldElement {
                value: self.modulus - &self.value,
                modulus: self.modulus,
            }
        }
    }
}

impl<'p> std::ops::Neg for FieldElement<'p> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}
