use super::field::FieldElement;
use crate::{Curve, CurveError};

use std::fmt;

/// An affine point on a twisted Edwards curve.
///
/// Points borrow the curve they were built on and can only be obtained
/// through [`Curve::point`], [`Curve::identity`] or the group operations, so
/// every instance satisfies the curve equation.
#[derive(Clone, Debug)]
pub struct Point<'c> {
    x: FieldElement<'c>,
    y: FieldElement<'c>,
    curve: &'c Curve,
}

impl<'c> Point<'c> {
    // NOTE callers are responsible for checking that (x, y) is on the curve
    pub(crate) fn new_unchecked(x: FieldElement<'c>, y: FieldElement<'c>, curve: &'c Curve) -> Self {
        Self { x, y, curve }
    }

    #[inline(always)]
    pub fn x(&self) -> &FieldElement<'c> {
        &self.x
    }

    #[inline(always)]
    pub fn y(&self) -> &FieldElement<'c> {
        &self.y
    }

    #[inline(always)]
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    pub fn is_on_curve(&self) -> bool {
        self.curve.is_on_curve(self.x.inner(), self.y.inner())
    }

    pub fn is_valid(&self) -> bool {
        self.is_on_curve()
    }

    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        Self {
            x: -&self.x,
            y: self.y.clone(),
            curve: self.curve,
        }
    }

    pub fn add(&self, rhs: &Self) -> Result<Self, CurveError> {
        if !self.curve.same_as(rhs.curve) {
            return Err(CurveError::CurveMismatch);
        }

        let a = self.curve.element(self.curve.coeff_a().clone());
        let d = self.curve.element(self.curve.coeff_d().clone());
        let one = FieldElement::one(self.curve.modulus());

        let x1x2 = &self.x * &rhs.x;
        let y1y2 = &self.y * &rhs.y;
        let s = &(&d * &x1x2) * &y1y2;

        let x_num = &(&self.x * &rhs.y) + &(&self.y * &rhs.x);
        let y_num = &y1y2 - &(&a * &x1x2);
        let x_den = (&one + &s)
            .inverse()
            .map_err(|_| CurveError::DegenerateAddition)?;
        let y_den = (&one - &s)
            .inverse()
            .map_err(|_| CurveError::DegenerateAddition)?;

        let sum = Self {
            x: &x_num * &x_den,
            y: &y_num * &y_den,
            curve: self.curve,
        };
        debug_assert!(sum.is_on_curve());
        Ok(sum)
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self, CurveError> {
        self.add(&rhs.negate())
    }

    pub fn double(&self) -> Result<Self, CurveError> {
        self.add(self)
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.x.inner() == other.x.inner()
            && self.y.inner() == other.y.inner()
            && self.curve.same_as(other.curve)
    }
}

impl Eq for Point<'_> {}

impl<'c> std::ops::Neg for &Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'c> std::ops::Neg for Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
