use crate::arithmetic::{modular, FieldElement, Point};
use crate::codec::{self, CompressedPoint};
use crate::CurveError;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

const STARKJUB_COEFF_A: u32 = 146640;
const STARKJUB_COEFF_D: u32 = 146636;
const STARKJUB_ORDER: &[u8] =
    b"452312848583266401712165347886883763197416885958242462530951491185349408851";

/// Decimal coordinates of a fixed non-identity StarkJub point.
pub const STARKJUB_SAMPLE_X: &str =
    "2065699795511519733436237708177164622668357918131020778486714673024550645584";
pub const STARKJUB_SAMPLE_Y: &str =
    "1666035597895264107928948444893966434436309134596180408598119672656400359905";

/// Raw parameters of a twisted Edwards curve `a*x^2 + y^2 = 1 + d*x^2*y^2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    #[serde(with = "crate::parse::decimal")]
    pub modulus: BigUint,
    #[serde(with = "crate::parse::decimal")]
    pub coeff_a: BigUint,
    #[serde(with = "crate::parse::decimal")]
    pub coeff_d: BigUint,
    #[serde(with = "crate::parse::decimal")]
    pub order: BigUint,
}

impl CurveParams {
    /// `p = 2^251 + 17 * 2^192 + 1`, `a = 146640`, `d = 146636`
    pub fn starkjub() -> Self {
        Self {
            modulus: (BigUint::one() << 251u32) + (BigUint::from(17u32) << 192u32) + 1u32,
            coeff_a: BigUint::from(STARKJUB_COEFF_A),
            coeff_d: BigUint::from(STARKJUB_COEFF_D),
            // NOTE unwrap is fine here because the literal is a valid
            // decimal number
            order: BigUint::parse_bytes(STARKJUB_ORDER, 10).unwrap(),
        }
    }
}

/// An immutable curve instance that points borrow.
///
/// Points only combine with points of the very same instance. Two instances
/// built from equal parameters compare equal with `==` but are still
/// different curves for the group operations.
#[derive(Debug, PartialEq, Eq)]
pub struct Curve {
    modulus: BigUint,
    coeff_a: BigUint,
    coeff_d: BigUint,
    order: BigUint,
    bit_width: u64,
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve {
    /// The StarkJub curve.
    pub fn new() -> Self {
        Self::from_params_unchecked(CurveParams::starkjub())
    }

    pub fn from_params(params: CurveParams) -> Result<Self, CurveError> {
        let CurveParams {
            modulus,
            coeff_a,
            coeff_d,
            order,
        } = &params;

        if modulus <= &BigUint::from(3u32) || !modulus.bit(0) {
            return Err(CurveError::InvalidCurve("modulus must be an odd prime above 3"));
        }
        if !modular::is_probable_prime(modulus) {
            return Err(CurveError::InvalidCurve("modulus is not prime"));
        }
        if coeff_a.is_zero() || coeff_a >= modulus {
            return Err(CurveError::InvalidCurve("coefficient a out of range"));
        }
        if coeff_d.is_zero() || coeff_d >= modulus {
            return Err(CurveError::InvalidCurve("coefficient d out of range"));
        }
        if coeff_a == coeff_d {
            return Err(CurveError::InvalidCurve("coefficients a and d must differ"));
        }
        if order.is_zero() {
            return Err(CurveError::InvalidCurve("group order must be positive"));
        }

        Ok(Self::from_params_unchecked(params))
    }

    fn from_params_unchecked(params: CurveParams) -> Self {
        // smallest byte multiple that leaves the top bit free for the sign of x
        let bit_width = (params.modulus.bits() + 1).div_ceil(8) * 8;
        Self {
            modulus: params.modulus,
            coeff_a: params.coeff_a,
            coeff_d: params.coeff_d,
            order: params.order,
            bit_width,
        }
    }

    pub fn params(&self) -> CurveParams {
        CurveParams {
            modulus: self.modulus.clone(),
            coeff_a: self.coeff_a.clone(),
            coeff_d: self.coeff_d.clone(),
            order: self.order.clone(),
        }
    }

    #[inline(always)]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline(always)]
    pub fn coeff_a(&self) -> &BigUint {
        &self.coeff_a
    }

    #[inline(always)]
    pub fn coeff_d(&self) -> &BigUint {
        &self.coeff_d
    }

    #[inline(always)]
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Width of a compressed point in bits.
    #[inline(always)]
    pub fn bit_width(&self) -> u64 {
        self.bit_width
    }

    pub(crate) fn element(&self, number: BigUint) -> FieldElement<'_> {
        FieldElement::new(number, &self.modulus)
    }

    pub(crate) fn same_as(&self, other: &Curve) -> bool {
        std::ptr::eq(self, other)
    }

    pub fn identity(&self) -> Point<'_> {
        Point::new_unchecked(
            FieldElement::zero(&self.modulus),
            FieldElement::one(&self.modulus),
            self,
        )
    }

    /// Checks `a*x^2 + y^2 == 1 + d*x^2*y^2` and that both coordinates are
    /// canonical field elements.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= &self.modulus || y >= &self.modulus {
            return false;
        }
        let x2 = self.element(x * x);
        let y2 = self.element(y * y);
        let a = self.element(self.coeff_a.clone());
        let d = self.element(self.coeff_d.clone());
        let one = FieldElement::one(&self.modulus);

        let lhs = &(&a * &x2) + &y2;
        let rhs = &one + &(&(&d * &x2) * &y2);
        lhs == rhs
    }

    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point<'_>, CurveError> {
        if !self.is_on_curve(&x, &y) {
            return Err(CurveError::NotOnCurve { x, y });
        }
        Ok(Point::new_unchecked(self.element(x), self.element(y), self))
    }

    pub fn decompress(&self, compressed: &CompressedPoint) -> Result<Point<'_>, CurveError> {
        codec::decompress(compressed, self)
    }
}

#[cfg(test)]
impl Curve {
    pub(crate) fn sample_point(&self) -> Point<'_> {
        let x = crate::parse::parse_decimal(STARKJUB_SAMPLE_X).unwrap();
        let y = crate::parse::parse_decimal(STARKJUB_SAMPLE_Y).unwrap();
        self.point(x, y).unwrap()
    }

    /// `x^2 + y^2 = 1 + 3*x^2*y^2` over `F_13`. Here `d` is a square, so the
    /// addition law has exceptional pairs.
    pub(crate) fn incomplete() -> Self {
        Self::from_params(CurveParams {
            modulus: BigUint::from(13u32),
            coeff_a: BigUint::from(1u32),
            coeff_d: BigUint::from(3u32),
            order: BigUint::from(12u32),
        })
        .unwrap()
    }

    pub(crate) fn all_points(&self) -> Vec<Point<'_>> {
        let p = self.modulus.to_u64_digits().first().copied().unwrap_or(0);
        (0..p)
            .flat_map(|x| (0..p).map(move |y| (BigUint::from(x), BigUint::from(y))))
            .filter_map(|(x, y)| self.point(x, y).ok())
            .collect()
    }
}
