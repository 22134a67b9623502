//! Point compression.
//!
//! A point is encoded as a single integer of `curve.bit_width()` bits: the
//! low bits hold `y` and the most significant bit holds the parity of `x`.
//! Decompression recovers `x` from the curve equation
//! `x^2 = (y^2 - 1) / (d*y^2 - a)` and picks the root with the encoded parity.

use crate::arithmetic::{FieldElement, Point};
use crate::parse::parse_hex;
use crate::{Curve, CurveError};

use num_bigint::BigUint;
use num_integer::Integer;
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompressedPoint(#[serde(with = "crate::parse::decimal")] BigUint);

impl CompressedPoint {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Big-endian bytes, left-padded to the curve's encoding width.
    pub fn to_bytes(&self, curve: &Curve) -> Vec<u8> {
        let width = (curve.bit_width() / 8) as usize;
        let raw = self.0.to_bytes_be();
        let mut bytes = vec![0u8; width.saturating_sub(raw.len())];
        bytes.extend_from_slice(&raw);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    pub fn to_hex(&self, curve: &Curve) -> String {
        hex::encode(self.to_bytes(curve))
    }

    pub fn from_hex(encoded: &str) -> Result<Self, CurveError> {
        parse_hex(encoded).map(Self)
    }
}

impl From<BigUint> for CompressedPoint {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for CompressedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Point<'_> {
    pub fn compress(&self) -> CompressedPoint {
        let sign_bit = self.curve().bit_width() - 1;
        let mut encoded = self.y().inner().clone();
        encoded.set_bit(sign_bit, self.x().is_odd());
        CompressedPoint(encoded)
    }
}

pub fn decompress<'c>(
    compressed: &CompressedPoint,
    curve: &'c Curve,
) -> Result<Point<'c>, CurveError> {
    let sign_bit = curve.bit_width() - 1;
    let encoded = compressed.inner();
    if encoded.bits() > curve.bit_width() {
        return Err(CurveError::DecompressionFailure);
    }

    let sign = encoded.bit(sign_bit);
    let mut y = encoded.clone();
    y.set_bit(sign_bit, false);
    if &y >= curve.modulus() {
        return Err(CurveError::DecompressionFailure);
    }

    let y = curve.element(y);
    let one = FieldElement::one(curve.modulus());
    let a = curve.element(curve.coeff_a().clone());
    let d = curve.element(curve.coeff_d().clone());
    let y2 = y.square();
    let u = &y2 - &one;
    let v = &(&d * &y2) - &a;

    let mut x = recover_x(&u, &v, curve.modulus())?;
    if x.is_zero() && sign {
        return Err(CurveError::DecompressionFailure);
    }
    if x.is_odd() != sign {
        x = -x;
    }

    curve
        .point(x.into_inner(), y.into_inner())
        .map_err(|_| CurveError::DecompressionFailure)
}

/// Finds some `x` with `v * x^2 == u`.
fn recover_x<'p>(
    u: &FieldElement<'p>,
    v: &FieldElement<'p>,
    modulus: &'p BigUint,
) -> Result<FieldElement<'p>, CurveError> {
    if modulus.mod_floor(&BigUint::from(8u32)) == BigUint::from(5u32) {
        recover_x_5_mod_8(u, v, modulus)
    } else {
        let v_inv = v.inverse().map_err(|_| CurveError::DecompressionFailure)?;
        let x = (u * &v_inv)
            .sqrt()
            .ok_or(CurveError::DecompressionFailure)?;
        debug_assert_eq!(&(v * &x.square()), u);
        Ok(x)
    }
}

// candidate root z = u * v^3 * (u * v^7)^((p - 5) / 8), corrected by
// sqrt(-1) = 2^((p - 1) / 4) when v * z^2 lands on -u
fn recover_x_5_mod_8<'p>(
    u: &FieldElement<'p>,
    v: &FieldElement<'p>,
    modulus: &'p BigUint,
) -> Result<FieldElement<'p>, CurveError> {
    let exponent = (modulus - 5u32) >> 3;
    let v3 = &v.square() * v;
    let v7 = &v3.square() * v;
    let z = &(u * &v3) * &(u * &v7).pow(&exponent);

    let vz2 = v * &z.square();
    if &vz2 == u {
        Ok(z)
    } else if vz2 == -u {
        let two = FieldElement::new(BigUint::from(2u32), modulus);
        let sqrt_minus_one = two.pow(&((modulus - 1u32) >> 2));
        Ok(&z * &sqrt_minus_one)
    } else {
        Err(CurveError::DecompressionFailure)
    }
}
