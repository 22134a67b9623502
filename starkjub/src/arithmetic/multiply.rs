use super::point::Point;
use crate::CurveError;

use num_bigint::{BigInt, BigUint};

impl<'c> Point<'c> {
    /// Computes `scalar * self` with binary double-and-add.
    ///
    /// Runs in variable time with respect to the bits of `scalar`, so it must
    /// not be used with secret scalars.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Result<Self, CurveError> {
        let scalar = scalar.to_biguint().ok_or(CurveError::InvalidScalar)?;
        self.scalar_mul_unsigned(&scalar)
    }

    pub fn scalar_mul_unsigned(&self, scalar: &BigUint) -> Result<Self, CurveError> {
        let mut result = self.curve().identity();
        let mut addend = self.clone();
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                result = result.add(&addend)?;
            }
            addend = addend.double()?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use crate::{Curve, CurveError, Point};

    use num_bigint::{BigInt, BigUint};

    fn mul<'c>(point: &Point<'c>, k: i64) -> Result<Point<'c>, CurveError> {
        point.scalar_mul(&BigInt::from(k))
    }

    #[test]
    fn scalar_multiplication() {
        let curve = Curve::new();
        let p = curve.sample_point();

        assert_eq!(mul(&p, 0).unwrap(), curve.identity());
        assert_eq!(mul(&p, 1).unwrap(), p);
        assert_eq!(mul(&p, 2).unwrap(), p.double().unwrap());

        let mut p12 = curve.identity();
        for _ in 0..12 {
            p12 = p12.add(&p).unwrap();
        }
        assert_eq!(mul(&p, 12).unwrap(), p12);

        let p11 = mul(&p, 11).unwrap();
        let p4 = mul(&p, 4).unwrap();
        let p7 = mul(&p, 7).unwrap();
        assert_eq!(p11, p4.add(&p7).unwrap());
        assert!(p11.is_on_curve());
    }

    #[test]
    fn identity_multiples() {
        let curve = Curve::new();
        let id = curve.identity();
        assert_eq!(mul(&id, 0).unwrap(), id);
        assert_eq!(mul(&id, 12345).unwrap(), id);
    }

    #[test]
    fn negative_scalar() {
        let curve = Curve::new();
        let p = curve.sample_point();
        assert_eq!(mul(&p, -1), Err(CurveError::InvalidScalar));
        assert_eq!(mul(&curve.identity(), -7), Err(CurveError::InvalidScalar));
    }

    #[test]
    fn unsigned_entry_point() {
        let curve = Curve::new();
        let p = curve.sample_point();
        let k = BigUint::from(0xdead_beef_u64);
        assert_eq!(
            p.scalar_mul_unsigned(&k).unwrap(),
            p.scalar_mul(&BigInt::from(0xdead_beef_u64)).unwrap()
        );
    }

    #[test]
    fn degenerate_doubling_is_reported() {
        let curve = Curve::incomplete();
        let p = curve.point(BigUint::from(4u32), BigUint::from(6u32)).unwrap();

        assert_eq!(mul(&p, 0).unwrap(), curve.identity());
        // every processed bit doubles the addend, including the last one
        assert_eq!(mul(&p, 1), Err(CurveError::DegenerateAddition));
        assert_eq!(mul(&p, 2), Err(CurveError::DegenerateAddition));
    }
}
