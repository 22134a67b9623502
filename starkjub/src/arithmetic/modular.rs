use crate::CurveError;

use num_bigint::BigUint;
use num_traits::{One, Zero};

const MILLER_RABIN_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Multiplicative inverse of `x` modulo the prime `modulus`, computed via
/// Fermat's little theorem as `x^(p-2) mod p`.
pub fn invert(x: &BigUint, modulus: &BigUint) -> Result<BigUint, CurveError> {
    let reduced = x % modulus;
    if reduced.is_zero() {
        return Err(CurveError::NoInverse);
    }
    Ok(reduced.modpow(&(modulus - 2u32), modulus))
}

pub fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// Euler's criterion. Zero counts as a residue.
pub fn is_quadratic_residue(number: &BigUint, modulus: &BigUint) -> bool {
    let reduced = number % modulus;
    if reduced.is_zero() {
        return true;
    }
    reduced.modpow(&((modulus - 1u32) >> 1), modulus).is_one()
}

fn quadratic_non_residue(modulus: &BigUint) -> BigUint {
    let mut candidate = BigUint::from(2u32);
    while is_quadratic_residue(&candidate, modulus) {
        candidate += 1u32;
    }
    candidate
}

/// Tonelli-Shanks square root modulo an odd prime.
///
/// Returns one of the two roots, or `None` if `number` is a non-residue.
pub fn sqrt(number: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let number = number % modulus;
    if number.is_zero() {
        return Some(number);
    }
    if !is_quadratic_residue(&number, modulus) {
        return None;
    }

    // modulus - 1 = q * 2^s with q odd
    let p_minus_one = modulus - 1u32;
    let s = p_minus_one.trailing_zeros()?;
    let q = &p_minus_one >> s;

    let mut m = s;
    let mut c = quadratic_non_residue(modulus).modpow(&q, modulus);
    let mut t = number.modpow(&q, modulus);
    let mut r = number.modpow(&((&q + 1u32) >> 1), modulus);

    while !t.is_one() {
        // least i with t^(2^i) == 1
        let mut i = 0;
        let mut t_pow = t.clone();
        while !t_pow.is_one() {
            t_pow = &t_pow * &t_pow % modulus;
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..m - i - 1 {
            b = &b * &b % modulus;
        }
        m = i;
        c = &b * &b % modulus;
        t = t * &c % modulus;
        r = r * &b % modulus;
    }

    Some(r)
}

/// Miller-Rabin over a fixed set of small prime bases.
pub fn is_probable_prime(number: &BigUint) -> bool {
    if number < &BigUint::from(2u32) {
        return false;
    }
    for base in MILLER_RABIN_BASES {
        let base = BigUint::from(base);
        if number == &base {
            return true;
        }
        if (number % &base).is_zero() {
            return false;
        }
    }

    let n_minus_one = number - 1u32;
    // NOTE number is odd here, so n - 1 is even and non-zero
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for base in MILLER_RABIN_BASES {
        let mut x = BigUint::from(base).modpow(&d, number);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = &x * &x % number;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;

    fn big(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn inversion() {
        let p = big(17);
        assert_eq!(invert(&big(3), &p), Ok(big(6)));
        assert_eq!(invert(&big(20), &p), Ok(big(6)));
        assert_eq!(invert(&big(1), &p), Ok(big(1)));
        assert_eq!(invert(&big(0), &p), Err(CurveError::NoInverse));
        assert_eq!(invert(&big(34), &p), Err(CurveError::NoInverse));

        let stark = (BigUint::one() << 251u32) + (big(17) << 192u32) + 1u32;
        let x = big(146636);
        let x_inv = invert(&x, &stark).unwrap();
        assert!((x * x_inv % &stark).is_one());
    }

    #[test]
    fn exponentiation() {
        assert_eq!(pow_mod(&big(3), &big(4), &big(17)), big(13));
        assert_eq!(pow_mod(&big(5), &big(0), &big(17)), big(1));
    }

    #[test]
    fn residues() {
        // squares modulo 17
        let residues = [1, 2, 4, 8, 9, 13, 15, 16];
        for n in 1..17u32 {
            assert_eq!(
                is_quadratic_residue(&big(n), &big(17)),
                residues.contains(&n)
            );
        }
        assert!(is_quadratic_residue(&big(0), &big(17)));
    }

    #[test]
    fn square_roots() {
        // 17 = 1 mod 8, 13 = 5 mod 8, 23 = 3 mod 4
        for p in [17u32, 13, 23, 41] {
            let modulus = big(p);
            for n in 0..p {
                let n = big(n);
                match sqrt(&n, &modulus) {
                    Some(root) => assert_eq!(&root * &root % &modulus, n),
                    None => assert!(!is_quadratic_residue(&n, &modulus)),
                }
            }
        }
        assert_eq!(sqrt(&big(3), &big(17)), None);

        let stark = (BigUint::one() << 251u32) + (big(17) << 192u32) + 1u32;
        let square = big(123456789) * big(123456789);
        let root = sqrt(&square, &stark).unwrap();
        assert!(root == big(123456789) || root == &stark - big(123456789));
    }

    #[test]
    fn primality() {
        assert!(is_probable_prime(&big(2)));
        assert!(is_probable_prime(&big(17)));
        assert!(is_probable_prime(&big(7919)));
        assert!(!is_probable_prime(&big(0)));
        assert!(!is_probable_prime(&big(1)));
        assert!(!is_probable_prime(&big(561)));
        assert!(!is_probable_prime(&big(7917)));

        let stark = (BigUint::one() << 251u32) + (big(17) << 192u32) + 1u32;
        assert!(is_probable_prime(&stark));
        let ed25519 = (BigUint::one() << 255u32) - 19u32;
        assert!(is_probable_prime(&ed25519));
        assert!(!is_probable_prime(&(&ed25519 * &stark)));
    }
}
