//! Greatest common divisor and modular inverse.

use super::{BigInt, BigIntError};
use std::cmp::Ordering;

impl BigInt {
    /// Binary GCD (HAC 14.54) of `|a|` and `|b|`. `gcd(0, b) = |b|` and
    /// `gcd(a, 0) = |a|`; `gcd(0, 0) = 0`.
    pub fn gcd(a: &BigInt, b: &BigInt) -> Result<BigInt, BigIntError> {
        let mut x = a.clone();
        x.sign = 1;
        let mut y = b.clone();
        y.sign = 1;

        if x.is_zero() {
            return Ok(y);
        }
        if y.is_zero() {
            return Ok(x);
        }

        let shift = x.lsb().min(y.lsb());
        x.shift_r(x.lsb())?;

        loop {
            y.shift_r(y.lsb())?;
            if x.cmp_abs(&y) == Ordering::Greater {
                x.swap(&mut y);
            }
            let prev = y.clone();
            y.sub_abs(&prev, &x)?;
            if y.is_zero() {
                break;
            }
        }

        x.shift_l(shift)?;
        Ok(x)
    }

    /// Modular inverse of `a` mod `n` via the iterative extended
    /// Euclidean algorithm (HAC 14.61): tracks the Bezout coefficient of
    /// `a` alongside the running remainder, without needing the
    /// coefficient of `n`. Requires `n > 1`; returns
    /// [`BigIntError::NotAcceptable`] when `gcd(a, n) != 1`, per the
    /// documented convention that non-invertibility is a recoverable
    /// signal rather than a hard error kind of its own.
    pub fn inv_mod(a: &BigInt, n: &BigInt) -> Result<BigInt, BigIntError> {
        if n.is_zero() || n.is_negative() {
            return Err(BigIntError::BadInput);
        }
        if n.cmp_int(1) == Ordering::Equal {
            return Ok(BigInt::zero());
        }

        let mut old_r = BigInt::mod_mpi(a, n)?;
        let mut r = n.clone();
        let mut old_s = BigInt::from_i64(1);
        let mut s = BigInt::zero();

        while !r.is_zero() {
            let (q, rem) = BigInt::div_mpi(&old_r, &r)?;

            old_r = r.clone();
            r = rem;

            let mut qs = BigInt::zero();
            qs.mul_mpi(&q, &s)?;
            let mut new_s = BigInt::zero();
            new_s.sub_mpi(&old_s, &qs)?;

            old_s = s;
            s = new_s;
        }

        if old_r.cmp_int(1) != Ordering::Equal {
            return Err(BigIntError::NotAcceptable);
        }

        BigInt::mod_mpi(&old_s, n)
    }
}
