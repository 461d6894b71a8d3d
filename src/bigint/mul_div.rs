//! Multiplicative layer: schoolbook multiplication, HAC 14.20 long
//! division, and reduction modulo a `BigInt` or a small integer.

use super::digit::{div_double, muladdc, DoubleLimb, Limb, LIMB_BITS};
use super::{BigInt, BigIntError};
use std::cmp::Ordering;

impl BigInt {
    /// `self = a * b` (signed). Allocates `|a| + |b|` limbs for the
    /// result and drives [`super::digit::muladdc`] once per limb of `b`.
    pub fn mul_mpi(&mut self, a: &BigInt, b: &BigInt) -> Result<(), BigIntError> {
        let (a, b) = self.stage_if_aliased(a, b)?;

        let n_a = a.sig_len();
        let n_b = b.sig_len();
        if n_a == 0 || n_b == 0 {
            self.limbs.clear();
            self.sign = 1;
            return Ok(());
        }

        let mut result = vec![0 as Limb; n_a + n_b];
        for j in 0..n_b {
            muladdc(&a.limbs[..n_a], &mut result[j..], b.limbs[j]);
        }

        self.limbs = result;
        self.sign = a.sign() * b.sign();
        self.canonicalize_sign();
        Ok(())
    }

    /// `self = a * w` for a single-limb scalar `w`, used internally by
    /// long division's trial-subtraction step.
    fn mul_scalar(&mut self, a: &BigInt, w: Limb) -> Result<(), BigIntError> {
        let scalar = BigInt::from_parts(1, vec![w]);
        self.mul_mpi(a, &scalar)
    }

    /// Implements HAC Algorithm 14.20 on absolute values: `x = q*y + r`,
    /// `0 <= r < y`. Requires `y` nonzero and `x >= y`; the caller handles
    /// the zero and `x < y` short-circuits.
    fn divmod_abs(x_in: &BigInt, y_in: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        let limb_bits = LIMB_BITS as usize;

        let mut x = x_in.clone();
        let mut y = y_in.clone();
        x.sign = 1;
        y.sign = 1;

        // Normalize so Y's top bit sits at the limb's most significant
        // position.
        let y_bits = y.msb();
        let top_bit_in_limb = y_bits % limb_bits;
        let shift = if top_bit_in_limb != 0 {
            limb_bits - top_bit_in_limb
        } else {
            0
        };
        x.shift_l(shift)?;
        y.shift_l(shift)?;

        let n = x.sig_len() - 1;
        let t = y.sig_len() - 1;

        x.grow(n + 2)?;

        let mut quotient = vec![0 as Limb; n - t + 1];

        // Top quotient limb: align Y to X's top limb and repeatedly
        // subtract.
        let mut y_aligned = y.clone();
        y_aligned.shift_l(limb_bits * (n - t))?;
        while x.cmp_abs(&y_aligned) != Ordering::Less {
            quotient[n - t] += 1;
            let prev = x.clone();
            x.sub_abs(&prev, &y_aligned)?;
            x.grow(n + 2)?;
        }

        for i in (t + 1..=n).rev() {
            x.grow(n + 2)?;
            let xi = x.limbs[i];
            let xi1 = x.limbs[i - 1];
            let xi2 = if i >= 2 { x.limbs[i - 2] } else { 0 };
            let yt = y.limbs[t];
            let yt1 = if t >= 1 { y.limbs[t - 1] } else { 0 };

            let (mut qhat, mut rhat): (DoubleLimb, DoubleLimb) = if xi >= yt {
                let num = ((xi as DoubleLimb) << LIMB_BITS) | xi1 as DoubleLimb;
                let qhat = Limb::MAX as DoubleLimb;
                (qhat, num - qhat * yt as DoubleLimb)
            } else {
                let (q, r) = div_double(xi, xi1, yt);
                (q as DoubleLimb, r as DoubleLimb)
            };

            // 2^W, representable without overflow since DoubleLimb holds 2*W bits.
            let b: DoubleLimb = (1 as DoubleLimb) << LIMB_BITS;
            loop {
                let lhs = qhat * yt1 as DoubleLimb;
                let rhs = b * rhat + xi2 as DoubleLimb;
                if qhat >= b || lhs > rhs {
                    qhat -= 1;
                    rhat += yt as DoubleLimb;
                    if rhat >= b {
                        break;
                    }
                } else {
                    break;
                }
            }

            let qhat = qhat as Limb;
            let shift_limbs = i - t - 1;

            let mut term = BigInt::zero();
            term.mul_scalar(&y, qhat)?;
            term.shift_l(limb_bits * shift_limbs)?;

            let final_qhat = if x.cmp_abs(&term) == Ordering::Less {
                let mut y_shifted = y.clone();
                y_shifted.shift_l(limb_bits * shift_limbs)?;
                let prev = term.clone();
                term.sub_abs(&prev, &y_shifted)?;
                qhat - 1
            } else {
                qhat
            };

            let prev = x.clone();
            x.sub_abs(&prev, &term)?;
            quotient[shift_limbs] = final_qhat;
        }

        x.shift_r(shift)?;
        let quotient = BigInt::from_parts(1, quotient);
        Ok((quotient, x))
    }

    /// Signed division: `a = q*b + r`, `0 <= |r| < |b|`,
    /// `sign(q) = sign(a)*sign(b)`, `sign(r) = sign(a)` (canonicalized to
    /// `+1` when `r` is zero). Returns `DivisionByZero` if `b` is zero.
    pub fn div_mpi(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if b.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if a.cmp_abs(b) == Ordering::Less {
            let mut r = BigInt::zero();
            r.copy_from(a)?;
            return Ok((BigInt::zero(), r));
        }

        let (mut q, mut r) = BigInt::divmod_abs(a, b)?;
        q.sign = a.sign() * b.sign();
        r.sign = a.sign();
        q.canonicalize_sign();
        r.canonicalize_sign();
        Ok((q, r))
    }

    /// `a = q*b + r` for a small signed integer divisor `b`, wrapping
    /// [`BigInt::div_mpi`] via a synthesized one-limb operand. Unlike
    /// [`BigInt::mod_int`], this does not reject a negative `b`.
    pub fn div_int(a: &BigInt, b: i64) -> Result<(BigInt, BigInt), BigIntError> {
        let b_bi = BigInt::from_i64(b);
        BigInt::div_mpi(a, &b_bi)
    }

    /// `a mod b`, canonicalized into `[0, b)`. Requires `b > 0`.
    pub fn mod_mpi(a: &BigInt, b: &BigInt) -> Result<BigInt, BigIntError> {
        if b.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if b.is_negative() {
            return Err(BigIntError::NegativeValue);
        }

        let (_q, mut r) = BigInt::div_mpi(a, b)?;

        while r.is_negative() {
            let prev = r.clone();
            r.add_mpi(&prev, b)?;
        }
        while r.cmp_abs(b) != Ordering::Less {
            let prev = r.clone();
            r.sub_abs(&prev, b)?;
        }
        r.canonicalize_sign();
        Ok(r)
    }

    /// `a mod b` for a small positive integer divisor `b`, computed by
    /// folding the limbs of `a` top-down through a single-limb divide per
    /// limb. Requires `b > 0`; returns `NegativeValue` otherwise - this
    /// is the one place the small-integer and `BigInt` modulo entry
    /// points are intentionally asymmetric with `div_int`, which accepts
    /// a negative divisor.
    pub fn mod_int(a: &BigInt, b: i64) -> Result<Limb, BigIntError> {
        if b <= 0 {
            return Err(BigIntError::NegativeValue);
        }
        if (b as u128) > Limb::MAX as u128 {
            return Err(BigIntError::BadInput);
        }
        let divisor = b as Limb;

        let mut rem: Limb = 0;
        for &limb in a.sig_limbs().iter().rev() {
            let (_q, r) = div_double(rem, limb, divisor);
            rem = r;
        }

        if a.is_negative() && rem != 0 {
            rem = divisor - rem;
        }
        Ok(rem)
    }
}
