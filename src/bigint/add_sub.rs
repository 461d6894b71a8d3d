//! Additive layer: unsigned and signed add/subtract, against another
//! `BigInt` or against a small signed integer.
//!
//! Every method here writes its result into `self` and accepts aliasing
//! between `self` and either input operand (`self.add_mpi(&a_clone_of_self, b)`
//! works correctly): inputs are cloned into local temporaries up front, so
//! a write into `self` can never clobber an operand still being read.

use super::digit::{add_limb_carry, DoubleLimb, Limb, LIMB_BITS};
use super::{BigInt, BigIntError};

impl BigInt {
    /// `self = |a| + |b|` (magnitudes only; result sign is always `+1`).
    pub fn add_abs(&mut self, a: &BigInt, b: &BigInt) -> Result<(), BigIntError> {
        let (a, b) = self.stage_if_aliased(a, b)?;

        let (big, small) = if a.sig_len() >= b.sig_len() {
            (&a, &b)
        } else {
            (&b, &a)
        };

        let n_big = big.sig_len();
        let n_small = small.sig_len();

        let mut limbs = vec![0 as Limb; n_big];
        limbs[..n_big].copy_from_slice(&big.limbs[..n_big]);

        let mut carry: DoubleLimb = 0;
        for i in 0..n_small {
            let sum = limbs[i] as DoubleLimb + small.limbs[i] as DoubleLimb + carry;
            limbs[i] = sum as Limb;
            carry = sum >> LIMB_BITS;
        }
        if carry != 0 {
            let tail_carry = add_limb_carry(&mut limbs[n_small..], carry as Limb);
            if tail_carry != 0 {
                limbs.push(tail_carry);
            }
        }

        self.limbs = limbs;
        self.sign = 1;
        Ok(())
    }

    /// `self = |a| - |b|`. Requires `|a| >= |b|`; otherwise returns
    /// `NegativeValue`.
    pub fn sub_abs(&mut self, a: &BigInt, b: &BigInt) -> Result<(), BigIntError> {
        let (a, b) = self.stage_if_aliased(a, b)?;

        if a.cmp_abs(&b) == std::cmp::Ordering::Less {
            return Err(BigIntError::NegativeValue);
        }

        let n = a.sig_len();
        let mut limbs = vec![0 as Limb; n];
        let mut borrow: i128 = 0;

        for i in 0..n {
            let bi = if i < b.sig_len() { b.limbs[i] } else { 0 };
            let diff = a.limbs[i] as i128 - bi as i128 - borrow;
            if diff < 0 {
                limbs[i] = (diff + (1i128 << LIMB_BITS)) as Limb;
                borrow = 1;
            } else {
                limbs[i] = diff as Limb;
                borrow = 0;
            }
        }

        self.limbs = limbs;
        self.sign = 1;
        self.canonicalize_sign();
        Ok(())
    }

    /// Signed `self = a + b`: same-sign operands unsigned-add; opposite
    /// signs unsigned-subtract the smaller magnitude from the larger,
    /// with the result sign taken from the larger-magnitude operand.
    pub fn add_mpi(&mut self, a: &BigInt, b: &BigInt) -> Result<(), BigIntError> {
        let (a, b) = self.stage_if_aliased(a, b)?;

        if a.sign() == b.sign() {
            self.add_abs(&a, &b)?;
            self.sign = a.sign();
        } else if a.cmp_abs(&b) != std::cmp::Ordering::Less {
            self.sub_abs(&a, &b)?;
            self.sign = a.sign();
        } else {
            self.sub_abs(&b, &a)?;
            self.sign = b.sign();
        }
        self.canonicalize_sign();
        Ok(())
    }

    /// Signed `self = a - b`, expressed as `a + (-b)`.
    pub fn sub_mpi(&mut self, a: &BigInt, b: &BigInt) -> Result<(), BigIntError> {
        let (a, b) = self.stage_if_aliased(a, b)?;
        let mut neg_b = b.clone();
        if !neg_b.is_zero() {
            neg_b.sign = -neg_b.sign;
        }
        self.add_mpi(&a, &neg_b)
    }

    /// `self = a + b` where `b` is a small signed integer.
    pub fn add_int(&mut self, a: &BigInt, b: i64) -> Result<(), BigIntError> {
        let b_bi = BigInt::from_i64(b);
        self.add_mpi(a, &b_bi)
    }

    /// `self = a - b` where `b` is a small signed integer.
    pub fn sub_int(&mut self, a: &BigInt, b: i64) -> Result<(), BigIntError> {
        let b_bi = BigInt::from_i64(b);
        self.sub_mpi(a, &b_bi)
    }

    /// Returns owned clones of `a` and `b` so that writing the result
    /// into `self` afterward can never clobber an input still being
    /// read, whether or not `self` actually aliases either one.
    pub(crate) fn stage_if_aliased(
        &self,
        a: &BigInt,
        b: &BigInt,
    ) -> Result<(BigInt, BigInt), BigIntError> {
        Ok((a.clone(), b.clone()))
    }
}
