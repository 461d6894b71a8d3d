//! Constant-time conditional assign / swap.
//!
//! Hand-rolled with masked arithmetic rather than a branch: no third-party
//! constant-time crate is pulled in, since masking is cheap to get right
//! for the narrow set of operations Montgomery exponentiation needs.
//!
//! Both primitives touch every limb of their operands exactly once per
//! call, with the same sequence of reads and writes regardless of `cond`,
//! so the memory-access pattern does not depend on the secret condition.

use super::{BigInt, BigIntError, Limb};

/// Expands an 8-bit condition to an all-ones or all-zero limb mask.
/// `cond` is coerced to `{0, 1}` by taking its low bit; any other input
/// bit pattern is ignored, matching the documented `{0,1}` contract.
#[inline(always)]
fn mask_from_cond(cond: u8) -> Limb {
    let c = (cond & 1) as Limb;
    0u64.wrapping_sub(c as u64) as Limb
}

impl BigInt {
    /// Conditionally assigns `Y` to `self`: when `cond == 1`, `self`
    /// becomes equal to `Y`; when `cond == 0`, `self` is left unchanged.
    /// `self` is grown to at least `Y`'s limb count first so that both
    /// branches of the mask touch the same limbs.
    ///
    /// Memory access pattern is independent of `cond`: every limb of
    /// `self` (after the initial grow) is read and written exactly once.
    pub fn cond_assign(&mut self, y: &BigInt, cond: u8) -> Result<(), BigIntError> {
        let mask = mask_from_cond(cond);
        let not_mask = !mask;

        self.grow(y.limbs.len())?;

        for i in 0..y.limbs.len() {
            self.limbs[i] = (self.limbs[i] & not_mask) | (y.limbs[i] & mask);
        }
        for x in self.limbs[y.limbs.len()..].iter_mut() {
            *x &= not_mask;
        }

        let cond_i8 = (cond & 1) as i8;
        self.sign = self.sign * (1 - cond_i8) + y.sign * cond_i8;
        Ok(())
    }

    /// Conditionally swaps `self` and `other` in constant time. Both
    /// operands are grown to the same length first; every limb pair is
    /// touched with the same two reads and two writes regardless of
    /// `cond`. A pointer swap is deliberately avoided - it would make
    /// the following access pattern of either value depend on `cond`.
    pub fn cond_swap(&mut self, other: &mut BigInt, cond: u8) -> Result<(), BigIntError> {
        let mask = mask_from_cond(cond);

        let n = self.limbs.len().max(other.limbs.len());
        self.grow(n)?;
        other.grow(n)?;

        for i in 0..n {
            let a = self.limbs[i];
            let b = other.limbs[i];
            let t = (a ^ b) & mask;
            self.limbs[i] = a ^ t;
            other.limbs[i] = b ^ t;
        }

        let sign_mask: i8 = 0i8.wrapping_sub((cond & 1) as i8);
        let t = (self.sign ^ other.sign) & sign_mask;
        self.sign ^= t;
        other.sign ^= t;
        Ok(())
    }
}
