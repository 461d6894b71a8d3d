//! Comparison and bit-access layer.

use super::{BigInt, BigIntError, Limb, LIMB_BITS};
use std::cmp::Ordering;

impl BigInt {
    /// Compares magnitudes only, ignoring sign.
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        let a = self.sig_limbs();
        let b = other.sig_limbs();

        match a.len().cmp(&b.len()) {
            Ordering::Equal => {
                for i in (0..a.len()).rev() {
                    match a[i].cmp(&b[i]) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
                Ordering::Equal
            }
            other => other,
        }
    }

    /// Signed comparison. Differing signs resolve immediately; equal
    /// signs defer to [`BigInt::cmp_abs`], negated when both are negative.
    pub fn cmp_signed(&self, other: &BigInt) -> Ordering {
        let (sa, sb) = (self.sign(), other.sign());
        if sa != sb {
            return sa.cmp(&sb);
        }
        let abs_order = self.cmp_abs(other);
        if sa < 0 {
            abs_order.reverse()
        } else {
            abs_order
        }
    }

    /// Compares `self` against the synthesized one-limb value `z`.
    pub fn cmp_int(&self, z: i64) -> Ordering {
        self.cmp_signed(&BigInt::from_i64(z))
    }

    /// Returns the bit at position `pos` (0 = least significant), or `0`
    /// if `pos` is beyond the allocated width.
    pub fn get_bit(&self, pos: usize) -> u8 {
        let limb_idx = pos / LIMB_BITS as usize;
        if limb_idx >= self.limbs.len() {
            return 0;
        }
        let bit_idx = pos % LIMB_BITS as usize;
        ((self.limbs[limb_idx] >> bit_idx) & 1) as u8
    }

    /// Sets (or clears) the bit at position `pos`. Grows the buffer if
    /// needed to set a `1` beyond the current allocation; clearing a bit
    /// beyond the current allocation is a no-op since it is already `0`.
    /// `v` must be `0` or `1`.
    pub fn set_bit(&mut self, pos: usize, v: u8) -> Result<(), BigIntError> {
        if v > 1 {
            return Err(BigIntError::BadInput);
        }

        let limb_idx = pos / LIMB_BITS as usize;
        let bit_idx = pos % LIMB_BITS as usize;

        if v == 0 {
            if limb_idx < self.limbs.len() {
                self.limbs[limb_idx] &= !(1 as Limb << bit_idx);
            }
            return Ok(());
        }

        self.grow(limb_idx + 1)?;
        self.limbs[limb_idx] |= 1 as Limb << bit_idx;
        Ok(())
    }

    /// Index of the lowest set bit. By documented convention, returns `0`
    /// for the value zero (the same value `lsb` would return for a value
    /// whose bit 0 is set) - callers should not rely on this to
    /// distinguish zero from "bit 0 set"; check [`BigInt::is_zero`] first.
    pub fn lsb(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate() {
            if limb != 0 {
                return i * LIMB_BITS as usize + limb.trailing_zeros() as usize;
            }
        }
        0
    }

    /// `1 + index of the highest set bit`; `0` if the value is zero.
    pub fn msb(&self) -> usize {
        let n = self.sig_len();
        if n == 0 {
            return 0;
        }
        let top = self.limbs[n - 1];
        (n - 1) * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize
    }
}
