//! Shift layer: left/right shift by an arbitrary bit count.

use super::{BigInt, BigIntError, Limb, LIMB_BITS};

impl BigInt {
    /// Shifts `self` left by `k` bits in place. The buffer is grown
    /// first to hold `msb() + k` bits, then the shift is performed in
    /// two passes: a limb-granularity move, followed by an intra-limb
    /// bit shift that folds carry into the next limb up.
    pub fn shift_l(&mut self, k: usize) -> Result<(), BigIntError> {
        if self.is_zero() || k == 0 {
            return Ok(());
        }

        let limb_shift = k / LIMB_BITS as usize;
        let bit_shift = k % LIMB_BITS as usize;
        let old_sig = self.sig_len();
        let new_len = old_sig + limb_shift + 1;
        self.grow(new_len)?;

        if limb_shift > 0 {
            for i in (0..old_sig).rev() {
                self.limbs[i + limb_shift] = self.limbs[i];
            }
            for limb in self.limbs[..limb_shift].iter_mut() {
                *limb = 0;
            }
        }

        if bit_shift > 0 {
            let mut carry: Limb = 0;
            for i in limb_shift..(old_sig + limb_shift) {
                let cur = self.limbs[i];
                self.limbs[i] = (cur << bit_shift) | carry;
                carry = cur >> (LIMB_BITS as usize - bit_shift);
            }
            if carry != 0 {
                self.limbs[old_sig + limb_shift] |= carry;
            }
        }

        Ok(())
    }

    /// Shifts `self` right by `k` bits in place. A shift that covers or
    /// exceeds the total bit width collapses the value to zero.
    pub fn shift_r(&mut self, k: usize) -> Result<(), BigIntError> {
        let total_bits = self.msb();
        if k >= total_bits {
            self.limbs.clear();
            self.sign = 1;
            return Ok(());
        }

        let limb_shift = k / LIMB_BITS as usize;
        let bit_shift = k % LIMB_BITS as usize;
        let sig = self.sig_len();

        if limb_shift > 0 {
            for i in 0..(sig - limb_shift) {
                self.limbs[i] = self.limbs[i + limb_shift];
            }
            for limb in self.limbs[(sig - limb_shift)..sig].iter_mut() {
                *limb = 0;
            }
        }
        let new_sig = sig - limb_shift;

        if bit_shift > 0 {
            let mut carry: Limb = 0;
            for i in (0..new_sig).rev() {
                let cur = self.limbs[i];
                self.limbs[i] = (cur >> bit_shift) | carry;
                carry = cur << (LIMB_BITS as usize - bit_shift);
            }
        }

        Ok(())
    }
}
