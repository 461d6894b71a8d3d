//! Storage layer: grow/shrink/copy/swap over the limb buffer.
//!
//! Every operation that needs more room calls [`BigInt::grow`] on entry;
//! allocation failure is the only failure mode this layer has. Rust's
//! global allocator aborts the process rather than returning an error on
//! true out-of-memory, so [`BigIntError::AllocationFailed`] in practice
//! only ever arises from `try_reserve` below — kept explicit so callers
//! in security-critical paths are never surprised by an abort.

use super::{BigInt, BigIntError, Limb};

impl BigInt {
    /// Ensures the limb buffer holds at least `n_limbs` limbs, preserving
    /// existing contents and zero-filling any newly added limbs.
    pub fn grow(&mut self, n_limbs: usize) -> Result<(), BigIntError> {
        if self.limbs.len() >= n_limbs {
            return Ok(());
        }

        let additional = n_limbs - self.limbs.len();
        self.limbs
            .try_reserve(additional)
            .map_err(|_| BigIntError::AllocationFailed)?;
        self.limbs.resize(n_limbs, 0);
        Ok(())
    }

    /// Reallocates to `max(min_limbs, significant_limb_count)`, dropping
    /// any excess scratch space above the true magnitude. Any limbs added
    /// to reach `min_limbs` are zero-filled.
    pub fn shrink(&mut self, min_limbs: usize) -> Result<(), BigIntError> {
        let keep = self.sig_len().max(min_limbs);
        self.limbs
            .try_reserve(keep.saturating_sub(self.limbs.len()))
            .map_err(|_| BigIntError::AllocationFailed)?;
        self.limbs.resize(keep, 0);
        self.limbs.shrink_to_fit();
        Ok(())
    }

    /// Copies `src`'s value into `self`: `self` is grown to `src`'s
    /// significant limb count, contents and sign are copied. A no-op when
    /// `src` is already `self` (aliasing-safe by construction - nothing is
    /// read before being overwritten with an identical value).
    pub fn copy_from(&mut self, src: &BigInt) -> Result<(), BigIntError> {
        if std::ptr::eq(self, src) {
            return Ok(());
        }

        if src.is_zero() {
            self.sign = 1;
            self.limbs.clear();
            return Ok(());
        }

        let n = src.sig_len();
        self.limbs.clear();
        self.limbs
            .try_reserve(n)
            .map_err(|_| BigIntError::AllocationFailed)?;
        self.limbs.extend_from_slice(&src.limbs[..n]);
        self.sign = src.sign;
        Ok(())
    }

    /// Exchanges the buffers and signs of `self` and `other` without
    /// reallocating either one.
    pub fn swap(&mut self, other: &mut BigInt) {
        std::mem::swap(&mut self.sign, &mut other.sign);
        std::mem::swap(&mut self.limbs, &mut other.limbs);
    }

    /// Builds a `BigInt` directly from little-endian limbs and a sign,
    /// used internally by layers that compute a result limb-by-limb.
    pub(crate) fn from_parts(sign: i8, limbs: Vec<Limb>) -> Self {
        let mut v = BigInt { sign, limbs };
        v.canonicalize_sign();
        v
    }
}
