//! Limb-layer primitives.
//!
//! This module defines the fixed-width unsigned digit ("limb") that every
//! other layer of the multi-precision core is built from, plus the single
//! performance-critical inner loop: multiply-accumulate of a limb vector by
//! a scalar limb, with carry propagation.
//!
//! The limb width is a compile-time choice (64-bit by default, 32-bit under
//! the `limb32` feature), selected the same way [`crate::os`] picks a
//! platform backend — here applied to digit width instead of operating
//! system.

/// Machine word used as a single positional digit.
#[cfg(not(feature = "limb32"))]
pub type Limb = u64;
#[cfg(feature = "limb32")]
pub type Limb = u32;

/// Double-width type used for carrying intermediate products.
#[cfg(not(feature = "limb32"))]
pub type DoubleLimb = u128;
#[cfg(feature = "limb32")]
pub type DoubleLimb = u64;

/// Bit width of a single limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Multiplies the `len` least-significant limbs of `src` by the scalar `b`
/// and accumulates the result into `dst`, propagating carry into any
/// higher limbs of `dst` that are needed to absorb it.
///
/// `dst` must be at least `len` limbs long; any carry past `dst[len-1]`
/// continues to propagate into `dst[len..]`, growing the affected range
/// one limb at a time until it is absorbed. The caller is responsible for
/// ensuring `dst` is long enough for the carry to fully absorb (the
/// multiplicative layer allocates `|A| + |B|` limbs up front for exactly
/// this reason).
///
/// Returns the final carry-out, which is always `0` when `dst` was sized
/// per the contract above.
#[inline]
pub fn muladdc(src: &[Limb], dst: &mut [Limb], b: Limb) -> Limb {
    let len = src.len();
    let mut carry: DoubleLimb = 0;

    for i in 0..len {
        let prod = src[i] as DoubleLimb * b as DoubleLimb + dst[i] as DoubleLimb + carry;
        dst[i] = prod as Limb;
        carry = prod >> LIMB_BITS;
    }

    let mut i = len;
    while carry != 0 {
        let sum = dst[i] as DoubleLimb + carry;
        dst[i] = sum as Limb;
        carry = sum >> LIMB_BITS;
        i += 1;
    }

    carry as Limb
}

/// Adds `b` to `dst[0]`, propagating carry through `dst[1..]`.
///
/// Used by the additive layer's single-limb fast paths. Returns the
/// carry-out of the final limb touched.
#[inline]
pub fn add_limb_carry(dst: &mut [Limb], mut b: Limb) -> Limb {
    for d in dst.iter_mut() {
        let sum = *d as DoubleLimb + b as DoubleLimb;
        *d = sum as Limb;
        b = (sum >> LIMB_BITS) as Limb;
        if b == 0 {
            return 0;
        }
    }
    b
}

/// Divides the double-limb numerator `(hi, lo)` by `divisor`, returning
/// `(quotient, remainder)`, capping the quotient at `Limb::MAX` when the
/// division would otherwise overflow a single limb (per HAC 14.20's
/// tentative quotient digit rule: callers that see `hi >= divisor` are
/// expected to substitute the all-ones digit directly rather than call
/// this function, since a native double/single divide traps on overflow).
#[inline]
pub fn div_double(hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
    debug_assert!(hi < divisor, "numerator high limb must be < divisor");
    let num = ((hi as DoubleLimb) << LIMB_BITS) | lo as DoubleLimb;
    let d = divisor as DoubleLimb;
    ((num / d) as Limb, (num % d) as Limb)
}

/// Subtracts `sub` from `dst`, limb-wise with borrow, touching every
/// limb of `dst` exactly once regardless of whether the subtraction
/// underflows. Returns the final borrow (`1` if `dst < sub`).
///
/// This unconditional, always-executed form (no early exit on
/// underflow) is what lets [`super::montgomery`] implement its final
/// conditional reduction with a constant memory-access pattern: the
/// subtraction always runs, and the caller uses
/// [`super::BigInt::cond_assign`] to select the result instead of
/// branching on the borrow.
#[inline]
pub fn sub_borrow(dst: &mut [Limb], sub: &[Limb]) -> Limb {
    let mut borrow: Limb = 0;
    for i in 0..dst.len() {
        let s = if i < sub.len() { sub[i] } else { 0 };
        let (d1, b1) = dst[i].overflowing_sub(s);
        let (d2, b2) = d1.overflowing_sub(borrow);
        dst[i] = d2;
        borrow = (b1 as Limb) | (b2 as Limb);
    }
    borrow
}
