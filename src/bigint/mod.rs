//! Multi-precision (arbitrary-size) signed integer arithmetic.
//!
//! This module supplies the `BigInt` type and the full set of operations
//! needed beneath classical asymmetric cryptography (RSA, Diffie-Hellman,
//! DSA): growable signed integers, modular arithmetic with Montgomery
//! exponentiation, a probabilistic primality test, prime generation, and
//! the constant-time conditional-assign/swap primitives required to keep
//! scalar-multiplication routines free of data-dependent memory traces.
//!
//! # Layout
//!
//! - [`digit`] - limb type and the multiply-accumulate inner loop
//! - `storage` - grow/shrink/copy/swap, zeroize-on-drop
//! - `constant_time` - `cond_assign` / `cond_swap`
//! - `convert` - ASCII and big-endian binary import/export, RNG fill
//! - `compare` - signed/unsigned compare, bit access, `lsb`/`msb`
//! - `shift` - left/right shift by an arbitrary bit count
//! - `add_sub` - additive layer
//! - `mul_div` - schoolbook multiply, HAC 14.20 long division, modulo
//! - `montgomery` - Montgomery reduction and sliding-window `exp_mod`
//! - `gcd` - binary GCD and modular inverse
//! - `primality` - trial division, Miller-Rabin, prime generation
//! - [`error`] - [`BigIntError`]
//!
//! Unlike the crate's fixed-width [`crate::rng`] internals (built on a
//! constant-size ChaCha20 state), `BigInt` is heap-backed and grows to
//! whatever precision the caller's modulus or exponent requires.

pub mod add_sub;
pub mod compare;
pub mod constant_time;
pub mod convert;
pub mod digit;
pub mod error;
pub mod gcd;
pub mod montgomery;
pub mod mul_div;
pub mod primality;
pub mod shift;
pub mod storage;

pub use digit::{DoubleLimb, Limb, LIMB_BITS};
pub use error::BigIntError;
pub use primality::{gen_prime, is_prime};

/// Maximum sliding-window size used by [`montgomery::exp_mod`].
pub const MAX_WINDOW_SIZE: usize = 6;

/// Maximum bit length accepted by [`primality::gen_prime`].
///
/// 4096 bits covers every RSA modulus factor size in common use, and is
/// a plain compile-time constant rather than a runtime-configurable
/// limit.
pub const MAX_PRIME_BITS: usize = 4096;

/// Maximum byte count accepted by [`convert::fill_random`] in one call.
pub const MAX_FILL_RANDOM_BYTES: usize = 1024;

/// Arbitrary-precision signed integer.
///
/// Represented as a sign (`+1` or `-1`, zero is canonically `+1`) and a
/// little-endian vector of [`Limb`]s (limb 0 is least significant). The
/// vector may carry trailing zero limbs above the true magnitude as
/// scratch space; every operation recomputes the true "significant limb
/// count" on entry via [`BigInt::sig_len`] rather than trusting `len()`.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) sign: i8,
    pub(crate) limbs: Vec<Limb>,
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Drop for BigInt {
    /// Zeroizes the limb buffer before it is released, so secret material
    /// (private exponents, primes, intermediate Montgomery state) does not
    /// linger in freed heap memory.
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.limbs.zeroize();
    }
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt {
            sign: 1,
            limbs: Vec::new(),
        }
    }

    /// Number of limbs beyond the highest nonzero limb; `0` for the value
    /// zero. Recomputed from scratch every time it is called - trailing
    /// zero limbs in the backing `Vec` are not significant.
    pub fn sig_len(&self) -> usize {
        let mut n = self.limbs.len();
        while n > 0 && self.limbs[n - 1] == 0 {
            n -= 1;
        }
        n
    }

    /// `true` if the value is zero, regardless of allocated capacity.
    pub fn is_zero(&self) -> bool {
        self.sig_len() == 0
    }

    /// `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign < 0 && !self.is_zero()
    }

    /// Sign of the value: `+1` for zero and positive values, `-1` for
    /// negative values.
    pub fn sign(&self) -> i8 {
        if self.is_zero() {
            1
        } else {
            self.sign
        }
    }

    /// Significant limbs, little-endian, excluding trailing zero scratch.
    pub(crate) fn sig_limbs(&self) -> &[Limb] {
        &self.limbs[..self.sig_len()]
    }

    /// Forces the documented sign convention: `+1` whenever the magnitude
    /// is zero. Every operation whose result is nonnegative or zero calls
    /// this before returning, per the data model's invariant.
    pub(crate) fn canonicalize_sign(&mut self) {
        if self.is_zero() {
            self.sign = 1;
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign() == other.sign() && self.sig_limbs() == other.sig_limbs()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cmp_signed(other)
    }
}

/// Optional cache of `R^2 mod N` for a specific Montgomery modulus `N`,
/// reusable across subsequent `exp_mod` calls that share the same `N`.
/// Owned by the caller; the first `exp_mod` call that sees an empty cache
/// fills it.
#[derive(Clone, Debug, Default)]
pub struct MontgomeryCache {
    pub(crate) rr: Option<BigInt>,
}

impl MontgomeryCache {
    /// A fresh, unfilled cache.
    pub fn new() -> Self {
        MontgomeryCache { rr: None }
    }
}
