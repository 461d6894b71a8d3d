//! Random number generation module
//!
//! This module provides cryptographically secure randomness facilities
//! for the Nebula ecosystem.
//!
//! It is built around a ChaCha20-based deterministic random bit generator
//! (DRBG) and exposes a high-level CSPRNG interface suitable for
//! security-critical use cases such as key generation, nonces, and identifiers.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through periodic rekeying
/// - No heap allocation
/// - Minimal and explicit API surface
mod chacha20drbg;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point for generating secure randomness
/// within the Nebula codebase.
pub use csprng::Csprng;

/// A source of cryptographically secure random bytes.
///
/// This is the Rust expression of the `rng(ctx, out, n)` callback shape
/// used by the multi-precision core's prime generation and Miller-Rabin
/// witness sampling: a context-carrying generator that fills a caller
/// buffer and reports failure through a `Result` rather than a raw
/// integer return code.
pub trait SecureRandom {
    /// Fills `out` with random bytes, or reports failure.
    ///
    /// Any error from the underlying source is propagated unchanged to
    /// the caller of the `bigint` operation that requested randomness.
    fn fill(&mut self, out: &mut [u8]) -> Result<(), crate::bigint::BigIntError>;
}

impl SecureRandom for Csprng {
    fn fill(&mut self, out: &mut [u8]) -> Result<(), crate::bigint::BigIntError> {
        self.fill_bytes(out);
        Ok(())
    }
}
