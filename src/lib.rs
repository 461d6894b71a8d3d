//! Multi-precision signed integer arithmetic for Nebula
//!
//! This crate provides the arbitrary-precision integer core used beneath
//! asymmetric cryptography (RSA, Diffie-Hellman, DSA style primitives)
//! throughout the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Components
//! are explicit in their semantics and suitable for security-critical code.
//!
//! # Module overview
//!
//! - [`bigint`]
//!   Arbitrary-precision signed integer arithmetic: the growable `BigInt`
//!   type, full add/sub/mul/div, Montgomery modular exponentiation,
//!   Miller-Rabin primality testing, and prime generation - the
//!   multi-precision core beneath RSA/DH/DSA-style asymmetric primitives.
//!
//! - [`rng`]
//!   Cryptographically secure pseudorandom number generation built from
//!   a ChaCha20 DRBG, seeded from OS entropy via [`os`]. Also defines the
//!   [`rng::SecureRandom`] trait `bigint` uses for `fill_random`,
//!   Miller-Rabin witness sampling, and prime generation.
//!
//! - `os`
//!   Platform-specific entropy source feeding the CSPRNG.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between the multi-precision core and its supporting
//!   randomness and fixed-width layers
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

mod os;

pub mod bigint;
pub mod rng;

pub use bigint::{gen_prime, is_prime, BigInt, BigIntError, MontgomeryCache};
