//! Error kinds returned by the multi-precision integer core.
//!
//! A bare `#[derive(Debug)]` enum, with no `Display`/`std::error::Error`
//! impl: one variant per fallible condition, matched on directly by
//! callers rather than formatted.

/// Errors produced by `BigInt` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// A radix, shift count, bit index, or other argument was out of the
    /// accepted range, or a required precondition (odd modulus, positive
    /// exponent base, etc.) did not hold.
    BadInput,

    /// A `grow` could not obtain the memory it needed.
    AllocationFailed,

    /// An ASCII or binary output buffer was smaller than the value
    /// requires. `needed` carries the buffer size that would have
    /// succeeded.
    BufferTooSmall {
        /// Minimum buffer size, in bytes, that would succeed.
        needed: usize,
    },

    /// Division or modulo by zero.
    DivisionByZero,

    /// An unsigned subtraction would have produced a negative magnitude,
    /// or a modulus operand was negative where a positive one is required.
    NegativeValue,

    /// A Miller-Rabin round found a witness, a small-factor test found a
    /// divisor, or `inv_mod` was called on non-coprime operands. Also used
    /// internally as the recoverable "try next candidate" signal during
    /// `gen_prime`; that internal use never escapes to the caller.
    NotAcceptable,

    /// An ASCII digit fell outside the requested radix.
    InvalidCharacter,
}
