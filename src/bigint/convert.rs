//! Conversion layer: small-integer, ASCII, big-endian binary, and RNG fill.

use super::{BigInt, BigIntError, Limb, LIMB_BITS};
use crate::rng::SecureRandom;

impl BigInt {
    /// Sets `self` to the one-limb (plus sign) representation of `z`.
    pub fn set_int(&mut self, z: i64) {
        self.limbs.clear();
        self.sign = if z < 0 { -1 } else { 1 };
        let mag = z.unsigned_abs();
        if mag != 0 {
            self.limbs.push(mag as Limb);
            #[cfg(feature = "limb32")]
            {
                if mag > Limb::MAX as u64 {
                    self.limbs.push((mag >> LIMB_BITS) as Limb);
                }
            }
        }
        self.canonicalize_sign();
    }

    /// Builds a `BigInt` from a small signed integer.
    pub fn from_i64(z: i64) -> Self {
        let mut v = BigInt::zero();
        v.set_int(z);
        v
    }

    /// Parses `s` as an ASCII integer in `radix` (2..=16), with an
    /// optional leading `-`. For radix 16, pairs of hex digits are packed
    /// directly from the tail; other radices use the iterative
    /// `result = result * radix + digit`. Digit case is accepted either
    /// way on read (uppercase is used on write).
    pub fn read_string(radix: u32, s: &str) -> Result<Self, BigIntError> {
        if !(2..=16).contains(&radix) {
            return Err(BigIntError::BadInput);
        }

        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(BigIntError::BadInput);
        }

        let (negative, digits) = match bytes[0] {
            b'-' => (true, &bytes[1..]),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(BigIntError::BadInput);
        }

        let mut value = BigInt::zero();

        if radix == 16 {
            let mut nibbles = Vec::with_capacity(digits.len());
            for &b in digits {
                nibbles.push(hex_digit(b)?);
            }
            // Pack two hex digits (one byte) at a time, from the tail.
            let mut bytes_be = Vec::with_capacity(nibbles.len().div_ceil(2));
            let mut chunk = nibbles.rchunks(2);
            let mut packed: Vec<u8> = Vec::new();
            while let Some(pair) = chunk.next() {
                packed.push(match pair {
                    [hi, lo] => (hi << 4) | lo,
                    [lo] => *lo,
                    _ => unreachable!(),
                });
            }
            packed.reverse();
            bytes_be.extend_from_slice(&packed);
            value = BigInt::from_be_bytes(&bytes_be);
        } else {
            let radix_bi = BigInt::from_i64(radix as i64);
            for &b in digits {
                let d = ascii_digit(b, radix)?;
                let prev = value.clone();
                value.mul_mpi(&prev, &radix_bi)?;
                let prev = value.clone();
                value.add_mpi(&prev, &BigInt::from_i64(d as i64))?;
            }
        }

        if negative && !value.is_zero() {
            value.sign = -1;
        }
        value.canonicalize_sign();
        Ok(value)
    }

    /// Writes `self` as a NUL-terminated ASCII string in `radix` (2..=16)
    /// into `buf`, with a leading `-` for negative values and `0` written
    /// for zero. Returns the number of bytes written, excluding the
    /// trailing NUL. If `buf` is too small, returns
    /// `BigIntError::BufferTooSmall` with the size that would succeed.
    pub fn write_string(&self, radix: u32, buf: &mut [u8]) -> Result<usize, BigIntError> {
        if !(2..=16).contains(&radix) {
            return Err(BigIntError::BadInput);
        }

        let digits = self.to_digits_string(radix);
        let needed = digits.len() + 1;
        if buf.len() < needed {
            return Err(BigIntError::BufferTooSmall { needed });
        }

        buf[..digits.len()].copy_from_slice(digits.as_bytes());
        buf[digits.len()] = 0;
        Ok(digits.len())
    }

    /// Convenience wrapper around [`BigInt::write_string`] that allocates
    /// and returns a `String` instead of writing into a caller buffer.
    pub fn to_radix_string(&self, radix: u32) -> Result<String, BigIntError> {
        if !(2..=16).contains(&radix) {
            return Err(BigIntError::BadInput);
        }
        Ok(self.to_digits_string(radix))
    }

    fn to_digits_string(&self, radix: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut digits = Vec::new();
        let mut rem = BigInt::zero();
        rem.copy_from(self).expect("copy cannot fail here");
        rem.sign = 1;

        let radix_bi = BigInt::from_i64(radix as i64);
        while !rem.is_zero() {
            let (q, r) = BigInt::div_mpi(&rem, &radix_bi).expect("radix divisor is nonzero");
            let digit = if r.is_zero() {
                0
            } else {
                r.limbs[0] as u32
            };
            digits.push(std::char::from_digit(digit, 16).unwrap().to_ascii_uppercase());
            rem = q;
        }
        digits.reverse();

        let mut out = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            out.push('-');
        }
        out.extend(digits);
        out
    }

    /// Interprets `buf` as a big-endian unsigned integer. Leading zero
    /// bytes are skipped; an all-zero buffer (including an empty one)
    /// produces the value zero.
    pub fn from_be_bytes(buf: &[u8]) -> Self {
        let first_nonzero = buf.iter().position(|&b| b != 0);
        let Some(start) = first_nonzero else {
            return BigInt::zero();
        };
        let significant = &buf[start..];

        let limb_bytes = (LIMB_BITS / 8) as usize;
        let n_limbs = significant.len().div_ceil(limb_bytes);
        let mut limbs = vec![0 as Limb; n_limbs];

        // Walk the significant bytes from least to most significant.
        for (i, &b) in significant.iter().rev().enumerate() {
            let limb_idx = i / limb_bytes;
            let shift = (i % limb_bytes) * 8;
            limbs[limb_idx] |= (b as Limb) << shift;
        }

        BigInt::from_parts(1, limbs)
    }

    /// Writes `self` as a big-endian unsigned integer into `buf`,
    /// left-padding with zero bytes if `buf` is longer than the
    /// significant byte count. Returns `BufferTooSmall` if `buf` cannot
    /// hold the significant bytes.
    pub fn to_be_bytes(&self, buf: &mut [u8]) -> Result<(), BigIntError> {
        let needed = self.significant_byte_count();
        if buf.len() < needed {
            return Err(BigIntError::BufferTooSmall { needed });
        }

        buf.fill(0);
        let limb_bytes = (LIMB_BITS / 8) as usize;
        let sig = self.sig_limbs();

        for (i, limb) in sig.iter().enumerate() {
            for byte_in_limb in 0..limb_bytes {
                let value = ((*limb >> (byte_in_limb * 8)) & 0xFF) as u8;
                let global_index = i * limb_bytes + byte_in_limb;
                if global_index < needed {
                    buf[buf.len() - 1 - global_index] = value;
                }
            }
        }
        Ok(())
    }

    fn significant_byte_count(&self) -> usize {
        let sig = self.sig_limbs();
        if sig.is_empty() {
            return 0;
        }
        let limb_bytes = (LIMB_BITS / 8) as usize;
        let top = *sig.last().unwrap();
        let top_bytes = if top == 0 {
            1
        } else {
            (limb_bytes * 8 - top.leading_zeros() as usize).div_ceil(8)
        };
        (sig.len() - 1) * limb_bytes + top_bytes
    }

    /// Fills `self` with `size_bytes` bytes of randomness drawn from
    /// `rng`, interpreted as an unsigned big-endian value (i.e. as
    /// [`BigInt::from_be_bytes`] of the generated bytes).
    pub fn fill_random(
        &mut self,
        size_bytes: usize,
        rng: &mut impl SecureRandom,
    ) -> Result<(), BigIntError> {
        if size_bytes == 0 || size_bytes > super::MAX_FILL_RANDOM_BYTES {
            return Err(BigIntError::BadInput);
        }

        let mut buf = vec![0u8; size_bytes];
        rng.fill(&mut buf)?;
        *self = BigInt::from_be_bytes(&buf);
        Ok(())
    }
}

fn hex_digit(b: u8) -> Result<u8, BigIntError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(BigIntError::InvalidCharacter),
    }
}

fn ascii_digit(b: u8, radix: u32) -> Result<u8, BigIntError> {
    let v = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'z' => b - b'a' + 10,
        b'A'..=b'Z' => b - b'A' + 10,
        _ => return Err(BigIntError::InvalidCharacter),
    };
    if (v as u32) < radix {
        Ok(v)
    } else {
        Err(BigIntError::InvalidCharacter)
    }
}
