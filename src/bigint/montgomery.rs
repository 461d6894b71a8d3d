//! Montgomery modular arithmetic: `mm` derivation, Montgomery
//! multiplication/reduction, and sliding-window modular exponentiation.

use super::digit::{muladdc, sub_borrow, Limb, LIMB_BITS};
use super::{BigInt, BigIntError, MontgomeryCache, MAX_WINDOW_SIZE};

impl BigInt {
    /// Derives `mm = -N[0]^-1 mod 2^W` by Hensel lifting: starts from a
    /// correct 3-bit approximation of `N[0]`'s inverse and doubles the
    /// number of correct bits each iteration until the full limb width is
    /// covered. Requires `N` odd (every limb-width inverse exists only
    /// when the modulus is odd); returns `BadInput` otherwise.
    pub fn montg_init(n: &BigInt) -> Result<Limb, BigIntError> {
        if n.is_zero() || n.sig_limbs()[0] & 1 == 0 {
            return Err(BigIntError::BadInput);
        }

        let m0 = n.sig_limbs()[0];
        let mut x: Limb = m0;
        x = x.wrapping_add((m0.wrapping_add(2) & 4) << 1);

        let mut i = LIMB_BITS;
        while i >= 8 {
            x = x.wrapping_mul((2 as Limb).wrapping_sub(m0.wrapping_mul(x)));
            i /= 2;
        }

        Ok((!x).wrapping_add(1))
    }

    /// Montgomery multiplication: `self <- self * b * R^-1 mod n`, where
    /// `R = 2^(W * n.sig_len())`. `scratch` is working storage owned by
    /// the caller and reused across repeated calls (the sliding-window
    /// exponentiation below preallocates it once); it must be at least
    /// `2 * n.sig_len() + 1` limbs, matching the scratch-sizing contract
    /// threaded through the window multiplications.
    ///
    /// The final conditional subtraction of `n` always touches every limb
    /// of the candidate result via [`sub_borrow`], and the choice between
    /// the reduced and unreduced value is made with
    /// [`BigInt::cond_assign`] rather than a branch, so the memory access
    /// pattern of this step does not depend on whether the reduction was
    /// needed.
    pub fn montmul(
        &mut self,
        b: &BigInt,
        n: &BigInt,
        mm: Limb,
        scratch: &mut [Limb],
    ) -> Result<(), BigIntError> {
        let n_len = n.sig_len();
        if n_len == 0 {
            return Err(BigIntError::BadInput);
        }
        if scratch.len() < n_len + 2 {
            return Err(BigIntError::BadInput);
        }

        let t = &mut scratch[..n_len + 2];
        t.fill(0);

        let n_limbs = n.sig_limbs();
        let b_limbs = b.sig_limbs();
        let a_limbs: Vec<Limb> = self.sig_limbs().to_vec();

        for i in 0..n_len {
            let u0 = if i < a_limbs.len() { a_limbs[i] } else { 0 };
            muladdc(b_limbs, t, u0);

            let u1 = t[0].wrapping_mul(mm);
            muladdc(n_limbs, t, u1);

            // Divide the accumulator by 2^W: shift the working window
            // down by one limb. `t[0]` is guaranteed zero at this point
            // by construction of `u1`.
            let last = t.len() - 1;
            for j in 0..last {
                t[j] = t[j + 1];
            }
            t[last] = 0;
        }

        let total_len = n_len + 1;
        let mut result = BigInt::from_parts(1, t[..total_len].to_vec());
        let mut reduced = result.clone();
        let borrow = sub_borrow(&mut reduced.limbs[..total_len], n_limbs);
        let cond: u8 = (1 - borrow) as u8;
        result.cond_assign(&reduced, cond)?;

        result.limbs.truncate(n_len);
        self.limbs = result.limbs;
        self.sign = 1;
        Ok(())
    }

    /// `self <- self * R^-1 mod n`: Montgomery multiplication with the
    /// second operand fixed to `1`, i.e. the reduction half of the
    /// Montgomery product on its own.
    pub fn montred(&mut self, n: &BigInt, mm: Limb, scratch: &mut [Limb]) -> Result<(), BigIntError> {
        let one = BigInt::from_i64(1);
        self.montmul(&one, n, mm, scratch)
    }

    /// In-place Montgomery square: `self <- self * self * R^-1 mod n`.
    /// Stages a clone so the borrow checker sees two distinct operands -
    /// `self.montmul(&self, ...)` cannot borrow `self` both ways at once.
    fn montsqr(&mut self, n: &BigInt, mm: Limb, scratch: &mut [Limb]) -> Result<(), BigIntError> {
        let b = self.clone();
        self.montmul(&b, n, mm, scratch)
    }

    /// Sliding-window modular exponentiation (HAC 14.85): `self <- a^e mod n`.
    ///
    /// `n` must be positive and odd; `e` must be non-negative (negative
    /// exponents are out of scope). `a` is reduced modulo `n` first, so
    /// any sign or magnitude is accepted. `cache` carries `R^2 mod n`
    /// across repeated calls against the same modulus - the first call
    /// that sees an empty cache fills it.
    pub fn exp_mod(
        &mut self,
        a: &BigInt,
        e: &BigInt,
        n: &BigInt,
        cache: Option<&mut MontgomeryCache>,
    ) -> Result<(), BigIntError> {
        if n.is_zero() || n.is_negative() || n.sig_limbs()[0] & 1 == 0 {
            return Err(BigIntError::BadInput);
        }
        if e.is_negative() {
            return Err(BigIntError::BadInput);
        }

        if n.cmp_int(1) == std::cmp::Ordering::Equal {
            self.set_int(0);
            return Ok(());
        }

        let a_mod = BigInt::mod_mpi(a, n)?;

        if e.is_zero() {
            self.set_int(1);
            return Ok(());
        }

        let n_len = n.sig_len();
        let mm = BigInt::montg_init(n)?;
        let mut scratch = vec![0 as Limb; 2 * n_len + 2];

        let rr = match &cache {
            Some(c) if c.rr.is_some() => c.rr.clone().unwrap(),
            _ => {
                let mut bit_pos_value = BigInt::zero();
                bit_pos_value.set_bit(2 * LIMB_BITS as usize * n_len, 1)?;
                BigInt::mod_mpi(&bit_pos_value, n)?
            }
        };
        if let Some(c) = cache {
            c.rr = Some(rr.clone());
        }

        let wsize = window_size(e.msb()).min(MAX_WINDOW_SIZE);
        let table_len = 1usize << (wsize - 1);

        // W[1] = A * R mod n, in Montgomery form.
        let mut w1 = a_mod.clone();
        w1.montmul(&rr, n, mm, &mut scratch)?;

        // W[1]^2 mod n (Montgomery form), used to step between
        // consecutive odd powers in the table below.
        let mut w1_sqr = w1.clone();
        w1_sqr.montsqr(n, mm, &mut scratch)?;

        let mut table = Vec::with_capacity(table_len);
        table.push(w1.clone());
        for k in 1..table_len {
            let mut next = table[k - 1].clone();
            next.montmul(&w1_sqr, n, mm, &mut scratch)?;
            table.push(next);
        }

        // X <- R mod n (Montgomery form of 1), via Montred of RR.
        let mut x = rr.clone();
        x.montred(n, mm, &mut scratch)?;

        let top = e.msb();
        let mut i: isize = top as isize - 1;
        while i >= 0 {
            if e.get_bit(i as usize) == 0 {
                x.montsqr(n, mm, &mut scratch)?;
                i -= 1;
                continue;
            }

            let iu = i as usize;
            let mut l = iu.saturating_sub(wsize - 1);
            while e.get_bit(l) == 0 {
                l += 1;
            }

            let window_len = iu - l + 1;
            let mut window_val: usize = 0;
            for b in (l..=iu).rev() {
                window_val = (window_val << 1) | e.get_bit(b) as usize;
            }

            for _ in 0..window_len {
                x.montsqr(n, mm, &mut scratch)?;
            }

            let idx = (window_val - 1) / 2;
            let entry = table[idx].clone();
            x.montmul(&entry, n, mm, &mut scratch)?;

            i = l as isize - 1;
        }

        // Convert out of Montgomery form.
        x.montred(n, mm, &mut scratch)?;
        self.limbs = x.limbs;
        self.sign = 1;
        Ok(())
    }
}

/// Window size selected from the exponent's bit length, clamped to
/// [`MAX_WINDOW_SIZE`].
fn window_size(e_bits: usize) -> usize {
    if e_bits <= 23 {
        1
    } else if e_bits <= 79 {
        3
    } else if e_bits <= 239 {
        4
    } else if e_bits <= 671 {
        5
    } else {
        6
    }
}
