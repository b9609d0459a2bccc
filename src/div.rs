use std::cmp::min;
use std::ops::{DivAssign, RemAssign};

use crate::{bits, Int, IntError, Limb};

impl Int {
    // multiply by a single limb, preserving sign
    pub(crate) fn small_mul(&mut self, x: Limb) {
        let sign = self.neg;
        self.abs_mut();
        let mut carry: Limb = 0;
        for d in self.mag.iter_mut() {
            (*d, carry) = bits::mul_add(*d, x, 0, carry);
        }
        self.mag.push(carry);
        if sign {
            self.negate_mut();
        }
        self.trim();
    }

    // divide by a single limb, preserving sign; returns the remainder of
    // the magnitude division.
    // pre-condition: x != 0 (the public entry points check the divisor)
    pub(crate) fn small_div(&mut self, x: Limb) -> Limb {
        debug_assert!(x != 0, "small_div - divide by zero error");
        let sign = self.neg;
        self.abs_mut();
        let mut rem: Limb = 0;
        for d in self.mag.iter_mut().rev() {
            (*d, rem) = bits::div2x1(rem, *d, x);
        }
        if sign {
            self.negate_mut();
        }
        self.trim();
        rem
    }

    /// Truncating division: the quotient rounds toward zero and the
    /// remainder takes the dividend's sign, so that
    /// `self == rhs * quotient + remainder`.
    ///
    /// Quotient and remainder come out of one long-division pass; `/` and
    /// `%` both go through here and can never disagree.
    pub fn div_rem(&self, rhs: &Int) -> Result<(Int, Int), IntError> {
        if rhs.is_zero() {
            return Err(IntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((Int::default(), Int::default()));
        }
        // divisor -1 has no explicit limbs; the loop below needs at least one
        if rhs.neg && rhs.mag.is_empty() {
            return Ok((-self, Int::default()));
        }

        let starting_sign = self.neg;
        let sign = self.neg ^ rhs.neg;
        let mut rem = self.abs();
        let mut b = rhs.abs();
        if rem.mag.len() < b.mag.len() {
            return Ok((Int::default(), self.clone()));
        }

        // normalize so the divisor's leading limb has its top bit set; this
        // bounds the error of the single-limb quotient estimate below
        let base = b.mag[b.mag.len() - 1].leading_zeros();
        rem <<= base;
        b <<= base;
        let n = b.mag.len();
        let m = rem.mag.len() - n;
        let top = b.mag[n - 1];
        log::info!("div_rem - normalized by {base} bits; {} dividend limbs, {n} divisor limbs",
                   rem.mag.len());

        let mut q = Int { neg: false, mag: vec![0; m + 1] };
        let mut multiplier = b.clone();
        multiplier <<= Limb::BITS * m as u32;
        let mut all_zero = true;
        for i in (0..=m).rev() {
            let d1 = rem.limb_or(n + i, 0) as u64;
            let d2 = rem.limb_or(n + i - 1, 0) as u64;
            // clamp the two-limb estimate to the largest base-2^32 digit
            let est = ((d1 << Limb::BITS) | d2) / top as u64;
            let mut qi = min(est, Limb::MAX as u64) as Limb;
            if qi != 0 {
                multiplier.small_mul(qi);
                rem -= &multiplier;
                multiplier.small_div(qi);
            }
            // the estimate can overshoot by a small bounded amount; add the
            // shifted divisor back until the running remainder is non-negative
            while rem.is_negative() {
                qi -= 1;
                rem += &multiplier;
            }
            q.mag[i] = qi;
            all_zero &= qi == 0;
            multiplier >>= Limb::BITS;
        }

        // zero has no sign
        let sign = sign && !all_zero;
        if sign {
            q.negate_mut();
        }
        q.trim();
        rem >>= base;
        if starting_sign {
            rem.negate_mut();
        }
        rem.trim();
        Ok((q, rem))
    }

    pub fn checked_div(&self, rhs: &Int) -> Option<Int> {
        self.div_rem(rhs).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Int) -> Option<Int> {
        self.div_rem(rhs).ok().map(|(_, r)| r)
    }
}

/* Like the native integer operators, '/' and '%' panic on a zero divisor;
   div_rem and the checked_* forms are the fallible surface. */

impl DivAssign<&Int> for Int {
    fn div_assign(&mut self, rhs: &Int) {
        match self.div_rem(rhs) {
            Ok((q, _)) => *self = q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl RemAssign<&Int> for Int {
    fn rem_assign(&mut self, rhs: &Int) {
        match self.div_rem(rhs) {
            Ok((_, r)) => *self = r,
            Err(e) => panic!("{e}"),
        }
    }
}
