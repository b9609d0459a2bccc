use std::cmp::{max, min, Ordering};
use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
               Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
               ShrAssign, Sub, SubAssign};

use crate::{bits, Int, Limb};

impl Int {
    pub fn zero() -> Int {
        Int::default()
    }

    pub fn one() -> Int {
        Int::from(1 as Limb)
    }

    pub fn is_zero(&self) -> bool {
        !self.neg && (self.mag.is_empty() || (self.mag.len() == 1 && self.mag[0] == 0))
    }

    pub fn is_negative(&self) -> bool {
        self.neg
    }

    // the neutral element: the value of every limb beyond 'mag'
    pub(crate) fn fill(&self) -> Limb {
        if self.neg { Limb::MAX } else { 0 }
    }

    // limb at index i, or the given default past the stored sequence.
    // Every sign-extending limb read routes through here.
    pub(crate) fn limb_or(&self, i: usize, default: Limb) -> Limb {
        if i < self.mag.len() { self.mag[i] } else { default }
    }

    pub(crate) fn set_zero(&mut self) {
        self.mag.clear();
        self.neg = false;
    }

    // re-establish canonical form: no trailing limb equal to the fill value
    pub(crate) fn trim(&mut self) {
        while let Some(&d) = self.mag.last() {
            if d != self.fill() {
                break;
            }
            self.mag.pop();
        }
    }

    // the two's-complement sign rule: the top bit of the leading limb
    fn top_bit(&self) -> bool {
        match self.mag.last() {
            Some(&d) => d & (1 << (Limb::BITS - 1)) != 0,
            None => false,
        }
    }

    // The carry engine behind '+' and '-'. Subtraction is addition of the
    // bitwise complement with a carry-in of 1.
    pub(crate) fn subadd(&mut self, plus: bool, rhs: &Int) {
        if rhs.mag.len() == 1 && !rhs.neg {
            return self.small_add(plus, rhs.mag[0]);
        }
        // two guard limbs so the result's sign bit and carry-out are representable
        let new_size = max(self.mag.len(), rhs.mag.len()) + 2;
        let f = self.fill();
        self.mag.resize(new_size, f);
        let mut carry: Limb = if plus { 0 } else { 1 };
        for i in 0..new_size {
            let y = rhs.limb_or(i, rhs.fill());
            let y = if plus { y } else { !y };
            (self.mag[i], carry) = bits::adc(self.mag[i], y, carry);
        }
        self.neg = self.top_bit();
        self.trim();
    }

    // single-limb fast path of the carry engine; x is a non-negative limb
    pub(crate) fn small_add(&mut self, plus: bool, x: Limb) {
        let f = self.fill();
        self.mag.resize(self.mag.len() + 1, f);
        let mut carry: Limb = if plus { 0 } else { 1 };
        for (i, d) in self.mag.iter_mut().enumerate() {
            let y = if i == 0 { x } else { 0 };
            let y = if plus { y } else { !y };
            (*d, carry) = bits::adc(*d, y, carry);
        }
        self.neg = self.top_bit();
        self.trim();
    }

    pub fn increment(&mut self) {
        self.small_add(true, 1);
    }

    pub fn decrement(&mut self) {
        self.small_add(false, 1);
    }

    // one's complement of every limb; flips the sign-extension bit
    pub(crate) fn complement_mut(&mut self) {
        for d in self.mag.iter_mut() {
            *d = !*d;
        }
        self.neg = !self.neg;
    }

    // two's-complement negation: complement, then add one
    pub(crate) fn negate_mut(&mut self) {
        self.complement_mut();
        self.small_add(true, 1);
    }

    pub(crate) fn abs_mut(&mut self) {
        if self.neg {
            self.negate_mut();
        }
    }

    pub fn abs(&self) -> Int {
        let mut r = self.clone();
        r.abs_mut();
        r
    }

    // shared limb-combining routine behind '&', '|' and '^'. Both operands
    // extend with their own fill value; the result's sign-extension bit is
    // the same operation applied to the two sign bits.
    fn bitop<F>(&mut self, rhs: &Int, op: F)
        where F: Fn(Limb, Limb) -> Limb {
        let new_size = max(self.mag.len(), rhs.mag.len()) + 1;
        let f = self.fill();
        self.mag.resize(new_size, f);
        for i in 0..new_size {
            self.mag[i] = op(self.mag[i], rhs.limb_or(i, rhs.fill()));
        }
        self.neg = op(self.neg as Limb, rhs.neg as Limb) != 0;
        self.trim();
    }
}

/* Construction from native integers */

impl From<i128> for Int {
    fn from(a: i128) -> Int {
        if a == i128::MIN {
            // the two's-complement minimum has no positive magnitude;
            // store its limb pattern directly
            return Int { neg: true, mag: vec![0, 0, 0, 1 << (Limb::BITS - 1)] };
        }
        let mut v = Int::default();
        let mut m = a.unsigned_abs();
        while m != 0 {
            v.mag.push(m as Limb);
            m >>= Limb::BITS;
        }
        if a < 0 {
            v.negate_mut();
        }
        v
    }
}

impl From<u128> for Int {
    fn from(a: u128) -> Int {
        let mut v = Int::default();
        let mut m = a;
        while m != 0 {
            v.mag.push(m as Limb);
            m >>= Limb::BITS;
        }
        v
    }
}

macro_rules! int_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for Int {
            fn from(a: $t) -> Int {
                Int::from(a as i128)
            }
        }
    )*};
}

macro_rules! int_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for Int {
            fn from(a: $t) -> Int {
                Int::from(a as u128)
            }
        }
    )*};
}

int_from_signed! { i8 i16 i32 i64 isize }
int_from_unsigned! { u8 u16 u32 u64 usize }

/* Comparisons */

impl Ord for Int {
    fn cmp(&self, other: &Int) -> Ordering {
        if self.neg != other.neg {
            return if self.neg { Ordering::Less } else { Ordering::Greater };
        }
        // same sign: for non-negatives more limbs means larger; for
        // negatives more limbs means more negative
        let by_len = self.mag.len().cmp(&other.mag.len());
        if by_len != Ordering::Equal {
            return if self.neg { by_len.reverse() } else { by_len };
        }
        // same sign and length: unsigned limbwise compare, high to low
        for (x, y) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            let by_limb = x.cmp(y);
            if by_limb != Ordering::Equal {
                return by_limb;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* Arithmetic operators */

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        self.subadd(true, rhs);
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, rhs: &Int) {
        self.subadd(false, rhs);
    }
}

impl MulAssign<&Int> for Int {
    // elementary school-book multiplication over the magnitudes
    fn mul_assign(&mut self, rhs: &Int) {
        if self.is_zero() || rhs.is_zero() {
            return self.set_zero();
        }
        let sign = self.neg ^ rhs.neg;
        let left = self.abs();
        let right = rhs.abs();
        self.mag = vec![0; left.mag.len() + right.mag.len() + 1];
        self.neg = false;
        for (i, &a) in left.mag.iter().enumerate() {
            // clear carry when starting a new row
            let mut carry: Limb = 0;
            let mut j = 0;
            while j < right.mag.len() || carry != 0 {
                let (lo, hi) = bits::mul_add(a, right.limb_or(j, 0), self.mag[i + j], carry);
                self.mag[i + j] = lo;
                carry = hi;
                j += 1;
            }
        }
        if sign {
            self.negate_mut();
        }
        self.trim();
    }
}

impl Neg for &Int {
    type Output = Int;
    fn neg(self) -> Int {
        let mut r = self.clone();
        if !r.is_zero() {
            r.negate_mut();
        }
        r
    }
}

impl Neg for Int {
    type Output = Int;
    fn neg(mut self) -> Int {
        if !self.is_zero() {
            self.negate_mut();
        }
        self
    }
}

/* Bitwise operators */

impl BitAndAssign<&Int> for Int {
    fn bitand_assign(&mut self, rhs: &Int) {
        self.bitop(rhs, |a, b| a & b);
    }
}

impl BitOrAssign<&Int> for Int {
    fn bitor_assign(&mut self, rhs: &Int) {
        self.bitop(rhs, |a, b| a | b);
    }
}

impl BitXorAssign<&Int> for Int {
    fn bitxor_assign(&mut self, rhs: &Int) {
        self.bitop(rhs, |a, b| a ^ b);
    }
}

impl Not for &Int {
    type Output = Int;
    fn not(self) -> Int {
        // !(-1) is exactly 0; there are no explicit limbs to complement
        if self.mag.is_empty() && self.neg {
            return Int::default();
        }
        let mut r = self.clone();
        r.complement_mut();
        r
    }
}

impl Not for Int {
    type Output = Int;
    fn not(mut self) -> Int {
        if self.mag.is_empty() && self.neg {
            self.set_zero();
            return self;
        }
        self.complement_mut();
        self
    }
}

/* Shift operators. Counts are u32, so a negative shift is unrepresentable. */

impl ShlAssign<u32> for Int {
    fn shl_assign(&mut self, k: u32) {
        if k == 0 {
            return;
        }
        let modulo = k % Limb::BITS;
        let whole = (k / Limb::BITS) as usize;
        let f = self.fill();
        // one guard limb of sign extension, then the whole-limb prepend
        self.mag.push(f);
        if whole > 0 {
            let mut limbs = vec![0; whole];
            limbs.append(&mut self.mag);
            self.mag = limbs;
        }
        let mut carry: Limb = 0;
        for d in self.mag.iter_mut() {
            let cur = ((*d as u64) << modulo) | carry as u64;
            *d = cur as Limb;
            carry = (cur >> Limb::BITS) as Limb;
        }
        self.trim();
    }
}

impl ShrAssign<u32> for Int {
    // arithmetic shift: sign-preserving, rounds toward negative infinity
    fn shr_assign(&mut self, k: u32) {
        if k == 0 {
            return;
        }
        let modulo = k % Limb::BITS;
        let whole = (k / Limb::BITS) as usize;
        let sign = self.neg;
        self.abs_mut();
        let mut lost = self.small_div(1 << modulo) != 0;
        let drop = min(whole, self.mag.len());
        lost |= self.mag[..drop].iter().any(|&d| d != 0);
        self.mag.drain(..drop);
        if sign {
            // the unsigned divide truncates; restore floor semantics when
            // any nonzero bit was shifted out
            if lost {
                self.small_add(true, 1);
            }
            self.negate_mut();
        }
        self.trim();
    }
}

/* Forwarding impls: the value-consuming and reference forms of every
   operator delegate to the compound-assignment engine above. */

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_method:ident) => {
        impl $imp<&Int> for &Int {
            type Output = Int;
            fn $method(self, rhs: &Int) -> Int {
                let mut lhs = self.clone();
                lhs.$assign_method(rhs);
                lhs
            }
        }
        impl $imp<&Int> for Int {
            type Output = Int;
            fn $method(mut self, rhs: &Int) -> Int {
                self.$assign_method(rhs);
                self
            }
        }
        impl $imp<Int> for &Int {
            type Output = Int;
            fn $method(self, rhs: Int) -> Int {
                let mut lhs = self.clone();
                lhs.$assign_method(&rhs);
                lhs
            }
        }
        impl $imp for Int {
            type Output = Int;
            fn $method(mut self, rhs: Int) -> Int {
                self.$assign_method(&rhs);
                self
            }
        }
    };
}

macro_rules! forward_assign {
    ($imp:ident, $assign_method:ident) => {
        impl $imp<Int> for Int {
            fn $assign_method(&mut self, rhs: Int) {
                self.$assign_method(&rhs);
            }
        }
    };
}

macro_rules! forward_shift {
    ($imp:ident, $method:ident, $assign_method:ident) => {
        impl $imp<u32> for &Int {
            type Output = Int;
            fn $method(self, k: u32) -> Int {
                let mut r = self.clone();
                r.$assign_method(k);
                r
            }
        }
        impl $imp<u32> for Int {
            type Output = Int;
            fn $method(mut self, k: u32) -> Int {
                self.$assign_method(k);
                self
            }
        }
    };
}

forward_binop! { Add, add, add_assign }
forward_binop! { Sub, sub, sub_assign }
forward_binop! { Mul, mul, mul_assign }
forward_binop! { Div, div, div_assign }
forward_binop! { Rem, rem, rem_assign }
forward_binop! { BitAnd, bitand, bitand_assign }
forward_binop! { BitOr, bitor, bitor_assign }
forward_binop! { BitXor, bitxor, bitxor_assign }

forward_assign! { AddAssign, add_assign }
forward_assign! { SubAssign, sub_assign }
forward_assign! { MulAssign, mul_assign }
forward_assign! { DivAssign, div_assign }
forward_assign! { RemAssign, rem_assign }
forward_assign! { BitAndAssign, bitand_assign }
forward_assign! { BitOrAssign, bitor_assign }
forward_assign! { BitXorAssign, bitxor_assign }

forward_shift! { Shl, shl, shl_assign }
forward_shift! { Shr, shr, shr_assign }
