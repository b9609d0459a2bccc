use crate::Limb;

// adc calculates: sum = x + y + carry.
// The carry input must be 0 or 1.
// The carry_out is guaranteed to be 0 or 1.
pub fn adc(x: Limb, y: Limb, carry: Limb) -> (/* sum */ Limb, /* carry_out */ Limb) {
    debug_assert!(carry <= 1);
    let sum = x as u64 + y as u64 + carry as u64;
    (sum as Limb, (sum >> Limb::BITS) as Limb)
}

// mul_add calculates: t = x * y + acc + carry.
// t always fits 64 bits: (2^32-1)^2 + 2*(2^32-1) == 2^64 - 1.
pub fn mul_add(x: Limb, y: Limb, acc: Limb, carry: Limb) -> (/* lo */ Limb, /* hi */ Limb) {
    let t = x as u64 * y as u64 + acc as u64 + carry as u64;
    (t as Limb, (t >> Limb::BITS) as Limb)
}

// Divide the two-limb number (hi:lo) by a single limb.
// pre-conditions: d != 0 and hi < d, so the quotient fits one limb.
pub fn div2x1(hi: Limb, lo: Limb, d: Limb) -> (/* quotient */ Limb, /* remainder */ Limb) {
    debug_assert!(d > 0, "div2x1 - divide by zero error");
    debug_assert!(hi < d, "div2x1 - quotient overflow error");
    let n = ((hi as u64) << Limb::BITS) | lo as u64;
    ((n / d as u64) as Limb, (n % d as u64) as Limb)
}
