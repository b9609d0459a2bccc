use std::fmt::{self, Formatter};
use std::str::FromStr;

use crate::{Int, IntError, Limb};

// widest safe chunk: one more digit must not push the block or the
// power-of-ten multiplier past 32-bit range
fn block_fits(block: Limb) -> bool {
    block <= (Limb::MAX - 9) / 10
}

fn pow_fits(pow: Limb) -> bool {
    pow <= Limb::MAX / 10
}

// nine decimal digits per limb-sized chunk on output
const DEC_CHUNK: Limb = 1_000_000_000;

impl Int {
    /// Parses a decimal string matching `-?[0-9]+`.
    pub fn from_dec_str(s: &str) -> Result<Int, IntError> {
        if s.is_empty() || s == "-" {
            log::error!("from_dec_str - reject empty or sign-only input");
            return Err(IntError::EmptyInput);
        }
        let neg = s.as_bytes()[0] == b'-';
        let mut v = Int::default();
        let mut block: Limb = 0;
        let mut pow: Limb = 1;
        for (i, &c) in s.as_bytes().iter().enumerate().skip(neg as usize) {
            if !c.is_ascii_digit() {
                log::error!("from_dec_str - reject '{}' at position {i}", c as char);
                return Err(IntError::InvalidDigit { found: c as char, pos: i });
            }
            block = block * 10 + (c - b'0') as Limb;
            pow *= 10;
            if !block_fits(block) || !pow_fits(pow) {
                v.flush_block(neg, block, pow);
                block = 0;
                pow = 1;
            }
        }
        if block != 0 || pow > 1 {
            v.flush_block(neg, block, pow);
        }
        Ok(v)
    }

    // fold one digit block into the value: scale by the accumulated power
    // of ten, then add the block (subtract for negative input)
    fn flush_block(&mut self, neg: bool, block: Limb, pow: Limb) {
        self.small_mul(pow);
        self.small_add(!neg, block);
    }

    pub fn to_dec_str(&self) -> String {
        // the two empty-limb values carry no digits to drive the loop
        if self.mag.is_empty() {
            return if self.neg { "-1".to_string() } else { "0".to_string() };
        }
        let mut b = self.abs();
        let mut digits: Vec<u8> = Vec::new();
        while !b.is_zero() {
            let mut chunk = b.small_div(DEC_CHUNK);
            for _ in 0..9 {
                digits.push(b'0' + (chunk % 10) as u8);
                chunk /= 10;
            }
        }
        // strip the leading zeros of the most significant chunk
        while digits.last() == Some(&b'0') {
            digits.pop();
        }
        if self.neg {
            digits.push(b'-');
        }
        digits.iter().rev().map(|&d| d as char).collect()
    }
}

impl FromStr for Int {
    type Err = IntError;

    fn from_str(s: &str) -> Result<Int, IntError> {
        Int::from_dec_str(s)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dec_str())
    }
}

#[cfg(test)]
mod dec_test {
    use crate::{Int, IntError};

    fn init() {
        crate::init_logger(true)
    }

    #[test]
    fn dec_parse_rejects() {
        init();
        assert_eq!(Int::from_dec_str(""), Err(IntError::EmptyInput));
        assert_eq!(Int::from_dec_str("-"), Err(IntError::EmptyInput));
        assert_eq!(Int::from_dec_str("12a3"),
                   Err(IntError::InvalidDigit { found: 'a', pos: 2 }));
        assert_eq!(Int::from_dec_str("-x1"),
                   Err(IntError::InvalidDigit { found: 'x', pos: 1 }));
        assert_eq!(Int::from_dec_str("+7"),
                   Err(IntError::InvalidDigit { found: '+', pos: 0 }));
        assert_eq!(Int::from_dec_str("1 2"),
                   Err(IntError::InvalidDigit { found: ' ', pos: 1 }));
        assert_eq!(Int::from_dec_str("--1"),
                   Err(IntError::InvalidDigit { found: '-', pos: 1 }));
    }

    #[test]
    fn dec_parse_canonicalizes() {
        init();
        assert_eq!(Int::from_dec_str("0").unwrap(), Int::zero());
        assert_eq!(Int::from_dec_str("-0").unwrap(), Int::zero());
        assert_eq!(Int::from_dec_str("-0").unwrap().to_string(), "0");
        assert_eq!(Int::from_dec_str("000123").unwrap().to_string(), "123");
        assert_eq!(Int::from_dec_str("-000123").unwrap().to_string(), "-123");
        assert_eq!(Int::from_dec_str("0000000000000000000000").unwrap(), Int::zero());
    }

    #[test]
    fn dec_round_trip() {
        init();
        let cases = [
            "0", "1", "-1", "9", "10", "4294967295", "4294967296", "-4294967296",
            "999999999", "1000000000", "1000000001", "-999999999999999999",
            "123456789123456789123456789",
            "-123456789123456789123456789",
            "1000000000000000000000",
            "170141183460469231731687303715884105727",
            "-170141183460469231731687303715884105728",
            "3141592653589793238462643383279502884197169399375105820974944592307816406286",
        ];
        for s in cases {
            let v: Int = s.parse().unwrap();
            assert_eq!(v.to_string(), s, "round trip of {s}");
        }
    }

    #[test]
    fn dec_matches_native() {
        init();
        for v in [0i64, 5, -5, 999_999_999, 1_000_000_000, -1_000_000_000,
                  i64::MAX, i64::MIN, 4294967296, -4294967297] {
            assert_eq!(Int::from(v).to_string(), v.to_string());
            assert_eq!(v.to_string().parse::<Int>().unwrap(), Int::from(v));
        }
    }

    #[test]
    fn dec_native_minimum_negates() {
        init();
        // the two's-complement minimum survives parse and double negation
        let n: Int = "-2147483648".parse().unwrap();
        assert_eq!(n, Int::from(i32::MIN));
        assert_eq!(-(-&n), n);
        assert_eq!((-&n).to_string(), "2147483648");
    }

    #[test]
    fn dec_mul_scenario() {
        init();
        let a: Int = "123456789123456789123456789".parse().unwrap();
        let p = &a * &"-1".parse::<Int>().unwrap();
        assert_eq!(p.to_string(), "-123456789123456789123456789");
    }

    #[test]
    fn dec_complement_of_zero() {
        init();
        let z: Int = "0".parse::<Int>().unwrap() - "0".parse::<Int>().unwrap();
        assert_eq!(z.to_string(), "0");
        assert_eq!((!z).to_string(), "-1");
    }
}
