use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use thiserror::Error;

pub fn init_logger(is_test: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                     "{} [{}] - {}",
                     Local::now().format("%Y-%m-%dT%H:%M:%S"),
                     record.level(),
                     record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .is_test(is_test)
        .format_timestamp_secs()
        .try_init();
}

pub type Limb = u32;

// The only two fallible entry points are decimal parsing and division;
// every other operation on Int is total.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntError {
    #[error("empty or sign-only decimal string")]
    EmptyInput,
    #[error("invalid character '{found}' at position {pos}")]
    InvalidDigit { found: char, pos: usize },
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Int {
    // The sign-extension bit. Every limb position above 'mag' conceptually
    // holds this bit in all 32 places: all-zero limbs when false, all-one
    // limbs when true. Under the two's-complement reading the value is
    // negative exactly when 'neg' is true.
    neg: bool,
    // The explicit two's-complement limbs, least-significant limb first.
    // Canonical form invariant: the trailing (most-significant) limb is
    // never equal to the sign's fill value. Zero is (false, []) and
    // minus one is (true, []).
    mag: Vec<Limb>,
}

pub mod bits;
pub mod dec;
pub mod div;
pub mod int;
