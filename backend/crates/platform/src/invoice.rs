//! Invoice codes
//!
//! Format: `INV-YYYYMMDD-XXXXXXXXXX`, the UTC issue date followed by ten
//! random characters from `[0-9A-Z]` (36^10 combinations per day).
//! Uniqueness is still decided by storage; callers retry on collision.

use chrono::{DateTime, Utc};
use rand::Rng;

pub const INVOICE_PREFIX: &str = "INV";

/// Length of the random suffix
pub const SUFFIX_LEN: usize = 10;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a fresh invoice code for the current date
pub fn generate() -> String {
    generate_at(Utc::now())
}

pub fn generate_at(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    format!("{}-{}-{}", INVOICE_PREFIX, now.format("%Y%m%d"), suffix)
}

/// Whether `code` has the shape produced by [`generate`]
pub fn is_well_formed(code: &str) -> bool {
    let mut parts = code.split('-');
    let (Some(prefix), Some(date), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == INVOICE_PREFIX
        && date.len() == 8
        && date.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| ALPHABET.contains(&b))
}
