use crate::consts::{CHECKSUM_MODULUS, WEIGHTS};

/// Computes the check digit for the first ten digits.
///
/// The outer modulo folds a result of 10 back to 0, so a weighted sum that is
/// already a multiple of ten yields a check digit of 0.
pub fn check_digit(digits: &[u8; 10]) -> u8 {
    let sum: u32 = WEIGHTS
        .iter()
        .zip(digits)
        .map(|(&w, &d)| u32::from(w) * u32::from(d))
        .sum();

    // Always < 10
    ((CHECKSUM_MODULUS - sum % CHECKSUM_MODULUS) % CHECKSUM_MODULUS) as u8
}
