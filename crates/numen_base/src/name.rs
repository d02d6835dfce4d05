//! Per-word name values.

use crate::cipher::word_value;
use crate::reduce::{NumberValue, reduce};

/// Word sums below this receive the chart seed.
pub const RESEED_BELOW: u32 = 10;

/// Split a full name into cipher words.
///
/// Apostrophes are dropped (`O'Neil` stays one word); every other
/// non-alphabetic character separates words (`Anna-Lena` is two).
pub fn name_words(name: &str) -> Vec<String> {
    let cleaned: String = name
        .chars()
        .filter(|&c| c != '\'' && c != '\u{2019}')
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Value of one word, reseeded with `seed` when its sum is a single digit.
///
/// The seed is reduced first; chart seeds are already single digits.
pub fn word_number(word: &str, seed: u32) -> NumberValue {
    let sum = word_value(word);
    if sum < RESEED_BELOW {
        NumberValue::from_raw(sum + reduce(seed))
    } else {
        NumberValue::from_raw(sum)
    }
}

/// Ordered values for every word of `name`.
pub fn name_values(name: &str, seed: u32) -> Vec<NumberValue> {
    name_words(name)
        .iter()
        .map(|w| word_number(w, seed))
        .collect()
}
