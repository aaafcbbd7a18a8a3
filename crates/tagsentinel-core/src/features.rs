//! Feature extraction for RFID tag identifiers.
//!
//! Maps a normalized identifier to a fixed six-dimensional vector of shape
//! statistics: how long it is, how varied its alphabet is, how "numeric"
//! it looks, and how much a single character dominates it. Extraction is
//! pure and total; every string, the empty one included, yields finite
//! values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::ParseIntError;
use std::ops::Index;

/// Number of features extracted per identifier.
pub const NUM_FEATURES: usize = 6;

/// Identifiers longer than this skip the hex parse and saturate.
pub const HEX_PARSE_MAX_LEN: usize = 15;

/// Six-dimensional summary of a normalized identifier.
///
/// Order: Length, Distinct Chars, Entropy, Numeric Value, Letter Ratio,
/// Repeat Ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; NUM_FEATURES]);

impl FeatureVector {
    pub fn zeros() -> Self {
        Self([0.0; NUM_FEATURES])
    }

    pub fn values(&self) -> &[f64; NUM_FEATURES] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn length(&self) -> f64 {
        self.0[0]
    }

    pub fn distinct_chars(&self) -> f64 {
        self.0[1]
    }

    pub fn entropy(&self) -> f64 {
        self.0[2]
    }

    pub fn numeric_value(&self) -> f64 {
        self.0[3]
    }

    pub fn letter_ratio(&self) -> f64 {
        self.0[4]
    }

    pub fn repeat_ratio(&self) -> f64 {
        self.0[5]
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Trim ASCII whitespace and upper-case ASCII letters.
///
/// Non-ASCII characters pass through untouched so normalization does not
/// depend on locale tables.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(is_c_space).to_ascii_uppercase()
}

// Matches C `isspace` in the "C" locale, vertical tab included.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Extract the feature vector of an already-normalized identifier.
///
/// The empty string maps to all zeros.
pub fn extract_features(normalized: &str) -> FeatureVector {
    if normalized.is_empty() {
        return FeatureVector::zeros();
    }

    let freq = char_frequencies(normalized);
    let len: usize = freq.values().sum();
    let len_f = len as f64;

    let letters = normalized.chars().filter(char::is_ascii_alphabetic).count();
    let max_repeat = freq.values().copied().max().unwrap_or(0);

    FeatureVector([
        len_f,
        freq.len() as f64,
        entropy_of(&freq, len_f),
        numeric_value_of(normalized, len),
        letters as f64 / len_f,
        max_repeat as f64 / len_f,
    ])
}

/// Shannon entropy of the character distribution, in bits.
pub fn entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let freq = char_frequencies(s);
    let len: usize = freq.values().sum();
    entropy_of(&freq, len as f64)
}

/// Log-scaled magnitude of the identifier.
///
/// Short identifiers that are entirely hexadecimal are read as a number;
/// anything else falls back to the sum of its character codes. Identifiers
/// longer than [`HEX_PARSE_MAX_LEN`] saturate.
pub fn numeric_value(s: &str) -> f64 {
    numeric_value_of(s, s.chars().count())
}

/// Value reported by [`numeric_value`] for overlong identifiers.
pub fn saturated_numeric_value() -> f64 {
    (u64::MAX as f64).ln_1p()
}

// BTreeMap keeps iteration order fixed, so float sums are reproducible.
fn char_frequencies(s: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

fn entropy_of(freq: &BTreeMap<char, usize>, len: f64) -> f64 {
    freq.values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

fn numeric_value_of(s: &str, len: usize) -> f64 {
    if len > HEX_PARSE_MAX_LEN {
        return saturated_numeric_value();
    }

    match parse_hex(s) {
        Ok(value) => (value as f64).ln_1p(),
        Err(_) => (char_code_sum(s) as f64).ln_1p(),
    }
}

/// Whole-string base-16 parse; any stray character is an error.
fn parse_hex(s: &str) -> Result<u64, ParseIntError> {
    u64::from_str_radix(s, 16)
}

fn char_code_sum(s: &str) -> u64 {
    s.chars().map(u64::from).sum()
}
