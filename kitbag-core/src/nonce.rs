//! Random nonce strings.

use rand::Rng;

pub const DIGITS: &str = "1234567890";
pub const LOWERCASE: &str = "qwertyuiopasdfghjklzxcvbnm";
pub const UPPERCASE: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";
pub const SYMBOLS: &str = "`-=[]\\;',./~!@#$%^&*()_+{}|:\"<>?";

/// Random string of `length` characters drawn from `alphabet`.
///
/// A zero length or an empty alphabet yields an empty string.
pub fn nonce_from(length: usize, alphabet: &str) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Random digit string of `length` characters.
pub fn nonce(length: usize) -> String {
    nonce_from(length, DIGITS)
}
