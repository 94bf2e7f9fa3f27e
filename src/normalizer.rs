//! Text sanitization for keys, open text, and cipher text.
//!
//! Three policies exist and each cipher picks the one matching its input:
//!
//! | input       | case folding | whitespace | other non-letters |
//! |-------------|--------------|------------|-------------------|
//! | key         | yes          | rejected   | rejected          |
//! | open text   | yes          | dropped    | dropped           |
//! | cipher text | no           | rejected   | rejected          |
//!
//! Open text is lenient because it is typed by a person. Cipher text must
//! already be canonical, so lowercase is an error there.

use crate::alphabet;
use crate::error::{CipherError, Result};

/// Folds a Cyrillic letter to its uppercase alphabet form.
///
/// Lowercase `а..я` and `ё` are mapped to uppercase; uppercase letters pass
/// through unchanged.
///
/// # Returns
/// `Some(letter)` if `c` is a letter of the alphabet in either case,
/// `None` otherwise.
pub fn fold_case(c: char) -> Option<char> {
    match c {
        'а'..='я' => char::from_u32(c as u32 - ('а' as u32 - 'А' as u32)),
        'ё' => Some('Ё'),
        _ if alphabet::contains(c) => Some(c),
        _ => None,
    }
}

/// Validates and normalizes a key string.
///
/// # Errors
/// - [`CipherError::EmptyKey`] if the key is empty or whitespace-only.
/// - [`CipherError::InvalidKeyCharacter`] for the first whitespace or
///   non-letter symbol in the key.
pub fn normalize_key(raw: &str) -> Result<String> {
    if raw.chars().all(char::is_whitespace) {
        return Err(CipherError::EmptyKey);
    }
    raw.chars()
        .map(|c| fold_case(c).ok_or(CipherError::InvalidKeyCharacter(c)))
        .collect()
}

/// Normalizes open text: folds case and drops everything that is not a letter.
///
/// # Errors
/// - [`CipherError::EmptyText`] if the input is empty or whitespace-only.
/// - [`CipherError::InvalidTextCharacter`] if visible symbols remain but none
///   of them is a letter of the alphabet.
pub fn normalize_open_text(raw: &str) -> Result<String> {
    if raw.chars().all(char::is_whitespace) {
        return Err(CipherError::EmptyText);
    }
    let text: String = raw.chars().filter_map(fold_case).collect();
    if text.is_empty() {
        return Err(CipherError::InvalidTextCharacter);
    }
    Ok(text)
}

/// Checks that cipher text consists only of uppercase alphabet letters.
///
/// # Errors
/// - [`CipherError::EmptyText`] if the input is empty.
/// - [`CipherError::InvalidCipherTextCharacter`] for the first symbol that is
///   not an uppercase letter (whitespace, digits, punctuation, lowercase).
pub fn validate_cipher_text(raw: &str) -> Result<&str> {
    if raw.is_empty() {
        return Err(CipherError::EmptyText);
    }
    match raw.chars().find(|&c| !alphabet::contains(c)) {
        Some(bad) => Err(CipherError::InvalidCipherTextCharacter(bad)),
        None => Ok(raw),
    }
}

/// Maps normalized text to alphabet indices.
///
/// Callers must pass text already accepted by one of the policies above.
pub(crate) fn to_indices(text: &str) -> Vec<usize> {
    text.chars().filter_map(alphabet::index_of).collect()
}

/// Maps alphabet indices back to a string. Indices are taken modulo 33.
pub(crate) fn from_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| alphabet::ALPHABET[i % alphabet::ALPHABET_LEN])
        .collect()
}
