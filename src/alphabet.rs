//! The 33-letter Cyrillic alphabet shared by every cipher.
//!
//! The ordering is fixed: "Ё" sits between "Е" and "Ж", so the index of a
//! letter is not simply its code point offset. Lookups in both directions are
//! `const fn` over a static table; there is no runtime initialization.

/// Number of symbols in the alphabet; the modulus of the shift cipher.
pub const ALPHABET_LEN: usize = 33;

/// Uppercase letters in alphabet order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Returns the position of an uppercase letter in [`ALPHABET`].
///
/// # Returns
/// `Some(index)` in `0..33`, or `None` for any other character (lowercase
/// letters included).
pub const fn index_of(c: char) -> Option<usize> {
    match c {
        'А'..='Е' => Some(c as usize - 'А' as usize),
        'Ё' => Some(6),
        'Ж'..='Я' => Some(c as usize - 'А' as usize + 1),
        _ => None,
    }
}

/// Returns the letter at `index`, or `None` if `index >= 33`.
pub const fn symbol_at(index: usize) -> Option<char> {
    if index < ALPHABET_LEN {
        Some(ALPHABET[index])
    } else {
        None
    }
}

/// Returns `true` if `c` is an uppercase letter of the alphabet.
pub const fn contains(c: char) -> bool {
    index_of(c).is_some()
}
