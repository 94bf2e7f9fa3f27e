//! ShiftCipher: Gronsfeld-style modular-addition cipher.
//!
//! Each letter of the text is shifted forward by the alphabet index of the
//! key letter at the same position, the key being reused cyclically:
//!
//! ```text
//! c[p] = (t[p] + k[p mod |k|]) mod 33
//! t[p] = (c[p] + 33 - k[p mod |k|]) mod 33
//! ```
//!
//! Open text is normalized leniently on encryption; cipher text must already
//! be canonical on decryption.

use tracing::{debug, trace};

use crate::alphabet::ALPHABET_LEN;
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::normalizer;

/// Rule deciding which keys are too weak to accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneracyPolicy {
    /// Rejects a key longer than one letter made of a single repeated letter.
    #[default]
    AllSame,
    /// Additionally rejects a key where the zero-shift letter "А" fills at
    /// least half of the positions.
    ZeroShiftMajority,
}

impl DegeneracyPolicy {
    /// Returns `true` if the shift sequence must be rejected under this policy.
    fn is_degenerate(self, shifts: &[usize]) -> bool {
        let all_same = shifts.len() > 1 && shifts.iter().all(|&s| s == shifts[0]);
        match self {
            DegeneracyPolicy::AllSame => all_same,
            DegeneracyPolicy::ZeroShiftMajority => {
                let zeros = shifts.iter().filter(|&&s| s == 0).count();
                all_same || 2 * zeros >= shifts.len()
            }
        }
    }
}

/// Gronsfeld cipher keyed by a sequence of alphabet letters.
///
/// The key is validated and converted to a shift sequence once, at
/// construction, and never changes afterwards.
///
/// # Examples
///
/// ```
/// use cyrcipher::ShiftCipher;
///
/// let cipher = ShiftCipher::new("Б").unwrap();
/// assert_eq!(cipher.encrypt("всем привет").unwrap(), "ГТЁНРСЙГЁУ");
/// assert_eq!(cipher.decrypt("ГТЁНРСЙГЁУ").unwrap(), "ВСЕМПРИВЕТ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCipher {
    key: String,
    key_shifts: Vec<usize>,
}

impl ShiftCipher {
    /// Creates a cipher from `key` using [`DegeneracyPolicy::AllSame`].
    ///
    /// Lowercase letters are folded to uppercase, so `"бвг"` and `"БВГ"`
    /// produce the same cipher.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKey`] if the key is empty or whitespace-only.
    /// - [`CipherError::InvalidKeyCharacter`] if the key holds whitespace,
    ///   digits, punctuation, or non-Cyrillic letters.
    /// - [`CipherError::DegenerateKey`] if the key repeats one letter.
    ///
    /// ```
    /// use cyrcipher::{CipherError, ShiftCipher};
    ///
    /// assert_eq!(ShiftCipher::new("ААА"), Err(CipherError::DegenerateKey));
    /// ```
    pub fn new(key: &str) -> Result<Self> {
        Self::with_policy(key, DegeneracyPolicy::default())
    }

    /// Creates a cipher from `key`, judging key weakness with `policy`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new); which keys count as degenerate depends on
    /// `policy`.
    pub fn with_policy(key: &str, policy: DegeneracyPolicy) -> Result<Self> {
        let key = normalizer::normalize_key(key)?;
        let key_shifts = normalizer::to_indices(&key);
        if policy.is_degenerate(&key_shifts) {
            return Err(CipherError::DegenerateKey);
        }
        debug!(key_len = key_shifts.len(), ?policy, "shift cipher ready");
        Ok(ShiftCipher { key, key_shifts })
    }

    /// Returns the normalized (uppercase) key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the shift applied at each key position.
    pub fn key_shifts(&self) -> &[usize] {
        &self.key_shifts
    }

    /// Encrypts open text.
    ///
    /// Lowercase is folded; whitespace, digits, and punctuation are dropped.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the text is empty or whitespace-only.
    /// - [`CipherError::InvalidTextCharacter`] if no letter remains.
    pub fn encrypt(&self, plain: &str) -> Result<String> {
        let text = normalizer::normalize_open_text(plain)?;
        let out = self.apply(&text, |t, k| t + k);
        trace!(len = out.chars().count(), "shift encrypt");
        Ok(out)
    }

    /// Decrypts cipher text.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the text is empty.
    /// - [`CipherError::InvalidCipherTextCharacter`] on any symbol that is not
    ///   an uppercase alphabet letter.
    pub fn decrypt(&self, cipher: &str) -> Result<String> {
        let text = normalizer::validate_cipher_text(cipher)?;
        let out = self.apply(text, |c, k| c + ALPHABET_LEN - k);
        trace!(len = out.chars().count(), "shift decrypt");
        Ok(out)
    }

    /// Combines each text index with the cyclic key shift; `from_indices`
    /// reduces the result modulo 33.
    fn apply(&self, text: &str, combine: impl Fn(usize, usize) -> usize) -> String {
        let shifted: Vec<usize> = normalizer::to_indices(text)
            .into_iter()
            .zip(self.key_shifts.iter().cycle())
            .map(|(t, &k)| combine(t, k))
            .collect();
        normalizer::from_indices(&shifted)
    }
}

impl Cipher for ShiftCipher {
    fn name(&self) -> &'static str {
        "shift"
    }

    fn encrypt(&self, plain: &str) -> Result<String> {
        ShiftCipher::encrypt(self, plain)
    }

    fn decrypt(&self, cipher: &str) -> Result<String> {
        ShiftCipher::decrypt(self, cipher)
    }
}
