//! TranspositionCipher: columnar route cipher keyed by a column count.
//!
//! The text is written into a table row by row and read back column by
//! column, starting from the rightmost column:
//!
//! ```text
//! cols = 3, text = ВСЕМПРИВЕТ
//!
//!   В С Е
//!   М П Р      read: Е Р Е | С П В | В М И Т
//!   И В Е
//!   Т . .
//! ```
//!
//! The final row may be incomplete. Its empty cells are skipped rather than
//! padded, and decryption recovers the column heights from the text length.

use tracing::{debug, trace};

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::normalizer;
use crate::utils::grid::Grid;

/// Route transposition over a table with a fixed number of columns.
///
/// # Examples
///
/// ```
/// use cyrcipher::TranspositionCipher;
///
/// let table = TranspositionCipher::new(3).unwrap();
/// assert_eq!(table.encrypt("всем привет").unwrap(), "ЕРЕСПВВМИТ");
/// assert_eq!(table.decrypt("ЕРЕСПВВМИТ").unwrap(), "ВСЕМПРИВЕТ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionCipher {
    cols: usize,
}

impl TranspositionCipher {
    /// Creates a cipher with `cols` columns.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidColumnCount`] if `cols <= 1`.
    ///
    /// ```
    /// use cyrcipher::TranspositionCipher;
    ///
    /// assert!(TranspositionCipher::new(1).is_err());
    /// assert!(TranspositionCipher::new(-3).is_err());
    /// ```
    pub fn new(cols: i64) -> Result<Self> {
        if cols <= 1 {
            return Err(CipherError::InvalidColumnCount(cols));
        }
        let cols = usize::try_from(cols).map_err(|_| CipherError::InvalidColumnCount(cols))?;
        debug!(cols, "transposition cipher ready");
        Ok(TranspositionCipher { cols })
    }

    /// Returns the column count.
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Encrypts open text.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the text is empty or whitespace-only.
    /// - [`CipherError::InvalidTextCharacter`] if no letter remains after
    ///   normalization.
    pub fn encrypt(&self, plain: &str) -> Result<String> {
        let text: Vec<char> = normalizer::normalize_open_text(plain)?.chars().collect();
        let out = Grid::from_rows(&text, self.cols).read_columns_reversed();
        trace!(len = text.len(), cols = self.cols, "transposition encrypt");
        Ok(out)
    }

    /// Decrypts cipher text.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the text is empty.
    /// - [`CipherError::InvalidCipherTextCharacter`] on any symbol that is not
    ///   an uppercase alphabet letter.
    pub fn decrypt(&self, cipher: &str) -> Result<String> {
        let text: Vec<char> = normalizer::validate_cipher_text(cipher)?.chars().collect();
        let out = Grid::from_columns_reversed(&text, self.cols)?.read_rows();
        trace!(len = text.len(), cols = self.cols, "transposition decrypt");
        Ok(out)
    }
}

impl Cipher for TranspositionCipher {
    fn name(&self) -> &'static str {
        "table"
    }

    fn encrypt(&self, plain: &str) -> Result<String> {
        TranspositionCipher::encrypt(self, plain)
    }

    fn decrypt(&self, cipher: &str) -> Result<String> {
        TranspositionCipher::decrypt(self, cipher)
    }
}
