//! Error types for the cyrcipher library.

use thiserror::Error;

/// Errors produced by the cipher engines and their input validation.
///
/// Every fallible operation aborts at the first failure and returns one of
/// these to its caller. No partial output is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key is empty or consists only of whitespace.
    #[error("Empty key")]
    EmptyKey,
    /// Key contains a symbol outside the alphabet (whitespace included).
    #[error("Invalid character {0:?} in key")]
    InvalidKeyCharacter(char),
    /// Key collapses the cipher to a trivial transform.
    #[error("Weak key: degenerate shift sequence")]
    DegenerateKey,
    /// Input text is empty or whitespace-only.
    #[error("Empty text")]
    EmptyText,
    /// Open text holds no alphabet letters once normalized.
    #[error("Open text contains no letters of the alphabet")]
    InvalidTextCharacter,
    /// Cipher text contains a symbol other than an uppercase alphabet letter.
    #[error("Invalid character {0:?} in cipher text")]
    InvalidCipherTextCharacter(char),
    /// Column count is not greater than 1.
    #[error("Column count must be greater than 1, got {0}")]
    InvalidColumnCount(i64),
    /// Cipher text length does not fit the transposition grid.
    #[error("Cipher text length {length} does not fit a grid of {capacity} cells")]
    InvalidCipherLength { length: usize, capacity: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_key() {
        assert_eq!(format!("{}", CipherError::EmptyKey), "Empty key");
    }

    #[test]
    fn test_display_invalid_key_character() {
        let err = CipherError::InvalidKeyCharacter('1');
        assert_eq!(format!("{}", err), "Invalid character '1' in key");
    }

    #[test]
    fn test_display_invalid_column_count() {
        let err = CipherError::InvalidColumnCount(-3);
        assert_eq!(
            format!("{}", err),
            "Column count must be greater than 1, got -3"
        );
    }

    #[test]
    fn test_display_invalid_cipher_length() {
        let err = CipherError::InvalidCipherLength {
            length: 7,
            capacity: 6,
        };
        assert_eq!(
            format!("{}", err),
            "Cipher text length 7 does not fit a grid of 6 cells"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::EmptyText, CipherError::EmptyText);
        assert_ne!(
            CipherError::InvalidCipherTextCharacter('а'),
            CipherError::InvalidCipherTextCharacter('б')
        );
        assert_ne!(CipherError::EmptyKey, CipherError::EmptyText);
    }

    #[test]
    fn test_error_clone() {
        let err = CipherError::DegenerateKey;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
