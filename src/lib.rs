//! Classical ciphers over the 33-letter Cyrillic alphabet.
//!
//! Two engines are provided, neither of them cryptographically secure:
//!
//! ```text
//! ShiftCipher          (Gronsfeld: per-position modular addition, cyclic key)
//! TranspositionCipher  (route table: write by rows, read columns right-to-left)
//!         ↑ both validate input through
//! normalizer           (case folding, lenient open text, strict cipher text)
//!         ↑
//! alphabet             (fixed А..Я ordering with Ё after Е)
//! ```
//!
//! Every fallible call returns [`CipherError`] and never produces partial
//! output. Cipher instances are immutable after construction, so they may be
//! shared freely between threads.
//!
//! # Examples
//!
//! ```
//! use cyrcipher::{Cipher, ShiftCipher, TranspositionCipher};
//!
//! let shift = ShiftCipher::new("ключ").unwrap();
//! let secret = shift.encrypt("Всем привет!").unwrap();
//! assert_eq!(shift.decrypt(&secret).unwrap(), "ВСЕМПРИВЕТ");
//!
//! let table = TranspositionCipher::new(3).unwrap();
//! let ciphers: [&dyn Cipher; 2] = [&shift, &table];
//! for c in ciphers {
//!     let enc = c.encrypt("съешь же ещё").unwrap();
//!     assert_eq!(c.decrypt(&enc).unwrap(), "СЪЕШЬЖЕЕЩЁ");
//! }
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod console;
pub mod error;
pub mod normalizer;

mod cipher;
mod shift_cipher;
mod transposition_cipher;
pub(crate) mod utils;

pub use cipher::Cipher;
pub use error::{CipherError, Result};
pub use shift_cipher::{DegeneracyPolicy, ShiftCipher};
pub use transposition_cipher::TranspositionCipher;
