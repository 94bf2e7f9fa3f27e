//! Cipher trait shared by the shift and transposition engines.
//!
//! Lets callers such as the interactive console drive either engine
//! through a single `&dyn Cipher`.

use crate::error::Result;

/// A keyed, stateless text cipher over the Cyrillic alphabet.
///
/// Implementations hold only an immutable key fixed at construction, so
/// every call is a pure function of its input and the key. Both methods
/// return a freshly allocated string or the first validation failure.
pub trait Cipher {
    /// Short human-readable name of the cipher.
    fn name(&self) -> &'static str;

    /// Normalizes `plain` leniently and encrypts it.
    fn encrypt(&self, plain: &str) -> Result<String>;

    /// Validates `cipher` strictly and decrypts it.
    fn decrypt(&self, cipher: &str) -> Result<String>;
}
