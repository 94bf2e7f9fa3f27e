//! Interactive read-eval-print loop driving a [`Cipher`].
//!
//! The loop is written against `BufRead`/`Write` so it runs the same on a
//! terminal and on in-memory buffers in tests. Results go to `out`, error
//! reasons go to `err`.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cipher::Cipher;
use crate::{DegeneracyPolicy, ShiftCipher, TranspositionCipher};

/// A command chosen at the mode prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Leave the loop.
    Exit,
    /// Encrypt the next line.
    Encrypt,
    /// Decrypt the next line.
    Decrypt,
}

/// Cipher to open, with any key material already supplied up front.
///
/// A missing key or column count is asked for at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherSetup {
    /// Gronsfeld shift cipher.
    Shift {
        key: Option<String>,
        policy: DegeneracyPolicy,
    },
    /// Route transposition table.
    Table { columns: Option<i64> },
}

impl Mode {
    /// Maps a mode number to a command: `0` exit, `1` encrypt, `2` decrypt.
    pub fn from_number(n: u32) -> Option<Mode> {
        match n {
            0 => Some(Mode::Exit),
            1 => Some(Mode::Encrypt),
            2 => Some(Mode::Decrypt),
            _ => None,
        }
    }
}

/// Console front end bound to one input and two output streams.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Creates a console reading `input` and writing to `out` and `err`.
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }

    /// Prints `prompt` and reads one line without its line terminator.
    ///
    /// # Returns
    /// `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes a line to the result stream.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Writes a line to the error stream.
    pub fn complain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{}", message)
    }

    /// Builds the cipher described by `setup`, prompting for its key when
    /// none was supplied.
    ///
    /// # Returns
    /// The cipher after announcing it on the result stream, or `None` after
    /// reporting an invalid key, a non-integer column count, or end of input
    /// at the key prompt. Callers end the session with a failure status on
    /// `None`.
    pub fn open_cipher(&mut self, setup: &CipherSetup) -> io::Result<Option<Box<dyn Cipher>>> {
        let (built, announce) = match setup {
            CipherSetup::Shift { key, policy } => {
                let key = match key {
                    Some(key) => key.clone(),
                    None => match self.prompt("Enter key: ")? {
                        Some(key) => key,
                        None => return Ok(None),
                    },
                };
                let built = ShiftCipher::with_policy(&key, *policy)
                    .map(|c| Box::new(c) as Box<dyn Cipher>);
                (built, "Key loaded.")
            }
            CipherSetup::Table { columns } => {
                let cols = match columns {
                    Some(cols) => *cols,
                    None => {
                        let Some(line) = self.prompt("Enter column count: ")? else {
                            return Ok(None);
                        };
                        match line.trim().parse::<i64>() {
                            Ok(cols) => cols,
                            Err(_) => {
                                self.complain("Cipher initialization error: Column count must be an integer")?;
                                return Ok(None);
                            }
                        }
                    }
                };
                let built =
                    TranspositionCipher::new(cols).map(|c| Box::new(c) as Box<dyn Cipher>);
                (built, "Table created.")
            }
        };
        match built {
            Ok(cipher) => {
                self.say(announce)?;
                Ok(Some(cipher))
            }
            Err(e) => {
                self.complain(&format!("Cipher initialization error: {}", e))?;
                Ok(None)
            }
        }
    }

    /// Runs the command loop until the user exits or input ends.
    ///
    /// Errors raised by `cipher` are reported and the loop continues; only
    /// I/O failures end it early.
    pub fn run(&mut self, cipher: &dyn Cipher) -> io::Result<()> {
        loop {
            let Some(line) =
                self.prompt("Choose mode (0 - exit, 1 - encrypt, 2 - decrypt): ")?
            else {
                return Ok(());
            };
            // Anything that is not a number ends the session.
            let Ok(n) = line.trim().parse::<u32>() else {
                return Ok(());
            };
            let Some(mode) = Mode::from_number(n) else {
                self.say("Invalid mode.")?;
                continue;
            };
            if mode == Mode::Exit {
                return Ok(());
            }
            let Some(text) = self.prompt("Enter text: ")? else {
                return Ok(());
            };
            debug!(cipher = cipher.name(), ?mode, "processing line");
            let result = match mode {
                Mode::Encrypt => cipher.encrypt(&text).map(|s| format!("Encrypted: {}", s)),
                _ => cipher.decrypt(&text).map(|s| format!("Decrypted: {}", s)),
            };
            match result {
                Ok(message) => self.say(&message)?,
                Err(e) => self.complain(&format!("Error processing text: {}", e))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShiftCipher, TranspositionCipher};
    use std::io::Cursor;

    fn run_session(cipher: &dyn Cipher, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        Console::new(Cursor::new(script.as_bytes()), &mut out, &mut err)
            .run(cipher)
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn open(setup: &CipherSetup, script: &str) -> (Option<Box<dyn Cipher>>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let cipher = Console::new(Cursor::new(script.as_bytes()), &mut out, &mut err)
            .open_cipher(setup)
            .unwrap();
        (
            cipher,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn shift(key: Option<&str>) -> CipherSetup {
        CipherSetup::Shift {
            key: key.map(String::from),
            policy: DegeneracyPolicy::AllSame,
        }
    }

    #[test]
    fn test_open_shift_from_prompt() {
        let (cipher, out, err) = open(&shift(None), "бвг\n");
        let cipher = cipher.unwrap();
        assert_eq!(cipher.name(), "shift");
        assert_eq!(cipher.encrypt("ААА").unwrap(), "БВГ");
        assert!(out.contains("Enter key: "));
        assert!(out.contains("Key loaded."));
        assert!(err.is_empty());
    }

    #[test]
    fn test_open_table_announces_table() {
        let (cipher, out, _) = open(&CipherSetup::Table { columns: None }, "3\n");
        assert_eq!(cipher.unwrap().name(), "table");
        assert!(out.contains("Table created."));
        assert!(!out.contains("Key loaded."));
    }

    #[test]
    fn test_open_rejects_bad_keys() {
        for (key, reason) in [
            ("ААА", "Weak key: degenerate shift sequence"),
            ("Б1", "Invalid character '1' in key"),
        ] {
            let (cipher, out, err) = open(&shift(None), &format!("{}\n", key));
            assert!(cipher.is_none(), "key {:?} must be rejected", key);
            assert!(err.contains(&format!("Cipher initialization error: {}", reason)));
            assert!(!out.contains("Key loaded."));
        }
        let (cipher, _, err) = open(&shift(Some("ААА")), "");
        assert!(cipher.is_none());
        assert!(err.contains("Cipher initialization error"));
    }

    #[test]
    fn test_open_rejects_bad_column_counts() {
        let table = CipherSetup::Table { columns: None };
        let (cipher, _, err) = open(&table, "1\n");
        assert!(cipher.is_none());
        assert!(err.contains("Cipher initialization error: Column count must be greater than 1, got 1"));

        let (cipher, _, err) = open(&table, "x\n");
        assert!(cipher.is_none());
        assert!(err.contains("Cipher initialization error: Column count must be an integer"));

        let (cipher, _, err) = open(&CipherSetup::Table { columns: Some(-3) }, "");
        assert!(cipher.is_none());
        assert!(err.contains("got -3"));
    }

    #[test]
    fn test_open_eof_at_key_prompt() {
        let (cipher, _, err) = open(&shift(None), "");
        assert!(cipher.is_none());
        assert!(err.is_empty());
        let (cipher, _, _) = open(&CipherSetup::Table { columns: None }, "");
        assert!(cipher.is_none());
    }

    #[test]
    fn test_mode_from_number() {
        assert_eq!(Mode::from_number(0), Some(Mode::Exit));
        assert_eq!(Mode::from_number(1), Some(Mode::Encrypt));
        assert_eq!(Mode::from_number(2), Some(Mode::Decrypt));
        assert_eq!(Mode::from_number(7), None);
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let cipher = ShiftCipher::new("Б").unwrap();
        let (out, err) = run_session(&cipher, "1\nвсем привет\n2\nГТЁНРСЙГЁУ\n0\n");
        assert!(out.contains("Encrypted: ГТЁНРСЙГЁУ"));
        assert!(out.contains("Decrypted: ВСЕМПРИВЕТ"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_error_does_not_stop_loop() {
        let cipher = TranspositionCipher::new(3).unwrap();
        let (out, err) = run_session(&cipher, "2\nерес\n1\nпривет\n0\n");
        assert!(err.contains("Error processing text: Invalid character 'е' in cipher text"));
        assert!(out.contains("Encrypted: ИТРЕПВ"));
    }

    #[test]
    fn test_invalid_mode_reprompts() {
        let cipher = TranspositionCipher::new(3).unwrap();
        let (out, _) = run_session(&cipher, "5\n1\nты\n");
        assert!(out.contains("Invalid mode."));
        assert!(out.contains("Encrypted: ЫТ"));
    }

    #[test]
    fn test_non_numeric_mode_exits() {
        let cipher = TranspositionCipher::new(3).unwrap();
        let (out, _) = run_session(&cipher, "q\n1\nты\n");
        assert!(!out.contains("Encrypted"));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let cipher = ShiftCipher::new("КЛЮЧ").unwrap();
        let (out, err) = run_session(&cipher, "");
        assert!(out.starts_with("Choose mode"));
        assert!(err.is_empty());
    }
}
