//! Operations for model-based testing.
//!
//! Operations represent everything an operator can do at the keyboard. They
//! are generated by proptest (or `arbitrary` in the fuzzer) and applied to
//! both the model and the real machine.

use arbitrary::Arbitrary;

/// Non-letter keys used by [`Operation::PressSymbol`] and [`SmallText`].
pub const SYMBOLS: &str = " .,!?0123456789-\n";

/// Operations that can be applied to a machine.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Press an uppercase letter key.
    PressLetter {
        /// Letter index, taken modulo 26.
        letter: u8,
    },

    /// Press a lowercase letter key.
    PressLowercase {
        /// Letter index, taken modulo 26.
        letter: u8,
    },

    /// Press a key that is not a letter.
    ///
    /// Must come back unchanged without stepping the rotors.
    PressSymbol {
        /// Index into [`SYMBOLS`], taken modulo its length.
        symbol: u8,
    },

    /// Encode a whole string.
    EncodeText {
        /// Text content (kept small for efficiency).
        content: SmallText,
    },
}

/// Small text content for testing.
///
/// A compact seed expands deterministically into mixed-case letters with
/// the occasional symbol, so shrinking stays cheap.
#[derive(Debug, Clone, Arbitrary)]
pub struct SmallText {
    /// Content seed.
    pub seed: u8,
    /// Length, taken modulo 32.
    pub len: u8,
}

impl SmallText {
    /// Expand to the actual text.
    pub fn to_text(&self) -> String {
        let len = usize::from(self.len % 32);
        (0..len)
            .map(|i| {
                let value = self.seed.wrapping_mul(31).wrapping_add(i as u8 * 7);
                match value % 8 {
                    0 => symbol_key(value / 8),
                    1 | 2 => char::from(b'a' + value % 26),
                    _ => char::from(b'A' + value % 26),
                }
            })
            .collect()
    }
}

/// Result of applying an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// Lamp lit by a single key.
    Key(char),
    /// Output of a whole-string encode.
    Text(String),
}

/// The key for a [`Operation::PressSymbol`] index.
pub fn symbol_key(symbol: u8) -> char {
    let symbols = SYMBOLS.as_bytes();
    char::from(symbols[usize::from(symbol) % symbols.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_never_letters() {
        for symbol in 0..=u8::MAX {
            assert!(!symbol_key(symbol).is_ascii_alphabetic());
        }
    }

    #[test]
    fn small_text_is_deterministic() {
        let text = SmallText { seed: 9, len: 20 };
        assert_eq!(text.to_text(), text.to_text());
        assert_eq!(text.to_text().chars().count(), 20);
    }

    #[test]
    fn small_text_length_wraps() {
        assert!(SmallText { seed: 1, len: 32 }.to_text().is_empty());
    }
}
