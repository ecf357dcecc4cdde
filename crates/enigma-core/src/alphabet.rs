//! Letter and contact-signal arithmetic.
//!
//! A contact signal is the 0-indexed position of a letter (`A = 0`). All
//! arithmetic here reduces its operands modulo [`LEN`] first, so no input can
//! index outside a 26-entry table.

/// Number of letters, and of contacts on every wheel.
pub const LEN: u8 = 26;

/// Converts an ASCII letter of either case to its contact signal.
///
/// Returns `None` for anything else, including non-ASCII letters.
pub fn signal_of(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        // ASCII, so the narrowing cannot lose information.
        Some(ch.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Converts a contact signal back to an uppercase letter.
pub fn letter_of(signal: u8) -> char {
    char::from(b'A' + signal % LEN)
}

/// Wraps any integer position onto the wheel, negatives included.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wrap(position: i32) -> u8 {
    position.rem_euclid(i32::from(LEN)) as u8
}

/// `(signal + offset) mod 26`.
pub const fn shift(signal: u8, offset: u8) -> u8 {
    (signal % LEN + offset % LEN) % LEN
}

/// `(signal - offset) mod 26`, never negative.
pub const fn unshift(signal: u8, offset: u8) -> u8 {
    (signal % LEN + LEN - offset % LEN) % LEN
}
