//! The reflector: a hard-wired involution with no moving parts.

use crate::wiring::Wiring;

/// Reflector B, `YRUHQSLDPXNGOKMIEBFZCWVJAT`.
pub const REFLECTOR_B: Reflector =
    Reflector { wiring: Wiring::from_table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT") };

/// Turns the signal back through the rotor stack.
///
/// The table pairs letters, so `reflect(reflect(x)) == x`, and no letter is
/// paired with itself. Both are properties of the physical wiring and are
/// checked by tests rather than at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Reflects a contact signal.
    pub fn reflect(&self, signal: u8) -> u8 {
        self.wiring.map(signal)
    }

    /// The reflector's wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}

impl Default for Reflector {
    fn default() -> Self {
        REFLECTOR_B
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LEN;

    #[test]
    fn reflector_b_is_an_involution() {
        for signal in 0..LEN {
            assert_eq!(REFLECTOR_B.reflect(REFLECTOR_B.reflect(signal)), signal);
        }
        assert!(REFLECTOR_B.wiring().is_involution());
    }

    #[test]
    fn reflector_b_has_no_fixed_points() {
        assert!(!REFLECTOR_B.wiring().has_fixed_point());
    }

    #[test]
    fn reflector_b_pairs() {
        assert_eq!(REFLECTOR_B.reflect(0), 24); // A <-> Y
        assert_eq!(REFLECTOR_B.reflect(1), 17); // B <-> R
        assert_eq!(REFLECTOR_B.wiring().letters(), "YRUHQSLDPXNGOKMIEBFZCWVJAT");
    }
}
