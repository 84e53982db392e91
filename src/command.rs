//! HPGL statements as decoded records.

use alloc::vec::Vec;
use core::fmt;

/// Two-character HPGL opcode.
///
/// Any two characters are accepted; only [`PD`](Self::PD) and
/// [`PU`](Self::PU) carry coordinates the transformer touches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mnemonic(pub [char; 2]);

impl Mnemonic {
    /// Pen down: draw through the listed points.
    pub const PD: Self = Self(['P', 'D']);
    /// Pen up: move through the listed points without drawing.
    pub const PU: Self = Self(['P', 'U']);
    /// Plot absolute.
    pub const PA: Self = Self(['P', 'A']);

    /// Build from two characters.
    pub const fn new(first: char, second: char) -> Self {
        Self([first, second])
    }

    /// Whether statements with this opcode list pen coordinate pairs.
    pub fn is_pen_motion(self) -> bool {
        self == Self::PD || self == Self::PU
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.0;
        write!(f, "{a}{b}")
    }
}

/// One HPGL statement: opcode plus its numeric arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// Opcode.
    pub mnemonic: Mnemonic,
    /// Arguments in textual order. Empty for bare statements like `PU;`.
    pub args: Vec<f64>,
}

impl Command {
    /// Build a command.
    pub fn new(mnemonic: Mnemonic, args: Vec<f64>) -> Self {
        Self { mnemonic, args }
    }

    /// A statement with no arguments.
    pub fn bare(mnemonic: Mnemonic) -> Self {
        Self {
            mnemonic,
            args: Vec::new(),
        }
    }

    /// Whether the transformer rewrites this statement's arguments.
    pub fn is_pen_motion(&self) -> bool {
        self.mnemonic.is_pen_motion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn pen_motion_opcodes() {
        assert!(Mnemonic::PD.is_pen_motion());
        assert!(Mnemonic::PU.is_pen_motion());
        assert!(!Mnemonic::PA.is_pen_motion());
        assert!(!Mnemonic::new('S', 'P').is_pen_motion());
        // Case matters: lowercase opcodes are passed through.
        assert!(!Mnemonic::new('p', 'd').is_pen_motion());
    }

    #[test]
    fn mnemonic_display() {
        assert_eq!(Mnemonic::PD.to_string(), "PD");
        assert_eq!(Mnemonic::new('I', 'N').to_string(), "IN");
    }

    #[test]
    fn bare_has_no_args() {
        let c = Command::bare(Mnemonic::PU);
        assert!(c.args.is_empty());
        assert!(c.is_pen_motion());
        assert_eq!(c, Command::new(Mnemonic::PU, vec![]));
    }
}
