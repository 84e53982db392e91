//! [`Command`] stream → HPGL text.
//!
//! Arguments are written as integers truncated toward zero. Plotter units are
//! integral, so the fractional part produced by rotation or scaling is
//! discarded rather than rounded.

use alloc::string::String;
use core::fmt::{self, Write};

use num_traits::Float;

use crate::command::Command;

/// Truncate toward zero and convert to an integer plotter coordinate.
///
/// NaN becomes 0 and out-of-range values saturate at the `i64` bounds.
pub fn plotter_units(v: f64) -> i64 {
    Float::trunc(v) as i64
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        for (i, &arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{}", plotter_units(arg))?;
        }
        f.write_char(';')
    }
}

/// Append every statement to `out`, with no trailing newline.
pub fn encode_into(out: &mut String, commands: &[Command]) {
    for cmd in commands {
        // Writing into a String cannot fail.
        let _ = write!(out, "{cmd}");
    }
}

/// Encode a complete document: all statements back to back, then one `\n`.
pub fn encode(commands: &[Command]) -> String {
    let mut out = String::new();
    encode_into(&mut out, commands);
    out.push('\n');
    out
}
