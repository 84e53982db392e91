//! Geometric transformation of HPGL plotter files.
//!
//! Decode a document into [`Command`]s, run every pen coordinate pair through
//! a [`Chain`] of translate/rotate/scale/shear steps, and encode it again.
//! Only `PD`/`PU` coordinates change; every other statement is passed through.
//!
//! ```
//! use hpgl_transform::{Chain, transform_document};
//!
//! let out = transform_document("PU0,0;PD10,0,10,10,0,10;PU;\n", &Chain::new().rotate(90.0))
//!     .expect("valid HPGL");
//! assert_eq!(out, "PU0,0;PD0,10,-10,10,-10,0;PU;\n");
//! ```
//!
//! # Modules
//!
//! - [`geometry`]: point primitives (translate, rotate, scale, shear)
//! - [`decode`](mod@decode) / [`encode`](mod@encode): HPGL text ↔ [`Command`] stream
//! - [`transform`](mod@transform): [`Transformation`] steps and ordered [`Chain`]s
//! - [`flags`]: command-line flag grammar producing an [`Invocation`]
//! - `cli` (feature `cli`): stdin/stdout and in-place file rewriting

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod command;
pub mod decode;
pub mod encode;
pub mod flags;
pub mod geometry;
pub mod transform;

#[cfg(feature = "cli")]
pub mod cli;

use alloc::string::String;

pub use command::{Command, Mnemonic};
pub use decode::{ParseError, decode};
pub use encode::{encode, encode_into};
pub use flags::{Invocation, USAGE, UsageError, parse_args};
pub use geometry::Point;
pub use transform::{Chain, Transformation, transform};

/// Decode, transform and re-encode a whole document.
///
/// Nothing is produced unless the entire document decodes.
pub fn transform_document(text: &str, chain: &Chain) -> Result<String, ParseError> {
    let commands = decode(text)?;
    Ok(encode(&transform(&commands, chain)))
}
