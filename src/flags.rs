//! Command-line flag grammar: transformation flags followed by file paths.
//!
//! ```text
//! hpgl-transform [-T n] [-Tx n] [-Ty n] [-R n] [-S n] [-Sx n] [-Sy n]
//!                [-C n] [-Cx n] [-Cy n] [files ...]
//! ```
//!
//! Flags may repeat and appear in any order; the chain applies them in the
//! order given. The first token that does not start with `-` ends flag
//! parsing and it, with everything after it, is the file list.

use alloc::string::String;
use alloc::vec::Vec;

use crate::transform::{Chain, Transformation};

/// Usage text printed for `--help` and on bad arguments.
pub const USAGE: &str = "\
Usage: hpgl-transform [-T num] [-Tx num] [-Ty num] [-R num] [-S num] [-Sx num] [-Sy num] [-C num] [-Cx num] [-Cy num] [files ...]

Apply transformations to all points in HPGL input. Transformations are
applied in the given order and may be repeated. If no files are given, HPGL
is read from stdin and written to stdout. Files are rewritten in place, so
back them up first.

Transformations:
    -T  num     translate by num plotter units along both axes
    -Tx num     translate by num plotter units along the x axis
    -Ty num     translate by num plotter units along the y axis
    -R  num     rotate by num degrees counter-clockwise about the origin
    -S  num     scale by factor num
    -Sx num     scale by factor num along the x axis
    -Sy num     scale by factor num along the y axis
    -C  num     shear by factor num
    -Cx num     shear by factor num along the x axis
    -Cy num     shear by factor num along the y axis
";

/// Fully parsed command line. Built once, never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Invocation {
    /// Transformations in command-line order.
    pub chain: Chain,
    /// Files to rewrite in place. Empty means stdin → stdout.
    pub files: Vec<String>,
}

impl Invocation {
    /// Whether input comes from stdin rather than files.
    pub fn uses_stdio(&self) -> bool {
        self.files.is_empty()
    }
}

/// Bad command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// A `-` token that names no transformation.
    #[error("unknown option `{flag}`")]
    UnknownFlag {
        /// The token as given.
        flag: String,
    },
    /// A transformation flag at the end of the arguments.
    #[error("option `{flag}` requires a numeric value")]
    MissingValue {
        /// The flag missing its value.
        flag: String,
    },
    /// A transformation flag followed by something that is not a number.
    #[error("invalid value `{value}` for option `{flag}`")]
    InvalidValue {
        /// The flag.
        flag: String,
        /// The value as given.
        value: String,
    },
}

/// Parse arguments (without the program name) into an [`Invocation`].
pub fn parse_args<I, S>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let mut chain = Chain::new();
    let mut files = Vec::new();

    while let Some(arg) = args.next() {
        let flag = arg.as_ref();
        if !flag.starts_with('-') {
            files.push(String::from(flag));
            files.extend(args.by_ref().map(|s| String::from(s.as_ref())));
            break;
        }

        if !Transformation::FLAGS.iter().any(|&known| known == flag) {
            return Err(UsageError::UnknownFlag {
                flag: String::from(flag),
            });
        }
        let Some(value) = args.next() else {
            return Err(UsageError::MissingValue {
                flag: String::from(flag),
            });
        };
        let value = value.as_ref();
        let step = parse_magnitude(value)
            .and_then(|m| Transformation::from_flag(flag, m))
            .ok_or_else(|| UsageError::InvalidValue {
                flag: String::from(flag),
                value: String::from(value),
            })?;
        chain.push(step);
    }

    Ok(Invocation { chain, files })
}

fn parse_magnitude(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn no_arguments_means_stdio() {
        let inv = parse_args(Vec::<String>::new()).unwrap();
        assert!(inv.chain.is_empty());
        assert!(inv.uses_stdio());
    }

    #[test]
    fn flags_keep_command_line_order() {
        let inv = parse_args(["-S", "2", "-Tx", "10", "-R", "-90", "-S", "0.5"]).unwrap();
        assert_eq!(
            inv.chain.steps(),
            &[
                Transformation::Scale(2.0),
                Transformation::TranslateX(10.0),
                Transformation::Rotate(-90.0),
                Transformation::Scale(0.5),
            ]
        );
        assert!(inv.files.is_empty());
    }

    #[test]
    fn every_flag_is_accepted() {
        let mut args = Vec::new();
        for flag in Transformation::FLAGS {
            args.push(flag);
            args.push("1");
        }
        let inv = parse_args(args).unwrap();
        assert_eq!(inv.chain.len(), Transformation::FLAGS.len());
        for (step, flag) in inv.chain.steps().iter().zip(Transformation::FLAGS) {
            assert_eq!(step.flag(), flag);
        }
    }

    #[test]
    fn first_non_flag_starts_file_list() {
        let inv = parse_args(["-Ty", "5", "a.hpgl", "-R", "b.hpgl"]).unwrap();
        assert_eq!(inv.chain.steps(), &[Transformation::TranslateY(5.0)]);
        assert_eq!(inv.files, vec!["a.hpgl", "-R", "b.hpgl"]);
        assert!(!inv.uses_stdio());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            parse_args(["-Q", "1"]),
            Err(UsageError::UnknownFlag {
                flag: String::from("-Q")
            })
        );
        assert!(matches!(
            parse_args(["-", "x.hpgl"]),
            Err(UsageError::UnknownFlag { .. })
        ));
    }

    #[test]
    fn missing_value_is_rejected() {
        assert_eq!(
            parse_args(["-T", "1", "-R"]),
            Err(UsageError::MissingValue {
                flag: String::from("-R")
            })
        );
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        assert_eq!(
            parse_args(["-Sx", "big"]),
            Err(UsageError::InvalidValue {
                flag: String::from("-Sx"),
                value: String::from("big"),
            })
        );
    }

    #[test]
    fn usage_lists_every_flag() {
        for flag in Transformation::FLAGS {
            assert!(USAGE.contains(&alloc::format!("    {flag:<4}num")), "{flag} missing");
        }
    }
}
