//! HPGL text → [`Command`] stream.
//!
//! Statements are `;`-terminated. The first two characters of a statement
//! are its opcode; anything after them is a `,`-separated list of numbers.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::command::{Command, Mnemonic};

/// Decode failure. The whole document is rejected; nothing is recovered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A statement shorter than a two-character opcode.
    #[error("statement {index}: {statement:?} is too short to hold a mnemonic")]
    MalformedMnemonic {
        /// 0-based position among the non-empty statements.
        index: usize,
        /// The offending statement text.
        statement: String,
    },
    /// An argument that does not parse as a number.
    #[error("statement {index} ({mnemonic}): argument {value:?} is not a number")]
    InvalidArgument {
        /// 0-based position among the non-empty statements.
        index: usize,
        /// Opcode of the statement holding the bad argument.
        mnemonic: Mnemonic,
        /// The argument text as written.
        value: String,
    },
}

/// Decode a complete HPGL document.
///
/// Empty statements (`;;`, a trailing `;`) are skipped. Whitespace before a
/// statement (line breaks in one-statement-per-line plot files) is skipped
/// too; everything after it is taken as written, so the opcode is exactly the
/// next two characters.
pub fn decode(text: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    let statements = text
        .trim()
        .split(';')
        .map(str::trim_start)
        .filter(|s| !s.is_empty());

    for (index, statement) in statements.enumerate() {
        commands.push(decode_statement(index, statement)?);
    }

    debug!(statements = commands.len(), "decoded HPGL document");
    Ok(commands)
}

fn decode_statement(index: usize, statement: &str) -> Result<Command, ParseError> {
    let mut chars = statement.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return Err(ParseError::MalformedMnemonic {
            index,
            statement: String::from(statement),
        });
    };
    let mnemonic = Mnemonic::new(first, second);

    let rest = chars.as_str();
    if rest.is_empty() {
        return Ok(Command::bare(mnemonic));
    }

    let args = rest
        .split(',')
        .map(|piece| {
            parse_number(piece).ok_or_else(|| ParseError::InvalidArgument {
                index,
                mnemonic,
                value: String::from(piece),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Command::new(mnemonic, args))
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn decodes_statements_in_order() {
        let cmds = decode("IN;PU0,0;PD10,0,10,10;").unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::bare(Mnemonic::new('I', 'N')),
                Command::new(Mnemonic::PU, vec![0.0, 0.0]),
                Command::new(Mnemonic::PD, vec![10.0, 0.0, 10.0, 10.0]),
            ]
        );
    }

    #[test]
    fn bare_statement_has_no_args() {
        let cmds = decode("PA;").unwrap();
        assert_eq!(cmds, vec![Command::bare(Mnemonic::PA)]);
    }

    #[test]
    fn empty_statements_are_skipped() {
        let cmds = decode(";;PU;;;PD1,2;;").unwrap();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0], Command::bare(Mnemonic::PU));
        assert_eq!(cmds[1], Command::new(Mnemonic::PD, vec![1.0, 2.0]));
    }

    #[test]
    fn empty_document() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n\t ").unwrap().is_empty());
        assert!(decode(";").unwrap().is_empty());
    }

    #[test]
    fn missing_final_terminator_is_accepted() {
        let cmds = decode("PU1,2").unwrap();
        assert_eq!(cmds, vec![Command::new(Mnemonic::PU, vec![1.0, 2.0])]);
    }

    #[test]
    fn whitespace_between_statements() {
        let cmds = decode("  PU0,0;\nPD5,5;\r\n  PU;\n").unwrap();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[1], Command::new(Mnemonic::PD, vec![5.0, 5.0]));
    }

    #[test]
    fn trailing_space_belongs_to_the_mnemonic() {
        let cmds = decode("PU;P ;").unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::bare(Mnemonic::PU),
                Command::bare(Mnemonic::new('P', ' ')),
            ]
        );
    }

    #[test]
    fn whitespace_after_arguments_is_not_a_bare_statement() {
        assert!(matches!(
            decode("PU ;"),
            Err(ParseError::InvalidArgument { index: 0, .. })
        ));
    }

    #[test]
    fn arguments_accept_fractions_signs_and_padding() {
        let cmds = decode("PD-1.5, +2,3e2 ,.25;").unwrap();
        assert_eq!(cmds[0].args, vec![-1.5, 2.0, 300.0, 0.25]);
    }

    #[test]
    fn any_two_characters_are_a_mnemonic() {
        let cmds = decode("zz7;").unwrap();
        assert_eq!(cmds[0].mnemonic, Mnemonic::new('z', 'z'));
        assert_eq!(cmds[0].args, vec![7.0]);
    }

    #[test]
    fn non_numeric_argument_fails() {
        let err = decode("PD1,x;").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidArgument {
                index: 0,
                mnemonic: Mnemonic::PD,
                value: String::from("x"),
            }
        );
    }

    #[test]
    fn empty_argument_fails() {
        assert!(matches!(
            decode("PU0,0;PD1,,2;"),
            Err(ParseError::InvalidArgument { index: 1, .. })
        ));
        assert!(matches!(
            decode("PD,;"),
            Err(ParseError::InvalidArgument { index: 0, .. })
        ));
    }

    #[test]
    fn one_character_statement_fails() {
        let err = decode("PU;P;PD1,1;").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedMnemonic {
                index: 1,
                statement: String::from("P"),
            }
        );
    }

    #[test]
    fn first_error_aborts_decode() {
        // Both statements are bad; only the first is reported.
        let err = decode("PDa;X;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidArgument { index: 0, .. }));
    }

    #[test]
    fn error_messages_name_the_statement() {
        use alloc::string::ToString;
        let msg = decode("PU0,0;PDq;").unwrap_err().to_string();
        assert_eq!(msg, "statement 1 (PD): argument \"q\" is not a number");
    }
}
