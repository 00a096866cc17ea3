use crate::pass::{MAX_LENGTH, MIN_LENGTH};

use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    LengthOutOfRange(usize),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::LengthOutOfRange(n) => {
                write!(f, "Length {} out of range ({}..={})", n, MIN_LENGTH, MAX_LENGTH)
            }
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--special" => flags.special = true,
            "-l" | "--length" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| ParseError::MissingValue("--length".into()))?;
                let length: usize = value
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(value.clone()))?;
                if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
                    return Err(ParseError::LengthOutOfRange(length));
                }
                flags.length = Some(length);
            }
            "-n" | "--number" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| ParseError::MissingValue("--number".into()))?;
                flags.number = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.clone()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
