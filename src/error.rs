use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::address::InvalidPort;

/// A value handed to a constructor or "with" method broke one of the URI or path invariants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidArgument {
    /// The right-hand side of a path join was absolute.
    AbsoluteJoin,

    /// The host was empty but the scheme requires one (ftp, gopher, http, https, ws, wss).
    EmptyHost,

    /// A `file` URI can only be built from an absolute path.
    RelativeFilePath,
}

impl Display for InvalidArgument {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        use self::InvalidArgument::*;

        formatter.write_str(match self {
            AbsoluteJoin => "expected a relative path",
            EmptyHost => "host cannot be empty for this scheme",
            RelativeFilePath => "file path must be absolute",
        })
    }
}

impl Error for InvalidArgument {}

/// An error representing text that could not be decomposed into a [`URI`](crate::URI).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidURI {
    /// The input was the empty string.
    Empty,

    /// The scheme doesn't support an empty address.
    EmptyAddress,

    /// The address carried a port that is not a valid `u16`.
    InvalidPort(InvalidPort),

    /// Skipping past the scheme separator would split a multi-byte character.
    InvalidSchemeSeparator,

    /// Neither `':'` nor `'/'` appear in the input.
    MissingSchemeSeparator,

    /// Credentials were given (an `'@'` was found) but without a `':'` between the two parts.
    MissingUsernameOrPassword,

    /// A `'?'` or `'#'` appears before the first `'/'`.
    PathBeforeQueryAndFragment,
}

impl Display for InvalidURI {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        use self::InvalidURI::*;

        match self {
            Empty => formatter.write_str("URI cannot be empty"),
            EmptyAddress => formatter.write_str("the scheme doesn't support empty address"),
            InvalidPort(invalid_port) => invalid_port.fmt(formatter),
            InvalidSchemeSeparator => formatter.write_str("invalid scheme separator"),
            MissingSchemeSeparator => {
                formatter.write_str("cannot find the scheme separator (':' or '://')")
            }
            MissingUsernameOrPassword => formatter.write_str("missing username or password"),
            PathBeforeQueryAndFragment => {
                formatter.write_str("malformed URI: path is before query and fragment")
            }
        }
    }
}

impl Error for InvalidURI {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidURI::InvalidPort(invalid_port) => Some(invalid_port),
            _ => None,
        }
    }
}

impl From<InvalidPort> for InvalidURI {
    fn from(value: InvalidPort) -> Self {
        InvalidURI::InvalidPort(value)
    }
}
