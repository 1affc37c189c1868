//! Host and port
//!
//! An [`Address`] is the `host[:port]` part of a URI authority. Credentials are kept on the
//! [`URI`](crate::URI) itself.

use std::error::Error;
use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

/// A host string plus a port, where a port of `0` means "unspecified".
///
/// An address with an empty host is empty regardless of its port.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    host: String,
    port: u16,
}

impl Address {
    pub fn new<H>(host: H, port: u16) -> Address
    where
        H: Into<String>,
    {
        Address {
            host: host.into(),
            port,
        }
    }

    /// An address with no host and no port.
    pub fn empty() -> Address {
        Address::default()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns whether the host is empty. The port is not considered.
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Renders the address as `host[:port]`, bracketing hosts that contain a `':'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Address;
    ///
    /// assert_eq!(Address::new("example.com", 0).render(), "example.com");
    /// assert_eq!(Address::new("example.com", 8080).render(), "example.com:8080");
    /// assert_eq!(Address::new("::1", 443).render(), "[::1]:443");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Address {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.host.contains(':') {
            formatter.write_char('[')?;
            formatter.write_str(&self.host)?;
            formatter.write_char(']')?;
        } else {
            formatter.write_str(&self.host)?;
        }

        if self.port != 0 {
            formatter.write_char(':')?;
            self.port.fmt(formatter)?;
        }

        Ok(())
    }
}

impl FromStr for Address {
    type Err = InvalidPort;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_address(value)
    }
}

impl<'a> TryFrom<&'a str> for Address {
    type Error = InvalidPort;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        parse_address(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidPort {
    Empty,
    InvalidCharacter,
    Overflow,
}

impl Display for InvalidPort {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        use self::InvalidPort::*;

        formatter.write_str(match self {
            Empty => "empty port",
            InvalidCharacter => "invalid port character",
            Overflow => "port overflow",
        })
    }
}

impl Error for InvalidPort {}

/// Splits `host[:port]` text into an [`Address`].
///
/// The port separator is the last `':'`, unless a `']'` follows it, in which case the colon
/// belongs to an IPv6 literal and there is no port. Brackets are removed from the host.
pub(crate) fn parse_address(value: &str) -> Result<Address, InvalidPort> {
    let last_colon_index = value.rfind(':');
    let last_bracket_index = value.rfind(']');

    let (host, port) = match (last_colon_index, last_bracket_index) {
        (Some(colon), Some(bracket)) if bracket > colon => (value, 0),
        (Some(colon), _) => (&value[..colon], parse_port(&value[colon + 1..])?),
        (None, _) => (value, 0),
    };

    let host = host
        .chars()
        .filter(|&character| character != '[' && character != ']')
        .collect::<String>();

    Ok(Address { host, port })
}

fn parse_port(value: &str) -> Result<u16, InvalidPort> {
    if value.is_empty() {
        return Err(InvalidPort::Empty);
    }

    let mut port = 0u16;

    for byte in value.bytes() {
        if !byte.is_ascii_digit() {
            return Err(InvalidPort::InvalidCharacter);
        }

        port = port.checked_mul(10).ok_or(InvalidPort::Overflow)?;
        port = port
            .checked_add((byte - b'0') as u16)
            .ok_or(InvalidPort::Overflow)?;
    }

    Ok(port)
}
