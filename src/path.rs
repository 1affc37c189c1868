//! Segment sequences
//!
//! A [`Path`] is an ordered list of non-empty segments plus an absolute/relative flag. The same
//! type backs filesystem-style paths and the path component of a [`URI`](crate::URI).

use std::convert::Infallible;
use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use crate::error::InvalidArgument;

/// How a path string is split into segments and how it is rendered back.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStyle {
    /// Segments are separated by `'/'`. A path is absolute when it starts with `'/'`.
    #[default]
    Generic,

    /// Segments are separated by either `'/'` or `'\\'` and rendered with `'\\'`. A path is
    /// absolute when it starts with a drive prefix such as `C:`.
    Windows,
}

impl PathStyle {
    /// The separator used when rendering a path in this style.
    pub fn separator(self) -> char {
        match self {
            PathStyle::Generic => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(self, byte: u8) -> bool {
        match self {
            PathStyle::Generic => byte == b'/',
            PathStyle::Windows => byte == b'/' || byte == b'\\',
        }
    }
}

/// An ordered sequence of path segments.
///
/// Segments are never empty and never contain the separator they were split on. Two paths are
/// equal when their segments, absolute flag and style are equal.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    is_absolute: bool,
    segments: Vec<String>,
    style: PathStyle,
}

impl Path {
    /// An empty relative path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Builds a path from segments. A segment containing a separator of `style` is split further
    /// and empty segments are dropped.
    pub fn from_segments<I, S>(segments: I, is_absolute: bool, style: PathStyle) -> Path
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .flat_map(|segment: String| split_segments(&segment, style))
            .collect();

        Path {
            is_absolute,
            segments,
            style,
        }
    }

    /// Tokenizes `text` using the separators of `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::{Path, PathStyle};
    ///
    /// let path = Path::parse("/usr//local/bin/", PathStyle::Generic);
    /// assert!(path.is_absolute());
    /// assert_eq!(path.segments(), ["usr", "local", "bin"]);
    ///
    /// let path = Path::parse(r"C:\Users/me", PathStyle::Windows);
    /// assert!(path.is_absolute());
    /// assert_eq!(path.render(PathStyle::Windows), r"C:\Users\me");
    /// ```
    pub fn parse(text: &str, style: PathStyle) -> Path {
        let mut path = Path::new();
        path.set(text, style);
        path
    }

    /// Replaces the whole sequence with the tokenization of `text`.
    pub fn set(&mut self, text: &str, style: PathStyle) {
        let bytes = text.as_bytes();

        self.style = style;
        self.is_absolute = match style {
            PathStyle::Generic => bytes.first() == Some(&b'/'),
            PathStyle::Windows => {
                bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
            }
        };
        self.segments = split_segments(text, style);
    }

    /// Returns the extension of the last segment (the text after its last `'.'`), or an empty
    /// string.
    pub fn extension(&self) -> &str {
        let name = self.file_name();

        match name.rfind('.') {
            Some(index) => &name[index + 1..],
            None => "",
        }
    }

    /// Returns the last segment, or an empty string for an empty path.
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends the segments of `other` to a copy of this path.
    ///
    /// The absolute flag and style are kept from `self`. Fails if `other` is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::{InvalidArgument, Path};
    ///
    /// let base: Path = "/srv/www".parse().unwrap();
    /// let joined = base.join(&"static/app.js".parse().unwrap()).unwrap();
    /// assert_eq!(joined.to_string(), "/srv/www/static/app.js");
    ///
    /// let absolute: Path = "/etc".parse().unwrap();
    /// assert_eq!(base.join(&absolute), Err(InvalidArgument::AbsoluteJoin));
    /// ```
    pub fn join(&self, other: &Path) -> Result<Path, InvalidArgument> {
        if other.is_absolute {
            return Err(InvalidArgument::AbsoluteJoin);
        }

        let mut path = self.clone();
        path.segments.extend(other.segments.iter().cloned());
        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the path one segment shorter.
    ///
    /// The parent of an empty relative path is `".."`; the parent of an empty absolute path is
    /// itself.
    pub fn parent(&self) -> Path {
        let mut parent = Path {
            is_absolute: self.is_absolute,
            segments: Vec::with_capacity(self.segments.len()),
            style: self.style,
        };

        match self.segments.split_last() {
            Some((_, rest)) => parent.segments.extend(rest.iter().cloned()),
            None if !self.is_absolute => parent.segments.push("..".to_owned()),
            None => (),
        }

        parent
    }

    /// Renders the path in `style`.
    ///
    /// The generic style writes a leading `'/'` for absolute paths, the Windows style relies on
    /// the drive segment instead.
    pub fn render(&self, style: PathStyle) -> String {
        match style {
            PathStyle::Generic => self.render_with('/'),
            PathStyle::Windows => self.segments.join("\\"),
        }
    }

    /// Renders the path joined by `delimiter`, with a leading `delimiter` when absolute.
    pub fn render_with(&self, delimiter: char) -> String {
        let mut output = String::new();
        self.write_with(&mut output, delimiter)
            .map(|_| output)
            .unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    pub(crate) fn write_with<W>(&self, writer: &mut W, delimiter: char) -> fmt::Result
    where
        W: Write,
    {
        if self.is_absolute {
            writer.write_char(delimiter)?;
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                writer.write_char(delimiter)?;
            }

            writer.write_str(segment)?;
        }

        Ok(())
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

/// Renders the path in its own style: `'/'` separated for generic paths, `'\\'` separated for
/// Windows paths.
impl Display for Path {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self.style {
            PathStyle::Generic => self.write_with(formatter, '/'),
            PathStyle::Windows => formatter.write_str(&self.render(PathStyle::Windows)),
        }
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value, PathStyle::Generic)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Path::from(value))
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl<'a> PartialEq<&'a str> for Path {
    fn eq(&self, other: &&'a str) -> bool {
        self == *other
    }
}

fn split_segments(text: &str, style: PathStyle) -> Vec<String> {
    text.split(|character: char| character.is_ascii() && style.is_separator(character as u8))
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
