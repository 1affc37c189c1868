//! Segment-based paths and a small URI model.
//!
//! [`Path`] is the segment sequence shared by filesystem-style paths and URI paths. [`URI`]
//! aggregates a scheme, optional credentials, an [`Address`], a [`Path`], ordered [`Queries`] and
//! a fragment. [`URI::from_string`] and [`URI::render`] convert between the textual form and the
//! structured form.
//!
//! ```
//! use uripath::URI;
//!
//! let uri = URI::from_string("http://example.com/a/b?x=1&y=2#frag").unwrap();
//! assert_eq!(uri.host(), "example.com");
//! assert_eq!(uri.path().segments(), ["a", "b"]);
//! assert_eq!(uri.query("y"), Some("2"));
//! assert_eq!(uri.to_string(), "http://example.com/a/b?x=1&y=2#frag");
//! ```

mod scanner;

pub mod address;
pub mod error;
pub mod path;
pub mod query;
pub mod scheme;
pub mod uri;

pub use self::address::{Address, InvalidPort};
pub use self::error::{InvalidArgument, InvalidURI};
pub use self::path::{Path, PathStyle};
pub use self::query::Queries;
pub use self::scheme::SchemeType;
pub use self::uri::{URIBuilder, URI};
