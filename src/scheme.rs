//! Scheme classification
//!
//! Schemes are kept as plain strings on a [`URI`](crate::URI); [`SchemeType`] classifies them
//! against a small fixed vocabulary to decide default ports and whether a host is required.

use std::fmt::{self, Display, Formatter};

use fnv::FnvHashMap;
use lazy_static::lazy_static;

const MAX_KNOWN_SCHEME_LENGTH: usize = 6;

macro_rules! schemes {
    (
        $(
            ($variant:ident, $name:expr, $default_port:expr, $non_file_special:expr);
        )+
    ) => {
        lazy_static! {
            static ref SCHEME_TYPE_MAP: FnvHashMap<&'static [u8], SchemeType> = {
                let mut map = FnvHashMap::default();

            $(
                map.insert($name.as_bytes(), SchemeType::$variant);
            )+

                map
            };
        }

        /// The classification of a scheme string.
        ///
        /// Anything outside the known vocabulary is [`SchemeType::Other`].
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum SchemeType {
        $(
            $variant,
        )+
            Other,
        }

        impl SchemeType {
            /// The lowercase scheme name, or an empty string for [`SchemeType::Other`].
            pub fn as_str(self) -> &'static str {
                use self::SchemeType::*;

                match self {
                $(
                    $variant => $name,
                )+
                    Other => "",
                }
            }

            /// The port conventionally used by the scheme, `0` when there is none.
            ///
            /// This is informational only; it is never written into an
            /// [`Address`](crate::Address).
            pub fn default_port(self) -> u16 {
                use self::SchemeType::*;

                match self {
                $(
                    $variant => $default_port,
                )+
                    Other => 0,
                }
            }

            /// Returns whether the scheme requires a non-empty host, which is every known
            /// scheme except `file`.
            pub fn is_non_file_special(self) -> bool {
                use self::SchemeType::*;

                match self {
                $(
                    $variant => $non_file_special,
                )+
                    Other => false,
                }
            }
        }
    }
}

schemes! {
    (File, "file", 0, false);
    (FTP, "ftp", 21, true);
    (Gopher, "gopher", 70, true);
    (HTTP, "http", 80, true);
    (HTTPS, "https", 443, true);
    (WS, "ws", 80, true);
    (WSS, "wss", 443, true);
}

impl SchemeType {
    /// Classifies `scheme`, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::SchemeType;
    ///
    /// assert_eq!(SchemeType::from_scheme("HTTPS"), SchemeType::HTTPS);
    /// assert_eq!(SchemeType::from_scheme("HTTPS").default_port(), 443);
    /// assert_eq!(SchemeType::from_scheme("mailto"), SchemeType::Other);
    /// ```
    pub fn from_scheme(scheme: &str) -> SchemeType {
        let bytes = scheme.as_bytes();

        if bytes.len() > MAX_KNOWN_SCHEME_LENGTH {
            return SchemeType::Other;
        }

        let mut lowercase_scheme = [0; MAX_KNOWN_SCHEME_LENGTH];

        for (index, byte) in bytes.iter().enumerate() {
            lowercase_scheme[index] = byte.to_ascii_lowercase();
        }

        SCHEME_TYPE_MAP
            .get(&lowercase_scheme[..bytes.len()])
            .cloned()
            .unwrap_or(SchemeType::Other)
    }
}

impl Display for SchemeType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            SchemeType::Other => formatter.write_str("other"),
            scheme_type => formatter.write_str(scheme_type.as_str()),
        }
    }
}

impl<'a> From<&'a str> for SchemeType {
    fn from(value: &'a str) -> Self {
        SchemeType::from_scheme(value)
    }
}
