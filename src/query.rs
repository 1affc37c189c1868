//! Query mapping
//!
//! [`Queries`] keeps query parameters sorted by key. Keys are unique and both keys and values have
//! every space replaced with `%20` when stored. No other percent-encoding is performed.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display, Formatter, Write};
use std::iter::FromIterator;

/// An ordered key to value mapping of query parameters.
///
/// Iteration is always in ascending key order, independent of insertion order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<String, String>"))]
pub struct Queries(BTreeMap<String, String>);

impl Queries {
    pub fn new() -> Queries {
        Queries::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&normalize(key))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&normalize(key)).map(String::as_str)
    }

    /// Stores a pair, replacing spaces in both with `%20`. Returns the previous value of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::Queries;
    ///
    /// let mut queries = Queries::new();
    /// queries.insert("a b", "c d");
    /// assert_eq!(queries.iter().next(), Some(("a%20b", "c%20d")));
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.0.insert(normalize(key.as_ref()), normalize(value.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Display for Queries {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_char('&')?;
            }

            formatter.write_str(key)?;

            // A bare empty key still needs its '=' to survive a reparse.
            if !value.is_empty() || key.is_empty() {
                formatter.write_char('=')?;
                formatter.write_str(value)?;
            }
        }

        Ok(())
    }
}

impl From<BTreeMap<String, String>> for Queries {
    fn from(value: BTreeMap<String, String>) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Queries
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut queries = Queries::new();

        for (key, value) in iter {
            queries.insert(key, value);
        }

        queries
    }
}

impl<'a> IntoIterator for &'a Queries {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`Queries`], in ascending key order.
#[derive(Clone, Debug)]
pub struct Iter<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Splits the text between `'?'` and the query's end into pairs.
///
/// Pieces are separated by `'&'` and split on their first `'='`; a piece without `'='` has an
/// empty value. Empty pieces are skipped and a repeated key keeps its last value.
pub(crate) fn parse_queries(value: &str) -> Queries {
    value
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.find('=') {
            Some(index) => (&piece[..index], &piece[index + 1..]),
            None => (piece, ""),
        })
        .collect()
}

fn normalize(value: &str) -> String {
    value.replace(' ', "%20")
}
