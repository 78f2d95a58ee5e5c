//! Initials extraction from display names.
//!
//! Names are split on the first delimiter from [`DELIMITERS`] whose first
//! occurrence is not at the start of the name. A name with no such delimiter
//! yields its first character. "Character" here means an extended grapheme
//! cluster, so accented letters and emoji sequences stay intact.

use std::fmt;

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};
use crate::logging::targets;

/// Delimiters recognized between name parts, in priority order.
pub const DELIMITERS: [char; 3] = ['-', '.', '_'];

/// The 0-2 character label shown on an icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Initials(String);

impl Initials {
    /// Initials of an empty name.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The initials as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of user-perceived characters (0, 1 or 2).
    pub fn len(&self) -> usize {
        self.0.graphemes(true).count()
    }

    /// Whether no initials were produced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercased copy, as rendered on the icon.
    pub fn to_lowercase(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Initials {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the initials of `name`.
///
/// # Errors
///
/// - [`Error::TooManyDelimiters`] if the chosen delimiter splits the name
///   into more than two segments.
/// - [`Error::EmptySegment`] if a segment is empty (e.g. `"jane-"`).
///
/// An empty name is not an error; it yields [`Initials::empty`].
///
/// # Example
///
/// ```
/// use usericon_core::extract_initials;
///
/// assert_eq!(extract_initials("jane-doe").unwrap().as_str(), "jd");
/// assert_eq!(extract_initials("Jane Doe").unwrap().as_str(), "J");
/// assert!(extract_initials("a-b-c").is_err());
/// ```
pub fn extract_initials(name: &str) -> Result<Initials> {
    if name.is_empty() {
        return Ok(Initials::empty());
    }

    let delimiter = DELIMITERS
        .into_iter()
        .find(|&d| name.find(d).is_some_and(|pos| pos > 0));

    match delimiter {
        Some(delimiter) => split_initials(name, delimiter),
        None => Ok(Initials(first_grapheme(name).to_owned())),
    }
}

fn split_initials(name: &str, delimiter: char) -> Result<Initials> {
    let segments: Vec<&str> = name.split(delimiter).collect();
    if segments.len() > 2 {
        return Err(Error::too_many_delimiters(delimiter, segments.len()));
    }

    if let Some(index) = segments.iter().position(|s| s.is_empty()) {
        return Err(Error::empty_segment(delimiter, index));
    }

    trace!(target: targets::INITIALS, %delimiter, "split name on delimiter");

    let mut initials = String::with_capacity(8);
    for segment in segments {
        initials.push_str(first_grapheme(segment));
    }
    Ok(Initials(initials))
}

fn first_grapheme(s: &str) -> &str {
    s.graphemes(true).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initials(name: &str) -> String {
        extract_initials(name).unwrap().into_string()
    }

    #[test]
    fn test_no_delimiter_uses_first_char() {
        assert_eq!(initials("bob"), "b");
        assert_eq!(initials("Jane Doe"), "J");
        assert_eq!(initials("x"), "x");
    }

    #[test]
    fn test_each_delimiter() {
        assert_eq!(initials("jane-doe"), "jd");
        assert_eq!(initials("john.smith"), "js");
        assert_eq!(initials("mary_ann"), "ma");
    }

    #[test]
    fn test_delimiter_priority() {
        // Hyphen wins over period even when the period comes first.
        assert_eq!(initials("jane.doe-smith"), "js");
        assert_eq!(initials("a-b.c"), "ab");
        assert_eq!(initials("a.b_c"), "ab");
    }

    #[test]
    fn test_leading_delimiter_is_not_a_delimiter() {
        assert_eq!(initials("-jane"), "-");
        assert_eq!(initials(".hidden"), ".");
        // Only the first occurrence is considered.
        assert_eq!(initials("-ja-ne"), "-");
        // A leading hyphen does not block the next delimiter.
        assert_eq!(initials("-jane.doe"), "-d");
    }

    #[test]
    fn test_too_many_delimiters() {
        let err = extract_initials("a-b-c").unwrap_err();
        assert_eq!(err, Error::too_many_delimiters('-', 3));

        let err = extract_initials("a..b").unwrap_err();
        assert_eq!(err, Error::too_many_delimiters('.', 3));
    }

    #[test]
    fn test_trailing_delimiter_is_empty_segment() {
        let err = extract_initials("jane-").unwrap_err();
        assert_eq!(err, Error::empty_segment('-', 1));
    }

    #[test]
    fn test_empty_name() {
        let initials = extract_initials("").unwrap();
        assert!(initials.is_empty());
        assert_eq!(initials.len(), 0);
    }

    #[test]
    fn test_graphemes_stay_intact() {
        assert_eq!(initials("Émile-Zola"), "ÉZ");
        assert_eq!(initials("e\u{301}mile"), "e\u{301}");
        assert_eq!(extract_initials("e\u{301}mile").unwrap().len(), 1);
    }

    #[test]
    fn test_lowercase() {
        let initials = extract_initials("Jane-Doe").unwrap();
        assert_eq!(initials.as_str(), "JD");
        assert_eq!(initials.to_lowercase().as_str(), "jd");
        assert_eq!(initials.len(), 2);
    }
}
