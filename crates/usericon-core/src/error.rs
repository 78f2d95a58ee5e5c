//! Error types for the core crate.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving initials or parsing colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name splits into more than two segments on its delimiter.
    #[error("too many delimiters: '{delimiter}' splits the name into {segments} segments")]
    TooManyDelimiters { delimiter: char, segments: usize },

    /// One of the two delimiter-separated segments is empty.
    #[error("segment {index} of the name is empty after splitting on '{delimiter}'")]
    EmptySegment { delimiter: char, index: usize },

    /// A color string could not be parsed as `#rrggbb`.
    #[error("invalid color '{value}'")]
    InvalidColor { value: String },
}

/// Discriminant of [`Error`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::TooManyDelimiters`].
    TooManyDelimiters,
    /// See [`Error::EmptySegment`].
    EmptySegment,
    /// See [`Error::InvalidColor`].
    InvalidColor,
}

impl Error {
    /// Create a too-many-delimiters error.
    pub fn too_many_delimiters(delimiter: char, segments: usize) -> Self {
        Self::TooManyDelimiters {
            delimiter,
            segments,
        }
    }

    /// Create an empty-segment error.
    pub fn empty_segment(delimiter: char, index: usize) -> Self {
        Self::EmptySegment { delimiter, index }
    }

    /// Create an invalid-color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooManyDelimiters { .. } => ErrorKind::TooManyDelimiters,
            Self::EmptySegment { .. } => ErrorKind::EmptySegment,
            Self::InvalidColor { .. } => ErrorKind::InvalidColor,
        }
    }

    /// Whether this error comes from malformed delimiter usage in a name.
    pub fn is_delimiter_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::TooManyDelimiters | ErrorKind::EmptySegment
        )
    }
}
