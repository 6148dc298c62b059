use thiserror::Error;

/// Everything that can go wrong while parsing a CTS URN or querying its
/// passage. Each variant carries the offending string so callers can report
/// which input failed without keeping it around themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CtsUrnError {
    #[error("Bad syntax for pseudo-URN: {0}")]
    InvalidScheme(String),

    #[error("Wrong number of URN components in: {0}")]
    MalformedUrn(String),

    #[error("No textgroup in: {0}")]
    MissingTextgroup(String),

    #[error("Malformed passage component: {0}")]
    MalformedPassage(String),

    #[error("Malformed scope (more than one '#'): {0}")]
    MalformedScope(String),

    #[error("Sub-reference index is not a non-negative integer: {0}")]
    InvalidSubrefIndex(String),

    #[error("URN has no passage component: {0}")]
    NoPassage(String),

    #[error("Max depth: {max}; limit = {requested}")]
    InvalidDepthLevel { max: usize, requested: usize },
}
