use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::CtsUrnError;

// Bracketed occurrence index trailing a sub-reference anchor,
// e.g. the `[2]` in `δημήτριος[2]`.
static SUBREF_INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*)\[(.+)\]$").unwrap());

///
/// A text substring anchor within a citation node, with an optional
/// 1-based occurrence index.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subref {
    pub text: String,
    pub index: Option<u32>,
}

impl Subref {
    /// Splits a sub-reference into anchor text and bracketed index.
    ///
    /// Without a bracket suffix the whole string is the anchor. With one,
    /// the bracketed content must be a non-negative integer.
    pub(crate) fn parse(text: &str) -> Result<Self, CtsUrnError> {
        match SUBREF_INDEX_RE.captures(text) {
            Some(caps) => {
                let index = caps[2]
                    .parse::<u32>()
                    .map_err(|_| CtsUrnError::InvalidSubrefIndex(text.to_string()))?;
                Ok(Subref {
                    text: caps[1].to_string(),
                    index: Some(index),
                })
            }
            None => Ok(Subref {
                text: text.to_string(),
                index: None,
            }),
        }
    }
}

///
/// One endpoint of a passage reference: a citation node (dot-separated
/// path, e.g. "1.173") plus an optional sub-reference.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub node: String,
    pub subref: Option<Subref>,
}

impl Scope {
    /// Splits an endpoint on `#` into node and sub-reference.
    pub(crate) fn parse(segment: &str) -> Result<Self, CtsUrnError> {
        let parts: Vec<&str> = segment.split('#').collect();
        match parts.as_slice() {
            [node] => Ok(Scope {
                node: node.to_string(),
                subref: None,
            }),
            [node, subref] => Ok(Scope {
                node: node.to_string(),
                subref: Some(Subref::parse(subref)?),
            }),
            _ => Err(CtsUrnError::MalformedScope(segment.to_string())),
        }
    }

    /// Number of dot-segments in the citation node.
    pub fn depth(&self) -> usize {
        self.node.split('.').count()
    }
}

///
/// The passage part of a CTS URN: either a single point or a range
/// between two endpoints.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Passage {
    Point(Scope),
    Range { begin: Scope, end: Scope },
}

impl Passage {
    /// Splits a non-empty passage component on `-` into a point or a range.
    /// A range needs exactly two non-empty endpoints.
    pub(crate) fn parse(component: &str) -> Result<Self, CtsUrnError> {
        let endpoints: Vec<&str> = component.split('-').collect();
        match endpoints.as_slice() {
            [point] => Ok(Passage::Point(Scope::parse(point)?)),
            [begin, end] if !begin.is_empty() && !end.is_empty() => Ok(Passage::Range {
                begin: Scope::parse(begin)?,
                end: Scope::parse(end)?,
            }),
            _ => Err(CtsUrnError::MalformedPassage(component.to_string())),
        }
    }

    /// The scope whose node governs depth arithmetic: the begin endpoint
    /// for a range, the point itself otherwise.
    pub(crate) fn governing(&self) -> &Scope {
        match self {
            Passage::Point(scope) => scope,
            Passage::Range { begin, .. } => begin,
        }
    }
}
