use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::CtsUrnError;
use crate::models::passage::{Passage, Scope};

///
/// A parsed CTS URN, e.g. `urn:cts:greekLit:tlg0003.tlg001:1.173`.
///
/// Immutable once constructed: parsing either yields a fully populated
/// value or fails with a [`CtsUrnError`], never a partial one. The original
/// input is kept verbatim and is what [`Display`] renders, so round-tripping
/// preserves non-ASCII sub-reference anchors byte for byte.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CtsUrn {
    raw: String,
    namespace: String,
    work_component: String,
    textgroup: String,
    work: Option<String>,
    version: Option<String>,
    passage_component: Option<String>,
    passage: Option<Passage>,
}

impl CtsUrn {
    /// Parses a CTS URN from a string. Equivalent to `input.parse()`.
    pub fn new(input: &str) -> Result<Self, CtsUrnError> {
        input.parse()
    }

    /// The original input string, unmodified.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The CTS namespace, e.g. `greekLit`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The whole work component, e.g. `tlg0003.tlg001.perseus-grc1`.
    pub fn work_component(&self) -> &str {
        &self.work_component
    }

    /// The textgroup (roughly: the author), e.g. `tlg0003`.
    ///
    /// Work components with more than three dot-segments keep only their
    /// first segment here; the extra segments are not split out but remain
    /// visible through [`work_component`](Self::work_component). This
    /// mirrors how existing CTS tooling treats exemplar-bearing URNs.
    pub fn textgroup(&self) -> &str {
        &self.textgroup
    }

    /// The work identifier within the textgroup, e.g. `tlg001`.
    pub fn work(&self) -> Option<&str> {
        self.work.as_deref()
    }

    /// The version (edition or translation), e.g. `perseus-grc1`.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The raw passage component, e.g. `1.173` or `1.173-1.180`.
    pub fn passage_component(&self) -> Option<&str> {
        self.passage_component.as_deref()
    }

    /// The citation node of a point passage. `None` for ranges and for
    /// work-level URNs.
    pub fn passage_node(&self) -> Option<&str> {
        match &self.passage {
            Some(Passage::Point(scope)) => Some(&scope.node),
            _ => None,
        }
    }

    /// The citation node opening a range passage.
    pub fn range_begin(&self) -> Option<&str> {
        match &self.passage {
            Some(Passage::Range { begin, .. }) => Some(&begin.node),
            _ => None,
        }
    }

    /// The citation node closing a range passage.
    pub fn range_end(&self) -> Option<&str> {
        match &self.passage {
            Some(Passage::Range { end, .. }) => Some(&end.node),
            _ => None,
        }
    }

    /// Sub-reference anchor on the point, or on the begin endpoint of a
    /// range.
    pub fn subref_1(&self) -> Option<&str> {
        self.passage
            .as_ref()
            .and_then(|p| p.governing().subref.as_ref())
            .map(|s| s.text.as_str())
    }

    /// Occurrence index attached to [`subref_1`](Self::subref_1).
    pub fn subref_index_1(&self) -> Option<u32> {
        self.passage
            .as_ref()
            .and_then(|p| p.governing().subref.as_ref())
            .and_then(|s| s.index)
    }

    /// Sub-reference anchor on the end endpoint of a range.
    pub fn subref_2(&self) -> Option<&str> {
        self.end_scope()
            .and_then(|scope| scope.subref.as_ref())
            .map(|s| s.text.as_str())
    }

    /// Occurrence index attached to [`subref_2`](Self::subref_2).
    pub fn subref_index_2(&self) -> Option<u32> {
        self.end_scope()
            .and_then(|scope| scope.subref.as_ref())
            .and_then(|s| s.index)
    }

    /// Whether the passage is a range like `1.173-1.180`.
    pub fn is_range(&self) -> bool {
        matches!(self.passage, Some(Passage::Range { .. }))
    }

    /// The URN without its passage component, in canonical form:
    /// `urn:cts:{namespace}:{work_component}`.
    pub fn urn_without_passage(&self) -> String {
        format!("urn:cts:{}:{}", self.namespace, self.work_component)
    }

    /// The citation depth of the passage: the number of dot-segments in
    /// the governing citation node (the begin node for ranges).
    ///
    /// Fails with [`CtsUrnError::NoPassage`] on a work-level URN.
    pub fn citation_depth(&self) -> Result<usize, CtsUrnError> {
        Ok(self.governing_scope()?.depth())
    }

    /// The governing citation node truncated to its first `limit`
    /// dot-segments, e.g. `passage(1) == "1"` for `1.173`.
    ///
    /// Fails with [`CtsUrnError::InvalidDepthLevel`] when `limit` exceeds
    /// the citation depth, and with [`CtsUrnError::NoPassage`] on a
    /// work-level URN.
    pub fn passage(&self, limit: usize) -> Result<String, CtsUrnError> {
        let scope = self.governing_scope()?;
        let depth = scope.depth();
        if limit > depth {
            return Err(CtsUrnError::InvalidDepthLevel {
                max: depth,
                requested: limit,
            });
        }
        Ok(scope
            .node
            .split('.')
            .take(limit)
            .collect::<Vec<_>>()
            .join("."))
    }

    /// The full URN truncated to `limit` citation levels, e.g.
    /// `urn:cts:greekLit:tlg0003.tlg001:1` for `limit == 1`.
    ///
    /// Propagates the errors of [`passage`](Self::passage) unchanged.
    pub fn trim_passage(&self, limit: usize) -> Result<String, CtsUrnError> {
        let passage = self.passage(limit)?;
        Ok(format!("{}:{}", self.urn_without_passage(), passage))
    }

    fn governing_scope(&self) -> Result<&Scope, CtsUrnError> {
        self.passage
            .as_ref()
            .map(Passage::governing)
            .ok_or_else(|| CtsUrnError::NoPassage(self.raw.clone()))
    }

    fn end_scope(&self) -> Option<&Scope> {
        match &self.passage {
            Some(Passage::Range { end, .. }) => Some(end),
            _ => None,
        }
    }
}

impl FromStr for CtsUrn {
    type Err = CtsUrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split(':').collect();
        if components.len() < 2 || components[0] != "urn" || components[1] != "cts" {
            return Err(CtsUrnError::InvalidScheme(s.to_string()));
        }

        let (namespace, work_component, passage_component) = match components.as_slice() {
            [_, _, namespace, work] => (*namespace, *work, None),
            [_, _, namespace, work, passage] => (*namespace, *work, Some(*passage)),
            _ => return Err(CtsUrnError::MalformedUrn(s.to_string())),
        };
        if work_component.is_empty() {
            return Err(CtsUrnError::MissingTextgroup(s.to_string()));
        }

        let work_parts: Vec<&str> = work_component.split('.').collect();
        let (textgroup, work, version) = match work_parts.as_slice() {
            [tg, w, v] => (tg.to_string(), Some(w.to_string()), Some(v.to_string())),
            [tg, w] => (tg.to_string(), Some(w.to_string()), None),
            // one segment, or the lenient fallback for four and more:
            // only the textgroup is split out
            [tg, ..] => (tg.to_string(), None, None),
            [] => return Err(CtsUrnError::MissingTextgroup(s.to_string())),
        };

        let passage = match passage_component {
            Some(pc) if !pc.is_empty() => Some(Passage::parse(pc)?),
            _ => None,
        };

        Ok(CtsUrn {
            raw: s.to_string(),
            namespace: namespace.to_string(),
            work_component: work_component.to_string(),
            textgroup,
            work,
            version,
            passage_component: passage_component
                .filter(|pc| !pc.is_empty())
                .map(str::to_string),
            passage,
        })
    }
}

impl Display for CtsUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CtsUrn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CtsUrn {
    fn deserialize<D>(deserializer: D) -> Result<CtsUrn, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
