//! # CTS URN parsing and decomposition
//!
//! This crate parses Canonical Text Services (CTS) URNs, the identifiers
//! used in digital philology to reference texts and text passages, e.g.
//! `urn:cts:greekLit:tlg0003.tlg001:1.173` (Thucydides, *Histories*,
//! book 1, chapter 173).
//!
//! Parsing is pure and in-memory: a URN string is decomposed into its
//! namespace, work hierarchy (textgroup, work, version), and passage
//! (a point or a range, each endpoint optionally carrying a sub-reference
//! anchor with an occurrence index). The parsed [`CtsUrn`] is an immutable
//! value object with accessors for every component plus depth-limited
//! passage truncation.
//!
//! ```
//! use cts_urn::CtsUrn;
//!
//! let urn: CtsUrn = "urn:cts:greekLit:tlg0003.tlg001:1.173".parse()?;
//! assert_eq!(urn.namespace(), "greekLit");
//! assert_eq!(urn.textgroup(), "tlg0003");
//! assert_eq!(urn.citation_depth()?, 2);
//! assert_eq!(urn.trim_passage(1)?, "urn:cts:greekLit:tlg0003.tlg001:1");
//! # Ok::<(), cts_urn::CtsUrnError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: [`CtsUrn`] serializes as its raw string and deserializes
//!   through the parser.

pub mod errors;
pub mod models;

pub use errors::CtsUrnError;
pub use models::{CtsUrn, Passage, Scope, Subref};
