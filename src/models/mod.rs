pub mod passage;
pub mod urn;

// re-export for cleaner imports
pub use self::passage::{Passage, Scope, Subref};
pub use self::urn::CtsUrn;
