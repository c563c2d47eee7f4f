//! Core engine for electrical-trade revision flashcards.
//!
//! Provides:
//! - Shared types (Card, SetMeta, Difficulty, Level, etc.)
//! - Validated registry aggregating authored card sets with their catalog
//! - Non-fatal lint over authored category vocabularies
//! - Study-session selection (filtering + ordering, seedable shuffle)
//!
//! The registry is built once from in-memory content and immutable
//! afterwards; construct it explicitly and pass it to whatever needs it
//! rather than holding it in a process-wide global.

pub mod error;
pub mod lint;
pub mod registry;
pub mod session;
pub mod types;

pub use error::{LoadError, QueryError, Result, ValidationError};
pub use lint::LintWarning;
pub use registry::Registry;
pub use session::{build_session, CardQueue, SessionOrder, SessionRequest};
pub use types::{Card, Difficulty, Level, MetaFilter, SetMeta, SetTier};
