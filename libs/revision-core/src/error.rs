//! Error types for the revision core.

use thiserror::Error;

/// Result type alias for queries against a ready registry.
pub type Result<T> = std::result::Result<T, QueryError>;

/// A single invariant violation found while loading a registry.
///
/// The card sets and the catalog are authored independently, so each rule
/// names the set id it concerns; load collects every violation rather than
/// stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("set {set_id} has cards but no catalog entry")]
    OrphanSet { set_id: String },

    #[error("catalog entry {set_id} has no card set")]
    OrphanMeta { set_id: String },

    #[error("catalog entry {set_id} declares {declared} cards but the set holds {actual}")]
    CountMismatch {
        set_id: String,
        declared: usize,
        actual: usize,
    },

    #[error("duplicate card id {card_id} in set {set_id}")]
    DuplicateCardId { set_id: String, card_id: String },
}

impl ValidationError {
    /// The id of the set the violation concerns.
    pub fn set_id(&self) -> &str {
        match self {
            Self::OrphanSet { set_id }
            | Self::OrphanMeta { set_id }
            | Self::CountMismatch { set_id, .. }
            | Self::DuplicateCardId { set_id, .. } => set_id,
        }
    }

    /// Short rule tag for log output.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::OrphanSet { .. } => "orphan_set",
            Self::OrphanMeta { .. } => "orphan_meta",
            Self::CountMismatch { .. } => "count_mismatch",
            Self::DuplicateCardId { .. } => "duplicate_card_id",
        }
    }
}

/// Aggregate of every violation found in one load pass.
///
/// No registry is constructed when this is returned; there is no
/// partially-valid state.
#[derive(Debug, Clone, Error)]
#[error("registry validation failed with {} violation(s)", .violations.len())]
pub struct LoadError {
    pub violations: Vec<ValidationError>,
}

/// Errors for queries against a ready registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("set not found: {set_id}")]
    NotFound { set_id: String },
}
