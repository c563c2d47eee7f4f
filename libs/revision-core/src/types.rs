//! Core types for the revision flashcard engine.

use serde::{Deserialize, Serialize};

/// Per-card difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Set-level difficulty tier, distinct from per-card [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetTier {
    Beginner,
    Intermediate,
    Advanced,
}

/// Qualification level a set targets.
///
/// Serialized forms match the authored catalog vocabulary
/// (`"Level 2"`, `"Level 3"`, `"Both"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Level 2")]
    Level2,
    #[serde(rename = "Level 3")]
    Level3,
    Both,
}

impl Level {
    /// Whether a set tagged with this level appears under a `requested`
    /// level filter.
    ///
    /// A `Both` set is study material for either qualification, so it
    /// matches `Level2` and `Level3` requests. A `Both` request matches
    /// only sets tagged `Both`.
    pub fn matches(self, requested: Level) -> bool {
        self == requested || self == Level::Both
    }
}

/// One question/answer unit.
///
/// `category` and `difficulty` are optional classification; a card with
/// neither is unclassified, which filters must treat as "does not match an
/// explicit filter", never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Card {
    /// Create an unclassified card.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: None,
            difficulty: None,
        }
    }

    /// Set the card's category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the card's difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// Descriptive record for one card set, authored separately from the set's
/// contents.
///
/// `count` duplicates the length of the card list it describes; the registry
/// re-derives the real length at load time rather than trusting this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMeta {
    pub id: String,
    pub title: String,
    pub icon_name: String,
    pub description: String,
    pub count: usize,
    pub tier: SetTier,
    pub estimated_time: String,
    pub category: String,
    pub level: Level,
}

/// Optional criteria for listing catalog entries.
///
/// An absent field matches every set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MetaFilter {
    /// Filter by qualification level only.
    pub fn by_level(level: Level) -> Self {
        Self {
            level: Some(level),
            category: None,
        }
    }

    /// Filter by catalog category only.
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            level: None,
            category: Some(category.into()),
        }
    }

    /// Whether a catalog entry satisfies this filter.
    pub fn matches(&self, meta: &SetMeta) -> bool {
        let level_ok = self.level.map_or(true, |l| meta.level.matches(l));
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| meta.category == c);
        level_ok && category_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn difficulty_round_trips_as_str() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("extreme"), None);
    }

    #[test]
    fn difficulty_serializes_snake_case() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
    }

    #[test]
    fn level_serializes_authored_vocabulary() {
        assert_eq!(serde_json::to_string(&Level::Level2).unwrap(), "\"Level 2\"");
        assert_eq!(serde_json::to_string(&Level::Level3).unwrap(), "\"Level 3\"");
        assert_eq!(serde_json::to_string(&Level::Both).unwrap(), "\"Both\"");
    }

    #[test]
    fn both_sets_match_either_level_request() {
        assert!(Level::Both.matches(Level::Level2));
        assert!(Level::Both.matches(Level::Level3));
        assert!(Level::Level2.matches(Level::Level2));
        assert!(!Level::Level2.matches(Level::Level3));
        assert!(!Level::Level2.matches(Level::Both));
        assert!(Level::Both.matches(Level::Both));
    }

    #[test]
    fn new_card_is_unclassified() {
        let card = Card::new("c-1", "Q?", "A.");
        assert_eq!(card.category, None);
        assert_eq!(card.difficulty, None);
    }

    #[test]
    fn card_builder_sets_classification() {
        let card = Card::new("c-1", "Q?", "A.")
            .with_category("Safety")
            .with_difficulty(Difficulty::Medium);
        assert_eq!(card.category.as_deref(), Some("Safety"));
        assert_eq!(card.difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn card_skips_absent_classification_in_json() {
        let json = serde_json::to_string(&Card::new("c-1", "Q?", "A.")).unwrap();
        assert!(!json.contains("category"));
        assert!(!json.contains("difficulty"));
    }

    #[test]
    fn default_filter_matches_everything() {
        let meta = SetMeta {
            id: "safe-isolation".to_string(),
            title: "Safe Isolation".to_string(),
            icon_name: "lock".to_string(),
            description: "Isolation procedure".to_string(),
            count: 10,
            tier: SetTier::Beginner,
            estimated_time: "5-10 minutes".to_string(),
            category: "Safety".to_string(),
            level: Level::Both,
        };
        assert!(MetaFilter::default().matches(&meta));
        assert!(MetaFilter::by_level(Level::Level2).matches(&meta));
        assert!(MetaFilter::by_category("Safety").matches(&meta));
        assert!(!MetaFilter::by_category("Regulations").matches(&meta));
    }
}
