//! Study-session selection over a ready registry.
//!
//! [`build_session`] is a pure function: it resolves a set, filters it by
//! the request's criteria, and orders the survivors. Nothing is retained
//! between calls, so concurrent sessions never interfere.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::Registry;
use crate::types::{Card, Difficulty};

/// Presentation order for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrder {
    AsAuthored,
    Shuffled,
}

impl Default for SessionOrder {
    fn default() -> Self {
        Self::AsAuthored
    }
}

/// Request for one study session.
///
/// Absent `categories`/`difficulties` match every card; a present filter
/// never matches a card that lacks that classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub set_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulties: Option<Vec<Difficulty>>,
    #[serde(default)]
    pub order: SessionOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SessionRequest {
    /// Request the whole set in authored order.
    pub fn new(set_id: impl Into<String>) -> Self {
        Self {
            set_id: set_id.into(),
            categories: None,
            difficulties: None,
            order: SessionOrder::AsAuthored,
            seed: None,
        }
    }

    /// Keep only cards whose category is listed.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only cards whose difficulty is listed.
    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulties = Some(difficulties.into_iter().collect());
        self
    }

    /// Present the session shuffled.
    pub fn shuffled(mut self) -> Self {
        self.order = SessionOrder::Shuffled;
        self
    }

    /// Seed the shuffle so the same seed reproduces the same order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Ordered working set of cards for one session.
///
/// A stateless value: progress tracking and scheduling live outside the
/// core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQueue {
    cards: Vec<Card>,
}

impl CardQueue {
    /// Number of cards in the queue.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether no cards matched the request.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The cards in presentation order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consume the queue, yielding its cards.
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl IntoIterator for CardQueue {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Build the card queue for one study session.
///
/// Fails with [`QueryError::NotFound`](crate::error::QueryError) only when
/// the set id is unknown; a request that filters every card out returns an
/// empty queue.
pub fn build_session(registry: &Registry, request: &SessionRequest) -> Result<CardQueue> {
    let source = registry.cards(&request.set_id)?;

    let mut cards: Vec<Card> = source
        .iter()
        .filter(|card| matches_request(card, request))
        .cloned()
        .collect();

    if request.order == SessionOrder::Shuffled {
        match request.seed {
            Some(seed) => cards.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => cards.shuffle(&mut rand::thread_rng()),
        }
    }

    Ok(CardQueue { cards })
}

/// Conjunction over the request's filter dimensions. A card missing a
/// dimension never matches an explicit filter on that dimension.
fn matches_request(card: &Card, request: &SessionRequest) -> bool {
    let category_ok = match &request.categories {
        Some(wanted) => card
            .category
            .as_deref()
            .map_or(false, |category| wanted.iter().any(|w| w == category)),
        None => true,
    };
    let difficulty_ok = match &request.difficulties {
        Some(wanted) => card
            .difficulty
            .map_or(false, |difficulty| wanted.contains(&difficulty)),
        None => true,
    };
    category_ok && difficulty_ok
}
