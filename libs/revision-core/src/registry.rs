//! Validated registry over authored flashcard sets.
//!
//! The registry aggregates two independently authored structures: the card
//! sets themselves and the catalog of [`SetMeta`] descriptors. The declared
//! `count` on a descriptor is never trusted; every cross-structure invariant
//! is re-derived from the actual card lists at load time, and the whole
//! batch is rejected if any set disagrees with its descriptor.

use std::collections::{HashMap, HashSet};

use crate::error::{LoadError, QueryError, Result, ValidationError};
use crate::lint::{self, LintWarning};
use crate::types::{Card, MetaFilter, SetMeta};

/// Immutable, validated view over all card sets and their catalog.
///
/// A registry has exactly two states: under construction inside
/// [`Registry::load`], or ready. There is no mutating method, so a ready
/// registry can be shared freely across readers.
#[derive(Debug, Clone)]
pub struct Registry {
    sets: HashMap<String, Vec<Card>>,
    metas: Vec<SetMeta>,
    warnings: Vec<LintWarning>,
}

impl Registry {
    /// Validate and aggregate authored sets with their catalog.
    ///
    /// Checks, across both structures:
    /// - every card set has exactly one catalog entry and vice versa;
    /// - every catalog `count` equals the set's actual card count;
    /// - card ids are unique within each set.
    ///
    /// Every violation is collected and returned together so content
    /// defects can be fixed in one pass. Violation order is deterministic:
    /// catalog order first, then remaining set ids lexicographically.
    pub fn load(
        sets: HashMap<String, Vec<Card>>,
        metas: Vec<SetMeta>,
    ) -> std::result::Result<Self, LoadError> {
        let mut violations = Vec::new();
        let mut claimed: HashSet<String> = HashSet::new();

        for meta in &metas {
            let duplicate_entry = !claimed.insert(meta.id.clone());
            match sets.get(&meta.id) {
                Some(cards) if !duplicate_entry => {
                    if meta.count != cards.len() {
                        violations.push(ValidationError::CountMismatch {
                            set_id: meta.id.clone(),
                            declared: meta.count,
                            actual: cards.len(),
                        });
                    }
                }
                // A repeated catalog id has no set left to claim; report it
                // as an orphan rather than re-checking the same set.
                _ => violations.push(ValidationError::OrphanMeta {
                    set_id: meta.id.clone(),
                }),
            }
        }

        let mut unclaimed: Vec<&String> =
            sets.keys().filter(|id| !claimed.contains(*id)).collect();
        unclaimed.sort();
        for set_id in unclaimed {
            violations.push(ValidationError::OrphanSet {
                set_id: set_id.clone(),
            });
        }

        let mut set_ids: Vec<&String> = sets.keys().collect();
        set_ids.sort();
        for set_id in set_ids {
            let mut seen = HashSet::new();
            for card in &sets[set_id] {
                if !seen.insert(card.id.as_str()) {
                    violations.push(ValidationError::DuplicateCardId {
                        set_id: set_id.clone(),
                        card_id: card.id.clone(),
                    });
                }
            }
        }

        if !violations.is_empty() {
            return Err(LoadError { violations });
        }

        let warnings = lint::scan(&sets);
        for warning in &warnings {
            tracing::warn!("content lint: {warning}");
        }
        tracing::info!(
            sets = metas.len(),
            cards = sets.values().map(Vec::len).sum::<usize>(),
            lint_warnings = warnings.len(),
            "registry ready"
        );

        Ok(Self {
            sets,
            metas,
            warnings,
        })
    }

    /// Get a set's cards in authored order.
    pub fn cards(&self, set_id: &str) -> Result<&[Card]> {
        self.sets
            .get(set_id)
            .map(Vec::as_slice)
            .ok_or_else(|| QueryError::NotFound {
                set_id: set_id.to_string(),
            })
    }

    /// Get a set's catalog entry.
    pub fn meta(&self, set_id: &str) -> Result<&SetMeta> {
        self.metas
            .iter()
            .find(|meta| meta.id == set_id)
            .ok_or_else(|| QueryError::NotFound {
                set_id: set_id.to_string(),
            })
    }

    /// List catalog entries matching `filter`, preserving catalog order.
    pub fn list_metas(&self, filter: &MetaFilter) -> Vec<&SetMeta> {
        self.metas.iter().filter(|meta| filter.matches(meta)).collect()
    }

    /// Iterate over all catalog entries in catalog order.
    pub fn iter_metas(&self) -> impl Iterator<Item = &SetMeta> {
        self.metas.iter()
    }

    /// Check whether a set id is registered.
    pub fn contains(&self, set_id: &str) -> bool {
        self.sets.contains_key(set_id)
    }

    /// Number of registered sets.
    pub fn len(&self) -> usize {
        self.metas.len()
    }

    /// Check whether the registry holds no sets.
    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    /// Non-fatal lint findings recorded at load time.
    pub fn warnings(&self) -> &[LintWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Level, SetTier};
    use pretty_assertions::assert_eq;

    fn cards(prefix: &str, count: usize) -> Vec<Card> {
        (0..count)
            .map(|i| {
                Card::new(
                    format!("{prefix}-{i}"),
                    format!("Question {i}?"),
                    format!("Answer {i}."),
                )
            })
            .collect()
    }

    fn meta(id: &str, count: usize) -> SetMeta {
        SetMeta {
            id: id.to_string(),
            title: id.to_string(),
            icon_name: "book-open".to_string(),
            description: format!("Cards for {id}"),
            count,
            tier: SetTier::Beginner,
            estimated_time: "10-15 minutes".to_string(),
            category: "Testing".to_string(),
            level: Level::Both,
        }
    }

    fn one_set(id: &str, set: Vec<Card>) -> HashMap<String, Vec<Card>> {
        let mut sets = HashMap::new();
        sets.insert(id.to_string(), set);
        sets
    }

    #[test]
    fn load_accepts_consistent_input() {
        let registry = Registry::load(
            one_set("cable-colors", cards("cc", 25)),
            vec![meta("cable-colors", 25)],
        )
        .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("cable-colors"));
        assert_eq!(registry.meta("cable-colors").unwrap().count, 25);
        assert_eq!(registry.cards("cable-colors").unwrap().len(), 25);
    }

    #[test]
    fn count_mismatch_names_set_and_counts() {
        let error = Registry::load(
            one_set("cable-colors", cards("cc", 25)),
            vec![meta("cable-colors", 24)],
        )
        .unwrap_err();

        assert_eq!(
            error.violations,
            vec![ValidationError::CountMismatch {
                set_id: "cable-colors".to_string(),
                declared: 24,
                actual: 25,
            }]
        );
    }

    #[test]
    fn orphan_set_reported() {
        let error = Registry::load(one_set("eicr-codes", cards("eicr", 3)), vec![]).unwrap_err();

        assert_eq!(
            error.violations,
            vec![ValidationError::OrphanSet {
                set_id: "eicr-codes".to_string(),
            }]
        );
    }

    #[test]
    fn orphan_meta_reported() {
        let error = Registry::load(HashMap::new(), vec![meta("eicr-codes", 3)]).unwrap_err();

        assert_eq!(
            error.violations,
            vec![ValidationError::OrphanMeta {
                set_id: "eicr-codes".to_string(),
            }]
        );
    }

    #[test]
    fn duplicate_card_id_reported() {
        let mut set = cards("cc", 3);
        set.push(Card::new("cc-1", "Again?", "Again."));

        let error =
            Registry::load(one_set("cable-colors", set), vec![meta("cable-colors", 4)])
                .unwrap_err();

        assert_eq!(
            error.violations,
            vec![ValidationError::DuplicateCardId {
                set_id: "cable-colors".to_string(),
                card_id: "cc-1".to_string(),
            }]
        );
    }

    #[test]
    fn duplicate_catalog_entry_is_orphan() {
        let error = Registry::load(
            one_set("eicr-codes", cards("eicr", 3)),
            vec![meta("eicr-codes", 3), meta("eicr-codes", 3)],
        )
        .unwrap_err();

        assert_eq!(
            error.violations,
            vec![ValidationError::OrphanMeta {
                set_id: "eicr-codes".to_string(),
            }]
        );
    }

    #[test]
    fn all_violations_collected_in_one_pass() {
        let mut sets = HashMap::new();
        let mut bad_cards = cards("a", 2);
        bad_cards.push(Card::new("a-0", "Again?", "Again."));
        sets.insert("alpha".to_string(), bad_cards);
        sets.insert("bravo".to_string(), cards("b", 4));

        let error = Registry::load(
            sets,
            vec![meta("alpha", 5), meta("charlie", 2)],
        )
        .unwrap_err();

        assert_eq!(
            error.violations,
            vec![
                ValidationError::CountMismatch {
                    set_id: "alpha".to_string(),
                    declared: 5,
                    actual: 3,
                },
                ValidationError::OrphanMeta {
                    set_id: "charlie".to_string(),
                },
                ValidationError::OrphanSet {
                    set_id: "bravo".to_string(),
                },
                ValidationError::DuplicateCardId {
                    set_id: "alpha".to_string(),
                    card_id: "a-0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn cards_preserve_authored_order() {
        let set = vec![
            Card::new("z", "Q1?", "A1."),
            Card::new("a", "Q2?", "A2."),
            Card::new("m", "Q3?", "A3."),
        ];
        let registry =
            Registry::load(one_set("ordered", set), vec![meta("ordered", 3)]).unwrap();

        let ids: Vec<&str> = registry
            .cards("ordered")
            .unwrap()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn unknown_set_is_not_found() {
        let registry = Registry::load(HashMap::new(), vec![]).unwrap();

        assert_eq!(
            registry.cards("unknown-set"),
            Err(QueryError::NotFound {
                set_id: "unknown-set".to_string(),
            })
        );
        assert_eq!(
            registry.meta("unknown-set"),
            Err(QueryError::NotFound {
                set_id: "unknown-set".to_string(),
            })
        );
    }

    #[test]
    fn list_metas_filters_and_preserves_catalog_order() {
        let mut sets = HashMap::new();
        sets.insert("safe-isolation".to_string(), cards("si", 2));
        sets.insert("eicr-codes".to_string(), cards("eicr", 2));
        sets.insert("earthing".to_string(), cards("es", 2));

        let mut safety = meta("safe-isolation", 2);
        safety.category = "Safety".to_string();
        safety.level = Level::Both;
        let mut eicr = meta("eicr-codes", 2);
        eicr.category = "Inspection & Testing".to_string();
        eicr.level = Level::Level3;
        let mut earthing = meta("earthing", 2);
        earthing.category = "Earthing & Bonding".to_string();
        earthing.level = Level::Level2;

        let registry = Registry::load(sets, vec![safety, eicr, earthing]).unwrap();

        let all: Vec<&str> = registry
            .list_metas(&MetaFilter::default())
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(all, vec!["safe-isolation", "eicr-codes", "earthing"]);

        let level2: Vec<&str> = registry
            .list_metas(&MetaFilter::by_level(Level::Level2))
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(level2, vec!["safe-isolation", "earthing"]);

        let inspection: Vec<&str> = registry
            .list_metas(&MetaFilter::by_category("Inspection & Testing"))
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(inspection, vec!["eicr-codes"]);
    }

    #[test]
    fn lint_findings_survive_load() {
        let set = vec![
            Card::new("c-1", "Q1?", "A1.")
                .with_category("Safety")
                .with_difficulty(Difficulty::Easy),
            Card::new("c-2", "Q2?", "A2.").with_category("safety"),
        ];
        let registry = Registry::load(one_set("bank", set), vec![meta("bank", 2)]).unwrap();

        assert_eq!(registry.warnings().len(), 1);
    }

    #[test]
    fn meta_count_matches_cards_len_for_every_set() {
        let mut sets = HashMap::new();
        sets.insert("alpha".to_string(), cards("a", 3));
        sets.insert("bravo".to_string(), cards("b", 7));
        let registry =
            Registry::load(sets, vec![meta("alpha", 3), meta("bravo", 7)]).unwrap();

        for entry in registry.iter_metas() {
            assert_eq!(entry.count, registry.cards(&entry.id).unwrap().len());
        }
    }
}
