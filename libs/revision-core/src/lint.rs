//! Non-fatal lint pass over authored card sets.
//!
//! Card categories are open strings, so a typo splits the filter vocabulary
//! without any type-level signal. The lint surfaces probable authoring
//! mistakes as warnings; a misfiled card is still studyable, so none of
//! these reject the content.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::Card;

/// Distinct categories a single set may use before its vocabulary stops
/// being a usable filter.
const MAX_CATEGORIES_PER_SET: usize = 8;

/// A probable authoring mistake in a card set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// A category differs from an earlier one in the same set only by case
    /// or surrounding whitespace.
    CaseVariantCategory {
        set_id: String,
        category: String,
        canonical: String,
    },
    /// A set uses more distinct categories than a filter vocabulary
    /// supports.
    SprawlingVocabulary { set_id: String, count: usize },
    /// A card's question or answer is empty or whitespace-only.
    BlankText {
        set_id: String,
        card_id: String,
        field: &'static str,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseVariantCategory {
                set_id,
                category,
                canonical,
            } => write!(
                f,
                "set {set_id}: category {category:?} is a variant spelling of {canonical:?}"
            ),
            Self::SprawlingVocabulary { set_id, count } => write!(
                f,
                "set {set_id}: {count} distinct categories (expected at most {MAX_CATEGORIES_PER_SET})"
            ),
            Self::BlankText {
                set_id,
                card_id,
                field,
            } => write!(f, "set {set_id}: card {card_id} has a blank {field}"),
        }
    }
}

/// Scan authored sets for probable mistakes. Never fails.
///
/// Sets are visited in id order so repeated scans of the same content
/// report warnings in the same order.
pub fn scan(sets: &HashMap<String, Vec<Card>>) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    let mut set_ids: Vec<&String> = sets.keys().collect();
    set_ids.sort();

    for set_id in set_ids {
        scan_set(set_id, &sets[set_id], &mut warnings);
    }
    warnings
}

fn scan_set(set_id: &str, cards: &[Card], warnings: &mut Vec<LintWarning>) {
    // First spelling seen for each normalized category is the canonical one.
    let mut canonical: HashMap<String, &str> = HashMap::new();
    let mut reported_variants: HashSet<&str> = HashSet::new();

    for card in cards {
        if card.question.trim().is_empty() {
            warnings.push(LintWarning::BlankText {
                set_id: set_id.to_string(),
                card_id: card.id.clone(),
                field: "question",
            });
        }
        if card.answer.trim().is_empty() {
            warnings.push(LintWarning::BlankText {
                set_id: set_id.to_string(),
                card_id: card.id.clone(),
                field: "answer",
            });
        }

        let Some(category) = card.category.as_deref() else {
            continue;
        };
        let normalized = category.trim().to_lowercase();
        match canonical.get(normalized.as_str()) {
            None => {
                canonical.insert(normalized, category);
            }
            Some(&first) => {
                if first != category && reported_variants.insert(category) {
                    warnings.push(LintWarning::CaseVariantCategory {
                        set_id: set_id.to_string(),
                        category: category.to_string(),
                        canonical: first.to_string(),
                    });
                }
            }
        }
    }

    if canonical.len() > MAX_CATEGORIES_PER_SET {
        warnings.push(LintWarning::SprawlingVocabulary {
            set_id: set_id.to_string(),
            count: canonical.len(),
        });
    }
}
