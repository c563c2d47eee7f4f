//! Authored card sets, one module per set.
//!
//! Card ids are namespaced per set (`eicr-`, `cc-`, ...) so they also stay
//! unique across the whole bank, although the registry only requires
//! uniqueness within a set.

mod bs7671_definitions;
mod cable_colours;
mod circuit_protection;
mod earthing_systems;
mod eicr_codes;
mod safe_isolation;
mod testing_sequence;

use std::collections::HashMap;

use revision_core::Card;

/// Collect every authored set, keyed by set id.
pub(crate) fn all() -> HashMap<String, Vec<Card>> {
    let mut sets = HashMap::new();
    sets.insert("eicr-codes".to_string(), eicr_codes::cards());
    sets.insert("cable-colours".to_string(), cable_colours::cards());
    sets.insert("safe-isolation".to_string(), safe_isolation::cards());
    sets.insert("testing-sequence".to_string(), testing_sequence::cards());
    sets.insert(
        "bs7671-definitions".to_string(),
        bs7671_definitions::cards(),
    );
    sets.insert("earthing-systems".to_string(), earthing_systems::cards());
    sets.insert(
        "circuit-protection".to_string(),
        circuit_protection::cards(),
    );
    sets
}
