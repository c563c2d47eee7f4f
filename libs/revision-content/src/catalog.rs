//! Catalog of set descriptors, in display order.
//!
//! Authored separately from the card sets themselves; `count` here is a
//! declaration the registry checks against the real card lists at load
//! time.

use revision_core::{Level, SetMeta, SetTier};

pub(crate) fn entries() -> Vec<SetMeta> {
    vec![
        SetMeta {
            id: "safe-isolation".to_string(),
            title: "Safe Isolation".to_string(),
            icon_name: "lock".to_string(),
            description: "The safe isolation procedure step by step, from identifying \
                          the circuit to proving dead."
                .to_string(),
            count: 10,
            tier: SetTier::Beginner,
            estimated_time: "5-10 minutes".to_string(),
            category: "Safety".to_string(),
            level: Level::Both,
        },
        SetMeta {
            id: "cable-colours".to_string(),
            title: "Cable Colours".to_string(),
            icon_name: "cable".to_string(),
            description: "Core colour identification before and after harmonisation, \
                          including mixed installations."
                .to_string(),
            count: 14,
            tier: SetTier::Beginner,
            estimated_time: "10-15 minutes".to_string(),
            category: "Wiring Systems".to_string(),
            level: Level::Both,
        },
        SetMeta {
            id: "bs7671-definitions".to_string(),
            title: "BS 7671 Definitions".to_string(),
            icon_name: "book-open".to_string(),
            description: "Part 2 definitions and the abbreviations the exam expects \
                          you to expand."
                .to_string(),
            count: 10,
            tier: SetTier::Beginner,
            estimated_time: "5-10 minutes".to_string(),
            category: "Regulations".to_string(),
            level: Level::Both,
        },
        SetMeta {
            id: "earthing-systems".to_string(),
            title: "Earthing Systems".to_string(),
            icon_name: "globe".to_string(),
            description: "TN-S, TN-C-S and TT arrangements, how to recognise them and \
                          what each demands of the installation."
                .to_string(),
            count: 10,
            tier: SetTier::Intermediate,
            estimated_time: "10-15 minutes".to_string(),
            category: "Earthing & Bonding".to_string(),
            level: Level::Level2,
        },
        SetMeta {
            id: "circuit-protection".to_string(),
            title: "Circuit Protection".to_string(),
            icon_name: "shield".to_string(),
            description: "MCB curves, RCD types and the selection rules that tie \
                          device, cable and load together."
                .to_string(),
            count: 12,
            tier: SetTier::Intermediate,
            estimated_time: "10-20 minutes".to_string(),
            category: "Protection".to_string(),
            level: Level::Level2,
        },
        SetMeta {
            id: "eicr-codes".to_string(),
            title: "EICR Codes".to_string(),
            icon_name: "clipboard-check".to_string(),
            description: "Classification codes C1, C2, C3 and FI, and how to apply \
                          them to observations on a periodic inspection."
                .to_string(),
            count: 12,
            tier: SetTier::Intermediate,
            estimated_time: "10-15 minutes".to_string(),
            category: "Inspection & Testing".to_string(),
            level: Level::Level3,
        },
        SetMeta {
            id: "testing-sequence".to_string(),
            title: "Testing Sequence".to_string(),
            icon_name: "list-ordered".to_string(),
            description: "The GN3 test sequence for initial verification, dead tests \
                          through live tests, with limits and instruments."
                .to_string(),
            count: 12,
            tier: SetTier::Advanced,
            estimated_time: "15-20 minutes".to_string(),
            category: "Inspection & Testing".to_string(),
            level: Level::Level3,
        },
    ]
}
