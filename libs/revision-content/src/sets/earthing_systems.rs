//! Earthing system arrangements and their on-site characteristics.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "es-tns",
            "How does a TN-S system provide the means of earthing?",
            "Through a separate protective conductor for the whole system, typically \
             the metallic sheath or a separate core of the distributor's cable.",
        )
        .with_category("System types")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "es-tncs",
            "How does a TN-C-S system provide the means of earthing?",
            "The supply combines neutral and protective functions in one PEN conductor; \
             the installation separates them at the origin, with the earthing terminal \
             connected to the supply neutral.",
        )
        .with_category("System types")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "es-tt",
            "How does a TT system provide the means of earthing?",
            "Through an earth electrode at the installation, independent of the supply \
             earthing.",
        )
        .with_category("System types")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "es-pen",
            "What is a PEN conductor?",
            "A single conductor combining the functions of protective earth and \
             neutral, used on the supply side of a TN-C-S arrangement.",
        )
        .with_category("System types")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "es-identify-tns",
            "How is a TN-S supply usually recognised on site?",
            "The earthing conductor is clamped to the sheath or armour of the incoming \
             supply cable rather than to the neutral.",
        )
        .with_category("System types")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "es-letters",
            "What do the letters in the system designations (TN-S, TN-C-S, TT) describe?",
            "The first letter gives the supply's relationship to earth, the second the \
             installation's exposed-conductive-parts' relationship to earth, and any \
             further letters the arrangement of neutral and protective conductors.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "es-ze-typical",
            "What are the typical maximum external earth fault loop impedance values \
             for TN-S, TN-C-S and TT supplies?",
            "0.8 ohms for TN-S, 0.35 ohms for TN-C-S, and 21 ohms for TT.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "es-tt-rcd",
            "Why is an RCD effectively essential for fault protection in a TT system?",
            "Electrode resistance makes the earth fault loop impedance too high for an \
             overcurrent device to disconnect within the required time, while an RCD \
             trips on the small residual current such a fault produces.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "es-pme-bonding",
            "Why do PME supplies require larger main protective bonding conductors?",
            "A broken PEN conductor can place the full load current of the network onto \
             the bonding, so the conductors are sized to the supply neutral rather than \
             to fault current alone.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "es-electrode",
            "What forms the means of earthing in a TT installation?",
            "An earth electrode, such as a driven rod, buried tape or plate, connected \
             to the main earthing terminal by the earthing conductor.",
        ),
    ]
}
