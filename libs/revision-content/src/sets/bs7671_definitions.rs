//! BS 7671 Part 2 definitions and common abbreviations.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "def-exposed",
            "What is an exposed-conductive-part?",
            "A conductive part of equipment which can be touched and which is not \
             normally live, but which can become live under fault conditions.",
        )
        .with_category("Terminology")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "def-extraneous",
            "What is an extraneous-conductive-part?",
            "A conductive part liable to introduce a potential, generally earth \
             potential, and not forming part of the electrical installation, such as \
             structural steelwork or metallic pipework.",
        )
        .with_category("Terminology")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "def-basic-protection",
            "What is basic protection?",
            "Protection against electric shock under fault-free conditions, typically \
             by insulation of live parts or by barriers and enclosures.",
        )
        .with_category("Terminology")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "def-fault-protection",
            "What is fault protection?",
            "Protection against electric shock under single-fault conditions, typically \
             by protective earthing, protective equipotential bonding and automatic \
             disconnection of supply.",
        )
        .with_category("Terminology")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "def-skilled",
            "How does BS 7671 define a skilled person (electrically)?",
            "A person who possesses, as appropriate to the nature of the work, adequate \
             education, training and practical skills, and who is able to perceive risks \
             and avoid hazards which electricity can create.",
        )
        .with_category("Terminology")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "def-ads",
            "What does ADS stand for?",
            "Automatic disconnection of supply, the most common fault-protection \
             measure.",
        )
        .with_category("Abbreviations")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "def-cpc",
            "What does CPC stand for?",
            "Circuit protective conductor, the conductor connecting exposed-conductive-\
             parts to the main earthing terminal.",
        )
        .with_category("Abbreviations")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "def-spd",
            "What does SPD stand for?",
            "Surge protective device, fitted to limit transient overvoltages.",
        )
        .with_category("Abbreviations")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "def-pme",
            "What does PME stand for, and which system uses it?",
            "Protective multiple earthing, the supply arrangement behind a TN-C-S \
             system, in which the supply neutral is earthed at multiple points and \
             serves as the combined PEN conductor.",
        )
        .with_category("Abbreviations")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "def-afdd",
            "What is an AFDD?",
            "An arc fault detection device, intended to detect dangerous arcing in a \
             final circuit and disconnect it before a fire can start.",
        ),
    ]
}
