//! UK fixed-wiring core colours, pre- and post-harmonisation.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "cc-line-single",
            "What is the harmonised colour of the line conductor in a single-phase \
             installation?",
            "Brown.",
        )
        .with_category("Harmonised colours")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cc-neutral",
            "What is the harmonised colour of the neutral conductor?",
            "Blue.",
        )
        .with_category("Harmonised colours")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cc-earth",
            "What colour identifies the protective conductor?",
            "Green-and-yellow.",
        )
        .with_category("Harmonised colours")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cc-three-phase",
            "What are the harmonised colours of the three line conductors?",
            "Brown (L1), black (L2) and grey (L3).",
        )
        .with_category("Harmonised colours")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cc-old-line-single",
            "Before harmonisation, what colour was the single-phase line conductor?",
            "Red.",
        )
        .with_category("Pre-harmonisation colours")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cc-old-neutral",
            "Before harmonisation, what colour was the neutral conductor?",
            "Black.",
        )
        .with_category("Pre-harmonisation colours")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cc-old-three-phase",
            "Before harmonisation, what were the colours of the three line conductors?",
            "Red, yellow and blue.",
        )
        .with_category("Pre-harmonisation colours")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cc-mixed-notice",
            "What warning notice is required where an installation contains wiring to \
             both colour schemes?",
            "A notice at or near the appropriate distribution board stating that the \
             installation has wiring colours to two versions of BS 7671 and that great \
             care should be taken before undertaking extension, alteration or repair.",
        )
        .with_category("Mixed installations")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "cc-black-hazard",
            "Why does a black conductor need special care in a mixed-colour installation?",
            "Under the old scheme black was the neutral; under the harmonised scheme \
             black is line L2. A black core must be proven, never assumed, before work.",
        )
        .with_category("Mixed installations")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "cc-oversleeving",
            "What is required when a core is used for a function other than the one its \
             colour indicates?",
            "The core must be identified at its terminations with sleeving or marking in \
             the colour of the function it performs, such as brown sleeving on a switch \
             wire.",
        )
        .with_category("Identification")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cc-bare-cpc",
            "How must the bare circuit protective conductor in a flat twin-and-earth \
             cable be treated where it is exposed?",
            "Covered with green-and-yellow sleeving at every point of termination.",
        )
        .with_category("Identification")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cc-bonding-colour",
            "What colour identifies main protective bonding conductors?",
            "Green-and-yellow, the same as any other protective conductor.",
        )
        .with_category("Identification")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cc-functional-earth",
            "What colour identifies a functional earthing conductor?",
            "Cream.",
        )
        .with_category("Identification")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "cc-changeover-date",
            "When did the harmonised colours become mandatory for new work in the UK?",
            "From 1 April 2006, after the transition period introduced by Amendment 2 of \
             BS 7671:2001 in 2004.",
        ),
    ]
}
