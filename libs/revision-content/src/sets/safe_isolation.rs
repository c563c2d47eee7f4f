//! The safe isolation procedure for work on electrical installations.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "si-identify",
            "What is the first step of the safe isolation procedure?",
            "Identify the circuit or equipment to be worked on and every point of \
             isolation that affects it.",
        )
        .with_category("Procedure")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "si-lock-off",
            "How is an isolation secured once the circuit is switched off?",
            "With a locking-off device and a unique key or combination retained by the \
             person carrying out the work.",
        )
        .with_category("Procedure")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "si-notice",
            "What should be posted at the point of isolation?",
            "A warning notice stating that the circuit is being worked on and must not \
             be re-energised.",
        )
        .with_category("Procedure")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "si-prove-sequence",
            "In what sequence must a voltage indicator be proved when verifying dead?",
            "Prove the indicator on a known live source or proving unit, test the \
             isolated circuit, then prove the indicator again.",
        )
        .with_category("Procedure")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "si-test-points",
            "Between which conductors must a single-phase circuit be tested to verify \
             it is dead?",
            "Line to neutral, line to earth and neutral to earth.",
        )
        .with_category("Procedure")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "si-three-phase-points",
            "How many test combinations are needed to verify a three-phase circuit dead?",
            "Ten: between each pair of lines (three), each line to neutral (three), \
             each line to earth (three), and neutral to earth.",
        )
        .with_category("Procedure")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "si-gs38",
            "Which HSE guidance document covers the test probes and leads used for \
             proving dead?",
            "GS38, which calls for fused leads, finger barriers and minimal exposed \
             probe tips.",
        )
        .with_category("Equipment")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "si-approved-device",
            "Why is a proprietary voltage indicator preferred over a multimeter for \
             proving dead?",
            "A dedicated two-pole indicator to GS38 cannot be left on the wrong range \
             or function; a multimeter set incorrectly can falsely read a live circuit \
             as dead.",
        )
        .with_category("Equipment")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "si-ewr-14",
            "Which regulation makes it unlawful to work on or near live conductors \
             except in defined circumstances?",
            "Regulation 14 of the Electricity at Work Regulations 1989: live working is \
             only permitted when it is unreasonable to work dead, it is reasonable to \
             work live, and suitable precautions are in place.",
        )
        .with_category("Legal duties")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "si-prove-after",
            "Why is the voltage indicator proved again after testing the circuit?",
            "To confirm the indicator did not fail during the dead test; a faulty \
             indicator would otherwise make a live circuit appear dead.",
        ),
    ]
}
