//! Initial verification tests in the recommended GN3 sequence.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "ts-dead-order",
            "What is the recommended order of the dead tests during initial \
             verification?",
            "Continuity of protective conductors; continuity of ring final circuit \
             conductors; insulation resistance; polarity; earth electrode resistance \
             where applicable.",
        )
        .with_category("Dead tests")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "ts-why-order",
            "Why is protective conductor continuity tested before insulation \
             resistance?",
            "A missing protective conductor must be found before energisation is even \
             considered, and the insulation resistance test can apply 500 V between \
             conductors that the continuity test has already proven are correctly \
             connected.",
        )
        .with_category("Dead tests")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "ts-ir-voltage",
            "What test voltage is used for insulation resistance on a 230 V circuit?",
            "500 V d.c.",
        )
        .with_category("Dead tests")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "ts-ir-minimum",
            "What is the minimum acceptable insulation resistance for a 230 V circuit?",
            "1 megohm, although readings below 2 megohms warrant investigation.",
        )
        .with_category("Dead tests")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "ts-r1r2",
            "What does an (R1+R2) measurement confirm?",
            "Continuity of the line conductor and circuit protective conductor in \
             series, giving the value later used to verify earth fault loop impedance.",
        )
        .with_category("Dead tests")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "ts-ring-steps",
            "What are the three steps of the ring final circuit continuity test?",
            "Measure end-to-end resistance of line, neutral and protective conductors; \
             cross-connect line and neutral and check readings at each socket; \
             cross-connect line and protective conductor and check again.",
        )
        .with_category("Dead tests")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "ts-zs",
            "What does a Zs measurement establish?",
            "The earth fault loop impedance at a point in the circuit, verified against \
             the maximum that still lets the protective device disconnect in time.",
        )
        .with_category("Live tests")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "ts-ze",
            "How is Ze measured?",
            "At the origin with the installation isolated, the main switch open and the \
             means of earthing disconnected from the bonding, so parallel paths do not \
             mask the true external loop impedance.",
        )
        .with_category("Live tests")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "ts-pfc",
            "Why is prospective fault current measured at the origin?",
            "To confirm every protective device has a rated breaking capacity at least \
             equal to the highest fault current it may have to interrupt.",
        )
        .with_category("Live tests")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "ts-rcd-times",
            "What trip time must a 30 mA RCD providing additional protection achieve \
             when tested at five times its rated residual current?",
            "40 milliseconds.",
        )
        .with_category("Live tests")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "ts-low-ohm",
            "Which instrument is used for continuity testing, and at what test current?",
            "A low-resistance ohmmeter delivering no less than 200 mA.",
        )
        .with_category("Instruments")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "ts-gn3",
            "Which IET publication gives the recommended sequence of tests?",
            "Guidance Note 3: Inspection & Testing.",
        ),
    ]
}
