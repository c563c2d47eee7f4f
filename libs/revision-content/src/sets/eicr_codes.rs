//! EICR classification codes and periodic inspection reporting.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "eicr-c1",
            "What does classification code C1 indicate on an EICR?",
            "Danger present. Risk of injury. Immediate remedial action is required.",
        )
        .with_category("Classification codes")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "eicr-c2",
            "What does classification code C2 indicate on an EICR?",
            "Potentially dangerous. Urgent remedial action is required.",
        )
        .with_category("Classification codes")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "eicr-c3",
            "What does classification code C3 indicate on an EICR?",
            "Improvement recommended. The installation is not dangerous but does not \
             comply with the current edition of BS 7671.",
        )
        .with_category("Classification codes")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "eicr-fi",
            "What does the code FI mean on an EICR?",
            "Further investigation required without delay. The inspection revealed an \
             apparent deficiency that could not be fully identified within the agreed \
             extent of the inspection.",
        )
        .with_category("Classification codes")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "eicr-outcome",
            "Which overall assessments can an EICR record, and what forces each one?",
            "Satisfactory or unsatisfactory. Any C1, C2 or FI observation makes the \
             overall assessment unsatisfactory.",
        )
        .with_category("Reporting")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "eicr-c3-outcome",
            "Does a C3 observation alone make an EICR unsatisfactory?",
            "No. C3 items are recommendations only; the overall assessment can remain \
             satisfactory.",
        )
        .with_category("Reporting")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "eicr-extent",
            "What must be agreed with the client before a periodic inspection begins?",
            "The extent and limitations of the inspection, recorded on the report and \
             agreed before work starts.",
        )
        .with_category("Reporting")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "eicr-interval-domestic",
            "What is the routine maximum interval between periodic inspections for a \
             domestic installation?",
            "10 years for an owner-occupied dwelling; 5 years, or at each change of \
             occupancy, for rented accommodation.",
        )
        .with_category("Reporting")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "eicr-bare-live",
            "How would an accessible live part with damaged insulation normally be coded?",
            "C1. A person could touch the live part, so danger is present and immediate \
             action is required, including making the installation safe before leaving site.",
        )
        .with_category("Applying the codes")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "eicr-no-rcd-sockets",
            "How is the absence of RCD protection for socket-outlets expected to serve \
             portable equipment outdoors usually coded?",
            "C2. Without additional protection the risk during outdoor use is \
             potentially dangerous; indoors-only socket-outlets without RCD protection \
             generally attract C3.",
        )
        .with_category("Applying the codes")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "eicr-borrowed-neutral",
            "How is a borrowed neutral between final circuits usually coded when found \
             during a periodic inspection?",
            "C2. Isolating one circuit leaves parts of another live, defeating safe \
             isolation, so the arrangement is potentially dangerous.",
        )
        .with_category("Applying the codes")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "eicr-purpose",
            "What is the purpose of an Electrical Installation Condition Report?",
            "To assess and report on the condition of an existing installation against \
             the current edition of BS 7671, identifying damage, deterioration, defects \
             and dangerous conditions.",
        ),
    ]
}
