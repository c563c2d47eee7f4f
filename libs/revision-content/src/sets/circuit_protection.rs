//! Protective devices and their selection.

use revision_core::{Card, Difficulty};

pub(crate) fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "cp-mcb-b",
            "Over what multiple of rated current does a Type B MCB trip magnetically?",
            "Three to five times its rated current.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cp-mcb-c",
            "Over what multiple of rated current does a Type C MCB trip magnetically, \
             and where is it used?",
            "Five to ten times its rated current; used for loads with moderate inrush \
             such as small motors and discharge lighting.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cp-mcb-d",
            "Over what multiple of rated current does a Type D MCB trip magnetically?",
            "Ten to twenty times its rated current, for high-inrush loads such as \
             transformers and welding equipment.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cp-breaking-capacity",
            "What minimum rated short-circuit capacity do BS EN 60898 devices in \
             domestic consumer units commonly carry?",
            "6 kA, which must be at least the prospective fault current at the point of \
             installation.",
        )
        .with_category("Characteristics")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cp-rcd-purpose",
            "What does an RCD detect?",
            "An imbalance between line and neutral currents, indicating residual \
             current flowing to earth.",
        )
        .with_category("Devices")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cp-rcbo",
            "What is an RCBO?",
            "A single device combining residual current protection with overcurrent \
             protection, so one circuit's earth fault does not trip its neighbours.",
        )
        .with_category("Devices")
        .with_difficulty(Difficulty::Easy),
        Card::new(
            "cp-rcd-types",
            "How does a Type A RCD differ from a Type AC RCD?",
            "Type AC detects sinusoidal residual currents only; Type A also detects \
             pulsating d.c. components, as produced by electronic loads, and is the \
             minimum now expected for most final circuits.",
        )
        .with_category("Devices")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "cp-30ma",
            "What RCD rating provides additional protection, and where is it required?",
            "30 mA or less, required for socket-outlets up to 32 A, mobile equipment \
             outdoors and cables concealed in walls at less than 50 mm depth.",
        )
        .with_category("Selection")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cp-coordination",
            "State the coordination rule between design current, device rating and \
             cable capacity.",
            "Ib is not greater than In, and In is not greater than Iz: the device \
             rating sits between the design current and the cable's current-carrying \
             capacity.",
        )
        .with_category("Selection")
        .with_difficulty(Difficulty::Medium),
        Card::new(
            "cp-bs3036",
            "What allowance is made when a circuit is protected by a BS 3036 rewirable \
             fuse?",
            "The cable's tabulated current-carrying capacity is multiplied by 0.725, \
             because the fuse's fusing factor is about twice its rating.",
        )
        .with_category("Selection")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "cp-selectivity",
            "What is selectivity between protective devices?",
            "An arrangement where the device nearest the fault operates first, leaving \
             upstream devices and healthy circuits in service.",
        )
        .with_category("Selection")
        .with_difficulty(Difficulty::Hard),
        Card::new(
            "cp-bs88",
            "What type of fuse is a BS 88?",
            "A high rupturing capacity cartridge fuse, common in industrial \
             distribution and as the distributor's cut-out fuse.",
        ),
    ]
}
