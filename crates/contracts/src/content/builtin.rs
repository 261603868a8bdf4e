use super::{SubsectionDescriptor, TabDescriptor};
use crate::navigation::TabKey;

// Order must follow `TabKey::ALL`.
pub(super) static TABS: &[TabDescriptor] = &[
    TabDescriptor {
        key: TabKey::Company,
        label: "Company",
        default_subsection: "about-us",
        subsections: &[
            SubsectionDescriptor {
                key: "about-us",
                title: "About us",
                paragraphs: &[
                    "We build and operate long-lived infrastructure businesses.",
                    "Our teams work across energy, logistics and software.",
                ],
            },
            SubsectionDescriptor {
                key: "history",
                title: "History",
                paragraphs: &[
                    "Founded as a single engineering workshop, the group grew one acquisition at a time.",
                    "Every venture we added kept its own name and its own leadership.",
                ],
            },
            SubsectionDescriptor {
                key: "leadership",
                title: "Leadership",
                paragraphs: &["A small executive team sets direction and allocates capital."],
            },
        ],
    },
    TabDescriptor {
        key: TabKey::Philosophy,
        label: "Philosophy",
        default_subsection: "vision",
        subsections: &[
            SubsectionDescriptor {
                key: "vision",
                title: "Vision",
                paragraphs: &["Patient ownership outperforms short-term optimisation."],
            },
            SubsectionDescriptor {
                key: "principles",
                title: "Principles",
                paragraphs: &[
                    "Decisions are made closest to the work.",
                    "We measure ourselves in decades.",
                ],
            },
        ],
    },
    TabDescriptor {
        key: TabKey::Ecosystem,
        label: "Ecosystem",
        default_subsection: "overview",
        subsections: &[
            SubsectionDescriptor {
                key: "overview",
                title: "Overview",
                paragraphs: &["Our ventures share services, data and talent."],
            },
            SubsectionDescriptor {
                key: "partners",
                title: "Partners",
                paragraphs: &["We co-invest with operators who share our time horizon."],
            },
        ],
    },
    TabDescriptor {
        key: TabKey::Direction,
        label: "Direction",
        default_subsection: "strategy",
        subsections: &[
            SubsectionDescriptor {
                key: "strategy",
                title: "Strategy",
                paragraphs: &["Grow where we already operate, enter new markets slowly."],
            },
            SubsectionDescriptor {
                key: "roadmap",
                title: "Roadmap",
                paragraphs: &["Electrification of the logistics fleet comes first."],
            },
        ],
    },
    TabDescriptor {
        key: TabKey::Governance,
        label: "Governance",
        default_subsection: "board",
        subsections: &[
            SubsectionDescriptor {
                key: "board",
                title: "Board",
                paragraphs: &["An independent board oversees every venture."],
            },
            SubsectionDescriptor {
                key: "policies",
                title: "Policies",
                paragraphs: &["Policies are published and reviewed annually."],
            },
        ],
    },
    TabDescriptor {
        key: TabKey::Ethics,
        label: "Ethics",
        default_subsection: "code-of-conduct",
        subsections: &[
            SubsectionDescriptor {
                key: "code-of-conduct",
                title: "Code of conduct",
                paragraphs: &["The same code applies to every employee and every partner."],
            },
            SubsectionDescriptor {
                key: "responsible-ai",
                title: "Responsible AI",
                paragraphs: &["Automated decisions that affect people are always reviewable by a person."],
            },
        ],
    },
];
