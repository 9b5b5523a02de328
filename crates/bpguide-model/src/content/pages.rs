//! The authored pages.
//!
//! Four bodies (`document-control`, `line-item-bp`, `reporting-analytics`,
//! `data-connectors`) are keyed by ids that no sidebar entry uses. They stay
//! reachable by id and `bpguide check` reports them.

use super::{Block, ContentBody, ContentEntry, FeatureCard, Item, Table};
use crate::chart::ChartKind;
use crate::icon::{Icon, Tone};

/// Content table: section id to authored body.
pub static CONTENT: [ContentEntry; 9] = [
    ContentEntry {
        id: "glossary",
        body: GLOSSARY,
    },
    ContentEntry {
        id: "introduction",
        body: INTRODUCTION,
    },
    ContentEntry {
        id: "costManagement",
        body: COST_MANAGEMENT,
    },
    ContentEntry {
        id: "document-control",
        body: DOCUMENT_CONTROL,
    },
    ContentEntry {
        id: "line-item-bp",
        body: LINE_ITEM_BP,
    },
    ContentEntry {
        id: "reporting-analytics",
        body: REPORTING_ANALYTICS,
    },
    ContentEntry {
        id: "support",
        body: SUPPORT,
    },
    ContentEntry {
        id: "contact",
        body: CONTACT,
    },
    ContentEntry {
        id: "data-connectors",
        body: DATA_CONNECTORS,
    },
];

const GLOSSARY: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Glossary of Terms",
        },
        Block::Lead {
            text: "An A-Z list of common terms, acronyms, and concepts you'll encounter when \
                   working with Oracle Unifier Business Processes.",
        },
        Block::Term {
            name: "Business Process (BP)",
            definition: "A configurable module in Unifier designed to automate a specific \
                         business workflow, such as a Request for Information (RFI), a Change \
                         Order, or an Invoice. BPs consist of forms, workflows, and logs.",
        },
        Block::Term {
            name: "Data Element (DE)",
            definition: "The fundamental building block of a form in Unifier. Each field on a \
                         form is a Data Element, which has properties like data type (text, \
                         number, date), input method (pull-down, text box), and validation \
                         rules.",
        },
        Block::Term {
            name: "Workflow",
            definition: "The sequence of steps and actions that a BP record moves through from \
                         creation to completion. Workflows define who can act on a record at \
                         each step and what actions they can take.",
        },
    ],
};

const INTRODUCTION: ContentBody = ContentBody {
    blocks: &[
        Block::Hero {
            title: "Oracle Unifier BP Guide",
            lead: "Your comprehensive resource for mastering business processes in Oracle \
                   Unifier, from cost management to advanced integrations.",
        },
        Block::FeatureCards {
            cards: &[
                FeatureCard {
                    title: "Core Cost Management",
                    description: "Master budget, commitments, and cash flow.",
                    icon: Icon::DollarSign,
                    tone: Tone::Blue,
                },
                FeatureCard {
                    title: "Advanced Business Processes",
                    description: "Customize complex workflows and data structures.",
                    icon: Icon::Zap,
                    tone: Tone::Purple,
                },
                FeatureCard {
                    title: "Reporting & Dashboards",
                    description: "Create insightful analytics and visualizations.",
                    icon: Icon::BarChart,
                    tone: Tone::Green,
                },
            ],
        },
    ],
};

const COST_MANAGEMENT: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Cost Management Deep Dive",
        },
        Block::Card {
            title: "Cost Distribution Analysis",
            blocks: &[
                Block::Paragraph {
                    text: "Visualize how costs are distributed across different codes. This \
                           donut chart illustrates the percentage of line items associated \
                           with WBS codes, fund codes, or both, providing a clear overview of \
                           your project's financial structure.",
                },
                Block::Chart {
                    chart: ChartKind::CostDistribution,
                },
            ],
        },
        Block::Card {
            title: "Budget vs. Actuals",
            blocks: &[
                Block::Paragraph {
                    text: "Track your project's financial health by comparing budgeted \
                           amounts against actual costs for key business processes. This bar \
                           chart helps identify potential overruns and informs forecasting.",
                },
                Block::Chart {
                    chart: ChartKind::BudgetVsActual,
                },
            ],
        },
    ],
};

const DOCUMENT_CONTROL: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Document Business Process (BP)",
        },
        Block::Lead {
            text: "Document BPs function as a digital \"envelope\" to package and manage a set \
                   of files (like drawings or specifications) that need to flow systematically \
                   from one group or department to another within the project or \
                   organization. They are essential for formal document control and \
                   collaboration.",
        },
        Block::Card {
            title: "Key Characteristics & Sub-Types",
            blocks: &[
                Block::Bullets {
                    items: &[
                        Item::labelled(
                            "Individual Status Control",
                            "Each file attached as a line item can be approved or rejected \
                             independently within the same package. This is crucial for \
                             managing formal exchanges and reviews.",
                        ),
                        Item::labelled(
                            "Common Use Cases",
                            "Ideal for managing Submittals and Transmittals where multiple \
                             documents are formally bundled for review and distribution.",
                        ),
                    ],
                },
                Block::Table {
                    table: Table {
                        headers: &["Sub-Type", "Description", "Folder Structure Handling"],
                        rows: &[
                            &[
                                "With folder structure",
                                "Allows documents and their original folder hierarchy to be \
                                 uploaded and displayed within the BP form.",
                                "Maintained",
                            ],
                            &[
                                "Without folder structure",
                                "Ignores the original folder structure, attaching documents \
                                 in a flat list.",
                                "Ignored; flat list",
                            ],
                        ],
                    },
                },
            ],
        },
    ],
};

const LINE_ITEM_BP: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Line Item Business Process (BP)",
        },
        Block::Lead {
            text: "The most versatile BP type, used for any generic data. It's perfect for \
                   documenting miscellaneous information, creating lists, or collecting data \
                   that doesn't fit into more restricted BP types. It excels at filtering \
                   large numbers of company records into smaller, project-specific lists.",
        },
        Block::Card {
            title: "Key Features",
            blocks: &[Block::Bullets {
                items: &[
                    Item::labelled(
                        "Detail Form and Line Item List",
                        "Utilizes a separate detail form for entering individual line items, \
                         which then appear on a consolidated list.",
                    ),
                    Item::labelled(
                        "Grid View",
                        "For short line items, users can enter information directly into the \
                         line item list using a convenient \"grid view.\"",
                    ),
                    Item::labelled(
                        "Line Item Status Control",
                        "Can be designed to provide granular control over modifications to \
                         individual line items based on their specific status.",
                    ),
                ],
            }],
        },
        Block::Card {
            title: "Sub-Types & Applications",
            blocks: &[Block::Bullets {
                items: &[
                    Item::labelled(
                        "Generic",
                        "The default sub-type for general data collection needs, such as \
                         meeting minutes, vendor contact lists, or simple logs. Can roll up \
                         data across shells to a code-and-record-based manager, requiring \
                         data pickers for each manager class and a configurable manager \
                         picker.",
                    ),
                    Item::labelled(
                        "Line items to filter business process records",
                        "Specifically designed to filter large numbers of company records \
                         (e.g., from a master vendor list) into smaller, more relevant lists \
                         for specific projects. Requires a BP picker to specify the source BP \
                         and a uuu_line_item_status field to define the status for \
                         inclusion/exclusion.",
                    ),
                    Item::labelled(
                        "Preventive Maintenance (If module available)",
                        "Used for proactively and regularly maintaining assets, even when no \
                         issue has been reported. Includes specific classifications: Asset, \
                         Asset Template, PM Book, PM Book Template, and Meter Reading.",
                    ),
                ],
            }],
        },
        Block::Card {
            title: "General Design Requirements (uDesigner)",
            blocks: &[Block::Steps {
                items: &[
                    "Create a data structure (if necessary).",
                    "Launch the design.",
                    "Design an upper form.",
                    "Design a detail form.",
                    "Design a line item list.",
                ],
            }],
        },
    ],
};

const REPORTING_ANALYTICS: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Reporting & Analytics",
        },
        Block::Lead {
            text: "Oracle Unifier provides robust reporting and analytics capabilities to gain \
                   insights from your BP data. This includes standard reports, custom reports, \
                   and dashboards.",
        },
        Block::Card {
            title: "Standard Reports",
            blocks: &[Block::Paragraph {
                text: "Unifier comes with a suite of pre-built standard reports that cover \
                       common operational and financial metrics. These reports are often \
                       sufficient for basic needs and provide quick access to key information.",
            }],
        },
        Block::Card {
            title: "Custom Reports (Report Designer)",
            blocks: &[
                Block::Paragraph {
                    text: "For more specific analytical needs, Unifier's Report Designer \
                           allows users to create highly customized reports. You can select \
                           specific data elements, apply filters, define sorting, and even \
                           incorporate charts and graphs.",
                },
                Block::Subheading {
                    text: "Steps to create a Custom Report:",
                },
                Block::Steps {
                    items: &[
                        "Navigate to Company Workspace > Reports > Report Designer.",
                        "Click New and select the BP or data source.",
                        "Drag and drop desired data elements into the report layout.",
                        "Configure filters, sorting, and grouping as needed.",
                        "Add charts or pivot tables for visual analysis.",
                        "Save and publish the report for user access.",
                    ],
                },
            ],
        },
        Block::Card {
            title: "Dashboards",
            blocks: &[Block::Paragraph {
                text: "Dashboards provide an interactive, visual summary of key performance \
                       indicators (KPIs) and critical project data. They typically aggregate \
                       information from multiple BPs and reports, offering a high-level \
                       overview for decision-makers.",
            }],
        },
        Block::Card {
            title: "Reporting on Auto-Created Entities",
            blocks: &[Block::Paragraph {
                text: "Data generated through auto-creation methods (e.g., auto-created \
                       projects, shells, BP records, or line items) is stored within Unifier's \
                       database just like any other manually entered data. This means that all \
                       standard and custom reporting capabilities apply equally to auto-created \
                       entities. You can include data elements from auto-created BPs in your \
                       reports and dashboards to track their status, progress, and any \
                       associated financial or operational metrics. The audit logs of the \
                       source BPs also provide valuable information on the auto-creation events \
                       themselves, which can be leveraged for auditing and process analysis.",
            }],
        },
    ],
};

const SUPPORT: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Community Testimonials",
        },
        Block::Testimonials,
        Block::Title {
            text: "Frequently Asked Questions",
        },
        Block::Faq,
    ],
};

const CONTACT: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Get In Touch",
        },
        Block::ContactForm,
    ],
};

const DATA_CONNECTORS: ContentBody = ContentBody {
    blocks: &[
        Block::Title {
            text: "Data Elements & Advanced Logic",
        },
        Block::Lead {
            text: "Data Elements (DEs) are the fundamental building blocks of all forms in \
                   Unifier, defining the characteristics of every field. Mastering their use \
                   and combining them with advanced logic is essential for creating powerful, \
                   dynamic, and user-friendly Business Processes.",
        },
        Block::Card {
            title: "Key Data Element Properties",
            blocks: &[Block::Bullets {
                items: &[
                    Item::labelled(
                        "Data Type",
                        "Defines the kind of data the field will hold (e.g., Text, Number, \
                         Date, Currency).",
                    ),
                    Item::labelled(
                        "Input Method",
                        "Determines how users interact with the field (e.g., Text Box, \
                         Pull-Down Menu, Radio Buttons, Checkbox).",
                    ),
                    Item::labelled(
                        "Validation Rules",
                        "Enforces data integrity by setting constraints (e.g., required field, \
                         character limits, numeric ranges).",
                    ),
                ],
            }],
        },
        Block::Card {
            title: "Advanced Logic with Formulas",
            blocks: &[
                Block::Paragraph {
                    text: "Formulas are a powerful tool for automating calculations and logic \
                           within a BP form. They can be used to perform simple mathematical \
                           operations, concatenate strings, and even implement complex \
                           conditional logic based on data entered into other fields. Common \
                           uses include calculating totals, due dates, or populating fields \
                           based on user selections.",
                },
                Block::Subheading {
                    text: "Common Formula Functions:",
                },
                Block::Bullets {
                    items: &[
                        Item::labelled("Mathematical", "SUM(), AVG(), IF(), ROUND(), ABS(), etc."),
                        Item::labelled("Date/Time", "DATE(), TODAY(), DAYS(), WORKDAYS(), etc."),
                        Item::labelled(
                            "Text",
                            "CONCATENATE(), LEFT(), RIGHT(), MID(), LEN(), FIND(), etc.",
                        ),
                        Item::labelled("Logical", "AND(), OR(), NOT(), IF()."),
                    ],
                },
                Block::Subheading {
                    text: "Example Formula (Concatenation):",
                },
                Block::Paragraph {
                    text: "To combine a project number and description:",
                },
                Block::Code {
                    source: "CONCATENATE(\"Project-\", [Project Number], \"-\", [Project Description])",
                },
                Block::Subheading {
                    text: "Example Formula (Conditional Logic):",
                },
                Block::Paragraph {
                    text: "To calculate a discount based on total amount:",
                },
                Block::Code {
                    source: "IF([Total Amount] > 10000, [Total Amount] * 0.05, 0)",
                },
            ],
        },
    ],
};
