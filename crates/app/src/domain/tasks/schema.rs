//! Task payload rules.

use crate::validation::{FieldRule, RuleKind};

/// Accepted task statuses.
pub const STATUSES: &[&str] = &["pending", "done"];

/// Rules applied to task create and update payloads.
pub const TASK_RULES: &[FieldRule] = &[
    FieldRule::required("title", RuleKind::Text).aliases(&["titulo"]),
    FieldRule::required("description", RuleKind::Text).aliases(&["descricao"]),
    FieldRule::optional(
        "status",
        RuleKind::Enumerated {
            values: STATUSES,
            aliases: &[("pendente", "pending"), ("finalizada", "done")],
        },
    )
    .default_value("pending"),
];
