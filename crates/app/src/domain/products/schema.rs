//! Product payload rules.

use crate::validation::{FieldRule, RuleKind};

const NON_NEGATIVE_INTEGER: RuleKind = RuleKind::Number {
    min: Some(0.0),
    // u32::MAX
    max: Some(4_294_967_295.0),
    integer: true,
};

const NON_NEGATIVE_NUMBER: RuleKind = RuleKind::Number {
    min: Some(0.0),
    max: None,
    integer: false,
};

/// Rules applied to product create and update payloads.
pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule::required("name", RuleKind::Text).aliases(&["nome"]),
    FieldRule::required("description", RuleKind::Text).aliases(&["descricao"]),
    FieldRule::required("quantity", NON_NEGATIVE_INTEGER).aliases(&["quantidade"]),
    FieldRule::required("price", NON_NEGATIVE_NUMBER).aliases(&["preco"]),
    FieldRule::optional("discount", RuleKind::Text).aliases(&["desconto"]),
    FieldRule::optional("discountDate", RuleKind::IsoDate).aliases(&["dataDesconto"]),
    FieldRule::required("category", RuleKind::Text).aliases(&["categoria"]),
];
