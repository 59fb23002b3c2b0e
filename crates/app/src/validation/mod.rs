//! Declarative payload validation.
//!
//! Each resource declares a static table of [`FieldRule`]s. [`validate`] checks a
//! raw JSON payload against such a table and either produces the normalized,
//! decoded value or every violation found, in table order. Unknown fields are
//! stripped, aliases are resolved to canonical field names, defaults are applied
//! and numeric strings (as sent by HTML forms) are converted to numbers.

mod rules;
mod violations;

use jiff::civil::Date;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

pub use rules::{FieldRule, RuleKind};
pub use violations::{Violation, Violations};

/// Outcome of checking a payload against a rule table.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    /// The normalized, decoded payload.
    Valid(T),

    /// Every violation found, in rule-table order.
    Invalid(Violations),
}

impl<T> Validation<T> {
    /// Convert into a `Result`, keeping every violation.
    ///
    /// # Errors
    ///
    /// Returns the violations when the payload was rejected.
    pub fn into_result(self) -> Result<T, Violations> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

/// Check `payload` against `rules` and decode the normalized result into `T`.
pub fn validate<T: DeserializeOwned>(rules: &[FieldRule], payload: &Value) -> Validation<T> {
    let Value::Object(fields) = payload else {
        return Validation::Invalid(Violation::NotAnObject.into());
    };

    let mut normalized = Map::new();
    let mut violations = Violations::default();

    for rule in rules {
        let supplied = fields
            .iter()
            .find(|(name, _)| rule.matches(name))
            .map(|(_, value)| value);

        match (supplied, rule.default) {
            (Some(value), _) => match check(rule, value) {
                Ok(value) => {
                    normalized.insert(rule.field.to_owned(), value);
                }
                Err(violation) => violations.push(violation),
            },
            (None, Some(default)) => {
                normalized.insert(rule.field.to_owned(), Value::from(default));
            }
            (None, None) if rule.required => violations.push(Violation::Missing(rule.field)),
            (None, None) => {}
        }
    }

    if violations.first().is_some() {
        return Validation::Invalid(violations);
    }

    match serde_json::from_value(Value::Object(normalized)) {
        Ok(value) => Validation::Valid(value),
        Err(error) => Validation::Invalid(Violation::Undecodable(error.to_string()).into()),
    }
}

fn check(rule: &FieldRule, value: &Value) -> Result<Value, Violation> {
    let field = rule.field;

    match rule.kind {
        RuleKind::Text => text(field, value).map(Value::from),
        RuleKind::Number { min, max, integer } => {
            let number = number(field, value)?;

            if integer && number.fract() != 0.0 {
                return Err(Violation::NotInteger(field));
            }

            if let Some(min) = min
                && number < min
            {
                return Err(Violation::BelowMinimum { field, min });
            }

            if let Some(max) = max
                && number > max
            {
                return Err(Violation::AboveMaximum { field, max });
            }

            normalize_number(field, number, integer)
        }
        RuleKind::IsoDate => {
            let raw = text(field, value)?;

            raw.parse::<Date>()
                .ok()
                .filter(|date| date.to_string() == raw)
                .map(|date| Value::from(date.to_string()))
                .ok_or(Violation::NotIsoDate(field))
        }
        RuleKind::Enumerated { values, aliases } => {
            let raw = text(field, value)?;

            values
                .iter()
                .find(|allowed| **allowed == raw)
                .or_else(|| {
                    aliases
                        .iter()
                        .find(|(alias, _)| *alias == raw)
                        .map(|(_, canonical)| canonical)
                })
                .map(|canonical| Value::from(*canonical))
                .ok_or(Violation::NotAllowed {
                    field,
                    allowed: values,
                })
        }
    }
}

fn text<'v>(field: &'static str, value: &'v Value) -> Result<&'v str, Violation> {
    match value {
        Value::String(text) if text.is_empty() => Err(Violation::Empty(field)),
        Value::String(text) => Ok(text),
        _ => Err(Violation::NotText(field)),
    }
}

fn number(field: &'static str, value: &Value) -> Result<f64, Violation> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|number| number.is_finite())
        .ok_or(Violation::NotNumber(field))
}

fn normalize_number(field: &'static str, number: f64, integer: bool) -> Result<Value, Violation> {
    if integer {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "fractional values are rejected before normalization"
        )]
        let whole = number as i64;

        return Ok(Value::from(whole));
    }

    Number::from_f64(number)
        .map(Value::Number)
        .ok_or(Violation::NotNumber(field))
}
