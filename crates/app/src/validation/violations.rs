//! Validation Violations

use std::ops::Deref;

use smallvec::SmallVec;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("Field {0} is required")]
    Missing(&'static str),

    #[error("Field {0} must be a string")]
    NotText(&'static str),

    #[error("Field {0} must not be empty")]
    Empty(&'static str),

    #[error("Field {0} must be a number")]
    NotNumber(&'static str),

    #[error("Field {0} must be an integer")]
    NotInteger(&'static str),

    #[error("Field {field} must be greater than or equal to {min}")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("Field {field} must be less than or equal to {max}")]
    AboveMaximum { field: &'static str, max: f64 },

    #[error("Field {0} must be an ISO date in the format YYYY-MM-DD")]
    NotIsoDate(&'static str),

    #[error("Field {field} must be one of: {}", .allowed.join(", "))]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("Payload must be an object")]
    NotAnObject,

    #[error("Payload could not be decoded: {0}")]
    Undecodable(String),
}

impl Violation {
    /// The offending field, when the violation is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing(field)
            | Self::NotText(field)
            | Self::Empty(field)
            | Self::NotNumber(field)
            | Self::NotInteger(field)
            | Self::NotIsoDate(field)
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::NotAllowed { field, .. } => Some(field),
            Self::NotAnObject | Self::Undecodable(_) => None,
        }
    }
}

/// Ordered violations of one payload, in rule-table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations(SmallVec<[Violation; 4]>);

impl Violations {
    pub(crate) fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// The violation reported to callers.
    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.0.first()
    }
}

impl Deref for Violations {
    type Target = [Violation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        let mut violations = Self::default();

        violations.push(violation);

        violations
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
