//! Field Rules

/// What a field's value must look like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// A non-empty string.
    Text,

    /// A number, or a string holding one. Bounds are inclusive.
    Number {
        /// Smallest accepted value.
        min: Option<f64>,

        /// Largest accepted value.
        max: Option<f64>,

        /// Reject values with a fractional part.
        integer: bool,
    },

    /// An ISO calendar date (`YYYY-MM-DD`).
    IsoDate,

    /// One of a fixed set of strings.
    Enumerated {
        /// Canonical values.
        values: &'static [&'static str],

        /// `(alias, canonical)` pairs accepted in place of a canonical value.
        aliases: &'static [(&'static str, &'static str)],
    },
}

/// A single entry of a resource's rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    /// Canonical field name, used in the normalized output and in messages.
    pub field: &'static str,

    /// Alternative input names for the same field.
    pub aliases: &'static [&'static str],

    /// Whether an absent field is a violation.
    pub required: bool,

    /// Value applied when an optional field is absent.
    pub default: Option<&'static str>,

    /// Shape the value must have.
    pub kind: RuleKind,
}

impl FieldRule {
    /// A field that must be present.
    #[must_use]
    pub const fn required(field: &'static str, kind: RuleKind) -> Self {
        Self {
            field,
            aliases: &[],
            required: true,
            default: None,
            kind,
        }
    }

    /// A field that may be absent.
    #[must_use]
    pub const fn optional(field: &'static str, kind: RuleKind) -> Self {
        Self {
            field,
            aliases: &[],
            required: false,
            default: None,
            kind,
        }
    }

    /// Accept these input names as well.
    #[must_use]
    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Apply `default` when the field is absent.
    #[must_use]
    pub const fn default_value(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Whether `name` refers to this field.
    pub(crate) fn matches(&self, name: &str) -> bool {
        self.field == name || self.aliases.contains(&name)
    }
}
