//! Two-severity result of validating one raw input.

use serde::Serialize;

/// Outcome of validating a raw text input.
///
/// `Warning` is soft: the value is still usable and never blocks a commit.
/// `Rejected` is hard: the commit must leave the store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldValidation {
    /// Valid and intentionally unset.
    Empty,
    /// Valid with a parsed value.
    Accepted { value: f64 },
    /// Usable, but the analysis stays incomplete.
    Warning { value: Option<f64>, message: String },
    /// Structurally invalid; the value must not reach the store.
    Rejected { message: String },
}

impl FieldValidation {
    pub(crate) fn accepted(value: f64) -> Self {
        FieldValidation::Accepted { value }
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        FieldValidation::Rejected {
            message: message.into(),
        }
    }

    pub(crate) fn warning(value: Option<f64>, message: impl Into<String>) -> Self {
        FieldValidation::Warning {
            value,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, FieldValidation::Rejected { .. })
    }

    /// The parsed value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            FieldValidation::Accepted { value } => Some(*value),
            FieldValidation::Warning { value, .. } => *value,
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FieldValidation::Rejected { message } => Some(message),
            _ => None,
        }
    }

    pub fn warning_message(&self) -> Option<&str> {
        match self {
            FieldValidation::Warning { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_tag() {
        let ok = FieldValidation::accepted(3.0);
        assert!(ok.is_valid());
        assert_eq!(ok.value(), Some(3.0));
        assert_eq!(ok.error(), None);

        let soft = FieldValidation::warning(None, "Required for ROI");
        assert!(soft.is_valid());
        assert_eq!(soft.value(), None);
        assert_eq!(soft.warning_message(), Some("Required for ROI"));

        let hard = FieldValidation::rejected("Invalid number");
        assert!(!hard.is_valid());
        assert_eq!(hard.error(), Some("Invalid number"));

        assert!(FieldValidation::Empty.is_valid());
        assert_eq!(FieldValidation::Empty.value(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(FieldValidation::rejected("nope")).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["message"], "nope");
    }
}
