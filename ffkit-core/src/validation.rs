//! Checks for user-supplied text fields.
//!
//! Callers collect every failed check before reporting, so a form with four
//! bad fields surfaces four errors rather than stopping at the first.

use crate::error::{FieldError, FieldProblem};

/// Rejects empty, whitespace-only, and leading-whitespace values.
#[must_use]
pub fn check_required(field: &'static str, value: &str) -> Option<FieldError> {
    if value.is_empty() || value.chars().all(char::is_whitespace) {
        Some(FieldError::new(field, FieldProblem::Blank))
    } else if value.starts_with(char::is_whitespace) {
        Some(FieldError::new(field, FieldProblem::LeadingWhitespace))
    } else {
        None
    }
}

/// Like [`check_required`], additionally requiring ASCII digits only.
#[must_use]
pub fn check_numeric(field: &'static str, value: &str) -> Option<FieldError> {
    if let Some(err) = check_required(field, value) {
        return Some(err);
    }
    if value.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(FieldError::new(field, FieldProblem::NotNumeric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_accepts_ordinary_values() {
        assert_eq!(check_required("width", "100"), None);
        assert_eq!(check_required("width", "abc"), None);
    }

    #[test]
    fn required_flags_blank_and_leading_whitespace() {
        assert_eq!(
            check_required("width", ""),
            Some(FieldError::new("width", FieldProblem::Blank))
        );
        assert_eq!(
            check_required("width", "   "),
            Some(FieldError::new("width", FieldProblem::Blank))
        );
        assert_eq!(
            check_required("width", " 100"),
            Some(FieldError::new("width", FieldProblem::LeadingWhitespace))
        );
    }

    #[test]
    fn numeric_flags_non_digits() {
        assert_eq!(check_numeric("framerate", "30"), None);
        assert_eq!(
            check_numeric("framerate", "30fps"),
            Some(FieldError::new("framerate", FieldProblem::NotNumeric))
        );
        assert_eq!(
            check_numeric("framerate", "-1"),
            Some(FieldError::new("framerate", FieldProblem::NotNumeric))
        );
        assert_eq!(
            check_numeric("framerate", ""),
            Some(FieldError::new("framerate", FieldProblem::Blank))
        );
    }
}
