//! Formatting for form validation failures.
//!
//! Drafts derive [`validator::Validate`] for the same required/type
//! constraints the admin forms declare. When a draft fails, the console shows
//! one line listing every offending field.

use validator::ValidationErrors;

pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
