//! Field prompts for the console forms. Each prompt starts from the current
//! draft value so edits only need to touch what changes.

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Free text. `required` rejects blank input at the prompt.
pub fn text(
    theme: &ColorfulTheme,
    prompt: &str,
    current: &str,
    required: bool,
) -> dialoguer::Result<String> {
    let label = if required {
        format!("{} *", prompt)
    } else {
        prompt.to_string()
    };
    let value: String = Input::with_theme(theme)
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(!required)
        .validate_with(|input: &String| -> Result<(), String> {
            if required && input.trim().is_empty() {
                Err(format!("{} is required", prompt))
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn number(
    theme: &ColorfulTheme,
    prompt: &str,
    current: i32,
    min: Option<i32>,
) -> dialoguer::Result<i32> {
    Input::with_theme(theme)
        .with_prompt(format!("{} *", prompt))
        .with_initial_text(current.to_string())
        .validate_with(|input: &i32| -> Result<(), String> {
            match min {
                Some(min) if *input < min => Err(format!("{} must be at least {}", prompt, min)),
                _ => Ok(()),
            }
        })
        .interact_text()
}

/// Optional `YYYY-MM-DD` date; blank clears it.
pub fn date(
    theme: &ColorfulTheme,
    prompt: &str,
    current: Option<NaiveDate>,
) -> dialoguer::Result<Option<NaiveDate>> {
    let initial = current.map(|d| d.to_string()).unwrap_or_default();
    let value: String = Input::with_theme(theme)
        .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_date(input).map(|_| ())
        })
        .interact_text()?;
    Ok(parse_date(&value).ok().flatten())
}

/// Pick one of `options`, starting on `current`.
pub fn choice<T: Copy + PartialEq>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T],
    current: T,
    label: impl Fn(&T) -> String,
) -> dialoguer::Result<T> {
    let labels: Vec<String> = options.iter().map(label).collect();
    let start = options.iter().position(|o| *o == current).unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(start)
        .interact()?;
    Ok(options[index])
}

fn parse_date(input: &str) -> Result<Option<NaiveDate>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date: {}", input))
}
