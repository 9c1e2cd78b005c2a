//! User-facing confirmations and notifications.
//!
//! Screens never print or prompt directly; they go through [`Interaction`] so
//! the same state machine drives the terminal console and the tests.

use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use tracing::warn;

pub trait Interaction: Send + Sync {
    /// Ask a yes/no question. `false` means the user declined.
    fn confirm(&self, prompt: &str) -> bool;

    /// Show a blocking notification.
    fn notify(&self, message: &str);
}

/// Terminal implementation backed by `dialoguer`.
pub struct Console {
    theme: ColorfulTheme,
}

impl Console {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for Console {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Confirmation prompt failed; treating as declined");
                false
            })
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
