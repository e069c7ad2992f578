use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::errors::LedgerError;

/// Prompt for a new entry's description, defaulting to "None".
pub fn prompt_description() -> Result<String, LedgerError> {
    prompt_text("Enter description", "None")
}

/// Prompt the user for free-form text, pre-filled with a default.
pub fn prompt_text(prompt: &str, default: &str) -> Result<String, LedgerError> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

/// Prompt the user for an amount, pre-filled with a default.
pub fn prompt_amount(prompt: &str, default: f64) -> Result<f64, LedgerError> {
    let value = Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;
    Ok(value)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> Result<bool, LedgerError> {
    let value = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(value)
}
