//! # Prompts Module
//!
//! Interactive credential prompts, styled with a shared dialoguer theme.

use anyhow::{Context, Result};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::consts::JIRA_API_TOKEN_URL;
use crate::creds::Credentials;

/// Returns the dialoguer theme used by sprint-report prompts.
///
/// Features:
/// - Cyan bold prompt text
/// - Green `❯` prefix on active item
/// - Green highlight on active item text
pub fn report_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// Ask for the Jira username and API token. The token is not echoed.
pub fn prompt_credentials() -> Result<Credentials> {
  let theme = report_theme();

  let username: String = Input::with_theme(&theme)
    .with_prompt("Enter your Jira user name (typically an email address)")
    .interact_text()
    .context("Failed to read Jira user name")?;

  let api_token = Password::with_theme(&theme)
    .with_prompt(format!("Enter your Jira API token. You can get one from {JIRA_API_TOKEN_URL}"))
    .interact()
    .context("Failed to read Jira API token")?;

  Ok(Credentials::new(username.trim(), api_token.trim()))
}
