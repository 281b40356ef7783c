use anyhow::{Context, Result};
use colored::*;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::client::AuthClient;
use crate::logger;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Loose format gate. The vendor remains the authority on whether an
/// address exists; this only stops obvious typos before any network call.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Updated,
    NotFound,
    InvalidEmail,
}

/// Set a new password for the account matching `email` exactly
/// (case-sensitive). Issues at most one update request; a vendor rejection
/// is surfaced verbatim as the error.
pub fn reset_password(
    client: &AuthClient,
    email: &str,
    new_password: &str,
) -> Result<ResetOutcome> {
    if !email_is_valid(email) {
        println!(
            "{}",
            format!("[ERROR] '{email}' does not look like an email address").red()
        );
        return Ok(ResetOutcome::InvalidEmail);
    }

    println!(
        "{}",
        format!("[INFO] Resetting password for {email}").cyan()
    );

    let list = client.list_users()?;

    let Some(user) = list.users.iter().find(|u| u.email.as_deref() == Some(email)) else {
        println!(
            "{}",
            format!("[ERROR] User with email {email} not found").red()
        );
        return Ok(ResetOutcome::NotFound);
    };

    let Some(id) = user.id.as_deref() else {
        println!(
            "{}",
            format!("[ERROR] Record for {email} carries no id, refusing to update").red()
        );
        return Ok(ResetOutcome::NotFound);
    };

    println!("[INFO] Found user ID: {id}");

    client
        .set_user_password(id, new_password)
        .with_context(|| format!("Failed to reset password for {email}"))?;

    println!("{}", format!("[SUCCESS] Password reset for {email}").green());
    println!("New password: {new_password}");
    println!("\nYou can now log in with:");
    println!("   Email: {email}");
    println!("   Password: {new_password}");

    logger::log_action("password-reset", email);
    Ok(ResetOutcome::Updated)
}
