use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use colored::*;

use crate::client::AuthClient;
use crate::logger;
use crate::ui;

/// Tally of one fixer run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixSummary {
    pub fixed: usize,
    pub already_confirmed: usize,
    pub errors: usize,
    /// Records the run refused to touch: non-object entries and records
    /// without a usable id.
    pub skipped: usize,
}

impl FixSummary {
    /// Every record that reached the branch logic ends up in exactly one
    /// of these three buckets.
    pub fn processed(&self) -> usize {
        self.fixed + self.already_confirmed + self.errors
    }
}

/// Walk the full user list and set a confirmation timestamp on every
/// account that never confirmed its email address. A fetch failure aborts
/// the run; an update failure is counted and the loop moves on.
pub fn fix_unconfirmed_emails(client: &AuthClient) -> Result<FixSummary> {
    println!("{}", "[SEARCH] Fetching all users...".cyan());
    let list = client.list_users()?;

    if list.malformed > 0 {
        println!(
            "{}",
            format!(
                "[WARNING] Skipped {} record(s) with an unexpected shape",
                list.malformed
            )
            .yellow()
        );
    }
    println!(
        "{}",
        format!("[SUCCESS] Found {} users", list.users.len()).green()
    );

    let mut summary = FixSummary {
        skipped: list.malformed,
        ..Default::default()
    };

    for user in &list.users {
        let email = user.email_or_unknown();

        if user.is_confirmed() {
            println!("[OK] {email} already confirmed");
            summary.already_confirmed += 1;
            continue;
        }

        // Never build a request path out of a missing id.
        let Some(id) = user.id.as_deref() else {
            println!(
                "{}",
                format!("[WARNING] {email} has no id, skipping").yellow()
            );
            summary.skipped += 1;
            continue;
        };

        println!("{}", format!("[FIXING] Fixing user: {email}").cyan());
        let confirmed_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        match client.confirm_user_email(id, &confirmed_at) {
            Ok(()) => {
                println!("{}", format!("[FIXED] Fixed {email}").green());
                summary.fixed += 1;
            }
            Err(e) => {
                eprintln!("{}", format!("[ERROR] Failed to fix {email}: {e:#}").red());
                summary.errors += 1;
            }
        }
    }

    ui::fix_summary_ui(&summary);
    logger::log_action(
        "confirm-fix",
        &format!(
            "fixed={} already_confirmed={} errors={} skipped={}",
            summary.fixed, summary.already_confirmed, summary.errors, summary.skipped
        ),
    );

    Ok(summary)
}
