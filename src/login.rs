use anyhow::Result;
use colored::*;

use crate::client::{AuthClient, LoginOutcome};
use crate::logger;

const TOKEN_PREVIEW_LEN: usize = 50;

/// Issue one password-grant request and report what came back. Returns
/// true exactly when the token endpoint answered 200.
pub fn test_login(client: &AuthClient, email: &str, password: &str) -> Result<bool> {
    println!("{}", format!("[INFO] Testing login for {email}").cyan());

    match client.sign_in(email, password)? {
        LoginOutcome::Granted(token) => {
            println!("{}", "[SUCCESS] Login successful!".green());

            let preview: String = token
                .access_token
                .as_deref()
                .unwrap_or("N/A")
                .chars()
                .take(TOKEN_PREVIEW_LEN)
                .collect();
            println!("Access Token: {preview}...");

            let user_id = token
                .user
                .as_ref()
                .and_then(|u| u.id.as_deref())
                .unwrap_or("N/A");
            println!("User ID: {user_id}");

            logger::log_action("login-test", &format!("{email} ok"));
            Ok(true)
        }
        LoginOutcome::Rejected { status, body } => {
            println!("[DEBUG] Status Code: {status}");
            eprintln!("{}", format!("[ERROR] Login failed: {body}").red());
            logger::log_action("login-test", &format!("{email} rejected ({status})"));
            Ok(false)
        }
    }
}
