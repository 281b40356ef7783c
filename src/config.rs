use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use colored::*;
use serde::Deserialize;
use std::env;

/// Connection settings for the hosted auth service.
/// Loaded from the environment so no credential ever lives in source.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base project URL, e.g. "https://abcdefgh.example.co" (no trailing slash).
    pub project_url: String,
    /// Elevated key used for the admin endpoints.
    pub service_role_key: String,
    /// Low-privilege key used for the user-facing token endpoint.
    pub anon_key: String,
}

impl ServiceConfig {
    /// Read settings from the environment. A `.env` file in the working
    /// directory is honored when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let project_url = require_var("AUTH_PROJECT_URL")?;
        let service_role_key = require_var("AUTH_SERVICE_ROLE_KEY")?;
        let anon_key = require_var("AUTH_ANON_KEY")?;

        let config = Self {
            project_url: project_url.trim_end_matches('/').to_string(),
            service_role_key,
            anon_key,
        };
        config.warn_on_role_mismatch();
        Ok(config)
    }

    // Sanity-check the keys against their expected role claim. Mixed-up
    // keys are the most common operator mistake with this vendor, and an
    // anon key on the admin endpoints only fails once a request is made.
    fn warn_on_role_mismatch(&self) {
        check_key_role(&self.service_role_key, "service_role");
        check_key_role(&self.anon_key, "anon");
    }
}

fn require_var(name: &str) -> Result<String> {
    let value = env::var(name)
        .with_context(|| format!("Missing required environment variable {name}"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Environment variable {name} is set but empty");
    }
    Ok(value)
}

#[derive(Debug, Deserialize)]
struct KeyClaims {
    role: Option<String>,
}

/// Best-effort peek at the `role` claim inside a vendor JWT. No signature
/// verification happens here: the key is inspected, never trusted locally.
pub fn key_role(key: &str) -> Option<String> {
    let payload = key.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: KeyClaims = serde_json::from_slice(&bytes).ok()?;
    claims.role
}

fn check_key_role(key: &str, expected: &str) {
    match key_role(key) {
        Some(role) if role == expected => {}
        Some(role) => println!(
            "{}",
            format!(
                "[WARNING] The '{expected}' key calls itself '{role}'. Check your environment."
            )
            .yellow()
        ),
        None => println!(
            "{}",
            format!("[WARNING] Could not read a role claim from the '{expected}' key.").yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_jwt(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn key_role_reads_the_role_claim() {
        let key = fake_jwt(r#"{"iss":"vendor","role":"service_role"}"#);
        assert_eq!(key_role(&key).as_deref(), Some("service_role"));
    }

    #[test]
    fn key_role_handles_missing_claim() {
        let key = fake_jwt(r#"{"iss":"vendor"}"#);
        assert_eq!(key_role(&key), None);
    }

    #[test]
    fn key_role_rejects_non_jwt_input() {
        assert_eq!(key_role("not-a-jwt"), None);
        assert_eq!(key_role("a.%%%.c"), None);
        assert_eq!(key_role(""), None);
    }
}
