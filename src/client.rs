use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::config::ServiceConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One user record as returned by the admin list endpoint. The vendor owns
/// the schema, so every field we touch is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: Option<String>,
    pub email: Option<String>,
    pub email_confirmed_at: Option<String>,
}

impl UserRecord {
    /// Null, absent, and empty-string confirmation timestamps all mean the
    /// address was never confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at
            .as_deref()
            .is_some_and(|ts| !ts.is_empty())
    }

    pub fn email_or_unknown(&self) -> &str {
        self.email.as_deref().unwrap_or("unknown")
    }
}

/// The canonical form of the admin list response. The vendor has been seen
/// returning both `{"users": [...]}` and a bare array, so the two shapes are
/// collapsed here, at the boundary, and nowhere else.
#[derive(Debug, Default)]
pub struct UserList {
    pub users: Vec<UserRecord>,
    /// Entries that were not user objects at all. Reported, never processed.
    pub malformed: usize,
}

impl UserList {
    pub fn from_body(body: Value) -> Self {
        let entries = match body {
            Value::Object(mut map) => match map.remove("users") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            Value::Array(items) => items,
            _ => Vec::new(),
        };

        let mut users = Vec::new();
        let mut malformed = 0;
        for entry in entries {
            match serde_json::from_value::<UserRecord>(entry) {
                Ok(user) => users.push(user),
                Err(_) => malformed += 1,
            }
        }
        Self { users, malformed }
    }
}

/// Result of a password-grant token request. A rejection is an expected
/// outcome for a smoke test, not an error.
#[derive(Debug)]
pub enum LoginOutcome {
    Granted(TokenResponse),
    Rejected { status: StatusCode, body: String },
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
pub struct TokenUser {
    pub id: Option<String>,
}

/// Blocking client for the vendor's auth API. Admin calls carry the
/// service-role key, the token call carries the anonymous key.
pub struct AuthClient {
    http: Client,
    config: ServiceConfig,
}

impl AuthClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building http client")?;
        Ok(Self { http, config })
    }

    /// Fetch the full user collection from the admin endpoint.
    /// A non-200 response is fatal to the calling run.
    pub fn list_users(&self) -> Result<UserList> {
        let url = format!("{}/auth/v1/admin/users", self.config.project_url);
        let resp = self
            .http
            .get(&url)
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
            .send()
            .context("user list request failed")?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            anyhow::bail!("Failed to fetch users ({status}): {body}");
        }

        let body: Value = resp.json().context("user list JSON parse failed")?;
        Ok(UserList::from_body(body))
    }

    /// Mark a user's email address as confirmed at the given timestamp.
    pub fn confirm_user_email(&self, id: &str, confirmed_at: &str) -> Result<()> {
        self.update_user(id, json!({ "email_confirmed_at": confirmed_at }))
    }

    /// Replace a user's password. Policy enforcement is the vendor's job;
    /// a rejection comes back as the error text verbatim.
    pub fn set_user_password(&self, id: &str, new_password: &str) -> Result<()> {
        self.update_user(id, json!({ "password": new_password }))
    }

    fn update_user(&self, id: &str, patch: Value) -> Result<()> {
        let url = format!("{}/auth/v1/admin/users/{}", self.config.project_url, id);
        let resp = self
            .http
            .put(&url)
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
            .json(&patch)
            .send()
            .context("user update request failed")?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            anyhow::bail!("Update rejected ({status}): {body}");
        }
        Ok(())
    }

    /// Issue one password-grant token request with the anonymous key.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.project_url
        );
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .context("token request failed")?;

        let status = resp.status();
        if status == StatusCode::OK {
            let token: TokenResponse = resp.json().context("token JSON parse failed")?;
            Ok(LoginOutcome::Granted(token))
        } else {
            let body = resp.text().unwrap_or_default();
            Ok(LoginOutcome::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapped_object_yields_inner_list() {
        let list = UserList::from_body(json!({
            "users": [
                { "id": "u1", "email": "a@x.com", "email_confirmed_at": null }
            ]
        }));
        assert_eq!(list.users.len(), 1);
        assert_eq!(list.malformed, 0);
        assert_eq!(list.users[0].id.as_deref(), Some("u1"));
    }

    #[test]
    fn bare_array_is_taken_as_is() {
        let list = UserList::from_body(json!([
            { "id": "u1", "email": "a@x.com" }
        ]));
        assert_eq!(list.users.len(), 1);
        assert!(!list.users[0].is_confirmed());
    }

    #[test]
    fn unexpected_shapes_degrade_to_empty() {
        assert!(UserList::from_body(json!("surprise")).users.is_empty());
        assert!(UserList::from_body(json!(42)).users.is_empty());
        assert!(UserList::from_body(json!(null)).users.is_empty());
        // An object without a "users" array counts too.
        assert!(UserList::from_body(json!({ "data": [] })).users.is_empty());
        assert!(UserList::from_body(json!({ "users": "nope" })).users.is_empty());
    }

    #[test]
    fn non_object_entries_are_counted_not_kept() {
        let list = UserList::from_body(json!([
            "garbage",
            7,
            { "id": "u1", "email": "a@x.com" }
        ]));
        assert_eq!(list.users.len(), 1);
        assert_eq!(list.malformed, 2);
    }

    #[test]
    fn confirmation_treats_null_missing_and_empty_alike() {
        let confirmed = UserRecord {
            id: Some("u1".into()),
            email: Some("a@x.com".into()),
            email_confirmed_at: Some("2024-01-01T00:00:00Z".into()),
        };
        assert!(confirmed.is_confirmed());

        let null_ts = UserRecord {
            id: Some("u2".into()),
            email: Some("b@x.com".into()),
            email_confirmed_at: None,
        };
        assert!(!null_ts.is_confirmed());

        let empty_ts = UserRecord {
            id: Some("u3".into()),
            email: Some("c@x.com".into()),
            email_confirmed_at: Some(String::new()),
        };
        assert!(!empty_ts.is_confirmed());
    }

    #[test]
    fn unknown_email_has_a_printable_fallback() {
        let record = UserRecord {
            id: Some("u1".into()),
            email: None,
            email_confirmed_at: None,
        };
        assert_eq!(record.email_or_unknown(), "unknown");
    }
}
