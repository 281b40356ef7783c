pub mod client;
pub mod config;
pub mod confirm;
pub mod function;
pub mod logger;
pub mod login;
pub mod reset;
pub mod ui;

pub use client::{AuthClient, LoginOutcome, UserList, UserRecord};
pub use config::ServiceConfig;
pub use confirm::FixSummary;
pub use reset::ResetOutcome;
