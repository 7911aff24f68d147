#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Shared HTTP DTOs for the Slash public API.
//!
//! The web console decodes these with `serde_json` and the server encodes them
//! from its user directory, so the JSON contract lives in exactly one place.

use serde::{Deserialize, Serialize};

/// Role granted to a workspace member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Workspace administrator.
    Admin,
    /// Regular member.
    User,
}

/// User record returned by `/api/v1/user/*` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable numeric identifier.
    pub id: i32,
    /// Login name.
    pub username: String,
    /// Display name shown across the console.
    pub nickname: String,
    /// Contact email.
    pub email: String,
    /// Access role.
    pub role: UserRole,
}

/// Partial update accepted by `PATCH /api/v1/user/{id}`.
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// New contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New plaintext password; hashed before it is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// Returns `true` when the request carries no field to change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// RFC 9457 problem document returned for every API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Machine-readable problem type URI.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short human-readable summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Occurrence-specific explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Loose address check shared by the console form and the server validator:
/// one `@`, a non-empty local part, a dotted domain and no whitespace.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
