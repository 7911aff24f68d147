//! User directory backing the account endpoints.
//!
//! # Design
//! - Handlers depend on the [`UserDirectory`] trait, never on the storage behind it.
//! - Passwords are only ever held as argon2 PHC strings.
//! - Updates are validated as a whole before any field is written.

use std::collections::HashMap;
use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use async_trait::async_trait;
use slash_api_models::{UpdateUserRequest, User, UserRole, looks_like_email};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::OwnerSeed;

/// Identifier assigned to the seeded owner account.
pub const OWNER_ID: i32 = 1;

/// Result alias for directory operations.
pub type UserResult<T> = Result<T, UserError>;

/// Errors raised by the user directory.
#[derive(Debug, Error)]
pub enum UserError {
    /// No user carries the requested identifier.
    #[error("user not found")]
    NotFound {
        /// Identifier requested by the caller.
        id: i32,
    },
    /// A submitted field failed validation.
    #[error("invalid user field")]
    InvalidField {
        /// Field name as it appears on the wire.
        field: &'static str,
        /// Human-readable reason.
        reason: &'static str,
    },
    /// Hashing a new password failed.
    #[error("failed to hash password")]
    HashFailed {
        /// Rendered hasher failure.
        detail: String,
    },
    /// A stored password hash could not be parsed.
    #[error("stored password hash is invalid")]
    StoredHashInvalid {
        /// Rendered parser failure.
        detail: String,
    },
}

/// Storage-agnostic access to workspace users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return the user the console is operating as.
    async fn current_user(&self) -> UserResult<User>;
    /// Apply a partial update and return the updated record.
    async fn update_user(&self, id: i32, update: UpdateUserRequest) -> UserResult<User>;
    /// Check a candidate password against the stored hash.
    async fn verify_password(&self, id: i32, candidate: &str) -> UserResult<bool>;
}

/// Shared reference to the directory backend.
pub type SharedUsers = Arc<dyn UserDirectory>;

struct StoredUser {
    profile: User,
    password_hash: String,
}

/// Process-local directory seeded with a single owner account.
pub struct InMemoryUsers {
    current_id: i32,
    users: RwLock<HashMap<i32, StoredUser>>,
}

impl InMemoryUsers {
    /// Build a directory containing only the owner described by `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error when the seed fails validation or its password cannot be hashed.
    pub fn with_owner(seed: &OwnerSeed) -> UserResult<Self> {
        let nickname = validate_nickname(&seed.nickname)?;
        let email = validate_email(&seed.email)?;
        let password = validate_password(&seed.password)?;
        let profile = User {
            id: OWNER_ID,
            username: seed.username.trim().to_string(),
            nickname,
            email,
            role: UserRole::Admin,
        };
        let stored = StoredUser {
            profile,
            password_hash: hash_password(&password)?,
        };
        Ok(Self {
            current_id: OWNER_ID,
            users: RwLock::new(HashMap::from([(OWNER_ID, stored)])),
        })
    }
}

#[async_trait]
impl UserDirectory for InMemoryUsers {
    async fn current_user(&self) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .get(&self.current_id)
            .map(|stored| stored.profile.clone())
            .ok_or(UserError::NotFound {
                id: self.current_id,
            })
    }

    async fn update_user(&self, id: i32, update: UpdateUserRequest) -> UserResult<User> {
        let nickname = update.nickname.as_deref().map(validate_nickname).transpose()?;
        let email = update.email.as_deref().map(validate_email).transpose()?;
        let password_hash = match update.password.as_deref() {
            Some(value) => Some(hash_password_blocking(validate_password(value)?).await?),
            None => None,
        };

        let mut users = self.users.write().await;
        let stored = users.get_mut(&id).ok_or(UserError::NotFound { id })?;
        if let Some(nickname) = nickname {
            stored.profile.nickname = nickname;
        }
        if let Some(email) = email {
            stored.profile.email = email;
        }
        let password_changed = password_hash.is_some();
        if let Some(hash) = password_hash {
            stored.password_hash = hash;
        }
        info!(user_id = id, password_changed, "user profile updated");
        Ok(stored.profile.clone())
    }

    async fn verify_password(&self, id: i32, candidate: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        let stored = users.get(&id).ok_or(UserError::NotFound { id })?;
        verify_secret(&stored.password_hash, candidate)
    }
}

fn validate_nickname(value: &str) -> UserResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UserError::InvalidField {
            field: "nickname",
            reason: "nickname is required",
        });
    }
    Ok(trimmed.to_string())
}

fn validate_email(value: &str) -> UserResult<String> {
    let trimmed = value.trim();
    if !looks_like_email(trimmed) {
        return Err(UserError::InvalidField {
            field: "email",
            reason: "invalid email",
        });
    }
    Ok(trimmed.to_string())
}

fn validate_password(value: &str) -> UserResult<String> {
    if value.is_empty() {
        return Err(UserError::InvalidField {
            field: "password",
            reason: "password is required",
        });
    }
    Ok(value.to_string())
}

/// Hash on the blocking pool.
async fn hash_password_blocking(password: String) -> UserResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|err| UserError::HashFailed {
            detail: err.to_string(),
        })?
}

fn hash_password(input: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(input.as_bytes(), &salt)
        .map_err(|err| UserError::HashFailed {
            detail: err.to_string(),
        })?;
    Ok(hash.to_string())
}

fn verify_secret(expected_hash: &str, candidate: &str) -> UserResult<bool> {
    let parsed = PasswordHash::new(expected_hash).map_err(|err| UserError::StoredHashInvalid {
        detail: err.to_string(),
    })?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(err) => Err(UserError::StoredHashInvalid {
            detail: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> UserResult<InMemoryUsers> {
        InMemoryUsers::with_owner(&OwnerSeed::default())
    }

    #[tokio::test]
    async fn owner_is_current_user() -> UserResult<()> {
        let users = directory()?;
        let me = users.current_user().await?;
        assert_eq!(me.id, OWNER_ID);
        assert_eq!(me.nickname, "Admin");
        assert_eq!(me.email, "admin@example.com");
        assert_eq!(me.role, UserRole::Admin);
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields() -> UserResult<()> {
        let users = directory()?;
        let updated = users
            .update_user(
                OWNER_ID,
                UpdateUserRequest {
                    nickname: Some("  Steven  ".to_string()),
                    ..UpdateUserRequest::default()
                },
            )
            .await?;
        assert_eq!(updated.nickname, "Steven");
        assert_eq!(updated.email, "admin@example.com");
        assert_eq!(users.current_user().await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_update_writes_nothing() -> UserResult<()> {
        let users = directory()?;
        let result = users
            .update_user(
                OWNER_ID,
                UpdateUserRequest {
                    nickname: Some("Valid".to_string()),
                    email: Some("not-an-email".to_string()),
                    password: None,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(UserError::InvalidField { field: "email", .. })
        ));
        assert_eq!(users.current_user().await?.nickname, "Admin");
        Ok(())
    }

    #[tokio::test]
    async fn password_change_is_hashed_and_verifiable() -> UserResult<()> {
        let users = directory()?;
        assert!(users.verify_password(OWNER_ID, "secret").await?);
        users
            .update_user(
                OWNER_ID,
                UpdateUserRequest {
                    password: Some("hunter22".to_string()),
                    ..UpdateUserRequest::default()
                },
            )
            .await?;
        assert!(users.verify_password(OWNER_ID, "hunter22").await?);
        assert!(!users.verify_password(OWNER_ID, "secret").await?);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() -> UserResult<()> {
        let users = directory()?;
        let result = users.update_user(42, UpdateUserRequest::default()).await;
        assert!(matches!(result, Err(UserError::NotFound { id: 42 })));
        Ok(())
    }

    #[test]
    fn seed_with_blank_nickname_is_rejected() {
        let seed = OwnerSeed {
            nickname: "   ".to_string(),
            ..OwnerSeed::default()
        };
        assert!(matches!(
            InMemoryUsers::with_owner(&seed),
            Err(UserError::InvalidField {
                field: "nickname",
                ..
            })
        ));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn blocking_hash_is_verifiable_and_salted() -> UserResult<()> {
        let first = hash_password_blocking("correct horse".to_string()).await?;
        let second = hash_password_blocking("correct horse".to_string()).await?;
        assert_ne!(first, second);
        assert!(verify_secret(&first, "correct horse")?);
        assert!(!verify_secret(&second, "wrong horse")?);
        Ok(())
    }
}
