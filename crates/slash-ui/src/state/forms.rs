//! Validation for the account dialogs.

use slash_api_models::{UpdateUserRequest, User, looks_like_email};

/// Rejection reasons surfaced as error toasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    /// Nickname blank after trimming.
    NicknameRequired,
    /// Email missing `local@domain` shape.
    InvalidEmail,
    /// A password input was left empty.
    EmptyPassword,
    /// The two password inputs differ.
    PasswordMismatch,
}

impl FormError {
    /// Message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NicknameRequired => "Nickname is required",
            Self::InvalidEmail => "Invalid email",
            Self::EmptyPassword => "Please fill all inputs",
            Self::PasswordMismatch => "New passwords do not match",
        }
    }
}

/// Raw input of the edit-userinfo dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Nickname input.
    pub nickname: String,
    /// Email input.
    pub email: String,
}

impl ProfileForm {
    /// Pre-fill from the current user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            nickname: user.nickname.clone(),
            email: user.email.clone(),
        }
    }
}

/// Validate the profile form and build a request with only the changed fields.
///
/// `Ok(None)` means nothing changed and the dialog can simply close.
///
/// # Errors
///
/// Returns the first validation failure.
pub fn profile_changes(
    user: &User,
    form: &ProfileForm,
) -> Result<Option<UpdateUserRequest>, FormError> {
    let nickname = form.nickname.trim();
    let email = form.email.trim();
    if nickname.is_empty() {
        return Err(FormError::NicknameRequired);
    }
    if !looks_like_email(email) {
        return Err(FormError::InvalidEmail);
    }

    let request = UpdateUserRequest {
        nickname: (nickname != user.nickname).then(|| nickname.to_string()),
        email: (email != user.email).then(|| email.to_string()),
        password: None,
    };
    Ok((!request.is_empty()).then_some(request))
}

/// Validate the change-password inputs and build the request.
///
/// # Errors
///
/// Returns [`FormError::EmptyPassword`] or [`FormError::PasswordMismatch`].
pub fn password_change(new: &str, repeat: &str) -> Result<UpdateUserRequest, FormError> {
    if new.is_empty() || repeat.is_empty() {
        return Err(FormError::EmptyPassword);
    }
    if new != repeat {
        return Err(FormError::PasswordMismatch);
    }
    Ok(UpdateUserRequest {
        password: Some(new.to_string()),
        ..UpdateUserRequest::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slash_api_models::UserRole;

    fn user() -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            nickname: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn unchanged_profile_needs_no_request() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(profile_changes(&user(), &form), Ok(None));
    }

    #[test]
    fn only_changed_fields_are_sent() {
        let form = ProfileForm {
            nickname: " Steven ".to_string(),
            email: "admin@example.com".to_string(),
        };
        let request = profile_changes(&user(), &form)
            .expect("valid")
            .expect("changed");
        assert_eq!(request.nickname.as_deref(), Some("Steven"));
        assert_eq!(request.email, None);
        assert_eq!(request.password, None);
    }

    #[test]
    fn profile_validation_messages() {
        let blank = ProfileForm {
            nickname: "   ".to_string(),
            email: "admin@example.com".to_string(),
        };
        assert_eq!(
            profile_changes(&user(), &blank),
            Err(FormError::NicknameRequired)
        );
        let bad_email = ProfileForm {
            nickname: "Admin".to_string(),
            email: "admin.example.com".to_string(),
        };
        let err = profile_changes(&user(), &bad_email).expect_err("invalid");
        assert_eq!(err.message(), "Invalid email");
    }

    #[test]
    fn password_validation_messages() {
        assert_eq!(
            password_change("", "x").map_err(FormError::message),
            Err("Please fill all inputs")
        );
        assert_eq!(
            password_change("abc", "abd").map_err(FormError::message),
            Err("New passwords do not match")
        );
        let request = password_change("hunter2", "hunter2").expect("valid");
        assert_eq!(request.password.as_deref(), Some("hunter2"));
        assert!(request.nickname.is_none());
    }
}
