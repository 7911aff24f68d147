//! Current-user slice and the read-only projection the account page renders.

use slash_api_models::User;

/// Fields of the signed-in user shown on the account page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    /// Display name.
    pub nickname: String,
    /// Contact email.
    pub email: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            nickname: user.nickname.clone(),
            email: user.email.clone(),
        }
    }
}

/// User slice of the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSlice {
    /// Full record as returned by the API; `None` until boot completes.
    pub current: Option<User>,
    /// Last boot failure, shown instead of the loading placeholder.
    pub load_error: Option<String>,
}

impl UserSlice {
    /// Read-only projection of the current user.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.current.as_ref().map(CurrentUser::from)
    }

    /// Identifier used for `PATCH /api/v1/user/{id}`.
    #[must_use]
    pub fn current_id(&self) -> Option<i32> {
        self.current.as_ref().map(|user| user.id)
    }

    /// Replace the current user with a fresh API record.
    pub fn set_current(&mut self, user: User) {
        self.current = Some(user);
        self.load_error = None;
    }
}
