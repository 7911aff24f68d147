//! Account page and its profile/password dialogs.

mod change_password;
mod edit_userinfo;
mod view;

pub(crate) use view::AccountPage;
