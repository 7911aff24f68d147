//! Feature slices: page-level views and their dialogs.
pub(crate) mod account;
pub(crate) mod home;
