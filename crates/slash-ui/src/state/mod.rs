//! DOM-free state, handlers and validation for the console.
pub mod dialog;
pub mod forms;
pub mod logic;
pub mod store;
pub mod toast;
pub mod user;
pub mod view;
