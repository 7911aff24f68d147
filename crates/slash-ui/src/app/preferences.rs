//! Persistence and environment helpers for the app shell.

use crate::state::view::ViewState;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const ORDER_KEY: &str = "slash.view.order";
pub(crate) const DISPLAY_STYLE_KEY: &str = "slash.view.display_style";

pub(crate) fn load_view_state() -> ViewState {
    let order = LocalStorage::get::<String>(ORDER_KEY).ok();
    let display_style = LocalStorage::get::<String>(DISPLAY_STYLE_KEY).ok();
    ViewState::from_stored(order.as_deref(), display_style.as_deref())
}

pub(crate) fn persist_view_state(view: &ViewState) {
    set_storage(ORDER_KEY, view.order.to_stored());
    match view.display_style {
        Some(style) => set_storage(DISPLAY_STYLE_KEY, style.as_str()),
        None => LocalStorage::delete(DISPLAY_STYLE_KEY),
    }
}

/// The console is served by the API host, so requests go to the page origin.
pub(crate) fn api_base_url() -> String {
    window().location().origin().unwrap_or_default()
}

fn set_storage<T: serde::Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
