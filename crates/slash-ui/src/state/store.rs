//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Dialog mount state is not here; it lives and dies with the account page.

use crate::state::toast::ToastQueue;
use crate::state::user::UserSlice;
use crate::state::view::ViewState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Shortcut list order and density.
    pub view: ViewState,
    /// Signed-in user.
    pub user: UserSlice,
    /// Visible notifications.
    pub toasts: ToastQueue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::logic::reset_order;
    use crate::state::view::{DisplayStyle, OrderField, ViewSettings};

    #[test]
    fn reset_through_store_slices() {
        let mut store = AppStore::default();
        store.view.order.field = OrderField::View;
        store.view.set_display_style(DisplayStyle::Compact);

        let AppStore { view, toasts, .. } = &mut store;
        reset_order(view, toasts);

        assert_eq!(store.view.order.field, OrderField::Name);
        assert_eq!(store.view.display_style(), DisplayStyle::Compact);
        assert_eq!(store.toasts.items().len(), 1);
    }
}
