//! Pure view-setting handlers extracted from components for non-wasm testing.

use crate::state::toast::Notifier;
use crate::state::view::{
    DEFAULT_ORDER, DisplayStyle, OrderDirection, OrderField, OrderPatch, ViewSettings,
};

/// Message emitted after the order is reset.
pub const RESET_MESSAGE: &str = "Order reset";

/// Apply an "order by" selector change; unknown values are ignored.
pub fn select_order_field<S: ViewSettings + ?Sized>(settings: &mut S, raw: &str) {
    if let Some(field) = OrderField::parse(raw) {
        settings.set_order(OrderPatch::field(field));
    }
}

/// Apply a direction selector change; unknown values are ignored.
pub fn select_order_direction<S: ViewSettings + ?Sized>(settings: &mut S, raw: &str) {
    if let Some(direction) = OrderDirection::parse(raw) {
        settings.set_order(OrderPatch::direction(direction));
    }
}

/// Apply a display-style selector change; unknown values are ignored.
pub fn select_display_style<S: ViewSettings + ?Sized>(settings: &mut S, raw: &str) {
    if let Some(style) = DisplayStyle::parse(raw) {
        settings.set_display_style(style);
    }
}

/// Reset the order to name/asc and emit one success notification.
///
/// Display style is left as is.
pub fn reset_order<S, N>(settings: &mut S, notifier: &mut N)
where
    S: ViewSettings + ?Sized,
    N: Notifier + ?Sized,
{
    settings.set_order(OrderPatch::replace(DEFAULT_ORDER));
    notifier.success(RESET_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::toast::ToastKind;
    use crate::state::view::{Order, ViewState};

    #[derive(Default)]
    struct RecordingSettings {
        state: ViewState,
        order_calls: Vec<OrderPatch>,
        style_calls: Vec<DisplayStyle>,
    }

    impl ViewSettings for RecordingSettings {
        fn order(&self) -> Order {
            self.state.order()
        }

        fn set_order(&mut self, patch: OrderPatch) {
            self.order_calls.push(patch);
            self.state.set_order(patch);
        }

        fn display_style(&self) -> DisplayStyle {
            self.state.display_style()
        }

        fn set_display_style(&mut self, style: DisplayStyle) {
            self.style_calls.push(style);
            self.state.set_display_style(style);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Vec<(ToastKind, String)>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, kind: ToastKind, message: String) {
            self.sent.push((kind, message));
        }
    }

    #[test]
    fn field_selection_sends_only_the_field() {
        for field in OrderField::all() {
            let mut settings = RecordingSettings::default();
            settings.state.order.direction = OrderDirection::Desc;
            select_order_field(&mut settings, field.as_str());
            assert_eq!(settings.order_calls, vec![OrderPatch::field(field)]);
            assert_eq!(settings.order().direction, OrderDirection::Desc);
            assert!(settings.style_calls.is_empty());
        }
    }

    #[test]
    fn direction_selection_sends_only_the_direction() {
        for direction in OrderDirection::all() {
            let mut settings = RecordingSettings::default();
            settings.state.order.field = OrderField::View;
            select_order_direction(&mut settings, direction.as_str());
            assert_eq!(settings.order_calls, vec![OrderPatch::direction(direction)]);
            assert_eq!(settings.order().field, OrderField::View);
        }
    }

    #[test]
    fn unknown_values_touch_nothing() {
        let mut settings = RecordingSettings::default();
        select_order_field(&mut settings, "visits");
        select_order_direction(&mut settings, "up");
        select_display_style(&mut settings, "dense");
        assert!(settings.order_calls.is_empty());
        assert!(settings.style_calls.is_empty());
    }

    #[test]
    fn display_style_switches_from_default() {
        let mut settings = RecordingSettings::default();
        assert_eq!(settings.display_style(), DisplayStyle::Full);
        select_display_style(&mut settings, "compact");
        assert_eq!(settings.style_calls, vec![DisplayStyle::Compact]);
        assert_eq!(settings.display_style(), DisplayStyle::Compact);
    }

    #[test]
    fn reset_restores_default_and_notifies_once() {
        for field in OrderField::all() {
            for direction in OrderDirection::all() {
                let mut settings = RecordingSettings::default();
                settings.state.order = Order { field, direction };
                settings.state.display_style = Some(DisplayStyle::Compact);
                let mut notifier = RecordingNotifier::default();

                reset_order(&mut settings, &mut notifier);

                assert_eq!(settings.order(), DEFAULT_ORDER);
                assert_eq!(settings.display_style(), DisplayStyle::Compact);
                assert_eq!(
                    notifier.sent,
                    vec![(ToastKind::Success, RESET_MESSAGE.to_string())]
                );
            }
        }
    }
}
