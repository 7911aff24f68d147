//! View preferences for the shortcut list: sort order and display density.
//!
//! # Design
//! - Every value the selectors can produce is an enum; raw option strings are
//!   parsed at the edge and anything unknown is dropped.
//! - Order updates are partial: a patch only carries the sub-field that changed.
//! - The wire/storage strings match the values the API uses (`updatedTs`, `asc`, ...).

use serde::{Deserialize, Serialize};

/// Field the shortcut list is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    /// Alphabetical by shortcut name.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Last modification time.
    #[serde(rename = "updatedTs")]
    UpdatedTs,
    /// Creation time.
    #[serde(rename = "createdTs")]
    CreatedTs,
    /// Visit count.
    #[serde(rename = "view")]
    View,
}

impl OrderField {
    /// All fields in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Name, Self::UpdatedTs, Self::CreatedTs, Self::View]
    }

    /// Option value / storage string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::UpdatedTs => "updatedTs",
            Self::CreatedTs => "createdTs",
            Self::View => "view",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::UpdatedTs => "UpdatedAt",
            Self::CreatedTs => "CreatedAt",
            Self::View => "Visits",
        }
    }

    /// Parse an option value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|field| field.as_str() == value)
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// All directions in selector order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Asc, Self::Desc]
    }

    /// Option value / storage string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse an option value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|direction| direction.as_str() == value)
    }
}

/// Density used when rendering the shortcut list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Cards with description and tags.
    #[default]
    Full,
    /// One line per shortcut.
    Compact,
}

impl DisplayStyle {
    /// All styles in selector order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Full, Self::Compact]
    }

    /// Option value / storage string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Compact => "compact",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Compact => "Compact",
        }
    }

    /// Parse an option value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|style| style.as_str() == value)
    }
}

/// Sort order of the shortcut list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Sort key.
    pub field: OrderField,
    /// Sort direction.
    pub direction: OrderDirection,
}

/// Order restored by the reset action: name, ascending.
pub const DEFAULT_ORDER: Order = Order {
    field: OrderField::Name,
    direction: OrderDirection::Asc,
};

impl Order {
    /// Merge a partial update, keeping any sub-field the patch leaves unset.
    #[must_use]
    pub fn merge(self, patch: OrderPatch) -> Self {
        Self {
            field: patch.field.unwrap_or(self.field),
            direction: patch.direction.unwrap_or(self.direction),
        }
    }

    /// Compact storage form, e.g. `updatedTs desc`.
    #[must_use]
    pub fn to_stored(self) -> String {
        format!("{} {}", self.field.as_str(), self.direction.as_str())
    }

    /// Parse the storage form; `None` when either half is unknown.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        let field = OrderField::parse(parts.next()?)?;
        let direction = OrderDirection::parse(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { field, direction })
    }
}

/// Partial order update; `None` leaves the current value in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderPatch {
    /// Replacement sort key.
    pub field: Option<OrderField>,
    /// Replacement sort direction.
    pub direction: Option<OrderDirection>,
}

impl OrderPatch {
    /// Patch touching only the sort key.
    #[must_use]
    pub const fn field(field: OrderField) -> Self {
        Self {
            field: Some(field),
            direction: None,
        }
    }

    /// Patch touching only the direction.
    #[must_use]
    pub const fn direction(direction: OrderDirection) -> Self {
        Self {
            field: None,
            direction: Some(direction),
        }
    }

    /// Patch replacing the whole order.
    #[must_use]
    pub const fn replace(order: Order) -> Self {
        Self {
            field: Some(order.field),
            direction: Some(order.direction),
        }
    }
}

/// Read/write access to view preferences, as seen by the view-setting handlers.
pub trait ViewSettings {
    /// Current sort order.
    fn order(&self) -> Order;
    /// Merge a partial order update.
    fn set_order(&mut self, patch: OrderPatch);
    /// Effective display style (`Full` when never chosen).
    fn display_style(&self) -> DisplayStyle;
    /// Replace the display style.
    fn set_display_style(&mut self, style: DisplayStyle);
}

/// View-preference slice of the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Sort order of the shortcut list.
    pub order: Order,
    /// Explicit display style; `None` until the user picks one.
    pub display_style: Option<DisplayStyle>,
}

impl ViewState {
    /// Rebuild the slice from stored strings, falling back to defaults per value.
    #[must_use]
    pub fn from_stored(order: Option<&str>, display_style: Option<&str>) -> Self {
        Self {
            order: order.and_then(Order::from_stored).unwrap_or_default(),
            display_style: display_style.and_then(DisplayStyle::parse),
        }
    }
}

impl ViewSettings for ViewState {
    fn order(&self) -> Order {
        self.order
    }

    fn set_order(&mut self, patch: OrderPatch) {
        self.order = self.order.merge(patch);
    }

    fn display_style(&self) -> DisplayStyle {
        self.display_style.unwrap_or_default()
    }

    fn set_display_style(&mut self, style: DisplayStyle) {
        self.display_style = Some(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_round_trip() {
        for field in OrderField::all() {
            assert_eq!(OrderField::parse(field.as_str()), Some(field));
        }
        for direction in OrderDirection::all() {
            assert_eq!(OrderDirection::parse(direction.as_str()), Some(direction));
        }
        for style in DisplayStyle::all() {
            assert_eq!(DisplayStyle::parse(style.as_str()), Some(style));
        }
        assert_eq!(OrderField::parse("updatedts"), None);
        assert_eq!(OrderDirection::parse("ASC"), None);
    }

    #[test]
    fn labels_follow_field_meaning() {
        assert_eq!(OrderField::UpdatedTs.label(), "UpdatedAt");
        assert_eq!(OrderField::CreatedTs.label(), "CreatedAt");
        assert_eq!(OrderField::View.label(), "Visits");
    }

    #[test]
    fn merge_keeps_unpatched_sub_field() {
        let order = Order {
            field: OrderField::View,
            direction: OrderDirection::Desc,
        };
        let merged = order.merge(OrderPatch::field(OrderField::CreatedTs));
        assert_eq!(merged.field, OrderField::CreatedTs);
        assert_eq!(merged.direction, OrderDirection::Desc);

        let merged = order.merge(OrderPatch::direction(OrderDirection::Asc));
        assert_eq!(merged.field, OrderField::View);
        assert_eq!(merged.direction, OrderDirection::Asc);

        assert_eq!(order.merge(OrderPatch::default()), order);
    }

    #[test]
    fn display_style_defaults_to_full() {
        let mut state = ViewState::default();
        assert_eq!(state.display_style, None);
        assert_eq!(state.display_style(), DisplayStyle::Full);
        state.set_display_style(DisplayStyle::Compact);
        assert_eq!(state.display_style(), DisplayStyle::Compact);
    }

    #[test]
    fn stored_order_parses_or_falls_back() {
        let order = Order {
            field: OrderField::UpdatedTs,
            direction: OrderDirection::Desc,
        };
        assert_eq!(order.to_stored(), "updatedTs desc");
        assert_eq!(Order::from_stored(&order.to_stored()), Some(order));
        assert_eq!(Order::from_stored("updatedTs"), None);
        assert_eq!(Order::from_stored("name asc extra"), None);

        let restored = ViewState::from_stored(Some("bogus"), Some("dense"));
        assert_eq!(restored, ViewState::default());
        let restored = ViewState::from_stored(Some("view asc"), Some("compact"));
        assert_eq!(restored.order.field, OrderField::View);
        assert_eq!(restored.display_style, Some(DisplayStyle::Compact));
    }

    #[test]
    fn serde_uses_api_strings() -> Result<(), serde_json::Error> {
        let order = Order {
            field: OrderField::CreatedTs,
            direction: OrderDirection::Desc,
        };
        assert_eq!(
            serde_json::to_string(&order)?,
            r#"{"field":"createdTs","direction":"desc"}"#
        );
        assert_eq!(serde_json::to_string(&DisplayStyle::Compact)?, r#""compact""#);
        Ok(())
    }
}
