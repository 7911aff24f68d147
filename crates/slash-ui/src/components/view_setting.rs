//! Dropdown controlling order and density of the shortcut list.

use crate::components::atoms::icons::{IconRefreshCw, IconSettings2};
use crate::components::daisy::{Button, DaisySize, DaisyVariant, Dropdown, Select};
use crate::state::logic::{
    reset_order, select_display_style, select_order_direction, select_order_field,
};
use crate::state::store::AppStore;
use crate::state::view::{DisplayStyle, OrderDirection, OrderField, ViewSettings};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

fn options<T: Copy>(
    values: impl IntoIterator<Item = T>,
    value: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
) -> Vec<(AttrValue, AttrValue)> {
    values
        .into_iter()
        .map(|item| (AttrValue::from(value(item)), AttrValue::from(label(item))))
        .collect()
}

#[function_component(ViewSetting)]
pub(crate) fn view_setting() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let order = use_selector(|store: &AppStore| store.view.order());
    let display_style = use_selector(|store: &AppStore| store.view.display_style());

    let on_field = dispatch.reduce_mut_callback_with(|store, raw: AttrValue| {
        select_order_field(&mut store.view, &raw);
    });
    let on_direction = dispatch.reduce_mut_callback_with(|store, raw: AttrValue| {
        select_order_direction(&mut store.view, &raw);
    });
    let on_style = dispatch.reduce_mut_callback_with(|store, raw: AttrValue| {
        select_display_style(&mut store.view, &raw);
    });
    let on_reset: Callback<MouseEvent> = dispatch.reduce_mut_callback(|store| {
        let AppStore { view, toasts, .. } = store;
        reset_order(view, toasts);
    });

    let trigger = html! {
        <span class="btn btn-ghost btn-sm btn-circle" title="View settings">
            <IconSettings2 size="5" />
        </span>
    };

    html! {
        <Dropdown trigger={trigger} content_class="w-64">
            <div class="flex flex-col gap-2">
                <div class="flex items-center justify-between gap-2">
                    <span class="text-sm shrink-0">{"Order by"}</span>
                    <div class="flex items-center gap-1">
                        <Button
                            variant={DaisyVariant::Ghost}
                            size={DaisySize::Xs}
                            circle={true}
                            title="Reset order"
                            onclick={on_reset}
                        >
                            <IconRefreshCw size="4" />
                        </Button>
                        <Select
                            aria_label="Order field"
                            value={AttrValue::from(order.field.as_str())}
                            options={options(OrderField::all(), OrderField::as_str, OrderField::label)}
                            onchange={on_field}
                        />
                        <Select
                            aria_label="Order direction"
                            value={AttrValue::from(order.direction.as_str())}
                            options={options(OrderDirection::all(), OrderDirection::as_str, OrderDirection::label)}
                            onchange={on_direction}
                        />
                    </div>
                </div>
                <div class="flex items-center justify-between gap-2">
                    <span class="text-sm shrink-0">{"Display"}</span>
                    <Select
                        aria_label="Display style"
                        value={AttrValue::from(display_style.as_str())}
                        options={options(DisplayStyle::all(), DisplayStyle::as_str, DisplayStyle::label)}
                        onchange={on_style}
                    />
                </div>
            </div>
        </Dropdown>
    }
}
