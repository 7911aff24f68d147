use std::collections::HashMap;

use crate::components::atoms::icons::IconX;
use crate::state::toast::{TOAST_TIMEOUT_MS, Toast, timer_changes};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    // Timers live as long as the host; dropping a `Timeout` cancels it.
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let changes = timer_changes(timers.keys().copied(), list);
                for id in changes.disarm {
                    timers.remove(&id);
                }
                for id in changes.arm {
                    let on_dismiss = on_dismiss.clone();
                    timers.insert(
                        id,
                        Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id)),
                    );
                }
                || ()
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class="toast toast-end toast-bottom z-50" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", toast.kind.alert_class())} role="status" key={id.to_string()}>
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_close}>
                <IconX size="4" />
            </button>
        </div>
    }
}
