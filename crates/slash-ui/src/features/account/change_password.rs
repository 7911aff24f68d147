use crate::app::ApiCtx;
use crate::components::daisy::{Button, DaisyColor, DaisyVariant, Input, Modal};
use crate::state::forms::password_change;
use crate::state::store::AppStore;
use crate::state::toast::Notifier;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const CHANGED_MESSAGE: &str = "Password changed";

#[derive(Properties, PartialEq)]
pub(crate) struct ChangePasswordProps {
    pub on_close: Callback<()>,
}

#[function_component(ChangePasswordDialog)]
pub(crate) fn change_password_dialog(props: &ChangePasswordProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let user_id = use_selector(|store: &AppStore| store.user.current_id());
    let new_password = use_state(String::new);
    let repeat_password = use_state(String::new);
    let saving = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! {
            <Modal title="Change password" on_close={props.on_close.clone()}>
                <p class="text-sm text-error">{"Missing API context."}</p>
            </Modal>
        };
    };

    let on_new = {
        let new_password = new_password.clone();
        Callback::from(move |value: String| new_password.set(value))
    };
    let on_repeat = {
        let repeat_password = repeat_password.clone();
        Callback::from(move |value: String| repeat_password.set(value))
    };
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    let on_save = {
        let new_password = new_password.clone();
        let repeat_password = repeat_password.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = *user_id else {
                return;
            };
            let request = match password_change(&new_password, &repeat_password) {
                Ok(request) => request,
                Err(err) => {
                    dispatch.reduce_mut(|store| store.toasts.error(err.message()));
                    return;
                }
            };

            saving.set(true);
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match client.update_user(id, &request).await {
                    Ok(updated) => {
                        dispatch.reduce_mut(|store| {
                            store.user.set_current(updated);
                            store.toasts.success(CHANGED_MESSAGE);
                        });
                        on_close.emit(());
                    }
                    Err(err) => {
                        let message = err.to_string();
                        dispatch.reduce_mut(|store| store.toasts.error(&message));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let actions = html! {
        <>
            <Button variant={DaisyVariant::Ghost} disabled={*saving} onclick={on_cancel}>{"Cancel"}</Button>
            <Button tone={DaisyColor::Primary} loading={*saving} onclick={on_save}>{"Save"}</Button>
        </>
    };

    html! {
        <Modal title="Change password" actions={actions} on_close={props.on_close.clone()}>
            <div class="flex flex-col gap-3">
                <label class="form-control w-full">
                    <span class="label-text mb-1">{"New password"}</span>
                    <Input
                        id="new-password"
                        class="w-full"
                        input_type="password"
                        value={(*new_password).clone()}
                        oninput={on_new}
                    />
                </label>
                <label class="form-control w-full">
                    <span class="label-text mb-1">{"Repeat new password"}</span>
                    <Input
                        id="repeat-password"
                        class="w-full"
                        input_type="password"
                        value={(*repeat_password).clone()}
                        oninput={on_repeat}
                    />
                </label>
            </div>
        </Modal>
    }
}
