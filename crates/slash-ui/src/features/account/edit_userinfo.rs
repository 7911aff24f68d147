use crate::app::ApiCtx;
use crate::components::daisy::{Button, DaisyColor, DaisyVariant, Input, Modal};
use crate::state::forms::{ProfileForm, profile_changes};
use crate::state::store::AppStore;
use crate::state::toast::Notifier;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const UPDATED_MESSAGE: &str = "User info updated";

#[derive(Properties, PartialEq)]
pub(crate) struct EditUserinfoProps {
    pub on_close: Callback<()>,
}

#[function_component(EditUserinfoDialog)]
pub(crate) fn edit_userinfo_dialog(props: &EditUserinfoProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let user = use_selector(|store: &AppStore| store.user.current.clone());
    let form = {
        let user = user.clone();
        use_state(move || (*user).as_ref().map(ProfileForm::from_user).unwrap_or_default())
    };
    let saving = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! {
            <Modal title="Edit user info" on_close={props.on_close.clone()}>
                <p class="text-sm text-error">{"Missing API context."}</p>
            </Modal>
        };
    };

    let on_nickname = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(ProfileForm {
                nickname: value,
                ..(*form).clone()
            });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(ProfileForm {
                email: value,
                ..(*form).clone()
            });
        })
    };
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    let on_save = {
        let form = form.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(current) = (*user).clone() else {
                return;
            };
            let request = match profile_changes(&current, &form) {
                Ok(Some(request)) => request,
                Ok(None) => {
                    on_close.emit(());
                    return;
                }
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
                match client.update_user(current.id, &request).await {
                    Ok(updated) => {
                        dispatch.reduce_mut(|store| {
                            store.user.set_current(updated);
                            store.toasts.success(UPDATED_MESSAGE);
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
        <Modal title="Edit user info" actions={actions} on_close={props.on_close.clone()}>
            <div class="flex flex-col gap-3">
                <label class="form-control w-full">
                    <span class="label-text mb-1">{"Nickname"}</span>
                    <Input id="nickname" class="w-full" value={form.nickname.clone()} oninput={on_nickname} />
                </label>
                <label class="form-control w-full">
                    <span class="label-text mb-1">{"Email"}</span>
                    <Input
                        id="email"
                        class="w-full"
                        input_type="email"
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </label>
            </div>
        </Modal>
    }
}
