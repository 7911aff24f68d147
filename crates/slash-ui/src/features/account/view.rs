use super::change_password::ChangePasswordDialog;
use super::edit_userinfo::EditUserinfoDialog;
use crate::components::atoms::icons::{IconKey, IconPencil};
use crate::components::daisy::{Button, DaisySize, DaisyVariant};
use crate::state::dialog::{AccountDialog, AccountDialogs, DialogAction};
use crate::state::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(AccountPage)]
pub(crate) fn account_page() -> Html {
    let user = use_selector(|store: &AppStore| store.user.current_user());
    let load_error = use_selector(|store: &AppStore| store.user.load_error.clone());
    let dialogs = use_reducer(AccountDialogs::default);

    let Some(user) = (*user).clone() else {
        return html! {
            <section class="flex justify-center py-16">
                {match (*load_error).clone() {
                    Some(message) => html! { <p class="text-sm text-error">{message}</p> },
                    None => html! { <span class="loading loading-dots loading-md"></span> },
                }}
            </section>
        };
    };

    let open = |kind: AccountDialog| {
        let dialogs = dialogs.clone();
        Callback::from(move |_: MouseEvent| dialogs.dispatch(DialogAction::Open(kind)))
    };

    html! {
        <section class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">{"Account"}</h1>
            <div class="card bg-base-100 shadow-sm">
                <div class="card-body gap-2">
                    <p class="text-3xl">{user.nickname}</p>
                    <p class="text-sm">
                        <span class="opacity-70 mr-2">{"Email:"}</span>
                        <span>{user.email}</span>
                    </p>
                    <div class="card-actions mt-2">
                        <Button
                            variant={DaisyVariant::Outline}
                            size={DaisySize::Sm}
                            onclick={open(AccountDialog::EditUserinfo)}
                        >
                            <IconPencil size="4" />
                            {"Edit"}
                        </Button>
                        <Button
                            variant={DaisyVariant::Outline}
                            size={DaisySize::Sm}
                            onclick={open(AccountDialog::ChangePassword)}
                        >
                            <IconKey size="4" />
                            {"Change password"}
                        </Button>
                    </div>
                </div>
            </div>
            {mounted(&dialogs, AccountDialog::EditUserinfo)}
            {mounted(&dialogs, AccountDialog::ChangePassword)}
        </section>
    }
}

/// Render a dialog only while its slot holds a ticket; the close callback is
/// bound to that ticket.
fn mounted(dialogs: &UseReducerHandle<AccountDialogs>, kind: AccountDialog) -> Html {
    let Some(ticket) = dialogs.slot(kind).ticket() else {
        return Html::default();
    };
    let on_close = {
        let dialogs = dialogs.clone();
        Callback::from(move |()| dialogs.dispatch(DialogAction::Close(kind, ticket)))
    };
    match kind {
        AccountDialog::EditUserinfo => html! { <EditUserinfoDialog on_close={on_close} /> },
        AccountDialog::ChangePassword => html! { <ChangePasswordDialog on_close={on_close} /> },
    }
}
