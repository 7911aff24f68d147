use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::state::store::AppStore;
use crate::state::toast::Notifier;
use crate::state::view::ViewState;
use crate::features::account::AccountPage;
use crate::features::home::{HomePage, NotFoundPage};
use preferences::{api_base_url, load_view_state, persist_view_state};
pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;

#[function_component(SlashApp)]
pub fn slash_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let view = use_selector(|store: &AppStore| store.view.clone());
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());

    {
        let dispatch = dispatch.clone();
        let client = Rc::clone(&api_ctx.client);
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_current_user().await {
                        Ok(user) => dispatch.reduce_mut(|store| store.user.set_current(user)),
                        Err(err) => {
                            let message = err.to_string();
                            dispatch.reduce_mut(|store| {
                                store.toasts.error(&message);
                                store.user.load_error = Some(message);
                            });
                        }
                    }
                });
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        |view: &Rc<ViewState>| {
            persist_view_state(view);
            || ()
        },
        view,
    );

    let on_dismiss = dispatch.reduce_mut_callback_with(|store, id: u64| store.toasts.dismiss(id));

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Account => html! { <AccountPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! { <AppShell active={route}>{page}</AppShell> }
}

/// Restore persisted view preferences and mount the console.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<AppStore>::new().reduce_mut(|store| store.view = load_view_state());
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SlashApp>::with_root(root).render();
    } else {
        yew::Renderer::<SlashApp>::new().render();
    }
}
