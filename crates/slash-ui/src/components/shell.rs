use crate::app::Route;
use crate::state::store::AppStore;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nickname = use_selector(|store: &AppStore| {
        store.user.current_user().map(|user| user.nickname)
    });

    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm px-4">
                <div class="flex-1">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold">{"Slash"}</Link<Route>>
                </div>
                <nav class="flex-none flex items-center gap-2">
                    {nav_item(Route::Home, "Home", &props.active)}
                    {nav_item(Route::Account, "Account", &props.active)}
                    {(*nickname).clone().map(|name| html! {
                        <span class="badge badge-ghost">{name}</span>
                    }).unwrap_or_default()}
                </nav>
            </header>
            <main class="mx-auto w-full max-w-4xl p-4">
                { for props.children.iter() }
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: &'static str, active: &Route) -> Html {
    let classes = classes!(
        "btn",
        "btn-sm",
        if *active == route { "btn-active" } else { "btn-ghost" }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
