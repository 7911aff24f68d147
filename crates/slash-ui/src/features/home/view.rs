use crate::app::Route;
use crate::components::view_setting::ViewSetting;
use crate::state::store::AppStore;
use crate::state::view::ViewSettings;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let order = use_selector(|store: &AppStore| store.view.order());
    let display_style = use_selector(|store: &AppStore| store.view.display_style());

    html! {
        <section class="flex flex-col gap-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold">{"Shortcuts"}</h1>
                <ViewSetting />
            </div>
            <div class="card bg-base-100 shadow-sm">
                <div class="card-body text-sm">
                    <p>
                        {"Sorted by "}
                        <strong>{order.field.label()}</strong>
                        {" "}
                        <span class="badge badge-outline">{order.direction.label()}</span>
                    </p>
                    <p>{"Display: "}<strong>{display_style.label()}</strong></p>
                </div>
            </div>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <section class="flex flex-col items-center gap-4 py-16">
            <h1 class="text-3xl font-bold">{"404"}</h1>
            <p class="opacity-70">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary btn-sm">{"Back home"}</Link<Route>>
        </section>
    }
}
