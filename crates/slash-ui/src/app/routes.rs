//! Routing definitions for the Slash console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/account")]
    Account,
    #[not_found]
    #[at("/404")]
    NotFound,
}
