//! HTTP surface: routing, handlers, error mapping and front-end embedding.

pub(crate) mod constants;
pub(crate) mod errors;
pub(crate) mod frontend;
pub(crate) mod health;
pub mod router;
pub(crate) mod user;
