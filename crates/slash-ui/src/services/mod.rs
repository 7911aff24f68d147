//! Browser-facing services.
pub(crate) mod api;
