//! Shared HTTP constants.

use std::time::Duration;

pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://slash.dev/problems/bad-request";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://slash.dev/problems/not-found";
pub(crate) const PROBLEM_INTERNAL: &str = "https://slash.dev/problems/internal";
pub(crate) const PROBLEM_TIMEOUT: &str = "https://slash.dev/problems/timeout";

/// Upper bound for handling a single request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Hashed bundle assets never change under the same name.
pub(crate) const ASSETS_CACHE_CONTROL: &str = "max-age=31536000, immutable";

/// Path prefixes owned by the API and the shortcut redirector.
pub(crate) const RESERVED_PREFIXES: [&str; 2] = ["/api/", "/s/"];
