//! Execution context passed from a request into every persistence call.

use std::time::Duration;

/// Per-request execution context.
///
/// Handlers currently run every statement with [`RequestContext::background`],
/// which never expires. A context built with [`RequestContext::with_timeout`]
/// bounds each statement; repositories report an expired deadline as an
/// internal error rather than as "not found".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    timeout: Option<Duration>,
}

impl RequestContext {
    /// A context without a deadline.
    pub const fn background() -> Self {
        Self { timeout: None }
    }

    /// A context whose statements must complete within `timeout`.
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
