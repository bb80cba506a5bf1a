//! Fault isolation for public entry points.
//!
//! Every operation the host can reach is run inside a guard: a panic inside
//! the connector (or inside a host trait implementation it calls) is caught,
//! turned into a fixed-format diagnostic, and swallowed. The host observes
//! `None` instead of an unwinding panic, and the page keeps running.

use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

const ISSUES_URL: &str = "https://github.com/ctxwire/ctxwire/issues/new";

/// Runs `f`, containing any panic.
///
/// Returns `Some` with the closure's value, or `None` after logging the
/// diagnostic if the closure panicked.
pub fn guarded<T>(operation: &str, f: impl FnOnce() -> T) -> Option<T> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            report(operation, payload.as_ref());
            None
        }
    }
}

/// Runs `future` to completion, containing any panic.
///
/// The async counterpart of [`guarded`], used for the one entry point that
/// suspends (rebinding waits on the readiness gate).
pub async fn guarded_async<T>(operation: &str, future: impl Future<Output = T>) -> Option<T> {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Some(value),
        Err(payload) => {
            report(operation, payload.as_ref());
            None
        }
    }
}

fn report(operation: &str, payload: &(dyn Any + Send)) {
    tracing::error!(
        target: "ctxwire",
        operation,
        "{}",
        diagnostic(panic_message(payload))
    );
}

/// The fixed-format diagnostic emitted when a guard trips.
pub(crate) fn diagnostic(message: &str) -> String {
    format!(
        "There seems to be an error in the context-menu connector:\n{message}\n\
         Please open an issue at {ISSUES_URL}"
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
