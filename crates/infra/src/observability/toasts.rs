use std::sync::atomic::{AtomicU64, Ordering};

use opsdesk_core::{Navigator, Notifier, ToastId};
use tracing::{error, info};

static NEXT_TOAST: AtomicU64 = AtomicU64::new(1);

/// Notifier for headless use: every toast becomes a tracing event under the
/// `opsdesk::toast` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn loading(&self, message: &str) -> ToastId {
        let id = ToastId(NEXT_TOAST.fetch_add(1, Ordering::Relaxed));
        info!(target: "opsdesk::toast", toast_id = id.0, kind = "loading", "{message}");
        id
    }

    fn dismiss(&self, id: ToastId) {
        info!(target: "opsdesk::toast", toast_id = id.0, kind = "dismiss", "toast dismissed");
    }

    fn success(&self, message: &str) {
        info!(target: "opsdesk::toast", kind = "success", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "opsdesk::toast", kind = "error", "{message}");
    }
}

/// Navigator that only records where the user would be sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn redirect(&self, path: &str) {
        info!(target: "opsdesk::navigation", path, "redirect");
    }
}
