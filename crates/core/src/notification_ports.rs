//! Ports for user-visible feedback.
//!
//! The console reports every mutation and most failures through toast
//! notifications, and sends the user back to the login page when the session
//! is gone. Both are side channels the HTTP layer drives, so they are expressed
//! as ports here and implemented by whatever front end embeds the client.
//!
//! # Example
//!
//! ```no_run
//! use opsdesk_core::{Notifier, ToastId};
//!
//! fn save(notifier: &dyn Notifier) {
//!     let toast: ToastId = notifier.loading("Saving business...");
//!     // ... perform the call ...
//!     notifier.dismiss(toast);
//!     notifier.success("Business saved");
//! }
//! ```

/// Handle of a toast that stays open until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Toast notification sink.
pub trait Notifier: Send + Sync {
    /// Show a persistent loading toast.
    fn loading(&self, message: &str) -> ToastId;

    /// Close a toast returned by [`Notifier::loading`].
    fn dismiss(&self, id: ToastId);

    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// Client-side navigation, used for the global 401 redirect.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}
