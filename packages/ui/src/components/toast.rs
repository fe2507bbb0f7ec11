//! Toast notifications, backed by `dioxus-primitives`.

use api::ApiError;
use dioxus::prelude::*;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Mounts the toast stack; `use_toast` works anywhere below it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        dioxus_primitives::toast::ToastProvider {
            {children}
        }
    }
}

/// Title and description for an error toast.
///
/// Suspended accounts get their own title; otherwise the backend's message wins
/// over `fallback`.
pub fn error_toast(err: &ApiError, fallback: &str) -> (String, String) {
    (err.title().to_string(), err.user_message(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toast_text() {
        let suspended = ApiError::AccountSuspended("Contact your administrator".to_string());
        assert_eq!(
            error_toast(&suspended, "Failed to log in. Please try again."),
            (
                "Account Suspended".to_string(),
                "Contact your administrator".to_string()
            )
        );

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(
            error_toast(&network, "Failed to load data"),
            ("Error".to_string(), "Failed to load data".to_string())
        );
    }
}
