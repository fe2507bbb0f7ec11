//! Authentication context and hooks for the UI.

use api::{ApiClient, Backend, SessionState};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The REST client provided by [`AuthProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context_provider(ApiClient::from_env);
    let mut session = use_signal(SessionState::default);

    // Hydrate from the session cookie on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let outcome = api.check_auth().await;
            session.write().apply_check(outcome);
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// End the session on the backend and clear local state.
///
/// The local state is cleared even if the request fails.
pub async fn sign_out(api: &ApiClient, mut session: Signal<SessionState>) {
    let outcome = api.logout().await;
    session.write().apply_logout(outcome);
}

/// Button to log out the current user.
///
/// Once the session is cleared the route guard replaces the current page with
/// `/login`, so the button does not navigate itself.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] class: String,
    #[props(default = ButtonVariant::Outline)] variant: ButtonVariant,
    children: Element,
) -> Element {
    let api = use_api();
    let session = use_auth();

    let onclick = move |_| {
        let api = api.clone();
        spawn(async move {
            sign_out(&api, session).await;
        });
    };

    rsx! {
        Button {
            variant,
            class,
            onclick,
            {children}
            "{label}"
        }
    }
}
