//! Route protection: every page decides what to render from the session.

use api::gate::{resolve, Access, RouteKind};
use api::Destination;
use dioxus::prelude::*;
use ui::views::LoadingSpinner;
use ui::{use_auth, NavTarget};

use crate::Route;

/// Renders `children` only when the session allows `kind`; otherwise shows a
/// spinner or redirects.
#[component]
pub fn Guarded(kind: RouteKind, children: Element) -> Element {
    let session = use_auth();
    let nav = use_navigator();

    let access = resolve(kind, &session.read());
    match access {
        Access::Spinner => rsx! {
            LoadingSpinner {}
        },
        Access::Redirect(destination) => {
            tracing::debug!("Redirecting to {}", destination.path());
            nav.replace(route_for(destination));
            rsx! {}
        }
        Access::Render => rsx! {
            {children}
        },
    }
}

/// Layout for the pages that need an approved account.
#[component]
pub fn Protected() -> Element {
    rsx! {
        Guarded {
            kind: RouteKind::Protected,
            Outlet::<Route> {}
        }
    }
}

fn route_for(destination: Destination) -> Route {
    NavTarget::from(destination).into()
}
