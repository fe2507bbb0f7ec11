use api::gate::RouteKind;
use api::{Feature, Section};
use dioxus::prelude::*;
use ui::views::{
    AdminDashboardView, FeaturePage, LoadingSpinner, LoginView, PendingApprovalView,
    RegisterView, UserDashboardView,
};
use ui::{use_auth, NavTarget};

use super::Guarded;
use crate::Route;

/// Push the route for a view's navigation request.
fn use_go() -> impl Fn(NavTarget) + Copy + 'static {
    let nav = use_navigator();
    move |target: NavTarget| {
        nav.push(Route::from(target));
    }
}

/// `/` sends the visitor to wherever the session belongs.
#[component]
pub fn Root() -> Element {
    rsx! {
        Guarded {
            kind: RouteKind::Root,
            LoadingSpinner {}
        }
    }
}

#[component]
pub fn Login() -> Element {
    let go = use_go();
    rsx! {
        Guarded {
            kind: RouteKind::SignedOutOnly,
            LoginView { on_navigate: go }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let go = use_go();
    rsx! {
        Guarded {
            kind: RouteKind::SignedOutOnly,
            RegisterView { on_navigate: go }
        }
    }
}

#[component]
pub fn PendingApproval() -> Element {
    rsx! {
        Guarded {
            kind: RouteKind::SignedIn,
            PendingApprovalView {}
        }
    }
}

/// Admins get user management; everyone else gets the tile dashboard.
#[component]
pub fn Dashboard(section: String) -> Element {
    let session = use_auth();
    let go = use_go();

    if session.read().is_admin() {
        rsx! {
            AdminDashboardView {}
        }
    } else {
        rsx! {
            UserDashboardView { section: Section::parse(&section), on_navigate: go }
        }
    }
}

#[component]
pub fn RuleConfigurations() -> Element {
    let go = use_go();
    rsx! {
        FeaturePage { feature: Feature::RuleConfigurations, on_navigate: go }
    }
}

#[component]
pub fn DataValidations() -> Element {
    let go = use_go();
    rsx! {
        FeaturePage { feature: Feature::DataValidations, on_navigate: go }
    }
}

/// Unknown paths fall back to the root redirect.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    rsx! {
        Guarded {
            kind: RouteKind::Root,
            LoadingSpinner {}
        }
    }
}
