//! Route protection derived from the session.
//!
//! [`Gate`] classifies a [`SessionState`]; [`resolve`] turns that class into what a
//! given kind of route should do (spinner, redirect, or render).

use crate::SessionState;

/// Where the session stands for routing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Loading,
    Unauthenticated,
    PendingApproval,
    Approved,
}

impl Gate {
    pub fn of(session: &SessionState) -> Self {
        if session.loading {
            Gate::Loading
        } else if !session.is_authenticated {
            Gate::Unauthenticated
        } else if session.is_approved() {
            Gate::Approved
        } else {
            Gate::PendingApproval
        }
    }

    /// Landing page for this state; `None` while loading.
    pub fn home(self) -> Option<Destination> {
        match self {
            Gate::Loading => None,
            Gate::Unauthenticated => Some(Destination::Login),
            Gate::PendingApproval => Some(Destination::PendingApproval),
            Gate::Approved => Some(Destination::Dashboard),
        }
    }
}

/// Redirect targets used by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    PendingApproval,
    Dashboard,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::PendingApproval => "/pending-approval",
            Destination::Dashboard => "/dashboard",
        }
    }
}

/// How a route is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// `/login`, `/register`: only for signed-out visitors.
    SignedOutOnly,
    /// `/pending-approval`: any signed-in user.
    SignedIn,
    /// `/dashboard` and feature pages: approved users only.
    Protected,
    /// `/`: always redirects home.
    Root,
}

/// What to render for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Spinner,
    Redirect(Destination),
    Render,
}

pub fn resolve(kind: RouteKind, session: &SessionState) -> Access {
    let gate = Gate::of(session);
    let Some(home) = gate.home() else {
        return Access::Spinner;
    };

    match (kind, gate) {
        (RouteKind::Root, _) => Access::Redirect(home),
        (RouteKind::SignedOutOnly, Gate::Unauthenticated) => Access::Render,
        (RouteKind::SignedOutOnly, _) => Access::Redirect(home),
        (RouteKind::SignedIn, Gate::Unauthenticated) => Access::Redirect(Destination::Login),
        (RouteKind::SignedIn, _) => Access::Render,
        (RouteKind::Protected, Gate::Approved) => Access::Render,
        (RouteKind::Protected, _) => Access::Redirect(home),
    }
}
