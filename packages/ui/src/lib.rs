//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{sign_out, use_api, use_auth, AuthProvider, LogoutButton};

mod nav;
pub use nav::NavTarget;

mod sidebar;
pub use sidebar::DashboardSidebar;

mod connections_dialog;
pub use connections_dialog::ConnectionsDialog;

mod timer;
