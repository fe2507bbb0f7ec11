//! # API crate: platform-neutral core of the DataSync admin console
//!
//! Everything the console knows about its REST backend lives here, free of any UI
//! framework so it can be unit-tested natively. The `ui` crate wraps these types in
//! Dioxus signals and the `web` crate wires them to routes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: `User`, `Role`, `RoleInfo`, request/response bodies, registration validation |
//! | [`backend`] | The [`Backend`] trait, one method per REST endpoint |
//! | [`client`] | [`ApiClient`], the `reqwest` implementation with cookie credentials |
//! | [`memory`] | [`MemoryBackend`], an in-process implementation for tests and demos |
//! | [`session`] | [`SessionState`] and its login / register / logout / check transitions |
//! | [`gate`] | Route protection: loading spinner, redirects, or render |
//! | [`admin`] | Admin dashboard data loading and user-management actions |
//! | [`dashboard`] | Sections and feature tiles of the user dashboard |
//! | [`connections`] | The client-only connection management mock |
//! | [`config`] | [`ApiConfig`] resolution from `DATASYNC_API_URL` |
//!
//! ## Errors
//!
//! Every fallible call returns [`ApiError`]. The distinguished
//! [`ApiError::AccountSuspended`] variant marks logins refused for deactivated
//! accounts; [`ApiError::user_message`] picks the text a toast should show.

pub mod admin;
pub mod backend;
pub mod client;
pub mod config;
pub mod connections;
pub mod dashboard;
pub mod error;
pub mod gate;
pub mod memory;
pub mod models;
pub mod session;

pub use admin::{AdminData, UserAction};
pub use backend::Backend;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use connections::{Connection, ConnectionBook, ConnectionDraft, ConnectionKind, ConnectionStatus};
pub use dashboard::{Feature, Section, Tile, TileAction, TileKind};
pub use error::ApiError;
pub use gate::{Access, Destination, Gate, RouteKind};
pub use memory::MemoryBackend;
pub use models::{
    AccountStatus, AuthResponse, FieldErrors, LoginRequest, RegisterField, RegisterRequest, Role,
    RoleInfo, User,
};
pub use session::SessionState;
