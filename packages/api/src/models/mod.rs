//! Data models exchanged with the backend.

mod auth;
mod role;
mod user;

pub use auth::{
    AuthResponse, ErrorBody, FieldErrors, LoginRequest, RegisterField, RegisterRequest,
    RoleUpdate, RolesEnvelope, UsersEnvelope,
};
pub use role::{Role, RoleInfo, UnknownRole};
pub use user::{AccountStatus, User};
