//! Form, layout and feedback primitives shared by every view.

mod badge;
mod button;
mod card;
mod input;
mod label;
mod toast;

pub use badge::{role_badge_variant, Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use input::Input;
pub use label::Label;
pub use toast::{error_toast, use_toast, ToastOptions, ToastProvider};
