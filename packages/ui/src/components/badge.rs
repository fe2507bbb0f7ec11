use api::Role;
use dioxus::prelude::*;

const BADGE_CSS: Asset = asset!("/assets/styling/badge.css");

#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Success => "success",
        }
    }
}

/// Badge colour for a role; users without a role get the outline style.
pub fn role_badge_variant(role: Option<Role>) -> BadgeVariant {
    match role {
        Some(Role::SuperAdmin) => BadgeVariant::Destructive,
        Some(Role::Admin) => BadgeVariant::Default,
        Some(Role::Manager) | Some(Role::Viewer) => BadgeVariant::Secondary,
        Some(Role::User) | None => BadgeVariant::Outline,
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: BADGE_CSS }

        span {
            class: "badge",
            "data-style": variant.class(),
            {children}
        }
    }
}
