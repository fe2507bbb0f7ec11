use api::{Section, User};
use dioxus::prelude::*;

use crate::components::{role_badge_variant, Badge, Button, ButtonVariant};
use crate::icons::{FaBolt, FaCircleCheck, FaDatabase, FaHouse, FaLayerGroup, FaRightFromBracket, FaShieldHalved, FaUser};
use crate::{Icon, LogoutButton, NavTarget};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Left-hand navigation of the dashboard: profile, section links, admin link and
/// sign out.
#[component]
pub fn DashboardSidebar(
    user: User,
    #[props(!optional)]
    active_section: Option<Section>,
    on_navigate: EventHandler<NavTarget>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                span { class: "sidebar-brand-mark", Icon { icon: FaBolt, width: 12, height: 12 } }
                h2 { "Keansa AI Suite" }
            }

            // Profile
            div {
                class: "sidebar-user",
                div { class: "sidebar-avatar", Icon { icon: FaUser, width: 20, height: 20 } }
                div {
                    class: "sidebar-user-details",
                    p { class: "sidebar-user-name", "{user.full_name()}" }
                    p { class: "sidebar-user-email", "{user.email}" }
                    Badge { variant: role_badge_variant(user.role), "{user.role_label()}" }
                }
            }

            nav {
                class: "sidebar-nav",
                button {
                    class: if active_section.is_none() { "sidebar-link active" } else { "sidebar-link" },
                    onclick: move |_| on_navigate.call(NavTarget::Dashboard(None)),
                    Icon { icon: FaHouse, width: 16, height: 16 }
                    span { "Dashboard" }
                }
                for section in Section::ALL {
                    button {
                        key: "{section.id()}",
                        class: if active_section == Some(section) { "sidebar-link active" } else { "sidebar-link" },
                        onclick: move |_| on_navigate.call(NavTarget::Dashboard(Some(section))),
                        {section_icon(section)}
                        span { "{section.nav_label()}" }
                    }
                }
            }

            if user.is_admin() {
                div {
                    class: "sidebar-footer",
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "sidebar-action",
                        onclick: move |_| on_navigate.call(NavTarget::Dashboard(None)),
                        Icon { icon: FaShieldHalved, width: 14, height: 14 }
                        "Admin Panel"
                    }
                }
            }

            div {
                class: "sidebar-footer",
                LogoutButton {
                    label: "Sign Out",
                    variant: ButtonVariant::Ghost,
                    class: "sidebar-action sidebar-sign-out",
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                }
            }
        }
    }
}

fn section_icon(section: Section) -> Element {
    match section {
        Section::DataMapping => rsx! { Icon { icon: FaDatabase, width: 16, height: 16 } },
        Section::MasterDataManagement => rsx! { Icon { icon: FaLayerGroup, width: 16, height: 16 } },
        Section::ErrorCorrectionDetection => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
    }
}
