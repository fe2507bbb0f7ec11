use dioxus::prelude::*;

use crate::components::{ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaClock, FaUser};
use crate::{use_auth, Icon, LogoutButton};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Holding page for signed-in accounts an administrator has not approved yet.
#[component]
pub fn PendingApprovalView() -> Element {
    let session = use_auth();
    let first_name = session
        .read()
        .user
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "auth-page",
            Card {
                class: "auth-card",
                CardHeader {
                    class: "auth-header",
                    div { class: "auth-logo pending", Icon { icon: FaClock, width: 32, height: 32 } }
                    CardTitle {
                        class: "pending-title",
                        Icon { icon: FaCircleExclamation, width: 18, height: 18 }
                        "Account Pending Approval"
                    }
                }
                CardContent {
                    class: "pending-content",

                    div {
                        class: "notice warning",
                        Icon { icon: FaUser, width: 18, height: 18 }
                        div {
                            p { strong { "Welcome, {first_name}!" } }
                            p {
                                "Your account has been successfully created but requires admin approval before you can access the dashboard."
                            }
                        }
                    }

                    div {
                        class: "notice info",
                        Icon { icon: FaCircleCheck, width: 18, height: 18 }
                        div {
                            h4 { "What happens next?" }
                            ul {
                                li { "An administrator will review your account" }
                                li { "You'll receive access once approved" }
                                li { "This process typically takes 24-48 hours" }
                            }
                        }
                    }

                    p {
                        class: "pending-help",
                        "Please contact your system administrator if you have questions about your account status."
                    }

                    LogoutButton {
                        label: "Sign Out",
                        variant: ButtonVariant::Outline,
                        class: "full-width",
                    }
                }
            }
        }
    }
}
