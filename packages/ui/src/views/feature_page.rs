use api::{Feature, Section};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::icons::{FaArrowLeft, FaScrewdriverWrench};
use crate::{Icon, NavTarget};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Placeholder page for feature areas reachable from the dashboard tiles.
#[component]
pub fn FeaturePage(feature: Feature, on_navigate: EventHandler<NavTarget>) -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "auth-page",
            Card {
                class: "feature-card",
                CardHeader {
                    class: "auth-header",
                    div { class: "auth-logo", Icon { icon: FaScrewdriverWrench, width: 28, height: 28 } }
                    CardTitle { "{feature.title()}" }
                    p { class: "auth-subtitle", "{feature.description()}" }
                }
                CardContent {
                    p { class: "feature-soon", "This feature is coming soon." }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "full-width",
                        onclick: move |_| {
                            on_navigate.call(NavTarget::Dashboard(Some(Section::ErrorCorrectionDetection)))
                        },
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        "Back to Dashboard"
                    }
                }
            }
        }
    }
}
