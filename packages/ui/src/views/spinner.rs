use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Full-page spinner shown while the session check or a page load is pending.
#[component]
pub fn LoadingSpinner(#[props(default)] message: String) -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "loading-page",
            div { class: "spinner" }
            if !message.is_empty() {
                p { class: "loading-message", "{message}" }
            }
        }
    }
}
