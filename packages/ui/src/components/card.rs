use dioxus::prelude::*;

const CARD_CSS: Asset = asset!("/assets/styling/card.css");

#[component]
pub fn Card(
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: CARD_CSS }

        div {
            class: "card {class}",
            "data-clickable": onclick.is_some(),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn CardHeader(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-header {class}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: "card-title {class}", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}
