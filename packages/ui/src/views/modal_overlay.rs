use dioxus::prelude::*;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    /// Use the wide card for dialogs with forms and lists.
    #[props(default)]
    wide: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal-card wide" } else { "modal-card" },
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
