use dioxus::prelude::*;

const INPUT_CSS: Asset = asset!("/assets/styling/input.css");

/// Single-line text input. `invalid` switches to the error outline.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] invalid: bool,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        document::Stylesheet { href: INPUT_CSS }

        input {
            class: "input {class}",
            "data-invalid": invalid,
            id,
            r#type: input_type,
            value,
            placeholder,
            required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
