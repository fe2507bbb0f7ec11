use dioxus::prelude::*;

const BUTTON_CSS: Asset = asset!("/assets/styling/button.css");

#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Success,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Success => "success",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Small => "sm",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] class: String,
    /// Render as a form submit button.
    #[props(default)]
    submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: BUTTON_CSS }

        button {
            class: "button {class}",
            "data-style": variant.class(),
            "data-size": size.class(),
            r#type: if submit { "submit" } else { "button" },
            disabled,
            title,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
