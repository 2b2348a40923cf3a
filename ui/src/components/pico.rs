//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<div class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { div { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    children: Element,
    #[props(default)]
    class: String,
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
pub fn Card(props: CardProps) -> Element {
    rsx! { article { class: "{props.class}", {props.children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    /// Extra classes appended after the Pico ones.
    #[props(default)]
    class: String,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = vec![props.button_type.to_class()];
    if props.outline {
        classes.push("outline");
    }
    classes.push(props.class.as_str());
    let class_str = classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        button {
            class: "{class_str}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    value: String,
    on_input: EventHandler<String>,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default)]
    class: String,
}

/// A controlled search field that reports every keystroke.
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        input {
            r#type: "search",
            class: "{props.class}",
            value: "{props.value}",
            placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
            oninput: move |evt| props.on_input.call(evt.value()),
        }
    }
}
