//! Reusable button component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Chromeless button - accessibility and click gating without visual styling.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: "button",
            disabled: is_disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent background - the fitment submit action
    Primary,
    /// Gray background - pagination and other secondary actions
    Secondary,
    /// No background - text only with hover
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    /// Full-width call to action
    Large,
}

/// Styled button. While `loading` it shows a spinner before its label and
/// ignores clicks.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let sizing = match size {
        ButtonSize::Small => "text-sm px-3 py-1.5",
        ButtonSize::Large => "w-full justify-center text-lg font-semibold px-6 py-3",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-orange-600 hover:bg-orange-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-200 disabled:opacity-40 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
    };

    let computed_class = format!(
        "inline-flex items-center gap-2 rounded-lg transition-colors {sizing} {variant_class} {}",
        class.as_deref().unwrap_or_default()
    );

    rsx! {
        ChromelessButton {
            id,
            disabled,
            loading,
            aria_label,
            class: Some(computed_class),
            onclick,
            if loading {
                LoaderIcon { class: "w-4 h-4 animate-spin" }
            }
            {children}
        }
    }
}
