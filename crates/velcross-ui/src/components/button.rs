//! Button Components
//!
//! Button styles used across the page:
//! - Explore: the hero's outlined call to action
//! - Nav: desktop navigation items, highlighted when current
//! - MobileNav: full-width items inside the compact menu panel
//! - Ghost: bare icon-sized controls

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Outlined amber call to action
    #[default]
    Explore,
    /// Desktop navigation item
    Nav,
    /// Compact menu item
    MobileNav,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Explore => "btn-explore",
            ButtonVariant::Nav => "btn-nav",
            ButtonVariant::MobileNav => "btn-mobile-nav",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join the variant class with optional extras.
fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Marks the button as the current item (nav variants)
    #[props(default = false)]
    pub active: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Nav,
///         active: nav().is_current(Section::World),
///         onclick: move |_| activate(Section::World),
///         "World"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-current": if props.active { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, menu toggle, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Icon-only button.
///
/// Clicks never bubble past this button, so it can sit inside a clickable
/// surface without also triggering it.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = button_class(ButtonVariant::Ghost, false, props.class.as_deref());

    rsx! {
        button {
            class: "icon-btn {full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Explore.class(), "btn-explore");
        assert_eq!(ButtonVariant::Nav.class(), "btn-nav");
        assert_eq!(ButtonVariant::MobileNav.class(), "btn-mobile-nav");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Explore);
    }

    #[test]
    fn class_joins_active_and_extras() {
        assert_eq!(button_class(ButtonVariant::Nav, false, None), "btn-nav");
        assert_eq!(button_class(ButtonVariant::Nav, true, None), "btn-nav active");
        assert_eq!(
            button_class(ButtonVariant::Ghost, false, Some("close-btn")),
            "btn-ghost close-btn"
        );
        assert_eq!(button_class(ButtonVariant::Ghost, false, Some("")), "btn-ghost");
    }
}
