//! Hero Banner Component
//!
//! Full-viewport landing banner with the era, title, tagline and the
//! "Enter the World" call to action.

use dioxus::prelude::*;
use velcross_ui::{Button, ButtonVariant, Icon, LucideIcon};

/// Landing banner.
///
/// `on_explore` fires when the call to action is pressed; the page shell
/// routes it to the world section.
#[component]
pub fn Hero(on_explore: EventHandler<()>) -> Element {
    rsx! {
        div { class: "hero",
            // Background layers
            div { class: "hero-bg",
                div { class: "hero-bg-gradient" }
                div { class: "hero-bg-glow" }
            }

            div { class: "hero-content",
                div { class: "hero-text reveal-up",
                    span { class: "hero-era", "1726 Imperial Era" }
                    h1 { class: "hero-title",
                        "Velcross"
                        br {}
                        "Chronicles"
                    }
                    p { class: "hero-tagline",
                        "\"In a world where magic whispers and empires rise, "
                        br { class: "desktop-only" }
                        "destiny is woven by the threads of power and love.\""
                    }
                }

                Button {
                    variant: ButtonVariant::Explore,
                    class: "reveal-fade".to_string(),
                    onclick: move |_| on_explore.call(()),
                    span { class: "btn-explore-label", "Enter the World" }
                    LucideIcon { icon: Icon::ChevronDown, size: 16, class: "bounce".to_string() }
                }
            }

            // Decorative elements
            div { class: "hero-fade-bottom" }
            div { class: "hero-rule hero-rule--left" }
            div { class: "hero-rule hero-rule--right" }
        }
    }
}
