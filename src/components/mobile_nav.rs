//! Mobile Navigation Component
//!
//! Expandable panel for narrow viewports (< 768px). Only mounted while the
//! menu is open; activating any item closes it again.

use dioxus::prelude::*;
use velcross_core::Section;
use velcross_ui::{Button, ButtonVariant, LucideIcon};

use crate::components::nav_header::section_icon;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Called with the section the visitor asked for
    pub on_activate: EventHandler<Section>,
}

/// Mobile navigation panel
///
/// Shows: Main | World | Characters, stacked full width.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let on_activate = props.on_activate;

    rsx! {
        div { class: "mobile-nav",
            div { class: "mobile-nav-items",
                for section in Section::ALL {
                    Button {
                        key: "{section.anchor_id()}",
                        variant: ButtonVariant::MobileNav,
                        onclick: move |_| on_activate.call(section),
                        LucideIcon { icon: section_icon(section), size: 20 }
                        span { "{section.display_name()}" }
                    }
                }
            }
        }
    }
}
