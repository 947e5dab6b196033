//! Navigation Header Component
//!
//! Desktop: fixed bar with brand mark and section links
//! Mobile: brand mark plus a menu toggle that expands MobileNav

use dioxus::prelude::*;
use velcross_core::{NavState, Section};
use velcross_ui::{Button, ButtonVariant, Icon, IconButton, LucideIcon};

use crate::components::mobile_nav::MobileNav;

/// Lucide icon for a page section
pub(crate) fn section_icon(section: Section) -> Icon {
    match section {
        Section::Hero => Icon::Star,
        Section::World => Icon::Map,
        Section::Characters => Icon::Users,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current section and menu state, owned by the page shell
    pub nav: NavState,
    /// Called with the section the visitor asked for
    pub on_activate: EventHandler<Section>,
    /// Called when the compact menu button is pressed
    pub on_toggle_menu: EventHandler<()>,
}

/// Navigation Header component
///
/// - Left: "Velcross Chronicles" brand, jumps back to the hero
/// - Right: section links (desktop) or menu toggle (mobile)
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let nav = props.nav;
    let on_activate = props.on_activate;
    let menu_open = nav.menu.is_open();
    let (toggle_icon, toggle_label) = if menu_open {
        (Icon::X, "Close menu")
    } else {
        (Icon::Menu, "Open menu")
    };

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-inner",
                // Left: brand
                div {
                    class: "nav-brand",
                    onclick: move |_| on_activate.call(Section::Hero),
                    LucideIcon { icon: Icon::BookOpen, size: 24, class: "nav-brand-icon".to_string() }
                    span { class: "nav-brand-title", "Velcross Chronicles" }
                }

                // Right: desktop links
                div { class: "nav-links",
                    for section in Section::ALL {
                        Button {
                            key: "{section.anchor_id()}",
                            variant: ButtonVariant::Nav,
                            active: nav.is_current(section),
                            onclick: move |_| on_activate.call(section),
                            LucideIcon { icon: section_icon(section), size: 16 }
                            span { "{section.display_name()}" }
                        }
                    }
                }

                // Right: mobile toggle
                div { class: "nav-toggle",
                    IconButton {
                        onclick: move |_| props.on_toggle_menu.call(()),
                        aria_label: toggle_label.to_string(),
                        LucideIcon { icon: toggle_icon, size: 24 }
                    }
                }
            }

            // Compact panel (hidden on desktop via CSS)
            if menu_open {
                MobileNav { on_activate: on_activate }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_section_has_its_own_icon() {
        assert_eq!(section_icon(Section::Hero), Icon::Star);
        assert_eq!(section_icon(Section::World), Icon::Map);
        assert_eq!(section_icon(Section::Characters), Icon::Users);
    }
}
