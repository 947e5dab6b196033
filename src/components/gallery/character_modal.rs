//! Character Modal Component
//!
//! Detail overlay for the selected character: themed banner, introduction,
//! profile grid, full trait list and the personality radar chart.
//!
//! Hit testing: the backdrop and the close button dismiss, clicks inside the
//! panel never do and never reach the backdrop.

use dioxus::prelude::*;
use velcross_core::{DetailView, OverlayHit, Selection};
use velcross_ui::{Icon, IconButton, LucideIcon};

use super::character_card::PORTRAIT_URL;
use super::{PersonalityRadar, ProfileItem};

/// Character detail overlay
///
/// Renders nothing while `selection` is empty.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharacterModal {
///         selection: selection(),
///         on_hit: move |hit| { selection.write().hit(hit); },
///     }
/// }
/// ```
#[component]
pub fn CharacterModal(
    /// Current gallery selection
    selection: Selection,
    /// Where a click on the overlay landed
    on_hit: EventHandler<OverlayHit>,
) -> Element {
    let Some(view) = DetailView::for_selection(&selection) else {
        return rsx! {};
    };
    let theme_vars = view.theme.css_vars();

    rsx! {
        div { class: "modal-root", style: "{theme_vars}",
            // Backdrop
            div {
                class: "modal-backdrop",
                onclick: move |_| on_hit.call(OverlayHit::Backdrop),
            }

            // Panel
            div {
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{view.name}",
                onclick: move |e| {
                    e.stop_propagation();
                    on_hit.call(OverlayHit::Content);
                },

                // Header / banner
                div { class: "modal-banner",
                    IconButton {
                        onclick: move |_| on_hit.call(OverlayHit::CloseControl),
                        aria_label: "Close".to_string(),
                        class: "modal-close".to_string(),
                        LucideIcon { icon: Icon::X, size: 24 }
                    }
                    div { class: "modal-identity",
                        div { class: "modal-portrait",
                            img { src: PORTRAIT_URL, alt: "{view.name}" }
                        }
                        div { class: "modal-heading",
                            h2 { class: "modal-name", "{view.name}" }
                            p { class: "modal-role", "{view.role}" }
                        }
                    }
                }

                // Body
                div { class: "modal-body",
                    div { class: "modal-details",
                        div {
                            h3 { class: "modal-section-title",
                                LucideIcon { icon: Icon::Heart, size: 20, class: "modal-section-icon".to_string() }
                                "Introduction"
                            }
                            p { class: "modal-description", "{view.description}" }
                        }

                        div {
                            h3 { class: "modal-section-title",
                                LucideIcon { icon: Icon::User, size: 20, class: "modal-section-icon".to_string() }
                                "Profile"
                            }
                            div { class: "profile-grid",
                                for field in view.profile.iter() {
                                    ProfileItem { key: "{field.label}", field: field.clone() }
                                }
                            }
                        }

                        div {
                            h3 { class: "modal-traits-title", "Key Traits" }
                            div { class: "modal-traits",
                                for (i, trait_label) in view.traits.iter().enumerate() {
                                    span { key: "{i}", class: "trait-chip", "{trait_label}" }
                                }
                            }
                        }
                    }

                    div { class: "modal-chart",
                        h3 { class: "modal-chart-title",
                            LucideIcon { icon: Icon::Activity, size: 16, class: "modal-section-icon".to_string() }
                            "Personality Analysis"
                        }
                        PersonalityRadar { chart: view.chart.clone() }
                        div { class: "modal-chart-note", "* Values based on relative dominance" }
                    }
                }
            }
        }
    }
}
