//! The Chronicle page - the whole site in one scrollable document.
//!
//! Sections, top to bottom: hero, world lore, characters, footer. The page
//! owns the navigation state; activating a section marks it current right
//! away and smooth-scrolls to its anchor.

use dioxus::prelude::*;
use velcross_core::{NavState, Section};

use crate::components::{CharacterGallery, Hero, NavHeader, WorldGuide};
use crate::context::use_catalogue;

/// Page shell component.
#[component]
pub fn Chronicle() -> Element {
    let catalogue = use_catalogue();
    let mut nav = use_signal(NavState::default);

    let activate = use_callback(move |section: Section| {
        nav.write().activate(section);
        let _ = document::eval(&section.scroll_script());
    });

    rsx! {
        div { class: "page",
            // Background ambience
            div { class: "ambience",
                div { class: "ambience-gradient" }
            }

            NavHeader {
                nav: nav(),
                on_activate: move |section| activate.call(section),
                on_toggle_menu: move |_| nav.write().toggle_menu(),
            }

            main { class: "page-main",
                section { id: Section::Hero.anchor_id(),
                    Hero { on_explore: move |_| activate.call(Section::World) }
                }

                section {
                    id: Section::World.anchor_id(),
                    class: "page-section page-section--world",
                    div { class: "section-divider" }
                    WorldGuide { entries: catalogue.world_lore }
                }

                section {
                    id: Section::Characters.anchor_id(),
                    class: "page-section page-section--characters",
                    div { class: "section-divider" }
                    CharacterGallery { characters: catalogue.characters }
                }

                footer { class: "page-footer",
                    p { class: "page-footer__title", "© 1726 Velcross Chronicles. All rights reserved." }
                    p { class: "page-footer__tagline", "A Romance Fantasy Simulation Experience" }
                }
            }
        }
    }
}
