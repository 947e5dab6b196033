//! Character Gallery Component
//!
//! Grid of character cards. Owns the selection: clicking a card opens the
//! detail overlay on that character, dismissing the overlay clears it.

use dioxus::prelude::*;
use velcross_core::{gallery_cards, Character, OverlayHit, Selection};
use velcross_ui::SectionHeading;

use super::{CharacterCard, CharacterModal};

/// Character gallery with its detail overlay
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharacterGallery { characters: catalogue.characters }
/// }
/// ```
#[component]
pub fn CharacterGallery(characters: &'static [Character]) -> Element {
    let mut selection = use_signal(Selection::default);

    let on_hit = move |hit: OverlayHit| {
        selection.write().hit(hit);
    };

    rsx! {
        div { class: "container",
            SectionHeading {
                title: "Dramatis Personae".to_string(),
                subtitle: "The key figures of the Empire".to_string(),
            }

            div { class: "character-grid",
                for (card, character) in gallery_cards(characters).into_iter().zip(characters.iter()) {
                    CharacterCard {
                        key: "{character.id}",
                        card: card,
                        on_select: move |_| selection.write().select(character.clone()),
                    }
                }
            }

            CharacterModal {
                selection: selection(),
                on_hit: on_hit,
            }
        }
    }
}
