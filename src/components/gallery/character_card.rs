//! Character Card Component
//!
//! One selectable card in the gallery grid.

use dioxus::prelude::*;
use velcross_core::CardView;

/// Shared portrait placeholder until per-character art exists.
pub(crate) const PORTRAIT_URL: &str = "https://i.postimg.cc/63NLzg9v/jemog-eobs-eum.png";

/// Gallery card showing role, name, age and the first traits.
///
/// The whole card is the click target; `on_select` receives nothing because
/// the parent already knows which record the card was built from.
#[component]
pub fn CharacterCard(card: CardView, on_select: EventHandler<()>) -> Element {
    let theme_vars = card.theme.css_vars();

    rsx! {
        div {
            class: "character-card reveal-scale",
            style: "{theme_vars} animation-delay: {card.reveal_delay()}s;",
            role: "button",
            "aria-label": "Open profile of {card.name}",
            onclick: move |_| on_select.call(()),

            // Portrait
            div { class: "character-card__portrait",
                img {
                    src: PORTRAIT_URL,
                    alt: "{card.name}",
                    class: "character-card__img",
                }
                div { class: "character-card__shade" }
                div { class: "character-card__accent" }
            }

            div { class: "character-card__body",
                span { class: "role-badge", "{card.role}" }
                h3 { class: "character-card__name", "{card.name}" }
                p { class: "character-card__age", "{card.age}" }

                div { class: "character-card__traits",
                    for (i, trait_label) in card.traits.iter().enumerate() {
                        span { key: "{i}", class: "trait-tag", "#{trait_label}" }
                    }
                }
            }
        }
    }
}
