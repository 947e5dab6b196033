//! Gallery state and card view model.
//!
//! The gallery owns a single optional selection. Clicking a card replaces it
//! wholesale; dismissing the overlay clears it. There is never more than one
//! selected character.

use crate::types::{Character, ColorTheme};

/// How many traits a gallery card shows before truncating.
pub const TRAIT_PREVIEW_LIMIT: usize = 2;

/// Which character, if any, the detail overlay is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// Overlay closed. Initial state, and the state after every dismissal.
    #[default]
    Empty,
    /// Overlay open on this character
    Showing(Character),
}

/// Where a click on the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    /// The dimmed area around the panel
    Backdrop,
    /// Anywhere inside the panel
    Content,
    /// The close button in the panel header
    CloseControl,
}

impl OverlayHit {
    pub fn dismisses(&self) -> bool {
        matches!(self, OverlayHit::Backdrop | OverlayHit::CloseControl)
    }
}

impl Selection {
    /// Select a character, replacing any previous selection.
    pub fn select(&mut self, character: Character) {
        tracing::debug!(id = %character.id, "character selected");
        *self = Selection::Showing(character);
    }

    /// Clear the selection. No-op when nothing is selected.
    pub fn dismiss(&mut self) {
        if let Selection::Showing(character) = self {
            tracing::debug!(id = %character.id, "character dismissed");
            *self = Selection::Empty;
        }
    }

    /// Apply a click on the overlay. Returns whether the selection changed.
    pub fn hit(&mut self, target: OverlayHit) -> bool {
        if target.dismisses() && self.is_open() {
            self.dismiss();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Character> {
        match self {
            Selection::Empty => None,
            Selection::Showing(character) => Some(character),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Showing(_))
    }
}

impl From<Option<Character>> for Selection {
    fn from(value: Option<Character>) -> Self {
        value.map_or(Selection::Empty, Selection::Showing)
    }
}

/// What one gallery card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub age: String,
    /// At most [`TRAIT_PREVIEW_LIMIT`] traits, in record order
    pub traits: Vec<String>,
    pub theme: ColorTheme,
    /// Position in the gallery, drives the staggered entrance
    pub index: usize,
}

impl CardView {
    pub fn new(index: usize, character: &Character) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            role: character.role.clone(),
            age: character.age.clone(),
            traits: character
                .traits
                .iter()
                .take(TRAIT_PREVIEW_LIMIT)
                .cloned()
                .collect(),
            theme: character.color_theme,
            index,
        }
    }

    /// Entrance delay in seconds.
    pub fn reveal_delay(&self) -> f64 {
        self.index as f64 * 0.1
    }
}

/// One card per record, preserving order.
pub fn gallery_cards(characters: &[Character]) -> Vec<CardView> {
    characters
        .iter()
        .enumerate()
        .map(|(index, character)| CardView::new(index, character))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aria() -> Character {
        Character::named("c1", "Aria").with_traits(&["bold", "cunning", "loyal"])
    }

    #[test]
    fn starts_empty() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert!(selection.current().is_none());
    }

    #[test]
    fn select_holds_the_full_record() {
        let mut selection = Selection::default();
        selection.select(aria());
        assert_eq!(selection.current(), Some(&aria()));
    }

    #[test]
    fn dismiss_when_empty_is_a_no_op() {
        let mut selection = Selection::default();
        selection.dismiss();
        assert_eq!(selection, Selection::Empty);
    }

    #[test]
    fn content_hits_keep_the_overlay_open() {
        let mut selection = Selection::Showing(aria());
        assert!(!selection.hit(OverlayHit::Content));
        assert!(selection.is_open());

        assert!(selection.hit(OverlayHit::Backdrop));
        assert!(!selection.is_open());

        selection.select(aria());
        assert!(selection.hit(OverlayHit::CloseControl));
        assert_eq!(selection, Selection::Empty);
    }

    #[test]
    fn hit_on_closed_overlay_changes_nothing() {
        let mut selection = Selection::Empty;
        assert!(!selection.hit(OverlayHit::Backdrop));
    }

    #[test]
    fn card_truncates_traits() {
        let card = CardView::new(0, &aria());
        assert_eq!(card.traits, vec!["bold", "cunning"]);

        let short = Character::named("c2", "Bram").with_traits(&["quiet"]);
        assert_eq!(CardView::new(1, &short).traits, vec!["quiet"]);
    }

    #[test]
    fn cards_follow_input_order() {
        let characters = vec![aria(), Character::named("c2", "Bram")];
        let ids: Vec<_> = gallery_cards(&characters)
            .into_iter()
            .map(|card| (card.index, card.id))
            .collect();
        assert_eq!(ids, vec![(0, "c1".to_string()), (1, "c2".to_string())]);
    }

    #[test]
    fn reveal_is_staggered() {
        let characters = vec![aria(), aria(), aria()];
        let cards = gallery_cards(&characters);
        assert!((cards[2].reveal_delay() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn from_option() {
        assert_eq!(Selection::from(None), Selection::Empty);
        assert!(Selection::from(Some(aria())).is_open());
    }

    mod logging {
        use std::fmt;
        use std::sync::{Arc, Mutex};

        use tracing::field::{Field, Visit};
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        use super::*;

        type Recorded = Arc<Mutex<Vec<(Level, String)>>>;

        struct Recorder(Recorded);

        struct MessageVisitor<'a>(&'a mut String);

        impl Visit for MessageVisitor<'_> {
            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                if field.name() == "message" {
                    *self.0 = format!("{value:?}");
                }
            }
        }

        impl<S: Subscriber> Layer<S> for Recorder {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut message = String::new();
                event.record(&mut MessageVisitor(&mut message));
                self.0
                    .lock()
                    .unwrap()
                    .push((*event.metadata().level(), message));
            }
        }

        #[test]
        fn selection_changes_log_once_at_debug() {
            let recorded: Recorded = Arc::default();
            let subscriber = tracing_subscriber::registry().with(Recorder(recorded.clone()));

            tracing::subscriber::with_default(subscriber, || {
                let mut selection = Selection::default();
                selection.select(aria());
                selection.hit(OverlayHit::Content);
                selection.hit(OverlayHit::Backdrop);
                selection.dismiss();
            });

            let events = recorded.lock().unwrap().clone();
            assert_eq!(
                events,
                vec![
                    (Level::DEBUG, "character selected".to_string()),
                    (Level::DEBUG, "character dismissed".to_string()),
                ]
            );
        }
    }
}
