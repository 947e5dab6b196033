//! Property-based tests for the gallery/detail flow
//!
//! Uses proptest to check the selection state machine and the card/detail
//! view models against arbitrary catalogues.

use proptest::prelude::*;
use velcross_core::{
    gallery_cards, Character, ColorTheme, DetailView, OverlayHit, PersonalityStat, Selection,
    TRAIT_PREVIEW_LIMIT,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z ]{0,15}").expect("valid regex")
}

fn theme_strategy() -> impl Strategy<Value = ColorTheme> {
    prop::sample::select(ColorTheme::ALL.to_vec())
}

fn stat_strategy() -> impl Strategy<Value = PersonalityStat> {
    (label_strategy(), 0.0..=100.0f64)
        .prop_map(|(subject, value)| PersonalityStat::new(subject, value, 100.0))
}

fn profile_strategy() -> impl Strategy<Value = [String; 8]> {
    prop::array::uniform8(label_strategy())
}

fn character_strategy() -> impl Strategy<Value = Character> {
    (
        "[a-z]{1,8}",
        label_strategy(),
        profile_strategy(),
        prop::collection::vec(label_strategy(), 0..6),
        prop::collection::vec(stat_strategy(), 0..8),
        theme_strategy(),
    )
        .prop_map(|(id, name, profile, traits, stats, theme)| {
            let [role, age, gender, height, mbti, enneagram, appearance, description] = profile;
            let mut c = Character::named(id, name).with_stats(stats).with_theme(theme);
            c.role = role;
            c.age = age;
            c.gender = gender;
            c.height = height;
            c.mbti = mbti;
            c.enneagram = enneagram;
            c.appearance = appearance;
            c.description = description;
            c.traits = traits;
            c
        })
}

/// Interactions a visitor can perform on the gallery
#[derive(Debug, Clone)]
enum Interaction {
    ClickCard(usize),
    Hit(OverlayHit),
    Dismiss,
}

fn interaction_strategy() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        3 => (0..16usize).prop_map(Interaction::ClickCard),
        1 => Just(Interaction::Hit(OverlayHit::Backdrop)),
        1 => Just(Interaction::Hit(OverlayHit::Content)),
        1 => Just(Interaction::Hit(OverlayHit::CloseControl)),
        1 => Just(Interaction::Dismiss),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// One card per record, in input order
    #[test]
    fn one_card_per_record(characters in prop::collection::vec(character_strategy(), 0..12)) {
        let cards = gallery_cards(&characters);
        prop_assert_eq!(cards.len(), characters.len());
        for (index, (card, character)) in cards.iter().zip(&characters).enumerate() {
            prop_assert_eq!(card.index, index);
            prop_assert_eq!(&card.id, &character.id);
            prop_assert_eq!(&card.name, &character.name);
        }
    }

    /// Cards show every trait up to the limit, then exactly the first two
    #[test]
    fn card_traits_are_a_prefix(character in character_strategy()) {
        let card = gallery_cards(std::slice::from_ref(&character)).remove(0);
        let expected = character.traits.len().min(TRAIT_PREVIEW_LIMIT);
        prop_assert_eq!(card.traits.len(), expected);
        prop_assert_eq!(&card.traits[..], &character.traits[..expected]);

        let detail = DetailView::new(&character);
        prop_assert_eq!(detail.traits, character.traits);
    }

    /// Dismissing always lands on "none", however many selections came first
    #[test]
    fn dismiss_resets(characters in prop::collection::vec(character_strategy(), 1..6)) {
        let mut selection = Selection::default();
        for character in &characters {
            selection.select(character.clone());
        }
        selection.dismiss();
        prop_assert_eq!(&selection, &Selection::Empty);
        selection.dismiss();
        prop_assert_eq!(selection, Selection::Empty);
    }

    /// Last selection wins; nothing accumulates
    #[test]
    fn last_write_wins(first in character_strategy(), second in character_strategy()) {
        let mut selection = Selection::default();
        selection.select(first);
        selection.select(second.clone());
        prop_assert_eq!(selection.current(), Some(&second));
    }

    /// The detail view exists exactly when something is selected, and
    /// always mirrors the selected record
    #[test]
    fn detail_tracks_selection(
        characters in prop::collection::vec(character_strategy(), 1..6),
        interactions in prop::collection::vec(interaction_strategy(), 0..40),
    ) {
        let mut selection = Selection::default();

        for interaction in interactions {
            let before = selection.clone();
            match interaction {
                Interaction::ClickCard(i) => {
                    let character = characters[i % characters.len()].clone();
                    selection.select(character.clone());
                    prop_assert_eq!(selection.current(), Some(&character));
                }
                Interaction::Hit(OverlayHit::Content) => {
                    selection.hit(OverlayHit::Content);
                    prop_assert_eq!(&selection, &before);
                }
                Interaction::Hit(target) => {
                    selection.hit(target);
                    prop_assert_eq!(&selection, &Selection::Empty);
                }
                Interaction::Dismiss => {
                    selection.dismiss();
                    prop_assert_eq!(&selection, &Selection::Empty);
                }
            }

            match (selection.current(), DetailView::for_selection(&selection)) {
                (None, None) => {}
                (Some(character), Some(view)) => {
                    prop_assert_eq!(&view.id, &character.id);
                    prop_assert_eq!(&view.name, &character.name);
                    prop_assert_eq!(&view.role, &character.role);
                    prop_assert_eq!(&view.description, &character.description);
                    prop_assert_eq!(view.theme, character.color_theme);
                    prop_assert_eq!(&view.traits, &character.traits);
                    prop_assert_eq!(view.field("Age"), Some(character.age.as_str()));
                    prop_assert_eq!(view.field("Gender"), Some(character.gender.as_str()));
                    prop_assert_eq!(view.field("Height"), Some(character.height.as_str()));
                    prop_assert_eq!(view.field("MBTI"), Some(character.mbti.as_str()));
                    prop_assert_eq!(view.field("Enneagram"), Some(character.enneagram.as_str()));
                    prop_assert_eq!(view.field("Appearance"), Some(character.appearance.as_str()));
                    prop_assert_eq!(view.chart.axes.len(), character.stats.len());
                    for (axis, stat) in view.chart.axes.iter().zip(&character.stats) {
                        prop_assert_eq!(&axis.subject, &stat.subject);
                    }
                }
                (current, view) => {
                    prop_assert!(false, "selection {:?} but view {:?}", current, view);
                }
            }
        }
    }

    /// Every chart vertex lies within the outer ring
    #[test]
    fn vertices_stay_inside_chart(stats in prop::collection::vec(
        (label_strategy(), -50.0..500.0f64, 0.0..200.0f64)
            .prop_map(|(s, v, m)| PersonalityStat::new(s, v, m)),
        0..10,
    )) {
        let chart = velcross_core::RadarChart::from_stats(&stats);
        for axis in &chart.axes {
            prop_assert!((0.0..=1.0).contains(&axis.ratio));
            let dx = axis.vertex.x - chart.center;
            let dy = axis.vertex.y - chart.center;
            prop_assert!((dx * dx + dy * dy).sqrt() <= chart.radius + 1e-9);
        }
    }
}

/// The worked example: Aria with three traits and a single "Wit" stat
#[test]
fn aria_example() {
    let aria = Character::named("c1", "Aria")
        .with_traits(&["bold", "cunning", "loyal"])
        .with_stats(vec![PersonalityStat::new("Wit", 8.0, 10.0)]);

    let card = gallery_cards(std::slice::from_ref(&aria)).remove(0);
    assert_eq!(card.traits, vec!["bold", "cunning"]);

    let mut selection = Selection::default();
    selection.select(aria);
    let detail = DetailView::for_selection(&selection).expect("overlay open");
    assert_eq!(detail.traits, vec!["bold", "cunning", "loyal"]);
    assert_eq!(detail.chart.axes.len(), 1);
    assert_eq!(detail.chart.axes[0].subject, "Wit");
    assert!((detail.chart.axes[0].ratio - 0.8).abs() < 1e-9);
}
