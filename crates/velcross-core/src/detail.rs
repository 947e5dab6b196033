//! Detail overlay view model.
//!
//! A [`DetailView`] only exists while a character is selected, so the closed
//! overlay never builds profile fields or chart geometry.

use crate::gallery::Selection;
use crate::radar::RadarChart;
use crate::types::{Character, ColorTheme};

/// One label/value cell of the profile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: String,
    /// Long-form values take a whole grid row
    pub full_width: bool,
}

impl ProfileField {
    fn cell(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            full_width: false,
        }
    }

    fn wide(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            full_width: true,
        }
    }
}

/// Everything the open overlay renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub theme: ColorTheme,
    pub description: String,
    pub profile: Vec<ProfileField>,
    /// Every trait, unlike the gallery card
    pub traits: Vec<String>,
    pub chart: RadarChart,
}

impl DetailView {
    pub fn new(character: &Character) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            role: character.role.clone(),
            theme: character.color_theme,
            description: character.description.clone(),
            profile: vec![
                ProfileField::cell("Age", &character.age),
                ProfileField::cell("Gender", &character.gender),
                ProfileField::cell("Height", &character.height),
                ProfileField::cell("MBTI", &character.mbti),
                ProfileField::cell("Enneagram", &character.enneagram),
                ProfileField::wide("Appearance", &character.appearance),
            ],
            traits: character.traits.clone(),
            chart: RadarChart::from_stats(&character.stats),
        }
    }

    /// `None` whenever nothing is selected.
    pub fn for_selection(selection: &Selection) -> Option<Self> {
        selection.current().map(DetailView::new)
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.profile
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}
