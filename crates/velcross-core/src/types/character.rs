//! Character records and their personality stats.

use serde::Serialize;

use super::theme::ColorTheme;

/// One axis of a character's radar chart.
///
/// `value` is expected to stay at or below `full_mark`, and every stat of a
/// character should share one `full_mark`. Neither is enforced here; see
/// [`crate::audit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityStat {
    pub subject: String,
    pub value: f64,
    pub full_mark: f64,
}

impl PersonalityStat {
    pub fn new(subject: impl Into<String>, value: f64, full_mark: f64) -> Self {
        Self {
            subject: subject.into(),
            value,
            full_mark,
        }
    }

    /// Radial extent of this stat in `[0, 1]`.
    ///
    /// A non-positive maximum or a non-finite result plots at the centre, and
    /// values above the maximum are pinned to the outer ring.
    pub fn ratio(&self) -> f64 {
        if self.full_mark <= 0.0 {
            return 0.0;
        }
        let ratio = self.value / self.full_mark;
        if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// An immutable character record from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Job or title shown in the role badge
    pub role: String,
    /// Free-form, e.g. `"321 (23)"` for apparent versus real age
    pub age: String,
    pub gender: String,
    pub mbti: String,
    pub enneagram: String,
    pub height: String,
    pub appearance: String,
    pub traits: Vec<String>,
    pub description: String,
    pub stats: Vec<PersonalityStat>,
    pub color_theme: ColorTheme,
}

impl Character {
    /// Start a record with only the identity fields filled in.
    ///
    /// Handy for tests and for building the catalogue field by field.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            age: String::new(),
            gender: String::new(),
            mbti: String::new(),
            enneagram: String::new(),
            height: String::new(),
            appearance: String::new(),
            traits: Vec::new(),
            description: String::new(),
            stats: Vec::new(),
            color_theme: ColorTheme::default(),
        }
    }

    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        self.traits = traits.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_stats(mut self, stats: Vec<PersonalityStat>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.color_theme = theme;
        self
    }
}
