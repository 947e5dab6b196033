//! World lore entries shown in the lore guide.

use serde::Serialize;

/// A titled panel of lore lines, rendered as a labelled list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldLore {
    pub title: String,
    pub content: Vec<String>,
}

impl WorldLore {
    pub fn new(title: impl Into<String>, content: &[&str]) -> Self {
        Self {
            title: title.into(),
            content: content.iter().map(|line| line.to_string()).collect(),
        }
    }
}
