//! Lore guide view model.

use crate::types::WorldLore;

/// Decorative glyph for a lore panel. Purely cosmetic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoreGlyph {
    Scroll,
    Sword,
    Sparkles,
}

impl LoreGlyph {
    pub const CYCLE: [LoreGlyph; 3] = [LoreGlyph::Scroll, LoreGlyph::Sword, LoreGlyph::Sparkles];

    /// Glyph for the panel at `index`, cycling through [`LoreGlyph::CYCLE`].
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }
}

/// One titled lore panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LorePanel {
    pub index: usize,
    pub title: String,
    pub lines: Vec<String>,
    pub glyph: LoreGlyph,
}

impl LorePanel {
    /// Entrance delay in seconds.
    pub fn reveal_delay(&self) -> f64 {
        self.index as f64 * 0.2
    }
}

pub fn lore_panels(entries: &[WorldLore]) -> Vec<LorePanel> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| LorePanel {
            index,
            title: entry.title.clone(),
            lines: entry.content.clone(),
            glyph: LoreGlyph::for_index(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_cycle_by_position() {
        let glyphs: Vec<_> = (0..7).map(LoreGlyph::for_index).collect();
        assert_eq!(
            glyphs,
            vec![
                LoreGlyph::Scroll,
                LoreGlyph::Sword,
                LoreGlyph::Sparkles,
                LoreGlyph::Scroll,
                LoreGlyph::Sword,
                LoreGlyph::Sparkles,
                LoreGlyph::Scroll,
            ]
        );
    }

    #[test]
    fn panels_keep_entry_and_line_order() {
        let entries = vec![
            WorldLore::new("First", &["a", "b"]),
            WorldLore::new("Second", &["c"]),
        ];
        let panels = lore_panels(&entries);
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].lines, vec!["a", "b"]);
        assert_eq!(panels[1].title, "Second");
        assert_eq!(panels[1].glyph, LoreGlyph::Sword);
        assert!((panels[1].reveal_delay() - 0.2).abs() < 1e-9);
    }
}
