//! Page sections and navigation state.
//!
//! The active section is tracked optimistically: it changes the moment a nav
//! control is activated and is never reconciled against the scroll position.

use std::fmt;

/// Anchor-addressable section of the page, in document order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Section {
    #[default]
    Hero,
    World,
    Characters,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Hero, Section::World, Section::Characters];

    /// Element id of the section in the rendered document
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::World => "world",
            Section::Characters => "characters",
        }
    }

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Hero => "Main",
            Section::World => "World",
            Section::Characters => "Characters",
        }
    }

    /// Script that smooth-scrolls this section into view.
    pub fn scroll_script(&self) -> String {
        format!(
            "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
            self.anchor_id()
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

/// Compact (narrow viewport) menu panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// State owned by the page shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NavState {
    pub current: Section,
    pub menu: MenuState,
}

impl NavState {
    /// Mark a section current and close the compact menu.
    ///
    /// Scrolling is the caller's job; this only records the intent.
    pub fn activate(&mut self, section: Section) {
        tracing::debug!(section = %section, "section activated");
        self.current = section;
        self.menu = MenuState::Closed;
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
        tracing::debug!(open = self.menu.is_open(), "menu toggled");
    }

    pub fn is_current(&self, section: Section) -> bool {
        self.current == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_and_scroll_targets() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor_id()).collect();
        assert_eq!(anchors, vec!["hero", "world", "characters"]);
        assert_eq!(Section::World.to_string(), "world");
        assert!(Section::Characters
            .scroll_script()
            .contains("getElementById('characters')"));
    }

    #[test]
    fn labels() {
        assert_eq!(Section::Hero.display_name(), "Main");
        assert_eq!(Section::World.display_name(), "World");
        assert_eq!(Section::Characters.display_name(), "Characters");
    }

    #[test]
    fn starts_on_hero_with_menu_closed() {
        let nav = NavState::default();
        assert!(nav.is_current(Section::Hero));
        assert!(!nav.menu.is_open());
    }

    #[test]
    fn activation_is_optimistic_and_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu.is_open());

        nav.activate(Section::Characters);
        assert!(nav.is_current(Section::Characters));
        assert_eq!(nav.menu, MenuState::Closed);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.toggle_menu();
        assert_eq!(nav.menu, MenuState::Closed);
    }

    #[test]
    fn scroll_script_targets_anchor() {
        let script = Section::World.scroll_script();
        assert!(script.contains("getElementById('world')"));
        assert!(script.contains("behavior: 'smooth'"));
    }
}
