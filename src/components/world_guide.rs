//! World Guide Component
//!
//! The lore section: one titled panel per WorldLore entry, each decorated
//! with a cycling icon and a large faded watermark of the same icon.

use dioxus::prelude::*;
use velcross_core::{lore_panels, LoreGlyph, WorldLore};
use velcross_ui::{Icon, LucideIcon, SectionHeading};

fn glyph_icon(glyph: LoreGlyph) -> Icon {
    match glyph {
        LoreGlyph::Scroll => Icon::Scroll,
        LoreGlyph::Sword => Icon::Sword,
        LoreGlyph::Sparkles => Icon::Sparkles,
    }
}

/// Lore guide.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WorldGuide { entries: catalogue.world_lore }
/// }
/// ```
#[component]
pub fn WorldGuide(entries: &'static [WorldLore]) -> Element {
    let panels = lore_panels(entries);

    rsx! {
        div { class: "container",
            SectionHeading { title: "The Worldview".to_string() }

            div { class: "lore-grid",
                for panel in panels {
                    div {
                        key: "{panel.index}",
                        class: "lore-panel reveal-up",
                        style: "animation-delay: {panel.reveal_delay()}s;",

                        // Watermark
                        div { class: "lore-watermark",
                            LucideIcon { icon: glyph_icon(panel.glyph), size: 120, stroke_width: 1.0 }
                        }

                        div { class: "lore-body",
                            h3 { class: "lore-title",
                                LucideIcon { icon: glyph_icon(panel.glyph), size: 24, class: "lore-title-icon".to_string() }
                                "{panel.title}"
                            }
                            ul { class: "lore-lines",
                                for (i, line) in panel.lines.iter().enumerate() {
                                    li { key: "{i}", class: "lore-line", "{line}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_map_to_distinct_icons() {
        let icons: Vec<_> = LoreGlyph::CYCLE.iter().map(|g| glyph_icon(*g)).collect();
        assert_eq!(icons, vec![Icon::Scroll, Icon::Sword, Icon::Sparkles]);
    }
}
