//! Lucide Icon Set
//!
//! The handful of Lucide icons the site uses, drawn as inline SVG so the
//! desktop build needs no icon font.

use dioxus::prelude::*;

/// One SVG primitive of an icon (24×24 grid).
#[derive(Clone, Copy, PartialEq, Debug)]
enum Shape {
    Path(&'static str),
    Circle { cx: u8, cy: u8, r: u8 },
}

/// Icons available to the site
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Activity,
    BookOpen,
    ChevronDown,
    Heart,
    Map,
    Menu,
    Scroll,
    Sparkles,
    Star,
    Sword,
    User,
    Users,
    X,
}

impl Icon {
    fn shapes(&self) -> &'static [Shape] {
        match self {
            Icon::Activity => &[Shape::Path("M22 12h-4l-3 9L9 3l-3 9H2")],
            Icon::BookOpen => &[
                Shape::Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Shape::Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            Icon::ChevronDown => &[Shape::Path("m6 9 6 6 6-6")],
            Icon::Heart => &[Shape::Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            Icon::Map => &[
                Shape::Path(
                    "M14.106 5.553a2 2 0 0 0 1.788 0l3.659-1.83A1 1 0 0 1 21 4.619v12.764a1 1 0 0 1-.553.894l-4.553 2.277a2 2 0 0 1-1.788 0l-4.212-2.106a2 2 0 0 0-1.788 0l-3.659 1.83A1 1 0 0 1 3 19.381V6.618a1 1 0 0 1 .553-.894l4.553-2.277a2 2 0 0 1 1.788 0z",
                ),
                Shape::Path("M15 5.764v15"),
                Shape::Path("M9 3.236v15"),
            ],
            Icon::Menu => &[
                Shape::Path("M4 12h16"),
                Shape::Path("M4 6h16"),
                Shape::Path("M4 18h16"),
            ],
            Icon::Scroll => &[
                Shape::Path("M19 17V5a2 2 0 0 0-2-2H4"),
                Shape::Path(
                    "M8 21h12a2 2 0 0 0 2-2v-1a1 1 0 0 0-1-1H11a1 1 0 0 0-1 1v1a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v2a1 1 0 0 0 1 1h3",
                ),
            ],
            Icon::Sparkles => &[
                Shape::Path(
                    "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                ),
                Shape::Path("M20 3v4"),
                Shape::Path("M22 5h-4"),
                Shape::Path("M4 17v2"),
                Shape::Path("M5 18H3"),
            ],
            Icon::Star => &[Shape::Path(
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            )],
            Icon::Sword => &[
                Shape::Path("M14.5 17.5 3 6V3h3l11.5 11.5"),
                Shape::Path("m13 19 6-6"),
                Shape::Path("m16 16 4 4"),
                Shape::Path("m19 21 2-2"),
            ],
            Icon::User => &[
                Shape::Circle { cx: 12, cy: 8, r: 5 },
                Shape::Path("M20 21a8 8 0 0 0-16 0"),
            ],
            Icon::Users => &[
                Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: 9, cy: 7, r: 4 },
                Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::X => &[Shape::Path("M18 6 6 18"), Shape::Path("m6 6 12 12")],
        }
    }

    /// Kebab-case Lucide name, used as a CSS hook
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Activity => "activity",
            Icon::BookOpen => "book-open",
            Icon::ChevronDown => "chevron-down",
            Icon::Heart => "heart",
            Icon::Map => "map",
            Icon::Menu => "menu",
            Icon::Scroll => "scroll",
            Icon::Sparkles => "sparkles",
            Icon::Star => "star",
            Icon::Sword => "sword",
            Icon::User => "user",
            Icon::Users => "users",
            Icon::X => "x",
        }
    }
}

/// Properties for the LucideIcon component
#[derive(Clone, PartialEq, Props)]
pub struct LucideIconProps {
    pub icon: Icon,
    /// Rendered width and height in pixels
    #[props(default = 24)]
    pub size: u32,
    #[props(default = 2.0)]
    pub stroke_width: f32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Inline SVG Lucide icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LucideIcon { icon: Icon::Scroll, size: 120, stroke_width: 1.0 }
/// }
/// ```
#[component]
pub fn LucideIcon(props: LucideIconProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) => format!("lucide lucide-{} {}", props.icon.name(), extra),
        None => format!("lucide lucide-{}", props.icon.name()),
    };

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{props.stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in props.icon.shapes().iter() {
                {match *shape {
                    Shape::Path(d) => rsx! { path { d: "{d}" } },
                    Shape::Circle { cx, cy, r } => rsx! {
                        circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_shapes() {
        let all = [
            Icon::Activity,
            Icon::BookOpen,
            Icon::ChevronDown,
            Icon::Heart,
            Icon::Map,
            Icon::Menu,
            Icon::Scroll,
            Icon::Sparkles,
            Icon::Star,
            Icon::Sword,
            Icon::User,
            Icon::Users,
            Icon::X,
        ];
        for icon in all {
            assert!(!icon.shapes().is_empty(), "{:?} has no shapes", icon);
        }
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(Icon::BookOpen.name(), "book-open");
        assert_eq!(Icon::ChevronDown.name(), "chevron-down");
        assert_eq!(Icon::X.name(), "x");
    }
}
