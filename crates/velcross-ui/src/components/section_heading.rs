//! Section Heading Component
//!
//! Centred display-font title with either a subtitle or a short amber rule.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    pub title: String,
    /// Italic line under the title. Without one, a rule is drawn instead.
    #[props(default)]
    pub subtitle: Option<String>,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { class: "section-title", "{props.title}" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            } else {
                div { class: "section-rule" }
            }
        }
    }
}
