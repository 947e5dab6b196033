use dioxus::prelude::*;
use velcross_core::ProfileField;

/// One label/value cell of the profile grid.
#[component]
pub fn ProfileItem(field: ProfileField) -> Element {
    rsx! {
        div {
            class: if field.full_width { "profile-item profile-item--wide" } else { "profile-item" },
            div { class: "profile-item__label", "{field.label}" }
            div { class: "profile-item__value", "{field.value}" }
        }
    }
}
