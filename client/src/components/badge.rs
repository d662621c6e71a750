//! Small colored technology label.

use leptos::prelude::*;

/// A colored label naming one technology.
#[component]
pub fn Badge(
    /// Background color utility class(es), e.g. `bg-blue-300`.
    bg_color: &'static str,
    #[prop(optional_no_strip)] text_color: Option<&'static str>,
    label: &'static str,
) -> impl IntoView {
    view! { <div class=badge_class(bg_color, text_color)>{label}</div> }
}

/// Class list for a badge. The text color is appended only when present.
pub(crate) fn badge_class(bg_color: &str, text_color: Option<&str>) -> String {
    match text_color {
        Some(text_color) => format!("max-w-min px-2 {bg_color} rounded-md {text_color}"),
        None => format!("max-w-min px-2 {bg_color} rounded-md"),
    }
}

#[cfg(test)]
#[path = "badge_test.rs"]
mod tests;
