//! Header row pairing an emoji icon with a line of text.

use leptos::prelude::*;

/// One bio line: icon image followed by text.
#[component]
pub fn BioLine(text: &'static str, emoji: &'static str, emoji_alt: &'static str) -> impl IntoView {
    view! {
        <div class="text-gray-600 dark:text-gray-300 flex flex-row items-center my-1">
            <div class="flex items-center justify-items-center sm:flex-row mx-2">
                <img class="ml-1 mr-1 inline-flex w-4 h-4" src=emoji_src(emoji) alt=emoji_alt/>
            </div>
            <span>{text}</span>
        </div>
    }
}

/// Asset path of an emoji icon.
pub(crate) fn emoji_src(emoji: &str) -> String {
    format!("/emojis/{emoji}.png")
}

#[cfg(test)]
#[path = "bio_line_test.rs"]
mod tests;
