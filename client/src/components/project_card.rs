//! Project card with heading, description, links, tech badges, and preview.
//!
//! DESIGN
//! ======
//! Badges arrive as child markup so the card stays agnostic of how a badge
//! looks. Links are rendered in the order given.

use leptos::prelude::*;

use crate::content::Link;

const LINK_CLASS: &str = "text-base text-blue-500 underline hover:text-blue-400";

/// A card describing one project.
#[component]
pub fn ProjectCard(
    title: &'static str,
    subtitle: &'static str,
    date: &'static str,
    description: &'static str,
    image_src: &'static str,
    links: &'static [Link],
    /// Badge row content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="w-full sm:w-full lg:flex-1 lg:w-5/12 bg-white shadow-md px-4 py-4 m-0 border-solid border-2 border-opacity-30 rounded-md border-gray-200 flex flex-col-reverse sm:flex-row">
            <div class="sm:w-4/5 pr-1 flex flex-col">
                <h3 class="font-semibold">
                    {title}
                    " "
                    <span class="font-normal text-gray-500">{heading_suffix(subtitle, date)}</span>
                </h3>
                <p class="my-1">{description}</p>
                <div class="my-1">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <a target="_blank" rel="noopener noreferrer" class=LINK_CLASS href=link.href>
                                    {link.text}
                                </a>
                                " "
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-auto">
                    <p>"Tech stack:"</p>
                    <div class="flex flex-row gap-2 mt-2">{children()}</div>
                </div>
            </div>
            <div class="sm:w-1/5 pb-5 sm:pb-0 flex items-start justify-center">
                <img class="w-full h-auto max-w-xs" src=image_src alt=title/>
            </div>
        </div>
    }
}

/// Text shown after the title: `- <subtitle> (<date>)`.
pub(crate) fn heading_suffix(subtitle: &str, date: &str) -> String {
    format!("- {subtitle} ({date})")
}

#[cfg(test)]
#[path = "project_card_test.rs"]
mod tests;
