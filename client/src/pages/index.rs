//! Portfolio landing page: profile header plus the latest projects.

use leptos::prelude::*;

use crate::components::{badge::Badge, bio_line::BioLine, project_card::ProjectCard};
use crate::content::{PROFILE, PROJECTS};

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 min-h-screen">
            <ProfileHeader/>
            <main class="px-4 sm:px-8">
                <section class="mt-12">
                    <h1 class="text-4xl font-bold">"Latest projects"</h1>
                    <div class="flex flex-col sm:justify-between mt-6 gap-4 sm:flex-row sm:flex-wrap">
                        {PROJECTS
                            .iter()
                            .map(|project| {
                                view! {
                                    <ProjectCard
                                        title=project.title
                                        subtitle=project.subtitle
                                        date=project.date
                                        description=project.description
                                        image_src=project.image_src
                                        links=project.links
                                    >
                                        {project
                                            .badges
                                            .iter()
                                            .map(|badge| {
                                                view! {
                                                    <Badge
                                                        bg_color=badge.bg_color
                                                        text_color=badge.text_color
                                                        label=badge.label
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </ProjectCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>
        </div>
    }
}

#[component]
fn ProfileHeader() -> impl IntoView {
    view! {
        <header class="flex flex-col items-center p-2 pt-5">
            <img
                class="inline-flex mx-auto h-48 w-48 rounded-full sm:mx-0 sm:flex-shrink-0"
                src=PROFILE.photo_src
                alt=PROFILE.photo_alt
            />
            <h1 class="py-2 text-xl text-gray-900 dark:text-white font-semibold">{PROFILE.name}</h1>
            <div class="flex flex-col items-start sm:items-center">
                {PROFILE
                    .bio
                    .iter()
                    .map(|entry| view! { <BioLine text=entry.text emoji=entry.emoji emoji_alt=entry.emoji_alt/> })
                    .collect_view()}
                <div>
                    {PROFILE
                        .links
                        .iter()
                        .enumerate()
                        .map(|(index, link)| {
                            view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer" class=profile_link_class(index)>
                                    {link.text}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}

/// Profile links sit on one row; every link but the last gets a right margin.
pub(crate) fn profile_link_class(index: usize) -> &'static str {
    if index + 1 < PROFILE.links.len() {
        "mr-3 text-base text-blue-500 underline hover:text-blue-400 ml-3 sm:ml-0"
    } else {
        "text-base text-blue-500 underline hover:text-blue-400 ml-3 sm:ml-0"
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
