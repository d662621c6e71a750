use std::collections::HashSet;

use super::*;

#[test]
fn profile_has_three_bio_lines_in_order() {
    let texts: Vec<_> = PROFILE.bio.iter().map(|entry| entry.text).collect();
    assert_eq!(
        texts,
        ["Web Development at El Gato y La Caja", "Studying Systems Engineering at UTN-FRBA", "Buenos Aires, Argentina"]
    );
}

#[test]
fn profile_links_are_github_then_cv() {
    assert_eq!(PROFILE.links.len(), 2);
    assert_eq!(PROFILE.links[0].text, "@juancuiule");
    assert_eq!(PROFILE.links[1].text, "CV");
}

#[test]
fn projects_are_ocean_then_labs() {
    let titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(titles, ["OCEAN", "Labs by El Gato y La Caja"]);
}

#[test]
fn project_link_hrefs_are_unique_per_project() {
    for project in PROJECTS {
        let hrefs: HashSet<_> = project.links.iter().map(|link| link.href).collect();
        assert_eq!(hrefs.len(), project.links.len(), "duplicate href in {}", project.title);
    }
}

#[test]
fn all_urls_and_labels_are_non_empty() {
    assert!(!PROFILE.photo_src.is_empty());
    for entry in PROFILE.bio {
        assert!(!entry.emoji.is_empty());
        assert!(!entry.emoji_alt.is_empty());
    }
    for link in PROFILE.links.iter().chain(PROJECTS.iter().flat_map(|p| p.links)) {
        assert!(!link.text.is_empty());
        assert!(link.href.starts_with("https://"), "unexpected href {}", link.href);
    }
    for project in PROJECTS {
        assert!(!project.image_src.is_empty());
        assert!(project.badges.iter().all(|badge| !badge.label.is_empty() && !badge.bg_color.is_empty()));
    }
}

#[test]
fn descriptions_have_no_line_breaks_or_runs_of_spaces() {
    for project in PROJECTS {
        assert!(!project.description.contains('\n'), "line break in {}", project.title);
        assert!(!project.description.contains("  "), "double space in {}", project.title);
    }
}
