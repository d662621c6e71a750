//! Static page content.
//!
//! DESIGN
//! ======
//! Everything the page shows is a `&'static` literal defined here. Components
//! receive plain string slices, so the page is fully determined at compile
//! time and rendering never fails.

// =============================================================================
// TYPES
// =============================================================================

/// A labeled external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub text: &'static str,
    pub href: &'static str,
}

/// A technology badge. Colors are Tailwind utility classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: &'static str,
    pub bg_color: &'static str,
    pub text_color: Option<&'static str>,
}

/// One header row describing the page owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BioEntry {
    pub text: &'static str,
    /// Icon identifier, resolved to `/emojis/<emoji>.png`.
    pub emoji: &'static str,
    pub emoji_alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
    /// Rendered in this order.
    pub links: &'static [Link],
    pub badges: &'static [BadgeSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub photo_src: &'static str,
    pub photo_alt: &'static str,
    pub bio: &'static [BioEntry],
    pub links: &'static [Link],
}

// =============================================================================
// CONTENT
// =============================================================================

const REACT: BadgeSpec = BadgeSpec { label: "React", bg_color: "bg-blue-300", text_color: None };

pub const PROFILE: Profile = Profile {
    name: "Juan Ignacio Cuiule",
    photo_src: "/profile.jpeg",
    photo_alt: "Github profile picture",
    bio: &[
        BioEntry {
            text: "Web Development at El Gato y La Caja",
            emoji: "man-technologist",
            emoji_alt: "Man with computer emoji",
        },
        BioEntry { text: "Studying Systems Engineering at UTN-FRBA", emoji: "books", emoji_alt: "Books emoji" },
        BioEntry { text: "Buenos Aires, Argentina", emoji: "flag-argentina", emoji_alt: "Argentinian flag emoji" },
    ],
    links: &[
        Link { text: "@juancuiule", href: "https://github.com/juancuiule" },
        Link {
            text: "CV",
            href: "https://docs.google.com/document/d/1lRFN1HLDPrpj0bue4QghytC4UDh3wOvt4g0uvrpST-A/edit#heading=h.tk538brb1kdf",
        },
    ],
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "OCEAN",
        subtitle: "Big 5 Personality Traits",
        date: "Jan 2021",
        description: "What is the Big 5 Test? What did we learn from our experiment? What can we do with this data?",
        image_src: "https://elgatoylacaja.com/images/ocean-opengraph.png",
        links: &[
            Link { text: "Web", href: "https://elgatoylacaja.com/ocean/resultados" },
            Link { text: "Data Analysis", href: "https://github.com/juancuiule/gato-ocean-analysis" },
        ],
        badges: &[
            REACT,
            BadgeSpec { label: "D3.js", bg_color: "bg-yellow-500 bg-opacity-80", text_color: None },
            BadgeSpec { label: "Next", bg_color: "bg-gray-900", text_color: Some("text-white") },
            BadgeSpec { label: "Python", bg_color: "bg-yellow-300", text_color: None },
        ],
    },
    Project {
        title: "Labs by El Gato y La Caja",
        subtitle: "an open science laboratory on the web",
        date: "Mar 2019 - Today",
        description: "More than 10 web experiments related to moral reasoning, personality traits, vaccine \
                      hesitancy/confidence, emotions, capital sins and more.",
        image_src: "https://s3.us-south.cloud-object-storage.appdomain.cloud/production-elgatoylacaja/2018/02/opengraph_labs.png",
        links: &[
            Link { text: "Web", href: "https://elgatoylacaja.com/experimentos" },
            Link { text: "Github Repo", href: "https://github.com/juancuiule/labs-monorepo" },
        ],
        badges: &[REACT, BadgeSpec { label: "TypeScript", bg_color: "bg-blue-600", text_color: Some("text-white") }],
    },
];

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
