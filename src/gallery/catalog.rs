use std::sync::LazyLock;

use super::media::MediaItem;
use super::project::{Project, ProjectKey};

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    entries()
        .into_iter()
        .enumerate()
        .map(|(i, e)| e.into_project(ProjectKey(i)))
        .collect()
});

struct Entry {
    title: &'static str,
    description: &'static str,
    long_description: Option<&'static str>,
    image_url: Option<&'static str>,
    demo_url: Option<&'static str>,
    github_url: Option<&'static str>,
    technologies: &'static [&'static str],
    media: Vec<MediaItem>,
}

impl Entry {
    fn into_project(self, key: ProjectKey) -> Project {
        let owned = |s: Option<&str>| s.map(str::to_string);
        Project {
            key,
            title: self.title.to_string(),
            description: self.description.to_string(),
            long_description: owned(self.long_description),
            image_url: owned(self.image_url),
            demo_url: owned(self.demo_url),
            github_url: owned(self.github_url),
            technologies: (!self.technologies.is_empty())
                .then(|| self.technologies.iter().map(|s| s.to_string()).collect()),
            media: (!self.media.is_empty()).then_some(self.media),
        }
    }
}

fn entries() -> Vec<Entry> {
    vec![
        Entry {
            title: "Trailhead",
            description: "Offline-first hiking planner with elevation profiles.",
            long_description: Some(
                "Trailhead plans multi-day hikes without a signal. Routes, elevation profiles and \
                 water sources are cached on device and synced when a connection comes back. \
                 The map renderer draws vector tiles straight to a canvas.",
            ),
            image_url: Some("/img/projects/trailhead/cover.webp"),
            demo_url: Some("https://trailhead.example.dev"),
            github_url: Some("https://github.com/portfolio-dev/trailhead"),
            technologies: &["Rust", "WebAssembly", "Leptos", "IndexedDB"],
            media: vec![
                MediaItem::image("/img/projects/trailhead/cover.webp", Some("Trip overview")),
                MediaItem::image("/img/projects/trailhead/profile.webp", Some("Elevation profile")),
                MediaItem::image("/img/projects/trailhead/map.webp", Some("Offline map")),
                MediaItem::video("https://youtu.be/dQw4w9WgXcQ", Some("Trailhead walkthrough")),
            ],
        },
        Entry {
            title: "Ledgerline",
            description: "Double-entry bookkeeping for freelancers.",
            long_description: None,
            image_url: Some("/img/projects/ledgerline/cover.webp"),
            demo_url: None,
            github_url: Some("https://github.com/portfolio-dev/ledgerline"),
            technologies: &["Rust", "Axum", "PostgreSQL", "HTMX"],
            media: vec![
                MediaItem::image("/img/projects/ledgerline/cover.webp", Some("Dashboard")),
                MediaItem::image("/img/projects/ledgerline/invoice.webp", Some("Invoice editor")),
            ],
        },
        Entry {
            title: "Pixel Forge",
            description: "A tiny sprite editor that runs in the browser.",
            long_description: Some(
                "Layers, onion skinning and palette swaps in under 200 KB of WASM. \
                 Exports sprite sheets with a JSON atlas.",
            ),
            image_url: Some("/img/projects/pixel-forge/cover.webp"),
            demo_url: Some("https://pixel-forge.example.dev"),
            github_url: None,
            technologies: &["Rust", "WebAssembly", "Canvas"],
            media: vec![MediaItem::video(
                "https://www.youtube.com/watch?v=aqz-KE-bpKQ",
                Some("Pixel Forge demo"),
            )],
        },
        Entry {
            title: "Quiet Hours",
            description: "Notification scheduler that respects focus time.",
            long_description: None,
            image_url: None,
            demo_url: None,
            github_url: None,
            technologies: &[],
            media: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_position() {
        for (i, p) in PROJECTS.iter().enumerate() {
            assert_eq!(p.key(), ProjectKey(i));
        }
    }

    #[test]
    fn test_catalog_urls_are_non_empty() {
        for p in PROJECTS.iter() {
            assert!(!p.title.is_empty());
            for item in p.media() {
                assert!(!item.url.is_empty(), "{} has an empty media url", p.title);
            }
        }
    }

    #[test]
    fn test_empty_lists_become_none() {
        let quiet = PROJECTS
            .iter()
            .find(|p| p.title == "Quiet Hours")
            .expect("Quiet Hours should be in the catalog");
        assert!(quiet.media.is_none());
        assert!(quiet.technologies.is_none());
    }
}
