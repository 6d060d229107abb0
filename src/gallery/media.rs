use std::sync::LazyLock;

use regex::Regex;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const EMBED_NONE: &str = "none";
const VIDEO_ID_LEN: usize = 11;

/// Permissions granted to embedded players. Fullscreen goes through `allowfullscreen`.
pub const EMBED_ALLOW: &str = "autoplay; clipboard-write; picture-in-picture; fullscreen";

/// Sandbox for embedded players: enough to run the player and open it on the
/// video site, nothing more.
pub const EMBED_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-presentation allow-popups";

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("video id pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    VideoEmbed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
    pub title: Option<String>,
}

impl MediaItem {
    pub fn image(url: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
            title: title.map(str::to_string),
        }
    }

    pub fn video(url: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            kind: MediaKind::VideoEmbed,
            url: url.into(),
            title: title.map(str::to_string),
        }
    }

    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    /// The source attribute to render: the raw url for images, the derived
    /// embed url for videos.
    pub fn src(&self) -> String {
        match self.kind {
            MediaKind::Image => self.url.clone(),
            MediaKind::VideoEmbed => embed_src(&self.url),
        }
    }
}

/// Pulls the 11 character video id out of a share, watch or embed url.
pub fn extract_video_id(url: &str) -> Option<String> {
    let caps = VIDEO_ID_RE.captures(url)?;
    let id = caps.get(1)?.as_str();
    if id.chars().count() == VIDEO_ID_LEN {
        Some(id.to_string())
    } else {
        None
    }
}

/// Embed url for a video page. An unrecognised url yields a `none` id and the
/// player shows its own error.
pub fn embed_src(url: &str) -> String {
    let id = extract_video_id(url).unwrap_or_else(|| {
        log::warn!("couldn't extract a video id from {url}");
        EMBED_NONE.to_string()
    });
    format!("{EMBED_BASE}{id}")
}
