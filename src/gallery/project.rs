use super::media::{MediaItem, MediaKind};

pub const PLACEHOLDER_IMAGE: &str = "/img/placeholder.svg";

/// Position of a project in the catalog. Stable for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectKey(pub usize);

/// One block of the modal body. Sections without data are never produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySection {
    Description(String),
    Demo(String),
    Technologies(Vec<String>),
    Code(String),
}

impl BodySection {
    /// Heading drawn above the section. The demo link sits on its own.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::Description(_) => Some("About this project"),
            Self::Demo(_) => None,
            Self::Technologies(_) => Some("Technologies Used"),
            Self::Code(_) => Some("Code"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub key: ProjectKey,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub media: Option<Vec<MediaItem>>,
}

impl Project {
    pub fn key(&self) -> ProjectKey {
        self.key
    }

    pub fn media(&self) -> &[MediaItem] {
        self.media.as_deref().unwrap_or_default()
    }

    pub fn technologies(&self) -> &[String] {
        self.technologies.as_deref().unwrap_or_default()
    }

    /// Only cards with something to cycle through react to hover.
    pub fn cycles_on_hover(&self) -> bool {
        self.media().len() > 1
    }

    /// Modal body text: long description, else the card summary.
    pub fn body_text(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }

    /// Resting card image: the thumbnail, else the placeholder.
    pub fn thumbnail(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Image a card shows right now. `hover_index` is the card's cycle index
    /// while it is hovered and `None` otherwise. Only image items are shown
    /// from the cycle; videos fall back to the thumbnail.
    pub fn card_image(&self, hover_index: Option<usize>) -> &str {
        hover_index
            .filter(|_| self.cycles_on_hover())
            .and_then(|i| self.media().get(i))
            .filter(|item| item.is_image())
            .map(|item| item.url.as_str())
            .unwrap_or_else(|| self.thumbnail())
    }

    /// Alt text or frame title for the media item at `index`. Untitled images
    /// are numbered screenshots; untitled videos take the project title.
    pub fn media_label(&self, index: usize) -> String {
        match self.media().get(index) {
            Some(MediaItem {
                title: Some(title), ..
            }) => title.clone(),
            Some(MediaItem {
                kind: MediaKind::VideoEmbed,
                ..
            }) => self.title.clone(),
            _ => format!("Screenshot {} of {}", index + 1, self.title),
        }
    }

    /// Modal body in display order.
    pub fn body_sections(&self) -> Vec<BodySection> {
        let mut sections = vec![BodySection::Description(self.body_text().to_string())];
        if let Some(url) = &self.demo_url {
            sections.push(BodySection::Demo(url.clone()));
        }
        if !self.technologies().is_empty() {
            sections.push(BodySection::Technologies(self.technologies().to_vec()));
        }
        if let Some(url) = &self.github_url {
            sections.push(BodySection::Code(url.clone()));
        }
        sections
    }
}
