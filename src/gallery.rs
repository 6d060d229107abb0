pub mod carousel;
pub mod catalog;
pub mod hover;
pub mod media;
pub mod modal_state;
pub mod project;
pub mod scroll_lock;
pub mod timers;

use std::time::Duration;

pub use carousel::Carousel;
pub use catalog::PROJECTS;
pub use media::{MediaItem, MediaKind};
pub use project::{Project, ProjectKey};

/// Fixed intervals used by the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryTiming {
    /// How often a hovered card advances to its next media item.
    pub cycle_interval: Duration,
    /// How long the selection outlives a close, so the modal can animate out.
    pub close_delay: Duration,
}

impl Default for GalleryTiming {
    fn default() -> Self {
        Self {
            cycle_interval: Duration::from_millis(1000),
            close_delay: Duration::from_millis(300),
        }
    }
}
