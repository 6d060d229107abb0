use std::collections::HashMap;

use super::carousel::next_index;
use super::project::ProjectKey;

/// Hover state for the card grid: which card the pointer is over and how far
/// each card has cycled through its media.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverCycles {
    hovered: Option<ProjectKey>,
    indices: HashMap<ProjectKey, usize>,
}

impl HoverCycles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` hovered. Returns true if the card has enough media to cycle,
    /// meaning the caller should start its timer.
    pub fn enter(&mut self, key: ProjectKey, media_len: usize) -> bool {
        self.hovered = Some(key);
        media_len > 1
    }

    pub fn tick(&mut self, key: ProjectKey, media_len: usize) {
        let i = self.indices.entry(key).or_default();
        *i = next_index(*i, media_len);
    }

    pub fn leave(&mut self, key: ProjectKey) {
        if self.hovered == Some(key) {
            self.hovered = None;
        }
        self.indices.remove(&key);
    }

    pub fn hovered(&self) -> Option<ProjectKey> {
        self.hovered
    }

    pub fn index(&self, key: ProjectKey) -> usize {
        self.indices.get(&key).copied().unwrap_or(0)
    }

    /// The card's cycle index, only while it is the hovered card.
    pub fn hover_index(&self, key: ProjectKey) -> Option<usize> {
        (self.hovered == Some(key)).then(|| self.index(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order_and_reset() {
        let key = ProjectKey(0);
        let mut hc = HoverCycles::new();
        assert!(hc.enter(key, 3));

        let mut seen = vec![hc.index(key)];
        for _ in 0..4 {
            hc.tick(key, 3);
            seen.push(hc.index(key));
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
        assert_eq!(hc.hover_index(key), Some(1));

        hc.leave(key);
        assert_eq!(hc.index(key), 0);
        assert_eq!(hc.hover_index(key), None);
        assert_eq!(hc.hovered(), None);
    }

    #[test]
    fn test_short_media_never_cycles() {
        let mut hc = HoverCycles::new();
        assert!(!hc.enter(ProjectKey(1), 1));
        assert!(!hc.enter(ProjectKey(2), 0));
        assert_eq!(hc.hover_index(ProjectKey(2)), Some(0));
    }

    #[test]
    fn test_leave_of_stale_card_keeps_current_hover() {
        let (a, b) = (ProjectKey(0), ProjectKey(1));
        let mut hc = HoverCycles::new();
        hc.enter(a, 2);
        hc.tick(a, 2);
        hc.enter(b, 2);
        hc.leave(a);
        assert_eq!(hc.hovered(), Some(b));
        assert_eq!(hc.index(a), 0);
    }
}
