/// Index after `i` in a circular sequence of `len` items.
pub fn next_index(i: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (i + 1) % len
    }
}

/// Index before `i` in a circular sequence of `len` items.
pub fn previous_index(i: usize, len: usize) -> usize {
    match (i, len) {
        (_, 0) => 0,
        (0, len) => len - 1,
        (i, _) => i - 1,
    }
}

/// Position within a project's media. Moves always wrap, never clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prev/next/dot controls are only worth drawing with two or more items.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        self.index = next_index(self.index, self.len);
    }

    pub fn previous(&mut self) {
        self.index = previous_index(self.index, self.len);
    }

    /// Out of range indices are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_moves() {
        assert_eq!(previous_index(0, 4), 3);
        assert_eq!(next_index(3, 4), 0);
        for i in 1..3 {
            assert_eq!(next_index(i, 4), i + 1);
            assert_eq!(previous_index(i, 4), i - 1);
        }
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn test_three_image_walk() {
        let mut c = Carousel::new(3);
        assert_eq!(c.index(), 0);
        c.next();
        assert_eq!(c.index(), 1);
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_jump_and_reset() {
        let mut c = Carousel::new(3);
        c.jump(2);
        assert_eq!(c.index(), 2);
        c.jump(3);
        assert_eq!(c.index(), 2);
        c.reset(5);
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn test_controls_need_two_items() {
        assert!(!Carousel::new(0).has_controls());
        assert!(!Carousel::new(1).has_controls());
        assert!(Carousel::new(2).has_controls());
        let mut single = Carousel::new(1);
        single.next();
        single.previous();
        assert_eq!(single.index(), 0);
    }
}
