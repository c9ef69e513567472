use std::cell::Cell;
use std::rc::Rc;

// Vertical scroll state of the card grid.
pub struct ScrollRegion {
    offset: f32,
    max_offset: f32,
    locks: Rc<Cell<u32>>,
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            locks: Rc::new(Cell::new(0)),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_locked(&self) -> bool {
        self.locks.get() > 0
    }

    pub fn locker(&self) -> ScrollLocker {
        ScrollLocker { locks: Rc::clone(&self.locks) }
    }

    // Called whenever the content or viewport size changes.
    pub fn set_extent(&mut self, content_height: f32, viewport_height: f32) {
        self.max_offset = (content_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Applies a scroll delta unless a lock is held. Returns whether the
    /// offset moved.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        if self.is_locked() {
            return false;
        }
        let before = self.offset;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
        self.offset != before
    }
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct ScrollLocker {
    locks: Rc<Cell<u32>>,
}

impl ScrollLocker {
    pub fn acquire(&self) -> ScrollLock {
        self.locks.set(self.locks.get() + 1);
        ScrollLock { locks: Rc::clone(&self.locks) }
    }

    #[cfg(test)]
    pub fn held(&self) -> u32 {
        self.locks.get()
    }
}

// Background scrolling stays disabled for as long as this guard lives.
pub struct ScrollLock {
    locks: Rc<Cell<u32>>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.locks.set(self.locks.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut region = ScrollRegion::new();
        region.set_extent(1000.0, 400.0);
        assert!(region.scroll_by(250.0));
        assert_eq!(region.offset(), 250.0);
        region.scroll_by(10_000.0);
        assert_eq!(region.offset(), 600.0);
        region.scroll_by(-10_000.0);
        assert_eq!(region.offset(), 0.0);
        assert!(!region.scroll_by(-1.0));
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut region = ScrollRegion::new();
        region.set_extent(1000.0, 400.0);
        region.scroll_by(600.0);
        region.set_extent(500.0, 400.0);
        assert_eq!(region.offset(), 100.0);
        region.set_extent(300.0, 400.0);
        assert_eq!(region.offset(), 0.0);
    }

    #[test]
    fn lock_blocks_scrolling_until_dropped() {
        let mut region = ScrollRegion::new();
        region.set_extent(1000.0, 400.0);
        let lock = region.locker().acquire();
        assert!(region.is_locked());
        assert!(!region.scroll_by(100.0));
        assert_eq!(region.offset(), 0.0);

        drop(lock);
        assert!(!region.is_locked());
        assert!(region.scroll_by(100.0));
    }
}
