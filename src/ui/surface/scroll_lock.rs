use super::Surface;

/// Holds the page scroll lock. The page scrolls again once every guard is dropped.
#[derive(Debug)]
pub struct ScrollLockGuard {
    surface: Surface,
}

impl ScrollLockGuard {
    pub(super) fn new(surface: Surface) -> Self {
        Self { surface }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.surface.release_scroll();
    }
}
