//! The page that components render onto.
//!
//! A `Surface` tracks what the last render pass committed: which elements
//! exist, where they are, what role they play and which one holds focus. It
//! also owns the page-wide resources a modal dialog borrows while open, the
//! key listener registry and the scroll lock.
//!
//! # Frame protocol
//!
//! ```text
//! begin_frame() ──→ register(..) during render ──→ commit()
//!                                                    │
//!                                  post-commit tasks run here
//! ```
//!
//! Elements registered during a pass only become visible to lookups, hit
//! testing and focus once `commit()` runs. Tasks queued with
//! [`Surface::after_commit`] run at the end of the next commit, after the
//! new elements are in place.

mod element;
mod listeners;
mod scroll_lock;

pub use element::{Element, ElementId, Role};
pub use listeners::{KeySubscription, ListenerId};
pub use scroll_lock::ScrollLockGuard;

use std::collections::VecDeque;
use std::sync::Arc;

use crossterm::event::KeyCode;
use parking_lot::Mutex;

use listeners::ListenerRegistry;

/// Work deferred until after the next commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCommit {
    /// Move focus to the element, if it was committed and accepts focus.
    Focus(ElementId),
}

#[derive(Debug, Default)]
struct SurfaceInner {
    committed: Vec<Element>,
    pending: Vec<Element>,
    focused: Option<ElementId>,
    post_commit: VecDeque<PostCommit>,
    listeners: ListenerRegistry,
    scroll_locks: usize,
    page_offset: u16,
}

impl SurfaceInner {
    fn committed(&self, id: ElementId) -> Option<&Element> {
        self.committed.iter().find(|element| element.id == id)
    }

    fn try_focus(&mut self, id: ElementId) -> bool {
        match self.committed(id) {
            Some(element) if element.accepts_focus() => {
                self.focused = Some(id);
                true
            }
            _ => false,
        }
    }
}

/// Shared handle to one page. Clones refer to the same page.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a render pass.
    pub fn begin_frame(&self) {
        self.inner.lock().pending.clear();
    }

    /// Register an element for the pass in progress. Later registrations sit on top.
    pub fn register(&self, element: Element) {
        self.inner.lock().pending.push(element);
    }

    /// Finish a render pass.
    ///
    /// Focus is dropped if the focused element was not rendered again; then
    /// queued post-commit tasks run in order. Returns how many tasks ran.
    pub fn commit(&self) -> usize {
        let mut inner = self.inner.lock();
        let pending = std::mem::take(&mut inner.pending);
        inner.committed = pending;

        if let Some(focused) = inner.focused {
            if inner.committed(focused).is_none() {
                tracing::trace!(?focused, "focused element unmounted");
                inner.focused = None;
            }
        }

        let tasks: Vec<PostCommit> = inner.post_commit.drain(..).collect();
        for task in &tasks {
            match *task {
                PostCommit::Focus(id) => {
                    let moved = inner.try_focus(id);
                    tracing::trace!(?id, moved, "post-commit focus");
                }
            }
        }
        tasks.len()
    }

    /// Queue work for the end of the next commit.
    pub fn after_commit(&self, task: PostCommit) {
        self.inner.lock().post_commit.push_back(task);
    }

    pub fn pending_tasks(&self) -> usize {
        self.inner.lock().post_commit.len()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.inner.lock().committed(id).is_some()
    }

    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.inner.lock().committed(id).cloned()
    }

    /// Committed elements, bottom to top.
    pub fn elements(&self) -> Vec<Element> {
        self.inner.lock().committed.clone()
    }

    /// Committed elements with the given role, bottom to top.
    pub fn elements_with_role(&self, role: Role) -> Vec<Element> {
        self.inner
            .lock()
            .committed
            .iter()
            .filter(|element| element.role == role)
            .cloned()
            .collect()
    }

    /// Topmost committed element under the cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ElementId> {
        self.inner
            .lock()
            .committed
            .iter()
            .rev()
            .find(|element| element.contains(column, row))
            .map(|element| element.id)
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.inner.lock().focused
    }

    /// Move focus. Fails, leaving focus untouched, if the element is not
    /// committed or does not accept focus.
    pub fn focus(&self, id: ElementId) -> bool {
        self.inner.lock().try_focus(id)
    }

    pub fn blur(&self) {
        self.inner.lock().focused = None;
    }

    /// Cycle focus through `scope` in order, wrapping at the ends.
    ///
    /// Ids that are not committed or refuse focus are skipped. When focus is
    /// outside the scope it lands on the first (or, reversed, last) candidate.
    pub fn focus_next_within(&self, scope: &[ElementId], reverse: bool) -> Option<ElementId> {
        let mut inner = self.inner.lock();
        let candidates: Vec<ElementId> = scope
            .iter()
            .copied()
            .filter(|id| inner.committed(*id).is_some_and(Element::accepts_focus))
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let current = inner
            .focused
            .and_then(|focused| candidates.iter().position(|id| *id == focused));
        let len = candidates.len();
        let next = match (current, reverse) {
            (None, false) => 0,
            (None, true) => len - 1,
            (Some(index), false) => (index + 1) % len,
            (Some(index), true) => (index + len - 1) % len,
        };

        let target = candidates[next];
        inner.focused = Some(target);
        Some(target)
    }

    /// Listen for presses of `code`.
    pub fn subscribe_key(&self, code: KeyCode) -> KeySubscription {
        let id = self.inner.lock().listeners.add(code);
        tracing::trace!(?id, ?code, "key listener added");
        KeySubscription::new(id, code, self.clone())
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    pub fn listeners_for(&self, code: KeyCode) -> Vec<ListenerId> {
        self.inner.lock().listeners.matching(code)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let removed = self.inner.lock().listeners.remove(id);
        tracing::trace!(?id, removed, "key listener removed");
    }

    /// Suppress page scrolling until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLockGuard {
        self.inner.lock().scroll_locks += 1;
        ScrollLockGuard::new(self.clone())
    }

    fn release_scroll(&self) {
        let mut inner = self.inner.lock();
        inner.scroll_locks = inner.scroll_locks.saturating_sub(1);
    }

    pub fn scroll_locked(&self) -> bool {
        self.inner.lock().scroll_locks > 0
    }

    pub fn scroll_lock_depth(&self) -> usize {
        self.inner.lock().scroll_locks
    }

    /// Scroll the page by `delta` rows. Refused while the scroll lock is held.
    pub fn scroll_page(&self, delta: i32) -> bool {
        let mut inner = self.inner.lock();
        if inner.scroll_locks > 0 {
            return false;
        }
        let offset = (i64::from(inner.page_offset) + i64::from(delta)).clamp(0, i64::from(u16::MAX));
        inner.page_offset = offset as u16;
        true
    }

    pub fn page_offset(&self) -> u16 {
        self.inner.lock().page_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn button(surface: &Surface, rect: Rect) -> ElementId {
        let id = ElementId::new();
        surface.register(Element::new(id, Role::Button, rect).focusable(true));
        id
    }

    #[test]
    fn elements_appear_only_after_commit() {
        let surface = Surface::new();
        surface.begin_frame();
        let id = button(&surface, Rect::new(0, 0, 4, 1));
        assert!(!surface.contains(id));
        surface.commit();
        assert!(surface.contains(id));
    }

    #[test]
    fn focus_is_dropped_when_element_unmounts() {
        let surface = Surface::new();
        surface.begin_frame();
        let id = button(&surface, Rect::new(0, 0, 4, 1));
        surface.commit();
        assert!(surface.focus(id));

        surface.begin_frame();
        surface.commit();
        assert_eq!(surface.focused(), None);
        assert!(!surface.focus(id));
    }

    #[test]
    fn post_commit_focus_sees_new_elements() {
        let surface = Surface::new();
        let id = ElementId::new();
        surface.after_commit(PostCommit::Focus(id));

        surface.begin_frame();
        surface.register(Element::new(id, Role::Dialog, Rect::new(0, 0, 10, 5)).focusable(true));
        assert_eq!(surface.commit(), 1);
        assert_eq!(surface.focused(), Some(id));
        assert_eq!(surface.pending_tasks(), 0);
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let surface = Surface::new();
        surface.begin_frame();
        let below = button(&surface, Rect::new(0, 0, 10, 10));
        let above = button(&surface, Rect::new(2, 2, 2, 2));
        surface.commit();
        assert_eq!(surface.hit_test(3, 3), Some(above));
        assert_eq!(surface.hit_test(0, 0), Some(below));
        assert_eq!(surface.hit_test(20, 20), None);
    }

    #[test]
    fn focus_cycles_within_scope() {
        let surface = Surface::new();
        surface.begin_frame();
        let a = button(&surface, Rect::new(0, 0, 1, 1));
        let b = button(&surface, Rect::new(1, 0, 1, 1));
        let outside = button(&surface, Rect::new(2, 0, 1, 1));
        surface.commit();
        surface.focus(outside);

        let scope = [a, b];
        assert_eq!(surface.focus_next_within(&scope, false), Some(a));
        assert_eq!(surface.focus_next_within(&scope, false), Some(b));
        assert_eq!(surface.focus_next_within(&scope, false), Some(a));
        assert_eq!(surface.focus_next_within(&scope, true), Some(b));
    }

    #[test]
    fn scroll_lock_is_reference_counted() {
        let surface = Surface::new();
        let first = surface.lock_scroll();
        let second = surface.lock_scroll();
        assert!(!surface.scroll_page(1));
        drop(first);
        assert!(surface.scroll_locked());
        drop(second);
        assert!(!surface.scroll_locked());
        assert!(surface.scroll_page(3));
        assert!(surface.scroll_page(-5));
        assert_eq!(surface.page_offset(), 0);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let surface = Surface::new();
        let subscription = surface.subscribe_key(KeyCode::Esc);
        assert_eq!(surface.listeners_for(KeyCode::Esc), vec![subscription.id()]);
        drop(subscription);
        assert_eq!(surface.listener_count(), 0);
    }
}
