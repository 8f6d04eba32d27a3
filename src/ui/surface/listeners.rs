use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::Surface;

/// Registration handle in a surface's key listener registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub(super) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, KeyCode)>,
}

impl ListenerRegistry {
    pub(super) fn add(&mut self, code: KeyCode) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, code));
        id
    }

    pub(super) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn matching(&self, code: KeyCode) -> Vec<ListenerId> {
        self.entries
            .iter()
            .filter(|(_, listened)| *listened == code)
            .map(|(id, _)| *id)
            .collect()
    }
}

/// A live key subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct KeySubscription {
    id: ListenerId,
    code: KeyCode,
    surface: Surface,
}

impl KeySubscription {
    pub(super) fn new(id: ListenerId, code: KeyCode, surface: Surface) -> Self {
        Self { id, code, surface }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn key(&self) -> KeyCode {
        self.code
    }

    /// Whether the surface would deliver this key press to the subscriber.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.kind == KeyEventKind::Press && self.surface.listeners_for(event.code).contains(&self.id)
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.surface.unsubscribe(self.id);
    }
}
