use ratatui::layout::{Position, Rect};
use uuid::Uuid;

/// Opaque handle to an element on a [`Surface`](super::Surface).
///
/// Holding an id never keeps the element alive; it is only a key for later
/// lookups, which fail quietly once the element stops being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// Accessibility role of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full-area layer behind a modal dialog.
    Backdrop,
    Dialog,
    Button,
    Alert,
    Heading,
    Region,
    TextBox,
    ComboBox,
    Checkbox,
    Radio,
    Group,
}

/// One element committed by a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub role: Role,
    pub rect: Rect,
    pub label: Option<String>,
    pub focusable: bool,
    /// `aria-modal`: content outside this element is inert while it is shown.
    pub modal: bool,
    pub disabled: bool,
    pub invalid: bool,
    pub required: bool,
    pub checked: Option<bool>,
}

impl Element {
    pub fn new(id: ElementId, role: Role, rect: Rect) -> Self {
        Self {
            id,
            role,
            rect,
            label: None,
            focusable: false,
            modal: false,
            disabled: false,
            invalid: false,
            required: false,
            checked: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Whether focus may land here.
    pub fn accepts_focus(&self) -> bool {
        self.focusable && !self.disabled
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.rect.contains(Position::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(ElementId::new(), ElementId::new());
    }

    #[test]
    fn disabled_elements_refuse_focus() {
        let element = Element::new(ElementId::new(), Role::Button, Rect::new(0, 0, 4, 1))
            .focusable(true)
            .disabled(true);
        assert!(!element.accepts_focus());
    }

    #[test]
    fn contains_uses_half_open_rect() {
        let element = Element::new(ElementId::new(), Role::Region, Rect::new(2, 2, 3, 1));
        assert!(element.contains(2, 2));
        assert!(element.contains(4, 2));
        assert!(!element.contains(5, 2));
        assert!(!element.contains(2, 3));
    }
}
