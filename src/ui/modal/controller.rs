//! Lifecycle controller for a modal dialog.
//!
//! The host owns `is_open` and hands it over on every render via
//! [`DialogController::sync`]. The controller reacts to the edges:
//!
//! - closed → open: remember the focused element, listen for the dismissal
//!   key, lock page scrolling, and queue a post-commit focus move into the
//!   content region (the region only exists once the frame is committed).
//! - open → closed: stop listening, unlock scrolling, hand focus back if the
//!   remembered element is still on the page, and call `on_close` when the
//!   user caused the close.
//!
//! Dropping the controller while open performs the same cleanup without
//! notifying anyone.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::config::{ConfigError, ModalDefaults};
use crate::ui::mvi::Reducer;
use crate::ui::surface::{ElementId, KeySubscription, PostCommit, ScrollLockGuard, Surface};

use super::intent::DialogIntent;
use super::reducer::DialogReducer;
use super::state::{DialogPhase, DismissReason, HitTarget};
use super::view::{ModalProps, ModalView};

/// Ids of the elements a dialog registers while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogIds {
    pub backdrop: ElementId,
    pub content: ElementId,
    pub close_button: ElementId,
}

impl DialogIds {
    fn new() -> Self {
        Self {
            backdrop: ElementId::new(),
            content: ElementId::new(),
            close_button: ElementId::new(),
        }
    }
}

/// Result of routing one input event through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The dialog is closed, or the event is neither key nor mouse input.
    Ignored,
    /// The dialog is open and took the event. The page behind it must not
    /// see it; only content rendered inside the dialog may still react.
    Handled,
    /// The event dismissed the dialog; `on_close` has been called.
    Dismissed(DismissReason),
}

/// Focused element captured when the dialog opened.
#[derive(Debug)]
struct FocusMemento {
    previous: Option<ElementId>,
}

impl FocusMemento {
    fn capture(surface: &Surface) -> Self {
        Self {
            previous: surface.focused(),
        }
    }

    /// Consumes the memento. A stale element is skipped silently.
    fn restore(self, surface: &Surface) -> bool {
        self.previous.is_some_and(|id| surface.focus(id))
    }
}

/// Resources held for exactly one open interval.
#[derive(Debug)]
struct OpenSession {
    memento: FocusMemento,
    subscription: KeySubscription,
    scroll_lock: ScrollLockGuard,
}

impl OpenSession {
    fn close(self, surface: &Surface) -> bool {
        let OpenSession {
            memento,
            subscription,
            scroll_lock,
        } = self;
        drop(subscription);
        drop(scroll_lock);
        memento.restore(surface)
    }
}

type CloseCallback = Box<dyn FnMut(DismissReason)>;

pub struct DialogController {
    surface: Surface,
    ids: DialogIds,
    phase: DialogPhase,
    session: Option<OpenSession>,
    dismiss_key: KeyCode,
    show_close_button: bool,
    focus_order: Vec<ElementId>,
    on_close: CloseCallback,
}

impl DialogController {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            ids: DialogIds::new(),
            phase: DialogPhase::default(),
            session: None,
            dismiss_key: KeyCode::Esc,
            show_close_button: true,
            focus_order: Vec::new(),
            on_close: Box::new(|_| {}),
        }
    }

    /// Build a controller with the configured dismissal key.
    pub fn with_defaults(surface: Surface, defaults: &ModalDefaults) -> Result<Self, ConfigError> {
        Ok(Self::new(surface).dismiss_key(defaults.dismiss_key_code()?))
    }

    /// Called once per user dismissal. Never called when the host closes the dialog.
    pub fn on_close(mut self, on_close: impl FnMut(DismissReason) + 'static) -> Self {
        self.on_close = Box::new(on_close);
        self
    }

    /// Takes effect on the next open. Tab and BackTab drive the focus trap
    /// and are refused, keeping the previous key.
    pub fn dismiss_key(mut self, code: KeyCode) -> Self {
        if matches!(code, KeyCode::Tab | KeyCode::BackTab) {
            tracing::warn!(?code, kept = ?self.dismiss_key, "focus keys cannot dismiss a dialog");
            return self;
        }
        self.dismiss_key = code;
        self
    }

    pub fn ids(&self) -> DialogIds {
        self.ids
    }

    pub fn phase(&self) -> &DialogPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Apply this render's props. Call before rendering the view.
    pub fn sync(&mut self, props: &ModalProps<'_>) {
        self.show_close_button = props.show_close_button;
        self.focus_order.clone_from(&props.focus_order);
        self.dispatch(DialogIntent::Sync {
            is_open: props.is_open,
            close_on_backdrop: props.close_on_backdrop_click,
        });
    }

    /// The view to render for `props`. Renders nothing while closed.
    pub fn view<'p, 'a>(&self, props: &'p ModalProps<'a>) -> ModalView<'p, 'a> {
        ModalView::new(self.ids, self.is_open(), props)
    }

    /// Route an input event.
    ///
    /// While closed every event is ignored. While open every key and mouse
    /// event is taken, so input never reaches the page behind the dialog.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        if !self.is_open() {
            return EventOutcome::Ignored;
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => EventOutcome::Ignored,
        }
    }

    /// Activate the close button programmatically.
    pub fn activate_close_button(&mut self) -> EventOutcome {
        if !self.is_open() || !self.show_close_button {
            return EventOutcome::Ignored;
        }
        self.outcome(DialogIntent::CloseButton)
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventOutcome {
        if key.kind != KeyEventKind::Press {
            return EventOutcome::Handled;
        }

        let subscribed = self
            .session
            .as_ref()
            .is_some_and(|session| session.subscription.matches(key));
        if subscribed {
            return self.outcome(DialogIntent::DismissKey);
        }

        match key.code {
            KeyCode::Tab => self.trap_focus(false),
            KeyCode::BackTab => self.trap_focus(true),
            KeyCode::Enter | KeyCode::Char(' ')
                if self.show_close_button
                    && self.surface.focused() == Some(self.ids.close_button) =>
            {
                self.outcome(DialogIntent::CloseButton)
            }
            _ => EventOutcome::Handled,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventOutcome {
        let intent = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                DialogIntent::PointerDown(self.hit_target(mouse.column, mouse.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                DialogIntent::PointerUp(self.hit_target(mouse.column, mouse.row))
            }
            _ => return EventOutcome::Handled,
        };
        self.outcome(intent)
    }

    fn outcome(&mut self, intent: DialogIntent) -> EventOutcome {
        match self.dispatch(intent) {
            Some(reason) => EventOutcome::Dismissed(reason),
            None => EventOutcome::Handled,
        }
    }

    fn trap_focus(&mut self, reverse: bool) -> EventOutcome {
        let mut scope = vec![self.ids.content];
        if self.show_close_button {
            scope.push(self.ids.close_button);
        }
        scope.extend(self.focus_order.iter().copied());

        let target = self.surface.focus_next_within(&scope, reverse);
        tracing::trace!(?target, reverse, "focus trapped in dialog");
        EventOutcome::Handled
    }

    fn hit_target(&self, column: u16, row: u16) -> HitTarget {
        let inside_content = || {
            self.surface
                .element(self.ids.content)
                .is_some_and(|content| content.contains(column, row))
        };

        match self.surface.hit_test(column, row) {
            Some(id) if id == self.ids.backdrop => HitTarget::Backdrop,
            Some(id) if id == self.ids.close_button => HitTarget::CloseButton,
            Some(_) if inside_content() => HitTarget::Content,
            _ => HitTarget::Outside,
        }
    }

    /// Run the reducer, then the effects of any open/close edge.
    ///
    /// Returns the dismissal reason when the user just closed the dialog.
    fn dispatch(&mut self, intent: DialogIntent) -> Option<DismissReason> {
        let was_open = self.phase.is_open();
        self.phase = DialogReducer::reduce(std::mem::take(&mut self.phase), intent);
        let is_open = self.phase.is_open();

        match (was_open, is_open) {
            (false, true) => {
                self.enter();
                None
            }
            (true, false) => {
                self.leave();
                let reason = self.phase.dismiss_reason()?;
                tracing::debug!(?reason, "dialog dismissed");
                (self.on_close)(reason);
                Some(reason)
            }
            _ => None,
        }
    }

    fn enter(&mut self) {
        let memento = FocusMemento::capture(&self.surface);
        tracing::debug!(previous = ?memento.previous, key = ?self.dismiss_key, "dialog opened");
        let subscription = self.surface.subscribe_key(self.dismiss_key);
        let scroll_lock = self.surface.lock_scroll();
        self.surface.after_commit(PostCommit::Focus(self.ids.content));
        self.session = Some(OpenSession {
            memento,
            subscription,
            scroll_lock,
        });
    }

    fn leave(&mut self) {
        if let Some(session) = self.session.take() {
            let restored = session.close(&self.surface);
            tracing::debug!(restored, "dialog closed");
        }
    }
}

impl Drop for DialogController {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            let restored = session.close(&self.surface);
            tracing::debug!(restored, "dialog unmounted while open");
        }
    }
}

impl std::fmt::Debug for DialogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogController")
            .field("ids", &self.ids)
            .field("phase", &self.phase)
            .field("dismiss_key", &self.dismiss_key)
            .field("show_close_button", &self.show_close_button)
            .finish_non_exhaustive()
    }
}
