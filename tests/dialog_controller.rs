use std::cell::{Cell, RefCell};
use std::rc::Rc;

use brandui::ui::components::Button;
use brandui::ui::modal::{
    DialogController, DismissReason, EventOutcome, ModalLayout, ModalProps, CLOSE_BUTTON_LABEL,
};
use brandui::ui::surface::{ElementId, Role, Surface};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::StatefulWidget;

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// A page with one trigger button and a dialog whose `is_open` the host owns.
struct Page {
    surface: Surface,
    controller: DialogController,
    trigger: ElementId,
    show_trigger: bool,
    is_open: Rc<Cell<bool>>,
    closes: Rc<Cell<u32>>,
    reasons: Rc<RefCell<Vec<DismissReason>>>,
    close_on_backdrop: bool,
    extra: Vec<ElementId>,
}

impl Page {
    fn new() -> Self {
        let surface = Surface::new();
        let is_open = Rc::new(Cell::new(false));
        let closes = Rc::new(Cell::new(0));
        let reasons = Rc::new(RefCell::new(Vec::new()));

        let controller = {
            let is_open = Rc::clone(&is_open);
            let closes = Rc::clone(&closes);
            let reasons = Rc::clone(&reasons);
            DialogController::new(surface.clone()).on_close(move |reason| {
                closes.set(closes.get() + 1);
                reasons.borrow_mut().push(reason);
                is_open.set(false);
            })
        };

        let mut page = Self {
            surface,
            controller,
            trigger: ElementId::new(),
            show_trigger: true,
            is_open,
            closes,
            reasons,
            close_on_backdrop: true,
            extra: Vec::new(),
        };
        page.frame();
        page
    }

    fn props(&self) -> ModalProps<'static> {
        ModalProps::new(self.is_open.get(), "Delete this project?")
            .title("Confirm")
            .footer("Enter to confirm")
            .close_on_backdrop_click(self.close_on_backdrop)
            .focus_order(self.extra.clone())
    }

    fn frame(&mut self) -> Buffer {
        let props = self.props();
        self.controller.sync(&props);

        let mut surface = self.surface.clone();
        let mut buf = Buffer::empty(AREA);
        surface.begin_frame();
        if self.show_trigger {
            Button::new("Open")
                .id(self.trigger)
                .render(Rect::new(1, 1, 10, 1), &mut buf, &mut surface);
        }
        self.controller.view(&props).render(AREA, &mut buf, &mut surface);

        let layout = ModalLayout::compute(AREA, &props);
        if self.controller.is_open() {
            for (i, id) in self.extra.iter().enumerate() {
                let rect = Rect::new(layout.body.x + 10 * i as u16, layout.body.y, 8, 1);
                Button::new("Action").id(*id).render(rect, &mut buf, &mut surface);
            }
        }
        surface.commit();
        buf
    }

    fn open(&mut self) {
        assert!(self.surface.focus(self.trigger));
        self.is_open.set(true);
        self.frame();
    }

    fn layout(&self) -> ModalLayout {
        ModalLayout::compute(AREA, &self.props())
    }

    fn send(&mut self, event: Event) -> EventOutcome {
        let outcome = self.controller.handle_event(&event);
        self.frame();
        outcome
    }

    fn click(&mut self, down: Position, up: Position) -> EventOutcome {
        let first = self.controller.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), down));
        let second = self.send(mouse(MouseEventKind::Up(MouseButton::Left), up));
        assert_ne!(first, EventOutcome::Ignored, "press should be tracked while open");
        second
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, at: Position) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: at.x,
        row: at.y,
        modifiers: KeyModifiers::NONE,
    })
}

fn backdrop_point() -> Position {
    Position::new(0, 23)
}

fn content_point(page: &Page) -> Position {
    let body = page.layout().body;
    Position::new(body.x, body.y)
}

fn buffer_text(buf: &Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn open_registers_listener_exactly_once() {
    let mut page = Page::new();
    assert_eq!(page.surface.listener_count(), 0);

    page.open();
    page.frame();
    page.frame();
    assert_eq!(page.surface.listeners_for(KeyCode::Esc).len(), 1);
    assert_eq!(page.surface.listener_count(), 1);

    page.is_open.set(false);
    page.frame();
    assert_eq!(page.surface.listener_count(), 0);

    page.is_open.set(true);
    page.frame();
    assert_eq!(page.surface.listener_count(), 1);
}

#[test]
fn open_moves_focus_into_content_after_commit() {
    let mut page = Page::new();
    page.open();
    assert_eq!(page.surface.focused(), Some(page.controller.ids().content));
    assert_eq!(page.surface.pending_tasks(), 0);
}

#[test]
fn open_dialog_registers_accessible_elements() {
    let mut page = Page::new();
    page.open();
    let ids = page.controller.ids();

    let dialog = page.surface.element(ids.content).expect("dialog element");
    assert_eq!(dialog.role, Role::Dialog);
    assert!(dialog.modal);
    assert_eq!(dialog.label.as_deref(), Some("Confirm"));

    let close = page.surface.element(ids.close_button).expect("close button");
    assert_eq!(close.role, Role::Button);
    assert_eq!(close.label.as_deref(), Some(CLOSE_BUTTON_LABEL));

    assert_eq!(page.surface.elements_with_role(Role::Backdrop).len(), 1);
}

#[test]
fn closed_dialog_renders_nothing() {
    let mut page = Page::new();
    let buf = page.frame();
    assert!(!buffer_text(&buf).contains("Delete this project?"));
    assert!(!page.surface.contains(page.controller.ids().content));
    assert!(!page.surface.scroll_locked());
}

#[test]
fn open_dialog_draws_title_body_and_footer() {
    let mut page = Page::new();
    page.is_open.set(true);
    let buf = page.frame();
    let text = buffer_text(&buf);
    assert!(text.contains("Confirm"));
    assert!(text.contains("Delete this project?"));
    assert!(text.contains("Enter to confirm"));
}

#[test]
fn backdrop_click_dismisses_once() {
    let mut page = Page::new();
    page.open();

    let outcome = page.click(backdrop_point(), backdrop_point());
    assert_eq!(outcome, EventOutcome::Dismissed(DismissReason::Backdrop));
    assert_eq!(page.closes.get(), 1);
    assert!(!page.controller.is_open());
}

#[test]
fn content_click_does_not_dismiss() {
    let mut page = Page::new();
    page.open();

    let at = content_point(&page);
    assert_eq!(page.click(at, at), EventOutcome::Handled);
    assert_eq!(page.closes.get(), 0);
    assert!(page.controller.is_open());
}

#[test]
fn backdrop_click_ignored_when_disabled() {
    let mut page = Page::new();
    page.close_on_backdrop = false;
    page.open();

    page.click(backdrop_point(), backdrop_point());
    assert_eq!(page.closes.get(), 0);
    assert!(page.controller.is_open());
}

#[test]
fn drag_from_content_to_backdrop_does_not_dismiss() {
    let mut page = Page::new();
    page.open();

    let start = content_point(&page);
    page.click(start, backdrop_point());
    assert_eq!(page.closes.get(), 0);
    assert!(page.controller.is_open());
}

#[test]
fn dismiss_key_while_open_notifies_once() {
    let mut page = Page::new();
    page.open();

    assert_eq!(
        page.send(key(KeyCode::Esc)),
        EventOutcome::Dismissed(DismissReason::DismissKey)
    );
    assert_eq!(page.send(key(KeyCode::Esc)), EventOutcome::Ignored);
    assert_eq!(page.closes.get(), 1);
    assert_eq!(*page.reasons.borrow(), vec![DismissReason::DismissKey]);
}

#[test]
fn dismiss_key_while_closed_is_ignored() {
    let mut page = Page::new();
    assert_eq!(page.send(key(KeyCode::Esc)), EventOutcome::Ignored);
    assert_eq!(page.closes.get(), 0);
}

#[test]
fn key_release_does_not_dismiss() {
    let mut page = Page::new();
    page.open();

    let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(page.send(Event::Key(release)), EventOutcome::Handled);
    assert_eq!(page.closes.get(), 0);
    assert!(page.controller.is_open());
}

#[test]
fn custom_dismiss_key_replaces_escape() {
    let surface = Surface::new();
    let closes = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&closes);
    let mut controller = DialogController::new(surface.clone())
        .dismiss_key(KeyCode::Char('q'))
        .on_close(move |_| counter.set(counter.get() + 1));

    controller.sync(&ModalProps::new(true, "Body"));
    assert_eq!(surface.listeners_for(KeyCode::Char('q')).len(), 1);
    assert!(surface.listeners_for(KeyCode::Esc).is_empty());

    assert_eq!(controller.handle_event(&key(KeyCode::Esc)), EventOutcome::Handled);
    assert_eq!(closes.get(), 0);
    controller.handle_event(&key(KeyCode::Char('q')));
    assert_eq!(closes.get(), 1);
}

#[test]
fn focus_keys_cannot_become_the_dismiss_key() {
    let surface = Surface::new();
    let mut controller = DialogController::new(surface.clone())
        .dismiss_key(KeyCode::Tab)
        .dismiss_key(KeyCode::BackTab);

    controller.sync(&ModalProps::new(true, "Body"));
    assert!(surface.listeners_for(KeyCode::Tab).is_empty());
    assert!(surface.listeners_for(KeyCode::BackTab).is_empty());
    assert_eq!(surface.listeners_for(KeyCode::Esc).len(), 1);

    assert_eq!(controller.handle_event(&key(KeyCode::Tab)), EventOutcome::Handled);
    assert!(controller.is_open());
}

#[test]
fn open_dialog_swallows_unbound_input() {
    let mut page = Page::new();
    page.open();

    let wheel = mouse(MouseEventKind::ScrollDown, content_point(&page));
    let moved = mouse(MouseEventKind::Moved, backdrop_point());
    let right = mouse(MouseEventKind::Down(MouseButton::Right), backdrop_point());
    for event in [key(KeyCode::Char('a')), key(KeyCode::Down), wheel, moved, right] {
        assert_eq!(page.send(event), EventOutcome::Handled);
    }
    assert_eq!(page.closes.get(), 0);
    assert!(page.controller.is_open());
}

#[test]
fn non_input_events_pass_through_open_dialog() {
    let mut page = Page::new();
    page.open();
    assert_eq!(page.send(Event::Resize(100, 40)), EventOutcome::Ignored);
    assert_eq!(page.send(Event::FocusLost), EventOutcome::Ignored);
}

#[test]
fn close_button_click_dismisses() {
    let mut page = Page::new();
    page.open();

    let close = page.layout().close_button.expect("close button rect");
    let at = Position::new(close.x + 1, close.y);
    assert_eq!(
        page.click(at, at),
        EventOutcome::Dismissed(DismissReason::CloseButton)
    );
    assert_eq!(page.closes.get(), 1);
}

#[test]
fn enter_on_focused_close_button_dismisses() {
    let mut page = Page::new();
    page.open();

    page.send(key(KeyCode::Tab));
    assert_eq!(page.surface.focused(), Some(page.controller.ids().close_button));
    assert_eq!(
        page.send(key(KeyCode::Enter)),
        EventOutcome::Dismissed(DismissReason::CloseButton)
    );
}

#[test]
fn host_close_does_not_notify() {
    let mut page = Page::new();
    page.open();

    page.is_open.set(false);
    page.frame();
    assert_eq!(page.closes.get(), 0);
    assert!(!page.controller.is_open());
}

#[test]
fn focus_returns_to_trigger_on_close() {
    let mut page = Page::new();
    page.open();
    assert_ne!(page.surface.focused(), Some(page.trigger));

    page.send(key(KeyCode::Esc));
    assert_eq!(page.surface.focused(), Some(page.trigger));
}

#[test]
fn focus_restore_skips_removed_trigger() {
    let mut page = Page::new();
    page.open();

    page.show_trigger = false;
    page.frame();
    assert!(!page.surface.contains(page.trigger));

    let before = page.surface.focused();
    page.controller.handle_event(&key(KeyCode::Esc));
    assert_eq!(page.closes.get(), 1);
    assert_eq!(page.surface.focused(), before);
    assert_ne!(page.surface.focused(), Some(page.trigger));
}

#[test]
fn scroll_is_locked_while_open() {
    let mut page = Page::new();
    assert!(page.surface.scroll_page(1));

    page.open();
    assert!(page.surface.scroll_locked());
    assert!(!page.surface.scroll_page(1));
    assert_eq!(page.surface.page_offset(), 1);

    page.send(key(KeyCode::Esc));
    assert!(!page.surface.scroll_locked());
    assert!(page.surface.scroll_page(1));
}

#[test]
fn unmount_while_open_releases_everything_silently() {
    let mut page = Page::new();
    page.open();
    assert_eq!(page.surface.listener_count(), 1);

    let Page {
        surface,
        controller,
        trigger,
        closes,
        ..
    } = page;
    drop(controller);

    assert_eq!(surface.listener_count(), 0);
    assert!(!surface.scroll_locked());
    assert_eq!(surface.focused(), Some(trigger));
    assert_eq!(closes.get(), 0);
}

#[test]
fn two_open_dialogs_share_the_scroll_lock() {
    let surface = Surface::new();
    let mut first = DialogController::new(surface.clone());
    let mut second = DialogController::new(surface.clone());

    first.sync(&ModalProps::new(true, "First"));
    second.sync(&ModalProps::new(true, "Second"));
    assert_eq!(surface.scroll_lock_depth(), 2);

    first.sync(&ModalProps::new(false, "First"));
    assert!(surface.scroll_locked());

    drop(second);
    assert!(!surface.scroll_locked());
}

#[test]
fn tab_never_leaves_the_dialog() {
    let mut page = Page::new();
    page.extra = vec![ElementId::new(), ElementId::new()];
    page.open();
    let ids = page.controller.ids();
    let inside = [ids.content, ids.close_button, page.extra[0], page.extra[1]];

    let mut seen = Vec::new();
    for _ in 0..9 {
        page.send(key(KeyCode::Tab));
        let focused = page.surface.focused().expect("focus inside dialog");
        assert!(inside.contains(&focused));
        seen.push(focused);
    }
    assert!(!seen.contains(&page.trigger));
    for id in inside {
        assert!(seen.contains(&id));
    }

    page.send(key(KeyCode::BackTab));
    assert!(inside.contains(&page.surface.focused().expect("focus")));
}

#[test]
fn dismissed_dialog_reopens_only_after_host_acknowledges() {
    let surface = Surface::new();
    let mut controller = DialogController::new(surface.clone());
    let open = ModalProps::new(true, "Body");

    controller.sync(&open);
    controller.handle_event(&key(KeyCode::Esc));
    assert!(!controller.is_open());

    // Host ignored on_close and still passes is_open = true.
    controller.sync(&open);
    assert!(!controller.is_open());
    assert_eq!(surface.listener_count(), 0);

    controller.sync(&ModalProps::new(false, "Body"));
    controller.sync(&open);
    assert!(controller.is_open());
    assert_eq!(surface.listener_count(), 1);
}

#[test]
fn events_are_ignored_while_closed() {
    let mut page = Page::new();
    let at = backdrop_point();
    assert_eq!(
        page.send(mouse(MouseEventKind::Down(MouseButton::Left), at)),
        EventOutcome::Ignored
    );
    assert_eq!(page.send(key(KeyCode::Tab)), EventOutcome::Ignored);
}
