//! Terminal event loop hosting one [`View`] and its [`Surface`].

use std::io;
use std::sync::mpsc::RecvTimeoutError;

use crossterm::event::{Event, MouseEventKind};
use ratatui::Frame;

use crate::config::RuntimeConfig;
use crate::ui::events::{EventHandler, UiEvent};
use crate::ui::surface::Surface;
use crate::ui::terminal_guard::setup_terminal;

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A screen driven by [`run`].
pub trait View {
    /// Draw one frame. Components register their elements on `surface`.
    fn draw(&mut self, frame: &mut Frame<'_>, surface: &mut Surface);

    fn on_event(&mut self, event: UiEvent, surface: &Surface) -> Flow;
}

/// Run `view` until it returns [`Flow::Quit`] or input ends.
pub fn run(view: &mut impl View, config: &RuntimeConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.mouse_capture)?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut surface = Surface::new();
    tracing::info!(tick_ms = tick_rate.as_millis() as u64, "runtime started");

    loop {
        surface.begin_frame();
        terminal.draw(|frame| view.draw(frame, &mut surface))?;
        let tasks = surface.commit();
        if tasks > 0 {
            tracing::trace!(tasks, "post-commit tasks ran");
        }

        let event = match events.next(tick_rate) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        scroll_page(&event, &surface);
        if view.on_event(event, &surface) == Flow::Quit {
            break;
        }
    }

    drop(guard);
    tracing::info!("runtime stopped");
    Ok(())
}

/// Wheel input scrolls the page unless a dialog holds the scroll lock.
fn scroll_page(event: &UiEvent, surface: &Surface) {
    let UiEvent::Input(Event::Mouse(mouse)) = event else {
        return;
    };
    let delta = match mouse.kind {
        MouseEventKind::ScrollDown => 1,
        MouseEventKind::ScrollUp => -1,
        _ => return,
    };
    if !surface.scroll_page(delta) {
        tracing::trace!(delta, "page scroll refused while locked");
    }
}
