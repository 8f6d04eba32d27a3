use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;

use crate::ui::layout::line_width;
use crate::ui::style::{button_style, ButtonVariant, Size};
use crate::ui::surface::{Element, ElementId, Role, Surface};
use crate::ui::theme::Theme;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Single-row push button.
///
/// A loading button shows a spinner before its label and refuses focus,
/// the same as a disabled one.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    id: ElementId,
    label: Cow<'a, str>,
    variant: ButtonVariant,
    size: Size,
    loading: bool,
    disabled: bool,
    animation_tick: u8,
    theme: Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: ElementId::new(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: Size::default(),
            loading: false,
            disabled: false,
            animation_tick: 0,
            theme: Theme::default(),
        }
    }

    pub fn id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Frame counter for the loading spinner, usually the runtime tick count.
    pub fn animation_tick(mut self, tick: u8) -> Self {
        self.animation_tick = tick;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn element_id(&self) -> ElementId {
        self.id
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Columns the button occupies.
    pub fn width(&self) -> u16 {
        line_width(&self.line(false))
    }

    fn line(&self, focused: bool) -> Line<'a> {
        let resolved = button_style(&self.theme, self.variant, self.size, self.loading);
        let mut base = resolved.style;
        if self.disabled {
            base = base.add_modifier(Modifier::DIM);
        }
        if focused {
            base = base.add_modifier(Modifier::REVERSED);
        }

        let pad = " ".repeat(resolved.padding as usize);
        let mut spans = Vec::with_capacity(6);
        if resolved.bracketed {
            spans.push(Span::styled("[", base));
        }
        spans.push(Span::styled(pad.clone(), base));
        if self.loading {
            let frame = SPINNER_FRAMES[self.animation_tick as usize % SPINNER_FRAMES.len()];
            spans.push(Span::styled(format!("{} ", frame), base.patch(resolved.spinner)));
        }
        spans.push(Span::styled(self.label.clone(), base));
        spans.push(Span::styled(pad, base));
        if resolved.bracketed {
            spans.push(Span::styled("]", base));
        }
        Line::from(spans)
    }
}

impl StatefulWidget for Button<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        let focused = surface.focused() == Some(self.id);
        let line = self.line(focused);
        let width = line_width(&line).min(area.width);
        buf.set_line(area.x, area.y, &line, width);

        surface.register(
            Element::new(self.id, Role::Button, Rect::new(area.x, area.y, width, 1))
                .label(self.label.as_ref())
                .focusable(true)
                .disabled(self.is_disabled()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_includes_padding_and_spinner() {
        assert_eq!(Button::new("Save").size(Size::Sm).width(), 6);
        assert_eq!(Button::new("Save").width(), 8);
        assert_eq!(Button::new("Save").loading(true).width(), 10);
        assert_eq!(Button::new("Save").variant(ButtonVariant::Outline).width(), 10);
    }

    #[test]
    fn width_saturates_for_very_long_labels() {
        assert_eq!(Button::new("x".repeat(70_000)).width(), u16::MAX);
    }

    #[test]
    fn spinner_frame_follows_tick() {
        let line = Button::new("Go").loading(true).animation_tick(11).line(false);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(text.contains(SPINNER_FRAMES[1]));
    }

    #[test]
    fn loading_counts_as_disabled() {
        assert!(Button::new("Go").loading(true).is_disabled());
        assert!(!Button::new("Go").is_disabled());
    }
}
