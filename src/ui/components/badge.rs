use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;

use crate::ui::layout::line_width;
use crate::ui::style::{badge_style, BadgeVariant, Size};
use crate::ui::surface::{Element, ElementId, Role, Surface};
use crate::ui::theme::Theme;

const REMOVE_GLYPH: &str = " ×";
pub const REMOVE_LABEL: &str = "Remove";

/// Inline label or tag, optionally removable.
#[derive(Debug, Clone)]
pub struct Badge<'a> {
    label: Cow<'a, str>,
    variant: BadgeVariant,
    size: Size,
    remove_id: Option<ElementId>,
    theme: Theme,
}

impl<'a> Badge<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::default(),
            size: Size::default(),
            remove_id: None,
            theme: Theme::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Show a remove affordance registered under `id`.
    pub fn removable(mut self, id: ElementId) -> Self {
        self.remove_id = Some(id);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn width(&self) -> u16 {
        line_width(&self.line())
    }

    fn line(&self) -> Line<'a> {
        let resolved = badge_style(&self.theme, self.variant, self.size);
        let pad = " ".repeat(resolved.padding as usize);
        let mut spans = vec![
            Span::styled(pad.clone(), resolved.style),
            Span::styled(self.label.clone(), resolved.style),
        ];
        if self.remove_id.is_some() {
            spans.push(Span::styled(REMOVE_GLYPH, resolved.style));
        }
        spans.push(Span::styled(pad, resolved.style));
        Line::from(spans)
    }
}

impl StatefulWidget for Badge<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        let line = self.line();
        let width = line_width(&line).min(area.width);
        buf.set_line(area.x, area.y, &line, width);

        if let Some(id) = self.remove_id {
            let padding = badge_style(&self.theme, self.variant, self.size).padding;
            let glyph_x = area.x + width.saturating_sub(padding + 1);
            if glyph_x < area.right() {
                surface.register(
                    Element::new(id, Role::Button, Rect::new(glyph_x, area.y, 1, 1))
                        .label(REMOVE_LABEL)
                        .focusable(true),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_tracks_size_and_remove_glyph() {
        assert_eq!(Badge::new("New").size(Size::Sm).width(), 3);
        assert_eq!(Badge::new("New").width(), 5);
        assert_eq!(Badge::new("New").size(Size::Lg).width(), 7);
        assert_eq!(Badge::new("New").removable(ElementId::new()).width(), 7);
    }

    #[test]
    fn width_saturates_for_very_long_labels() {
        assert_eq!(Badge::new("x".repeat(70_000)).width(), u16::MAX);
    }
}
