use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph, StatefulWidget, Widget, Wrap};

use crate::ui::layout::wrapped_height;
use crate::ui::style::{alert_style, AlertVariant};
use crate::ui::surface::{Element, ElementId, Role, Surface};
use crate::ui::theme::Theme;

const CLOSE_GLYPH: &str = "✕";
pub const CLOSE_ALERT_LABEL: &str = "Close alert";

/// Bordered notification with a severity icon.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    id: ElementId,
    variant: AlertVariant,
    title: Option<Cow<'a, str>>,
    message: Text<'a>,
    show_icon: bool,
    close_id: Option<ElementId>,
    theme: Theme,
}

impl<'a> Alert<'a> {
    pub fn new(message: impl Into<Text<'a>>) -> Self {
        Self {
            id: ElementId::new(),
            variant: AlertVariant::default(),
            title: None,
            message: message.into(),
            show_icon: true,
            close_id: None,
            theme: Theme::default(),
        }
    }

    pub fn id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<Cow<'a, str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    /// Show a close affordance registered under `id`.
    pub fn closable(mut self, id: ElementId) -> Self {
        self.close_id = Some(id);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows needed at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        let title_rows = u16::from(self.title.is_some());
        let message_rows = wrapped_height(&self.message, self.text_width(width)).max(1);
        2u16.saturating_add(title_rows).saturating_add(message_rows)
    }

    fn text_width(&self, width: u16) -> u16 {
        let icon = if self.show_icon { 2 } else { 0 };
        let close = if self.close_id.is_some() { 2 } else { 0 };
        // borders and one column of padding each side
        width.saturating_sub(4 + icon + close)
    }

    fn accessible_label(&self) -> String {
        match &self.title {
            Some(title) => title.to_string(),
            None => self
                .message
                .lines
                .first()
                .map(crate::ui::layout::plain_text)
                .unwrap_or_default(),
        }
    }
}

impl StatefulWidget for Alert<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        let height = self.height(area.width).min(area.height);
        let area = Rect::new(area.x, area.y, area.width, height);
        if area.is_empty() {
            return;
        }
        let resolved = alert_style(&self.theme, self.variant);

        Block::bordered()
            .border_style(resolved.border)
            .render(area, buf);
        surface.register(Element::new(self.id, Role::Alert, area).label(self.accessible_label()));

        let inner = area.inner(Margin::new(2, 1));
        if inner.is_empty() {
            return;
        }

        let mut text_x = inner.x;
        if self.show_icon {
            buf.set_string(inner.x, inner.y, resolved.icon, resolved.icon_style);
            text_x += 2;
        }

        let text_area = Rect::new(text_x, inner.y, self.text_width(area.width), inner.height);
        let mut y = text_area.y;
        if let Some(title) = &self.title {
            let line = Line::styled(title.as_ref(), resolved.title);
            buf.set_line(text_area.x, y, &line, text_area.width);
            y += 1;
        }
        let message_area = Rect::new(
            text_area.x,
            y,
            text_area.width,
            text_area.bottom().saturating_sub(y),
        );
        Paragraph::new(self.message.clone())
            .style(resolved.text)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        if let Some(close_id) = self.close_id {
            let close = Rect::new(inner.right().saturating_sub(1), inner.y, 1, 1);
            buf.set_string(close.x, close.y, CLOSE_GLYPH, resolved.icon_style);
            surface.register(
                Element::new(close_id, Role::Button, close)
                    .label(CLOSE_ALERT_LABEL)
                    .focusable(true),
            );
        }
    }
}
