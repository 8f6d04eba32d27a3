//! Rendering for an open modal dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, Paragraph, StatefulWidget, Widget, Wrap};

use crate::config::ModalDefaults;
use crate::ui::layout::{centered_rect, plain_text, rule, wrapped_height};
use crate::ui::surface::{Element, ElementId, Role, Surface};
use crate::ui::theme::Theme;

use super::controller::DialogIds;

const CLOSE_GLYPH: &str = " ✕ ";
const CLOSE_WIDTH: u16 = 3;
pub const CLOSE_BUTTON_LABEL: &str = "Close modal";

/// Host-owned props for one render of a modal.
#[derive(Debug, Clone)]
pub struct ModalProps<'a> {
    pub is_open: bool,
    pub title: Option<Line<'a>>,
    pub body: Text<'a>,
    pub footer: Option<Line<'a>>,
    pub close_on_backdrop_click: bool,
    pub show_close_button: bool,
    pub max_width: u16,
    pub theme: Theme,
    /// Focusable elements the host renders inside the dialog, in tab order.
    pub focus_order: Vec<ElementId>,
}

impl<'a> ModalProps<'a> {
    pub fn new(is_open: bool, body: impl Into<Text<'a>>) -> Self {
        let defaults = ModalDefaults::default();
        Self {
            is_open,
            title: None,
            body: body.into(),
            footer: None,
            close_on_backdrop_click: defaults.close_on_backdrop_click,
            show_close_button: defaults.show_close_button,
            max_width: defaults.max_width,
            theme: Theme::default(),
            focus_order: Vec::new(),
        }
    }

    /// Take backdrop, close button and width settings from configuration.
    pub fn apply_defaults(mut self, defaults: &ModalDefaults) -> Self {
        self.close_on_backdrop_click = defaults.close_on_backdrop_click;
        self.show_close_button = defaults.show_close_button;
        self.max_width = defaults.max_width;
        self
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Line<'a>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn close_on_backdrop_click(mut self, close: bool) -> Self {
        self.close_on_backdrop_click = close;
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn focus_order(mut self, ids: Vec<ElementId>) -> Self {
        self.focus_order = ids;
        self
    }

    fn has_header(&self) -> bool {
        self.title.is_some() || self.show_close_button
    }
}

/// Where each part of the dialog goes for a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub content: Rect,
    pub header: Option<Rect>,
    pub close_button: Option<Rect>,
    pub body: Rect,
    pub footer: Option<Rect>,
}

impl ModalLayout {
    pub fn compute(area: Rect, props: &ModalProps<'_>) -> Self {
        let width = props.max_width.min(area.width);
        // Borders plus one column of padding on each side.
        let body_width = width.saturating_sub(4);
        let header_rows: u16 = if props.has_header() { 2 } else { 0 };
        let footer_rows: u16 = if props.footer.is_some() { 2 } else { 0 };
        let body_rows = wrapped_height(&props.body, body_width).max(1);
        let height = 2u16
            .saturating_add(header_rows)
            .saturating_add(body_rows)
            .saturating_add(footer_rows)
            .min(area.height);

        let content = centered_rect(width, height, area);
        let inner = content.inner(Margin::new(1, 1));
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(header_rows),
            Constraint::Min(0),
            Constraint::Length(footer_rows),
        ])
        .areas(inner);

        let header = (header_rows > 0 && header_area.height > 0)
            .then(|| Rect::new(header_area.x, header_area.y, header_area.width, 1));
        let close_button = header.filter(|_| props.show_close_button).and_then(|header| {
            (header.width > CLOSE_WIDTH).then(|| {
                Rect::new(
                    header.right().saturating_sub(CLOSE_WIDTH),
                    header.y,
                    CLOSE_WIDTH,
                    1,
                )
            })
        });
        let footer = (footer_rows > 0 && footer_area.height > 1).then(|| {
            Rect::new(footer_area.x, footer_area.y + 1, footer_area.width, 1)
        });

        Self {
            content,
            header,
            close_button,
            body: body_area.inner(Margin::new(1, 0)),
            footer,
        }
    }
}

/// Stateful view of a dialog; the state is the surface it registers on.
pub struct ModalView<'p, 'a> {
    ids: DialogIds,
    open: bool,
    props: &'p ModalProps<'a>,
}

impl<'p, 'a> ModalView<'p, 'a> {
    pub(super) fn new(ids: DialogIds, open: bool, props: &'p ModalProps<'a>) -> Self {
        Self { ids, open, props }
    }
}

impl StatefulWidget for ModalView<'_, '_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        if !self.open || area.is_empty() {
            return;
        }
        let props = self.props;
        let theme = props.theme;

        buf.set_style(area, Style::new().add_modifier(Modifier::DIM));
        surface.register(Element::new(self.ids.backdrop, Role::Backdrop, area));

        let layout = ModalLayout::compute(area, props);
        if layout.content.is_empty() {
            return;
        }

        Clear.render(layout.content, buf);
        Block::bordered()
            .border_style(Style::new().fg(theme.border()))
            .style(Style::new().bg(theme.surface()).fg(theme.text()))
            .render(layout.content, buf);

        let mut dialog = Element::new(self.ids.content, Role::Dialog, layout.content)
            .modal(true)
            .focusable(true);
        if let Some(title) = &props.title {
            dialog = dialog.label(plain_text(title));
        }
        surface.register(dialog);

        if let Some(header) = layout.header {
            if let Some(title) = &props.title {
                let reserved = if layout.close_button.is_some() { CLOSE_WIDTH + 1 } else { 0 };
                let title = title
                    .clone()
                    .patch_style(Style::new().fg(theme.text()).add_modifier(Modifier::BOLD));
                buf.set_line(
                    header.x + 1,
                    header.y,
                    &title,
                    header.width.saturating_sub(reserved + 1),
                );
            }
            rule(buf, header.y + 1, header, Style::new().fg(theme.border()));
        }

        if let Some(close) = layout.close_button {
            let focused = surface.focused() == Some(self.ids.close_button);
            let style = if focused {
                Style::new().fg(theme.text()).add_modifier(Modifier::REVERSED)
            } else {
                Style::new().fg(theme.muted())
            };
            buf.set_string(close.x, close.y, CLOSE_GLYPH, style);
            surface.register(
                Element::new(self.ids.close_button, Role::Button, close)
                    .label(CLOSE_BUTTON_LABEL)
                    .focusable(true),
            );
        }

        Paragraph::new(props.body.clone())
            .wrap(Wrap { trim: false })
            .render(layout.body, buf);

        if let (Some(footer), Some(line)) = (layout.footer, &props.footer) {
            rule(buf, footer.y - 1, footer, Style::new().fg(theme.border()));
            buf.set_line(footer.x + 1, footer.y, line, footer.width.saturating_sub(2));
        }
    }
}
