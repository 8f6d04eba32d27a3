//! Card container and its sections.
//!
//! A [`Card`] stacks an optional [`CardHeader`], a [`CardBody`] and an
//! optional [`CardFooter`] inside a border. Each section is also a widget
//! on its own, so hosts can lay out custom cards.

use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph, StatefulWidget, Widget, Wrap};

use crate::ui::layout::{rule, wrapped_height};
use crate::ui::surface::{Element, ElementId, Role, Surface};
use crate::ui::theme::Theme;

/// Bold heading of a card.
#[derive(Debug, Clone)]
pub struct CardTitle<'a> {
    id: ElementId,
    text: Cow<'a, str>,
    theme: Theme,
}

impl<'a> CardTitle<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: ElementId::new(),
            text: text.into(),
            theme: Theme::default(),
        }
    }

    pub fn id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatefulWidget for CardTitle<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        let style = Style::new()
            .fg(self.theme.text())
            .add_modifier(Modifier::BOLD);
        let (end, _) =
            buf.set_stringn(area.x, area.y, self.text.as_ref(), area.width as usize, style);
        let width = end.saturating_sub(area.x).max(1);
        surface.register(
            Element::new(self.id, Role::Heading, Rect::new(area.x, area.y, width, 1))
                .label(self.text.as_ref()),
        );
    }
}

/// Muted supporting text under a title.
#[derive(Debug, Clone)]
pub struct CardDescription<'a> {
    text: Text<'a>,
    theme: Theme,
}

impl<'a> CardDescription<'a> {
    pub fn new(text: impl Into<Text<'a>>) -> Self {
        Self {
            text: text.into(),
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(&self.text, width)
    }
}

impl Widget for CardDescription<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text)
            .style(Style::new().fg(self.theme.muted()))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Title and description, closed by a separator.
#[derive(Debug, Clone, Default)]
pub struct CardHeader<'a> {
    title: Option<CardTitle<'a>>,
    description: Option<CardDescription<'a>>,
    theme: Theme,
}

impl<'a> CardHeader<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: CardTitle<'a>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: CardDescription<'a>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows including the separator.
    pub fn height(&self, width: u16) -> u16 {
        let title = u16::from(self.title.is_some());
        let description = self
            .description
            .as_ref()
            .map_or(0, |description| description.height(width));
        title.saturating_add(description).saturating_add(1)
    }

    fn label(&self) -> Option<String> {
        self.title.as_ref().map(|title| title.text().to_string())
    }
}

impl StatefulWidget for CardHeader<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        let description_rows = self
            .description
            .as_ref()
            .map_or(0, |description| description.height(area.width));
        let [title_area, description_area, separator] = Layout::vertical([
            Constraint::Length(u16::from(self.title.is_some())),
            Constraint::Length(description_rows),
            Constraint::Length(1),
        ])
        .areas(area);

        if let Some(title) = self.title {
            title.theme(self.theme).render(title_area, buf, surface);
        }
        if let Some(description) = self.description {
            description.theme(self.theme).render(description_area, buf);
        }
        if !separator.is_empty() {
            rule(buf, separator.y, separator, Style::new().fg(self.theme.border()));
        }
    }
}

/// Main content of a card.
#[derive(Debug, Clone)]
pub struct CardBody<'a> {
    content: Text<'a>,
    theme: Theme,
}

impl<'a> CardBody<'a> {
    pub fn new(content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(&self.content, width).max(1)
    }
}

impl Widget for CardBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::new().fg(self.theme.text()))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Action row under a separator.
#[derive(Debug, Clone)]
pub struct CardFooter<'a> {
    content: Line<'a>,
    theme: Theme,
}

impl<'a> CardFooter<'a> {
    pub fn new(content: impl Into<Line<'a>>) -> Self {
        Self {
            content: content.into(),
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub const HEIGHT: u16 = 2;
}

impl Widget for CardFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        rule(buf, area.y, area, Style::new().fg(self.theme.border()));
        if area.height > 1 {
            buf.set_line(area.x, area.y + 1, &self.content, area.width);
        }
    }
}

/// Bordered container for a header, body and footer.
#[derive(Debug, Clone)]
pub struct Card<'a> {
    id: ElementId,
    header: Option<CardHeader<'a>>,
    body: CardBody<'a>,
    footer: Option<CardFooter<'a>>,
    theme: Theme,
}

impl<'a> Card<'a> {
    pub fn new(body: CardBody<'a>) -> Self {
        Self {
            id: ElementId::new(),
            header: None,
            body,
            footer: None,
            theme: Theme::default(),
        }
    }

    pub fn id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    pub fn header(mut self, header: CardHeader<'a>) -> Self {
        self.header = Some(header);
        self
    }

    pub fn footer(mut self, footer: CardFooter<'a>) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows needed at `width` columns, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(4);
        let header = self.header.as_ref().map_or(0, |header| header.height(inner));
        let footer = if self.footer.is_some() { CardFooter::HEIGHT } else { 0 };
        2u16.saturating_add(header)
            .saturating_add(self.body.height(inner))
            .saturating_add(footer)
    }
}

impl StatefulWidget for Card<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        let area = Rect::new(area.x, area.y, area.width, self.height(area.width).min(area.height));
        if area.is_empty() {
            return;
        }
        Block::bordered()
            .border_style(Style::new().fg(self.theme.border()))
            .style(Style::new().bg(self.theme.surface()))
            .render(area, buf);

        let mut region = Element::new(self.id, Role::Region, area);
        if let Some(label) = self.header.as_ref().and_then(CardHeader::label) {
            region = region.label(label);
        }
        surface.register(region);

        let inner = area.inner(Margin::new(2, 1));
        let header_rows = self.header.as_ref().map_or(0, |header| header.height(inner.width));
        let footer_rows = if self.footer.is_some() { CardFooter::HEIGHT } else { 0 };
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(header_rows),
            Constraint::Min(0),
            Constraint::Length(footer_rows),
        ])
        .areas(inner);

        if let Some(header) = self.header {
            header.theme(self.theme).render(header_area, buf, surface);
        }
        self.body.theme(self.theme).render(body_area, buf);
        if let Some(footer) = self.footer {
            footer.theme(self.theme).render(footer_area, buf);
        }
    }
}
