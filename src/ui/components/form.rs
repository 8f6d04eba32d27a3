//! Form controls.
//!
//! Boxed fields ([`Input`], [`TextArea`], [`Select`]) share the same chrome:
//! an optional label row with a required marker, a bordered box that shows a
//! focus ring when the surface focuses the field, and one message row where
//! an error replaces the helper text.

use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, StatefulWidget, Widget, Wrap};

use crate::ui::layout::line_width;
use crate::ui::style::{
    error_style, field_border, field_text, helper_style, label_style, placeholder_style,
    required_style,
};
use crate::ui::surface::{Element, ElementId, Role, Surface};
use crate::ui::theme::Theme;

const REQUIRED_MARKER: &str = " *";
const SELECT_ARROW: &str = "▾";
const MASK_CHAR: char = '•';
/// Columns the helper text of a checkbox or radio is indented by.
const CHOICE_INDENT: u16 = 4;

/// Label and message settings common to every field.
#[derive(Debug, Clone, Default)]
struct FieldChrome<'a> {
    label: Option<Cow<'a, str>>,
    error: Option<Cow<'a, str>>,
    helper_text: Option<Cow<'a, str>>,
    required: bool,
    disabled: bool,
    theme: Theme,
}

impl FieldChrome<'_> {
    fn label_rows(&self) -> u16 {
        u16::from(self.label.is_some())
    }

    fn message_rows(&self) -> u16 {
        u16::from(self.message().is_some())
    }

    fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    fn message(&self) -> Option<(&str, Style)> {
        match (&self.error, &self.helper_text) {
            (Some(error), _) => Some((error.as_ref(), error_style(&self.theme))),
            (None, Some(helper)) => Some((helper.as_ref(), helper_style(&self.theme))),
            (None, None) => None,
        }
    }

    fn label_line(&self) -> Option<Line<'_>> {
        let label = self.label.as_ref()?;
        let mut spans = vec![Span::styled(label.as_ref(), label_style(&self.theme))];
        if self.required {
            spans.push(Span::styled(REQUIRED_MARKER, required_style()));
        }
        Some(Line::from(spans))
    }

    /// Draw the label row, return the remaining area.
    fn render_label(&self, area: Rect, buf: &mut Buffer) -> Rect {
        match self.label_line() {
            Some(line) if area.height > 0 => {
                buf.set_line(area.x, area.y, &line, area.width);
                Rect::new(area.x, area.y + 1, area.width, area.height - 1)
            }
            _ => area,
        }
    }

    fn render_message(&self, x: u16, y: u16, width: u16, bottom: u16, buf: &mut Buffer) {
        if let Some((text, style)) = self.message() {
            if y < bottom && width > 0 {
                buf.set_stringn(x, y, text, width as usize, style);
            }
        }
    }

    fn element(&self, id: ElementId, role: Role, rect: Rect) -> Element {
        let mut element = Element::new(id, role, rect)
            .focusable(true)
            .disabled(self.disabled)
            .invalid(self.is_invalid())
            .required(self.required);
        if let Some(label) = &self.label {
            element = element.label(label.as_ref());
        }
        element
    }
}

macro_rules! chrome_builders {
    ($lt:lifetime) => {
        pub fn label(mut self, label: impl Into<Cow<$lt, str>>) -> Self {
            self.chrome.label = Some(label.into());
            self
        }

        /// Error text replaces the helper text and marks the field invalid.
        pub fn error(mut self, error: impl Into<Cow<$lt, str>>) -> Self {
            self.chrome.error = Some(error.into());
            self
        }

        pub fn helper_text(mut self, helper: impl Into<Cow<$lt, str>>) -> Self {
            self.chrome.helper_text = Some(helper.into());
            self
        }

        pub fn required(mut self, required: bool) -> Self {
            self.chrome.required = required;
            self
        }

        pub fn disabled(mut self, disabled: bool) -> Self {
            self.chrome.disabled = disabled;
            self
        }

        pub fn theme(mut self, theme: Theme) -> Self {
            self.chrome.theme = theme;
            self
        }

        pub fn id(mut self, id: ElementId) -> Self {
            self.id = id;
            self
        }

        pub fn element_id(&self) -> ElementId {
            self.id
        }
    };
}

/// Draw the chrome around a boxed field and return the box interior.
fn render_boxed(
    chrome: &FieldChrome<'_>,
    id: ElementId,
    role: Role,
    box_rows: u16,
    area: Rect,
    buf: &mut Buffer,
    surface: &mut Surface,
) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    let rest = chrome.render_label(area, buf);
    let box_area = Rect::new(rest.x, rest.y, rest.width, box_rows.min(rest.height));
    if box_area.is_empty() {
        return None;
    }
    let focused = surface.focused() == Some(id);
    Block::bordered()
        .border_style(field_border(&chrome.theme, focused, chrome.is_invalid(), chrome.disabled))
        .render(box_area, buf);
    surface.register(chrome.element(id, role, box_area));

    chrome.render_message(rest.x, box_area.bottom(), rest.width, rest.bottom(), buf);
    Some(box_area.inner(Margin::new(1, 1)))
}

/// Single-line text field.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    id: ElementId,
    value: Cow<'a, str>,
    placeholder: Option<Cow<'a, str>>,
    masked: bool,
    chrome: FieldChrome<'a>,
}

impl<'a> Input<'a> {
    pub fn new(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: ElementId::new(),
            value: value.into(),
            placeholder: None,
            masked: false,
            chrome: FieldChrome::default(),
        }
    }

    chrome_builders!('a);

    pub fn placeholder(mut self, placeholder: impl Into<Cow<'a, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Show the value as bullets, for passwords.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn height(&self) -> u16 {
        self.chrome.label_rows() + 3 + self.chrome.message_rows()
    }

    fn display(&self) -> Span<'_> {
        if self.value.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                return Span::styled(placeholder.as_ref(), placeholder_style());
            }
        }
        let style = field_text(&self.chrome.theme, self.chrome.disabled);
        if self.masked {
            let bullets: String = self.value.chars().map(|_| MASK_CHAR).collect();
            Span::styled(bullets, style)
        } else {
            Span::styled(self.value.as_ref(), style)
        }
    }
}

impl StatefulWidget for Input<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        let Some(inner) = render_boxed(&self.chrome, self.id, Role::TextBox, 3, area, buf, surface)
        else {
            return;
        };
        if !inner.is_empty() {
            buf.set_span(inner.x, inner.y, &self.display(), inner.width);
        }
    }
}

/// Multi-line text field with a fixed number of visible rows.
#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    id: ElementId,
    value: Text<'a>,
    placeholder: Option<Cow<'a, str>>,
    rows: u16,
    chrome: FieldChrome<'a>,
}

impl<'a> TextArea<'a> {
    pub const DEFAULT_ROWS: u16 = 3;

    pub fn new(value: impl Into<Text<'a>>) -> Self {
        Self {
            id: ElementId::new(),
            value: value.into(),
            placeholder: None,
            rows: Self::DEFAULT_ROWS,
            chrome: FieldChrome::default(),
        }
    }

    chrome_builders!('a);

    pub fn placeholder(mut self, placeholder: impl Into<Cow<'a, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn height(&self) -> u16 {
        self.chrome
            .label_rows()
            .saturating_add(self.rows.saturating_add(2))
            .saturating_add(self.chrome.message_rows())
    }

    fn is_empty(&self) -> bool {
        self.value.lines.iter().all(|line| line.width() == 0)
    }
}

impl StatefulWidget for TextArea<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        let Some(inner) = render_boxed(
            &self.chrome,
            self.id,
            Role::TextBox,
            self.rows.saturating_add(2),
            area,
            buf,
            surface,
        ) else {
            return;
        };
        let paragraph = match (&self.placeholder, self.is_empty()) {
            (Some(placeholder), true) => {
                Paragraph::new(placeholder.as_ref()).style(placeholder_style())
            }
            _ => Paragraph::new(self.value.clone())
                .style(field_text(&self.chrome.theme, self.chrome.disabled)),
        };
        paragraph.wrap(Wrap { trim: false }).render(inner, buf);
    }
}

/// One entry of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<'a> {
    pub value: Cow<'a, str>,
    pub label: Cow<'a, str>,
}

impl<'a> SelectOption<'a> {
    pub fn new(value: impl Into<Cow<'a, str>>, label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Closed dropdown showing the selected option.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    id: ElementId,
    options: Vec<SelectOption<'a>>,
    selected: Option<usize>,
    placeholder: Option<Cow<'a, str>>,
    chrome: FieldChrome<'a>,
}

impl<'a> Select<'a> {
    pub fn new(options: Vec<SelectOption<'a>>) -> Self {
        Self {
            id: ElementId::new(),
            options,
            selected: None,
            placeholder: None,
            chrome: FieldChrome::default(),
        }
    }

    chrome_builders!('a);

    /// Select the option at `index`; out of range shows the placeholder.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<Cow<'a, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn selected_option(&self) -> Option<&SelectOption<'a>> {
        self.selected.and_then(|index| self.options.get(index))
    }

    pub fn height(&self) -> u16 {
        self.chrome.label_rows() + 3 + self.chrome.message_rows()
    }
}

impl StatefulWidget for Select<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        let Some(inner) = render_boxed(&self.chrome, self.id, Role::ComboBox, 3, area, buf, surface)
        else {
            return;
        };
        if inner.width < 2 {
            return;
        }
        let text_width = inner.width - 2;
        match (self.selected_option(), &self.placeholder) {
            (Some(option), _) => {
                let style = field_text(&self.chrome.theme, self.chrome.disabled);
                buf.set_stringn(inner.x, inner.y, option.label.as_ref(), text_width as usize, style);
            }
            (None, Some(placeholder)) => {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    placeholder.as_ref(),
                    text_width as usize,
                    placeholder_style(),
                );
            }
            (None, None) => {}
        }
        buf.set_string(
            inner.right() - 1,
            inner.y,
            SELECT_ARROW,
            helper_style(&self.chrome.theme),
        );
    }
}

/// Draw a `[x] label` style row plus its message, registering the control.
fn render_choice(
    chrome: &FieldChrome<'_>,
    id: ElementId,
    role: Role,
    checked: bool,
    area: Rect,
    buf: &mut Buffer,
    surface: &mut Surface,
) {
    if area.is_empty() {
        return;
    }
    let marker = match (role, checked) {
        (Role::Radio, true) => "(•)",
        (Role::Radio, false) => "( )",
        (_, true) => "[x]",
        (_, false) => "[ ]",
    };
    let focused = surface.focused() == Some(id);
    let mut marker_style = if chrome.is_invalid() {
        error_style(&chrome.theme)
    } else if checked {
        Style::new().fg(chrome.theme.primary())
    } else {
        Style::new().fg(chrome.theme.input_border())
    };
    if focused {
        marker_style = marker_style.add_modifier(Modifier::REVERSED);
    }
    if chrome.disabled {
        marker_style = marker_style.add_modifier(Modifier::DIM);
    }

    let mut spans = vec![Span::styled(marker, marker_style), Span::raw(" ")];
    if let Some(label) = &chrome.label {
        spans.push(Span::styled(
            label.as_ref(),
            field_text(&chrome.theme, chrome.disabled),
        ));
    }
    if chrome.required {
        spans.push(Span::styled(REQUIRED_MARKER, required_style()));
    }
    let line = Line::from(spans);
    let width = line_width(&line).min(area.width);
    buf.set_line(area.x, area.y, &line, area.width);
    surface.register(
        chrome
            .element(id, role, Rect::new(area.x, area.y, width, 1))
            .checked(checked),
    );

    let indent = CHOICE_INDENT.min(area.width);
    chrome.render_message(
        area.x + indent,
        area.y + 1,
        area.width - indent,
        area.bottom(),
        buf,
    );
}

/// Two-state box with a label.
#[derive(Debug, Clone)]
pub struct Checkbox<'a> {
    id: ElementId,
    checked: bool,
    chrome: FieldChrome<'a>,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: ElementId::new(),
            checked: false,
            chrome: FieldChrome {
                label: Some(label.into()),
                ..FieldChrome::default()
            },
        }
    }

    chrome_builders!('a);

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn height(&self) -> u16 {
        1 + self.chrome.message_rows()
    }
}

impl StatefulWidget for Checkbox<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        render_choice(
            &self.chrome,
            self.id,
            Role::Checkbox,
            self.checked,
            area,
            buf,
            surface,
        );
    }
}

/// One option of a mutually exclusive set.
#[derive(Debug, Clone)]
pub struct Radio<'a> {
    id: ElementId,
    checked: bool,
    chrome: FieldChrome<'a>,
}

impl<'a> Radio<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: ElementId::new(),
            checked: false,
            chrome: FieldChrome {
                label: Some(label.into()),
                ..FieldChrome::default()
            },
        }
    }

    chrome_builders!('a);

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn height(&self) -> u16 {
        1 + self.chrome.message_rows()
    }
}

impl StatefulWidget for Radio<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        render_choice(
            &self.chrome,
            self.id,
            Role::Radio,
            self.checked,
            area,
            buf,
            surface,
        );
    }
}

/// A control inside a [`FormGroup`].
#[derive(Debug, Clone)]
pub enum FormControl<'a> {
    Checkbox(Checkbox<'a>),
    Radio(Radio<'a>),
}

impl<'a> FormControl<'a> {
    fn height(&self) -> u16 {
        match self {
            FormControl::Checkbox(checkbox) => checkbox.height(),
            FormControl::Radio(radio) => radio.height(),
        }
    }

    fn with_theme(self, theme: Theme) -> Self {
        match self {
            FormControl::Checkbox(checkbox) => FormControl::Checkbox(checkbox.theme(theme)),
            FormControl::Radio(radio) => FormControl::Radio(radio.theme(theme)),
        }
    }
}

impl<'a> From<Checkbox<'a>> for FormControl<'a> {
    fn from(checkbox: Checkbox<'a>) -> Self {
        FormControl::Checkbox(checkbox)
    }
}

impl<'a> From<Radio<'a>> for FormControl<'a> {
    fn from(radio: Radio<'a>) -> Self {
        FormControl::Radio(radio)
    }
}

impl StatefulWidget for FormControl<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        match self {
            FormControl::Checkbox(checkbox) => checkbox.render(area, buf, surface),
            FormControl::Radio(radio) => radio.render(area, buf, surface),
        }
    }
}

/// Legend followed by a stack of checkboxes or radios.
#[derive(Debug, Clone)]
pub struct FormGroup<'a> {
    id: ElementId,
    controls: Vec<FormControl<'a>>,
    chrome: FieldChrome<'a>,
}

impl<'a> FormGroup<'a> {
    pub fn new(legend: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: ElementId::new(),
            controls: Vec::new(),
            chrome: FieldChrome {
                label: Some(legend.into()),
                ..FieldChrome::default()
            },
        }
    }

    chrome_builders!('a);

    pub fn control(mut self, control: impl Into<FormControl<'a>>) -> Self {
        self.controls.push(control.into());
        self
    }

    pub fn height(&self) -> u16 {
        self.controls
            .iter()
            .map(FormControl::height)
            .fold(self.chrome.label_rows(), u16::saturating_add)
            .saturating_add(self.chrome.message_rows())
    }
}

impl StatefulWidget for FormGroup<'_> {
    type State = Surface;

    fn render(self, area: Rect, buf: &mut Buffer, surface: &mut Surface) {
        if area.is_empty() {
            return;
        }
        let height = self.height().min(area.height);
        let group = Rect::new(area.x, area.y, area.width, height);
        let mut element = Element::new(self.id, Role::Group, group)
            .invalid(self.chrome.is_invalid())
            .required(self.chrome.required)
            .disabled(self.chrome.disabled);
        if let Some(legend) = &self.chrome.label {
            element = element.label(legend.as_ref());
        }
        surface.register(element);

        let mut rest = self.chrome.render_label(group, buf);
        for control in self.controls {
            let rows = control.height().min(rest.height);
            if rows == 0 {
                break;
            }
            let control = if self.chrome.disabled {
                disable(control)
            } else {
                control
            };
            control
                .with_theme(self.chrome.theme)
                .render(Rect::new(rest.x, rest.y, rest.width, rows), buf, surface);
            rest = Rect::new(rest.x, rest.y + rows, rest.width, rest.height - rows);
        }
        self.chrome
            .render_message(rest.x, rest.y, rest.width, rest.bottom(), buf);
    }
}

fn disable(control: FormControl<'_>) -> FormControl<'_> {
    match control {
        FormControl::Checkbox(checkbox) => FormControl::Checkbox(checkbox.disabled(true)),
        FormControl::Radio(radio) => FormControl::Radio(radio.disabled(true)),
    }
}
