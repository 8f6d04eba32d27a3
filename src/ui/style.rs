//! Variant and size lookup tables.
//!
//! Every component resolves its look through a total function over a closed
//! enum, so there is no styling state anywhere in the library.

use ratatui::style::{Color, Modifier, Style};

use crate::ui::theme::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// Resolved button look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub style: Style,
    /// Columns of padding on each side of the label.
    pub padding: u16,
    /// Outline buttons draw brackets instead of a filled background.
    pub bracketed: bool,
    pub spinner: Style,
}

pub fn button_style(theme: &Theme, variant: ButtonVariant, size: Size, loading: bool) -> ButtonStyle {
    let dark = theme.is_dark();
    let (fg, bg) = match variant {
        ButtonVariant::Primary => (WHITE, Some(BRAND_PRIMARY)),
        ButtonVariant::Secondary if dark => (GRAY_50, Some(GRAY_700)),
        ButtonVariant::Secondary => (GRAY_900, Some(GRAY_200)),
        ButtonVariant::Danger => (WHITE, Some(RED_600)),
        ButtonVariant::Ghost => (theme.text(), None),
        ButtonVariant::Outline if dark => (BRAND_PRIMARY_LIGHT, None),
        ButtonVariant::Outline => (BRAND_PRIMARY, None),
    };

    let mut style = Style::new().fg(fg);
    if let Some(bg) = bg {
        style = style.bg(bg);
    }
    style = match size {
        Size::Sm | Size::Md => style,
        Size::Lg => style.add_modifier(Modifier::BOLD),
    };
    if loading {
        style = style.add_modifier(Modifier::DIM);
    }

    let spinner_color = match variant {
        ButtonVariant::Primary | ButtonVariant::Danger => BRAND_ACCENT,
        _ => theme.primary(),
    };

    ButtonStyle {
        style,
        padding: padding_for(size, 1),
        bracketed: variant == ButtonVariant::Outline,
        spinner: Style::new().fg(spinner_color),
    }
}

/// Resolved badge look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub style: Style,
    pub padding: u16,
}

pub fn badge_style(theme: &Theme, variant: BadgeVariant, size: Size) -> BadgeStyle {
    let (fg, bg) = if theme.is_dark() {
        match variant {
            BadgeVariant::Default => (GRAY_50, GRAY_700),
            BadgeVariant::Primary => (WHITE, BRAND_PRIMARY_DARK),
            BadgeVariant::Success => (GREEN_200, GREEN_900),
            BadgeVariant::Warning => (YELLOW_200, YELLOW_900),
            BadgeVariant::Danger => (RED_200, RED_900),
            BadgeVariant::Info => (BLUE_200, BLUE_900),
        }
    } else {
        match variant {
            BadgeVariant::Default => (GRAY_900, GRAY_200),
            BadgeVariant::Primary => (WHITE, BRAND_PRIMARY),
            BadgeVariant::Success => (GREEN_800, GREEN_100),
            BadgeVariant::Warning => (YELLOW_800, YELLOW_100),
            BadgeVariant::Danger => (RED_800, RED_100),
            BadgeVariant::Info => (BLUE_800, BLUE_100),
        }
    };

    BadgeStyle {
        style: Style::new().fg(fg).bg(bg),
        padding: padding_for(size, 0),
    }
}

/// Resolved alert look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertStyle {
    pub icon: &'static str,
    pub border: Style,
    pub icon_style: Style,
    pub title: Style,
    pub text: Style,
}

pub fn alert_style(theme: &Theme, variant: AlertVariant) -> AlertStyle {
    let dark = theme.is_dark();
    let (icon, accent, title, text) = match variant {
        AlertVariant::Info => ("ℹ", BLUE_600, BLUE_900, BLUE_800),
        AlertVariant::Success => ("✓", GREEN_600, GREEN_900, GREEN_800),
        AlertVariant::Warning => ("⚠", YELLOW_600, YELLOW_900, YELLOW_800),
        AlertVariant::Danger => ("✕", RED_600, RED_900, RED_800),
    };
    let (title, text) = if dark {
        match variant {
            AlertVariant::Info => (BLUE_100, BLUE_200),
            AlertVariant::Success => (GREEN_100, GREEN_200),
            AlertVariant::Warning => (YELLOW_100, YELLOW_200),
            AlertVariant::Danger => (RED_100, RED_200),
        }
    } else {
        (title, text)
    };

    AlertStyle {
        icon,
        border: Style::new().fg(accent),
        icon_style: Style::new().fg(accent),
        title: Style::new().fg(title).add_modifier(Modifier::BOLD),
        text: Style::new().fg(text),
    }
}

/// Border style for a form control.
pub fn field_border(theme: &Theme, focused: bool, invalid: bool, disabled: bool) -> Style {
    let color: Color = if invalid {
        RED_600
    } else if focused {
        theme.ring()
    } else {
        theme.input_border()
    };
    let style = Style::new().fg(color);
    if disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

pub fn field_text(theme: &Theme, disabled: bool) -> Style {
    if disabled {
        Style::new().fg(GRAY_500)
    } else {
        Style::new().fg(theme.text())
    }
}

pub fn label_style(theme: &Theme) -> Style {
    Style::new().fg(theme.text()).add_modifier(Modifier::BOLD)
}

pub fn helper_style(theme: &Theme) -> Style {
    Style::new().fg(theme.muted())
}

pub fn error_style(theme: &Theme) -> Style {
    Style::new().fg(theme.error())
}

pub fn placeholder_style() -> Style {
    Style::new().fg(GRAY_400)
}

/// Required marker next to a label.
pub fn required_style() -> Style {
    Style::new().fg(RED_600)
}

fn padding_for(size: Size, base: u16) -> u16 {
    match size {
        Size::Sm => base,
        Size::Md => base + 1,
        Size::Lg => base + 2,
    }
}
