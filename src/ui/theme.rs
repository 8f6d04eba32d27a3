use ratatui::style::Color;

use crate::config::ColorScheme;

pub const BRAND_PRIMARY: Color = Color::Rgb(0x52, 0x00, 0xff);
pub const BRAND_PRIMARY_DARK: Color = Color::Rgb(0x7d, 0x3f, 0xff);
pub const BRAND_PRIMARY_LIGHT: Color = Color::Rgb(0x99, 0x66, 0xff);
pub const BRAND_ACCENT: Color = Color::Rgb(0xf5, 0xe9, 0x42);

pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GRAY_50: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const GRAY_200: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub const GRAY_300: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const GRAY_400: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const GRAY_500: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GRAY_600: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const GRAY_800: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27);

pub const RED_100: Color = Color::Rgb(0xfe, 0xe2, 0xe2);
pub const RED_200: Color = Color::Rgb(0xfe, 0xca, 0xca);
pub const RED_600: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const RED_800: Color = Color::Rgb(0x99, 0x1b, 0x1b);
pub const RED_900: Color = Color::Rgb(0x7f, 0x1d, 0x1d);

pub const GREEN_100: Color = Color::Rgb(0xdc, 0xfc, 0xe7);
pub const GREEN_200: Color = Color::Rgb(0xbb, 0xf7, 0xd0);
pub const GREEN_600: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const GREEN_800: Color = Color::Rgb(0x16, 0x65, 0x34);
pub const GREEN_900: Color = Color::Rgb(0x14, 0x53, 0x2d);

pub const YELLOW_100: Color = Color::Rgb(0xfe, 0xf9, 0xc3);
pub const YELLOW_200: Color = Color::Rgb(0xfe, 0xf0, 0x8a);
pub const YELLOW_600: Color = Color::Rgb(0xca, 0x8a, 0x04);
pub const YELLOW_800: Color = Color::Rgb(0x85, 0x4d, 0x0e);
pub const YELLOW_900: Color = Color::Rgb(0x71, 0x3f, 0x12);

pub const BLUE_100: Color = Color::Rgb(0xdb, 0xea, 0xfe);
pub const BLUE_200: Color = Color::Rgb(0xbf, 0xdb, 0xfe);
pub const BLUE_600: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const BLUE_800: Color = Color::Rgb(0x1e, 0x40, 0xaf);
pub const BLUE_900: Color = Color::Rgb(0x1e, 0x3a, 0x8a);

/// Resolved color tokens for one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub scheme: ColorScheme,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        scheme: ColorScheme::Light,
    };
    pub const DARK: Theme = Theme {
        scheme: ColorScheme::Dark,
    };

    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    pub fn is_dark(&self) -> bool {
        self.scheme == ColorScheme::Dark
    }

    fn pick(&self, light: Color, dark: Color) -> Color {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }

    /// Background of cards, dialogs and inputs.
    pub fn surface(&self) -> Color {
        self.pick(WHITE, GRAY_900)
    }

    pub fn border(&self) -> Color {
        self.pick(GRAY_200, GRAY_800)
    }

    pub fn input_border(&self) -> Color {
        self.pick(GRAY_300, GRAY_700)
    }

    pub fn text(&self) -> Color {
        self.pick(GRAY_900, GRAY_50)
    }

    pub fn muted(&self) -> Color {
        self.pick(GRAY_600, GRAY_400)
    }

    pub fn primary(&self) -> Color {
        self.pick(BRAND_PRIMARY, BRAND_PRIMARY_DARK)
    }

    /// Focus ring color.
    pub fn ring(&self) -> Color {
        self.pick(BRAND_PRIMARY, BRAND_PRIMARY_LIGHT)
    }

    pub fn error(&self) -> Color {
        self.pick(RED_600, RED_200)
    }
}
