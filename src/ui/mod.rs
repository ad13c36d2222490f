// file: src/ui/mod.rs

use iced::font::Family;
use iced::widget::text;
use iced::{Color, Element, Font};

use crate::messages::Message;
use crate::models::{FontSetting, ThemeColor};

pub mod dial;
pub mod navigation;
pub mod settings;
pub mod styles;

// --- NIGHT PALETTE ---
pub mod palette {
    use iced::Color;

    pub const DEEP_NAVY: Color = Color::from_rgb(0.118, 0.129, 0.247); // #1E213F
    pub const MIDNIGHT: Color = Color::from_rgb(0.086, 0.098, 0.196); // #161932
    pub const SOFT_INDIGO: Color = Color::from_rgb(0.843, 0.878, 1.0); // #D7E0FF
    pub const MISTY: Color = Color::from_rgb(0.937, 0.945, 0.980); // #EFF1FA
    pub const DIVIDER: Color = Color::from_rgb(0.890, 0.882, 0.882); // #E3E1E1
    pub const WHITE: Color = Color::WHITE;
}

pub fn theme_color(theme: ThemeColor) -> Color {
    let (r, g, b) = theme.rgb();
    Color::from_rgb8(r, g, b)
}

/// Slightly lighter accent for hover states
pub fn theme_hover_color(theme: ThemeColor) -> Color {
    let base = theme_color(theme);
    Color::from_rgb(
        base.r + (1.0 - base.r) * 0.25,
        base.g + (1.0 - base.g) * 0.25,
        base.b + (1.0 - base.b) * 0.25,
    )
}

pub fn font_for(setting: FontSetting) -> Font {
    match setting {
        FontSetting::Sans => Font::DEFAULT,
        FontSetting::Slab => Font {
            family: Family::Serif,
            ..Font::DEFAULT
        },
        FontSetting::Mono => Font::MONOSPACE,
    }
}

// Helper for the spaced-out uppercase headings
pub fn sub_heading(label: &str, font: Font) -> Element<'_, Message> {
    text(label.to_uppercase())
        .size(13)
        .font(font)
        .style(palette::MIDNIGHT)
        .into()
}
