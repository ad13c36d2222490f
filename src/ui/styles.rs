use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::palette::{DEEP_NAVY, MIDNIGHT, MISTY, SOFT_INDIGO, WHITE};

pub struct BackgroundStyle;
impl container::StyleSheet for BackgroundStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(DEEP_NAVY)),
            text_color: Some(SOFT_INDIGO),
            ..Default::default()
        }
    }
}

/// Rounded pill behind the session tabs
pub struct NavBarStyle;
impl container::StyleSheet for NavBarStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(MIDNIGHT)),
            border: Border {
                radius: 31.5.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct ModalStyle;
impl container::StyleSheet for ModalStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(WHITE)),
            text_color: Some(MIDNIGHT),
            border: Border {
                radius: 25.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                offset: Vector::new(0.0, 8.0),
                blur_radius: 30.0,
            },
        }
    }
}

pub struct SessionTabStyle {
    pub selected: bool,
    pub accent: Color,
}
impl button::StyleSheet for SessionTabStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let (background, text_color) = if self.selected {
            (Some(Background::Color(self.accent)), DEEP_NAVY)
        } else {
            (None, Color { a: 0.4, ..SOFT_INDIGO })
        };
        button::Appearance {
            background,
            text_color,
            border: Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        if self.selected {
            active
        } else {
            button::Appearance {
                text_color: SOFT_INDIGO,
                ..active
            }
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

/// Borderless text button used for START / PAUSE / RESET / STOP ALARM
pub struct DialActionStyle {
    pub accent: Color,
}
impl button::StyleSheet for DialActionStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: SOFT_INDIGO,
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: self.accent,
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
}

/// Round swatch for font and color choices
pub struct SwatchStyle {
    pub background: Color,
    pub text_color: Color,
}
impl button::StyleSheet for SwatchStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.background)),
            text_color: self.text_color,
            border: Border {
                radius: 20.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            border: Border {
                radius: 20.0.into(),
                width: 2.0,
                color: MISTY,
            },
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

/// The filled pill of the Apply button
pub struct PrimaryButtonStyle {
    pub accent: Color,
    pub hover: Color,
}
impl button::StyleSheet for PrimaryButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.accent)),
            text_color: WHITE,
            border: Border {
                radius: 26.5.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.hover)),
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
}

/// Small arrow and close buttons in the editor
pub struct IconButtonStyle;
impl button::StyleSheet for IconButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: Color { a: 0.5, ..DEEP_NAVY },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: DEEP_NAVY,
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
}
