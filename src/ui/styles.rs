use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// Clinic palette
pub const PAGE_BG: Color = Color::from_rgb(0.937, 0.965, 1.0); // #EFF6FF
pub const SURFACE: Color = Color::WHITE;
pub const TEXT: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937
pub const SUBTEXT: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563
pub const MUTED: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6B7280
pub const BORDER: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB
pub const BLUE: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3B82F6
pub const BLUE_DARK: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563EB
pub const BLUE_TINT: Color = Color::from_rgb(0.859, 0.918, 0.996); // #DBEAFE
pub const BLUE_TINT_HOVER: Color = Color::from_rgb(0.749, 0.859, 0.996); // #BFDBFE
pub const BLUE_WASH: Color = Color::from_rgb(0.937, 0.965, 1.0); // #EFF6FF
pub const PURPLE: Color = Color::from_rgb(0.659, 0.333, 0.969); // #A855F7
pub const PURPLE_TINT: Color = Color::from_rgb(0.953, 0.910, 1.0); // #F3E8FF
pub const PURPLE_TINT_HOVER: Color = Color::from_rgb(0.914, 0.835, 1.0); // #E9D5FF
pub const GREEN: Color = Color::from_rgb(0.133, 0.773, 0.369); // #22C55E
pub const GREEN_TINT: Color = Color::from_rgb(0.863, 0.988, 0.906); // #DCFCE7

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: color.a * alpha, ..color }
}

/// How an unselected or selected date chip is painted. Unselected chips
/// alternate between the blue and purple accents by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTone {
    Selected,
    Blue,
    Purple,
}

impl ChipTone {
    pub fn for_date(index: usize, selected: bool) -> Self {
        if selected {
            ChipTone::Selected
        } else if index % 2 == 0 {
            ChipTone::Blue
        } else {
            ChipTone::Purple
        }
    }
}

pub struct BackgroundStyle;
impl container::StyleSheet for BackgroundStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(PAGE_BG)),
            ..Default::default()
        }
    }
}

pub struct NavBarStyle;
impl container::StyleSheet for NavBarStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(with_alpha(SURFACE, 0.8))),
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
            },
            ..Default::default()
        }
    }
}

pub struct PanelStyle;
impl container::StyleSheet for PanelStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(with_alpha(SURFACE, 0.85))),
            border: Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                offset: Vector::new(0.0, 12.0),
                blur_radius: 30.0,
            },
            ..Default::default()
        }
    }
}

pub struct LinkStyle;
impl button::StyleSheet for LinkStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: SUBTEXT,
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: BLUE_DARK,
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
}

pub struct DoctorCardStyle {
    pub selected: bool,
}
impl button::StyleSheet for DoctorCardStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let (background, border) = if self.selected {
            (BLUE_WASH, BLUE)
        } else {
            (SURFACE, BORDER)
        };
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color: TEXT,
            border: Border {
                color: border,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        if self.selected {
            return self.active(style);
        }
        button::Appearance {
            border: Border {
                color: BLUE_TINT_HOVER,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct DateChipStyle {
    pub tone: ChipTone,
}
impl DateChipStyle {
    fn paint(&self, hovered: bool) -> button::Appearance {
        let (background, text_color, shadow) = match self.tone {
            ChipTone::Selected => (
                BLUE,
                Color::WHITE,
                Shadow {
                    color: with_alpha(PURPLE, 0.35),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 10.0,
                },
            ),
            ChipTone::Blue => (
                if hovered { BLUE_TINT_HOVER } else { BLUE_TINT },
                SUBTEXT,
                Shadow::default(),
            ),
            ChipTone::Purple => (
                if hovered { PURPLE_TINT_HOVER } else { PURPLE_TINT },
                SUBTEXT,
                Shadow::default(),
            ),
        };
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            shadow,
            ..Default::default()
        }
    }
}
impl button::StyleSheet for DateChipStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        self.paint(false)
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        self.paint(true)
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct TimeChipStyle {
    pub selected: bool,
}
impl button::StyleSheet for TimeChipStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        if self.selected {
            button::Appearance {
                background: Some(Background::Color(PURPLE)),
                text_color: Color::WHITE,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                shadow: Shadow {
                    color: with_alpha(BLUE, 0.35),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 10.0,
                },
                ..Default::default()
            }
        } else {
            button::Appearance {
                background: Some(Background::Color(SURFACE)),
                text_color: MUTED,
                border: Border {
                    color: BLUE_TINT_HOVER,
                    width: 2.0,
                    radius: 12.0.into(),
                },
                ..Default::default()
            }
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        if self.selected {
            return self.active(style);
        }
        button::Appearance {
            border: Border {
                color: with_alpha(BLUE, 0.6),
                width: 2.0,
                radius: 12.0.into(),
            },
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct InputStyle;
impl text_input::StyleSheet for InputStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SURFACE),
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: Color::from_rgb(0.820, 0.835, 0.859),
            },
            icon_color: MUTED,
        }
    }
    fn focused(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SURFACE),
            border: Border {
                radius: 12.0.into(),
                width: 2.0,
                color: BLUE,
            },
            icon_color: BLUE,
        }
    }
    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgb(0.612, 0.639, 0.686)
    }
    fn value_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgb(0.067, 0.094, 0.153)
    }
    fn disabled_color(&self, _style: &Self::Style) -> Color {
        MUTED
    }
    fn selection_color(&self, _style: &Self::Style) -> Color {
        with_alpha(BLUE, 0.25)
    }
    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }
}

pub struct PrimaryButtonStyle;
impl button::StyleSheet for PrimaryButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(BLUE_DARK)),
            text_color: Color::WHITE,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.114, 0.306, 0.847))),
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(with_alpha(BLUE_DARK, 0.5))),
            text_color: with_alpha(Color::WHITE, 0.8),
            shadow: Shadow::default(),
            ..active
        }
    }
}

pub struct BackdropStyle;
impl container::StyleSheet for BackdropStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.2))),
            ..Default::default()
        }
    }
}

/// Notice card and its check badge fade with the appear animation.
pub struct NoticeCardStyle {
    pub opacity: f32,
}
impl button::StyleSheet for NoticeCardStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(with_alpha(SURFACE, self.opacity))),
            text_color: with_alpha(TEXT, self.opacity),
            border: Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15 * self.opacity),
                offset: Vector::new(0.0, 10.0),
                blur_radius: 25.0,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct CheckBadgeStyle {
    pub opacity: f32,
}
impl container::StyleSheet for CheckBadgeStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(with_alpha(GREEN_TINT, self.opacity))),
            text_color: Some(with_alpha(GREEN, self.opacity)),
            border: Border {
                radius: 64.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselected_date_chips_alternate_by_index() {
        assert_eq!(ChipTone::for_date(0, false), ChipTone::Blue);
        assert_eq!(ChipTone::for_date(1, false), ChipTone::Purple);
        assert_eq!(ChipTone::for_date(2, false), ChipTone::Blue);
        assert_eq!(ChipTone::for_date(9, false), ChipTone::Purple);
    }

    #[test]
    fn test_selected_date_chip_ignores_parity() {
        assert_eq!(ChipTone::for_date(0, true), ChipTone::Selected);
        assert_eq!(ChipTone::for_date(7, true), ChipTone::Selected);
    }
}
