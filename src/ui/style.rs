//! Dark slate palette and widget styles for the results view.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub fn background() -> Color {
    Color::from_rgb8(0x0F, 0x17, 0x2A)
}

pub fn surface() -> Color {
    Color::from_rgb8(0x1E, 0x29, 0x3B)
}

pub fn surface_deep() -> Color {
    Color::from_rgb8(0x0B, 0x12, 0x20)
}

pub fn border_color() -> Color {
    Color::from_rgb8(0x33, 0x41, 0x55)
}

pub fn text_primary() -> Color {
    Color::from_rgb8(0xE2, 0xE8, 0xF0)
}

pub fn text_muted() -> Color {
    Color::from_rgb8(0x94, 0xA3, 0xB8)
}

pub fn indigo() -> Color {
    Color::from_rgb8(0x63, 0x66, 0xF1)
}

pub fn indigo_bright() -> Color {
    Color::from_rgb8(0x81, 0x8C, 0xF8)
}

pub fn emerald() -> Color {
    Color::from_rgb8(0x34, 0xD3, 0x99)
}

pub fn red() -> Color {
    Color::from_rgb8(0xF8, 0x71, 0x71)
}

pub fn amber() -> Color {
    Color::from_rgb8(0xFB, 0xBF, 0x24)
}

pub fn root(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background())),
        text_color: Some(text_primary()),
        ..container::Style::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface())),
        border: Border {
            color: border_color(),
            width: 1.0,
            radius: 16.0.into(),
        },
        text_color: Some(text_primary()),
        ..container::Style::default()
    }
}

/// Darker inset used for the verbatim prompt text.
pub fn prompt_body(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_deep())),
        border: Border {
            color: border_color(),
            width: 1.0,
            radius: 12.0.into(),
        },
        text_color: Some(text_primary()),
        ..container::Style::default()
    }
}

pub fn drop_zone(_theme: &Theme, hover: bool) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface())),
        border: Border {
            color: if hover { indigo_bright() } else { border_color() },
            width: 2.0,
            radius: 16.0.into(),
        },
        text_color: Some(text_muted()),
        ..container::Style::default()
    }
}

pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..red()
        })),
        border: Border {
            color: red(),
            width: 1.0,
            radius: 12.0.into(),
        },
        text_color: Some(red()),
        ..container::Style::default()
    }
}

pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..amber()
        })),
        border: Border {
            color: amber(),
            width: 1.0,
            radius: 12.0.into(),
        },
        text_color: Some(amber()),
        ..container::Style::default()
    }
}

pub fn keyword_tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_deep())),
        border: Border {
            color: border_color(),
            width: 1.0,
            radius: 999.0.into(),
        },
        text_color: Some(text_primary()),
        ..container::Style::default()
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => indigo_bright(),
        button::Status::Disabled => border_color(),
        _ => indigo(),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            text_muted()
        } else {
            Color::WHITE
        },
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

pub fn copy_button(_theme: &Theme, status: button::Status, copied: bool) -> button::Style {
    let (background, text_color) = if copied {
        (
            Color {
                a: 0.2,
                ..emerald()
            },
            emerald(),
        )
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => {
                (border_color(), text_primary())
            }
            _ => (surface_deep(), text_muted()),
        }
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

pub fn remove_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => red(),
        _ => Color { a: 0.8, ..red() },
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
