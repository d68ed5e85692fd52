//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Brand palette: purple to pink on near-black
pub fn folio() -> Theme {
    Theme {
        name: "folio".to_string(),
        display_name: "Folio".to_string(),
        bg_color: Color::Rgb(9, 9, 11),
        surface_color: Color::Rgb(24, 22, 32),
        border_color: Color::Rgb(52, 48, 66),
        text_color: Color::Rgb(228, 228, 231),
        dim_color: Color::Rgb(113, 113, 122),
        title_color: Color::Rgb(250, 250, 250),
        accent_color: Color::Rgb(168, 85, 247),
        accent_alt_color: Color::Rgb(236, 72, 153),
        highlight_color: Color::Rgb(34, 211, 238),
        success_color: Color::Rgb(52, 211, 153),
        warning_color: Color::Rgb(251, 191, 36),
        error_color: Color::Rgb(248, 113, 113),
        scrollbar_bg_color: Color::Rgb(30, 28, 38),
        status_bar_bg_color: Color::Rgb(18, 17, 24),
        glow_color: Color::Rgb(46, 30, 72),
    }
}

/// Native terminal colors
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        surface_color: Color::Black,
        border_color: Color::DarkGray,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        title_color: Color::White,
        accent_color: Color::Magenta,
        accent_alt_color: Color::LightMagenta,
        highlight_color: Color::Cyan,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        scrollbar_bg_color: Color::DarkGray,
        status_bar_bg_color: Color::Reset,
        glow_color: Color::DarkGray,
    }
}

pub fn tokyo_night() -> Theme {
    Theme {
        name: "tokyo_night".to_string(),
        display_name: "Tokyo Night".to_string(),
        bg_color: Color::Rgb(26, 27, 38),
        surface_color: Color::Rgb(36, 40, 59),
        border_color: Color::Rgb(65, 72, 104),
        text_color: Color::Rgb(192, 202, 245),
        dim_color: Color::Rgb(86, 95, 137),
        title_color: Color::Rgb(199, 210, 254),
        accent_color: Color::Rgb(187, 154, 247),
        accent_alt_color: Color::Rgb(247, 118, 142),
        highlight_color: Color::Rgb(125, 207, 255),
        success_color: Color::Rgb(158, 206, 106),
        warning_color: Color::Rgb(224, 175, 104),
        error_color: Color::Rgb(247, 118, 142),
        scrollbar_bg_color: Color::Rgb(41, 46, 66),
        status_bar_bg_color: Color::Rgb(22, 22, 30),
        glow_color: Color::Rgb(52, 59, 88),
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        display_name: "Dracula".to_string(),
        bg_color: Color::Rgb(40, 42, 54),
        surface_color: Color::Rgb(52, 55, 70),
        border_color: Color::Rgb(68, 71, 90),
        text_color: Color::Rgb(248, 248, 242),
        dim_color: Color::Rgb(98, 114, 164),
        title_color: Color::Rgb(248, 248, 242),
        accent_color: Color::Rgb(189, 147, 249),
        accent_alt_color: Color::Rgb(255, 121, 198),
        highlight_color: Color::Rgb(139, 233, 253),
        success_color: Color::Rgb(80, 250, 123),
        warning_color: Color::Rgb(241, 250, 140),
        error_color: Color::Rgb(255, 85, 85),
        scrollbar_bg_color: Color::Rgb(68, 71, 90),
        status_bar_bg_color: Color::Rgb(33, 34, 44),
        glow_color: Color::Rgb(72, 62, 102),
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        bg_color: Color::Rgb(46, 52, 64),
        surface_color: Color::Rgb(59, 66, 82),
        border_color: Color::Rgb(76, 86, 106),
        text_color: Color::Rgb(216, 222, 233),
        dim_color: Color::Rgb(97, 110, 136),
        title_color: Color::Rgb(236, 239, 244),
        accent_color: Color::Rgb(180, 142, 173),
        accent_alt_color: Color::Rgb(191, 97, 106),
        highlight_color: Color::Rgb(136, 192, 208),
        success_color: Color::Rgb(163, 190, 140),
        warning_color: Color::Rgb(235, 203, 139),
        error_color: Color::Rgb(191, 97, 106),
        scrollbar_bg_color: Color::Rgb(59, 66, 82),
        status_bar_bg_color: Color::Rgb(41, 46, 57),
        glow_color: Color::Rgb(67, 76, 94),
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox_dark".to_string(),
        display_name: "Gruvbox Dark".to_string(),
        bg_color: Color::Rgb(40, 40, 40),
        surface_color: Color::Rgb(50, 48, 47),
        border_color: Color::Rgb(80, 73, 69),
        text_color: Color::Rgb(235, 219, 178),
        dim_color: Color::Rgb(146, 131, 116),
        title_color: Color::Rgb(251, 241, 199),
        accent_color: Color::Rgb(211, 134, 155),
        accent_alt_color: Color::Rgb(254, 128, 25),
        highlight_color: Color::Rgb(131, 165, 152),
        success_color: Color::Rgb(184, 187, 38),
        warning_color: Color::Rgb(250, 189, 47),
        error_color: Color::Rgb(251, 73, 52),
        scrollbar_bg_color: Color::Rgb(60, 56, 54),
        status_bar_bg_color: Color::Rgb(29, 32, 33),
        glow_color: Color::Rgb(80, 64, 62),
    }
}
