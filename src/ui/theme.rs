use ratatui::style::{Color, Modifier, Style};

use crate::format::Badge;
use crate::models::{Direction, Trend};

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn section_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn direction_style(direction: Direction) -> Style {
    match direction {
        Direction::Income => Style::default().fg(GREEN),
        Direction::Expense => Style::default().fg(RED),
    }
}

/// Green for money held, red for money owed.
pub(crate) fn balance_style(negative: bool) -> Style {
    if negative {
        Style::default().fg(RED)
    } else {
        Style::default().fg(GREEN)
    }
}

pub(crate) fn trend_style(trend: Trend) -> Style {
    match trend {
        Trend::Up => Style::default().fg(GREEN),
        Trend::Down => Style::default().fg(RED),
        Trend::Neutral => dim_style(),
    }
}

pub(crate) fn badge_style(badge: Badge) -> Style {
    match badge {
        Badge::Default => Style::default().fg(HEADER_BG).bg(GREEN),
        Badge::Secondary => Style::default().fg(HEADER_BG).bg(YELLOW),
        Badge::Destructive => Style::default().fg(HEADER_BG).bg(RED),
    }
}

/// Row style for a table cursor and zebra striping.
pub(crate) fn row_style(index: usize, cursor: usize, focused: bool) -> Style {
    if focused && index == cursor {
        selected_style()
    } else if index % 2 == 1 {
        alt_row_style()
    } else {
        normal_style()
    }
}
