pub(crate) mod accounts;
pub(crate) mod cards;
pub(crate) mod dashboard;
pub(crate) mod payments;
pub(crate) mod settings;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Bordered block with a dim bold title, highlighted when it has focus.
pub(crate) fn panel(title: impl Into<String>, focused: bool) -> Block<'static> {
    let border = if focused { theme::ACCENT } else { theme::OVERLAY };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {} ", title.into()), theme::title_style()))
}

/// Centered placeholder text inside a titled panel.
pub(crate) fn render_empty(f: &mut Frame, area: Rect, title: impl Into<String>, lines: &[&str]) {
    let mut text = vec![Line::from("")];
    text.extend(
        lines
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), theme::dim_style()))),
    );
    f.render_widget(Paragraph::new(text).centered().block(panel(title, false)), area);
}
