//! Colors and styles for the interactive table.

use ratatui::style::{Color, Modifier, Style};

/// Span colors, cycled by depth below the root prefix.
pub const PREFIX_COLORS: [u8; 16] = [
    212, // pink
    141, // purple
    75,  // light blue
    81,  // cyan
    120, // light green
    228, // yellow
    216, // orange
    210, // salmon
    177, // light purple
    69,  // blue
    87,  // light cyan
    156, // pale green
    222, // gold
    213, // light pink
    105, // blue-purple
    192, // yellow-green
];

const ACCENT: Color = Color::Indexed(39);
const WHITE: Color = Color::Indexed(15);
const SELECTED_BG: Color = Color::Indexed(57);

/// Color for the span column of prefix `bits`.
pub fn prefix_color(bits: u8, initial_prefix: u8) -> Color {
    let idx = usize::from(bits.saturating_sub(initial_prefix)) % PREFIX_COLORS.len();
    Color::Indexed(PREFIX_COLORS[idx])
}

pub fn header_style() -> Style {
    Style::default()
        .fg(WHITE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .fg(WHITE)
        .bg(SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_style() -> Style {
    Style::default().fg(Color::Indexed(252))
}

pub fn border_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default()
        .fg(Color::Indexed(82))
        .add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::Indexed(244))
}

/// Span cell style, highlighted on the selected row.
pub fn span_style(bits: u8, initial_prefix: u8, selected: bool) -> Style {
    let style = Style::default().fg(prefix_color(bits, initial_prefix));
    if selected {
        style.bg(SELECTED_BG)
    } else {
        style
    }
}

/// Split column header, white on the column's prefix color.
pub fn split_header_style(bits: u8, initial_prefix: u8) -> Style {
    Style::default()
        .fg(WHITE)
        .bg(prefix_color(bits, initial_prefix))
        .add_modifier(Modifier::BOLD)
}
