//! Terminal helpers: width detection and fixed-width cells.

/// Width assumed when no terminal is attached.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 120;

/// Width to format for: an explicit override, the attached terminal, or
/// [`DEFAULT_TERMINAL_WIDTH`].
pub fn terminal_width(configured: Option<u16>) -> u16 {
    if let Some(width) = configured {
        return width;
    }
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}

/// Left-align `value` in a field of exactly `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The exact width of the field
///
/// # Returns
/// The padded value, or the value cut to `width` with a trailing `…`
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let len = value_str.chars().count();

    if len <= width {
        format!("{value_str:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = value_str.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

/// Center `value` in a field of `width` characters, extra space going right.
pub fn center_field(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), value, " ".repeat(right))
}
