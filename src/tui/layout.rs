//! Table layout: column widths, hierarchy spans and scrolling.
//!
//! Everything here is pure so the renderer and the model agree on the same
//! numbers and both can be tested without a terminal.

use super::range::format_range_abbreviated;
use crate::models::Network;
use crate::output::{center_field, format_max_hosts};
use crate::processing::{NodeId, SubnetTree};
use itertools::Itertools;

/// Lines kept free for title, borders, header, status and help.
pub const RESERVED_LINES: usize = 10;
/// Fewest rows a page ever holds.
pub const MIN_VIEWPORT_ROWS: usize = 3;
/// Split column width for IPv6 prefixes, which reach three digits.
pub const IPV6_SPLIT_COL_WIDTH: usize = 6;
/// Slack added to the fixed columns when sizing the table.
pub const COLUMN_SLACK: usize = 8;

/// Widths of every table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub subnet: usize,
    pub mask: usize,
    pub range: usize,
    pub hosts: usize,
    pub split_col: usize,
}

/// Readable minimums.
pub const MIN_WIDTHS: ColumnWidths = ColumnWidths {
    subnet: 12,
    mask: 12,
    range: 15,
    hosts: 7,
    split_col: 5,
};

impl ColumnWidths {
    /// Total of the four fixed columns plus slack.
    pub fn main_width(&self) -> usize {
        self.subnet + self.mask + self.range + self.hosts + COLUMN_SLACK
    }
}

/// Display text of one leaf row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub subnet: String,
    pub mask: String,
    pub range: String,
    pub hosts: String,
}

impl RowText {
    pub fn new(network: &Network) -> RowText {
        RowText {
            subnet: network.cidr.to_string(),
            mask: network.subnet_mask.to_string(),
            range: format_range_abbreviated(
                network.first_host_ip,
                network.last_host_ip,
                network.network_addr,
            ),
            hosts: format_max_hosts(&network.max_hosts),
        }
    }
}

/// Negotiate column widths against the terminal width.
///
/// Natural widths come from the longest value in each column plus two
/// characters of padding. If they do not fit next to `split_levels` split
/// columns, the fixed columns shrink proportionally, never below
/// [`MIN_WIDTHS`]. A `width` of zero means unknown and keeps natural widths.
pub fn column_widths(rows: &[RowText], width: usize, split_levels: usize, ipv6: bool) -> ColumnWidths {
    let subnet = padded_longest(rows.iter().map(|r| &r.subnet)).max(MIN_WIDTHS.subnet);
    let mask = padded_longest(rows.iter().map(|r| &r.mask)).max(MIN_WIDTHS.mask);
    let range = padded_longest(rows.iter().map(|r| &r.range)).max(MIN_WIDTHS.range);
    let hosts = padded_longest(rows.iter().map(|r| &r.hosts)).max(MIN_WIDTHS.hosts);
    let split_col = if ipv6 {
        IPV6_SPLIT_COL_WIDTH
    } else {
        MIN_WIDTHS.split_col
    };

    let natural = ColumnWidths {
        subnet,
        mask,
        range,
        hosts,
        split_col,
    };
    let split_width = split_levels * split_col;
    if width == 0 || natural.main_width() + split_width <= width {
        return natural;
    }

    let min_total = MIN_WIDTHS.subnet + MIN_WIDTHS.mask + MIN_WIDTHS.range + MIN_WIDTHS.hosts;
    let available = width.saturating_sub(split_width + COLUMN_SLACK);
    if available < min_total {
        return ColumnWidths {
            split_col,
            ..MIN_WIDTHS
        };
    }

    let content = (subnet + mask + range + hosts) as f64;
    let scale = available as f64 / content;
    let scaled = |natural: usize, min: usize| ((natural as f64 * scale) as usize).max(min);

    ColumnWidths {
        subnet: scaled(subnet, MIN_WIDTHS.subnet),
        mask: scaled(mask, MIN_WIDTHS.mask),
        range: scaled(range, MIN_WIDTHS.range),
        hosts: scaled(hosts, MIN_WIDTHS.hosts),
        split_col,
    }
}

fn padded_longest<'a>(values: impl Iterator<Item = &'a String>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0) + 2
}

/// How many split columns fit beside the fixed columns, at least one.
pub fn visible_split_columns(width: usize, widths: &ColumnWidths, split_levels: usize) -> usize {
    if split_levels == 0 {
        return 0;
    }
    let available = width.saturating_sub(widths.main_width() + 4);
    (available / widths.split_col).min(split_levels).max(1)
}

/// Prefix length shown in split column `col` (0 is the deepest).
pub fn split_column_bits(max_bits: u8, initial_prefix: u8, col: usize) -> u8 {
    let col = u8::try_from(col).unwrap_or(u8::MAX);
    max_bits.saturating_sub(col).max(initial_prefix)
}

/// Rows a page holds for a terminal `height` lines tall.
pub fn viewport_height(height: usize) -> usize {
    height.saturating_sub(RESERVED_LINES).max(MIN_VIEWPORT_ROWS)
}

/// Vertical offset that keeps `cursor` on screen.
///
/// Moves only as far as needed: up to the cursor if it is above the view,
/// or until the cursor is the last visible row if it is below. The result
/// is clamped to `[0, max(0, total - viewport)]`.
pub fn vertical_scroll(current: usize, cursor: usize, viewport: usize, total: usize) -> usize {
    let mut scroll = current;
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + viewport {
        scroll = cursor + 1 - viewport;
    }
    scroll.min(total.saturating_sub(viewport))
}

/// A merged cell covering the leaves of one ancestor in one split column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub node: NodeId,
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.start + self.len
    }
}

/// Group `rows` into runs sharing an ancestor at prefix `bits`.
///
/// Rows shallower than `bits` have no cell in the column and break runs.
pub fn column_spans(tree: &SubnetTree, rows: &[NodeId], bits: u8) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;

    let groups = rows.iter().group_by(|&&id| {
        if tree[id].mask_bits() < bits {
            None
        } else {
            Some(tree.ancestor_at_depth(id, bits).unwrap_or(tree.root()))
        }
    });
    for (ancestor, group) in &groups {
        let len = group.count();
        if let Some(node) = ancestor {
            spans.push(Span { node, start, len });
        }
        start += len;
    }
    spans
}

/// Text of row `pos` within a span of `len` rows, `width` characters wide.
///
/// One row draws both sides around the label. Two rows put the label
/// first and close below. Longer spans open on the first row, close on the
/// last and label the row at `(len - 1) / 2`.
pub fn span_cell(len: usize, pos: usize, bits: u8, width: usize) -> String {
    let inner = width.saturating_sub(2);
    let label = || format!("│{}│", center_field(&format!("/{bits}"), inner));
    let open = || format!("┌{}┐", "─".repeat(inner));
    let close = || format!("└{}┘", "─".repeat(inner));

    let first = pos == 0;
    let last = pos + 1 == len;
    match len {
        0 | 1 => label(),
        2 if first => label(),
        2 => close(),
        _ if first => open(),
        _ if last => close(),
        _ if pos == (len - 1) / 2 => label(),
        _ => format!("│{}│", " ".repeat(inner)),
    }
}

/// Scroll position note shown under the table, if anything scrolls.
///
/// Each part is `(offset, max_offset)`.
pub fn scroll_indicator(horizontal: Option<(usize, usize)>, vertical: Option<(usize, usize)>) -> Option<String> {
    let parts: Vec<String> = [
        horizontal.map(|(at, max)| format!("h-scroll: {}/{}", at + 1, max + 1)),
        vertical.map(|(at, max)| format!("v-scroll: {}/{}", at + 1, max + 1)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(format!(
            " [{}, use ↑↓/PgUp/PgDn to navigate]",
            parts.iter().join(", ")
        ))
    }
}
