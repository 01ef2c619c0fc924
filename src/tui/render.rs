//! Draws the model into a ratatui frame.

use super::keys::{FULL_HELP, SHORT_HELP};
use super::layout::{
    column_spans, column_widths, scroll_indicator, span_cell, split_column_bits, vertical_scroll,
    visible_split_columns, ColumnWidths, RowText, Span,
};
use super::model::Model;
use super::styles;
use crate::output::{center_field, format_field};
use itertools::Itertools;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span as TextSpan};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;

/// One split column on screen.
struct SplitColumn {
    bits: u8,
    spans: Vec<Span>,
}

/// Everything the table needs, computed once per frame.
struct TableView {
    lines: Vec<Line<'static>>,
    width: u16,
    indicator: Option<String>,
}

impl TableView {
    fn new(model: &Model) -> TableView {
        let tree = model.tree();
        let rows = model.rows();
        let text: Vec<RowText> = rows.iter().map(|&id| RowText::new(&tree[id].network)).collect();

        let term_width = usize::from(model.width());
        let split_levels = model.split_levels();
        let ipv6 = tree[tree.root()].cidr().is_ipv6();
        let widths = column_widths(&text, term_width, split_levels, ipv6);

        let visible = if term_width == 0 {
            split_levels
        } else {
            visible_split_columns(term_width, &widths, split_levels)
        };
        let max_h_scroll = split_levels.saturating_sub(visible);
        let h_scroll = model.scroll_offset().min(max_h_scroll);
        let max_bits = model.max_bits();
        let columns: Vec<SplitColumn> = (0..visible)
            .map(|i| {
                let bits = split_column_bits(max_bits, model.initial_prefix(), i + h_scroll);
                SplitColumn {
                    bits,
                    spans: column_spans(tree, rows, bits),
                }
            })
            .collect();

        let viewport = model.viewport_height();
        let v_scroll = vertical_scroll(model.vertical_scroll(), model.cursor(), viewport, rows.len());
        let max_v_scroll = rows.len().saturating_sub(viewport);

        let mut lines = vec![header_line(&widths, &columns, model.initial_prefix())];
        for row in v_scroll..rows.len().min(v_scroll + viewport) {
            let mask_bits = tree[rows[row]].mask_bits();
            lines.push(row_line(
                model,
                &text[row],
                row,
                mask_bits,
                &widths,
                &columns,
            ));
        }

        let indicator = scroll_indicator(
            (split_levels > visible).then_some((h_scroll, max_h_scroll)),
            (rows.len() > viewport).then_some((v_scroll, max_v_scroll)),
        );
        let inner = widths.subnet + widths.mask + widths.range + widths.hosts + columns.len() * widths.split_col;

        TableView {
            lines,
            width: u16::try_from(inner + 2).unwrap_or(u16::MAX),
            indicator,
        }
    }
}

fn header_line(widths: &ColumnWidths, columns: &[SplitColumn], initial_prefix: u8) -> Line<'static> {
    let mask_label = if widths.mask < 12 { "Mask" } else { "Subnet Mask" };
    let range_label = if widths.range < 17 {
        "Range"
    } else {
        "Assignable Range"
    };

    let header = styles::header_style();
    let mut cells = vec![
        TextSpan::styled(format_field(" Subnet", widths.subnet), header),
        TextSpan::styled(format_field(format!(" {mask_label}"), widths.mask), header),
        TextSpan::styled(format_field(format!(" {range_label}"), widths.range), header),
        TextSpan::styled(format_field(" Hosts", widths.hosts), header),
    ];
    for column in columns {
        cells.push(TextSpan::styled(
            center_field(&format!("/{}", column.bits), widths.split_col),
            styles::split_header_style(column.bits, initial_prefix),
        ));
    }
    Line::from(cells)
}

fn row_line(
    model: &Model,
    text: &RowText,
    row: usize,
    mask_bits: u8,
    widths: &ColumnWidths,
    columns: &[SplitColumn],
) -> Line<'static> {
    let selected = row == model.cursor();
    let style = if selected {
        styles::selected_style()
    } else {
        styles::normal_style()
    };

    let mut cells = vec![
        TextSpan::styled(format_field(format!(" {}", text.subnet), widths.subnet), style),
        TextSpan::styled(format_field(format!(" {}", text.mask), widths.mask), style),
        TextSpan::styled(format_field(format!(" {}", text.range), widths.range), style),
        TextSpan::styled(format_field(format!(" {}", text.hosts), widths.hosts), style),
    ];

    for column in columns {
        let span = column.spans.iter().find(|s| s.contains(row));
        let cell = match span {
            Some(span) if mask_bits >= column.bits => {
                span_cell(span.len, row - span.start, column.bits, widths.split_col)
            }
            _ => " ".repeat(widths.split_col),
        };
        cells.push(TextSpan::styled(
            cell,
            styles::span_style(column.bits, model.initial_prefix(), selected),
        ));
    }
    Line::from(cells)
}

fn help_lines(full: bool) -> Vec<Line<'static>> {
    let entry = |action: &super::keys::Action| {
        let (keys, desc) = action.help();
        format!("{keys} {desc}")
    };

    if full {
        FULL_HELP
            .iter()
            .map(|group| Line::styled(group.iter().map(entry).join("    "), styles::dim_style()))
            .collect()
    } else {
        vec![Line::styled(
            SHORT_HELP.iter().map(entry).join(" • "),
            styles::dim_style(),
        )]
    }
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, model: &Model) {
    let area = frame.area();
    let view = TableView::new(model);
    let help = help_lines(model.show_full_help());
    let table_height = u16::try_from(view.lines.len() + 2).unwrap_or(u16::MAX);

    let [title_area, _, table_area, indicator_area, status_area, _, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(table_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let root = model.tree().root();
    let title = format!(" Subnet Calculator - {}", model.tree()[root].cidr());
    frame.render_widget(Paragraph::new(Line::styled(title, styles::title_style())), title_area);

    let table_rect = Rect {
        width: view.width.min(table_area.width),
        ..table_area
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(styles::border_style());
    frame.render_widget(Paragraph::new(view.lines).block(block), table_rect);

    if let Some(indicator) = view.indicator {
        frame.render_widget(
            Paragraph::new(Line::styled(indicator, styles::dim_style())),
            indicator_area,
        );
    }
    if let Some(status) = model.status() {
        frame.render_widget(
            Paragraph::new(Line::styled(format!(" {status}"), styles::status_style())),
            status_area,
        );
    }
    frame.render_widget(Paragraph::new(help).wrap(Wrap { trim: true }), help_area);
}
