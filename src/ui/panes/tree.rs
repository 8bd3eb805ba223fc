//! Syntax tree pane

use super::{pane_block, visible_window};
use crate::parser::ast::{Expression, SyntaxTree};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// One row of the outline: nesting depth, label and style.
struct OutlineRow {
    depth: usize,
    label: String,
    style: Style,
}

/// Flatten `expression` into rows, parent before children.
fn outline_rows(expression: &Expression, depth: usize, rows: &mut Vec<OutlineRow>) {
    match expression {
        Expression::Number(number) => {
            let token = number.token();
            let row = match token.value() {
                Some(value) if !token.is_placeholder() => OutlineRow {
                    depth,
                    label: format!("Number {}", value),
                    style: Style::default().fg(DEFAULT_THEME.number),
                },
                _ => OutlineRow {
                    depth,
                    label: format!("Number <missing> @{}", token.position()),
                    style: Style::default().fg(DEFAULT_THEME.error),
                },
            };
            rows.push(row);
        }
        Expression::Binary(binary) => {
            rows.push(OutlineRow {
                depth,
                label: format!("Binary '{}'", binary.operator().op().symbol()),
                style: Style::default()
                    .fg(DEFAULT_THEME.operator)
                    .add_modifier(Modifier::BOLD),
            });
            outline_rows(binary.left(), depth + 1, rows);
            outline_rows(binary.right(), depth + 1, rows);
        }
    }
}

fn outline_line(row: &OutlineRow) -> Line<'static> {
    Line::from(vec![
        Span::styled("│ ".repeat(row.depth), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(row.label.clone(), row.style),
    ])
}

/// Render the syntax tree of the last run
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: Option<&SyntaxTree>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    let Some(tree) = tree else {
        let paragraph = Paragraph::new("(nothing parsed yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut rows = Vec::new();
    outline_rows(tree.root(), 0, &mut rows);
    let (skip, take) = visible_window(rows.len(), area.height, scroll_offset);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(skip)
        .take(take)
        .map(|row| ListItem::new(outline_line(row)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
