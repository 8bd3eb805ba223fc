//! Input line rendering with token highlighting

use super::pane_block;
use crate::diagnostics::Diagnostics;
use crate::parser::lexer::Lexer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Color `input` by lexing it; characters outside any token stay plain.
fn highlight_input(input: &str) -> Line<'static> {
    let chars: Vec<char> = input.chars().collect();
    let mut styles = vec![Style::default().fg(DEFAULT_THEME.fg); chars.len()];

    let mut diagnostics = Diagnostics::new();
    for token in Lexer::new(input).tokenize(&mut diagnostics) {
        let style = Style::default().fg(DEFAULT_THEME.token_color(token.kind()));
        let start = token.position();
        let end = (start + token.lexeme().chars().count()).min(chars.len());
        for slot in styles.iter_mut().take(end).skip(start) {
            *slot = style;
        }
    }
    // Dropped (malformed) spans are marked at their start offset.
    for diagnostic in diagnostics.iter() {
        if let Some(slot) = styles.get_mut(diagnostic.position()) {
            *slot = Style::default().fg(DEFAULT_THEME.error);
        }
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (c, style) in chars.into_iter().zip(styles) {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    Line::from(spans)
}

/// Render the input pane and place the terminal cursor at `cursor` (a char index).
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, cursor: usize, is_focused: bool) {
    let block = pane_block(" Input ", is_focused).padding(Padding::new(1, 0, 0, 0));

    let paragraph = if input.is_empty() {
        Paragraph::new(Span::styled(
            "type an expression, e.g. (2 + 3) * 4",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        Paragraph::new(highlight_input(input))
    };
    frame.render_widget(paragraph.block(block), area);

    if is_focused {
        frame.set_cursor_position(Position::new(cursor_column(area, cursor), area.y + 1));
    }
}

/// Terminal column of char index `cursor`, clamped inside the pane.
fn cursor_column(area: Rect, cursor: usize) -> u16 {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    // border + left padding
    area.x
        .saturating_add(2)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2))
}
