//! Token list pane

use super::{pane_block, visible_window};
use crate::parser::token::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn token_line(token: &Token) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:>4} ", token.position()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("{:<16}", format!("{:?}", token.kind())),
            Style::default().fg(DEFAULT_THEME.token_color(token.kind())),
        ),
        Span::styled(
            format!("{:?}", token.lexeme()),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ];
    if let Some(value) = token.value() {
        spans.push(Span::styled(
            format!(" = {} ({})", value, value.type_name()),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    Line::from(spans)
}

/// Render the token list of the last run
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: Option<&[Token]>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match tokens {
        Some(tokens) => format!(" Tokens ({}) ", tokens.len()),
        None => " Tokens ".to_string(),
    };
    let block = pane_block(&title, is_focused);

    let tokens = match tokens {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => {
            let paragraph = Paragraph::new("(no tokens)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let (skip, take) = visible_window(tokens.len(), area.height, scroll_offset);
    let items: Vec<ListItem> = tokens
        .iter()
        .skip(skip)
        .take(take)
        .map(|token| ListItem::new(token_line(token)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
