//! Transcript pane rendering

use super::{pane_block, visible_window};
use crate::session::{LineKind, Transcript};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the transcript pane
pub fn render_transcript_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Transcript ", is_focused);

    if transcript.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let (skip, take) = visible_window(transcript.lines.len(), area.height, scroll_offset);

    let items: Vec<ListItem> = transcript
        .lines
        .iter()
        .skip(skip)
        .take(take)
        .map(|line| match line.kind {
            LineKind::Input => ListItem::new(format!("> {}", line.text))
                .style(Style::default().fg(DEFAULT_THEME.comment)),
            LineKind::Value => ListItem::new(line.text.as_str()).style(
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            LineKind::Error => {
                ListItem::new(line.text.as_str()).style(Style::default().fg(DEFAULT_THEME.error))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
