//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: the line being edited, highlighted by token kind
//! - [`tokens`]: token list of the last run
//! - [`tree`]: syntax tree outline of the last run
//! - [`transcript`]: every input with its result or diagnostics
//! - [`status`]: status bar with keybindings and run counters
//!
//! Each pane module exports a `render_*` function. Scrollable panes take a
//! `&mut usize` offset which they clamp to the content height.

pub mod input;
pub mod status;
pub mod tokens;
pub mod transcript;
pub mod tree;

pub use input::render_input_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use transcript::render_transcript_pane;
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` so the last page stays full, and return the visible
/// window as `(skip, take)`.
pub(crate) fn visible_window(total_items: usize, area_height: u16, scroll_offset: &mut usize) -> (usize, usize) {
    let visible_height = area_height.saturating_sub(2).max(1) as usize; // borders

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    (*scroll_offset, visible_height)
}
