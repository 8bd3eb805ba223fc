//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, line editing, pane focus
//! - **[`panes`]**: render functions for each visible pane (input, tokens,
//!   syntax tree, transcript, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it and call [`App::run`] with a
//! ratatui terminal. Each Enter runs one line through the pipeline.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
