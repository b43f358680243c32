//! Ratatui widgets for the leksikon TUI.

pub mod command_bar;
pub mod entry_detail;
pub mod entry_list;
pub mod help;
pub mod line_input;
pub mod query_bar;
pub mod region_list;
pub mod tab_bar;
