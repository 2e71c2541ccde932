mod cli;
mod tui;

pub(crate) use cli::{as_cli, load_records};
pub(crate) use tui::as_tui;
