use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use dailylimit::{CalorieAggregator, CashAggregator, Currency, Language};

use crate::args::{Kind, TuiArgs};
use crate::ui::app::{App, InputMode, Tracker};
use crate::ui::commands;
use crate::ui::util;

pub(crate) fn as_tui(args: &TuiArgs, lang: Language) -> Result<()> {
    let mut app = build_app(args, lang)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

pub(crate) fn build_app(args: &TuiArgs, lang: Language) -> Result<App> {
    let currency = Currency::from_code(&args.currency)
        .with_context(|| format!("Unknown currency: {} (rub, usd or eur)", args.currency))?;

    let limit = args.records.limit;
    let tracker = match args.kind {
        Kind::Calories => Tracker::Calories(CalorieAggregator::new(limit)),
        Kind::Cash => Tracker::Cash(CashAggregator::new(limit)),
    };

    let mut app = App::new(tracker, currency, lang);
    let records = super::load_records(&args.records)?;
    app.add_records(records);
    app.set_status(app.message());
    Ok(app)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Records table rows: dashboard minus cards, message, sparkline, bars, borders, header
            let content_height = f.area().height.saturating_sub(18) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Command => handle_command_input(key, app)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    let len = app.tracker.base().len();
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => util::scroll_down(
            &mut app.record_index,
            &mut app.record_scroll,
            len,
            app.visible_rows,
        ),
        KeyCode::Char('k') | KeyCode::Up => {
            util::scroll_up(&mut app.record_index, &mut app.record_scroll);
        }
        KeyCode::Char('g') => util::scroll_to_top(&mut app.record_index, &mut app.record_scroll),
        KeyCode::Char('G') => util::scroll_to_bottom(
            &mut app.record_index,
            &mut app.record_scroll,
            len,
            app.visible_rows,
        ),
        KeyCode::Char('c') if app.tracker.is_cash() => {
            app.currency = app.currency.next();
            app.set_status(app.message());
        }
        KeyCode::Char('l') => {
            app.set_language(app.language.toggle());
            app.set_status(app.message());
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::args::RecordArgs;
    use rust_decimal_macros::dec;

    fn tui_args(kind: Kind, currency: &str, records: &[&str]) -> TuiArgs {
        TuiArgs {
            records: RecordArgs {
                limit: dec!(1000),
                records: records.iter().map(|s| s.to_string()).collect(),
                file: None,
            },
            kind,
            currency: currency.to_string(),
        }
    }

    #[test]
    fn test_build_cash_app() {
        let app = build_app(&tui_args(Kind::Cash, "usd", &["400,rent"]), Language::En).unwrap();
        assert!(app.tracker.is_cash());
        assert_eq!(app.currency, Currency::Usd);
        assert_eq!(app.tracker.base().today_total(), dec!(400));
        assert_eq!(app.status_message, "Left for today: 10 USD");
    }

    #[test]
    fn test_build_calorie_app() {
        let app = build_app(&tui_args(Kind::Calories, "rub", &[]), Language::Ru).unwrap();
        assert!(!app.tracker.is_cash());
        assert_eq!(
            app.status_message,
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 1000 кКал"
        );
    }

    #[test]
    fn test_build_rejects_unknown_currency() {
        let err = build_app(&tui_args(Kind::Cash, "gbp", &[]), Language::En).err().unwrap();
        assert!(err.to_string().contains("gbp"));
    }
}
