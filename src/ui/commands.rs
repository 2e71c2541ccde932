use std::collections::HashMap;
use std::sync::LazyLock;

use dailylimit::import::RecordReader;
use dailylimit::{Currency, Language};

use super::app::App;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

const ADD_DESC: &str = "Add a record (e.g. :add 250,lunch,14.10.2026)";
const CURRENCY_DESC: &str = "Show balance in rub, usd or eur (no code: next one)";
const LANG_DESC: &str = "Message language: ru or en (no code: toggle)";

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("add", ADD_DESC, cmd_add, r);
    register_command!("a", ADD_DESC, cmd_add, r);
    register_command!("currency", CURRENCY_DESC, cmd_currency, r);
    register_command!("cur", CURRENCY_DESC, cmd_currency, r);
    register_command!("lang", LANG_DESC, cmd_lang, r);
    register_command!("l", LANG_DESC, cmd_lang, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <amount>,<comment>[,DD.MM.YYYY]");
        return Ok(());
    }

    match RecordReader::default().parse_str(args) {
        Ok(records) if records.is_empty() => app.set_status("Nothing to add"),
        Ok(records) => {
            let count = app.add_records(records);
            let noun = if count == 1 { "record" } else { "records" };
            app.set_status(format!("Added {count} {noun}. {}", app.message()));
        }
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    Ok(())
}

fn cmd_currency(args: &str, app: &mut App) -> anyhow::Result<()> {
    if !app.tracker.is_cash() {
        app.set_status("Currencies only apply to cash tracking");
        return Ok(());
    }

    if args.is_empty() {
        app.currency = app.currency.next();
    } else if let Some(currency) = Currency::from_code(args) {
        app.currency = currency;
    } else if let super::app::Tracker::Cash(agg) = &app.tracker {
        // Same message the balance query gives for a bad code
        let msg = agg.today_cash_remaining(args);
        app.set_status(msg);
        return Ok(());
    }

    app.set_status(format!("Currency: {}", app.currency));
    Ok(())
}

fn cmd_lang(args: &str, app: &mut App) -> anyhow::Result<()> {
    let language = if args.is_empty() {
        app.language.toggle()
    } else {
        match Language::parse(args) {
            Some(language) => language,
            None => {
                app.set_status(format!("Unknown language: {args} (ru or en)"));
                return Ok(());
            }
        }
    };
    app.set_language(language);
    app.set_status(format!("Language: {language}"));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
