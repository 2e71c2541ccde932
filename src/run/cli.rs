use anyhow::{Context, Result};
use dailylimit::import::RecordReader;
use dailylimit::{Aggregator, CalorieAggregator, CashAggregator, Language, Record};

use crate::args::{Command, RecordArgs};

pub(crate) fn as_cli(command: &Command, lang: Language) -> Result<()> {
    match command {
        Command::Stats(args) => {
            let mut agg = Aggregator::new(args.limit);
            agg.extend(load_records(args)?);
            print!("{}", format_stats(&agg));
        }
        Command::Calories(args) => {
            let mut agg = CalorieAggregator::new(args.limit).with_language(lang);
            agg.extend(load_records(args)?);
            println!("{}", agg.calorie_recommendation());
        }
        Command::Cash(args) => {
            let mut agg = CashAggregator::new(args.records.limit).with_language(lang);
            agg.extend(load_records(&args.records)?);
            println!("{}", agg.today_cash_remaining(&args.currency));
        }
        Command::Tui(_) => anyhow::bail!("The tui command is not a one-shot report"),
    }
    Ok(())
}

/// Records from `--file` first, then each `--record` in the order given.
pub(crate) fn load_records(args: &RecordArgs) -> Result<Vec<Record>> {
    let reader = RecordReader::default();
    let mut records = Vec::new();

    if let Some(path) = &args.file {
        let loaded = reader
            .read_path(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?;
        records.extend(loaded);
    }

    for text in &args.records {
        let parsed = reader
            .parse_str(text)
            .with_context(|| format!("Invalid record '{text}'"))?;
        records.extend(parsed);
    }

    Ok(records)
}

pub(crate) fn format_stats(agg: &Aggregator) -> String {
    let today = agg.today().format(dailylimit::models::DATE_FORMAT);
    let mut out = String::new();
    out.push_str(&format!("dailylimit: {today}\n"));
    out.push_str(&format!("{}\n", "─".repeat(40)));
    out.push_str(&format!("  Limit:      {}\n", agg.limit()));
    out.push_str(&format!("  Today:      {}\n", agg.today_total()));
    out.push_str(&format!("  Week:       {}\n", agg.week_total()));
    out.push_str(&format!("  Remaining:  {}\n", agg.remaining_limit()));
    out.push_str(&format!("  Records:    {}\n", agg.len()));
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
