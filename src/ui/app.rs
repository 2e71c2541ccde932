use dailylimit::{Aggregator, CalorieAggregator, CashAggregator, Currency, Language, Record};

/// The aggregator driven by the session.
#[derive(Debug, Clone)]
pub(crate) enum Tracker {
    Calories(CalorieAggregator),
    Cash(CashAggregator),
}

impl Tracker {
    pub(crate) fn base(&self) -> &Aggregator {
        match self {
            Self::Calories(agg) => agg.base(),
            Self::Cash(agg) => agg.base(),
        }
    }

    pub(crate) fn add_record(&mut self, record: Record) {
        match self {
            Self::Calories(agg) => agg.add_record(record),
            Self::Cash(agg) => agg.add_record(record),
        }
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        match self {
            Self::Calories(agg) => agg.set_language(language),
            Self::Cash(agg) => agg.set_language(language),
        }
    }

    /// The recommendation in calorie mode, the balance in `currency` in cash mode.
    pub(crate) fn message(&self, currency: Currency) -> String {
        match self {
            Self::Calories(agg) => agg.calorie_recommendation(),
            Self::Cash(agg) => agg.today_cash_remaining_in(currency),
        }
    }

    pub(crate) fn is_cash(&self) -> bool {
        matches!(self, Self::Cash(_))
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::Calories(_) => "Calories",
            Self::Cash(_) => "Cash",
        }
    }

    pub(crate) fn unit(&self) -> &'static str {
        match self {
            Self::Calories(_) => "kcal",
            Self::Cash(_) => "rub",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) tracker: Tracker,
    pub(crate) currency: Currency,
    pub(crate) language: Language,

    // Records table
    pub(crate) record_index: usize,
    pub(crate) record_scroll: usize,
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(mut tracker: Tracker, currency: Currency, language: Language) -> Self {
        tracker.set_language(language);
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            tracker,
            currency,
            language,
            record_index: 0,
            record_scroll: 0,
            visible_rows: 10,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
        self.tracker.set_language(language);
    }

    pub(crate) fn message(&self) -> String {
        self.tracker.message(self.currency)
    }

    pub(crate) fn add_records(&mut self, records: Vec<Record>) -> usize {
        let count = records.len();
        for record in records {
            self.tracker.add_record(record);
        }
        let len = self.tracker.base().len();
        if len > 0 {
            crate::ui::util::scroll_to_bottom(
                &mut self.record_index,
                &mut self.record_scroll,
                len,
                self.visible_rows,
            );
        }
        count
    }
}
