use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::console::menu::{Action, MENU};
use crate::console::prompt::Prompter;
use crate::console::ConsoleError;
use crate::models::{Transaction, TransactionKind};
use crate::report::{aggregate, monthly_breakdown, render_month_graph, render_summary, render_table, render_year_graph, Filter};
use crate::storage::Storage;
use crate::store::RecordStore;
use crate::types::Amount;

enum Flow {
    Continue,
    Exit
}

/// Interactive menu driver. Owns the ledger for the lifetime of the process.
pub struct Session<R, W, S> {
    store: RecordStore,
    storage: S,
    prompter: Prompter<R, W>,
    clock: fn() -> NaiveDate
}

impl<R: BufRead, W: Write, S: Storage> Session<R, W, S> {
    pub fn new(storage: S, input: R, output: W) -> Self {
        Self {
            store: RecordStore::new(),
            storage,
            prompter: Prompter::new(input, output),
            clock: || Local::now().date_naive()
        }
    }

    /// Overrides the date stamped on newly added transactions.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        self.prompter.output()
    }

    /// Replaces the in-memory ledger with the persisted one, if there is one.
    pub fn load(&mut self) -> Result<(), ConsoleError> {
        match self.storage.load() {
            Ok(Some(transactions)) => {
                self.store.replace_all(transactions);
                info!("{} transactions in memory", self.store.len());
                let message = format!("Transactions loaded from {}\n", self.storage.location());
                self.prompter.say(&message)
            }
            Ok(None) => self.prompter.say("No saved file found. Starting fresh.\n"),
            Err(error) => {
                warn!("{error}");
                self.prompter.say("No saved file found. Starting fresh.\n")
            }
        }
    }

    /// Runs the menu until the user exits or input ends. Both paths save the ledger.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ConsoleError::InputClosed) => {
                    info!("Input closed, saving ledger before exit");
                    self.save()?;
                    return Ok(());
                }
                Err(error) => return Err(error)
            }
        }
    }

    fn step(&mut self) -> Result<Flow, ConsoleError> {
        self.prompter.say("\n")?;
        self.prompter.say(MENU)?;

        let choice = self.prompter.read_parsed::<i64>("Enter your choice: ")?;

        let Some(action) = Action::from_choice(choice) else {
            self.prompter.say("Invalid choice.\n")?;
            return Ok(Flow::Continue);
        };

        debug!("Menu action {action:?}");

        match action {
            Action::Add(kind) => self.add_transaction(kind)?,
            Action::ListAll => self.prompter.say(&render_table(self.store.all()))?,
            Action::Summary => self.summary("Summary", Filter::All)?,
            Action::Save => {
                self.save()?;
            }
            Action::UpdateIncome => self.update_income()?,
            Action::UserSummary => {
                let user = self.prompter.read_text("Enter user name: ")?;
                self.summary(&format!("Summary for {user}"), Filter::User(&user))?;
            }
            Action::MonthlySummary => {
                let (month, year) = self.read_month_and_year()?;
                self.summary(&format!("Summary for {month}/{year}"), Filter::Month { month, year })?;
            }
            Action::YearlySummary => {
                let year = self.read_year()?;
                self.summary(&format!("Summary for year {year}"), Filter::Year(year))?;
            }
            Action::MonthlyGraph => {
                let (month, year) = self.read_month_and_year()?;
                let totals = aggregate(&self.store, &Filter::Month { month, year });
                self.prompter.say(&render_month_graph(month, year, &totals))?;
            }
            Action::YearlyGraph => {
                let year = self.read_year()?;
                let months = monthly_breakdown(&self.store, year);
                self.prompter.say(&render_year_graph(year, &months))?;
            }
            Action::ViewRaw => self.view_raw()?,
            Action::Exit => {
                if self.save()? {
                    self.prompter.say("Exiting. Data saved. Thank you!\n")?;
                } else {
                    self.prompter.say("Exiting. Thank you!\n")?;
                }
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> Result<(), ConsoleError> {
        let user = self.prompter.read_text("Enter user name: ")?;
        let description = self.prompter.read_text("Enter description: ")?;
        let amount = self.prompter.read_parsed::<Amount>("Enter amount (₹): ")?;
        let category = self.prompter.read_text("Enter category (e.g. Food, Rent, Travel): ")?;

        self.store.add(Transaction::new(user, description, amount, category, kind, (self.clock)()));

        self.prompter.say(&format!("{kind} added successfully.\n"))
    }

    fn update_income(&mut self) -> Result<(), ConsoleError> {
        let user = self.prompter.read_text("Enter user name: ")?;
        let description = self.prompter.read_text("Enter income description to update: ")?;
        let amount = self.prompter.read_parsed::<Amount>("Enter new amount (₹): ")?;

        match self.store.update_income_amount(&user, &description, amount) {
            Ok(_) => self.prompter.say("Income updated successfully.\n"),
            Err(error) => {
                debug!("{error}");
                self.prompter.say(&format!("Income not found for user: {user}\n"))
            }
        }
    }

    fn summary(&mut self, title: &str, filter: Filter<'_>) -> Result<(), ConsoleError> {
        let totals = aggregate(&self.store, &filter);
        self.prompter.say(&render_summary(title, &totals))
    }

    /// Reports the outcome to the user. Returns whether the ledger was written.
    fn save(&mut self) -> Result<bool, ConsoleError> {
        match self.storage.save(self.store.all()) {
            Ok(()) => {
                let message = format!("Transactions saved to {}\n", self.storage.location());
                self.prompter.say(&message)?;
                Ok(true)
            }
            Err(error) => {
                warn!("{error}");
                self.prompter.say(&format!("Error writing to file: {error}\n"))?;
                Ok(false)
            }
        }
    }

    fn view_raw(&mut self) -> Result<(), ConsoleError> {
        self.prompter.say("==== Raw File Content ====\n")?;

        match self.storage.read_raw() {
            Ok(content) => self.prompter.say(&content),
            Err(error) => self.prompter.say(&format!("Error reading file: {error}\n"))
        }
    }

    fn read_month_and_year(&mut self) -> Result<(u32, i32), ConsoleError> {
        let month = self.prompter.read_valid::<u32, _>("Enter month (1-12): ", |month| (1..=12).contains(month))?;
        let year = self.read_year()?;
        Ok((month, year))
    }

    fn read_year(&mut self) -> Result<i32, ConsoleError> {
        self.prompter.read_parsed::<i32>("Enter year (e.g. 2025): ")
    }
}
