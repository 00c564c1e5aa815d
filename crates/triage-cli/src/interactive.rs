//! Interactive symptom menu

use std::io::{self, BufRead, Write};

use console::style;
use tracing::debug;

use crate::display::Display;
use triage_engine::{RuleCatalog, TriageEngine};

/// One comma-separated menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Add a symptom (identifier, not yet validated)
    Add(String),
    /// Remove a symptom (identifier)
    Remove(String),
    /// Run triage once the line is processed
    RunTriage,
    /// Clear all symptoms
    Clear,
    /// Leave the menu
    Quit,
    /// Number outside the menu
    InvalidNumber(i64),
}

impl MenuEntry {
    /// Parse a single trimmed entry against the catalog's menu
    pub fn parse(entry: &str, catalog: &RuleCatalog) -> Self {
        if let Ok(num) = entry.parse::<i64>() {
            return match num {
                0 => MenuEntry::RunTriage,
                -1 => MenuEntry::Clear,
                -2 => MenuEntry::Quit,
                n => match Self::symptom_at(n, catalog) {
                    Some(id) => MenuEntry::Add(id),
                    None => MenuEntry::InvalidNumber(n),
                },
            };
        }

        let target = entry
            .strip_prefix("rm ")
            .or_else(|| entry.strip_prefix("remove "))
            .map(str::trim);
        if let Some(target) = target {
            return match target.parse::<i64>() {
                Ok(n) => match Self::symptom_at(n, catalog) {
                    Some(id) => MenuEntry::Remove(id),
                    None => MenuEntry::InvalidNumber(n),
                },
                Err(_) => MenuEntry::Remove(normalize(target)),
            };
        }

        MenuEntry::Add(normalize(entry))
    }

    fn symptom_at(n: i64, catalog: &RuleCatalog) -> Option<String> {
        usize::try_from(n)
            .ok()
            .and_then(|position| catalog.symptom_at(position))
            .map(|symptom| symptom.id.clone())
    }
}

/// Typed names become identifiers: "Chest Pain" -> "chest_pain"
fn normalize(entry: &str) -> String {
    entry.trim().to_lowercase().replace(' ', "_")
}

/// Menu loop over any line-oriented input
pub struct InteractiveSession<R> {
    engine: TriageEngine,
    display: Display,
    input: R,
}

impl<R: BufRead> InteractiveSession<R> {
    pub fn new(engine: TriageEngine, input: R) -> Self {
        Self {
            engine,
            display: Display::new(),
            input,
        }
    }

    pub fn engine(&self) -> &TriageEngine {
        &self.engine
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if !self.engine.is_empty() {
                self.print_selected();
            }
            self.display
                .print_symptom_menu(self.engine.catalog().all_symptoms());

            let Some(line) =
                self.prompt("Enter symptom number(s) (comma-separated) or command: ")?
            else {
                self.display.print_goodbye();
                return Ok(());
            };
            if line.is_empty() {
                continue;
            }

            let mut run_triage = false;
            for entry in line.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                match MenuEntry::parse(entry, self.engine.catalog()) {
                    MenuEntry::RunTriage => run_triage = true,
                    MenuEntry::Clear => {
                        self.engine.clear_symptoms();
                        self.display.print_success("All symptoms cleared.");
                    }
                    MenuEntry::Quit => {
                        self.display.print_goodbye();
                        return Ok(());
                    }
                    MenuEntry::Add(id) => self.add(entry, &id),
                    MenuEntry::Remove(id) => self.remove(&id),
                    MenuEntry::InvalidNumber(n) => {
                        self.display.print_error(&format!("Invalid number: {n}"));
                    }
                }
            }

            if !run_triage {
                continue;
            }
            if self.engine.is_empty() {
                self.display
                    .print_warning("No symptoms selected. Please add at least one symptom.");
                continue;
            }

            let result = self.engine.evaluate();
            self.display.print_result(&result);
            self.display.print_disclaimer();

            let Some(answer) = self.prompt("Run another triage? (y/n): ")? else {
                self.display.print_goodbye();
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
                self.engine.clear_symptoms();
                self.display
                    .print_success("Symptoms cleared for new assessment.");
            } else {
                self.display.print_goodbye();
                return Ok(());
            }
        }
    }

    fn add(&mut self, entry: &str, id: &str) {
        match self.engine.add_symptom(id) {
            Ok(added) => {
                let description = self.description(id);
                if added {
                    self.display.print_success(&format!("Added: {description}"));
                } else {
                    self.display
                        .print_info(&format!("Already selected: {description}"));
                }
            }
            Err(e) => {
                debug!("Menu entry rejected: {}", e);
                self.display
                    .print_error(&format!("Unknown input: '{entry}'"));
            }
        }
    }

    fn remove(&mut self, id: &str) {
        if self.engine.remove_symptom(id) {
            let description = self.description(id);
            self.display.print_success(&format!("Removed: {description}"));
        } else {
            self.display.print_info(&format!("Not selected: {id}"));
        }
    }

    fn description(&self, id: &str) -> String {
        self.engine
            .catalog()
            .description_of(id)
            .unwrap_or(id)
            .to_string()
    }

    fn print_selected(&self) {
        let catalog = self.engine.catalog();
        self.display.print_selected(
            self.engine
                .current_symptoms()
                .iter()
                .map(|id| (id.as_str(), catalog.description_of(id).unwrap_or(id))),
        );
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        print!("{}", style(text).bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
