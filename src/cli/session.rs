//! Interactive terminal session.
//!
//! The session keeps the draft of the register form locally, calls the store
//! only on explicit commands and re-renders screens from the store afterwards.
use super::{screens, ui};
use crate::core::{ProductDraft, ProductStore};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "Commands:
  add          Register a new product
  list         List registered products
  show <name>  Show details of a product
  stats        Show inventory statistics
  help         Show this help
  quit         Leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Add,
    List,
    Show(&'a str),
    Stats,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "add" => Command::Add,
            "list" | "ls" => Command::List,
            "show" => Command::Show(rest),
            "stats" => Command::Stats,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word),
        }
    }
}

pub struct Session<'a, R, W> {
    store: &'a mut ProductStore,
    currency: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut ProductStore, currency: &'a str, input: R, output: W) -> Self {
        Self {
            store,
            currency,
            input,
            output,
        }
    }

    /// Reads and executes commands until `quit` or end of input.
    pub fn run(mut self) -> Result<()> {
        info!(products = self.store.len(), "Session started");
        writeln!(
            self.output,
            "{}\n{}",
            ui::style_text("stockr", ui::StyleType::Title),
            ui::style_text("Type 'help' for a list of commands.", ui::StyleType::Subtle)
        )?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };

            let screen = match Command::parse(&line) {
                Command::Add => {
                    self.register()?;
                    continue;
                }
                Command::List => screens::product_list(self.store),
                Command::Show("") => "Usage: show <name>".to_string(),
                Command::Show(name) => screens::product_details(self.store, name, self.currency),
                Command::Stats => screens::statistics(self.store, self.currency),
                Command::Help => HELP.to_string(),
                Command::Quit => break,
                Command::Empty => continue,
                Command::Unknown(word) => ui::style_text(
                    &format!("Unknown command '{word}'. Type 'help' for a list of commands."),
                    ui::StyleType::Error,
                ),
            };
            self.render(screen)?;
        }

        info!(products = self.store.len(), "Session ended");
        Ok(())
    }

    /// Collects a draft field by field, validates it and adds the product.
    fn register(&mut self) -> Result<()> {
        let mut draft = ProductDraft::default();
        let fields: [(&str, &mut String); 4] = [
            ("Product name: ", &mut draft.name),
            ("Category: ", &mut draft.category),
            ("Price: ", &mut draft.price),
            ("Quantity in stock: ", &mut draft.quantity),
        ];

        for (label, field) in fields {
            match self.prompt(label)? {
                Some(value) => *field = value,
                None => {
                    debug!("Input ended during registration");
                    return self.render(ui::style_text(
                        "Registration cancelled.",
                        ui::StyleType::Subtle,
                    ));
                }
            }
        }

        match draft.validate() {
            Ok(product) => {
                let message = format!("Registered '{}'.", product.name);
                self.store.add(product);
                self.render(ui::style_text(&message, ui::StyleType::Success))?;
                let list = screens::product_list(self.store);
                self.render(list)
            }
            Err(e) => {
                debug!(error = %e, "Rejected product draft");
                self.render(ui::style_text(&e.to_string(), ui::StyleType::Error))
            }
        }
    }

    /// Writes `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn render(&mut self, screen: String) -> Result<()> {
        writeln!(self.output, "{screen}")?;
        Ok(())
    }
}
