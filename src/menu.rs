//! Interactive numbered menu.
//!
//! The loop reads from any `BufRead` and writes to any `Write`, so it runs the
//! same against a terminal or in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::commands::{execute, parse_item_id, Command, MenuChoice};
use crate::models::CreateItemInput;
use crate::render;
use crate::store::{Inventory, Storage};

const CHOICE_PROMPT: &str = "Summoner: ";
const NAME_PROMPT: &str = "Enter the name of the magic item: ";
const KIND_PROMPT: &str = "Enter the type of the magic item: ";
const ID_PROMPT: &str = "Which item do you want to take out: ";

pub struct Menu<'a, S, R, W> {
    inventory: &'a Inventory<S>,
    input: R,
    output: W,
}

impl<'a, S: Storage, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(inventory: &'a Inventory<S>, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Run until the exit choice or end of input.
    ///
    /// Store errors abort only the current action; only I/O errors on the
    /// menu's own input or output end the loop.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", render::render_menu())?;
            let command = match self.prompt(CHOICE_PROMPT)? {
                None => Command::Exit,
                Some(line) => {
                    let Some(choice) = MenuChoice::parse(&line) else {
                        writeln!(self.output, "{}", render::NOT_UNDERSTOOD)?;
                        continue;
                    };
                    let Some(command) = self.read_command(choice)? else {
                        continue;
                    };
                    command
                }
            };
            let exiting = command == Command::Exit;

            match execute(self.inventory, command) {
                Ok(outcome) => write!(self.output, "{}", render::render_outcome(&outcome))?,
                Err(e) => {
                    tracing::error!(error = %e, "Menu action failed");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }

            if exiting {
                return Ok(());
            }
        }
    }

    /// Gather whatever the choice needs. `Ok(None)` means skip back to the menu.
    fn read_command(&mut self, choice: MenuChoice) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Add => {
                let Some(name) = self.prompt(NAME_PROMPT)? else {
                    return Ok(Some(Command::Exit));
                };
                let Some(kind) = self.prompt(KIND_PROMPT)? else {
                    return Ok(Some(Command::Exit));
                };
                Command::Add(CreateItemInput::new(name, kind))
            }
            MenuChoice::List => Command::List,
            MenuChoice::Delete => {
                let Some(raw) = self.prompt(ID_PROMPT)? else {
                    return Ok(Some(Command::Exit));
                };
                match parse_item_id(&raw) {
                    Ok(id) => Command::Delete(id),
                    Err(e) => {
                        writeln!(self.output, "{}", e)?;
                        return Ok(None);
                    }
                }
            }
            MenuChoice::Exit => Command::Exit,
        };
        Ok(Some(command))
    }

    /// Print `prompt` and read one line with the line ending stripped.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("Menu input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run a menu session to completion.
pub fn run_menu<S: Storage, R: BufRead, W: Write>(
    inventory: &Inventory<S>,
    input: R,
    output: W,
) -> io::Result<()> {
    Menu::new(inventory, input, output).run()
}

