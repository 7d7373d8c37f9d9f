//! Bag commands, decoupled from any terminal.
//!
//! Front ends (the interactive menu and the one-shot CLI) translate user input
//! into a [`Command`], run it with [`execute`], and render the [`Outcome`].

use thiserror::Error;

use crate::models::*;
use crate::store::{Inventory, Storage, StoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' is not a valid item id")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(CreateItemInput),
    List,
    Show(u64),
    Delete(u64),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Item),
    Listed(Vec<Item>),
    Found(Item),
    Deleted(Item),
    NotFound(u64),
    Exited,
}

/// A numbered entry in the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [Self::Add, Self::List, Self::Delete, Self::Exit];

    pub fn number(&self) -> u8 {
        match self {
            Self::Add => 1,
            Self::List => 2,
            Self::Delete => 3,
            Self::Exit => 4,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub fn parse_item_id(input: &str) -> Result<u64, CommandError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| CommandError::InvalidId(trimmed.to_string()))
}

pub fn execute<S: Storage>(
    inventory: &Inventory<S>,
    command: Command,
) -> Result<Outcome, StoreError> {
    match command {
        Command::Add(input) => inventory.create(input).map(Outcome::Added),
        Command::List => inventory.list().map(Outcome::Listed),
        Command::Show(id) => Ok(match inventory.get(id)? {
            Some(item) => Outcome::Found(item),
            None => Outcome::NotFound(id),
        }),
        Command::Delete(id) => Ok(match inventory.delete(id)? {
            Some(item) => Outcome::Deleted(item),
            None => Outcome::NotFound(id),
        }),
        Command::Exit => Ok(Outcome::Exited),
    }
}
