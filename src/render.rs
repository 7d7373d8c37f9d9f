//! Plain-text rendering of bag output.

use crate::commands::{MenuChoice, Outcome};
use crate::models::Item;

pub const BANNER: &str = "Welcome, Summoner, to the Magic Bag!\nHow may I serve you today?";
pub const LIST_HEADER: &str = "--Magic Bag--";
pub const EMPTY_BAG: &str = "There are no items in the bag";
pub const FAREWELL: &str = "Closing the Magic Bag. Good luck on your adventure, Summoner!";
pub const NOT_UNDERSTOOD: &str = "I did not understand your request, Summoner. Please say the number again";

fn choice_label(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::Add => "Put an item in the Magic Bag",
        MenuChoice::List => "See what items are in the Magic Bag",
        MenuChoice::Delete => "Take an item out of the Magic Bag",
        MenuChoice::Exit => "Close the Magic Bag",
    }
}

/// Banner followed by the numbered choices.
pub fn render_menu() -> String {
    let mut output = String::from(BANNER);
    output.push('\n');
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}.{}\n", choice.number(), choice_label(choice)));
    }
    output
}

/// Render items in storage order, one per line.
///
/// Example output:
/// ```text
/// --Magic Bag--
/// 1. | Excalibur | sword
/// 3. | Elixir | potion
/// ```
pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return format!("{}\n", EMPTY_BAG);
    }

    let mut output = String::from(LIST_HEADER);
    output.push('\n');
    for item in items {
        output.push_str(&format!("{}. | {} | {}\n", item.id, item.name, item.kind));
    }
    output
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(item) => format!("Item '{}' was put in the bag (id {})\n", item.name, item.id),
        Outcome::Listed(items) => render_items(items),
        Outcome::Found(item) => format!("{}. | {} | {}\n", item.id, item.name, item.kind),
        Outcome::Deleted(item) => format!("Item '{}' was taken out of the bag\n", item.name),
        Outcome::NotFound(id) => format!("There is no item {} in the bag\n", id),
        Outcome::Exited => format!("{}\n", FAREWELL),
    }
}
