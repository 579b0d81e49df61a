//! Typed console commands and their parser.

use crate::shared::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Wizard(WizardAction),
    Place { food_id: FoodId, slot: SlotId },
    Remove { slot: SlotId },
    Sticker { sticker_id: String, slot: SlotId, x: f32, y: f32 },
    Show,
    Json,
    Catalog,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{value}` is not a number")]
    BadNumber { value: String },
    #[error(transparent)]
    Slot(#[from] UnknownSlot),
}

pub const HELP: &str = "\
commands:
  next | confirm | start         press the stage's continue button
  redo                           pick the side dishes again (after an unbalanced meal)
  restart                        start over with an empty tray
  place <food-id> <slot>         drop a food on a slot (rice, soup, side1..side4)
  remove <slot>                  take the food off a slot
  sticker <id> <slot> <x> <y>    put a sticker on a filled slot
  show | json | catalog          print the tray, the snapshot as JSON, or the full catalog
  help | quit";

/// Parse one input line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "next" | "confirm" | "start" => ConsoleCommand::Wizard(WizardAction::Confirm),
        "redo" => ConsoleCommand::Wizard(WizardAction::RedoSides),
        "restart" => ConsoleCommand::Wizard(WizardAction::Restart),
        "place" => {
            let [food_id, slot] = args[..] else {
                return Err(CommandError::MissingArgument {
                    command: "place",
                    expected: "<food-id> <slot>",
                });
            };
            ConsoleCommand::Place {
                food_id: food_id.to_string(),
                slot: slot.parse()?,
            }
        }
        "remove" => {
            let [slot] = args[..] else {
                return Err(CommandError::MissingArgument {
                    command: "remove",
                    expected: "<slot>",
                });
            };
            ConsoleCommand::Remove { slot: slot.parse()? }
        }
        "sticker" => {
            let [sticker_id, slot, x, y] = args[..] else {
                return Err(CommandError::MissingArgument {
                    command: "sticker",
                    expected: "<sticker-id> <slot> <x> <y>",
                });
            };
            ConsoleCommand::Sticker {
                sticker_id: sticker_id.to_string(),
                slot: slot.parse()?,
                x: parse_offset(x)?,
                y: parse_offset(y)?,
            }
        }
        "show" => ConsoleCommand::Show,
        "json" => ConsoleCommand::Json,
        "catalog" => ConsoleCommand::Catalog,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_offset(value: &str) -> Result<f32, CommandError> {
    value.parse().map_err(|_| CommandError::BadNumber {
        value: value.to_string(),
    })
}
