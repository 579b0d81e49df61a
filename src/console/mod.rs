//! Terminal front end: turns typed commands into session events and
//! prints what the player would see.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::session::{settle, SessionSnapshot};
use crate::shared::*;

pub mod command;
pub mod render;

pub use command::{parse_line, CommandError, ConsoleCommand, HELP};

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Output mode for views after each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Text,
    Json,
}

/// Send the events for `command`, run the frames they need and return the
/// text to print.
pub fn execute(
    app: &mut App,
    command: ConsoleCommand,
    config: &GameConfig,
    mode: ViewMode,
) -> (Flow, String) {
    let world = app.world_mut();
    match command {
        ConsoleCommand::Wizard(action) => {
            world.send_event(WizardActionEvent { action });
        }
        ConsoleCommand::Place { food_id, slot } => {
            world.send_event(FoodDropEvent { food_id, slot });
        }
        ConsoleCommand::Remove { slot } => {
            world.send_event(RemoveFoodEvent { slot });
        }
        ConsoleCommand::Sticker { sticker_id, slot, x, y } => {
            world.send_event(StickerDropEvent {
                sticker_id,
                slot,
                offset_x: x,
                offset_y: y,
            });
        }
        ConsoleCommand::Show => {}
        ConsoleCommand::Json => return (Flow::Continue, view(app, config, ViewMode::Json)),
        ConsoleCommand::Catalog => {
            let world = app.world();
            let text = render::render_catalog(
                world.resource::<FoodCatalog>(),
                world.resource::<StickerCatalog>(),
            );
            return (Flow::Continue, text);
        }
        ConsoleCommand::Help => return (Flow::Continue, HELP.to_string()),
        ConsoleCommand::Quit => return (Flow::Quit, String::new()),
    }

    settle(app);
    (Flow::Continue, view(app, config, mode))
}

/// Render the current session in the requested mode.
pub fn view(app: &App, config: &GameConfig, mode: ViewMode) -> String {
    let snapshot = SessionSnapshot::capture(app.world());
    match mode {
        ViewMode::Text => render::render_view(&snapshot, &config.mascot_name, config.show_catalog),
        ViewMode::Json => match snapshot.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Snapshot serialization failed: {}", e);
                String::new()
            }
        },
    }
}
