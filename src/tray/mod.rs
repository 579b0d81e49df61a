//! Tray domain: food drops and removals.
//!
//! All cross-domain communication goes through `crate::shared::*` events and resources.

use bevy::prelude::*;
use crate::shared::*;

pub mod placement;

pub use placement::{place_food, remove_food, slot_accepts, Placement};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct TrayPlugin;

impl Plugin for TrayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_food_drops, handle_food_removals)
                .chain()
                .in_set(SessionSet::Tray),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Reads `FoodDropEvent`, resolves the food against the catalog and runs the
/// placement engine. Only foods the current stage shows in its catalog can be
/// dropped; anything else never left the shelf.
pub fn handle_food_drops(
    mut events: EventReader<FoodDropEvent>,
    stage: Res<State<WizardStage>>,
    catalog: Res<FoodCatalog>,
    mut tray: ResMut<Tray>,
    mut overlay: ResMut<DecorationOverlay>,
) {
    for ev in events.read() {
        let Some(food) = catalog.get(&ev.food_id) else {
            warn!("[Tray] Unknown food id '{}'", ev.food_id);
            continue;
        };
        if !stage.get().offered_categories().contains(&food.category) {
            debug!(
                "[Tray] {} is not on offer during {:?}, drop ignored",
                food.name,
                stage.get()
            );
            continue;
        }

        match place_food(&mut tray, &mut overlay, ev.slot, food) {
            Placement::Placed { vacated: Some(from) } => {
                info!("[Tray] Moved {} from {} to {}", food.name, from, ev.slot);
            }
            Placement::Placed { vacated: None } => {
                info!("[Tray] Placed {} on {}", food.name, ev.slot);
            }
            Placement::WrongCategory => {
                debug!("[Tray] {} does not fit {}", food.name, ev.slot);
            }
            Placement::SlotOccupied => {
                debug!("[Tray] {} is taken, {} not placed", ev.slot, food.name);
            }
        }
    }
}

/// Reads `RemoveFoodEvent`. Removal is allowed at every stage.
pub fn handle_food_removals(
    mut events: EventReader<RemoveFoodEvent>,
    mut tray: ResMut<Tray>,
    mut overlay: ResMut<DecorationOverlay>,
) {
    for ev in events.read() {
        if let Some(food) = remove_food(&mut tray, &mut overlay, ev.slot) {
            info!("[Tray] Took {} off {}", food.name, ev.slot);
        }
    }
}
