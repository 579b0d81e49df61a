//! Session wiring: one plugin that assembles the whole game core, plus the
//! read model a front end renders from.

use bevy::prelude::*;
use serde::Serialize;

use crate::data::DataPlugin;
use crate::decoration::DecorationPlugin;
use crate::shared::*;
use crate::tray::TrayPlugin;
use crate::wizard::{narrate, next_stage, StageGuard, WizardPlugin};

/// Registers the wizard state, every session resource and event, and the
/// domain plugins. Needs `StatesPlugin` (or `DefaultPlugins`) on the app.
pub struct TrayGamePlugin;

impl Plugin for TrayGamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<WizardStage>()
            // Catalogs
            .init_resource::<FoodCatalog>()
            .init_resource::<StickerCatalog>()
            // Session state
            .init_resource::<Tray>()
            .init_resource::<DecorationOverlay>()
            .init_resource::<CurrentVerdict>()
            .init_resource::<MascotName>()
            // Events
            .add_event::<FoodDropEvent>()
            .add_event::<RemoveFoodEvent>()
            .add_event::<StickerDropEvent>()
            .add_event::<WizardActionEvent>()
            .configure_sets(
                Update,
                (SessionSet::Tray, SessionSet::Decorate, SessionSet::Wizard).chain(),
            )
            .add_plugins((DataPlugin, TrayPlugin, DecorationPlugin, WizardPlugin));
    }
}

/// Run enough frames for queued events to be handled and the resulting
/// stage change to be applied.
pub fn settle(app: &mut App) {
    // Frame 1: Update systems read the events and set NextState.
    // Frame 2: StateTransition applies it.
    app.update();
    app.update();
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the presentation layer needs to draw the current frame.
/// Read-only: the only way to change the session is through the events.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub stage: WizardStage,
    pub narration: Narration,
    pub tray: Tray,
    pub decorations: DecorationOverlay,
    pub verdict: Option<BalanceVerdict>,
    pub offered_foods: Vec<FoodItem>,
    pub offered_stickers: Vec<StickerDef>,
    pub can_confirm: bool,
    pub can_redo_sides: bool,
}

impl SessionSnapshot {
    pub fn capture(world: &World) -> Self {
        let stage = *world.resource::<State<WizardStage>>().get();
        let tray = world.resource::<Tray>();
        let verdict = world.resource::<CurrentVerdict>().0.clone();
        let catalog = world.resource::<FoodCatalog>();
        let stickers = world.resource::<StickerCatalog>();
        let mascot = world.resource::<MascotName>();

        let guard = StageGuard::from_session(tray, verdict.as_ref());
        let offered_stickers = if stage.offers_stickers() {
            stickers.stickers.clone()
        } else {
            Vec::new()
        };

        Self {
            stage,
            narration: narrate(stage, verdict.as_ref(), &mascot.0),
            tray: tray.clone(),
            decorations: world.resource::<DecorationOverlay>().clone(),
            offered_foods: catalog
                .of_categories(stage.offered_categories())
                .cloned()
                .collect(),
            offered_stickers,
            can_confirm: next_stage(stage, WizardAction::Confirm, &guard).is_some(),
            can_redo_sides: next_stage(stage, WizardAction::RedoSides, &guard).is_some(),
            verdict,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
