//! Wizard domain: the six-stage linear flow from greeting to verdict.
//!
//! Stage changes only ever happen here, through `WizardActionEvent`.

use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;
use crate::balance::evaluate;
use crate::shared::*;

pub mod narration;
pub mod transitions;

pub use narration::{confirm_label, narrate};
pub use transitions::{next_stage, StageGuard};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct WizardPlugin;

impl Plugin for WizardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_wizard_actions, log_stage_transitions)
                .chain()
                .in_set(SessionSet::Wizard),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Applies queued wizard actions in order, starting from the current stage.
///
/// Entering Result evaluates the tray; Restart empties the tray, the
/// stickers and the verdict. Only the final stage is handed to `NextState`.
pub fn handle_wizard_actions(
    mut actions: EventReader<WizardActionEvent>,
    stage: Res<State<WizardStage>>,
    mut next_state: ResMut<NextState<WizardStage>>,
    mut tray: ResMut<Tray>,
    mut overlay: ResMut<DecorationOverlay>,
    mut verdict: ResMut<CurrentVerdict>,
) {
    let mut current = *stage.get();
    let mut changed = false;

    for ev in actions.read() {
        let guard = StageGuard::from_session(&tray, verdict.0.as_ref());
        let Some(target) = next_stage(current, ev.action, &guard) else {
            debug!("[Wizard] {:?} not available during {:?}", ev.action, current);
            continue;
        };

        if ev.action == WizardAction::Restart {
            tray.reset();
            overlay.clear();
            verdict.0 = None;
            info!("[Wizard] Restarting with an empty tray");
        }

        if target == WizardStage::Result {
            let result = evaluate(&tray);
            if result.is_balanced {
                info!("[Wizard] Meal is balanced");
            } else {
                info!("[Wizard] Meal is unbalanced, missing {:?}", result.missing);
            }
            verdict.0 = Some(result);
        }

        current = target;
        changed = true;
    }

    if changed {
        next_state.set(current);
    }
}

pub fn log_stage_transitions(mut transitions: EventReader<StateTransitionEvent<WizardStage>>) {
    for ev in transitions.read() {
        info!("[Wizard] Stage {:?} -> {:?}", ev.exited, ev.entered);
    }
}
