use crate::shared::*;

/// Everything outside the stage itself that a transition may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageGuard {
    /// Both the rice and the soup slot hold food.
    pub rice_and_soup_ready: bool,
    /// Verdict of the last evaluation, if the meal has been evaluated.
    pub meal_balanced: Option<bool>,
}

impl StageGuard {
    pub fn from_session(tray: &Tray, verdict: Option<&BalanceVerdict>) -> Self {
        Self {
            rice_and_soup_ready: tray.is_occupied(SlotId::Rice) && tray.is_occupied(SlotId::Soup),
            meal_balanced: verdict.map(|v| v.is_balanced),
        }
    }
}

/// The wizard's transition function. `None` means the action is not
/// available from `stage` (the button is disabled or absent).
///
/// ```text
/// Start → ChooseRiceSoup → SidesIntro → FillSides → Decorate → Result
///                 (rice & soup)                  ↑              │
///                                                └── RedoSides ─┘ (unbalanced only)
/// ```
pub fn next_stage(stage: WizardStage, action: WizardAction, guard: &StageGuard) -> Option<WizardStage> {
    match action {
        WizardAction::Restart => Some(WizardStage::Start),
        WizardAction::RedoSides => match (stage, guard.meal_balanced) {
            (WizardStage::Result, Some(false)) => Some(WizardStage::FillSides),
            _ => None,
        },
        WizardAction::Confirm => match stage {
            WizardStage::Start => Some(WizardStage::ChooseRiceSoup),
            WizardStage::ChooseRiceSoup if guard.rice_and_soup_ready => Some(WizardStage::SidesIntro),
            WizardStage::ChooseRiceSoup => None,
            WizardStage::SidesIntro => Some(WizardStage::FillSides),
            WizardStage::FillSides => Some(WizardStage::Decorate),
            WizardStage::Decorate => Some(WizardStage::Result),
            WizardStage::Result => None,
        },
    }
}
