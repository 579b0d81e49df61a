//! What the mascot says and how it looks at each stage.

use crate::shared::*;

pub fn narrate(stage: WizardStage, verdict: Option<&BalanceVerdict>, mascot: &str) -> Narration {
    let (mood, line) = match stage {
        WizardStage::Start => (
            MascotMood::Thinking,
            format!(
                "Hi! I'm {mascot} the squirrel. I've had no energy at all lately... \
                 Could you make me a tray full of good food so I can grow strong and healthy?"
            ),
        ),
        WizardStage::ChooseRiceSoup => (
            MascotMood::Normal,
            "First of all, I need warm rice and soup to fill my tummy!".to_string(),
        ),
        WizardStage::SidesIntro => (
            MascotMood::Normal,
            "Wow, that looks filling! Thank you! Now fill the tray with colourful side dishes. \
             The forest has lots of vegetables, meat and fruit. A bit of everything is best!"
                .to_string(),
        ),
        WizardStage::FillSides => (
            MascotMood::Normal,
            "Which side dishes will you pick? Just looking at them makes my mouth water!".to_string(),
        ),
        WizardStage::Decorate => (
            MascotMood::Happy,
            "Wow! That looks so tasty! Last of all, sprinkle some sparkly magic \
             to make the tray extra special!"
                .to_string(),
        ),
        WizardStage::Result => match verdict {
            Some(v) if v.is_balanced => (
                MascotMood::Happy,
                "Thank you! You're the best little chef! Your balanced meal filled me with energy. \
                 Now I'll be the healthiest squirrel in the forest!"
                    .to_string(),
            ),
            Some(v) => {
                let mut line = "It looks delicious! But... eating a bit of everything makes you \
                                stronger. Could you make the tray one more time?"
                    .to_string();
                if let Some(hint) = v.missing_message() {
                    line.push(' ');
                    line.push_str(&hint);
                }
                (MascotMood::Thinking, line)
            }
            None => (MascotMood::Normal, "Let's see what's on the tray...".to_string()),
        },
    };
    Narration { mood, line }
}

/// Caption of the stage's "continue" button, if the stage has one.
pub fn confirm_label(stage: WizardStage) -> Option<&'static str> {
    match stage {
        WizardStage::Start => Some("Okay, I'll help!"),
        WizardStage::ChooseRiceSoup => Some("Go pick side dishes"),
        WizardStage::SidesIntro => Some("Okay, let's find some!"),
        WizardStage::FillSides => Some("All done! Shall we decorate?"),
        WizardStage::Decorate => Some("Magic complete! Enjoy your meal!"),
        WizardStage::Result => None,
    }
}
