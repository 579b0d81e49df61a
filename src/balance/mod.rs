//! Balance evaluation: does the meal have a vegetable, a meat/fish and a fruit?
//!
//! Only the four side slots are inspected. Rice and soup are never looked
//! at here; the wizard gates them at the ChooseRiceSoup stage.

use std::collections::BTreeSet;

use crate::shared::*;

/// Score the side dishes on `tray`. Pure: the same tray always gives the
/// same verdict.
pub fn evaluate(tray: &Tray) -> BalanceVerdict {
    let present: BTreeSet<FoodCategory> = tray.side_dishes().map(|f| f.category).collect();

    let missing: BTreeSet<FoodCategory> = FoodCategory::SIDE_DISH
        .into_iter()
        .filter(|category| !present.contains(category))
        .collect();

    BalanceVerdict {
        is_balanced: missing.is_empty(),
        missing,
    }
}

impl BalanceVerdict {
    /// Hint shown under an unbalanced result, e.g.
    /// "Oops, looks like the vegetable, fruit side dish is missing!".
    pub fn missing_message(&self) -> Option<String> {
        if self.is_balanced {
            return None;
        }
        let labels: Vec<&str> = self.missing.iter().map(|c| c.label()).collect();
        Some(format!(
            "Oops, looks like the {} side dish is missing!",
            labels.join(", ")
        ))
    }
}
